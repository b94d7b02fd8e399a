use proptest::prelude::*;
use tenleg_core::prelude::*;

fn tensor_for(dims: &[usize]) -> Tensor<usize> {
    let legs = (0..dims.len() as i32).map(Leg::from_id).collect();
    let mut t = Tensor::new(dims.to_vec(), legs).unwrap();
    let mut next = 0;
    t.generate(|| {
        next += 1;
        next - 1
    });
    t
}

proptest! {
    #[test]
    fn flat_index_matches_generate_order(
        (dims, position) in prop::collection::vec(1usize..5, 0..5).prop_flat_map(|dims| {
            let position: Vec<_> = dims.iter().map(|&d| 0..d).collect();
            (Just(dims), position)
        })
    ) {
        let t = tensor_for(&dims);
        let idx = t.index_of(&position).unwrap();
        prop_assert!(idx < t.size());
        prop_assert_eq!(idx, unsafe { t.index_of_unchecked(&position) });
        prop_assert_eq!(*t.get(&position).unwrap(), idx);

        let coords: Vec<(Leg, usize)> = t.legs().iter().copied().zip(position.iter().copied()).rev().collect();
        prop_assert_eq!(t.get_by_legs(coords.as_slice()).unwrap(), t.get(&position).unwrap());
    }

    #[test]
    fn out_of_range_is_rejected(dims in prop::collection::vec(1usize..5, 1..5), axis in 0usize..4) {
        let t = tensor_for(&dims);
        let axis = axis % dims.len();
        let mut position = vec![0; dims.len()];
        position[axis] = dims[axis];
        prop_assert_eq!(
            t.index_of(&position),
            Err(TensorError::IndexOutOfRange { axis, index: dims[axis], extent: dims[axis] })
        );
    }
}
