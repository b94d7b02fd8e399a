use proptest::prelude::*;
use tenleg_basic::prelude::*;
use tenleg_core::prelude::*;

fn counter() -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        i += 1;
        (i - 1) as f64
    }
}

#[test]
fn up_down_left_scenario() {
    let legs = LegRegistry::with_catalog();
    let up = legs.leg_from_name("Up");
    let down = legs.leg_from_name("Down");
    let left = legs.leg_from_name("Left");

    let mut t = Tensor::<f64>::new(vec![2, 3, 4], vec![up, down, left]).unwrap();
    t.generate(counter());

    assert_eq!(*t.get_by_legs(&lm![up => 1, down => 2, left => 3]).unwrap(), 23.0);
    for i in 0..2 {
        for j in 0..3 {
            for k in 0..4 {
                assert_eq!(t[&lm![up => i, down => j, left => k]], t[[i, j, k]]);
                assert_eq!(t[[i, j, k]], (i * 12 + j * 4 + k) as f64);
            }
        }
    }

    let names: Vec<_> = t.legs().iter().map(|&l| legs.display_name(l)).collect();
    assert_eq!(names, ["Up", "Down", "Left"]);
}

#[test]
fn missing_leg_is_reported_by_name() {
    let legs = LegRegistry::new();
    let a = legs.leg_from_name("a");
    let b = legs.leg_from_name("b");
    let t = Tensor::<i32>::zeros(vec![2, 2], vec![a, b]).unwrap();
    match t.get_by_legs(&lm![a => 0]) {
        Err(TensorError::UnknownLeg(leg)) => assert_eq!(legs.display_name(leg), "b"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn direct_id_legs_address_tensors() {
    let legs = LegRegistry::new();
    let site = legs.leg_from_name("Site");
    let aux = Leg::from_id(1000);
    let mut t = Tensor::<u8>::new(vec![3, 2], vec![site, aux]).unwrap();
    t[&lm![aux => 1, site => 2]] = 9;
    assert_eq!(t.data()[5], 9);
    assert_eq!(legs.display_name(aux), "UserDefinedLeg1000");
}

#[test]
fn repeated_leg_reads_the_diagonal() {
    let legs = LegRegistry::with_catalog();
    let up = legs.leg_from_name("Up");
    let mut t = Tensor::<f64>::new(vec![2, 2], vec![up, up]).unwrap();
    t.generate(counter());

    assert_eq!(t.position_of(&lm![up => 1]), Ok(vec![1, 1]));
    assert_eq!(t[&lm![up => 0]], 0.0);
    assert_eq!(t[&lm![up => 1]], 3.0);
    t[&lm![up => 1]] = -1.0;
    assert_eq!(t.data(), &[0.0, 1.0, 2.0, -1.0]);
    assert_eq!(t.require_unique_legs(), Err(TensorError::DuplicateLeg(up)));
}

proptest! {
    #[test]
    fn interning_idempotent_and_distinct(a in "[A-Za-z][A-Za-z0-9]{0,8}", b in "[A-Za-z][A-Za-z0-9]{0,8}") {
        let legs = LegRegistry::new();
        let la = legs.leg_from_name(&a);
        prop_assert_eq!(legs.leg_from_name(&a), la);
        let lb = legs.leg_from_name(&b);
        prop_assert_eq!(a == b, la == lb);
        prop_assert_eq!(legs.len(), if a == b { 1 } else { 2 });
        prop_assert_eq!(legs.display_name(la), a);
        prop_assert_eq!(legs.display_name(lb), b);
    }

    #[test]
    fn unregistered_ids_get_placeholder(id in 0i32..10_000) {
        let legs = LegRegistry::new();
        let name = legs.display_name(Leg::from_id(id));
        prop_assert!(name.contains(&id.to_string()));
        prop_assert!(name.starts_with("UserDefinedLeg"));
    }
}
