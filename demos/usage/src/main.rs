use tenleg_basic::registry::LegRegistry;
use tenleg_core::{error::TensorError, lm, tensor::Tensor};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TensorError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let legs = LegRegistry::global();
    let up = legs.leg_from_name("Up");
    let down = legs.leg_from_name("Down");
    let left = legs.leg_from_name("Left");

    let mut t = Tensor::<f64>::new(vec![2, 3, 4], vec![up, down, left])?;
    let mut i = 0.0;
    t.generate(|| {
        let v = i;
        i += 1.0;
        v
    });
    info!(
        legs = ?t.legs().iter().map(|&l| legs.display_name(l)).collect::<Vec<_>>(),
        dims = ?t.dims(),
        "generated tensor"
    );

    for i in 0..t.dims()[0] {
        for j in 0..t.dims()[1] {
            for k in 0..t.dims()[2] {
                print!("{} ", t.get_by_legs(&lm![up => i, down => j, left => k])?);
            }
            print!(", ");
        }
        println!();
    }
    Ok(())
}
