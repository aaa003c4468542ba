//! Generate command - fresh identifiers for test data

use rand::SeedableRng;
use rand::rngs::StdRng;

use elfproef::core::checksum::generate_with;
use elfproef::output::{GenerateResult, OutputMode};

/// Generate `count` identifiers, reproducibly when a seed is given
pub fn generate(count: usize, seed: Option<u64>, mode: OutputMode) -> anyhow::Result<()> {
    let identifiers = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count).map(|_| generate_with(&mut rng)).collect()
        },
        None => {
            let mut rng = rand::thread_rng();
            (0..count).map(|_| generate_with(&mut rng)).collect()
        },
    };

    GenerateResult { identifiers }.render(mode);
    Ok(())
}
