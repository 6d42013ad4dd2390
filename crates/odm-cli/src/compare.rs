//! The cross-territory comparison rollup.

use odm_sim::generate_comparison;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{print_json, GeneratorOptions};

/// `odm compare` — one rollup row per active territory.
pub fn compare(opts: GeneratorOptions) -> anyhow::Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(opts.seed);
    let rows = generate_comparison(odm_catalog::territories(), &opts.tunables, &mut rng)?;
    print_json(&rows)
}
