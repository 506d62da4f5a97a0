//! Randomized request batches.
//!
//! Every trial owns its own generator, seeded deterministically from the
//! base seed and the trial coordinates, so trials stay independent and a
//! whole run is reproducible from one number.

use crate::config::geometry::DriveGeometry;
use crate::engine::request::Request;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Derives the seed for one trial. SplitMix-style finalizer over the base
/// seed and the trial coordinates; nearby coordinates land far apart in the
/// output space.
pub fn trial_seed(base_seed: u64, load: usize, trial: usize) -> u64 {
    let mut x = base_seed ^ ((load as u64) << 32) ^ trial as u64;
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Uniform random batch of `count` requests within the drive bounds.
pub fn generate_batch(geometry: &DriveGeometry, count: usize, seed: u64) -> Vec<Request> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Request::new(
                rng.gen_range(0..geometry.tracks),
                rng.gen_range(0..geometry.sectors),
            )
        })
        .collect()
}
