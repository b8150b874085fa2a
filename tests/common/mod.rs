//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("drlboard.ini");
    fs::write(&path, content).unwrap();
    path
}

pub fn sample_config() -> &'static str {
    "[dashboard]\n\
     title = Integration Run\n\
     \n\
     [series]\n\
     initial_capital = 20000000\n\
     periods = 12\n\
     rng_seed = 7\n"
}
