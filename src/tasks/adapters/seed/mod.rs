//! Seed source adapters.

mod json_file;
mod static_seed;

pub use json_file::JsonSeedFile;
pub use static_seed::StaticSeed;
