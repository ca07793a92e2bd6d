//! Random terrain generation for skyroute: elevations, no-fly zones, and
//! start/goal placement.

pub mod mapgen;

pub use mapgen::{TerrainGen, TerrainParams};
