//! Voxel data structures and operations

pub mod adjacency;
pub mod procgen;
pub mod bonsai_data;

pub use adjacency::{occupied, touching_count, Occupancy};
pub use bonsai_data::BonsaiData;
pub use procgen::{Bonsai, BonsaiGenerator, BonsaiParams, Direction, VoxelKind};
