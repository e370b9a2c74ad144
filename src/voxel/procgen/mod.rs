//! Procedural bonsai generation

pub mod random;
pub mod params;
pub mod branch;
pub mod canopy;
pub mod container;
pub mod tree;

pub use branch::{grow_branch, BranchFrame, BranchStats, Direction};
pub use canopy::grow_canopy;
pub use container::{grow_pot, grow_soil, pot_radius};
pub use params::{BonsaiParams, RespawnRule};
pub use random::{RandomSource, SeededRng, SequenceRng};
pub use tree::{Bonsai, BonsaiGenerator, VoxelKind};
