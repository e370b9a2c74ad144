//! Bonsai - a procedural voxel bonsai generator

pub mod core;
pub mod voxel;
