//! Canopy generation
//!
//! A canopy is a stack of leaf disks above a branch tip. Each layer sits one
//! voxel higher than the last and is two voxels narrower; within a layer a
//! leaf at offset `(x, z)` survives with probability `1 / (|x| + |z|)`.

use glam::IVec3;

use crate::core::{Error, Result};
use crate::voxel::procgen::params::MAX_RADIUS;
use crate::voxel::procgen::random::RandomSource;

/// Radius lost per canopy layer.
pub const CANOPY_TAPER: i32 = 2;

/// Grow `height` leaf layers above `pos`, starting at `radius`.
///
/// Layer `k` is centred on `pos + (0, k, 0)` and its leaves are placed one
/// voxel above that centre. The trunk axis itself never gets a leaf. Layers
/// whose radius has shrunk below zero are empty, so growth stops there.
pub fn grow_canopy<R: RandomSource + ?Sized>(
    leaves: &mut Vec<IVec3>,
    rng: &mut R,
    pos: IVec3,
    height: i32,
    radius: i32,
) -> Result<()> {
    if height < 0 {
        return Err(Error::InvalidParams(format!(
            "canopy height must be non-negative, got {}",
            height
        )));
    }
    if radius > MAX_RADIUS {
        return Err(Error::InvalidParams(format!(
            "canopy radius must be at most {}, got {}",
            MAX_RADIUS, radius
        )));
    }

    let mut center = pos;
    let mut radius = radius;
    for _ in 0..height {
        if radius < 0 {
            break;
        }
        let limit = (radius as i64).pow(2);
        for x in -radius..=radius {
            for z in -radius..=radius {
                let dist = (x as i64).pow(2) + (z as i64).pow(2);
                if dist > limit || (x == 0 && z == 0) {
                    continue;
                }
                let manhattan = (x.abs() + z.abs()) as u32;
                if rng.below(manhattan) == 0 {
                    leaves.push(center + IVec3::new(x, 1, z));
                }
            }
        }
        center += IVec3::Y;
        radius -= CANOPY_TAPER;
    }
    Ok(())
}
