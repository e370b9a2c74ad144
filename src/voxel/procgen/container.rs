//! Pot and soil generation
//!
//! The pot is a stack of filled disks below the root plane whose radius follows
//! a fixed quadratic in the layer height. The soil is a single disk at the top
//! of the pot. Neither uses randomness.

use glam::IVec3;

use crate::core::{Error, Result};
use crate::voxel::procgen::params::{MAX_POT_LAYERS, MAX_RADIUS};

/// Pot radius for a layer `layer_y` units above the root plane (negative below).
///
/// `-0.5 * (y - 1) * (y + 6)`; the product of two integers seven apart is always
/// even, so the halving is exact. Evaluated in `i64` and saturated, so any
/// height is accepted.
pub fn pot_radius(layer_y: i32) -> i32 {
    let y = layer_y as i64;
    let radius = -((y - 1) * (y + 6)) / 2;
    radius.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Height of pot layer `depth` relative to the root plane.
pub fn pot_layer_height(depth: i32) -> i32 {
    -(depth + 1)
}

/// Append every lattice point `(x, 0, z)` with `x² + z² <= radius²` around
/// `center`, row by row in ascending x then z. A negative radius adds nothing.
pub fn fill_disk(out: &mut Vec<IVec3>, center: IVec3, radius: i32) {
    let limit = (radius as i64).pow(2);
    for x in -radius..=radius {
        for z in -radius..=radius {
            if (x as i64).pow(2) + (z as i64).pow(2) <= limit {
                out.push(center + IVec3::new(x, 0, z));
            }
        }
    }
}

/// Grow pot layers from `pos` downward, starting at layer `depth`, until
/// `max_depth` layers exist.
///
/// `pos` is the position of layer `depth`; the radius of each layer comes from
/// [`pot_radius`] at [`pot_layer_height`]`(depth)`.
pub fn grow_pot(pot: &mut Vec<IVec3>, pos: IVec3, depth: i32, max_depth: i32) -> Result<()> {
    if depth < 0 || !(0..=MAX_POT_LAYERS).contains(&max_depth) {
        return Err(Error::InvalidParams(format!(
            "pot depth must be in 0..={}, got depth {} of {}",
            MAX_POT_LAYERS, depth, max_depth
        )));
    }

    let mut layer = pos;
    for d in depth..max_depth {
        fill_disk(pot, layer, pot_radius(pot_layer_height(d)));
        layer -= IVec3::Y;
    }
    Ok(())
}

/// Fill the soil disk at `pos`.
pub fn grow_soil(soil: &mut Vec<IVec3>, pos: IVec3, radius: i32) -> Result<()> {
    if !(0..=MAX_RADIUS).contains(&radius) {
        return Err(Error::InvalidParams(format!(
            "soil radius must be in 0..={}, got {}",
            MAX_RADIUS, radius
        )));
    }
    fill_disk(soil, pos, radius);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pot_radius_profile() {
        assert_eq!(pot_radius(-1), 5);
        assert_eq!(pot_radius(-2), 6);
        assert_eq!(pot_radius(-3), 6);
        assert_eq!(pot_radius(-4), 5);
        assert_eq!(pot_radius(-5), 3);
        assert_eq!(pot_radius(-6), 0);
    }

    #[test]
    fn test_pot_radius_matches_float_formula() {
        for y in -6..=1 {
            let expected = (-0.5 * ((y - 1) * (y + 6)) as f64).round() as i32;
            assert_eq!(pot_radius(y), expected, "layer {}", y);
        }
    }

    #[test]
    fn test_pot_radius_bounded_for_default_depth() {
        for depth in 0..crate::voxel::procgen::params::MAX_POT_DEPTH {
            let r = pot_radius(pot_layer_height(depth));
            assert!((0..=6).contains(&r), "depth {} radius {}", depth, r);
        }
    }

    #[test]
    fn test_fill_disk_radius_zero_and_negative() {
        let mut out = Vec::new();
        fill_disk(&mut out, IVec3::new(1, 2, 3), 0);
        assert_eq!(out, vec![IVec3::new(1, 2, 3)]);

        let mut out = Vec::new();
        fill_disk(&mut out, IVec3::ZERO, -2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_soil_radius_three() {
        let mut soil = Vec::new();
        grow_soil(&mut soil, IVec3::new(0, -1, 0), 3).unwrap();
        assert_eq!(soil.len(), 29);

        let unique: HashSet<IVec3> = soil.iter().copied().collect();
        assert_eq!(unique.len(), 29);

        let mut expected = HashSet::new();
        for x in -3..=3 {
            for z in -3..=3 {
                if x * x + z * z <= 9 {
                    expected.insert(IVec3::new(x, -1, z));
                }
            }
        }
        assert_eq!(unique, expected);
    }

    #[test]
    fn test_soil_rejects_negative_radius() {
        let mut soil = Vec::new();
        assert!(grow_soil(&mut soil, IVec3::ZERO, -1).is_err());
        assert!(soil.is_empty());
    }

    #[test]
    fn test_pot_layers() {
        let mut pot = Vec::new();
        grow_pot(&mut pot, IVec3::new(0, -1, 0), 0, 4).unwrap();

        let layer_counts: Vec<usize> = (1..=4)
            .map(|d| pot.iter().filter(|p| p.y == -d).count())
            .collect();
        // Disk sizes for radii 5, 6, 6, 5
        assert_eq!(layer_counts, vec![81, 113, 113, 81]);
        assert!(pot.iter().all(|p| p.y <= -1 && p.y >= -4));
        for p in &pot {
            let r = pot_radius(p.y);
            assert!(p.x * p.x + p.z * p.z <= r * r);
        }
    }

    #[test]
    fn test_pot_radius_saturates_far_below() {
        // Depth 50 000 overflows the quadratic in i32
        assert_eq!(pot_radius(pot_layer_height(50_000)), -1_249_924_995);
        assert_eq!(pot_radius(pot_layer_height(100_000)), i32::MIN);
        assert_eq!(pot_radius(-7), -4);
    }

    #[test]
    fn test_oversized_soil_and_pot_rejected() {
        let mut soil = Vec::new();
        assert!(matches!(
            grow_soil(&mut soil, IVec3::ZERO, 46_341),
            Err(Error::InvalidParams(_))
        ));
        assert!(soil.is_empty());

        let mut pot = Vec::new();
        assert!(grow_pot(&mut pot, IVec3::ZERO, 0, 50_000).is_err());
        assert!(pot.is_empty());
    }

    #[test]
    fn test_deep_pot_has_empty_bottom_layers() {
        let mut shallow = Vec::new();
        grow_pot(&mut shallow, IVec3::new(0, -1, 0), 0, 6).unwrap();
        let mut deep = Vec::new();
        grow_pot(&mut deep, IVec3::new(0, -1, 0), 0, MAX_POT_LAYERS).unwrap();
        // Radius 0 at depth 5, negative from depth 6 on
        assert_eq!(deep, shallow);
    }

    #[test]
    fn test_pot_terminal_depth() {
        let mut pot = Vec::new();
        grow_pot(&mut pot, IVec3::new(0, -1, 0), 4, 4).unwrap();
        assert!(pot.is_empty());

        assert!(grow_pot(&mut pot, IVec3::ZERO, -1, 4).is_err());
    }

    #[test]
    fn test_pot_follows_root_offset() {
        let mut at_origin = Vec::new();
        grow_pot(&mut at_origin, IVec3::new(0, -1, 0), 0, 4).unwrap();

        let offset = IVec3::new(10, 20, -5);
        let mut shifted = Vec::new();
        grow_pot(&mut shifted, IVec3::new(0, -1, 0) + offset, 0, 4).unwrap();

        let moved: Vec<IVec3> = at_origin.iter().map(|&p| p + offset).collect();
        assert_eq!(moved, shifted);
    }
}
