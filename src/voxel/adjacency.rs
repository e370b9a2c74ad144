//! Occupancy queries over voxel position collections
//!
//! `touching_count` checks five of the six face neighbours: both x
//! directions, up, and both z directions. The downward neighbour is never
//! checked, so a voxel sitting directly on top of a branch does not count it.

use std::collections::HashSet;

use glam::IVec3;

/// Neighbour offsets inspected by [`touching_count`]. No `-Y` entry.
pub const TOUCHING_OFFSETS: [IVec3; 5] = [
    IVec3::new(1, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
];

/// A collection that can answer "is this lattice point taken?"
pub trait Occupancy {
    fn occupied(&self, pos: IVec3) -> bool;

    /// Number of [`TOUCHING_OFFSETS`] neighbours of `pos` that are occupied.
    fn touching_count(&self, pos: IVec3) -> u32 {
        TOUCHING_OFFSETS
            .iter()
            .filter(|&&offset| self.occupied(pos + offset))
            .count() as u32
    }
}

/// Linear scan, matching the append-only position lists.
impl Occupancy for [IVec3] {
    fn occupied(&self, pos: IVec3) -> bool {
        self.contains(&pos)
    }
}

impl Occupancy for Vec<IVec3> {
    fn occupied(&self, pos: IVec3) -> bool {
        self.as_slice().occupied(pos)
    }
}

impl Occupancy for HashSet<IVec3> {
    fn occupied(&self, pos: IVec3) -> bool {
        self.contains(&pos)
    }
}

/// True iff `pos` is present in `set`.
pub fn occupied<S: Occupancy + ?Sized>(set: &S, pos: IVec3) -> bool {
    set.occupied(pos)
}

/// Count of occupied neighbours among [`TOUCHING_OFFSETS`], always in `0..=5`.
pub fn touching_count<S: Occupancy + ?Sized>(set: &S, pos: IVec3) -> u32 {
    set.touching_count(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupied() {
        let set = vec![IVec3::new(1, 2, 3), IVec3::ZERO];
        assert!(occupied(&set, IVec3::ZERO));
        assert!(occupied(set.as_slice(), IVec3::new(1, 2, 3)));
        assert!(!occupied(&set, IVec3::new(3, 2, 1)));

        let empty: Vec<IVec3> = Vec::new();
        assert!(!occupied(&empty, IVec3::ZERO));
    }

    #[test]
    fn test_touching_count_ignores_below() {
        let pos = IVec3::new(5, 5, 5);
        let below = vec![pos - IVec3::Y];
        assert_eq!(touching_count(&below, pos), 0);

        let above = vec![pos + IVec3::Y];
        assert_eq!(touching_count(&above, pos), 1);
    }

    #[test]
    fn test_touching_count_all_six_neighbours() {
        let pos = IVec3::new(-2, 0, 4);
        let mut set: Vec<IVec3> = TOUCHING_OFFSETS.iter().map(|&o| pos + o).collect();
        set.push(pos - IVec3::Y);
        set.push(pos);
        assert_eq!(touching_count(&set, pos), 5);
    }

    #[test]
    fn test_touching_count_counts_each_offset_once() {
        let pos = IVec3::ZERO;
        // Duplicates of the same neighbour still count once
        let set = vec![IVec3::X, IVec3::X, IVec3::Z, IVec3::new(2, 0, 0)];
        assert_eq!(touching_count(&set, pos), 2);
    }

    #[test]
    fn test_hashed_and_linear_agree() {
        let list = vec![
            IVec3::new(0, 0, 0),
            IVec3::new(1, 0, 0),
            IVec3::new(1, 1, 0),
            IVec3::new(0, 1, 1),
            IVec3::new(-1, 1, 0),
        ];
        let hashed: HashSet<IVec3> = list.iter().copied().collect();
        for x in -2..=2 {
            for y in -1..=2 {
                for z in -2..=2 {
                    let pos = IVec3::new(x, y, z);
                    assert_eq!(occupied(&list, pos), occupied(&hashed, pos));
                    let count = touching_count(&list, pos);
                    assert_eq!(count, touching_count(&hashed, pos));
                    assert!(count <= 5);
                }
            }
        }
    }
}
