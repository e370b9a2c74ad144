//! Procedural voxel bonsai generation
//!
//! Builds a stylised bonsai as four lists of lattice positions:
//! - Branches: a tiered trunk/branch skeleton that thins toward the canopy
//! - Leaves: a tapering leaf dome above every terminal branch tip
//! - Pot: a curved pot below the root plane
//! - Soil: a flat disk filling the top of the pot
//!
//! The result depends only on the parameters and the random draws, so a
//! seeded source reproduces a tree exactly.

use glam::IVec3;

use crate::core::Result;
use crate::voxel::procgen::branch::{grow_branch, BranchFrame, BranchStats, Direction};
use crate::voxel::procgen::container::{grow_pot, grow_soil};
use crate::voxel::procgen::params::BonsaiParams;
use crate::voxel::procgen::random::RandomSource;

/// Which collection a voxel belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoxelKind {
    Branch,
    Leaf,
    Pot,
    Soil,
}

impl VoxelKind {
    pub const ALL: [VoxelKind; 4] = [
        VoxelKind::Branch,
        VoxelKind::Leaf,
        VoxelKind::Pot,
        VoxelKind::Soil,
    ];
}

/// A generated bonsai
///
/// Positions are in generation order and may repeat; a renderer draws one
/// unit cube per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bonsai {
    /// Initial trunk direction
    pub direction: Direction,
    pub branches: Vec<IVec3>,
    pub leaves: Vec<IVec3>,
    pub pot: Vec<IVec3>,
    pub soil: Vec<IVec3>,
}

impl Bonsai {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positions(&self, kind: VoxelKind) -> &[IVec3] {
        match kind {
            VoxelKind::Branch => &self.branches,
            VoxelKind::Leaf => &self.leaves,
            VoxelKind::Pot => &self.pot,
            VoxelKind::Soil => &self.soil,
        }
    }

    /// Total voxel count across all collections
    pub fn len(&self) -> usize {
        self.branches.len() + self.leaves.len() + self.pot.len() + self.soil.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every voxel tagged with its kind: branches, then leaves, pot and soil.
    ///
    /// Staged renderers reveal voxels in this order, one more per frame.
    pub fn voxels(&self) -> impl Iterator<Item = (VoxelKind, IVec3)> + '_ {
        VoxelKind::ALL
            .into_iter()
            .flat_map(move |kind| self.positions(kind).iter().map(move |&pos| (kind, pos)))
    }

    /// Inclusive lattice bounding box, or `None` for an empty bonsai
    pub fn bounds(&self) -> Option<(IVec3, IVec3)> {
        self.voxels().map(|(_, pos)| pos).fold(None, |acc, pos| match acc {
            None => Some((pos, pos)),
            Some((min, max)) => Some((min.min(pos), max.max(pos))),
        })
    }
}

/// Procedural bonsai generator
#[derive(Debug, Clone, Default)]
pub struct BonsaiGenerator {
    params: BonsaiParams,
}

impl BonsaiGenerator {
    /// Create a generator with the classic preset
    pub fn new() -> Self {
        Self::default()
    }

    /// Create generator with specific parameters
    pub fn with_params(params: BonsaiParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BonsaiParams {
        &self.params
    }

    /// Generate a bonsai, drawing the initial trunk direction from `rng`.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Bonsai> {
        self.params.validate()?;
        let direction = Direction::random(rng);
        self.generate_with_direction(rng, direction)
    }

    /// Generate a bonsai whose trunk starts growing along `direction`.
    pub fn generate_with_direction<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        direction: Direction,
    ) -> Result<Bonsai> {
        self.params.validate()?;
        direction.validate()?;

        let mut bonsai = Bonsai {
            direction,
            ..Bonsai::default()
        };

        let trunk = BranchFrame::trunk(&self.params, direction);
        let stats: BranchStats = grow_branch(&mut bonsai, rng, &self.params, trunk)?;

        // Pot and soil hang off the plane just below the root
        let base = self.params.root - IVec3::Y;
        grow_pot(&mut bonsai.pot, base, 0, self.params.max_pot_depth)?;
        grow_soil(&mut bonsai.soil, base, self.params.soil_radius)?;

        log::info!(
            "Generated bonsai at {:?} heading ({}, {}): {} branch, {} leaf, {} pot, {} soil voxels ({} branches spawned)",
            self.params.root,
            direction.x,
            direction.z,
            bonsai.branches.len(),
            bonsai.leaves.len(),
            bonsai.pot.len(),
            bonsai.soil.len(),
            stats.spawned
        );

        Ok(bonsai)
    }
}
