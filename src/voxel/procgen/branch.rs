//! Branch growth and branch spawning
//!
//! A branch grows one step at a time: a few random horizontal nudges along its
//! direction, then one voxel up. Each tier has a growth budget; when it runs
//! out the branch continues one tier finer with budget `2^(tier-1)`, and tier 0
//! ends the branch in a canopy. Every `branch_cooldown` steps a new branch may
//! split off with probability `1/tier`, starting one tier finer than its parent.
//!
//! Growth runs on an explicit work-list. A spawned branch is pushed above its
//! parent's continuation, so it is grown to completion before the parent takes
//! its next step, which keeps the voxel order identical to a depth-first walk.

use std::collections::HashSet;

use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::voxel::adjacency::Occupancy;
use crate::voxel::procgen::canopy::grow_canopy;
use crate::voxel::procgen::params::{BonsaiParams, RespawnRule, MAX_TIERS};
use crate::voxel::procgen::random::RandomSource;
use crate::voxel::procgen::tree::Bonsai;

/// Neighbour count above which the collision guard aborts a growth step.
pub const TOUCHING_LIMIT: u32 = 2;

/// Horizontal growth bias of a branch, each component in `{-1, 0, 1}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Direction {
    pub x: i32,
    pub z: i32,
}

impl Direction {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Draw a uniform direction pair, x first.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let x = rng.below(3) as i32 - 1;
        let z = rng.below(3) as i32 - 1;
        Self { x, z }
    }

    /// Straight up, no horizontal bias.
    pub fn is_vertical(self) -> bool {
        self.x == 0 && self.z == 0
    }

    pub fn validate(self) -> Result<Self> {
        if (-1..=1).contains(&self.x) && (-1..=1).contains(&self.z) {
            Ok(self)
        } else {
            Err(Error::InvalidDirection { x: self.x, z: self.z })
        }
    }

    /// Direction for a branch splitting off this one, x axis drawn first.
    pub fn respawn<R: RandomSource + ?Sized>(self, rule: RespawnRule, rng: &mut R) -> Self {
        let x = respawn_axis(self.x, rule, rng);
        let z = respawn_axis(self.z, rule, rng);
        Self { x, z }
    }
}

/// New component for one axis of a spawned branch.
///
/// A zero component becomes `-1` or `1` (draw 0 or 1), so a branch that had
/// no bias on this axis always gains one. A non-zero component flips sign when
/// the draw is 1; on draw 0 it drops to zero under [`RespawnRule::ZeroOrFlip`]
/// and is kept under [`RespawnRule::KeepOrFlip`].
pub fn respawn_axis<R: RandomSource + ?Sized>(dir: i32, rule: RespawnRule, rng: &mut R) -> i32 {
    let flip = rng.below(2) == 1;
    match (dir, flip) {
        (0, false) => -1,
        (0, true) => 1,
        (d, true) => -d,
        (d, false) => match rule {
            RespawnRule::ZeroOrFlip => 0,
            RespawnRule::KeepOrFlip => d,
        },
    }
}

/// Growth budget handed to a fresh tier: `2^(tier-1)`.
pub fn tier_budget(tier: i32) -> i32 {
    debug_assert!((1..=MAX_TIERS).contains(&tier));
    1 << (tier - 1)
}

/// One pending unit of branch growth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchFrame {
    /// Current tip of the branch
    pub pos: IVec3,
    /// Steps left in this tier
    pub growth: i32,
    pub tier: i32,
    pub direction: Direction,
}

impl BranchFrame {
    pub fn new(pos: IVec3, growth: i32, tier: i32, direction: Direction) -> Self {
        Self { pos, growth, tier, direction }
    }

    /// The trunk frame described by `params`.
    pub fn trunk(params: &BonsaiParams, direction: Direction) -> Self {
        Self::new(params.root, params.growth, params.tiers, direction)
    }

    pub fn validate(&self) -> Result<()> {
        if self.growth < 0 {
            return Err(Error::InvalidParams(format!(
                "growth must be non-negative, got {}",
                self.growth
            )));
        }
        if !(0..=MAX_TIERS).contains(&self.tier) {
            return Err(Error::InvalidParams(format!(
                "tier must be in 0..={}, got {}",
                MAX_TIERS, self.tier
            )));
        }
        self.direction.validate()?;
        Ok(())
    }

    /// Same branch, one tier finer, with a fresh budget.
    fn descend(self, direction: Direction) -> Self {
        Self {
            growth: tier_budget(self.tier),
            tier: self.tier - 1,
            direction,
            ..self
        }
    }
}

/// Counters collected while growing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BranchStats {
    /// Completed growth steps (each ends with one upward voxel)
    pub steps: u32,
    /// Branches split off
    pub spawned: u32,
    /// Canopies grown at tier 0
    pub canopies: u32,
    /// Growth steps cut short by the collision guard
    pub aborted: u32,
}

/// Grow the branch described by `start`, appending to `bonsai.branches` and
/// `bonsai.leaves`.
pub fn grow_branch<R: RandomSource + ?Sized>(
    bonsai: &mut Bonsai,
    rng: &mut R,
    params: &BonsaiParams,
    start: BranchFrame,
) -> Result<BranchStats> {
    params.validate()?;
    start.validate()?;

    let mut grower = BranchGrower::new(bonsai, params);
    grower.run(rng, start)?;

    log::debug!(
        "Grew branch from {:?}: {} steps, {} spawned, {} canopies, {} aborted",
        start.pos,
        grower.stats.steps,
        grower.stats.spawned,
        grower.stats.canopies,
        grower.stats.aborted
    );
    Ok(grower.stats)
}

struct BranchGrower<'a> {
    bonsai: &'a mut Bonsai,
    params: &'a BonsaiParams,
    /// Hashed mirror of `bonsai.branches`, only kept while the guard is on
    occupancy: Option<HashSet<IVec3>>,
    pending: Vec<BranchFrame>,
    stats: BranchStats,
}

impl<'a> BranchGrower<'a> {
    fn new(bonsai: &'a mut Bonsai, params: &'a BonsaiParams) -> Self {
        let occupancy = params
            .collision_guard
            .then(|| bonsai.branches.iter().copied().collect());
        Self {
            bonsai,
            params,
            occupancy,
            pending: Vec::new(),
            stats: BranchStats::default(),
        }
    }

    fn run<R: RandomSource + ?Sized>(&mut self, rng: &mut R, start: BranchFrame) -> Result<()> {
        self.pending.push(start);
        while let Some(frame) = self.pending.pop() {
            self.advance(rng, frame)?;
        }
        Ok(())
    }

    fn advance<R: RandomSource + ?Sized>(&mut self, rng: &mut R, frame: BranchFrame) -> Result<()> {
        if frame.tier == 0 {
            grow_canopy(
                &mut self.bonsai.leaves,
                rng,
                frame.pos,
                self.params.leaf_height,
                self.params.leaf_radius,
            )?;
            self.stats.canopies += 1;
            return Ok(());
        }

        if frame.growth == 0 {
            self.pending.push(frame.descend(frame.direction));
            return Ok(());
        }

        let Some(tip) = self.step(rng, frame) else {
            self.stats.aborted += 1;
            return Ok(());
        };
        self.stats.steps += 1;

        let spawned = if frame.growth % self.params.branch_cooldown == 0
            && rng.below(frame.tier as u32) == 0
        {
            let direction = frame.direction.respawn(self.params.respawn_rule, rng);
            (!direction.is_vertical())
                .then(|| BranchFrame { pos: tip, ..frame }.descend(direction))
        } else {
            None
        };

        self.pending.push(BranchFrame {
            pos: tip,
            growth: frame.growth - 1,
            ..frame
        });
        if let Some(branch) = spawned {
            self.stats.spawned += 1;
            self.pending.push(branch);
        }
        Ok(())
    }

    /// One growth step. Returns the new tip, or `None` if the guard fired.
    fn step<R: RandomSource + ?Sized>(&mut self, rng: &mut R, frame: BranchFrame) -> Option<IVec3> {
        let mut pos = frame.pos;
        for _ in 0..self.params.max_xz_growth {
            if rng.coin() {
                pos.x += frame.direction.x * rng.below(2) as i32;
            } else {
                pos.z += frame.direction.z * rng.below(2) as i32;
            }
            if let Some(occupancy) = &self.occupancy {
                if occupancy.touching_count(pos) > TOUCHING_LIMIT {
                    return None;
                }
            }
            self.push(pos);
        }

        pos += IVec3::Y;
        self.push(pos);
        Some(pos)
    }

    fn push(&mut self, pos: IVec3) {
        self.bonsai.branches.push(pos);
        if let Some(occupancy) = &mut self.occupancy {
            occupancy.insert(pos);
        }
    }
}
