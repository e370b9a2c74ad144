//! Bonsai generation parameters and presets

use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Vertical growth budget of the trunk tier.
pub const Y_GROWTH: i32 = 8;
/// Number of branch tiers below the trunk.
pub const BRANCH_TIERS: i32 = 4;
/// Horizontal micro-movements per growth step.
pub const MAX_XZ_GROWTH: i32 = 3;
/// Growth steps between branch spawn checks.
pub const BRANCH_COOLDOWN: i32 = 2;
/// Layers in the pot.
pub const MAX_POT_DEPTH: i32 = 4;
/// Radius of the soil disk.
pub const POT_RADIUS: i32 = 3;
/// Canopy layers above each branch tip.
pub const LEAF_HEIGHT: i32 = 3;
/// Radius of the lowest canopy layer.
pub const LEAF_RADIUS: i32 = 6;

/// Largest tier count whose `2^(tier-1)` growth budget fits in an `i32`.
pub const MAX_TIERS: i32 = 31;
/// Largest accepted leaf or soil radius.
pub const MAX_RADIUS: i32 = 4096;
/// Largest accepted pot layer count. Layers below depth 6 are empty anyway.
pub const MAX_POT_LAYERS: i32 = 64;

/// How a spawned branch derives each non-zero direction component.
///
/// A zero component always becomes -1 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RespawnRule {
    /// Draw 1 flips the sign, draw 0 drops the component to zero. Both axes
    /// dropping leaves a vertical direction, and no branch is spawned.
    #[default]
    ZeroOrFlip,
    /// Draw 1 flips the sign, draw 0 keeps it. Never yields a vertical direction.
    KeepOrFlip,
}

/// Parameters for bonsai generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonsaiParams {
    /// Lattice position of the trunk base
    pub root: IVec3,
    /// Growth budget of the trunk tier
    pub growth: i32,
    /// Tier count; tier 0 is the canopy
    pub tiers: i32,
    /// Horizontal micro-movements per growth step
    pub max_xz_growth: i32,
    /// Spawn checks only run when `growth % branch_cooldown == 0`
    pub branch_cooldown: i32,
    /// Abort a growth step when a micro-movement lands next to three or more
    /// existing branch voxels
    pub collision_guard: bool,
    /// Direction rule for spawned branches
    pub respawn_rule: RespawnRule,
    /// Canopy layer count
    pub leaf_height: i32,
    /// Radius of the lowest canopy layer (shrinks by 2 per layer)
    pub leaf_radius: i32,
    /// Pot layer count
    pub max_pot_depth: i32,
    /// Soil disk radius
    pub soil_radius: i32,
}

impl Default for BonsaiParams {
    fn default() -> Self {
        Self::classic()
    }
}

impl BonsaiParams {
    /// Classic bonsai: four tiers, free-growing branches
    pub fn classic() -> Self {
        Self {
            root: IVec3::ZERO,
            growth: Y_GROWTH,
            tiers: BRANCH_TIERS,
            max_xz_growth: MAX_XZ_GROWTH,
            branch_cooldown: BRANCH_COOLDOWN,
            collision_guard: false,
            respawn_rule: RespawnRule::ZeroOrFlip,
            leaf_height: LEAF_HEIGHT,
            leaf_radius: LEAF_RADIUS,
            max_pot_depth: MAX_POT_DEPTH,
            soil_radius: POT_RADIUS,
        }
    }

    /// Classic bonsai with the self-collision guard enabled
    pub fn guarded() -> Self {
        Self {
            collision_guard: true,
            ..Self::classic()
        }
    }

    /// Check every precondition the generator relies on.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("growth", self.growth),
            ("tiers", self.tiers),
            ("max_xz_growth", self.max_xz_growth),
            ("leaf_height", self.leaf_height),
            ("leaf_radius", self.leaf_radius),
            ("max_pot_depth", self.max_pot_depth),
            ("soil_radius", self.soil_radius),
        ];
        for (name, value) in non_negative {
            if value < 0 {
                return Err(Error::InvalidParams(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        let bounded = [
            ("tiers", self.tiers, MAX_TIERS),
            ("leaf_radius", self.leaf_radius, MAX_RADIUS),
            ("soil_radius", self.soil_radius, MAX_RADIUS),
            ("max_pot_depth", self.max_pot_depth, MAX_POT_LAYERS),
        ];
        for (name, value, max) in bounded {
            if value > max {
                return Err(Error::InvalidParams(format!(
                    "{} must be at most {}, got {}",
                    name, max, value
                )));
            }
        }
        if self.branch_cooldown < 1 {
            return Err(Error::InvalidParams(format!(
                "branch_cooldown must be at least 1, got {}",
                self.branch_cooldown
            )));
        }
        Ok(())
    }
}
