//! Bonsai data serialization and storage

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::voxel::procgen::{Bonsai, BonsaiParams, Direction};

/// Current version of bonsai data format
pub const BONSAI_DATA_VERSION: u32 = 1;

/// File extension for bonsai data files
pub const BONSAI_FILE_EXTENSION: &str = "json";

/// Serializable bonsai with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonsaiData {
    /// Format version for compatibility
    pub version: u32,
    /// Generation seed, if the tree came from a seeded source
    pub seed: Option<u64>,
    pub params: BonsaiParams,
    /// Initial trunk direction
    pub direction: Direction,
    pub branches: Vec<[i32; 3]>,
    pub leaves: Vec<[i32; 3]>,
    pub pot: Vec<[i32; 3]>,
    pub soil: Vec<[i32; 3]>,
}

impl BonsaiData {
    /// Create BonsaiData from a generated bonsai with metadata
    pub fn from_bonsai(bonsai: &Bonsai, params: &BonsaiParams, seed: Option<u64>) -> Self {
        Self {
            version: BONSAI_DATA_VERSION,
            seed,
            params: params.clone(),
            direction: bonsai.direction,
            branches: bonsai.branches.iter().map(|p| p.to_array()).collect(),
            leaves: bonsai.leaves.iter().map(|p| p.to_array()).collect(),
            pot: bonsai.pot.iter().map(|p| p.to_array()).collect(),
            soil: bonsai.soil.iter().map(|p| p.to_array()).collect(),
        }
    }

    /// Rebuild the bonsai
    pub fn to_bonsai(&self) -> Bonsai {
        Bonsai {
            direction: self.direction,
            branches: self.branches.iter().map(|&p| p.into()).collect(),
            leaves: self.leaves.iter().map(|&p| p.into()).collect(),
            pot: self.pot.iter().map(|&p| p.into()).collect(),
            soil: self.soil.iter().map(|&p| p.into()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and version-check JSON produced by [`BonsaiData::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        let data: BonsaiData = serde_json::from_str(json)?;

        // Version check
        if data.version != BONSAI_DATA_VERSION {
            return Err(Error::VersionMismatch {
                expected: BONSAI_DATA_VERSION,
                found: data.version,
            });
        }

        Ok(data)
    }

    /// Save to file (sync)
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file (sync)
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
