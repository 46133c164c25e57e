use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::Result;

/// One catalog weapon. Every field may contain fragment keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseWeapon {
    pub name: String,
    pub hit: String,
    pub damage: String,
    pub range: String,
    pub description: String,
}

/// Decoded input data: base weapons, perk lines and fragment options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub weapons: Vec<BaseWeapon>,
    #[serde(default)]
    pub perks: Vec<String>,
    /// Ordered so that a seeded run consumes randomness in a stable order.
    #[serde(default)]
    pub randoms: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&data)?;
        tracing::debug!(
            "Loaded catalog {}: {} weapons, {} perks, {} fragment keys",
            path.display(),
            catalog.weapons.len(),
            catalog.perks.len(),
            catalog.randoms.len()
        );
        Ok(catalog)
    }
}
