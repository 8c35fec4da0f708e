//! Data package export.
//!
//! Hosts and clients exchange a per-game document that maps every location name
//! to its address, plus named groups of locations. The checksum lets a client
//! skip re-downloading a package it already has.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::catalog::{Address, Catalog, LocationKind, BOSS_LAIR_SET, VILLAGE_LEADER_SET};

/// Game name the package is published under.
pub const GAME_NAME: &str = "Soul Blazer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPackage {
    pub games: BTreeMap<String, HashedGameData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashedGameData {
    pub checksum: String,
    #[serde(flatten)]
    pub game_data: GameData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    #[serde(default)]
    pub location_name_groups: IndexMap<String, Vec<String>>,
    pub location_name_to_id: IndexMap<String, Address>,
}

impl GameData {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let location_name_to_id = catalog
            .iter()
            .map(|(name, d)| (name.to_string(), d.address()))
            .collect();

        let mut location_name_groups = IndexMap::new();
        for kind in LocationKind::ALL {
            let names = catalog.table(kind).keys().map(|n| n.to_string()).collect();
            location_name_groups.insert(kind.group_name().to_string(), names);
        }
        location_name_groups.insert(
            BOSS_LAIR_SET.to_string(),
            catalog.boss_lair_names().map(str::to_string).collect(),
        );
        location_name_groups.insert(
            VILLAGE_LEADER_SET.to_string(),
            catalog.village_leader_names().map(str::to_string).collect(),
        );

        Self {
            location_name_groups,
            location_name_to_id,
        }
    }

    /// Hex SHA-256 over the compact JSON encoding.
    pub fn checksum(&self) -> serde_json::Result<String> {
        let bytes = serde_json::to_vec(self)?;
        let digest = Sha256::digest(&bytes);
        Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
    }
}

impl DataPackage {
    pub fn for_catalog(game: &str, catalog: &Catalog) -> serde_json::Result<Self> {
        let game_data = GameData::from_catalog(catalog);
        let checksum = game_data.checksum()?;
        let mut games = BTreeMap::new();
        games.insert(
            game.to_string(),
            HashedGameData {
                checksum,
                game_data,
            },
        );
        Ok(Self { games })
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
