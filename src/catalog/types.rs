use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::address_for;

/// Index of a location within its kind's game-data table.
pub type InternalId = u16;

/// Location identifier in the multi-world numbering space.
pub type Address = u64;

/// How a check is triggered in game. Each kind owns a disjoint address sub-range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationKind {
    /// Opening a chest.
    Chest,
    /// Talking to an NPC or stepping on an item tile.
    #[serde(rename = "NPC Reward")]
    NpcReward,
    /// Sealing a monster lair.
    Lair,
}

impl LocationKind {
    pub const ALL: [LocationKind; 3] = [
        LocationKind::Chest,
        LocationKind::NpcReward,
        LocationKind::Lair,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LocationKind::Chest => "Chest",
            LocationKind::NpcReward => "NPC Reward",
            LocationKind::Lair => "Lair",
        }
    }

    /// Name of the location group this kind is published under.
    pub fn group_name(self) -> &'static str {
        match self {
            LocationKind::Chest => "Chests",
            LocationKind::NpcReward => "NPC Rewards",
            LocationKind::Lair => "Lairs",
        }
    }

    /// Parse the labels used on the command line and in config files.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chest" | "chests" => Some(LocationKind::Chest),
            "npc" | "npc-reward" | "npc_reward" | "npc reward" | "npc-rewards" => {
                Some(LocationKind::NpcReward)
            }
            "lair" | "lairs" => Some(LocationKind::Lair),
            _ => None,
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Tag naming the host-side reachability predicate that gates a location.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AccessFlag {
    /// Reachable as soon as its region is.
    #[default]
    None,
    HasSword,
    CanCutMetal,
    CanCutSpirit,
    HasMagic,
    HasThunder,
}

impl AccessFlag {
    pub const ALL: [AccessFlag; 6] = [
        AccessFlag::None,
        AccessFlag::HasSword,
        AccessFlag::CanCutMetal,
        AccessFlag::CanCutSpirit,
        AccessFlag::HasMagic,
        AccessFlag::HasThunder,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AccessFlag::None => "none",
            AccessFlag::HasSword => "has_sword",
            AccessFlag::CanCutMetal => "can_cut_metal",
            AccessFlag::CanCutSpirit => "can_cut_spirit",
            AccessFlag::HasMagic => "has_magic",
            AccessFlag::HasThunder => "has_thunder",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|flag| flag.as_str() == wanted)
    }

    pub fn is_none(self) -> bool {
        self == AccessFlag::None
    }
}

impl fmt::Display for AccessFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Immutable description of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationDescriptor {
    pub internal_id: InternalId,
    pub kind: LocationKind,
    #[serde(default)]
    pub access_flag: AccessFlag,
}

impl LocationDescriptor {
    pub const fn new(kind: LocationKind, internal_id: InternalId) -> Self {
        Self {
            internal_id,
            kind,
            access_flag: AccessFlag::None,
        }
    }

    pub const fn with_flag(mut self, flag: AccessFlag) -> Self {
        self.access_flag = flag;
        self
    }

    pub fn address(&self) -> Address {
        address_for(self.kind, self.internal_id)
    }
}

/// One literal row of a per-kind table. The kind is supplied by the table itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationEntry {
    pub name: &'static str,
    pub internal_id: InternalId,
    pub access_flag: AccessFlag,
}

impl LocationEntry {
    pub const fn new(name: &'static str, internal_id: InternalId) -> Self {
        Self {
            name,
            internal_id,
            access_flag: AccessFlag::None,
        }
    }

    pub const fn with_flag(mut self, flag: AccessFlag) -> Self {
        self.access_flag = flag;
        self
    }

    pub fn descriptor(&self, kind: LocationKind) -> LocationDescriptor {
        LocationDescriptor::new(kind, self.internal_id).with_flag(self.access_flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels_parse_back() {
        for kind in LocationKind::ALL {
            assert_eq!(LocationKind::parse(kind.label()), Some(kind));
        }
        assert_eq!(LocationKind::parse("npc-reward"), Some(LocationKind::NpcReward));
        assert_eq!(LocationKind::parse("shop"), None);
    }

    #[test]
    fn kind_serializes_with_display_label() {
        let json = serde_json::to_string(&LocationKind::NpcReward).unwrap();
        assert_eq!(json, "\"NPC Reward\"");
    }

    #[test]
    fn access_flag_defaults_to_none() {
        assert_eq!(AccessFlag::default(), AccessFlag::None);
        assert!(AccessFlag::default().is_none());
        assert_eq!(AccessFlag::parse("can-cut-metal"), Some(AccessFlag::CanCutMetal));
        assert_eq!(AccessFlag::parse("HAS_MAGIC"), Some(AccessFlag::HasMagic));
        assert_eq!(AccessFlag::parse("flying"), None);
    }

    #[test]
    fn descriptor_without_flag_deserializes_to_none() {
        let d: LocationDescriptor =
            serde_json::from_str(r#"{"internal_id":3,"kind":"Lair"}"#).unwrap();
        assert_eq!(d, LocationDescriptor::new(LocationKind::Lair, 3));
    }
}
