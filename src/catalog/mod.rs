//! Soul Blazer location catalog.
//!
//! Every check the randomizer can place an item into is declared here exactly
//! once: its display name, the kind of trigger, its index into the game's
//! per-kind table and the access flag the host evaluates before treating it as
//! reachable. The tables are literal data; [`CatalogBuilder::build`] turns them
//! into lookup maps and rejects anything that would give two checks the same
//! name or address.
//!
//! ```
//! use soulblazer_locations::catalog::{address_for, Catalog, LocationKind, BASE_ID};
//!
//! let catalog = Catalog::global();
//! let trial_room = catalog.lookup("Trial Room").unwrap();
//! assert_eq!(trial_room.kind, LocationKind::Chest);
//! assert_eq!(address_for(LocationKind::Chest, 0), BASE_ID);
//! ```

mod chests;
pub mod errors;
mod lairs;
mod npc_rewards;
mod special;
pub mod types;

use std::collections::HashMap;
use std::sync::OnceLock;

use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};

use crate::rules::{PlayerId, WorldLocation};

pub use errors::CatalogError;
pub use types::{AccessFlag, Address, InternalId, LocationDescriptor, LocationEntry, LocationKind};

/// First address of the range the numbering-space allocator assigned to Soul Blazer.
pub const BASE_ID: Address = 0x5B00_0000;

/// Offset of the NPC reward sub-range from [`BASE_ID`].
pub const NPC_REWARD_OFFSET: Address = 0x100;

/// Offset of the lair sub-range from [`BASE_ID`].
pub const LAIR_ID_OFFSET: Address = 0x200;

const _: () = assert!(NPC_REWARD_OFFSET < LAIR_ID_OFFSET);

/// Name of the boss-lair tag set.
pub const BOSS_LAIR_SET: &str = "Boss Lairs";

/// Name of the village-leader tag set.
pub const VILLAGE_LEADER_SET: &str = "Village Leaders";

/// Global address of the check with `internal_id` in the `kind` table.
pub const fn address_for(kind: LocationKind, internal_id: InternalId) -> Address {
    match kind {
        LocationKind::Lair => BASE_ID + LAIR_ID_OFFSET + internal_id as Address,
        LocationKind::NpcReward => BASE_ID + NPC_REWARD_OFFSET + internal_id as Address,
        LocationKind::Chest => BASE_ID + internal_id as Address,
    }
}

/// Number of internal ids that fit in `kind`'s sub-range before the next one starts.
/// Lairs occupy the last sub-range and are unbounded.
pub const fn id_capacity(kind: LocationKind) -> Option<Address> {
    match kind {
        LocationKind::Chest => Some(NPC_REWARD_OFFSET),
        LocationKind::NpcReward => Some(LAIR_ID_OFFSET - NPC_REWARD_OFFSET),
        LocationKind::Lair => None,
    }
}

/// Build the catalog from the built-in tables.
pub fn build_catalog() -> Result<Catalog, CatalogError> {
    CatalogBuilder::standard().build()
}

/// Assembles a [`Catalog`] from literal tables, checking integrity as it goes.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    tables: Vec<(LocationKind, &'static [LocationEntry])>,
    boss_lairs: Vec<&'static str>,
    village_leaders: Vec<&'static str>,
}

impl CatalogBuilder {
    /// An empty builder with no tables and no tag sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with the game's chest, NPC reward and lair tables.
    pub fn standard() -> Self {
        Self::new()
            .with_table(LocationKind::Chest, chests::CHESTS)
            .with_table(LocationKind::NpcReward, npc_rewards::NPC_REWARDS)
            .with_table(LocationKind::Lair, lairs::LAIRS)
            .with_boss_lairs(special::BOSS_LAIRS)
            .with_village_leaders(special::VILLAGE_LEADERS)
    }

    /// Append a table of entries of one kind. A kind may be given several tables.
    pub fn with_table(mut self, kind: LocationKind, entries: &'static [LocationEntry]) -> Self {
        self.tables.push((kind, entries));
        self
    }

    pub fn with_boss_lairs(mut self, names: &[&'static str]) -> Self {
        self.boss_lairs.extend_from_slice(names);
        self
    }

    pub fn with_village_leaders(mut self, names: &[&'static str]) -> Self {
        self.village_leaders.extend_from_slice(names);
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::empty();
        let mut ids: HashMap<(LocationKind, InternalId), &'static str> = HashMap::new();

        for (kind, entries) in &self.tables {
            for entry in entries.iter() {
                catalog.insert(*kind, entry, &mut ids).inspect_err(|e| {
                    warn!("rejecting location catalog: {}", e);
                })?;
            }
        }

        for name in &self.boss_lairs {
            if !catalog.lairs.contains_key(name) {
                return Err(CatalogError::UnknownSpecialName {
                    set: BOSS_LAIR_SET,
                    name: name.to_string(),
                    kind: LocationKind::Lair,
                });
            }
            catalog.boss_lairs.insert(*name);
        }

        for name in &self.village_leaders {
            if !catalog.npc_rewards.contains_key(name) {
                return Err(CatalogError::UnknownSpecialName {
                    set: VILLAGE_LEADER_SET,
                    name: name.to_string(),
                    kind: LocationKind::NpcReward,
                });
            }
            catalog.village_leaders.insert(*name);
        }

        debug!(
            "built location catalog: {} chests, {} npc rewards, {} lairs",
            catalog.chests.len(),
            catalog.npc_rewards.len(),
            catalog.lairs.len()
        );
        Ok(catalog)
    }
}

/// Read-only name and address index over every check in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    chests: IndexMap<&'static str, LocationDescriptor>,
    npc_rewards: IndexMap<&'static str, LocationDescriptor>,
    lairs: IndexMap<&'static str, LocationDescriptor>,
    all: IndexMap<&'static str, LocationDescriptor>,
    by_address: HashMap<Address, &'static str>,
    boss_lairs: IndexSet<&'static str>,
    village_leaders: IndexSet<&'static str>,
}

impl Catalog {
    /// The process-wide catalog, built from the built-in tables on first use.
    ///
    /// Panics if the built-in tables fail integrity checks.
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| match build_catalog() {
            Ok(catalog) => catalog,
            Err(e) => panic!("built-in location tables are inconsistent: {}", e),
        })
    }

    fn empty() -> Self {
        Self {
            chests: IndexMap::new(),
            npc_rewards: IndexMap::new(),
            lairs: IndexMap::new(),
            all: IndexMap::new(),
            by_address: HashMap::new(),
            boss_lairs: IndexSet::new(),
            village_leaders: IndexSet::new(),
        }
    }

    fn insert(
        &mut self,
        kind: LocationKind,
        entry: &LocationEntry,
        ids: &mut HashMap<(LocationKind, InternalId), &'static str>,
    ) -> Result<(), CatalogError> {
        let descriptor = entry.descriptor(kind);

        if let Some(capacity) = id_capacity(kind) {
            if Address::from(entry.internal_id) >= capacity {
                return Err(CatalogError::IdOutOfRange {
                    kind,
                    name: entry.name.to_string(),
                    id: entry.internal_id,
                    capacity,
                });
            }
        }

        if let Some(existing) = self.all.get(entry.name) {
            return Err(CatalogError::DuplicateName {
                name: entry.name.to_string(),
                first: existing.kind,
                second: kind,
            });
        }

        if let Some(first) = ids.insert((kind, entry.internal_id), entry.name) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: entry.internal_id,
                first: first.to_string(),
                second: entry.name.to_string(),
            });
        }

        let address = descriptor.address();
        if let Some(first) = self.by_address.insert(address, entry.name) {
            return Err(CatalogError::DuplicateAddress {
                address,
                first: first.to_string(),
                second: entry.name.to_string(),
            });
        }

        self.table_mut(kind).insert(entry.name, descriptor);
        self.all.insert(entry.name, descriptor);
        Ok(())
    }

    fn table_mut(&mut self, kind: LocationKind) -> &mut IndexMap<&'static str, LocationDescriptor> {
        match kind {
            LocationKind::Chest => &mut self.chests,
            LocationKind::NpcReward => &mut self.npc_rewards,
            LocationKind::Lair => &mut self.lairs,
        }
    }

    /// Name → descriptor mapping for one kind, in table order.
    pub fn table(&self, kind: LocationKind) -> &IndexMap<&'static str, LocationDescriptor> {
        match kind {
            LocationKind::Chest => &self.chests,
            LocationKind::NpcReward => &self.npc_rewards,
            LocationKind::Lair => &self.lairs,
        }
    }

    pub fn chests(&self) -> &IndexMap<&'static str, LocationDescriptor> {
        &self.chests
    }

    pub fn npc_rewards(&self) -> &IndexMap<&'static str, LocationDescriptor> {
        &self.npc_rewards
    }

    pub fn lairs(&self) -> &IndexMap<&'static str, LocationDescriptor> {
        &self.lairs
    }

    /// Union of all three kinds: chests, then NPC rewards, then lairs.
    pub fn all(&self) -> &IndexMap<&'static str, LocationDescriptor> {
        &self.all
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &LocationDescriptor)> + '_ {
        self.all.iter().map(|(name, d)| (*name, d))
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.all.contains_key(name)
    }

    pub fn lookup(&self, name: &str) -> Result<&LocationDescriptor, CatalogError> {
        self.all
            .get(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    pub fn address_of(&self, name: &str) -> Result<Address, CatalogError> {
        self.lookup(name).map(LocationDescriptor::address)
    }

    /// Reverse lookup from a global address to the owning name and descriptor.
    pub fn lookup_address(
        &self,
        address: Address,
    ) -> Result<(&'static str, &LocationDescriptor), CatalogError> {
        self.by_address
            .get(&address)
            .and_then(|name| self.all.get_key_value(name))
            .map(|(name, d)| (*name, d))
            .ok_or(CatalogError::AddressNotFound(address))
    }

    pub fn boss_lair_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.boss_lairs.iter().copied()
    }

    pub fn village_leader_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.village_leaders.iter().copied()
    }

    pub fn is_boss_lair(&self, name: &str) -> bool {
        self.boss_lairs.contains(name)
    }

    pub fn is_village_leader(&self, name: &str) -> bool {
        self.village_leaders.contains(name)
    }

    /// One player-bound location per catalog entry, ready for the host to register.
    pub fn world_locations(&self, player: PlayerId) -> Vec<WorldLocation> {
        self.iter()
            .map(|(name, descriptor)| WorldLocation::new(player, name, *descriptor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CHESTS: &[LocationEntry] = &[
        LocationEntry::new("Left Chest", 0x00),
        LocationEntry::new("Right Chest", 0x01),
    ];

    const ONE_LAIR: &[LocationEntry] = &[LocationEntry::new("Old Woman Lair", 0x00)];

    #[test]
    fn builds_small_catalog() {
        let catalog = CatalogBuilder::new()
            .with_table(LocationKind::Chest, TWO_CHESTS)
            .with_table(LocationKind::Lair, ONE_LAIR)
            .with_boss_lairs(&["Old Woman Lair"])
            .build()
            .unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.address_of("Right Chest").unwrap(), BASE_ID + 1);
        assert_eq!(
            catalog.address_of("Old Woman Lair").unwrap(),
            BASE_ID + LAIR_ID_OFFSET
        );
        assert!(catalog.is_boss_lair("Old Woman Lair"));
        assert!(!catalog.is_village_leader("Old Woman Lair"));
    }

    #[test]
    fn rejects_duplicate_name_within_kind() {
        const DUP: &[LocationEntry] = &[
            LocationEntry::new("Trial Room", 0x00),
            LocationEntry::new("Trial Room", 0x01),
        ];
        let err = CatalogBuilder::new()
            .with_table(LocationKind::Chest, DUP)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateName {
                name: "Trial Room".into(),
                first: LocationKind::Chest,
                second: LocationKind::Chest,
            }
        );
        assert!(err.is_integrity_error());
    }

    #[test]
    fn rejects_duplicate_name_across_kinds() {
        const REWARD: &[LocationEntry] = &[LocationEntry::new("Left Chest", 0x00)];
        let err = CatalogBuilder::new()
            .with_table(LocationKind::Chest, TWO_CHESTS)
            .with_table(LocationKind::NpcReward, REWARD)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateName {
                first: LocationKind::Chest,
                second: LocationKind::NpcReward,
                ..
            }
        ));
    }

    #[test]
    fn rejects_duplicate_id_within_kind() {
        const MORE: &[LocationEntry] = &[LocationEntry::new("Third Chest", 0x01)];
        let err = CatalogBuilder::new()
            .with_table(LocationKind::Chest, TWO_CHESTS)
            .with_table(LocationKind::Chest, MORE)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                kind: LocationKind::Chest,
                id: 0x01,
                first: "Right Chest".into(),
                second: "Third Chest".into(),
            }
        );
    }

    #[test]
    fn same_id_in_different_kinds_is_fine() {
        const REWARD: &[LocationEntry] = &[LocationEntry::new("Tool Shop Owner", 0x00)];
        let catalog = CatalogBuilder::new()
            .with_table(LocationKind::Chest, TWO_CHESTS)
            .with_table(LocationKind::NpcReward, REWARD)
            .build()
            .unwrap();
        assert_ne!(
            catalog.address_of("Left Chest").unwrap(),
            catalog.address_of("Tool Shop Owner").unwrap()
        );
    }

    #[test]
    fn rejects_chest_id_spilling_into_npc_range() {
        const WIDE: &[LocationEntry] = &[LocationEntry::new("Far Chest", 0x100)];
        let err = CatalogBuilder::new()
            .with_table(LocationKind::Chest, WIDE)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::IdOutOfRange {
                kind: LocationKind::Chest,
                id: 0x100,
                ..
            }
        ));
    }

    #[test]
    fn rejects_npc_id_spilling_into_lair_range() {
        const WIDE: &[LocationEntry] = &[LocationEntry::new("Far Reward", 0x100)];
        let err = CatalogBuilder::new()
            .with_table(LocationKind::NpcReward, WIDE)
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::IdOutOfRange { .. }));
    }

    #[test]
    fn lair_ids_are_unbounded() {
        const WIDE: &[LocationEntry] = &[LocationEntry::new("Deep Lair", 0x1A3)];
        let catalog = CatalogBuilder::new()
            .with_table(LocationKind::Lair, WIDE)
            .build()
            .unwrap();
        assert_eq!(
            catalog.address_of("Deep Lair").unwrap(),
            BASE_ID + LAIR_ID_OFFSET + 0x1A3
        );
    }

    #[test]
    fn rejects_boss_lair_that_is_not_a_lair() {
        let err = CatalogBuilder::new()
            .with_table(LocationKind::Chest, TWO_CHESTS)
            .with_boss_lairs(&["Left Chest"])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownSpecialName {
                set: BOSS_LAIR_SET,
                name: "Left Chest".into(),
                kind: LocationKind::Lair,
            }
        );
    }

    #[test]
    fn rejects_unknown_village_leader() {
        let err = CatalogBuilder::new()
            .with_table(LocationKind::Lair, ONE_LAIR)
            .with_village_leaders(&["Old Woman Lair"])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownSpecialName {
                set: VILLAGE_LEADER_SET,
                ..
            }
        ));
    }

    #[test]
    fn lookup_misses_are_not_integrity_errors() {
        let catalog = CatalogBuilder::new().build().unwrap();
        assert!(catalog.is_empty());
        let err = catalog.lookup("Trial Room").unwrap_err();
        assert_eq!(err, CatalogError::NotFound("Trial Room".into()));
        assert!(!err.is_integrity_error());
        assert_eq!(
            catalog.lookup_address(BASE_ID).unwrap_err(),
            CatalogError::AddressNotFound(BASE_ID)
        );
    }

    #[test]
    fn capacity_matches_offsets() {
        assert_eq!(id_capacity(LocationKind::Chest), Some(NPC_REWARD_OFFSET));
        assert_eq!(
            id_capacity(LocationKind::NpcReward),
            Some(LAIR_ID_OFFSET - NPC_REWARD_OFFSET)
        );
        assert_eq!(id_capacity(LocationKind::Lair), None);
    }
}
