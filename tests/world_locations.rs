//! Player-bound locations and host access rules.

use std::collections::HashSet;

use soulblazer_locations::catalog::{AccessFlag, Catalog};
use soulblazer_locations::rules::{AccessRules, PlayerId};

/// Host stand-in: a player satisfies a flag when it holds the matching item.
struct InventoryRules;

impl AccessRules for InventoryRules {
    type State = HashSet<AccessFlag>;

    fn satisfies(&self, flag: AccessFlag, _player: PlayerId, state: &Self::State) -> bool {
        state.contains(&flag)
    }
}

#[test]
fn one_world_location_per_entry() {
    let catalog = Catalog::global();
    let locations = catalog.world_locations(3);
    assert_eq!(locations.len(), catalog.len());
    assert!(locations.iter().all(|loc| loc.player == 3));
    assert!(locations.iter().all(|loc| loc.parent_region.is_none()));

    let addresses: HashSet<u64> = locations.iter().map(|loc| loc.address).collect();
    assert_eq!(addresses.len(), locations.len());
}

#[test]
fn reachability_grows_with_inventory() {
    let catalog = Catalog::global();
    let locations = catalog.world_locations(1);
    let rules = InventoryRules;

    let empty = HashSet::new();
    let open = locations
        .iter()
        .filter(|loc| loc.can_access(&rules, &empty))
        .count();
    assert_eq!(open, catalog.len() - 39);

    let everything: HashSet<AccessFlag> = AccessFlag::ALL.into_iter().collect();
    assert!(locations.iter().all(|loc| loc.can_access(&rules, &everything)));
}

#[test]
fn region_attaches_to_location() {
    let catalog = Catalog::global();
    let loc = catalog
        .world_locations(2)
        .into_iter()
        .find(|loc| loc.name == "Light Shrine")
        .unwrap()
        .with_parent_region("Lost Marshes");

    assert_eq!(loc.parent_region.as_deref(), Some("Lost Marshes"));
    assert_eq!(loc.access_flag(), AccessFlag::CanCutSpirit);

    let mut state = HashSet::new();
    assert!(!loc.can_access(&InventoryRules, &state));
    state.insert(AccessFlag::CanCutSpirit);
    assert!(loc.can_access(&InventoryRules, &state));
}
