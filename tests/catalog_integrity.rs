//! Integrity of the built-in location tables.

use std::collections::HashSet;

use soulblazer_locations::catalog::{
    build_catalog, AccessFlag, Catalog, LocationKind, BOSS_LAIR_SET, VILLAGE_LEADER_SET,
};

#[test]
fn built_in_tables_build() {
    let catalog = build_catalog().expect("built-in tables are consistent");
    assert_eq!(catalog.chests().len(), 66);
    assert_eq!(catalog.npc_rewards().len(), 65);
    assert_eq!(catalog.lairs().len(), 169);
    assert_eq!(catalog.len(), 300);
}

#[test]
fn no_name_collides_across_kinds() {
    let catalog = Catalog::global();
    let sum: usize = LocationKind::ALL
        .iter()
        .map(|kind| catalog.table(*kind).len())
        .sum();
    assert_eq!(catalog.all().len(), sum);

    let mut seen = HashSet::new();
    for kind in LocationKind::ALL {
        for name in catalog.table(kind).keys() {
            assert!(seen.insert(*name), "'{}' appears in more than one kind", name);
        }
    }
}

#[test]
fn per_kind_tables_only_hold_their_kind() {
    let catalog = Catalog::global();
    for kind in LocationKind::ALL {
        for (name, d) in catalog.table(kind) {
            assert_eq!(d.kind, kind, "{} filed under the wrong kind", name);
        }
    }
}

#[test]
fn internal_ids_unique_within_kind() {
    let catalog = Catalog::global();
    for kind in LocationKind::ALL {
        let ids: HashSet<u16> = catalog.table(kind).values().map(|d| d.internal_id).collect();
        assert_eq!(ids.len(), catalog.table(kind).len(), "{} ids repeat", kind);
    }
}

#[test]
fn boss_lairs_are_lairs() {
    let catalog = Catalog::global();
    let bosses: Vec<&str> = catalog.boss_lair_names().collect();
    assert_eq!(bosses.len(), 6, "{} has six entries", BOSS_LAIR_SET);
    for name in bosses {
        assert!(catalog.lairs().contains_key(name), "{} is not a lair", name);
        assert!(catalog.is_boss_lair(name));
    }
}

#[test]
fn village_leaders_are_npc_rewards() {
    let catalog = Catalog::global();
    let leaders: Vec<&str> = catalog.village_leader_names().collect();
    assert_eq!(leaders.len(), 6, "{} has six entries", VILLAGE_LEADER_SET);
    for name in leaders {
        assert!(
            catalog.npc_rewards().contains_key(name),
            "{} is not an NPC reward",
            name
        );
        assert!(catalog.is_village_leader(name));
    }
    assert!(catalog.is_village_leader("Nome"));
    assert!(!catalog.is_boss_lair("Nome Lair"));
}

#[test]
fn access_flags_match_game_logic() {
    let catalog = Catalog::global();
    let flag = |name: &str| catalog.lookup(name).unwrap().access_flag;

    assert_eq!(flag("Trial Room"), AccessFlag::None);
    assert_eq!(flag("Leo's Painting Tornado"), AccessFlag::CanCutMetal);
    assert_eq!(flag("Light Shrine"), AccessFlag::CanCutSpirit);
    assert_eq!(flag("World of Evil 1 Red-Hot Ball"), AccessFlag::HasMagic);
    assert_eq!(flag("Magician"), AccessFlag::HasSword);
    assert_eq!(flag("Magician Soul"), AccessFlag::HasSword);
    assert_eq!(flag("Mermaid Statue Ghost Ship Lair"), AccessFlag::HasThunder);

    let gated = catalog.iter().filter(|(_, d)| !d.access_flag.is_none()).count();
    assert_eq!(gated, 39);
}

#[test]
fn unknown_name_is_not_found() {
    let err = Catalog::global().lookup("Secret Cow Level").unwrap_err();
    assert!(!err.is_integrity_error());
    assert_eq!(err.to_string(), "location not found: Secret Cow Level");
}

#[test]
fn rebuilding_is_deterministic() {
    let first = build_catalog().unwrap();
    let second = build_catalog().unwrap();
    assert_eq!(first, second);

    let order = |c: &Catalog| c.iter().map(|(name, d)| (name, *d)).collect::<Vec<_>>();
    assert_eq!(order(&first), order(&second));
    assert_eq!(&first, Catalog::global());
}

#[test]
fn union_keeps_table_order() {
    let catalog = Catalog::global();
    let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
    assert_eq!(names.first(), Some(&"Trial Room"));
    assert_eq!(names[66], "Tool Shop Owner");
    assert_eq!(names[131], "Old Woman Lair");
    assert_eq!(names.last(), Some(&"King Magridd Lair"));
}
