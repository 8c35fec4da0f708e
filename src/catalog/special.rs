//! Classification tags consumed by placement and rule logic.

/// Lairs whose sealing requires beating an area boss.
pub(crate) const BOSS_LAIRS: &[&str] = &[
    "Village Chief Lair",
    "Greenwood's Guardian Lair",
    "Mermaid Queen Lair",
    "Mountain King Lair",
    "Marie Lair",
    "King Magridd Lair",
];

/// NPC rewards handed out by the leader of each area.
pub(crate) const VILLAGE_LEADERS: &[&str] = &[
    "Village Chief",
    "Greenwood's Guardian",
    "Mermaid Queen",
    "Nome",
    "Marie",
    "King Magridd",
];
