//! NPC rewards: talking to a resident or stepping on an item tile.

use crate::catalog::types::{AccessFlag, LocationEntry};

pub(crate) const NPC_REWARDS: &[LocationEntry] = &[
    LocationEntry::new("Tool Shop Owner", 0x00),
    LocationEntry::new("Emblem A Tile", 0x01),
    LocationEntry::new("Goat Pen Corner", 0x02),
    LocationEntry::new("Teddy", 0x03),
    LocationEntry::new("Pass Tile", 0x04),
    LocationEntry::new("Tile in Child's Secret Cave", 0x05),
    LocationEntry::new("Village Chief", 0x06),
    LocationEntry::new("Magician", 0x07).with_flag(AccessFlag::HasSword),
    LocationEntry::new("Recovery Sword Crystal", 0x08),
    LocationEntry::new("Grass Valley Secret Room Crystal", 0x09),
    LocationEntry::new("Underground Castle Crystal", 0x0A),
    LocationEntry::new("Red-Hot Mirror Bird", 0x0B),
    LocationEntry::new("Magic Bell Crystal", 0x0C),
    LocationEntry::new("Woodstin Trio", 0x0D),
    LocationEntry::new("Greenwood's Guardian", 0x0E),
    LocationEntry::new("Greenwood Leaves Tile", 0x0F),
    LocationEntry::new("Shield Bracelet Mole", 0x10),
    LocationEntry::new("Psycho Sword Squirrel", 0x11),
    LocationEntry::new("Emblem C Squirrel", 0x12),
    LocationEntry::new("Water Shrine Tile", 0x13),
    LocationEntry::new("Light Arrow Crystal", 0x14),
    LocationEntry::new("Lost Marsh Crystal", 0x15),
    LocationEntry::new("Water Shrine Crystal", 0x16),
    LocationEntry::new("Fire Shrine Crystal", 0x17).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Mountain King", 0x18),
    LocationEntry::new("Mushroom Shoes Boy", 0x19),
    LocationEntry::new("Nome", 0x1A),
    LocationEntry::new("Emblem E Snail", 0x1B),
    LocationEntry::new("Emblem F Tile", 0x1C),
    LocationEntry::new("Mountain of Souls Crystal", 0x1D),
    LocationEntry::new("Lune Crystal", 0x1E),
    LocationEntry::new("Emblem G Under Chest of Drawers", 0x1F),
    LocationEntry::new("Chest of Drawers Mystic Armor", 0x20),
    LocationEntry::new("Herb Plant in Leo's Lab", 0x21),
    LocationEntry::new("Leo's Cat Door Key", 0x22),
    LocationEntry::new("Actinidia Plant", 0x23),
    LocationEntry::new("Chest of Drawers Herb", 0x24),
    LocationEntry::new("Marie", 0x25),
    LocationEntry::new("Spark Bomb Mouse", 0x26),
    LocationEntry::new("Leo's Lab Basement Crystal", 0x27),
    LocationEntry::new("Model Town 1 Crystal", 0x28),
    LocationEntry::new("Power Plant Crystal", 0x29).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Elemental Mail Soldier", 0x2A),
    LocationEntry::new("Super Bracelet Tile", 0x2B),
    LocationEntry::new("Queen Magridd VIP Card", 0x2C),
    LocationEntry::new("Platinum Card Soldier", 0x2D),
    LocationEntry::new("Maid Herb", 0x2E),
    LocationEntry::new("Emblem H Tile", 0x2F),
    LocationEntry::new("King Magridd", 0x30),
    LocationEntry::new("Leo on the Airship Deck", 0x31),
    LocationEntry::new("Harp String Tile", 0x32),
    LocationEntry::new("Northeastern Mermaid Herb", 0x33),
    LocationEntry::new("Bubble Armor Mermaid", 0x34),
    LocationEntry::new("Magic Flare Mermaid", 0x35),
    LocationEntry::new("Mermaid Queen", 0x36),
    LocationEntry::new("Red-Hot Stick Mermaid", 0x37),
    LocationEntry::new("Lue", 0x38),
    LocationEntry::new("Rockbird Crystal", 0x39),
    LocationEntry::new("Seabed Crystal Near Blester", 0x3A),
    LocationEntry::new("Seabed Crystal Near Durean", 0x3B),
    LocationEntry::new("Magician Soul", 0x3C).with_flag(AccessFlag::HasSword),
    LocationEntry::new("Mole Soul of Light", 0x3D),
    LocationEntry::new("Angelfish Soul of Shield", 0x3E),
    LocationEntry::new("Great Door Soul of Detection", 0x3F),
    LocationEntry::new("Soldier Soul of Reality", 0x40),
];
