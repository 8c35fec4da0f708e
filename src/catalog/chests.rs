//! Chest table, indexed by position in the game's chest list.

use crate::catalog::types::{AccessFlag, LocationEntry};

pub(crate) const CHESTS: &[LocationEntry] = &[
    LocationEntry::new("Trial Room", 0x00),
    LocationEntry::new("Grass Valley Secret Cave Left", 0x01),
    LocationEntry::new("Grass Valley Secret Cave Right", 0x02),
    LocationEntry::new("Underground Castle 12 GEMs", 0x03),
    LocationEntry::new("Underground Castle Herb", 0x04),
    LocationEntry::new("Underground Castle Dream Rod", 0x05),
    LocationEntry::new("Underground Castle Leo's Brush", 0x06),
    LocationEntry::new("Leo's Painting Herb", 0x07),
    LocationEntry::new("Leo's Painting Tornado", 0x08).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Greenwood Ice Armor", 0x09),
    LocationEntry::new("Greenwood Tunnels", 0x0A),
    LocationEntry::new("Water Shrine 1", 0x0B),
    LocationEntry::new("Water Shrine 2 N", 0x0C),
    LocationEntry::new("Water Shrine 2 Herb", 0x0D),
    LocationEntry::new("Water Shrine 3 SW", 0x0E),
    LocationEntry::new("Water Shrine 3 SE", 0x0F),
    LocationEntry::new("Fire Shrine 1", 0x10),
    LocationEntry::new("Fire Shrine 2 Disappearing", 0x11),
    LocationEntry::new("Fire Shrine 2 Scorpion", 0x12).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Fire Shrine 3 100 GEMs", 0x13),
    LocationEntry::new("Fire Shrine 3 60 GEMs", 0x14),
    LocationEntry::new("Light Shrine", 0x15).with_flag(AccessFlag::CanCutSpirit),
    LocationEntry::new("St. Ellis Mermaid's Tears", 0x16),
    LocationEntry::new("St. Ellis Big Pearl", 0x17),
    LocationEntry::new("Seabed Secret TL", 0x18),
    LocationEntry::new("Seabed Secret TR", 0x19),
    LocationEntry::new("Seabed Secret BL", 0x1A),
    LocationEntry::new("Seabed Secret BR", 0x1B),
    LocationEntry::new("Southerta", 0x1C),
    LocationEntry::new("Rockbird Herb", 0x1D),
    LocationEntry::new("Rockbird 60 GEMs", 0x1E),
    LocationEntry::new("Durean Critical Sword", 0x1F),
    LocationEntry::new("Durean Strange Bottle", 0x20),
    LocationEntry::new("Ghost Ship", 0x21),
    LocationEntry::new("Seabed Power Bracelet", 0x22),
    LocationEntry::new("Mountain of Souls 1", 0x23),
    LocationEntry::new("Mountain of Souls 2 LL", 0x24),
    LocationEntry::new("Mountain of Souls 2 L", 0x25),
    LocationEntry::new("Mountain of Souls 2 R", 0x26),
    LocationEntry::new("Mountain of Souls 2 RR", 0x27),
    LocationEntry::new("Laynole Lucky Blade", 0x28),
    LocationEntry::new("Laynole Herb", 0x29),
    LocationEntry::new("Laynole Rotator", 0x2A),
    LocationEntry::new("Leo's Lab Zantetsu", 0x2B),
    LocationEntry::new("Power Plant Light Armor", 0x2C).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Model Town 1 SE", 0x2D),
    LocationEntry::new("Model Town 1 NL", 0x2E),
    LocationEntry::new("Model Town 1 NR", 0x2F),
    LocationEntry::new("Model Town 2 Top", 0x30),
    LocationEntry::new("Model Town 2 Bottom", 0x31),
    LocationEntry::new("Castle Basement 1 W", 0x32),
    LocationEntry::new("Castle Basement 1 Spirit Sword", 0x33),
    LocationEntry::new("Castle Basement 2 N", 0x34),
    LocationEntry::new("Castle Basement 2 SW", 0x35),
    LocationEntry::new("Castle Basement 2 Middle", 0x36),
    LocationEntry::new("Castle Basement 3", 0x37),
    LocationEntry::new("Castle Right Tower 2 L", 0x38),
    LocationEntry::new("Castle Right Tower 2 R", 0x39),
    LocationEntry::new("Castle Right Tower 3 TL", 0x3A),
    LocationEntry::new("Castle Right Tower 3 BR", 0x3B),
    LocationEntry::new("World of Evil 1 SE", 0x3C).with_flag(AccessFlag::HasMagic),
    LocationEntry::new("World of Evil 1 SW", 0x3D).with_flag(AccessFlag::HasMagic),
    LocationEntry::new("World of Evil 1 Red-Hot Ball", 0x3E).with_flag(AccessFlag::HasMagic),
    LocationEntry::new("World of Evil 2", 0x3F),
    LocationEntry::new("Dazzling Space SE", 0x40),
    LocationEntry::new("Dazzling Space SW", 0x41),
];
