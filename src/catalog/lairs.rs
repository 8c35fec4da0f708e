//! Monster lairs. Sealing a lair releases a resident and yields its check.

use crate::catalog::types::{AccessFlag, LocationEntry};

pub(crate) const LAIRS: &[LocationEntry] = &[
    LocationEntry::new("Old Woman Lair", 0x00),
    LocationEntry::new("Tool Shop Owner Lair", 0x01),
    LocationEntry::new("Tulip Lair", 0x02),
    LocationEntry::new("Bridge Guard Lair", 0x03),
    LocationEntry::new("Village Chief Lair", 0x04),
    LocationEntry::new("Ivy Chest Room Lair", 0x05),
    LocationEntry::new("Water Mill Lair", 0x06),
    LocationEntry::new("Goat Herb Lair", 0x07),
    LocationEntry::new("Lisa Lair", 0x08),
    LocationEntry::new("Tulip 2 Lair", 0x09),
    LocationEntry::new("Architect Lair", 0x0A),
    LocationEntry::new("Ivy Lair", 0x0B),
    LocationEntry::new("Goat Lair", 0x0C),
    LocationEntry::new("Teddy Lair", 0x0D),
    LocationEntry::new("Tulip 3 Lair", 0x0E),
    LocationEntry::new("Leo's House Lair", 0x0F),
    LocationEntry::new("Lonely Goat Lair", 0x10),
    LocationEntry::new("Tulip Pass Lair", 0x11),
    LocationEntry::new("Boy Cabin Lair", 0x12),
    LocationEntry::new("Boy Cave Lair", 0x13),
    LocationEntry::new("Old Man Lair", 0x14),
    LocationEntry::new("Old Man 2 Lair", 0x15),
    LocationEntry::new("Ivy 2 Lair", 0x16),
    LocationEntry::new("Ivy Emblem A Lair", 0x17).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Ivy Recovery Sword Lair", 0x18).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Tulip 4 Lair", 0x19),
    LocationEntry::new("Goat 2 Lair", 0x1A),
    LocationEntry::new("Bird Red-Hot Mirror Lair", 0x1B).with_flag(AccessFlag::CanCutSpirit),
    LocationEntry::new("Bird Lair", 0x1C),
    LocationEntry::new("Dog Lair", 0x1D),
    LocationEntry::new("Dog 2 Lair", 0x1E),
    LocationEntry::new("Dog 3 Lair", 0x1F),
    LocationEntry::new("Mole Shield Bracelet Lair", 0x20),
    LocationEntry::new("Squirrel Emblem C Lair", 0x21),
    LocationEntry::new("Squirrel Psycho Sword Lair", 0x22),
    LocationEntry::new("Bird 2 Lair", 0x23),
    LocationEntry::new("Mole Soul of Light Lair", 0x24),
    LocationEntry::new("Deer Lair", 0x25),
    LocationEntry::new("Crocodile Lair", 0x26),
    LocationEntry::new("Squirrel Lair", 0x27),
    LocationEntry::new("Greenwood's Guardian Lair", 0x28),
    LocationEntry::new("Mole Lair", 0x29),
    LocationEntry::new("Dog 4 Lair", 0x2A),
    LocationEntry::new("Squirrel Ice Armor Lair", 0x2B),
    LocationEntry::new("Squirrel 2 Lair", 0x2C),
    LocationEntry::new("Dog 5 Lair", 0x2D),
    LocationEntry::new("Crocodile 2 Lair", 0x2E),
    LocationEntry::new("Mole 2 Lair", 0x2F),
    LocationEntry::new("Squirrel 3 Lair", 0x30),
    LocationEntry::new("Bird Greenwood Leaf Lair", 0x31),
    LocationEntry::new("Mole 3 Lair", 0x32),
    LocationEntry::new("Deer Magic Bell Lair", 0x33),
    LocationEntry::new("Bird 3 Lair", 0x34).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Crocodile 3 Lair", 0x35),
    LocationEntry::new("Monmo Lair", 0x36),
    LocationEntry::new("Dolphin Lair", 0x37),
    LocationEntry::new("Angelfish Lair", 0x38),
    LocationEntry::new("Mermaid Lair", 0x39),
    LocationEntry::new("Angelfish 2 Lair", 0x3A),
    LocationEntry::new("Mermaid Pearl Lair", 0x3B),
    LocationEntry::new("Mermaid 2 Lair", 0x3C),
    LocationEntry::new("Dolphin Saves Lue Lair", 0x3D),
    LocationEntry::new("Mermaid Statue Blester Lair", 0x3E),
    LocationEntry::new("Mermaid Red-Hot Stick Lair", 0x3F).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Lue Lair", 0x40),
    LocationEntry::new("Mermaid 3 Lair", 0x41),
    LocationEntry::new("Mermaid Nana Lair", 0x42),
    LocationEntry::new("Mermaid 4 Lair", 0x43),
    LocationEntry::new("Dolphin 2 Lair", 0x44),
    LocationEntry::new("Mermaid Statue Rockbird Lair", 0x45),
    LocationEntry::new("Mermaid Bubble Armor Lair", 0x46),
    LocationEntry::new("Mermaid 5 Lair", 0x47),
    LocationEntry::new("Mermaid 6 Lair", 0x48),
    LocationEntry::new("Mermaid Tears Lair", 0x49),
    LocationEntry::new("Mermaid Statue Durean Lair", 0x4A),
    LocationEntry::new("Angelfish 3 Lair", 0x4B),
    LocationEntry::new("Angelfish Soul of Shield Lair", 0x4C),
    LocationEntry::new("Mermaid Magic Flare Lair", 0x4D),
    LocationEntry::new("Mermaid Queen Lair", 0x4E),
    LocationEntry::new("Mermaid Statue Ghost Ship Lair", 0x4F).with_flag(AccessFlag::HasThunder),
    LocationEntry::new("Dolphin Secret Cave Lair", 0x50),
    LocationEntry::new("Mermaid 7 Lair", 0x51),
    LocationEntry::new("Angelfish 4 Lair", 0x52),
    LocationEntry::new("Mermaid 8 Lair", 0x53),
    LocationEntry::new("Dolphin Pearl Lair", 0x54),
    LocationEntry::new("Mermaid 9 Lair", 0x55),
    LocationEntry::new("Grandpa Lair", 0x56),
    LocationEntry::new("Girl Lair", 0x57),
    LocationEntry::new("Mushroom Lair", 0x58),
    LocationEntry::new("Boy Lair", 0x59),
    LocationEntry::new("Grandpa 2 Lair", 0x5A),
    LocationEntry::new("Snail Jockey Lair", 0x5B),
    LocationEntry::new("Nome Lair", 0x5C),
    LocationEntry::new("Boy 2 Lair", 0x5D),
    LocationEntry::new("Mushroom Emblem F Lair", 0x5E),
    LocationEntry::new("Dancing Grandma Lair", 0x5F),
    LocationEntry::new("Dancing Grandma 2 Lair", 0x60),
    LocationEntry::new("Snail Emblem E Lair", 0x61),
    LocationEntry::new("Boy Mushroom Shoes Lair", 0x62),
    LocationEntry::new("Grandma Lair", 0x63),
    LocationEntry::new("Girl 2 Lair", 0x64),
    LocationEntry::new("Mushroom 2 Lair", 0x65),
    LocationEntry::new("Snail Racer Lair", 0x66),
    LocationEntry::new("Snail Racer 2 Lair", 0x67),
    LocationEntry::new("Girl 3 Lair", 0x68),
    LocationEntry::new("Mushroom 3 Lair", 0x69),
    LocationEntry::new("Snail Lair", 0x6A),
    LocationEntry::new("Grandpa 3 Lair", 0x6B),
    LocationEntry::new("Snail 2 Lair", 0x6C),
    LocationEntry::new("Grandpa 4 Lair", 0x6D),
    LocationEntry::new("Grandpa Lune Lair", 0x6E),
    LocationEntry::new("Grandpa 5 Lair", 0x6F),
    LocationEntry::new("Mountain King Lair", 0x70),
    LocationEntry::new("Plant Herb Lair", 0x71).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Plant Lair", 0x72),
    LocationEntry::new("Chest of Drawers Mystic Armor Lair", 0x73)
        .with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Cat Lair", 0x74),
    LocationEntry::new("Great Door Zantetsu Sword Lair", 0x75),
    LocationEntry::new("Cat 2 Lair", 0x76).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Great Door Lair", 0x77).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Cat 3 Lair", 0x78),
    LocationEntry::new("Model Town 1 Lair", 0x79),
    LocationEntry::new("Great Door Model Towns Lair", 0x7A).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Steps Upstairs Lair", 0x7B).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Cat Door Key Lair", 0x7C),
    LocationEntry::new("Mouse Lair", 0x7D).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Marie Lair", 0x7E).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Doll Lair", 0x7F).with_flag(AccessFlag::CanCutMetal),
    LocationEntry::new("Chest of Drawers Lair", 0x80),
    LocationEntry::new("Plant 2 Lair", 0x81),
    LocationEntry::new("Mouse 2 Lair", 0x82),
    LocationEntry::new("Mouse Spark Bomb Lair", 0x83).with_flag(AccessFlag::HasMagic),
    LocationEntry::new("Mouse 3 Lair", 0x84).with_flag(AccessFlag::HasMagic),
    LocationEntry::new("Great Door Soul of Detection Lair", 0x85),
    LocationEntry::new("Model Town 2 Lair", 0x86).with_flag(AccessFlag::HasMagic),
    LocationEntry::new("Mouse 4 Lair", 0x87).with_flag(AccessFlag::HasMagic),
    LocationEntry::new("Steps Marie Lair", 0x88).with_flag(AccessFlag::HasMagic),
    LocationEntry::new("Chest of Drawers 2 Lair", 0x89),
    LocationEntry::new("Plant Actinidia Leaves Lair", 0x8A),
    LocationEntry::new("Mouse 5 Lair", 0x8B),
    LocationEntry::new("Cat 4 Lair", 0x8C),
    LocationEntry::new("Stairs Power Plant Lair", 0x8D),
    LocationEntry::new("Soldier Lair", 0x8E),
    LocationEntry::new("Soldier 2 Lair", 0x8F).with_flag(AccessFlag::CanCutSpirit),
    LocationEntry::new("Soldier 3 Lair", 0x90).with_flag(AccessFlag::CanCutSpirit),
    LocationEntry::new("Soldier Elemental Mail Lair", 0x91).with_flag(AccessFlag::CanCutSpirit),
    LocationEntry::new("Soldier 4 Lair", 0x92).with_flag(AccessFlag::CanCutSpirit),
    LocationEntry::new("Soldier 5 Lair", 0x93),
    LocationEntry::new("Singer Concert Hall Lair", 0x94).with_flag(AccessFlag::CanCutSpirit),
    LocationEntry::new("Soldier 6 Lair", 0x95),
    LocationEntry::new("Maid Lair", 0x96).with_flag(AccessFlag::CanCutSpirit),
    LocationEntry::new("Soldier Left Tower Lair", 0x97),
    LocationEntry::new("Soldier Dok Lair", 0x98),
    LocationEntry::new("Soldier Platinum Card Lair", 0x99).with_flag(AccessFlag::CanCutSpirit),
    LocationEntry::new("Singer Lair", 0x9A).with_flag(AccessFlag::CanCutSpirit),
    LocationEntry::new("Soldier Soul of Reality Lair", 0x9B),
    LocationEntry::new("Maid 2 Lair", 0x9C),
    LocationEntry::new("Queen Magridd Lair", 0x9D),
    LocationEntry::new("Soldier with Leo Lair", 0x9E),
    LocationEntry::new("Soldier Right Tower Lair", 0x9F),
    LocationEntry::new("Dr. Leo Lair", 0xA0),
    LocationEntry::new("Soldier 7 Lair", 0xA1),
    LocationEntry::new("Soldier 8 Lair", 0xA2),
    LocationEntry::new("Maid Herb Lair", 0xA3),
    LocationEntry::new("Soldier Castle Lair", 0xA4),
    LocationEntry::new("Soldier 9 Lair", 0xA5),
    LocationEntry::new("Soldier 10 Lair", 0xA6),
    LocationEntry::new("Soldier 11 Lair", 0xA7),
    LocationEntry::new("King Magridd Lair", 0xA8),
];
