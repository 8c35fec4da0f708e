//! # soulblazer-locations - Soul Blazer location catalog for multi-world randomizers
//!
//! This crate declares every check in *Soul Blazer* that a randomizer can place an
//! item into: chests, NPC rewards and monster lairs. Each location carries its
//! index into the game's per-kind table and the access flag the host must
//! satisfy before the location counts as reachable.
//!
//! ## Features
//!
//! - **Static Catalog**: 66 chests, 65 NPC rewards and 169 lairs, built once and
//!   shared read-only.
//! - **Stable Addresses**: each location maps to a unique address in the
//!   multi-world numbering space; kinds occupy disjoint sub-ranges.
//! - **Integrity Checks**: duplicate names, ids, addresses and sub-range overflow
//!   are rejected when the catalog is built, never at lookup time.
//! - **Host Seam**: access flags are evaluated through the [`rules::AccessRules`]
//!   trait the host implements.
//! - **Data Package**: name → address export with a content checksum.
//!
//! ## Quick Start
//!
//! ```rust
//! use soulblazer_locations::catalog::{Catalog, LocationKind};
//!
//! let catalog = Catalog::global();
//! let lair = catalog.lookup("King Magridd Lair").unwrap();
//! assert_eq!(lair.kind, LocationKind::Lair);
//! assert!(catalog.is_boss_lair("King Magridd Lair"));
//!
//! let (name, _) = catalog.lookup_address(lair.address()).unwrap();
//! assert_eq!(name, "King Magridd Lair");
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - location tables, address computation and lookups
//! - [`rules`] - host-implemented access predicates and player-bound locations
//! - [`datapackage`] - name/address export for hosts and clients
//! - [`config`] - configuration for the command line tool

pub mod catalog;
pub mod config;
pub mod datapackage;
pub mod rules;

pub use catalog::{address_for, build_catalog, Catalog, CatalogBuilder, CatalogError};
