//! Boundary between the catalog and the host's logic layer.
//!
//! The catalog only tags each location with an [`AccessFlag`]. Deciding whether a
//! player satisfies that flag is the host's job, expressed through [`AccessRules`].

use serde::Serialize;

use crate::catalog::{AccessFlag, Address, LocationDescriptor};

/// Slot number the host assigns to a player in a multi-world session.
pub type PlayerId = u32;

/// Reachability predicates implemented by the host.
pub trait AccessRules {
    /// The host's view of one player's collected items and progress.
    type State;

    /// Whether `player` in `state` meets the requirement named by `flag`.
    /// Never called with [`AccessFlag::None`].
    fn satisfies(&self, flag: AccessFlag, player: PlayerId, state: &Self::State) -> bool;
}

/// A catalog entry bound to one player, as registered in the host's world graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldLocation {
    pub player: PlayerId,
    pub name: &'static str,
    pub address: Address,
    pub descriptor: LocationDescriptor,
    pub parent_region: Option<String>,
}

impl WorldLocation {
    pub fn new(player: PlayerId, name: &'static str, descriptor: LocationDescriptor) -> Self {
        Self {
            player,
            name,
            address: descriptor.address(),
            descriptor,
            parent_region: None,
        }
    }

    pub fn with_parent_region(mut self, region: impl Into<String>) -> Self {
        self.parent_region = Some(region.into());
        self
    }

    pub fn access_flag(&self) -> AccessFlag {
        self.descriptor.access_flag
    }

    /// Evaluate this location's access requirement for its player.
    pub fn can_access<R: AccessRules>(&self, rules: &R, state: &R::State) -> bool {
        match self.descriptor.access_flag {
            AccessFlag::None => true,
            flag => rules.satisfies(flag, self.player, state),
        }
    }
}
