//! Venue identity registry
//!
//! Maps agent/venue display names to external store addresses. The original
//! design kept this as process-wide ambient state; here it is an explicit
//! value owned by the run invocation and passed by reference into every
//! component that needs lookup or registration.

use crate::core::name::AgentName;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Numeric address of an agent's slot in the external store (Value Object)
///
/// Distinct from the agent's display name; the store adapter renders it into
/// its port-addressing scheme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StoreAddress(pub u16);

impl std::fmt::Display for StoreAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bidirectional display-name <-> store-address registry.
///
/// Registration is idempotent and first-write-wins per name: once an identity
/// is known it never silently moves to a different address.
#[derive(Debug, Default, Clone)]
pub struct VenueDirectory {
    name_to_addr: HashMap<AgentName, StoreAddress>,
    addr_to_name: HashMap<StoreAddress, AgentName>,
}

impl VenueDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name/address pair. Re-registering an existing name is a
    /// no-op, making terminal-transition registration idempotent day over day.
    pub fn register(&mut self, name: AgentName, addr: StoreAddress) {
        if self.name_to_addr.contains_key(&name) {
            return;
        }
        self.name_to_addr.insert(name.clone(), addr);
        // Reverse map keeps the latest name seen for an address: both the
        // player alias and the resolved venue name may share one address.
        self.addr_to_name.insert(addr, name);
    }

    pub fn address_of(&self, name: &AgentName) -> Option<StoreAddress> {
        self.name_to_addr.get(name).copied()
    }

    pub fn name_of(&self, addr: StoreAddress) -> Option<&AgentName> {
        self.addr_to_name.get(&addr)
    }

    /// Distinct registered addresses, in deterministic ascending order.
    pub fn addresses(&self) -> BTreeSet<StoreAddress> {
        self.name_to_addr.values().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.name_to_addr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_addr.is_empty()
    }
}
