use keycanvas_types::Address;

use crate::generator::generate_address;

/// Holds the "current" address for a session.
///
/// Created empty (or seeded from a persisted value); the first [`get`](Self::get)
/// generates an address, and [`refresh`](Self::refresh) replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressCache {
    current: Option<Address>,
}

impl AddressCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cache with a previously obtained address.
    pub fn with_address(address: Address) -> Self {
        Self {
            current: Some(address),
        }
    }

    /// Peek at the held address without generating one.
    pub fn current(&self) -> Option<&Address> {
        self.current.as_ref()
    }

    /// Return the held address, generating one on first use.
    pub fn get(&mut self) -> &Address {
        self.current.get_or_insert_with(|| {
            let address = generate_address();
            tracing::debug!(address = %address, "cache empty, generated address");
            address
        })
    }

    /// Generate a new address, replace the held one, and return it.
    pub fn refresh(&mut self) -> &Address {
        let address = generate_address();
        if let Some(previous) = &self.current {
            tracing::debug!(previous = %previous, address = %address, "refreshed cached address");
        }
        self.current.insert(address)
    }
}
