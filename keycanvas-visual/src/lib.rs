//! Visual mnemonics for addresses: pattern derivation, mock generation,
//! the session address cache, comparison, sharing and QR rendering.

pub mod cache;
pub mod compare;
pub mod generator;
pub mod pattern;
pub mod qr;
pub mod share;

pub use cache::AddressCache;
pub use compare::{compare_addresses, Comparison};
pub use generator::{generate_address, generate_address_with};
pub use pattern::derive_pattern;
