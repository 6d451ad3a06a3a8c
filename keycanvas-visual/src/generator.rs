//! Mock address generation.
//!
//! These are NOT valid Bitcoin addresses: the body is random hex with no
//! checksum. They only have the right prefix and length to look plausible in
//! a demo.

use keycanvas_types::constants::HEX_CHARS;
use keycanvas_types::{Address, AddressKind};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a mock address using the thread-local RNG.
pub fn generate_address() -> Address {
    generate_address_with(&mut rand::thread_rng())
}

/// Generate a mock address with the given RNG. The kind is chosen uniformly.
pub fn generate_address_with<R: Rng>(rng: &mut R) -> Address {
    let kind = *AddressKind::ALL.choose(rng).unwrap_or(&AddressKind::Legacy);
    generate_address_of_kind(kind, rng)
}

/// Generate a mock address of a specific kind.
pub fn generate_address_of_kind<R: Rng>(kind: AddressKind, rng: &mut R) -> Address {
    let body: String = (0..kind.body_len()).map(|_| random_hex_char(rng)).collect();
    let address = kind.with_body(&body);
    tracing::debug!(kind = %kind, address = %address, "generated mock address");
    address
}

fn random_hex_char<R: Rng>(rng: &mut R) -> char {
    HEX_CHARS[rng.gen_range(0..HEX_CHARS.len())] as char
}
