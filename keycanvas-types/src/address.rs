use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeyCanvasError;

/// An opaque, non-empty address string.
///
/// No format rules are enforced beyond non-emptiness; the mnemonic is defined
/// for any string and comparison is literal equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Wrap a string as an address, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, KeyCanvasError> {
        let value = value.into();
        if value.is_empty() {
            return Err(KeyCanvasError::EmptyAddress);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn kind(&self) -> Option<AddressKind> {
        AddressKind::detect(&self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = KeyCanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Address {
    type Error = KeyCanvasError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

/// The three mock address families, by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressKind {
    /// `bc1q…` native SegWit.
    Bech32,
    /// `3…` pay-to-script-hash.
    P2sh,
    /// `1…` legacy pay-to-pubkey-hash.
    Legacy,
}

impl AddressKind {
    pub const ALL: [AddressKind; 3] = [AddressKind::Bech32, AddressKind::P2sh, AddressKind::Legacy];

    pub fn prefix(&self) -> &'static str {
        match self {
            AddressKind::Bech32 => "bc1q",
            AddressKind::P2sh => "3",
            AddressKind::Legacy => "1",
        }
    }

    /// Number of random characters following the prefix.
    pub fn body_len(&self) -> usize {
        match self {
            AddressKind::Bech32 => 39,
            AddressKind::P2sh => 33,
            AddressKind::Legacy => 33,
        }
    }

    pub fn total_len(&self) -> usize {
        self.prefix().len() + self.body_len()
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressKind::Bech32 => "Bech32 SegWit",
            AddressKind::P2sh => "P2SH",
            AddressKind::Legacy => "Legacy",
        }
    }

    /// Build an address from this kind's prefix followed by `body`.
    pub fn with_body(&self, body: &str) -> Address {
        let mut value = String::with_capacity(self.prefix().len() + body.len());
        value.push_str(self.prefix());
        value.push_str(body);
        Address(value)
    }

    /// Classify by prefix only. This is not validation.
    pub fn detect(address: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| address.starts_with(kind.prefix()))
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
