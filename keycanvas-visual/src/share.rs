use keycanvas_types::constants::{
    MIN_SHARED_ADDRESS_LEN, SHORT_FORM_HEAD, SHORT_FORM_TAIL, SHORT_FORM_THRESHOLD,
};
use keycanvas_types::{Address, KeyCanvasError, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

/// Characters escaped when an address becomes one URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A link to the public share page for an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub address: String,
    pub url: String,
}

impl ShareLink {
    pub fn new(base_url: &str, address: &Address) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            address: address.to_string(),
            url: format!(
                "{}/share/{}",
                base,
                utf8_percent_encode(address.as_str(), PATH_SEGMENT)
            ),
        }
    }
}

/// Decode the address segment of a share link.
pub fn decode_share_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Message used when sharing an address.
pub fn share_text(address: &Address) -> String {
    format!("Here is my Bitcoin address: {}", address)
}

/// Check an address arriving through a share link.
pub fn validate_shared_address(value: &str) -> Result<Address> {
    let address = Address::new(value)?;
    let length = address.char_len();
    if length < MIN_SHARED_ADDRESS_LEN {
        return Err(KeyCanvasError::InvalidSharedAddress {
            length,
            minimum: MIN_SHARED_ADDRESS_LEN,
        });
    }
    Ok(address)
}

/// Truncated display form: `bc1qar0s...5mdq`. Short addresses are returned unchanged.
pub fn format_address_short(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= SHORT_FORM_THRESHOLD {
        return address.to_string();
    }
    let head: String = chars[..SHORT_FORM_HEAD].iter().collect();
    let tail: String = chars[chars.len() - SHORT_FORM_TAIL..].iter().collect();
    format!("{}...{}", head, tail)
}
