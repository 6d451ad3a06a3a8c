use keycanvas_types::Address;
use keycanvas_visual::share::{decode_share_segment, validate_shared_address};

use crate::commands::address::{address_json, print_address_card};
use crate::error::CliError;
use crate::format::{print_json, style_dim};

pub fn run(link: &str, json: bool) -> Result<(), CliError> {
    let address = parse_share_link(link)?;

    if json {
        return print_json(&address_json(&address));
    }

    println!();
    print_address_card("Bitcoin Address", &address);
    println!();
    println!(
        "  {}",
        style_dim().apply_to("Always verify the visual pattern matches when using this address")
    );
    println!();
    Ok(())
}

/// Extract and validate the address from a share link. A bare address is accepted too.
pub fn parse_share_link(link: &str) -> Result<Address, CliError> {
    let trimmed = link.trim();
    let candidate = match trimmed.rsplit_once("/share/") {
        Some((_, segment)) => decode_share_segment(segment.trim_end_matches('/')),
        None => trimmed.to_string(),
    };
    validate_shared_address(&candidate).map_err(CliError::from)
}
