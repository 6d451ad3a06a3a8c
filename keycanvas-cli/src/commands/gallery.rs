use keycanvas_types::Address;
use keycanvas_visual::share::format_address_short;
use keycanvas_visual::{derive_pattern, generate_address};

use crate::commands::address::address_json;
use crate::error::CliError;
use crate::format::{format_pattern_inline, print_json, style_bold};
use crate::ui::{cell, data_table, print_table};

/// Well-known addresses shown in every gallery.
pub const SAMPLE_ADDRESSES: [&str; 3] = [
    "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq",
    "1BoatSLRHtKNngkdXEeobR76b53LETtpyT",
    "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy",
];

pub fn run(count: usize, json: bool) -> Result<(), CliError> {
    let addresses = gallery_addresses(count)?;

    if json {
        let entries: Vec<serde_json::Value> = addresses.iter().map(address_json).collect();
        return print_json(&entries);
    }

    println!();
    println!("  {}", style_bold().apply_to("Address Gallery"));

    let mut table = data_table(&["#", "Mnemonic", "Address", "Type"]);
    for (i, address) in addresses.iter().enumerate() {
        let kind = address.kind().map(|k| k.label()).unwrap_or("unknown");
        table.add_row(vec![
            cell(i + 1),
            cell(format_pattern_inline(&derive_pattern(address.as_str()))),
            cell(format_address_short(address.as_str())),
            cell(kind),
        ]);
    }
    print_table(&table);
    println!();
    Ok(())
}

/// The sample addresses followed by `count` generated ones.
pub fn gallery_addresses(count: usize) -> Result<Vec<Address>, CliError> {
    let mut addresses = SAMPLE_ADDRESSES
        .iter()
        .map(|a| Address::new(*a))
        .collect::<Result<Vec<_>, _>>()?;
    addresses.extend((0..count).map(|_| generate_address()));
    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_starts_with_samples() {
        let addresses = gallery_addresses(2).unwrap();
        assert_eq!(addresses.len(), 5);
        for (address, sample) in addresses.iter().zip(SAMPLE_ADDRESSES) {
            assert_eq!(address.as_str(), sample);
        }
    }

    #[test]
    fn test_sample_patterns_are_distinct() {
        let patterns: Vec<_> = SAMPLE_ADDRESSES.iter().map(|a| derive_pattern(a)).collect();
        assert_ne!(patterns[0], patterns[1]);
        assert_ne!(patterns[1], patterns[2]);
        assert_ne!(patterns[0], patterns[2]);
    }
}
