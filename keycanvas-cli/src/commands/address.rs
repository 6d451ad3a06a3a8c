use keycanvas_types::Address;
use keycanvas_visual::derive_pattern;
use keycanvas_visual::share::format_address_short;

use crate::config::Settings;
use crate::error::CliError;
use crate::format::{print_json, print_mnemonic_card, style_bold, style_dim, style_info};

pub fn run(settings: &mut Settings, json: bool) -> Result<(), CliError> {
    let mut cache = settings.address_cache();
    let address = cache.get().clone();
    if settings.store_cache(&cache) {
        settings.save()?;
        tracing::info!(address = %address, "stored new current address");
    }

    if json {
        return print_json(&address_json(&address));
    }

    println!();
    print_address_card("Your Address", &address);
    println!();
    Ok(())
}

/// JSON view of an address with its kind and pattern.
pub fn address_json(address: &Address) -> serde_json::Value {
    serde_json::json!({
        "address": address,
        "short": format_address_short(address.as_str()),
        "kind": address.kind(),
        "pattern": derive_pattern(address.as_str()),
    })
}

/// Mnemonic grid with the address details beside it.
pub fn print_address_card(title: &str, address: &Address) {
    let pattern = derive_pattern(address.as_str());
    let kind = address
        .kind()
        .map(|k| k.label().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let side = vec![
        style_bold().apply_to(title).to_string(),
        style_info()
            .apply_to(format_address_short(address.as_str()))
            .to_string(),
        address.to_string(),
        style_dim().apply_to(format!("Type: {}", kind)).to_string(),
    ];
    print_mnemonic_card(&pattern, &side);
}
