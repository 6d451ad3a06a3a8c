use crate::commands::address::{address_json, print_address_card};
use crate::config::Settings;
use crate::error::CliError;
use crate::format::{print_json, print_success};

pub fn run(settings: &mut Settings, json: bool) -> Result<(), CliError> {
    let mut cache = settings.address_cache();
    let address = cache.refresh().clone();
    settings.store_cache(&cache);
    settings.save()?;
    tracing::info!(address = %address, "generated new current address");

    if json {
        return print_json(&address_json(&address));
    }

    println!();
    print_success("Generated a new address");
    println!();
    print_address_card("Your Address", &address);
    println!();
    Ok(())
}
