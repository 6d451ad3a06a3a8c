use crate::banner::print_banner;
use crate::commands::address::print_address_card;
use crate::config::Settings;
use crate::error::CliError;
use crate::format::{style_bold, style_dim};

const FEATURES: [(&str, &str); 3] = [
    (
        "Visual Address Verification",
        "Unique visual patterns make Bitcoin addresses easier to recognize and verify at a glance.",
    ),
    (
        "Simple Address Sharing",
        "Copy, share, or display QR codes for your Bitcoin addresses with confidence.",
    ),
    (
        "Address Comparison",
        "Easily compare addresses side-by-side to verify they match before sending funds.",
    ),
];

pub fn run(settings: &mut Settings) -> Result<(), CliError> {
    print_banner();

    for (title, description) in FEATURES {
        println!("  {}", style_bold().apply_to(title));
        println!("  {}", style_dim().apply_to(description));
        println!();
    }

    let mut cache = settings.address_cache();
    let address = cache.get().clone();
    if settings.store_cache(&cache) {
        settings.save()?;
    }
    print_address_card("Sample Bitcoin Address", &address);
    println!();
    Ok(())
}
