use keycanvas_types::Address;
use keycanvas_visual::compare_addresses;

use crate::commands::address::print_address_card;
use crate::config::Settings;
use crate::error::CliError;
use crate::format::{
    format_pattern_inline, print_error, print_json, print_success, print_warning, style_bold,
    style_dim,
};
use crate::prompt::prompt_address;
use crate::ui::{cell, info_table, print_table};

pub fn run(
    settings: &mut Settings,
    with: Option<String>,
    base: Option<&str>,
    example: bool,
    json: bool,
) -> Result<(), CliError> {
    let base = match base {
        Some(b) => Address::new(b)?,
        None => current_address(settings)?,
    };

    let candidate = if example {
        current_address(settings)?.to_string()
    } else {
        match with {
            Some(w) => w,
            None => prompt_address("Address to compare")?,
        }
    };

    let comparison = compare_addresses(&base, &candidate).ok_or(CliError::EmptyComparison)?;

    if json {
        return print_json(&serde_json::json!({
            "base": comparison.base,
            "candidate": comparison.candidate,
            "matched": comparison.matched,
            "patterns_match": comparison.patterns_match(),
            "base_pattern": comparison.base_pattern,
            "candidate_pattern": comparison.candidate_pattern,
        }));
    }

    println!();
    println!("  {}", style_bold().apply_to("Compare Bitcoin Addresses"));
    println!(
        "  {}",
        style_dim().apply_to("Verify both the text and visual pattern match before sending funds")
    );
    println!();
    print_address_card("Your Address", &base);
    println!();

    let mut table = info_table();
    table.add_row(vec![cell("Candidate"), cell(&comparison.candidate)]);
    table.add_row(vec![
        cell("Pattern"),
        cell(format_pattern_inline(&comparison.candidate_pattern)),
    ]);
    print_table(&table);
    println!();

    if comparison.matched {
        print_success("The addresses match! Both text and visual patterns are identical.");
    } else {
        print_error(
            "The addresses do not match! Be careful - sending to the wrong address could result in permanent loss of funds.",
            None,
        );
        if comparison.is_lookalike() {
            print_warning(
                "The visual patterns are identical but the text differs. Check every character.",
            );
        }
    }
    println!();
    Ok(())
}

/// The session's current address, generated and persisted on first use.
fn current_address(settings: &mut Settings) -> Result<Address, CliError> {
    let mut cache = settings.address_cache();
    let current = cache.get().clone();
    if settings.store_cache(&cache) {
        settings.save()?;
    }
    Ok(current)
}
