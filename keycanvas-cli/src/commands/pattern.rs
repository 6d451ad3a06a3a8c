use keycanvas_visual::derive_pattern;

use crate::error::CliError;
use crate::format::{format_glyph, print_json, print_mnemonic_card, style_bold, style_dim};
use crate::ui::{cell, data_table, print_table};

pub fn run(address: &str, json: bool) -> Result<(), CliError> {
    let pattern = derive_pattern(address);

    if json {
        return print_json(&serde_json::json!({
            "address": address,
            "pattern": pattern,
        }));
    }

    println!();
    if pattern.is_empty() {
        println!("  {}", style_dim().apply_to("Empty address: no pattern"));
        println!();
        return Ok(());
    }

    print_mnemonic_card(
        &pattern,
        &[
            style_bold().apply_to("Visual Mnemonic").to_string(),
            address.to_string(),
        ],
    );
    println!();

    let mut table = data_table(&["#", "Glyph", "Shape", "Color", "X %", "Y %"]);
    for (i, glyph) in pattern.iter().enumerate() {
        table.add_row(vec![
            cell(i),
            cell(format_glyph(glyph)),
            cell(glyph.shape),
            cell(glyph.color),
            cell(glyph.x),
            cell(glyph.y),
        ]);
    }
    print_table(&table);
    println!();
    Ok(())
}
