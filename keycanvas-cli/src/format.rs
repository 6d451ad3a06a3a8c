use console::Style;
use keycanvas_types::constants::GRID_SIZE;
use keycanvas_types::{Color, GlyphDescriptor, Pattern};

// ── Styles ──────────────────────────────────────────────────────────────────

pub fn style_success() -> Style {
    Style::new().green()
}

pub fn style_error() -> Style {
    Style::new().red()
}

pub fn style_warn() -> Style {
    Style::new().yellow()
}

pub fn style_info() -> Style {
    Style::new().cyan()
}

pub fn style_bold() -> Style {
    Style::new().bold()
}

pub fn style_dim() -> Style {
    Style::new().dim()
}

/// Terminal style for a glyph color.
pub fn style_glyph(color: Color) -> Style {
    match color {
        Color::Blue => Style::new().blue().bold(),
        Color::Amber => Style::new().yellow().bold(),
        Color::Purple => Style::new().magenta().bold(),
        Color::Green => Style::new().green().bold(),
    }
}

// ── Mnemonic rendering ──────────────────────────────────────────────────────

/// One glyph as a colored symbol.
pub fn format_glyph(glyph: &GlyphDescriptor) -> String {
    style_glyph(glyph.color)
        .apply_to(glyph.shape.symbol())
        .to_string()
}

/// All glyphs in pattern order on one line, e.g. `▲ ■ ● ▲`.
pub fn format_pattern_inline(pattern: &Pattern) -> String {
    if pattern.is_empty() {
        return style_dim().apply_to("(empty)").to_string();
    }
    pattern
        .iter()
        .map(format_glyph)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The pattern as a framed 3x3 grid, one string per line.
pub fn render_mnemonic(pattern: &Pattern) -> Vec<String> {
    let dim = style_dim();
    let border = "─".repeat(GRID_SIZE * 2 + 1);
    let mut lines = Vec::with_capacity(GRID_SIZE + 2);
    lines.push(dim.apply_to(format!("┌{}┐", border)).to_string());
    for row in pattern.grid() {
        let cells: String = row
            .iter()
            .map(|cell| match cell {
                Some(glyph) => format!(" {}", format_glyph(glyph)),
                None => format!(" {}", dim.apply_to('·')),
            })
            .collect();
        lines.push(format!(
            "{}{} {}",
            dim.apply_to('│'),
            cells,
            dim.apply_to('│')
        ));
    }
    lines.push(dim.apply_to(format!("└{}┘", border)).to_string());
    lines
}

/// Print a mnemonic grid next to a few labelled lines.
pub fn print_mnemonic_card(pattern: &Pattern, side: &[String]) {
    let grid = render_mnemonic(pattern);
    let rows = grid.len().max(side.len());
    let blank = " ".repeat(GRID_SIZE * 2 + 3);
    for i in 0..rows {
        let left = grid.get(i).map(String::as_str).unwrap_or(blank.as_str());
        match side.get(i) {
            Some(text) => println!("  {}   {}", left, text),
            None => println!("  {}", left),
        }
    }
}

// ── Display helpers ─────────────────────────────────────────────────────────

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("  {} {}", style_success().apply_to("✓"), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    println!("  {} {}", style_warn().apply_to("!"), msg);
}

/// Print an error message with a hint.
pub fn print_error(msg: &str, hint: Option<&str>) {
    eprintln!("  {} {}", style_error().apply_to("Error:"), msg);
    if let Some(h) = hint {
        eprintln!(
            "  {} {}",
            style_dim().apply_to("Hint:"),
            style_dim().apply_to(h)
        );
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), crate::error::CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
