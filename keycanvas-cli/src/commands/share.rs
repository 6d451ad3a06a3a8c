use std::path::{Path, PathBuf};

use keycanvas_types::Address;
use keycanvas_visual::qr::{address_to_bmp_qr, address_to_text_qr, qr_file_name};
use keycanvas_visual::derive_pattern;
use keycanvas_visual::share::{share_text, ShareLink};

use crate::commands::address::print_address_card;
use crate::config::Settings;
use crate::error::CliError;
use crate::format::{print_json, print_success, render_mnemonic, style_bold, style_dim};
use crate::ui::{cell, info_table, print_table};

pub fn run(
    settings: &mut Settings,
    address: Option<&str>,
    save: Option<&str>,
    pixels: u8,
    json: bool,
) -> Result<(), CliError> {
    let address = match address {
        Some(a) => Address::new(a)?,
        None => {
            let mut cache = settings.address_cache();
            let current = cache.get().clone();
            if settings.store_cache(&cache) {
                settings.save()?;
            }
            current
        }
    };

    let link = ShareLink::new(&settings.share_base_url, &address);
    let message = share_text(&address);
    let saved = match save {
        Some(dir) => Some(save_qr(&address, Path::new(dir), pixels)?),
        None => None,
    };

    if json {
        return print_json(&serde_json::json!({
            "address": address,
            "text": message,
            "url": link.url,
            "qr_file": saved.as_ref().map(|p| p.display().to_string()),
        }));
    }

    let qr = address_to_text_qr(&address)?;
    let mnemonic = render_mnemonic(&derive_pattern(address.as_str()));

    println!();
    println!("  {}", style_bold().apply_to("Share Your Bitcoin Address"));
    println!();
    for line in beside_qr(&qr, &mnemonic) {
        println!("  {}", line);
    }
    println!();
    print_address_card("Bitcoin Address", &address);
    println!();

    let mut table = info_table();
    table.add_row(vec![cell("Message"), cell(&message)]);
    table.add_row(vec![cell("Link"), cell(&link.url)]);
    print_table(&table);

    if let Some(path) = saved {
        println!();
        print_success(&format!("QR code saved to {}", path.display()));
    }
    println!();
    println!(
        "  {}",
        style_dim().apply_to("Always verify the visual pattern matches when sharing this address")
    );
    println!();
    Ok(())
}

/// Lay the mnemonic grid to the right of the QR code, vertically centred.
pub fn beside_qr(qr: &str, mnemonic: &[String]) -> Vec<String> {
    let qr_lines: Vec<&str> = qr.lines().filter(|l| !l.is_empty()).collect();
    let top = qr_lines.len().saturating_sub(mnemonic.len()) / 2;
    qr_lines
        .iter()
        .enumerate()
        .map(|(i, line)| match i.checked_sub(top).and_then(|j| mnemonic.get(j)) {
            Some(grid) => format!("{}   {}", line, grid),
            None => line.to_string(),
        })
        .collect()
}

/// Write the QR bitmap into `dir` and return the file path.
pub fn save_qr(address: &Address, dir: &Path, pixels: u8) -> Result<PathBuf, CliError> {
    let bytes = address_to_bmp_qr(address, pixels)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(qr_file_name(address));
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), "saved qr code");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_qr_writes_bitmap() {
        let dir = tempfile::tempdir().unwrap();
        let address = Address::new("1BoatSLRHtKNngkdXEeobR76b53LETtpyT").unwrap();
        let path = save_qr(&address, &dir.path().join("qr"), 4).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "keycanvas-bitcoin-1BoatSLR.bmp"
        );
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"BM");
    }

    #[test]
    fn test_save_qr_keeps_file_inside_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("qr");
        for raw in [
            "ab/cdefghijklmnopqrstuvwxyz0123",
            "../../pwned-address-long-enough-xx",
        ] {
            let address = Address::new(raw).unwrap();
            let path = save_qr(&address, &target, 1).unwrap();
            assert_eq!(path.parent().unwrap(), target.as_path());
            assert!(path.exists());
        }
    }

    #[test]
    fn test_mnemonic_sits_beside_qr() {
        let address = Address::new("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq").unwrap();
        let qr = address_to_text_qr(&address).unwrap();
        let mnemonic: Vec<String> = render_mnemonic(&derive_pattern(address.as_str()))
            .iter()
            .map(|l| console::strip_ansi_codes(l).to_string())
            .collect();
        let lines = beside_qr(&qr, &mnemonic);

        let qr_rows = qr.lines().filter(|l| !l.is_empty()).count();
        assert_eq!(lines.len(), qr_rows);
        let with_grid: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.contains('│') || l.contains('┌') || l.contains('└'))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(with_grid.len(), mnemonic.len());
        let top = with_grid[0];
        let bottom = qr_rows - 1 - with_grid[with_grid.len() - 1];
        assert!(top.abs_diff(bottom) <= 1);
        assert!(lines[top].ends_with("┌───────┐"));
    }
}
