use crate::config::Settings;
use crate::error::CliError;
use crate::format::{print_json, print_success, style_bold};
use crate::ui::{cell, info_table, print_table};

pub fn run(
    settings: &mut Settings,
    share_base_url: Option<&str>,
    color: Option<bool>,
    reset: bool,
    json: bool,
) -> Result<(), CliError> {
    if reset {
        *settings = Settings::default();
        settings.save()?;
        print_success("Settings restored to defaults");
        return Ok(());
    }

    if share_base_url.is_some() || color.is_some() {
        if let Some(url) = share_base_url {
            validate_base_url(url)?;
            settings.share_base_url = url.trim_end_matches('/').to_string();
            print_success(&format!("Share base URL set to {}", settings.share_base_url));
        }
        if let Some(enabled) = color {
            settings.color = enabled;
            print_success(&format!(
                "Colored output {}",
                if enabled { "enabled" } else { "disabled" }
            ));
        }
        settings.save()?;
        return Ok(());
    }

    // Show current config
    if json {
        return print_json(&serde_json::json!({
            "current_address": settings.current_address,
            "share_base_url": settings.share_base_url,
            "color": settings.color,
            "settings_file": Settings::settings_path()?.to_string_lossy(),
        }));
    }

    println!();
    println!("  {}", style_bold().apply_to("KeyCanvas Configuration"));

    let mut table = info_table();
    table.add_row(vec![
        cell("Current address"),
        cell(
            settings
                .current_address
                .as_ref()
                .map(|a| a.to_string())
                .unwrap_or_else(|| "(none)".to_string()),
        ),
    ]);
    table.add_row(vec![cell("Share base URL"), cell(&settings.share_base_url)]);
    table.add_row(vec![cell("Color"), cell(settings.color)]);
    table.add_row(vec![
        cell("Settings file"),
        cell(Settings::settings_path()?.display()),
    ]);

    print_table(&table);
    println!();

    Ok(())
}

/// Share links need an http(s) base.
fn validate_base_url(url: &str) -> Result<(), CliError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(CliError::Config(format!(
            "invalid share base URL '{}', expected http:// or https://",
            url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("https://keycanvas.app").is_ok());
        assert!(validate_base_url("http://localhost:8080/").is_ok());
        assert!(validate_base_url("keycanvas.app").is_err());
        assert!(validate_base_url("").is_err());
    }
}
