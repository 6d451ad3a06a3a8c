use dialoguer::Input;

use crate::error::CliError;

/// Prompt the user for an address. Empty input is allowed and returned as-is.
pub fn prompt_address(prompt: &str) -> Result<String, CliError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CliError::Prompt(e.to_string()))
}
