use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use directory_client::Confirm;

/// Answers yes to every prompt (`--yes`, or commands that never ask)
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Interactive yes/no prompt, defaulting to no
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let answer = dialoguer::Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact();

        match answer {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "Confirmation prompt failed; treating as declined");
                false
            }
        }
    }
}

/// Human label for a form field
pub fn label(field: &str) -> &str {
    match field {
        "firstName" => "First name",
        "lastName" => "Last name",
        "email" => "Email",
        "phone" => "Phone",
        "department" => "Department",
        "jobTitle" => "Job title",
        "hireDate" => "Hire date (YYYY-MM-DD)",
        "salary" => "Salary",
        other => other,
    }
}

/// Ask for one form field; empty answers are refused like a required input
pub fn field(name: &str) -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label(name))
        .interact_text()
        .with_context(|| format!("Failed to read {}", label(name).to_lowercase()))
}
