use anyhow::{Context as _, Result};
use directory_client::{ActionError, DirectoryConfig, HttpTransport};
use std::fmt;

use crate::GlobalArgs;

pub mod add;
pub mod delete;
pub mod list;

/// Settings shared by every subcommand
pub struct Context {
    pub config: DirectoryConfig,
}

impl Context {
    /// Load configuration, apply command-line overrides and start tracing
    pub fn new(global: &GlobalArgs) -> Result<Self> {
        let mut config = match &global.config {
            Some(path) => DirectoryConfig::load_from(path)
                .with_context(|| format!("Failed to load config file: {}", path))?,
            None => DirectoryConfig::load().context("Failed to load configuration")?,
        };

        if let Some(base_url) = &global.base_url {
            config.api.base_url = base_url.clone();
        }
        if global.verbose {
            config.logging.level = "debug".to_string();
        }

        directory_client::observability::init_tracing(&config.logging)?;
        tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

        Ok(Self { config })
    }

    pub fn transport(&self) -> Result<HttpTransport> {
        HttpTransport::new(&self.config.api).context("Failed to create HTTP client")
    }
}

/// An action failure the view has already shown to the user
#[derive(Debug)]
pub struct Reported(pub ActionError);

impl fmt::Display for Reported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Reported {}

/// Map an action outcome onto the command result
///
/// A declined confirmation is not a failure.
pub fn settle(result: std::result::Result<(), ActionError>) -> Result<()> {
    match result {
        Ok(()) | Err(ActionError::ConfirmationDeclined) => Ok(()),
        Err(err) => Err(Reported(err).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declined_is_success() {
        assert!(settle(Err(ActionError::ConfirmationDeclined)).is_ok());
        assert!(settle(Ok(())).is_ok());
    }

    #[test]
    fn test_failures_are_marked_reported() {
        let err = settle(Err(ActionError::ServerRejected {
            status: 400,
            body: "invalid salary".to_string(),
        }))
        .unwrap_err();

        let reported = err.downcast_ref::<Reported>().unwrap();
        assert_eq!(reported.to_string(), "invalid salary");
    }
}
