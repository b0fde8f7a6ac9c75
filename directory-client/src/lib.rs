//! # directory-client
//!
//! Client for an employee-directory REST API (`/api/employees`): it lists
//! records as cards, submits a creation form and deletes records by id.
//!
//! ## Features
//!
//! - **Explicit seams**: the API is reached through a [`Transport`], UI regions through a
//!   [`DirectoryView`], and delete confirmation through [`Confirm`]
//! - **Typed outcomes**: every action returns an [`ActionError`] kind on failure, and writes
//!   the matching banner into the view
//! - **HTML rendering**: [`HtmlPage`] renders the form, banner, counter and card list
//! - **Configuration**: Figment-based, from `staffdir.toml`, XDG config dir and `STAFFDIR_` env
//!
//! ## Example
//!
//! ```rust,no_run
//! use directory_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = DirectoryConfig::load()?;
//!     init_tracing(&config.logging)?;
//!
//!     let transport = HttpTransport::new(&config.api)?;
//!     let mut client = DirectoryClient::new(
//!         transport,
//!         HtmlPage::new()?,
//!         |_: &str| true,
//!         config.display,
//!     );
//!
//!     client.initialize().await;
//!     println!("{}", client.view().page_html()?);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod html;
pub mod models;
pub mod observability;
pub mod transport;
pub mod view;

pub use client::DirectoryClient;
pub use config::{ApiConfig, DirectoryConfig, DisplayConfig, LoggingConfig};
pub use error::{ActionError, Error, Result, TransportError};
pub use html::HtmlPage;
pub use models::{Employee, EmployeeCreateRequest, EmployeeForm};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
pub use view::{Banner, BannerKind, Confirm, DirectoryView, EmployeeCard, ListContent};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{DirectoryClient, CREATED_TEXT, DELETED_TEXT, DELETE_PROMPT};
    pub use crate::config::{ApiConfig, DirectoryConfig, DisplayConfig, LoggingConfig};
    pub use crate::error::{ActionError, Error, Result, TransportError};
    pub use crate::html::HtmlPage;
    pub use crate::models::{Employee, EmployeeCreateRequest, EmployeeForm, FORM_FIELDS};
    pub use crate::observability::init_tracing;
    pub use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
    pub use crate::view::{
        Banner, BannerKind, Confirm, DirectoryView, EmployeeCard, ListContent, EMPTY_LIST_TEXT,
    };
}
