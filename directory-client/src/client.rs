//! The directory client: one operation per user action
//!
//! Each operation performs a single round-trip through the [`Transport`],
//! writes its outcome into the [`DirectoryView`] regions, and returns the
//! outcome kind so callers can branch on it without parsing banner text.

use tracing::{debug, info, warn};

use crate::config::DisplayConfig;
use crate::error::ActionError;
use crate::models::{Employee, EmployeeForm};
use crate::transport::{ApiRequest, Transport};
use crate::view::{Banner, Confirm, DirectoryView, EmployeeCard, ListContent};

/// Banner shown after a successful create
pub const CREATED_TEXT: &str = "Employee added successfully!";

/// Banner shown after a successful delete
pub const DELETED_TEXT: &str = "Employee deleted successfully!";

/// Prompt shown before a delete is sent
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

const LIST_ERROR_PREFIX: &str = "Error loading employees: ";

/// Client for the employee directory API
///
/// Holds no copy of the employee list: every render comes straight from
/// the latest successful fetch. Operations take `&mut self`, so a single
/// client never has two requests in flight.
///
/// # Example
///
/// ```ignore
/// let transport = HttpTransport::new(&config.api)?;
/// let mut client = DirectoryClient::new(transport, HtmlPage::new()?, |_: &str| true, config.display);
///
/// client.initialize().await;
/// client.delete_employee(1).await?;
/// ```
pub struct DirectoryClient<T, V, C> {
    transport: T,
    view: V,
    confirm: C,
    display: DisplayConfig,
}

impl<T, V, C> DirectoryClient<T, V, C>
where
    T: Transport,
    V: DirectoryView,
    C: Confirm,
{
    pub fn new(transport: T, view: V, confirm: C, display: DisplayConfig) -> Self {
        Self {
            transport,
            view,
            confirm,
            display,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Initial page load: fetch and render the list
    ///
    /// Failures are already rendered into the list region.
    pub async fn initialize(&mut self) {
        if let Err(err) = self.refresh_list().await {
            debug!(error = %err, "Initial load failed");
        }
    }

    /// Submit the creation form
    ///
    /// On success the form is reset and the list re-fetched. On failure the
    /// banner shows `Error: ` followed by the response body or the failure
    /// description, and the form keeps its values.
    pub async fn submit_create(&mut self, form: &EmployeeForm) -> Result<(), ActionError> {
        let payload = form.to_request();
        debug!(
            first_name = %payload.first_name,
            last_name = %payload.last_name,
            "Submitting new employee"
        );

        match self.round_trip(ApiRequest::create(&payload)).await {
            Ok(()) => {
                info!("Employee created");
                self.view.show_banner(Banner::success(CREATED_TEXT));
                self.view.reset_form();
                self.refresh_after_change().await;
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Fetch the full list and re-render the count and list regions
    ///
    /// Returns the number of records rendered. On failure the list region
    /// shows the failure and the count keeps its previous value.
    pub async fn refresh_list(&mut self) -> Result<usize, ActionError> {
        match self.fetch_employees().await {
            Ok(employees) => {
                let count = employees.len();
                debug!(count, "Rendering employee list");

                self.view.set_count(count);
                let content = if employees.is_empty() {
                    ListContent::Empty
                } else {
                    ListContent::Cards(
                        employees
                            .iter()
                            .map(|employee| EmployeeCard::from_employee(employee, &self.display))
                            .collect(),
                    )
                };
                self.view.render_list(content);
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, "Failed to load employees");
                self.view
                    .render_list(ListContent::Failed(format!("{}{}", LIST_ERROR_PREFIX, err)));
                Err(err)
            }
        }
    }

    /// Delete a record after the user confirms
    ///
    /// A declined prompt sends nothing and leaves the banner untouched.
    pub async fn delete_employee(&mut self, id: i64) -> Result<(), ActionError> {
        if !self.confirm.confirm(DELETE_PROMPT) {
            debug!(id, "Delete declined");
            return Err(ActionError::ConfirmationDeclined);
        }

        match self.round_trip(ApiRequest::delete(id)).await {
            Ok(()) => {
                info!(id, "Employee deleted");
                self.view.show_banner(Banner::success(DELETED_TEXT));
                self.refresh_after_change().await;
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    async fn fetch_employees(&self) -> Result<Vec<Employee>, ActionError> {
        let response = self.transport.send(ApiRequest::list()).await?;
        if !response.is_success() {
            return Err(ActionError::ServerRejected {
                status: response.status.as_u16(),
                body: response.body,
            });
        }

        // an empty table may come back as `null`
        let employees: Option<Vec<Employee>> =
            serde_json::from_str(&response.body).map_err(|e| ActionError::MalformedResponse {
                message: e.to_string(),
            })?;
        Ok(employees.unwrap_or_default())
    }

    /// Send a request whose only interesting result is its status
    async fn round_trip(&self, request: ApiRequest) -> Result<(), ActionError> {
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ActionError::ServerRejected {
                status: response.status.as_u16(),
                body: response.body,
            })
        }
    }

    async fn refresh_after_change(&mut self) {
        if let Err(err) = self.refresh_list().await {
            debug!(error = %err, "Refresh after change failed");
        }
    }

    fn report(&mut self, err: ActionError) -> ActionError {
        warn!(error = %err, "Directory action failed");
        self.view.show_banner(Banner::error(err.banner_text()));
        err
    }
}
