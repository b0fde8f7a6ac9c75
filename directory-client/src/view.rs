//! UI regions the directory client renders into

use serde::Serialize;

use crate::config::DisplayConfig;
use crate::format::{format_hire_date, format_salary};
use crate::models::Employee;

/// Placeholder shown in the list region for an empty directory
pub const EMPTY_LIST_TEXT: &str = "No employees found.";

/// Banner style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

/// Content of the shared message region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}

/// Display model for one employee card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeCard {
    /// Id carried by the card's delete control
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub job_title: String,
    pub hire_date: String,
    pub salary: String,
}

impl EmployeeCard {
    pub fn from_employee(employee: &Employee, display: &DisplayConfig) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            department: employee.department.clone(),
            job_title: employee.job_title.clone(),
            hire_date: format_hire_date(&employee.hire_date, display),
            salary: format_salary(employee.salary, display),
        }
    }
}

/// What the list region currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    /// Nothing fetched yet
    Pending,
    /// The empty-directory placeholder
    Empty,
    /// One card per record, in server order
    Cards(Vec<EmployeeCard>),
    /// A failed fetch, with its description
    Failed(String),
}

impl ListContent {
    pub fn cards(&self) -> &[EmployeeCard] {
        match self {
            ListContent::Cards(cards) => cards,
            _ => &[],
        }
    }
}

/// The four regions a directory page exposes
///
/// The client writes each region only through these calls.
pub trait DirectoryView {
    /// Update the visible record count
    fn set_count(&mut self, count: usize);

    /// Replace the list region
    fn render_list(&mut self, content: ListContent);

    /// Replace the banner
    fn show_banner(&mut self, banner: Banner);

    /// Clear the creation form
    fn reset_form(&mut self);
}

/// Yes/no prompt shown before destructive actions
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
