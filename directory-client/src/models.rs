//! Employee read/write models and the creation form

use serde::{Deserialize, Serialize};

/// One employee record as returned by `GET /api/employees`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub job_title: String,
    /// ISO-8601 date, or a full timestamp depending on the server
    pub hire_date: String,
    pub salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `POST /api/employees`
///
/// `salary` may be NaN when the form text had no numeric prefix;
/// serde_json writes non-finite floats as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeCreateRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub job_title: String,
    pub hire_date: String,
    pub salary: f64,
}

/// Field names of the creation form, in display order
pub const FORM_FIELDS: [&str; 8] = [
    "firstName",
    "lastName",
    "email",
    "phone",
    "department",
    "jobTitle",
    "hireDate",
    "salary",
];

/// Raw text values of the creation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub job_title: String,
    pub hire_date: String,
    pub salary: String,
}

impl EmployeeForm {
    /// Build a form from `(field name, value)` pairs
    ///
    /// Unknown names are ignored; absent fields stay empty.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (name, value) in fields {
            if let Some(slot) = form.field_mut(name.as_ref()) {
                *slot = value.into();
            }
        }
        form
    }

    /// Mutable access to a field by its form name
    pub fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "firstName" => Some(&mut self.first_name),
            "lastName" => Some(&mut self.last_name),
            "email" => Some(&mut self.email),
            "phone" => Some(&mut self.phone),
            "department" => Some(&mut self.department),
            "jobTitle" => Some(&mut self.job_title),
            "hireDate" => Some(&mut self.hire_date),
            "salary" => Some(&mut self.salary),
            _ => None,
        }
    }

    /// Value of a field by its form name
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "firstName" => Some(&self.first_name),
            "lastName" => Some(&self.last_name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "department" => Some(&self.department),
            "jobTitle" => Some(&self.job_title),
            "hireDate" => Some(&self.hire_date),
            "salary" => Some(&self.salary),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Map form fields onto the request payload
    pub fn to_request(&self) -> EmployeeCreateRequest {
        EmployeeCreateRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            department: self.department.clone(),
            job_title: self.job_title.clone(),
            hire_date: self.hire_date.clone(),
            salary: parse_float(&self.salary),
        }
    }
}

/// Parse the longest leading decimal number in `text`
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12abc"`
/// yields 12. Returns NaN when no number prefix exists.
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let rest = &trimmed[end..];
    if rest.starts_with("Infinity") {
        let sign = if trimmed.starts_with('-') { -1.0 } else { 1.0 };
        return sign * f64::INFINITY;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}
