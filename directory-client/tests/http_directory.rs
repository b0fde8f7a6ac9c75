//! End-to-end tests for the directory client over real HTTP.
//!
//! These tests run `HttpTransport` against a mock server and render into
//! an `HtmlPage`, so the full path from request to markup is exercised.

use directory_client::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ann() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "first_name": "Ann",
        "last_name": "Lee",
        "email": "a@x.com",
        "phone": "555",
        "department": "Eng",
        "job_title": "Dev",
        "hire_date": "2020-01-01",
        "salary": 90000
    })
}

fn directory<C>(server: &MockServer, confirm: C) -> DirectoryClient<HttpTransport, HtmlPage, C>
where
    C: Fn(&str) -> bool,
{
    let api = ApiConfig {
        base_url: server.uri(),
        timeout_secs: Some(5),
    };
    DirectoryClient::new(
        HttpTransport::new(&api).unwrap(),
        HtmlPage::new().unwrap(),
        confirm,
        DisplayConfig::default(),
    )
}

async fn requests_with_method(server: &MockServer, verb: &str) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.method.to_string() == verb)
        .collect()
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_single_record_renders_card() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([ann()])))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = directory(&server, |_: &str| true);
    client.initialize().await;

    let page = client.view();
    assert_eq!(page.count(), 1);
    assert_eq!(page.count_html().unwrap(), r#"<span id="employeeCount">1</span>"#);

    let html = page.list_html().unwrap();
    assert_eq!(html.matches(r#"class="employee-card""#).count(), 1);
    assert!(html.contains("Ann Lee"));
    assert!(html.contains("$90,000"));
    assert!(html.contains(r#"data-employee-id="1""#));
}

#[tokio::test]
async fn test_null_body_is_empty_directory() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let mut client = directory(&server, |_: &str| true);
    assert_eq!(client.refresh_list().await, Ok(0));
    assert_eq!(
        client.view().list_html().unwrap(),
        r#"<div class="loading">No employees found.</div>"#
    );
}

#[tokio::test]
async fn test_unreachable_server_renders_list_error() {
    // bind then drop a listener so its port is closed
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = ApiConfig {
        base_url: format!("http://127.0.0.1:{}", port),
        timeout_secs: Some(5),
    };
    let mut client = DirectoryClient::new(
        HttpTransport::new(&api).unwrap(),
        HtmlPage::new().unwrap(),
        |_: &str| true,
        DisplayConfig::default(),
    );

    let err = client.refresh_list().await.unwrap_err();
    assert!(matches!(err, ActionError::NetworkFailure { .. }));
    assert!(client
        .view()
        .list_html()
        .unwrap()
        .contains("Error loading employees: "));
    assert_eq!(client.view().count(), 0);
}

// =============================================================================
// Creating
// =============================================================================

#[tokio::test]
async fn test_create_posts_json_and_refreshes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employees"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ann()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([ann()])))
        .expect(1)
        .mount(&server)
        .await;

    let form = EmployeeForm::from_fields([
        ("firstName", "Ann"),
        ("lastName", "Lee"),
        ("email", "a@x.com"),
        ("phone", "555"),
        ("department", "Eng"),
        ("jobTitle", "Dev"),
        ("hireDate", "2020-01-01"),
        ("salary", "90000"),
    ]);
    let mut client = directory(&server, |_: &str| true);
    client.view_mut().fill_form(form.clone());

    client.submit_create(&form).await.unwrap();

    assert_eq!(
        client.view().banner_html().unwrap(),
        r#"<div class="success-message">Employee added successfully!</div>"#
    );
    assert!(client.view().form().is_empty());
    assert_eq!(client.view().count(), 1);

    let posts = requests_with_method(&server, "POST").await;
    let body: serde_json::Value = serde_json::from_slice(&posts[0].body).unwrap();
    assert_eq!(body["first_name"], "Ann");
    assert_eq!(body["salary"], 90000.0);
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn test_non_numeric_salary_rejected_by_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid salary"))
        .expect(1)
        .mount(&server)
        .await;

    let form = EmployeeForm::from_fields([("firstName", "Ann"), ("salary", "abc")]);
    let mut client = directory(&server, |_: &str| true);

    let err = client.submit_create(&form).await.unwrap_err();
    assert_eq!(
        err,
        ActionError::ServerRejected {
            status: 400,
            body: "invalid salary".to_string()
        }
    );
    assert_eq!(
        client.view().banner().unwrap().text,
        "Error: invalid salary"
    );

    let posts = requests_with_method(&server, "POST").await;
    let body: serde_json::Value = serde_json::from_slice(&posts[0].body).unwrap();
    assert!(body["salary"].is_null());

    // no refresh after a rejected create
    assert!(requests_with_method(&server, "GET").await.is_empty());
}

// =============================================================================
// Deleting
// =============================================================================

#[tokio::test]
async fn test_delete_then_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/employees/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = directory(&server, |_: &str| true);
    client.delete_employee(1).await.unwrap();

    assert_eq!(
        client.view().banner().unwrap().text,
        "Employee deleted successfully!"
    );
    assert_eq!(client.view().list(), &ListContent::Empty);
}

#[tokio::test]
async fn test_delete_no_content_counts_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/employees/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([ann()])))
        .mount(&server)
        .await;

    let mut client = directory(&server, |_: &str| true);
    assert!(client.delete_employee(7).await.is_ok());
    assert_eq!(client.view().count(), 1);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut client = directory(&server, |_: &str| false);
    let err = client.delete_employee(1).await.unwrap_err();

    assert_eq!(err, ActionError::ConfirmationDeclined);
    assert!(client.view().banner().is_none());
    assert!(server
        .received_requests()
        .await
        .unwrap_or_default()
        .is_empty());
}

#[tokio::test]
async fn test_delete_failure_shows_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/employees/3"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Failed to delete employee"))
        .mount(&server)
        .await;

    let mut client = directory(&server, |_: &str| true);
    let err = client.delete_employee(3).await.unwrap_err();

    assert!(matches!(err, ActionError::ServerRejected { status: 500, .. }));
    assert_eq!(
        client.view().banner_html().unwrap(),
        r#"<div class="error-message">Error: Failed to delete employee</div>"#
    );
}
