mod common;

use common::{StubServer, dead_url, login_with_token, sx, temp_home};
use predicates::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[test]
fn test_requests_carry_bearer_token() {
    let server = StubServer::start(|method, path, _| match (method, path) {
        ("GET", "roles") => (
            200,
            r#"[{"id": 1, "name": "Admin", "permissions": [{"name": "manage-users"}, "view-reports"]}]"#
                .to_string(),
        ),
        _ => (404, "{}".to_string()),
    });

    let home = temp_home("bearer");
    login_with_token(&home, "secret-token");

    sx(&home)
        .args(["--api", &server.base_url, "roles", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin"))
        .stdout(predicate::str::contains("manage-users, view-reports"));

    let reqs = server.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].authorization.as_deref(), Some("Bearer secret-token"));
}

#[test]
fn test_login_with_credentials_stores_session() {
    let server = StubServer::start(|method, path, body| match (method, path) {
        ("POST", "login") if body.contains("ops@example.com") => (
            200,
            r#"{"access_token": "issued", "user": {"id": 3, "name": "Ops Lead", "email": "ops@example.com", "role": "Admin"}}"#
                .to_string(),
        ),
        _ => (401, r#"{"message": "Invalid credentials"}"#.to_string()),
    });

    let home = temp_home("login_creds");

    sx(&home)
        .args([
            "--api", &server.base_url, "login", "--email", "ops@example.com", "--password",
            "pw",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as Ops Lead"));

    sx(&home)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ops Lead <ops@example.com>"));

    assert!(server.requests()[0].authorization.is_none());
}

#[test]
fn test_refused_credentials_keep_existing_session() {
    let server = StubServer::start(|method, path, _| match (method, path) {
        ("POST", "login") => (401, r#"{"message": "Invalid credentials"}"#.to_string()),
        _ => (404, "{}".to_string()),
    });

    let home = temp_home("login_refused");
    login_with_token(&home, "existing");
    let session_file = home.join(".siteops").join("session.json");

    sx(&home)
        .args([
            "--api", &server.base_url, "login", "--email", "ops@example.com", "--password",
            "wrong",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"))
        .stderr(predicate::str::contains("Session expired").not());

    let stored = std::fs::read_to_string(&session_file).expect("session kept");
    assert!(stored.contains("existing"));
}

#[test]
fn test_commands_need_a_session() {
    let home = temp_home("no_session");

    sx(&home)
        .args(["--api", &dead_url(), "employees", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("siteops login"));
}

#[test]
fn test_unauthorized_clears_session() {
    let server =
        StubServer::start(|_, _, _| (401, r#"{"message": "Unauthenticated."}"#.to_string()));

    let home = temp_home("expired");
    login_with_token(&home, "stale");
    let session_file = home.join(".siteops").join("session.json");
    assert!(session_file.exists());

    sx(&home)
        .args(["--api", &server.base_url, "employees", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session expired"));

    assert!(!session_file.exists());
}

#[test]
fn test_validation_errors_show_field_messages() {
    let server = StubServer::start(|method, path, _| match (method, path) {
        ("POST", "employees") => (
            422,
            r#"{"message": "The given data was invalid.",
                "errors": {"email": ["The email has already been taken."]}}"#
                .to_string(),
        ),
        _ => (404, "{}".to_string()),
    });

    let home = temp_home("validation");
    login_with_token(&home, "tok");

    sx(&home)
        .args([
            "--api", &server.base_url, "employees", "create", "--first-name", "Ann",
            "--last-name", "Lee", "--email", "ann@example.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The given data was invalid."))
        .stderr(predicate::str::contains("The email has already been taken."));

    let reqs = server.requests();
    assert!(reqs[0].body.contains("\"first_name\":\"Ann\""));
}

#[test]
fn test_server_error_without_message_falls_back() {
    let server = StubServer::start(|_, _, _| (500, "<html>oops</html>".to_string()));

    let home = temp_home("server_error");
    login_with_token(&home, "tok");

    sx(&home)
        .args(["--api", &server.base_url, "sites", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API error (500): Network error"));
}

#[test]
fn test_unreachable_backend_is_network_error() {
    let home = temp_home("unreachable");
    login_with_token(&home, "tok");

    sx(&home)
        .args(["--api", &dead_url(), "sites", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));
}

#[test]
fn test_category_toggle_commits_and_reloads() {
    let flipped = Arc::new(AtomicBool::new(false));
    let state = Arc::clone(&flipped);
    let server = StubServer::start(move |method, path, body| match (method, path) {
        ("GET", "master-settings/occurrence-categories") => {
            let status = if state.load(Ordering::SeqCst) { 0 } else { 1 };
            (200, format!(r#"[{{"id": 5, "name": "Theft", "status": {status}}}]"#))
        }
        ("PUT", "master-settings/occurrence-categories/5") if body.contains("\"status\":false") => {
            state.store(true, Ordering::SeqCst);
            (200, r#"{"id": 5, "name": "Theft", "status": false}"#.to_string())
        }
        _ => (400, r#"{"message": "unexpected"}"#.to_string()),
    });

    let home = temp_home("toggle_ok");
    login_with_token(&home, "tok");

    sx(&home)
        .args(["--api", &server.base_url, "categories", "toggle", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category 5 is now Inactive"));

    let methods: Vec<_> = server.requests().into_iter().map(|r| r.method).collect();
    assert_eq!(methods, ["GET", "PUT", "GET"]);
}

#[test]
fn test_category_toggle_rolls_back_on_failure() {
    let server = StubServer::start(|method, path, _| match (method, path) {
        ("GET", "master-settings/occurrence-categories") => (
            200,
            r#"{"data": [{"id": 5, "name": "Theft", "status": "active"}]}"#.to_string(),
        ),
        _ => (500, r#"{"message": "Could not update category"}"#.to_string()),
    });

    let home = temp_home("toggle_fail");
    login_with_token(&home, "tok");

    sx(&home)
        .args(["--api", &server.base_url, "categories", "toggle", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category 5 stays Active"))
        .stderr(predicate::str::contains("Could not update category"));

    // no reload after a failed change
    assert_eq!(server.requests().len(), 2);
}

#[test]
fn test_employee_delete_uses_post_route() {
    let server = StubServer::start(|method, path, _| match (method, path) {
        ("POST", "employees/delete/12") => (200, r#"{"message": "deleted"}"#.to_string()),
        _ => (404, "{}".to_string()),
    });

    let home = temp_home("emp_delete");
    login_with_token(&home, "tok");

    sx(&home)
        .args(["--api", &server.base_url, "employees", "delete", "12", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee 12 deleted"));
}

#[test]
fn test_approve_sends_status_update() {
    let server = StubServer::start(|method, path, _| match (method, path) {
        ("PUT", "employees/8/status") => (
            200,
            r#"{"id": 8, "first_name": "Ann", "last_name": "Lee", "status": "approved"}"#
                .to_string(),
        ),
        _ => (404, "{}".to_string()),
    });

    let home = temp_home("approve");
    login_with_token(&home, "tok");

    sx(&home)
        .args([
            "--api", &server.base_url, "employees", "approve", "8", "--remarks", "docs ok",
        ])
        .assert()
        .success();

    let body = &server.requests()[0].body;
    assert!(body.contains("\"status\":\"approved\""));
    assert!(body.contains("\"remarks\":\"docs ok\""));
}

#[test]
fn test_occurrence_update_needs_a_field() {
    let home = temp_home("occ_update_empty");
    login_with_token(&home, "tok");

    sx(&home)
        .args(["--api", &dead_url(), "occurrences", "update", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to update"));
}

#[test]
fn test_sop_upload_is_multipart() {
    let server = StubServer::start(|method, path, _| match (method, path) {
        ("POST", "sop-documents") => (201, r#"{"id": 77, "title": "Fire drill"}"#.to_string()),
        _ => (404, "{}".to_string()),
    });

    let home = temp_home("sop_upload");
    login_with_token(&home, "tok");
    let file = home.join("drill.txt");
    std::fs::write(&file, "evacuate via stairs").expect("write upload");

    sx(&home)
        .args([
            "--api",
            &server.base_url,
            "sop",
            "upload",
            "--file",
            file.to_str().expect("utf8 path"),
            "--title",
            "Fire drill",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("id 77"));

    let req = &server.requests()[0];
    assert!(
        req.content_type
            .as_deref()
            .is_some_and(|c| c.starts_with("multipart/form-data"))
    );
    assert!(req.body.contains("evacuate via stairs"));
}

#[test]
fn test_overview_shows_lists_that_loaded() {
    let server = StubServer::start(|method, path, _| match (method, path) {
        ("GET", "employees") => (
            200,
            r#"[{"id": 1, "name": "Ann Lee", "status": "active"}]"#.to_string(),
        ),
        ("GET", "sites") => (200, r#"[{"id": 2, "name": "North Gate"}]"#.to_string()),
        _ => (500, r#"{"message": "occurrences down"}"#.to_string()),
    });

    let home = temp_home("overview");
    login_with_token(&home, "tok");

    sx(&home)
        .args(["--api", &server.base_url, "overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann Lee"))
        .stdout(predicate::str::contains("North Gate"))
        .stdout(predicate::str::contains("Occurrences unavailable"))
        .stdout(predicate::str::contains("Page 1 of 1"));
}
