//! End-to-end flows against a mocked posts service.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "tok-abcdefghijklmnop";

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Temp POSTBOARD_HOME, optionally with a stored session.
fn temp_home(signed_in: bool) -> TempDir {
    let home = TempDir::new().expect("create temp postboard home");
    if signed_in {
        fs::write(
            home.path().join("session.json"),
            json!({ "token": TOKEN }).to_string(),
        )
        .unwrap();
    }
    home
}

fn postboard(home: &Path, server: &MockServer) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("postboard");
    cmd.env("POSTBOARD_HOME", home)
        .env("POSTBOARD_BASE_URL", server.uri())
        .env_remove("POSTBOARD_PASSWORD");
    cmd
}

fn posts_page(posts: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "totalCount": 1,
        "page": 1,
        "pageSize": 10,
        "totalPages": 1,
        "posts": posts,
    }))
}

async fn request_log(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| format!("{} {}", r.method, r.url.path()))
        .collect()
}

#[tokio::test]
async fn test_login_persists_session() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(false);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": TOKEN, "token_type": "bearer"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    postboard(home.path(), &server)
        .args(["login", "-l", "ann", "-p", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as ann"))
        .stdout(predicate::str::contains("tok-...mnop"))
        .stdout(predicate::str::contains(TOKEN).not());

    let session = fs::read_to_string(home.path().join("session.json")).unwrap();
    assert!(session.contains(TOKEN));
}

#[tokio::test]
async fn test_login_reads_password_from_stdin() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(false);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string("username=ann&password=from-stdin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": TOKEN})))
        .expect(1)
        .mount(&server)
        .await;

    postboard(home.path(), &server)
        .args(["login", "-l", "ann"])
        .write_stdin("from-stdin\n")
        .assert()
        .success();
}

#[tokio::test]
async fn test_failed_login_prints_notice_only() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(false);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "bad creds"})))
        .mount(&server)
        .await;

    postboard(home.path(), &server)
        .args(["login", "-l", "ann", "-p", "wrong"])
        .assert()
        .code(1)
        .stderr("Login failed\n");

    assert!(!home.path().join("session.json").exists());
}

#[tokio::test]
async fn test_register_sends_filled_profile() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(false);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "login": "bob",
            "password": "pw",
            "email": "bob@example.com",
            "first_name": "bob",
            "last_name": "bob",
            "phone": "0000000000",
            "role": "user",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": TOKEN})))
        .expect(1)
        .mount(&server)
        .await;

    postboard(home.path(), &server)
        .args(["register", "-l", "bob", "-p", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered and logged in as bob"));

    assert!(home.path().join("session.json").exists());
}

#[tokio::test]
async fn test_logout_removes_session() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(true);
    let server = MockServer::start().await;

    postboard(home.path(), &server)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    assert!(!home.path().join("session.json").exists());
    assert!(request_log(&server).await.is_empty());
}

#[tokio::test]
async fn test_list_sends_bearer_token() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(true);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(posts_page(json!([
            {"post_id": 1, "title": "Hello", "content": "First post", "likes_count": 2}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    postboard(home.path(), &server)
        .args(["posts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1  Hello  (👍 2)"))
        .stdout(predicate::str::contains("First post"));
}

#[tokio::test]
async fn test_posts_require_login() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(false);
    let server = MockServer::start().await;

    postboard(home.path(), &server)
        .args(["posts", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));

    assert!(request_log(&server).await.is_empty());
}

#[tokio::test]
async fn test_like_posts_then_refreshes() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(true);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts/1/like"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(posts_page(json!([
            {"post_id": 1, "title": "A", "content": "", "likes_count": 1}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    postboard(home.path(), &server)
        .args(["like", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Liked post #1 (👍 1)"));

    assert_eq!(
        request_log(&server).await,
        vec!["POST /api/posts/1/like", "GET /api/posts"]
    );
}

#[tokio::test]
async fn test_unlike_failure_prints_notice() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(true);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts/1/unlike"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Cannot unlike further"})),
        )
        .mount(&server)
        .await;

    postboard(home.path(), &server)
        .args(["unlike", "1"])
        .assert()
        .code(1)
        .stderr("Unlike failed\n");

    assert_eq!(request_log(&server).await, vec!["POST /api/posts/1/unlike"]);
}

#[tokio::test]
async fn test_create_refreshes_list() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(true);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .and(body_json(json!({"title": "T", "content": "C"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"post_id": 5})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(posts_page(json!([
            {"post_id": 5, "title": "T", "content": "C", "likes_count": 0}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    postboard(home.path(), &server)
        .args(["posts", "create", "-t", "T", "-c", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post created."))
        .stdout(predicate::str::contains("#5  T"));
}

#[tokio::test]
async fn test_declined_delete_makes_no_request() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(true);
    let server = MockServer::start().await;

    postboard(home.path(), &server)
        .args(["posts", "delete", "3"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[y/N]"))
        .stdout(predicate::str::contains("Delete cancelled."));

    assert!(request_log(&server).await.is_empty());
}

#[tokio::test]
async fn test_confirmed_delete_then_refresh() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(true);
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/posts/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(posts_page(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    postboard(home.path(), &server)
        .args(["posts", "delete", "3", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post #3 deleted."))
        .stdout(predicate::str::contains("No posts yet."));

    assert_eq!(
        request_log(&server).await,
        vec!["DELETE /api/posts/3", "GET /api/posts"]
    );
}

#[tokio::test]
async fn test_delete_by_non_author_prints_notice() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(true);
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/posts/3"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    postboard(home.path(), &server)
        .args(["posts", "delete", "3"])
        .write_stdin("y\n")
        .assert()
        .code(1)
        .stderr("Failed to delete post. You may not be the author.\n");
}

#[tokio::test]
async fn test_edit_sends_only_given_fields() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(true);
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/posts/2"))
        .and(body_json(json!({"content": "new body"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"post_id": 2})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(posts_page(json!([])))
        .mount(&server)
        .await;

    postboard(home.path(), &server)
        .args(["posts", "edit", "2", "-c", "new body"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post #2 updated."));
}

#[tokio::test]
async fn test_whoami_prints_profile() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home(true);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": 7,
            "login": "ann",
            "email": "ann@example.com",
            "role": "user",
        })))
        .mount(&server)
        .await;

    postboard(home.path(), &server)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("ann (id 7)"))
        .stdout(predicate::str::contains("email: ann@example.com"));
}
