//! Demo application
//!
//! A handful of routes showing off HTML, JSON, placeholders, query strings
//! and request bodies.

use serde_json::{Value, json};

use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::router::Router;

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>HTTP Server</title></head>
<body>
    <h1>HTTP Server from Scratch!</h1>
    <p>Built on raw sockets, no frameworks!</p>
    <a href="/users/1">View a user</a>
</body>
</html>
"#;

/// Builds the demo route table.
pub fn routes() -> Router {
    Router::new()
        .get("/", home)
        .get("/api/status", api_status)
        .get("/users/:id", get_user)
        .get("/search", search)
        .post("/users", create_user)
        .get("/ping", ping)
}

fn home(_req: &Request) -> anyhow::Result<Response> {
    Ok(Response::html(HOME_PAGE))
}

fn api_status(_req: &Request) -> anyhow::Result<Response> {
    let body = json!({
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "message": "Server is healthy",
    });
    Ok(Response::json(StatusCode::OK, &body)?)
}

fn get_user(req: &Request) -> anyhow::Result<Response> {
    let id = req
        .param("id")
        .ok_or_else(|| anyhow::anyhow!("route is missing the id placeholder"))?;

    let body = json!({
        "id": id,
        "name": format!("User {}", id),
        "email": format!("user{}@example.com", id),
    });
    Ok(Response::json(StatusCode::OK, &body)?)
}

fn search(req: &Request) -> anyhow::Result<Response> {
    let body = json!({
        "query": req.query("q").unwrap_or("nothing"),
        "page": req.query("page").unwrap_or("1"),
        "results": ["result1", "result2", "result3"],
    });
    Ok(Response::json(StatusCode::OK, &body)?)
}

fn create_user(req: &Request) -> anyhow::Result<Response> {
    // A body that is not JSON is echoed back as null.
    let user = req.json::<Value>().ok();

    let body = json!({
        "message": "User created",
        "user": user,
    });
    Ok(Response::json(StatusCode::CREATED, &body)?)
}

fn ping(_req: &Request) -> anyhow::Result<Response> {
    Ok(Response::text("pong"))
}
