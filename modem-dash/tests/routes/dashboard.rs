use axum::{Router, http::StatusCode};
use axum_test::TestServer;
use laboratory::{SpecContext, expect};
use tower_http::services::ServeDir;

use modem_dash_corelib::server_config;

use super::{STATE, libs};
use crate::TestState;

fn new_dashboard_server(context: &SpecContext<TestState>) -> Result<TestServer, String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let routes_state = libs::routes_state(state, libs::SESSION_OK, "/bima/account");
    let app = Router::new()
        .merge(modem_dash::routes::new_service(&routes_state))
        .fallback_service(ServeDir::new(server_config::DEF_STATIC_PATH));
    match TestServer::new(app) {
        Err(e) => Err(format!("new server error: {}", e)),
        Ok(server) => Ok(server),
    }
}

pub fn get_index(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let server = new_dashboard_server(context)?;
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();

    let resp = runtime.block_on(async { server.get("/").await });
    expect(resp.status_code()).to_equal(StatusCode::OK)?;
    let content_type = match resp.headers().get("content-type") {
        None => return Err("missing content-type".to_string()),
        Some(v) => v.to_str().unwrap_or("").to_string(),
    };
    expect(content_type.starts_with("text/html")).to_equal(true)?;
    let body = resp.text();
    expect(body.contains("<title>Modem Dashboard</title>")).to_equal(true)?;
    for api in ["/api/status", "/api/kuota", "/api/clients"] {
        if !body.contains(api) {
            return Err(format!("page does not poll {}", api));
        }
    }

    let resp = runtime.block_on(async { server.get("/index.html").await });
    expect(resp.status_code()).to_equal(StatusCode::OK)
}

pub fn get_unknown_file(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let server = new_dashboard_server(context)?;
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();

    let resp = runtime.block_on(async { server.get("/missing.js").await });
    expect(resp.status_code()).to_equal(StatusCode::NOT_FOUND)
}
