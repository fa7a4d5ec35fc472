use axum::{Router, http::StatusCode, routing};
use axum_test::TestServer;
use laboratory::{SpecContext, expect};
use tokio::runtime::Runtime;

use modem_dash_corelib::version;

use crate::TestState;

const TEST_NAME: &'static str = "modem-dash";
const TEST_VER: &'static str = "0.1.0";

/// Test [`version::gen_get_version`].
pub fn gen_get_version(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let runtime = Runtime::new().unwrap();

    let app = Router::new().route(
        "/version",
        routing::get(version::gen_get_version(TEST_NAME, TEST_VER)),
    );
    let server = match TestServer::new(app) {
        Err(e) => return Err(format!("new server error: {}", e)),
        Ok(server) => server,
    };

    let expect_full = format!(
        "{{\"data\":{{\"name\":\"{}\",\"version\":\"{}\"}}}}",
        TEST_NAME, TEST_VER
    );

    let resp = runtime.block_on(async { server.get("/version").await });
    expect(resp.status_code()).to_equal(StatusCode::OK)?;
    expect(resp.text().as_str()).to_equal(expect_full.as_str())?;

    // Unknown query value returns the full JSON.
    let resp =
        runtime.block_on(async { server.get("/version").add_query_param("q", "test").await });
    expect(resp.status_code()).to_equal(StatusCode::OK)?;
    expect(resp.text().as_str()).to_equal(expect_full.as_str())?;

    let resp =
        runtime.block_on(async { server.get("/version").add_query_param("q", "name").await });
    expect(resp.status_code()).to_equal(StatusCode::OK)?;
    expect(resp.text().as_str()).to_equal(TEST_NAME)?;

    let resp =
        runtime.block_on(async { server.get("/version").add_query_param("q", "version").await });
    expect(resp.status_code()).to_equal(StatusCode::OK)?;
    expect(resp.text().as_str()).to_equal(TEST_VER)
}
