use axum::{Router, http::StatusCode, routing};
use axum_test::TestServer;
use laboratory::{SpecContext, expect};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::runtime::Runtime;

use modem_dash_corelib::http::{Json, Query};

use crate::TestState;

#[derive(Deserialize, Serialize)]
struct Body {
    name: String,
}

#[derive(Deserialize)]
struct Params {
    count: usize,
}

async fn echo(Json(body): Json<Body>) -> Json<Body> {
    Json(body)
}

async fn count(Query(params): Query<Params>) -> String {
    params.count.to_string()
}

/// Test [`Json`] extractor and response.
pub fn json(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let runtime = Runtime::new().unwrap();

    let app = Router::new().route("/echo", routing::post(echo));
    let server = match TestServer::new(app) {
        Err(e) => return Err(format!("new server error: {}", e)),
        Ok(server) => server,
    };

    let body = Body {
        name: "modem".to_string(),
    };
    let resp = runtime.block_on(async { server.post("/echo").json(&body).await });
    expect(resp.status_code()).to_equal(StatusCode::OK)?;
    expect(resp.text().as_str()).to_equal("{\"name\":\"modem\"}")?;

    let resp = runtime.block_on(async { server.post("/echo").text("{").await });
    expect(resp.status_code()).to_equal(StatusCode::BAD_REQUEST)?;
    let body: Value = resp.json();
    expect(body["error"].as_str()).to_equal(Some("BAD_REQUEST"))?;
    expect(body["message"].is_string()).to_equal(true)
}

/// Test [`Query`] extractor.
pub fn query(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let runtime = Runtime::new().unwrap();

    let app = Router::new().route("/count", routing::get(count));
    let server = match TestServer::new(app) {
        Err(e) => return Err(format!("new server error: {}", e)),
        Ok(server) => server,
    };

    let resp = runtime.block_on(async { server.get("/count").add_query_param("count", 3).await });
    expect(resp.status_code()).to_equal(StatusCode::OK)?;
    expect(resp.text().as_str()).to_equal("3")?;

    let resp =
        runtime.block_on(async { server.get("/count").add_query_param("count", "x").await });
    expect(resp.status_code()).to_equal(StatusCode::BAD_REQUEST)?;
    let body: Value = resp.json();
    expect(body["error"].as_str()).to_equal(Some("BAD_REQUEST"))
}
