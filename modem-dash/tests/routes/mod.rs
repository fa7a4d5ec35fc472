use std::time::Duration;

use laboratory::{SpecContext, Suite, describe, expect};

use modem_dash::{
    libs::config::{self, Config},
    routes,
};

use crate::TestState;

mod dashboard;

use libs::{new_state, stop_upstream};

pub const STATE: &'static str = "routes";

pub fn suite() -> Suite<TestState> {
    describe("routes", |context| {
        context.it("new_state", fn_new_state);
        context.it("new_service", fn_new_service);

        context.describe("GET /api/status", |context| {
            context.it("200", api::get_status);
            context.it("200 with missing fields", api::get_status_missing_fields);
            context.it("503 connection refused", api::get_status_refused);
            context.it("503 HTTP error", api::get_status_http_error);
            context.it("503 invalid XML", api::get_status_invalid_xml);
        });

        context.describe("GET /api/kuota", |context| {
            context.it("200", api::get_kuota);
            context.it("503 missing msisdn", api::get_kuota_missing_msisdn);
            context.it("503 invalid date", api::get_kuota_invalid_date);
            context.it("503 not JSON", api::get_kuota_not_json);
            context.it("503 HTTP error", api::get_kuota_http_error);
            context.it("503 connection refused", api::get_kuota_refused);
        });

        context.describe("GET /api/clients", |context| {
            context.it("200", api::get_clients);
            context.it("503 HTTP error", api::get_clients_http_error);
        });

        context.describe("GET /", |context| {
            context.it("200 dashboard page", dashboard::get_index);
            context.it("404 unknown file", dashboard::get_unknown_file);
        });

        context
            .before_all(|state| {
                state.insert(STATE, new_state());
            })
            .after_all(|state| {
                let state = state.get_mut(STATE).unwrap();
                stop_upstream(state);
            });
    })
}

fn fn_new_state(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let conf = Config {
        ..Default::default()
    };
    let state = match routes::new_state(&conf) {
        Err(e) => return Err(format!("default config error: {}", e)),
        Ok(state) => state,
    };
    expect(state.router.host.as_str()).to_equal(config::DEF_ROUTER_HOST)?;
    expect(state.router.session_id.as_str()).to_equal("")?;
    expect(state.router.cookie_session.is_none()).to_equal(true)?;
    expect(state.router.timeout).to_equal(Duration::from_secs(config::DEF_ROUTER_TIMEOUT))?;
    expect(state.bima.url.as_str()).to_equal(config::DEF_BIMA_URL)?;
    expect(state.bima.timeout).to_equal(Duration::from_secs(config::DEF_BIMA_TIMEOUT))?;

    let conf = Config {
        router: Some(config::Router {
            host: Some("127.0.0.1:8080".to_string()),
            session_id: Some("session".to_string()),
            timeout: Some(1),
            ..Default::default()
        }),
        bima: Some(config::Bima {
            url: Some("http://127.0.0.1:9000/account".to_string()),
            msisdn: Some("6289600000000".to_string()),
            insecure: Some(true),
            ..Default::default()
        }),
    };
    let state = match routes::new_state(&conf) {
        Err(e) => return Err(format!("config error: {}", e)),
        Ok(state) => state,
    };
    expect(state.router.host.as_str()).to_equal("127.0.0.1:8080")?;
    expect(state.router.session_id.as_str()).to_equal("session")?;
    expect(state.router.timeout).to_equal(Duration::from_secs(1))?;
    expect(state.bima.url.as_str()).to_equal("http://127.0.0.1:9000/account")?;
    expect(state.bima.msisdn.as_str()).to_equal("6289600000000")?;
    expect(state.bima.bearer.as_str()).to_equal("")
}

fn fn_new_service(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let _ = routes::new_service(&libs::routes_state(state, libs::SESSION_OK, "/bima/account"));
    Ok(())
}
