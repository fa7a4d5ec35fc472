use std::{error::Error as StdError, time::Duration};

use axum::Router;
use reqwest;

use crate::libs::{
    bima,
    config::{self, Config},
    hnap,
};

mod api;

/// The resources used by this service.
#[derive(Clone)]
pub struct State {
    /// Router HNAP options.
    pub router: hnap::Options,
    /// Carrier Bima API options.
    pub bima: bima::Options,
    /// The client for upstream HTTP requests.
    pub client: reqwest::Client,
}

/// To create resources for the service.
pub fn new_state(conf: &Config) -> Result<State, Box<dyn StdError>> {
    let conf = config::apply_default(conf);
    let (router_conf, bima_conf) = match (conf.router, conf.bima) {
        (Some(router_conf), Some(bima_conf)) => (router_conf, bima_conf),
        _ => return Err("missing router or bima configurations".into()),
    };

    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(bima_conf.insecure.unwrap_or(false))
        .build()?;
    Ok(State {
        router: hnap::Options {
            host: router_conf.host.unwrap_or(config::DEF_ROUTER_HOST.to_string()),
            session_id: router_conf.session_id.unwrap_or_default(),
            cookie_session: router_conf.cookie_session,
            auth: router_conf.auth,
            timeout: Duration::from_secs(
                router_conf.timeout.unwrap_or(config::DEF_ROUTER_TIMEOUT),
            ),
        },
        bima: bima::Options {
            url: bima_conf.url.unwrap_or(config::DEF_BIMA_URL.to_string()),
            bearer: bima_conf.bearer.unwrap_or_default(),
            msisdn: bima_conf.msisdn.unwrap_or_default(),
            call_plan: bima_conf.call_plan.unwrap_or_default(),
            secret: bima_conf.secret.unwrap_or_default(),
            timeout: Duration::from_secs(bima_conf.timeout.unwrap_or(config::DEF_BIMA_TIMEOUT)),
        },
        client,
    })
}

/// To register service URIs.
pub fn new_service(state: &State) -> Router {
    Router::new().merge(api::new_service("/api", state))
}
