//! The `GET /version` handler shared by modem-dash binaries.

use std::future::{self, Ready};

use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::http::{Json, Query};

/// Query parameters for `GET /version`
#[derive(Deserialize)]
pub struct GetVersionQuery {
    pub q: Option<String>,
}

/// Service identity reported by `GET /version`.
#[derive(Clone, Copy, Serialize)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
struct GetVersionRes {
    data: VersionInfo,
}

impl VersionInfo {
    /// Builds the response for the `q` query value.
    ///
    /// - `name`: the service name as plain text.
    /// - `version`: the service version as plain text.
    /// - otherwise: `{"data":{"name":"...","version":"..."}}`.
    pub fn respond(&self, q: Option<&str>) -> Response {
        match q {
            Some("name") => self.name.into_response(),
            Some("version") => self.version.into_response(),
            _ => Json(GetVersionRes { data: *self }).into_response(),
        }
    }
}

/// Creates an axum handler for `GET /version`.
pub fn gen_get_version(
    name: &'static str,
    version: &'static str,
) -> impl Fn(Query<GetVersionQuery>) -> Ready<Response> + Clone + Send + Sync + 'static {
    let info = VersionInfo { name, version };
    move |Query(query): Query<GetVersionQuery>| future::ready(info.respond(query.q.as_deref()))
}
