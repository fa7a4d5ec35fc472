//! To generate HTTP error response.
//!
//! ```
//! use modem_dash_corelib::err::ErrResp;
//!
//! // To generate an upstream router error.
//! fn check_status(status: u16) -> Result<(), ErrResp> {
//!     if status >= 400 {
//!         return Err(ErrResp::ErrRouter(Some(format!("router replied {}", status))));
//!     }
//!     Ok(())
//! }
//! ```

use std::{error::Error, fmt};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json;

/// The standard error definitions.
#[derive(Debug)]
pub enum ErrResp {
    ErrBima(Option<String>),
    ErrNotFound(Option<String>),
    ErrParam(Option<String>),
    ErrRouter(Option<String>),
    ErrRsc(Option<String>),
    ErrUnknown(Option<String>),
    Custom(u16, &'static str, Option<String>),
}

/// Used for generating HTTP body for errors.
#[derive(Serialize)]
struct RespJson<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

/// 503, the carrier account API failed or returned unexpected content.
pub const E_BIMA: &'static str = "BIMA_API_ERROR";
/// 404, resource (in path) not found.
pub const E_NOT_FOUND: &'static str = "NOT_FOUND";
/// 400, request format error.
pub const E_PARAM: &'static str = "BAD_REQUEST";
/// 503, the router HNAP API failed or returned unexpected content.
pub const E_ROUTER: &'static str = "ROUTER_UNREACHABLE";
/// 503, allocate resource error.
pub const E_RSC: &'static str = "RESOURCE_ERROR";
/// 500, unknown error.
pub const E_UNKNOWN: &'static str = "UNKNOWN_ERROR";

/// To generate error JSON string for HTTP body.
pub fn to_json(error: &str, message: Option<&str>) -> String {
    match serde_json::to_string(&RespJson { error, message }) {
        Err(_) => format!("{{\"error\":\"{}\"}}", error),
        Ok(body) => body,
    }
}

impl ErrResp {
    fn resp_json(&'_ self) -> RespJson<'_> {
        match *self {
            ErrResp::ErrBima(ref desc) => RespJson {
                error: E_BIMA,
                message: desc.as_deref(),
            },
            ErrResp::ErrNotFound(ref desc) => RespJson {
                error: E_NOT_FOUND,
                message: desc.as_deref(),
            },
            ErrResp::ErrParam(ref desc) => RespJson {
                error: E_PARAM,
                message: desc.as_deref(),
            },
            ErrResp::ErrRouter(ref desc) => RespJson {
                error: E_ROUTER,
                message: desc.as_deref(),
            },
            ErrResp::ErrRsc(ref desc) => RespJson {
                error: E_RSC,
                message: desc.as_deref(),
            },
            ErrResp::ErrUnknown(ref desc) => RespJson {
                error: E_UNKNOWN,
                message: desc.as_deref(),
            },
            ErrResp::Custom(_, err_code, ref desc) => RespJson {
                error: err_code,
                message: desc.as_deref(),
            },
        }
    }

    /// The HTTP status code of the error.
    pub fn status_code(&self) -> StatusCode {
        match *self {
            ErrResp::ErrBima(_) => StatusCode::SERVICE_UNAVAILABLE,
            ErrResp::ErrNotFound(_) => StatusCode::NOT_FOUND,
            ErrResp::ErrParam(_) => StatusCode::BAD_REQUEST,
            ErrResp::ErrRouter(_) => StatusCode::SERVICE_UNAVAILABLE,
            ErrResp::ErrRsc(_) => StatusCode::SERVICE_UNAVAILABLE,
            ErrResp::ErrUnknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ErrResp::Custom(code, _, _) => {
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl fmt::Display for ErrResp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let resp = self.resp_json();
        write!(f, "{}", to_json(resp.error, resp.message))
    }
}

impl Error for ErrResp {}

impl IntoResponse for ErrResp {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.resp_json())).into_response()
    }
}
