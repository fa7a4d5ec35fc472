//! The failure of one upstream collection.

use std::{error::Error, fmt};

use modem_dash_corelib::err::ErrResp;

/// Which upstream failed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CollectErrKind {
    /// The router HNAP API.
    Router,
    /// The carrier Bima API.
    Bima,
}

/// A collector error. All failures of one upstream are reported as the same kind with the message
/// of the underlying error.
#[derive(Debug)]
pub struct CollectError {
    pub kind: CollectErrKind,
    pub message: String,
}

impl CollectError {
    pub fn router<E: fmt::Display>(e: E) -> Self {
        CollectError {
            kind: CollectErrKind::Router,
            message: e.to_string(),
        }
    }

    pub fn bima<E: fmt::Display>(e: E) -> Self {
        CollectError {
            kind: CollectErrKind::Bima,
            message: e.to_string(),
        }
    }
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            CollectErrKind::Router => write!(f, "router: {}", self.message),
            CollectErrKind::Bima => write!(f, "bima: {}", self.message),
        }
    }
}

impl Error for CollectError {}

impl From<CollectError> for ErrResp {
    fn from(e: CollectError) -> Self {
        match e.kind {
            CollectErrKind::Router => ErrResp::ErrRouter(Some(e.message)),
            CollectErrKind::Bima => ErrResp::ErrBima(Some(e.message)),
        }
    }
}
