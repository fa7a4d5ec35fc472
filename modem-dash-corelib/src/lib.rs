//! Common libraries of the modem-dash service.

pub mod args;
pub mod constants;
pub mod err;
pub mod http;
pub mod logger;
pub mod server_config;
pub mod version;
