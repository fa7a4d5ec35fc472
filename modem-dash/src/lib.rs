//! A dashboard backend for an LTE home router and its carrier account.
//!
//! This crate provides:
//!
//! - Router status: signal metrics and system usage from the router HNAP API, with quality labels.
//! - Router clients: the client list from the router HNAP API.
//! - Quota: the subscriber profile and data packages from the carrier Bima API.
//!
//! # Mount modem-dash in your axum App
//!
//! ```no_run
//! use axum::Router;
//! use clap::Command;
//! use modem_dash::{libs, routes};
//!
//! #[tokio::main]
//! async fn main() {
//!     let args = libs::config::reg_args(Command::new("your-project-name")).get_matches();
//!
//!     let conf = libs::config::read_args(&args);
//!     let state = match routes::new_state(&conf) {
//!         Err(e) => {
//!             println!("Error: {}", e);
//!             return;
//!         }
//!         Ok(state) => state,
//!     };
//!     let app: Router = Router::new().merge(routes::new_service(&state));
//! }
//! ```
//!
//! Please see `modem-dash.rs` to get the real world example.

pub mod libs;
pub mod routes;
