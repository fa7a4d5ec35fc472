use axum::{Router, routing};

use super::State;

mod api;
mod response;

pub fn new_service(scope_path: &str, state: &State) -> Router {
    Router::new().nest(
        scope_path,
        Router::new()
            .route("/status", routing::get(api::get_status))
            .route("/kuota", routing::get(api::get_kuota))
            .route("/clients", routing::get(api::get_clients))
            .with_state(state.clone()),
    )
}
