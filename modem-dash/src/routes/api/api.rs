use axum::{extract::State, response::IntoResponse};
use log::warn;

use modem_dash_corelib::{err::ErrResp, http::Json};

use super::{super::State as AppState, response};
use crate::libs::{bima, hnap};

/// `GET /api/status`
pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    const FN_NAME: &'static str = "get_status";

    match hnap::get_device_settings(&state.client, &state.router).await {
        Err(e) => {
            warn!("[{}] get device settings error: {}", FN_NAME, e);
            Err(ErrResp::from(e))
        }
        Ok(status) => Ok(Json(status)),
    }
}

/// `GET /api/kuota`
pub async fn get_kuota(State(state): State<AppState>) -> impl IntoResponse {
    const FN_NAME: &'static str = "get_kuota";

    match bima::get_account(&state.client, &state.bima).await {
        Err(e) => {
            warn!("[{}] get account error: {}", FN_NAME, e);
            Err(ErrResp::from(e))
        }
        Ok(quota) => Ok(Json(quota)),
    }
}

/// `GET /api/clients`
pub async fn get_clients(State(state): State<AppState>) -> impl IntoResponse {
    const FN_NAME: &'static str = "get_clients";

    match hnap::get_client_info(&state.client, &state.router).await {
        Err(e) => {
            warn!("[{}] get client info error: {}", FN_NAME, e);
            Err(ErrResp::from(e))
        }
        Ok(clients) => Ok(Json(response::GetClients { data: clients })),
    }
}
