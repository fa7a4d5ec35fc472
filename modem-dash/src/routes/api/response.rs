use serde::Serialize;

use crate::libs::hnap::ClientInfo;

#[derive(Serialize)]
pub struct GetClients {
    pub data: Vec<ClientInfo>,
}
