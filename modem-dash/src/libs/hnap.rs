//! Router HNAP (SOAP/XML) client.

use std::time::Duration;

use reqwest::{Client, header};
use roxmltree::{Document, Node};
use serde::Serialize;

use modem_dash_corelib::constants::ContentType;

use super::{
    quality::{self, quality},
    upstream::CollectError,
};

/// Router connection options.
#[derive(Clone)]
pub struct Options {
    /// Router host with optional port, without scheme.
    pub host: String,
    /// The `session_id` cookie for `GetDeviceSettings`.
    pub session_id: String,
    /// The `session_id` cookie for `GetClientInfo`.
    pub cookie_session: Option<String>,
    /// The `HNAP_AUTH` header.
    pub auth: Option<String>,
    pub timeout: Duration,
}

/// The normalized result of `GetDeviceSettings`.
#[derive(Clone, Debug, Serialize)]
pub struct RouterStatus {
    pub signal: String,
    pub sinr: String,
    pub rsrq: String,
    pub rssi: String,
    pub cqi: String,
    pub band: String,
    pub bw: String,
    pub cellid: String,
    pub enb: String,
    pub pci: String,
    pub tac: String,
    pub cpu: String,
    pub ram: String,
    pub uptime: String,
    pub ipv4: String,
    pub signal_status: &'static str,
    pub sinr_status: &'static str,
    pub rsrq_status: &'static str,
    pub rssi_status: &'static str,
    pub cqi_status: &'static str,
}

/// One entry of `GetClientInfo`.
#[derive(Clone, Debug, Serialize)]
pub struct ClientInfo {
    pub mac: String,
    pub ipv4: String,
    pub ipv6: String,
    #[serde(rename = "type")]
    pub client_type: String,
    pub name: String,
    pub nickname: String,
}

pub const HNAP_NS: &'static str = "http://purenetworks.com/HNAP1/";
pub const ACTION_DEVICE_SETTINGS: &'static str = "GetDeviceSettings";
pub const ACTION_CLIENT_INFO: &'static str = "GetClientInfo";

const USER_AGENT: &'static str = "Mozilla/5.0";
const HEADER_HNAP_AUTH: &'static str = "HNAP_AUTH";
const HEADER_SOAP_ACTION: &'static str = "SOAPAction";
const DEF_STATUS_FIELD: &'static str = "0";
const DEF_CLIENT_FIELD: &'static str = "";

/// Returns the SOAP envelope that invokes the HNAP `action` without arguments.
pub fn soap_body(action: &str) -> String {
    format!(
        "<?xml version=\"1.0\"?>\n\
         <soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\n \
         <soap:Body>\n  \
         <{} xmlns=\"{}\" />\n \
         </soap:Body>\n\
         </soap:Envelope>\n",
        action, HNAP_NS
    )
}

/// Returns the trimmed text of the first HNAP element `tag` under `node` at any depth.
///
/// `default` is returned if the element does not exist or has no text.
pub fn get_field(node: Node<'_, '_>, tag: &str, default: &str) -> String {
    let found = node.descendants().find(|n| {
        n.is_element() && n.tag_name().name() == tag && n.tag_name().namespace() == Some(HNAP_NS)
    });
    match found.and_then(|n| n.text()) {
        Some(text) if !text.is_empty() => text.trim().to_string(),
        _ => default.to_string(),
    }
}

/// To get router signal and system status.
pub async fn get_device_settings(
    client: &Client,
    opts: &Options,
) -> Result<RouterStatus, CollectError> {
    let body = post_action(
        client,
        opts,
        ACTION_DEVICE_SETTINGS,
        opts.session_id.as_str(),
    )
    .await?;
    parse_device_settings(body.as_str())
}

/// To get clients connected to the router.
pub async fn get_client_info(
    client: &Client,
    opts: &Options,
) -> Result<Vec<ClientInfo>, CollectError> {
    let cookie = match opts.cookie_session.as_ref() {
        None => opts.session_id.as_str(),
        Some(cookie) => cookie.as_str(),
    };
    let body = post_action(client, opts, ACTION_CLIENT_INFO, cookie).await?;
    parse_client_info(body.as_str())
}

/// Parses the `GetDeviceSettings` response. Missing fields are `"0"`.
pub fn parse_device_settings(xml: &str) -> Result<RouterStatus, CollectError> {
    let doc = Document::parse(xml).map_err(CollectError::router)?;
    let root = doc.root();
    let field = |tag: &str| get_field(root, tag, DEF_STATUS_FIELD);

    let signal = field("signal_value");
    let sinr = field("sinr_value");
    let rsrq = field("rsrq_value");
    let rssi = field("rssi_value");
    let cqi = field("cqi_value");
    Ok(RouterStatus {
        signal_status: quality(signal.as_str(), &quality::SIGNAL),
        sinr_status: quality(sinr.as_str(), &quality::SINR),
        rsrq_status: quality(rsrq.as_str(), &quality::RSRQ),
        rssi_status: quality(rssi.as_str(), &quality::RSSI),
        cqi_status: quality(cqi.as_str(), &quality::CQI),
        signal,
        sinr,
        rsrq,
        rssi,
        cqi,
        band: field("band_value"),
        bw: field("bandwidth_value"),
        cellid: field("cellid_value"),
        enb: field("enbid_value"),
        pci: field("pci_value"),
        tac: field("tac_value"),
        cpu: field("cpu_use"),
        ram: field("memory_use"),
        uptime: field("system_uptime"),
        ipv4: field("wan_ipv4_value"),
    })
}

/// Parses the `GetClientInfo` response in document order. Missing fields are empty.
pub fn parse_client_info(xml: &str) -> Result<Vec<ClientInfo>, CollectError> {
    let doc = Document::parse(xml).map_err(CollectError::router)?;
    let clients = doc
        .descendants()
        .filter(|n| {
            n.is_element()
                && n.tag_name().name() == "ClientInfo"
                && n.tag_name().namespace() == Some(HNAP_NS)
        })
        .map(|n| ClientInfo {
            mac: get_field(n, "MacAddress", DEF_CLIENT_FIELD),
            ipv4: get_field(n, "IPv4Address", DEF_CLIENT_FIELD),
            ipv6: get_field(n, "IPv6Address", DEF_CLIENT_FIELD),
            client_type: get_field(n, "Type", DEF_CLIENT_FIELD),
            name: get_field(n, "DeviceName", DEF_CLIENT_FIELD),
            nickname: get_field(n, "NickName", DEF_CLIENT_FIELD),
        })
        .collect();
    Ok(clients)
}

/// Sends one HNAP action and returns the response body.
async fn post_action(
    client: &Client,
    opts: &Options,
    action: &str,
    session_id: &str,
) -> Result<String, CollectError> {
    let url = format!("http://{}/HNAP1/{}", opts.host, action);
    let mut builder = client
        .post(url)
        .timeout(opts.timeout)
        .header(header::CONTENT_TYPE, ContentType::XML)
        .header(HEADER_SOAP_ACTION, format!("\"{}{}\"", HNAP_NS, action))
        .header(header::USER_AGENT, USER_AGENT)
        .header(header::COOKIE, format!("session_id={}", session_id))
        .body(soap_body(action));
    if let Some(auth) = opts.auth.as_ref() {
        builder = builder.header(HEADER_HNAP_AUTH, auth.as_str());
    }

    let resp = match builder.send().await {
        Err(e) => return Err(CollectError::router(e)),
        Ok(resp) => match resp.error_for_status() {
            Err(e) => return Err(CollectError::router(e)),
            Ok(resp) => resp,
        },
    };
    match resp.text().await {
        Err(e) => Err(CollectError::router(e)),
        Ok(body) => Ok(body),
    }
}
