//! Carrier Bima (JSON) account client.

use std::time::Duration;

use reqwest::{Client, header};
use serde::Serialize;
use serde_json::{Map, Value};

use modem_dash_corelib::constants::ContentType;

use super::{units, upstream::CollectError};

/// Carrier account options.
#[derive(Clone)]
pub struct Options {
    pub url: String,
    pub bearer: String,
    pub msisdn: String,
    pub call_plan: String,
    pub secret: String,
    pub timeout: Duration,
}

/// The subscriber profile. Values are copied from the upstream response as is.
#[derive(Clone, Debug, Serialize)]
pub struct QuotaProfile {
    pub msisdn: Value,
    pub tipe: Value,
    pub saldo: Value,
    pub masa_aktif: Value,
}

/// One data package.
#[derive(Clone, Debug, Serialize)]
pub struct PackageUsage {
    pub nama: Value,
    pub total: Value,
    pub sisa: Value,
    pub terpakai: Value,
    pub persen: f64,
    pub berlaku: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct QuotaResponse {
    pub profile: QuotaProfile,
    pub paket: Vec<PackageUsage>,
}

#[derive(Serialize)]
struct AccountReq<'a> {
    imei: &'a str,
    language: &'a str,
    #[serde(rename = "callPlan")]
    call_plan: &'a str,
    msisdn: &'a str,
    #[serde(rename = "secretKey")]
    secret_key: &'a str,
    #[serde(rename = "subscriberType")]
    subscriber_type: &'a str,
}

const USER_AGENT: &'static str = "Mozilla/5.0";
const HEADER_MSISDN: &'static str = "X-MSISDN";
const IMEI: &'static str = "WebSelfcare";
const LANGUAGE: &'static str = "0";
const SUBSCRIBER_TYPE: &'static str = "Prepaid";

/// To get the subscriber profile and data packages.
pub async fn get_account(client: &Client, opts: &Options) -> Result<QuotaResponse, CollectError> {
    let body = AccountReq {
        imei: IMEI,
        language: LANGUAGE,
        call_plan: opts.call_plan.as_str(),
        msisdn: opts.msisdn.as_str(),
        secret_key: opts.secret.as_str(),
        subscriber_type: SUBSCRIBER_TYPE,
    };
    let req = client
        .post(opts.url.as_str())
        .timeout(opts.timeout)
        .header(header::ACCEPT, ContentType::JSON)
        .header(header::AUTHORIZATION, format!("Bearer {}", opts.bearer))
        .header(header::USER_AGENT, USER_AGENT)
        .header(HEADER_MSISDN, opts.msisdn.as_str())
        .json(&body);

    let resp = match req.send().await {
        Err(e) => return Err(CollectError::bima(e)),
        Ok(resp) => match resp.error_for_status() {
            Err(e) => return Err(CollectError::bima(e)),
            Ok(resp) => resp,
        },
    };
    let raw = match resp.json::<Value>().await {
        Err(e) => return Err(CollectError::bima(e)),
        Ok(raw) => raw,
    };
    parse_account(&raw)
}

/// Projects the account response into the profile and the flattened package list.
///
/// Packages keep the upstream order of groups and their contents.
pub fn parse_account(raw: &Value) -> Result<QuotaResponse, CollectError> {
    let data = match raw.get("data").and_then(|v| v.as_object()) {
        None => return Err(missing_key("data")),
        Some(data) => data,
    };

    let profile = QuotaProfile {
        msisdn: required(data, "msisdn")?,
        tipe: required(data, "subscriberType")?,
        saldo: required(data, "balance")?,
        masa_aktif: required(data, "validity")?,
    };

    let mut paket = vec![];
    for group in list(data.get("packageProductGroupList"), "packageProductGroupList")? {
        let group = match group.as_object() {
            None => return Err(CollectError::bima("invalid package group")),
            Some(group) => group,
        };
        for content in list(group.get("content"), "content")? {
            let content = match content.as_object() {
                None => return Err(CollectError::bima("invalid package content")),
                Some(content) => content,
            };
            paket.push(parse_package(content)?);
        }
    }

    Ok(QuotaResponse { profile, paket })
}

fn parse_package(content: &Map<String, Value>) -> Result<PackageUsage, CollectError> {
    let allocated = size(content, "allocated")?;
    let remaining = size(content, "remaining")?;
    let persen = match units::usage_percent(allocated, remaining) {
        Err(e) => return Err(CollectError::bima(format!("invalid package size: {}", e))),
        Ok(persen) => persen,
    };
    let validity_raw = match content.get("validityRaw") {
        None => return Err(missing_key("validityRaw")),
        Some(Value::String(raw)) => raw.as_str(),
        Some(_) => return Err(CollectError::bima("invalid validityRaw")),
    };
    let berlaku = match units::validity_date(validity_raw) {
        Err(e) => {
            return Err(CollectError::bima(format!(
                "invalid validityRaw {}: {}",
                validity_raw, e
            )));
        }
        Ok(berlaku) => berlaku,
    };

    Ok(PackageUsage {
        nama: optional(content, "title"),
        total: optional(content, "allocated"),
        sisa: optional(content, "remaining"),
        terpakai: optional(content, "consumed"),
        persen,
        berlaku,
    })
}

fn missing_key(key: &str) -> CollectError {
    CollectError::bima(format!("missing key: {}", key))
}

fn required(obj: &Map<String, Value>, key: &str) -> Result<Value, CollectError> {
    match obj.get(key) {
        None => Err(missing_key(key)),
        Some(value) => Ok(value.clone()),
    }
}

fn optional(obj: &Map<String, Value>, key: &str) -> Value {
    obj.get(key).cloned().unwrap_or(Value::Null)
}

/// A missing or null list is empty.
fn list<'a>(value: Option<&'a Value>, key: &str) -> Result<&'a [Value], CollectError> {
    match value {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(CollectError::bima(format!("invalid list: {}", key))),
    }
}

/// A size string like `2GB`. Missing or null is `None`.
fn size<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<Option<&'a str>, CollectError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(v)) => Ok(Some(v.as_str())),
        Some(_) => Err(CollectError::bima(format!("invalid package size: {}", key))),
    }
}
