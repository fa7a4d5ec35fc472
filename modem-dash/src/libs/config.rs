//! Program configurations.

use clap::{Arg, ArgMatches, Command, builder::RangedU64ValueParser};
use serde::Deserialize;

use modem_dash_corelib::args;

/// Configuration file object.
#[derive(Default, Deserialize)]
pub struct Config {
    /// Router HNAP configurations.
    pub router: Option<Router>,
    /// Carrier Bima API configurations.
    pub bima: Option<Bima>,
}

/// Router HNAP configurations.
#[derive(Default, Deserialize)]
pub struct Router {
    /// Router host (and port). Default is **192.168.0.1**.
    pub host: Option<String>,
    /// The `session_id` cookie for `GetDeviceSettings`.
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
    /// The `session_id` cookie for `GetClientInfo`. Use `session_id` if missing.
    #[serde(rename = "cookieSession")]
    pub cookie_session: Option<String>,
    /// The `HNAP_AUTH` header value.
    pub auth: Option<String>,
    /// Request timeout in seconds. Default is **5**.
    pub timeout: Option<u64>,
}

/// Carrier Bima API configurations.
#[derive(Default, Deserialize)]
pub struct Bima {
    /// The account API URL.
    pub url: Option<String>,
    /// The bearer token.
    pub bearer: Option<String>,
    /// The subscriber number.
    pub msisdn: Option<String>,
    #[serde(rename = "callPlan")]
    pub call_plan: Option<String>,
    /// The `secretKey` of the request body.
    pub secret: Option<String>,
    /// Request timeout in seconds. Default is **10**.
    pub timeout: Option<u64>,
    /// To accept invalid TLS certificates. Default is **false**.
    pub insecure: Option<bool>,
}

pub const DEF_ROUTER_HOST: &'static str = "192.168.0.1";
pub const DEF_ROUTER_TIMEOUT: u64 = 5;
pub const DEF_BIMA_URL: &'static str = "https://bima.tri.co.id/apibima/profile/account";
pub const DEF_BIMA_TIMEOUT: u64 = 10;

/// To register Clap arguments.
pub fn reg_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("router.host")
            .long("router.host")
            .help("router host (ex: 192.168.0.1)")
            .num_args(1),
    )
    .arg(
        Arg::new("router.sessionid")
            .long("router.sessionid")
            .help("HNAP session_id cookie")
            .num_args(1),
    )
    .arg(
        Arg::new("router.cookiesession")
            .long("router.cookiesession")
            .help("HNAP session_id cookie for client list")
            .num_args(1),
    )
    .arg(
        Arg::new("router.auth")
            .long("router.auth")
            .help("HNAP_AUTH header")
            .num_args(1),
    )
    .arg(
        Arg::new("router.timeout")
            .long("router.timeout")
            .help("router request timeout in seconds")
            .num_args(1)
            .value_parser(RangedU64ValueParser::<u64>::new().range(1..)),
    )
    .arg(
        Arg::new("bima.url")
            .long("bima.url")
            .help("Bima account API URL")
            .num_args(1),
    )
    .arg(
        Arg::new("bima.bearer")
            .long("bima.bearer")
            .help("Bima bearer token")
            .num_args(1),
    )
    .arg(
        Arg::new("bima.msisdn")
            .long("bima.msisdn")
            .help("subscriber MSISDN")
            .num_args(1),
    )
    .arg(
        Arg::new("bima.callplan")
            .long("bima.callplan")
            .help("subscriber call plan")
            .num_args(1),
    )
    .arg(
        Arg::new("bima.secret")
            .long("bima.secret")
            .help("Bima secret key")
            .num_args(1),
    )
    .arg(
        Arg::new("bima.timeout")
            .long("bima.timeout")
            .help("Bima request timeout in seconds")
            .num_args(1)
            .value_parser(RangedU64ValueParser::<u64>::new().range(1..)),
    )
    .arg(
        Arg::new("bima.insecure")
            .long("bima.insecure")
            .help("accept invalid TLS certificates of the Bima API")
            .num_args(1)
            .value_parser(clap::value_parser!(bool)),
    )
}

/// To read input arguments from command-line arguments and environment variables.
///
/// This function will call [`apply_default()`] to fill missing values so you do not need call it
/// again.
pub fn read_args(args: &ArgMatches) -> Config {
    apply_default(&Config {
        router: Some(Router {
            host: args::read_string(args, "router.host", "ROUTER_IP"),
            session_id: args::read_string(args, "router.sessionid", "HNAP_SESSION_ID"),
            cookie_session: args::read_string(args, "router.cookiesession", "HNAP_COOKIE_SESSION"),
            auth: args::read_string(args, "router.auth", "HNAP_AUTH"),
            timeout: args::read_number(args, "router.timeout", "ROUTER_TIMEOUT"),
        }),
        bima: Some(Bima {
            url: args::read_string(args, "bima.url", "BIMA_URL"),
            bearer: args::read_string(args, "bima.bearer", "TRI_BEARER"),
            msisdn: args::read_string(args, "bima.msisdn", "TRI_MSISDN"),
            call_plan: args::read_string(args, "bima.callplan", "TRI_CALLPLAN"),
            secret: args::read_string(args, "bima.secret", "TRI_SECRET"),
            timeout: args::read_number(args, "bima.timeout", "BIMA_TIMEOUT"),
            insecure: args::read_bool(args, "bima.insecure", "BIMA_INSECURE"),
        }),
    })
}

/// Fill missing configuration with default values.
pub fn apply_default(config: &Config) -> Config {
    let def_router = Router::default();
    let def_bima = Bima::default();
    let router = config.router.as_ref().unwrap_or(&def_router);
    let bima = config.bima.as_ref().unwrap_or(&def_bima);

    Config {
        router: Some(Router {
            host: match router.host.as_ref() {
                Some(host) if !host.is_empty() => Some(host.clone()),
                _ => Some(DEF_ROUTER_HOST.to_string()),
            },
            session_id: Some(router.session_id.clone().unwrap_or_default()),
            cookie_session: router.cookie_session.clone(),
            auth: router.auth.clone(),
            timeout: match router.timeout {
                Some(timeout) if timeout > 0 => Some(timeout),
                _ => Some(DEF_ROUTER_TIMEOUT),
            },
        }),
        bima: Some(Bima {
            url: match bima.url.as_ref() {
                Some(url) if !url.is_empty() => Some(url.clone()),
                _ => Some(DEF_BIMA_URL.to_string()),
            },
            bearer: Some(bima.bearer.clone().unwrap_or_default()),
            msisdn: Some(bima.msisdn.clone().unwrap_or_default()),
            call_plan: Some(bima.call_plan.clone().unwrap_or_default()),
            secret: Some(bima.secret.clone().unwrap_or_default()),
            timeout: match bima.timeout {
                Some(timeout) if timeout > 0 => Some(timeout),
                _ => Some(DEF_BIMA_TIMEOUT),
            },
            insecure: Some(bima.insecure.unwrap_or(false)),
        }),
    }
}
