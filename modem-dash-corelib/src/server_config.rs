//! The top level configuration `server`.

use clap::{Arg, ArgMatches, Command, builder::RangedU64ValueParser};
use serde::Deserialize;

use crate::args;

/// Server configuration object.
#[derive(Default, Deserialize)]
pub struct Config {
    /// HTTP port.
    ///
    /// Default is `1080`.
    #[serde(rename = "httpPort")]
    pub http_port: Option<u16>,
    /// HTTPS port.
    ///
    /// Default is `1443`.
    #[serde(rename = "httpsPort")]
    pub https_port: Option<u16>,
    /// HTTPS certificate file path. Missing this to disable HTTPS.
    #[serde(rename = "certFile")]
    pub cert_file: Option<String>,
    /// HTTPS private key file path. Missing this to disable HTTPS.
    #[serde(rename = "keyFile")]
    pub key_file: Option<String>,
    /// Dashboard static file path.
    ///
    /// Default is `./static`.
    #[serde(rename = "staticPath")]
    pub static_path: Option<String>,
}

pub const DEF_HTTP_PORT: u16 = 1080;
pub const DEF_HTTPS_PORT: u16 = 1443;
pub const DEF_STATIC_PATH: &'static str = "./static";

/// To register Clap arguments.
pub fn reg_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("server.httpport")
            .long("server.httpport")
            .help("HTTP port")
            .num_args(1)
            .value_parser(RangedU64ValueParser::<u64>::new().range(1..=65535)),
    )
    .arg(
        Arg::new("server.httpsport")
            .long("server.httpsport")
            .help("HTTPS port")
            .num_args(1)
            .value_parser(RangedU64ValueParser::<u64>::new().range(1..=65535)),
    )
    .arg(
        Arg::new("server.certfile")
            .long("server.certfile")
            .help("HTTPS certificate file")
            .num_args(1),
    )
    .arg(
        Arg::new("server.keyfile")
            .long("server.keyfile")
            .help("HTTPS private key file")
            .num_args(1),
    )
    .arg(
        Arg::new("server.static")
            .long("server.static")
            .help("Dashboard static files directory path")
            .num_args(1),
    )
}

/// To read input arguments from command-line arguments and environment variables.
///
/// This function will call [`apply_default()`] to fill missing values so you do not need call it
/// again.
pub fn read_args(args: &ArgMatches) -> Config {
    apply_default(&Config {
        http_port: args::read_number(args, "server.httpport", "SERVER_HTTP_PORT"),
        https_port: args::read_number(args, "server.httpsport", "SERVER_HTTPS_PORT"),
        cert_file: args::read_string(args, "server.certfile", "SERVER_CERT_FILE"),
        key_file: args::read_string(args, "server.keyfile", "SERVER_KEY_FILE"),
        static_path: args::read_string(args, "server.static", "SERVER_STATIC_PATH"),
    })
}

/// Fill missing configuration with default values.
pub fn apply_default(config: &Config) -> Config {
    Config {
        http_port: Some(config.http_port.unwrap_or(DEF_HTTP_PORT)),
        https_port: Some(config.https_port.unwrap_or(DEF_HTTPS_PORT)),
        cert_file: config.cert_file.clone(),
        key_file: config.key_file.clone(),
        static_path: match config.static_path.as_ref() {
            None => Some(DEF_STATIC_PATH.to_string()),
            Some(v) => Some(v.clone()),
        },
    }
}
