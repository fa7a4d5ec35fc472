//! To configure the logger.
//!
//! Application logs are printed one record per line in `json` or `log4j` style. HTTP access logs
//! are produced by [`LoggerLayer`] and only API requests (see [`FILTER_ONLY`]) are printed.

use std::{
    net::SocketAddr,
    task::{Context, Poll},
    time::Instant,
};

use anyhow::Result;
use axum::{
    extract::{ConnectInfo, Request},
    http::StatusCode,
    response::Response,
};
use chrono::{SecondsFormat, Utc};
use clap::{Arg, ArgMatches, Command};
use futures::future::BoxFuture;
use log::{Level, LevelFilter, Record, log};
use log4rs::{
    self,
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::{Encode, Write},
};
use serde::{Deserialize, Serialize};
use tower::{Layer, Service};

use crate::args;

/// Logger configuration object.
#[derive(Default, Deserialize)]
pub struct Config {
    /// Log level. Can be `off`, `error`, `warn`, `info`, `debug`.
    ///
    /// Default is `info`.
    pub level: Option<String>,
    /// Log style. Can be `json`, `log4j`.
    ///
    /// Default is `json`.
    pub style: Option<String>,
}

/// The tower layer that generates HTTP access logs.
#[derive(Clone, Default)]
pub struct LoggerLayer;

#[derive(Clone)]
pub struct LoggerMiddleware<S> {
    service: S,
}

/// The log4rs encoder that prints one record per line in `json` or `log4j` style.
#[derive(Debug)]
struct LineEncoder {
    json: bool,
}

/// A record to be printed.
enum Line {
    App(AppLine),
    Http(HttpLine),
}

#[derive(Serialize)]
struct AppLine {
    ts: String,
    level: String,
    module: String,
    msg: String,
}

/// An access log line of [`LoggerLayer`].
#[derive(Serialize)]
struct HttpLine {
    ts: String,
    level: String,
    remote: String,
    status: String,
    method: String,
    url: String,
    #[serde(rename = "latencyMs")]
    latency_ms: String,
}

/// The log target of HTTP access logs. The message is `remote status latency url method`.
pub const HTTP_LOG_TARGET: &'static str = "modem_dash::http";

pub const LEVEL_OFF: &'static str = "off";
pub const LEVEL_ERROR: &'static str = "error";
pub const LEVEL_WARN: &'static str = "warn";
pub const LEVEL_INFO: &'static str = "info";
pub const LEVEL_DEBUG: &'static str = "debug";

pub const STYLE_JSON: &'static str = "json";
pub const STYLE_LOG4J: &'static str = "log4j";

pub const DEF_LEVEL: &'static str = LEVEL_INFO;
pub const DEF_STYLE: &'static str = STYLE_JSON;

pub const FILTER_ONLY: [&'static str; 1] = ["/api/"];

const LEVELS: [&'static str; 5] = [LEVEL_OFF, LEVEL_ERROR, LEVEL_WARN, LEVEL_INFO, LEVEL_DEBUG];
const STYLES: [&'static str; 2] = [STYLE_JSON, STYLE_LOG4J];

impl LoggerLayer {
    pub fn new() -> Self {
        LoggerLayer {}
    }
}

impl<S> Layer<S> for LoggerLayer {
    type Service = LoggerMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggerMiddleware { service: inner }
    }
}

impl<S> Service<Request> for LoggerMiddleware<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let mut svc = self.service.clone();

        Box::pin(async move {
            let start = Instant::now();
            let remote = match req.extensions().get::<ConnectInfo<SocketAddr>>() {
                None => "-".to_string(),
                Some(info) => info.0.to_string(),
            };
            let method = req.method().to_string();
            let url = req.uri().to_string();

            let res = svc.call(req).await?;

            let status = res.status();
            log!(
                target: HTTP_LOG_TARGET,
                access_level(status),
                "{} {} {} {} {}",
                remote,
                status.as_u16(),
                start.elapsed().as_millis(),
                url,
                method
            );
            Ok(res)
        })
    }
}

impl Encode for LineEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record<'_>) -> Result<()> {
        let line = match record.target() == HTTP_LOG_TARGET {
            false => get_app_line(record).map(Line::App),
            true => get_http_line(record).map(Line::Http),
        };
        let text = match (self.json, line) {
            (_, None) => return Ok(()),
            (true, Some(Line::App(line))) => serde_json::to_string(&line)?,
            (true, Some(Line::Http(line))) => serde_json::to_string(&line)?,
            (false, Some(Line::App(line))) => format!(
                "{} {} [{}] {}",
                line.ts,
                line.level.to_uppercase(),
                line.module,
                line.msg.replace('\n', "\\n")
            ),
            (false, Some(Line::Http(line))) => format!(
                "{} {} [{}] {} {} {} ({} ms)",
                line.ts,
                line.level.to_uppercase(),
                line.remote,
                line.status,
                line.method,
                line.url,
                line.latency_ms
            ),
        };
        w.write_all(text.as_bytes())?;
        w.write_all(b"\n")?;
        Ok(())
    }
}

/// The level of an access log. 4xx is `warn` and 5xx is `error` so they pass stricter filters.
pub fn access_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::Error
    } else if status.is_client_error() {
        Level::Warn
    } else {
        Level::Info
    }
}

/// To initialize the logger with configurations.
pub fn init(conf: &Config) -> Result<()> {
    const APPENDER: &'static str = "console";

    let conf = apply_default(&conf);
    let level = match conf.level.as_deref() {
        Some(LEVEL_OFF) => LevelFilter::Off,
        Some(LEVEL_ERROR) => LevelFilter::Error,
        Some(LEVEL_WARN) => LevelFilter::Warn,
        Some(LEVEL_DEBUG) => LevelFilter::Debug,
        _ => LevelFilter::Info,
    };
    let encoder = LineEncoder {
        json: conf.style.as_deref() != Some(STYLE_LOG4J),
    };

    let appender = ConsoleAppender::builder()
        .encoder(Box::new(encoder))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build(APPENDER, Box::new(appender)))
        .build(Root::builder().appender(APPENDER).build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// To register Clap arguments.
pub fn reg_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("log.level")
            .long("log.level")
            .help("log level")
            .num_args(1)
            .value_parser(LEVELS),
    )
    .arg(
        Arg::new("log.style")
            .long("log.style")
            .help("log style")
            .num_args(1)
            .value_parser(STYLES),
    )
}

/// To read input arguments from command-line arguments and environment variables.
///
/// This function will call [`apply_default()`] to fill missing values so you do not need call it
/// again.
pub fn read_args(args: &ArgMatches) -> Config {
    apply_default(&Config {
        level: args::read_string(args, "log.level", "LOG_LEVEL"),
        style: args::read_string(args, "log.style", "LOG_STYLE"),
    })
}

/// Fill missing configuration with default values. Unknown values are replaced by the defaults.
pub fn apply_default(config: &Config) -> Config {
    Config {
        level: match config.level.as_deref() {
            Some(v) if LEVELS.contains(&v) => Some(v.to_string()),
            _ => Some(DEF_LEVEL.to_string()),
        },
        style: match config.style.as_deref() {
            Some(STYLE_LOG4J) => Some(STYLE_LOG4J.to_string()),
            _ => Some(STYLE_JSON.to_string()),
        },
    }
}

/// Records of dependency crates are dropped. The module is printed as `file:line` when possible.
fn get_app_line(record: &Record<'_>) -> Option<AppLine> {
    let module_path = record.module_path()?;
    let module = match record.file() {
        None => module_path.to_string(),
        Some(file) if file.contains("/.cargo/") => return None,
        Some(file) => match record.line() {
            None => file.to_string(),
            Some(line) => format!("{}:{}", file, line),
        },
    };
    Some(AppLine {
        ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        level: record.level().as_str().to_lowercase(),
        module,
        msg: record.args().to_string(),
    })
}

/// Parses the access log of [`LoggerLayer`]. Returns `None` for non-API requests.
fn get_http_line(record: &Record<'_>) -> Option<HttpLine> {
    let msg = record.args().to_string();
    let fields: Vec<&str> = msg.splitn(5, ' ').collect();
    let [remote, status, latency_ms, url, method] = fields.as_slice() else {
        return None;
    };
    if !FILTER_ONLY.iter().any(|filter| url.contains(filter)) {
        return None;
    }

    Some(HttpLine {
        ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        level: record.level().as_str().to_lowercase(),
        remote: remote.to_string(),
        status: status.to_string(),
        method: method.to_string(),
        url: url.to_string(),
        latency_ms: latency_ms.to_string(),
    })
}
