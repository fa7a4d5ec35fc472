//! Common constants for modem-dash modules.

pub struct ContentType;

impl ContentType {
    pub const JSON: &'static str = "application/json";
    pub const XML: &'static str = "text/xml; charset=UTF-8";
}
