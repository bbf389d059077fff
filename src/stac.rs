use crate::error::StacError;
use serde_json::Value;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::debug;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub timeout: Duration,
}

impl Default for HttpOptions {
    fn default() -> Self {
        HttpOptions {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Where a STAC item is read from. Any value containing `https` is treated
/// as a remote URL.
#[derive(Debug, Clone, PartialEq)]
pub enum StacSource {
    Remote(String),
    Local(PathBuf),
}

impl From<&str> for StacSource {
    fn from(raw: &str) -> Self {
        if raw.contains("https") {
            StacSource::Remote(raw.to_string())
        } else {
            StacSource::Local(PathBuf::from(raw))
        }
    }
}

/// Load a STAC item and return its GeoJSON `geometry` member.
pub fn load_geometry(source: &StacSource, http: &HttpOptions) -> Result<Value, StacError> {
    let item = match source {
        StacSource::Remote(url) => fetch_item(url, http)?,
        StacSource::Local(path) => read_item(path)?,
    };
    item_geometry(item)
}

pub fn fetch_item(url: &str, http: &HttpOptions) -> Result<Value, StacError> {
    debug!(%url, timeout = ?http.timeout, "fetching remote STAC item");
    let client = reqwest::blocking::Client::builder()
        .timeout(http.timeout)
        .build()?;
    let resp = client.get(url).send()?;
    let status = resp.status();
    debug!(%status, "STAC item response");
    if !status.is_success() {
        return Err(StacError::HttpStatus(status.as_u16()));
    }

    let item: Value = serde_json::from_str(&resp.text()?)?;
    match item.get("type").and_then(Value::as_str) {
        Some("Feature") => Ok(item),
        _ => Err(StacError::NotStacItem),
    }
}

pub fn read_item(path: &Path) -> Result<Value, StacError> {
    debug!(path = %path.display(), "reading local STAC item");
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Take the `geometry` member out of an item. Absent, null and empty values
/// all count as missing.
pub fn item_geometry(mut item: Value) -> Result<Value, StacError> {
    let geometry = item
        .get_mut("geometry")
        .map(Value::take)
        .unwrap_or(Value::Null);
    if is_empty(&geometry) {
        Err(StacError::MissingGeometry)
    } else {
        Ok(geometry)
    }
}

fn is_empty(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
