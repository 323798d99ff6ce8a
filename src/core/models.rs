use serde::Deserialize;

/// One field (bin) of a distribution, with its observed count and the
/// probability the server computed for it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Value {
    #[serde(rename = "bin")]
    pub field: String,
    pub count: i64,
    #[serde(rename = "p")]
    pub probability: f64,
}

/// A named distribution as returned by the server. `values` keeps the
/// server's order: ranked for most-probable queries, unspecified otherwise.
/// `z`, `time`, `rate` and `prune` describe server-side decay behavior and
/// are informational only on this side.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Distribution {
    #[serde(rename = "distribution", default)]
    pub name: String,
    #[serde(rename = "data", default)]
    pub values: Vec<Value>,
    #[serde(rename = "Z", default)]
    pub z: i64,
    #[serde(rename = "T", default)]
    pub time: i64,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub prune: bool,
}

/// Decoded reply for the distribution-returning endpoints. `status_code` is
/// the server's application-level code, 200 on success; on failure
/// `status_txt` carries the server's error string and `distribution` is not
/// meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status_code: u16,
    pub status_txt: String,
    pub distribution: Distribution,
}

/// The outer JSON wrapper every endpoint except increment-success uses:
/// `{"status_code": int, "status_txt": string, "data": <payload>}`.
/// `data` is null on error envelopes.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub status_code: u16,
    #[serde(default)]
    pub status_txt: String,
    pub data: Option<T>,
}
