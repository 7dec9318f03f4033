//! Query string decoding.
//!
//! Follows standard form-encoding: `&`-separated pairs, `=` between name and
//! value, `+` as space, percent-decoding on both halves. Pairs with an empty
//! value are discarded, so `url=` is treated the same as no `url` at all.

use std::collections::HashMap;
use std::fmt;

use url::form_urlencoded;

use crate::error::{RelayError, Result};

/// Name of the query parameter carrying the target.
pub const TARGET_PARAM: &str = "url";

/// The decoded absolute URL a caller asked us to fetch.
///
/// No scheme or host checks happen here; the upstream client rejects what
/// it cannot fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec(String);

impl TargetSpec {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decode a query string into name → values, dropping blank values.
pub fn parse_query(query: &str) -> HashMap<String, Vec<String>> {
    let mut params: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        params
            .entry(name.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}

/// Extract the target from a raw query string.
///
/// Only the first `url` value counts; repeats are ignored.
pub fn parse_target(query: &str) -> Result<TargetSpec> {
    parse_query(query)
        .remove(TARGET_PARAM)
        .and_then(|values| values.into_iter().next())
        .map(TargetSpec)
        .ok_or(RelayError::MissingTarget)
}
