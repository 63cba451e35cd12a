//! `Accept-Language` header values.
//!
//! ref: https://www.rfc-editor.org/rfc/rfc9110#section-12.5.4

use crate::Tag;
use crate::error::{Error, Result};

const WILDCARD: &str = "*";

/// Parses an `Accept-Language` value into tags ordered by preference.
///
/// Entries keep their relative order when weights tie. Entries with `q=0`
/// and the `*` wildcard are dropped.
pub fn parse_accept_language(s: &str) -> Result<Vec<Tag>> {
    let mut weighted = Vec::new();

    for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let mut params = entry.split(';').map(str::trim);
        let range = params.next().unwrap_or_default();

        let mut quality = 1.0f32;
        for param in params {
            if let Some(q) = param.strip_prefix("q=").or_else(|| param.strip_prefix("Q=")) {
                quality = parse_quality(q)?;
            }
        }

        if range == WILDCARD || quality == 0.0 {
            continue;
        }
        weighted.push((Tag::parse(range)?, quality));
    }

    // sort_by is stable
    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(weighted.into_iter().map(|(tag, _)| tag).collect())
}

fn parse_quality(s: &str) -> Result<f32> {
    let q: f32 = s.parse().map_err(|_| Error::InvalidQuality(s.to_string()))?;
    if !(0.0..=1.0).contains(&q) {
        return Err(Error::InvalidQuality(s.to_string()));
    }
    Ok(q)
}
