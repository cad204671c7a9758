//! Lenient decoding of the responder payload
//!
//! Unknown fields are ignored by the record model itself. This module adds
//! tolerance for the non-finite float literals some JSON writers emit.

use super::error::FetchError;
use crate::core::models::Record;
use std::borrow::Cow;

const NON_FINITE: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Decode a JSON array of records
pub fn parse_records(body: &str) -> Result<Vec<Record>, FetchError> {
    match serde_json::from_str::<Vec<Record>>(body) {
        Ok(records) => Ok(records),
        Err(strict) => match replace_non_finite(body) {
            Cow::Owned(relaxed) => serde_json::from_str(&relaxed).map_err(|_| strict.into()),
            Cow::Borrowed(_) => Err(strict.into()),
        },
    }
}

/// Rewrites bare `NaN`, `Infinity` and `-Infinity` outside strings to `null`
fn replace_non_finite(body: &str) -> Cow<'_, str> {
    let bytes = body.as_bytes();
    let mut out: Option<String> = None;
    let mut copied_to = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if b == b'"' {
            in_string = true;
            i += 1;
            continue;
        }

        if let Some(token) = NON_FINITE
            .iter()
            .find(|token| bytes[i..].starts_with(token.as_bytes()))
        {
            let buf = out.get_or_insert_with(|| String::with_capacity(body.len()));
            buf.push_str(&body[copied_to..i]);
            buf.push_str("null");
            i += token.len();
            copied_to = i;
            continue;
        }

        i += 1;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&body[copied_to..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(body),
    }
}
