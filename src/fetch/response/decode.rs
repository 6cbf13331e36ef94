//! Status line, header block and body splitting.

use std::collections::BTreeMap;

use log::trace;

use super::chunked::decode_chunked;
use super::types::RawResponse;
use crate::error_handling::DecodeError;

/// Longest status line echoed back in a `MalformedStatusLine` error.
const MAX_STATUS_LINE_ECHO: usize = 120;

/// Parses raw response bytes into a [`RawResponse`].
///
/// The head is everything up to the first blank line; the rest is the body.
/// Header names are lower-cased, one leading space is removed from each value
/// and later duplicates replace earlier ones. A body sent with
/// `Transfer-Encoding: chunked` is reassembled, any other body is returned
/// byte-for-byte.
///
/// # Errors
///
/// - `DecodeError::MalformedStatusLine` when the first line has no numeric
///   status code in `100..=599` (this includes empty input)
/// - `DecodeError::MalformedChunk` when a chunk size line is not hexadecimal
pub fn decode(raw: &[u8]) -> Result<RawResponse, DecodeError> {
    let (head, body) = split_head(raw);
    let head = String::from_utf8_lossy(head);
    let mut lines = head
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let (http_version, status_code, status_message) =
        parse_status_line(lines.next().unwrap_or_default())?;

    let mut headers = BTreeMap::new();
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            trace!("Skipping header line without ':': {:?}", line);
            continue;
        };
        let value = value.strip_prefix(' ').unwrap_or(value);
        headers.insert(name.trim().to_ascii_lowercase(), value.to_string());
    }

    let chunked = headers
        .get("transfer-encoding")
        .is_some_and(|te| te.to_ascii_lowercase().contains("chunked"));
    let body = if chunked {
        decode_chunked(body)?
    } else {
        body.to_vec()
    };

    Ok(RawResponse {
        http_version,
        status_code,
        status_message,
        headers,
        body,
    })
}

/// Splits at the first `\r\n\r\n` (or bare `\n\n`, whichever comes first).
/// Without a blank line the whole input is head and the body is empty.
fn split_head(raw: &[u8]) -> (&[u8], &[u8]) {
    let crlf = find(raw, b"\r\n\r\n").map(|i| (i, 4));
    let lf = find(raw, b"\n\n").map(|i| (i, 2));
    let split = match (crlf, lf) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    };
    match split {
        Some((at, sep_len)) => (&raw[..at], &raw[at + sep_len..]),
        None => (raw, &[]),
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn parse_status_line(line: &str) -> Result<(String, u16, String), DecodeError> {
    let malformed =
        || DecodeError::MalformedStatusLine(line.chars().take(MAX_STATUS_LINE_ECHO).collect());

    let line = line.trim();
    let (version, rest) = line.split_once(' ').ok_or_else(malformed)?;
    let rest = rest.trim_start();
    let (code, message) = rest.split_once(' ').unwrap_or((rest, ""));

    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let status_code: u16 = code.parse().map_err(|_| malformed())?;
    if !(100..=599).contains(&status_code) {
        return Err(malformed());
    }

    Ok((
        version.to_string(),
        status_code,
        message.trim().to_string(),
    ))
}
