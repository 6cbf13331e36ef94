//! HTTP redirect chain resolution.
//!
//! This module drives repeated transport/decode round-trips, following 3xx
//! responses until a final response arrives or the redirect budget runs out.

use log::{debug, warn};

use crate::config::HTTP_SCHEME_PREFIX;
use crate::error_handling::FetchError;
use crate::fetch::response::{decode, RawResponse};
use crate::fetch::transport::{build_request, connect_and_exchange};
use crate::fetch::url::{parse, UrlParts};
use crate::fetch::FetchOptions;

/// Fetches `url`, following up to `options.max_redirects` redirects.
///
/// Redirects are followed for 301, 302, 307 and 308 when a `Location` header
/// is present. The loop ends with the first response that is not followed:
///
/// - a non-redirect status,
/// - a redirect status without `Location`,
/// - the response received after `max_redirects` redirects were followed,
///   even if it is itself a redirect. Callers inspect its status code.
///
/// # Errors
///
/// Any parse, transport or decode error on any hop ends the fetch.
pub fn fetch(url: &str, options: &FetchOptions) -> Result<RawResponse, FetchError> {
    let mut current = url.trim().to_string();
    let mut followed = 0usize;

    loop {
        let parts = parse(&current)?;
        let request = build_request(&parts, &options.user_agent);
        let raw = connect_and_exchange(&parts, &request, options.timeout)?;
        let response = decode(&raw)?;
        debug!(
            "GET {} -> {} ({} body bytes)",
            current,
            response.status_line(),
            response.body.len()
        );

        if !response.is_redirect() {
            return Ok(response);
        }

        let Some(location) = response.header("location") else {
            warn!(
                "Redirect status {} for {} but no Location header",
                response.status_code, current
            );
            return Ok(response);
        };

        if followed >= options.max_redirects {
            debug!(
                "Redirect budget of {} exhausted at {}, returning {} as final",
                options.max_redirects, current, response.status_code
            );
            return Ok(response);
        }

        let next = resolve_location(&parts, location);
        followed += 1;
        debug!("Redirect {}/{}: {} -> {}", followed, options.max_redirects, current, next);
        current = next;
    }
}

/// Resolves a `Location` header value against the URL it was received from.
///
/// - `http://...` is used as-is, as is any other `scheme://` URL (which the
///   parser then rejects on the next hop)
/// - `/path` is appended to the current origin (scheme, host and non-default port)
/// - anything else is appended to the directory of the current path, i.e.
///   everything up to and including its last `/`
pub fn resolve_location(current: &UrlParts, location: &str) -> String {
    let location = location.trim();
    if location.starts_with(HTTP_SCHEME_PREFIX) || has_scheme(location) {
        return location.to_string();
    }
    if location.starts_with('/') {
        return format!("{}{}", current.origin(), location);
    }

    let directory = match current.path.rfind('/') {
        Some(slash) => &current.path[..=slash],
        None => "/",
    };
    format!("{}{}{}", current.origin(), directory, location)
}

/// `true` for `name://...` where `name` is a plausible URL scheme.
fn has_scheme(location: &str) -> bool {
    match location.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
