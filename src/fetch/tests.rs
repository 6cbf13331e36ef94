// Fetch module tests: response decoding and outcome mapping.

use crate::error_handling::{DecodeError, ErrorType};
use crate::fetch::response::{decode, decode_chunked};
use crate::fetch::{fetch_page_with, FetchOptions};
use crate::models::FetchOutcome;

#[test]
fn test_decode_status_headers_and_body() {
    let raw = b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nX-Empty:\r\n\r\n<p>hi</p>";
    let response = decode(raw).expect("valid response");
    assert_eq!(response.http_version, "HTTP/1.1");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.status_message, "OK");
    assert_eq!(response.header("content-type"), Some("text/html"));
    assert_eq!(response.header("Content-Type"), Some("text/html"));
    assert_eq!(response.header("x-empty"), Some(""));
    assert_eq!(response.body, b"<p>hi</p>");
}

#[test]
fn test_decode_multi_word_status_message() {
    let response = decode(b"HTTP/1.1 404 Not Found\r\n\r\n").expect("valid response");
    assert_eq!(response.status_code, 404);
    assert_eq!(response.status_message, "Not Found");
    assert_eq!(response.status_line(), "404 Not Found");
    assert!(response.body.is_empty());
}

#[test]
fn test_decode_strips_only_one_leading_space() {
    let response = decode(b"HTTP/1.1 200 OK\r\nX-Pad:   padded\r\n\r\n").expect("valid");
    assert_eq!(response.header("x-pad"), Some("  padded"));
}

#[test]
fn test_decode_last_duplicate_header_wins() {
    let raw = b"HTTP/1.1 302 Found\r\nLocation: /first\r\nlocation: /second\r\n\r\n";
    let response = decode(raw).expect("valid response");
    assert_eq!(response.header("location"), Some("/second"));
    assert!(response.is_redirect());
}

#[test]
fn test_decode_chunked_body() {
    let raw = b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n4\r\nWiki\r\n5\r\npedia\r\n0\r\n\r\n";
    let response = decode(raw).expect("valid response");
    assert_eq!(response.body, b"Wikipedia");
}

#[test]
fn test_decode_chunked_is_case_insensitive() {
    let raw = b"HTTP/1.1 200 OK\r\ntransfer-encoding: gzip, Chunked\r\n\r\n3\r\nabc\r\n0\r\n\r\n";
    let response = decode(raw).expect("valid response");
    assert_eq!(response.body, b"abc");
}

#[test]
fn test_decode_chunked_malformed_size() {
    let raw = b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\nzz\r\nabc\r\n0\r\n\r\n";
    assert!(matches!(decode(raw), Err(DecodeError::MalformedChunk(_))));
}

#[test]
fn test_decode_chunked_ignores_extensions_and_uppercase_hex() {
    let body = b"A;name=value\r\n0123456789\r\n0\r\n\r\n";
    assert_eq!(decode_chunked(body).expect("valid"), b"0123456789");
}

#[test]
fn test_decode_chunked_truncated_keeps_partial() {
    assert_eq!(decode_chunked(b"5\r\nhel").expect("partial"), b"hel");
    assert_eq!(decode_chunked(b"3\r\nabc\r\n").expect("no terminator"), b"abc");
}

#[test]
fn test_decode_chunked_bare_lf_lines() {
    assert_eq!(decode_chunked(b"2\nok\n0\n\n").expect("valid"), b"ok");
}

#[test]
fn test_decode_plain_body_is_byte_for_byte() {
    let mut raw = b"HTTP/1.0 200 OK\r\n\r\n".to_vec();
    let body: Vec<u8> = vec![0x00, 0xff, b'\r', b'\n', b'\r', b'\n', 0x80];
    raw.extend_from_slice(&body);
    let response = decode(&raw).expect("valid response");
    assert_eq!(response.http_version, "HTTP/1.0");
    assert_eq!(response.body, body);
}

#[test]
fn test_decode_bare_lf_head() {
    let response = decode(b"HTTP/1.1 200 OK\nA: b\n\nbody").expect("valid response");
    assert_eq!(response.header("a"), Some("b"));
    assert_eq!(response.body, b"body");
}

#[test]
fn test_decode_without_blank_line_has_empty_body() {
    let response = decode(b"HTTP/1.1 204 No Content\r\nServer: x").expect("valid response");
    assert_eq!(response.status_code, 204);
    assert_eq!(response.header("server"), Some("x"));
    assert!(response.body.is_empty());
}

#[test]
fn test_decode_every_three_digit_status_code() {
    for code in 100u16..=599 {
        let raw = format!("HTTP/1.1 {code} X\r\n\r\n");
        let response = decode(raw.as_bytes()).expect("valid response");
        assert_eq!(response.status_code, code);
        assert_eq!(response.status_message, "X");
    }
}

#[test]
fn test_decode_malformed_status_line() {
    let cases: [&[u8]; 5] = [
        b"",
        b"garbage\r\n\r\n",
        b"HTTP/1.1 abc OK\r\n\r\n",
        b"HTTP/1.1 42 Odd\r\n\r\n",
        b"HTTP/1.1 999 Odd\r\n\r\n",
    ];
    for raw in cases {
        assert!(
            matches!(decode(raw), Err(DecodeError::MalformedStatusLine(_))),
            "expected malformed status line for {:?}",
            String::from_utf8_lossy(raw)
        );
    }
}

#[test]
fn test_fetch_page_unsupported_scheme_is_failure() {
    let outcome = fetch_page_with("https://example.com/", &FetchOptions::default());
    match outcome {
        FetchOutcome::Failure { url, reason, kind } => {
            assert_eq!(url, "https://example.com/");
            assert_eq!(kind, ErrorType::UnsupportedScheme);
            assert!(reason.contains("Only http:// URLs are supported"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_fetch_options_default() {
    let options = FetchOptions::default();
    assert_eq!(options.timeout, std::time::Duration::from_millis(10_000));
    assert_eq!(options.max_redirects, 5);
    assert_eq!(options.user_agent, "MiniBrowser/0.1");
}
