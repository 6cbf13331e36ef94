// Parse module tests.

use super::*;
use crate::models::{ExtractedPage, Link};

fn link(text: &str, href: &str) -> Link {
    Link {
        text: text.to_string(),
        href: href.to_string(),
    }
}

#[test]
fn test_extract_mixed_case_page() {
    let page = extract(b"<TITLE>Hi</TITLE><h1>One</h1><a href='/x'>go</a>");
    assert_eq!(page.title.as_deref(), Some("Hi"));
    assert_eq!(page.headings, vec!["One"]);
    assert_eq!(page.links, vec![link("go", "/x")]);
    assert_eq!(page.snippet, "HiOnego");
}

#[test]
fn test_extract_empty_body() {
    assert_eq!(extract(b""), ExtractedPage::default());
}

#[test]
fn test_extract_title_with_whitespace() {
    // Titles are often wrapped over several lines
    let html = "<html><head><title>\n    Test   Page\n</title></head></html>";
    assert_eq!(extract_title(html).as_deref(), Some("Test Page"));
}

#[test]
fn test_extract_title_missing_or_unclosed() {
    assert_eq!(extract_title("<html><body>no title</body></html>"), None);
    assert_eq!(extract_title("<title>never closed"), None);
    assert_eq!(extract_title("<title>   </title>"), None);
}

#[test]
fn test_extract_title_first_wins() {
    assert_eq!(
        extract_title("<title>First</title><title>Second</title>").as_deref(),
        Some("First")
    );
}

#[test]
fn test_extract_headings_in_order_with_inner_tags() {
    let html = "<h1>Alpha</h1><p>x</p><H1>Beta <em>bold</em></H1><h1>unclosed";
    assert_eq!(extract_headings(html), vec!["Alpha", "Beta bold"]);
}

#[test]
fn test_extract_headings_ignores_h2() {
    assert!(extract_headings("<h2>Sub</h2>").is_empty());
}

#[test]
fn test_extract_links_both_quote_styles() {
    let html = r#"<a href="/one">One</a> <A class="c" HREF = 'two.html' id=x>Two</A>"#;
    assert_eq!(
        extract_links(html),
        vec![link("One", "/one"), link("Two", "two.html")]
    );
}

#[test]
fn test_extract_links_text_stripped_and_may_be_empty() {
    let html = r#"<a href="/img"><img src="a.png"></a><a href="/s"> <b>Bold</b>
        text </a>"#;
    let links = extract_links(html);
    assert_eq!(links, vec![link("", "/img"), link("Bold text", "/s")]);
    assert_eq!(links[0].display_text(), "/img");
    assert_eq!(links[1].display_text(), "Bold text");
}

#[test]
fn test_extract_links_skips_unquoted_and_unclosed() {
    let html = "<a href=/bare>bare</a><a href=\"\">empty</a><a href=\"/open\">open";
    assert!(extract_links(html).is_empty());
}

#[test]
fn test_extract_links_unclosed_anchor_does_not_swallow_next() {
    let html = r#"<a href="/open">open <a href="/b">b</a>"#;
    assert_eq!(extract_links(html), vec![link("b", "/b")]);
}

#[test]
fn test_extract_links_unclosed_anchor_between_closed_ones() {
    let html = r#"<a href="/a">A</a> <A HREF='/lost'>lost <p>x</p> <a  href="/c"><b>C</b></a>"#;
    assert_eq!(extract_links(html), vec![link("A", "/a"), link("C", "/c")]);
}

#[test]
fn test_extract_links_does_not_match_other_tags() {
    assert!(extract_links(r#"<abbr href="/x">x</abbr>"#).is_empty());
}

#[test]
fn test_extract_text_drops_script_and_style() {
    let html = "<html><head><style>body { color: red; }</style>\
                <SCRIPT type=\"text/javascript\">var x = '<b>';</SCRIPT></head>\
                <body><p>Hello</p>\n\n<p>World</p></body></html>";
    assert_eq!(extract_text(html), "Hello World");
}

#[test]
fn test_extract_text_collapses_whitespace() {
    assert_eq!(extract_text("  a\t\tb\r\n\r\nc  "), "a b c");
}

#[test]
fn test_extract_invalid_utf8_is_lossy() {
    let page = extract(b"<title>caf\xe9</title>");
    assert_eq!(page.title.as_deref(), Some("caf\u{fffd}"));
}
