//! Echo page vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use echometer_core::page::BANNER;
use echometer_core::{render_page, EscapeMode, RequestSnapshot};

use vector_loader::PageVector;

fn load(name: &str) -> PageVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn page_vectors() {
    let files = [
        "get_with_header.json",
        "post_with_body.json",
        "repeated_headers.json",
        "markup_verbatim.json",
        "markup_escaped.json",
    ];

    for f in files {
        let v = load(f);
        let page = render_page(&v.snapshot(), v.mode());

        assert!(page.starts_with(BANNER), "vector={}", v.description);
        for needle in &v.expect_contains {
            assert!(page.contains(needle.as_str()), "vector={} missing {needle:?} in {page}", v.description);
        }
        for needle in &v.expect_absent {
            assert!(!page.contains(needle.as_str()), "vector={} unexpected {needle:?} in {page}", v.description);
        }
    }
}

#[test]
fn every_header_rendered_exactly_once() {
    let snap = RequestSnapshot::new("PUT")
        .with_header("x-one", "alpha")
        .with_header("x-two", "beta")
        .with_header("x-three", "gamma");
    let page = render_page(&snap, EscapeMode::Verbatim);

    for (n, v) in &snap.headers {
        let line = format!("{n}: {v}<br>");
        assert_eq!(page.matches(line.as_str()).count(), 1, "{line}");
    }
}

#[test]
fn sections_appear_in_order() {
    let snap = RequestSnapshot::new("POST").with_header("a", "b").with_body("payload");
    let page = render_page(&snap, EscapeMode::Verbatim);

    let h = page.find("<h2>Headers</h2>").unwrap();
    let m = page.find("<h2>Method</h2>").unwrap();
    let b = page.find("<h2>Body</h2>").unwrap();
    assert!(h < m && m < b);
    assert!(page.ends_with("<h2>Body</h2><pre>payload</pre>"));
}
