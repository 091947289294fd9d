#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Segment accessor tests
///
/// Accessors return one assembled block each: "http://" style scheme,
/// ":port", "/path", "?query" and "#anchor".
use logurl::{Normalizer, Segment};

struct Expected<'a> {
    scheme: &'a str,
    hostname: &'a str,
    port: &'a str,
    path: &'a str,
    query: &'a str,
    anchor: &'a str,
}

fn verify_segments(normalizer: &mut Normalizer, url: &str, expected: &Expected<'_>) {
    normalizer.scan(url).unwrap();
    assert_eq!(normalizer.scheme(), expected.scheme, "scheme of [{url}]");
    assert_eq!(normalizer.hostname(), expected.hostname, "hostname of [{url}]");
    assert_eq!(normalizer.port(), expected.port, "port of [{url}]");
    assert_eq!(normalizer.path(), expected.path, "path of [{url}]");
    assert_eq!(normalizer.query(), expected.query, "query of [{url}]");
    assert_eq!(normalizer.anchor(), expected.anchor, "anchor of [{url}]");
}

const NOTHING: Expected<'static> = Expected {
    scheme: "",
    hostname: "",
    port: "",
    path: "",
    query: "",
    anchor: "",
};

#[test]
fn test_url_scanning() {
    let mut normalizer = Normalizer::new();

    verify_segments(&mut normalizer, "", &NOTHING);

    verify_segments(
        &mut normalizer,
        "http://example.com/index.html?qqq=zzz&ppp=rrr#splat=boink",
        &Expected {
            scheme: "http://",
            hostname: "example.com",
            port: "",
            path: "",
            query: "?qqq=zzz&ppp=rrr",
            anchor: "#splat=boink",
        },
    );

    verify_segments(
        &mut normalizer,
        "example.com/index.html",
        &Expected {
            scheme: "http://",
            hostname: "example.com",
            port: "",
            path: "/",
            query: "",
            anchor: "",
        },
    );

    verify_segments(
        &mut normalizer,
        "example",
        &Expected {
            scheme: "http://",
            hostname: "example",
            port: "",
            path: "/",
            query: "",
            anchor: "",
        },
    );

    verify_segments(
        &mut normalizer,
        "http:/example.com",
        &Expected {
            scheme: "http://",
            hostname: "http",
            port: "",
            path: "/example.com",
            query: "",
            anchor: "",
        },
    );

    verify_segments(
        &mut normalizer,
        "file:///file.txt",
        &Expected {
            scheme: "file://",
            hostname: "",
            port: "",
            path: "/file.txt",
            query: "",
            anchor: "",
        },
    );

    verify_segments(&mut normalizer, "http://", &NOTHING);

    let bare_word = Expected {
        scheme: "http://",
        hostname: "http",
        port: "",
        path: "/",
        query: "",
        anchor: "",
    };
    verify_segments(&mut normalizer, "http:/", &bare_word);
    verify_segments(&mut normalizer, "http:", &bare_word);

    verify_segments(
        &mut normalizer,
        "localhost:8",
        &Expected {
            scheme: "http://",
            hostname: "localhost",
            port: ":8",
            path: "/",
            query: "",
            anchor: "",
        },
    );

    verify_segments(
        &mut normalizer,
        "abc.com/#w",
        &Expected {
            scheme: "http://",
            hostname: "abc.com",
            port: "",
            path: "/",
            query: "",
            anchor: "#w",
        },
    );
}

#[test]
fn test_hostname_without_www() {
    let mut normalizer = Normalizer::new();
    normalizer.scan("www.z.com").unwrap();
    assert_eq!(normalizer.hostname_without_www(), "z.com");
    normalizer.scan("www45.z.com").unwrap();
    assert_eq!(normalizer.hostname_without_www(), "z.com");
    normalizer.scan("www.com").unwrap();
    assert_eq!(normalizer.hostname_without_www(), "www.com");
}

#[test]
fn test_port_accessor() {
    let mut normalizer = Normalizer::new();
    assert_eq!(normalizer.scan("z.com:999").unwrap().port(), ":999");
    assert_eq!(normalizer.scan("z.com:80").unwrap().port(), "");
    assert_eq!(normalizer.scan("z.com").unwrap().port(), "");
}

#[test]
fn test_document() {
    let mut normalizer = Normalizer::new();
    normalizer.scan("z.com").unwrap();
    assert_eq!(normalizer.document(), "");

    normalizer.scan("http://www.z.com:99/zoobie/blah.html?ab=de").unwrap();
    assert_eq!(normalizer.document(), "blah.html");

    normalizer.scan("http://www.z.com/zoobie/index.html").unwrap();
    assert_eq!(normalizer.document(), "index.html");
}

#[test]
fn test_path_without_document() {
    let mut normalizer = Normalizer::new();
    normalizer.scan("z.com").unwrap();
    assert_eq!(normalizer.path_without_document(), "/");

    normalizer.scan("http://www.z.com:99/zoobie/splat/blah.html?ab=de").unwrap();
    assert_eq!(normalizer.path_without_document(), "/zoobie/splat/");

    // A last segment without a trailing '/' always counts as a document
    normalizer.scan("http://www.z.com/zoobie/splat").unwrap();
    assert_eq!(normalizer.path_without_document(), "/zoobie/");
}

#[test]
fn test_forms_do_not_change_segments() {
    let mut normalizer = Normalizer::new();
    normalizer.scan("http://www.z.com/blah.html").unwrap();
    assert_eq!(normalizer.hostname(), "www.z.com");
    normalizer.grouping_form();
    assert_eq!(normalizer.hostname(), "www.z.com");

    normalizer.scan("z.com/abc/g.txt").unwrap();
    assert_eq!(normalizer.path(), "/abc/g.txt");
    normalizer.path_grouping_form();
    assert_eq!(normalizer.path(), "/abc/g.txt");
}

#[test]
fn test_raw_segments() {
    let mut normalizer = Normalizer::new();
    normalizer.scan("HTTP://Example.com:8080/A/b%2f?&x=1#Top").unwrap();
    assert_eq!(normalizer.segment_str(Segment::Scheme), Some("http"));
    assert_eq!(normalizer.segment_str(Segment::Hostname), Some("example.com"));
    assert_eq!(normalizer.segment_str(Segment::Port), Some("8080"));
    assert_eq!(normalizer.segment_str(Segment::Path), Some("A/b%2F"));
    assert_eq!(normalizer.segment_str(Segment::Query), Some("&x=1"));
    assert_eq!(normalizer.segment_str(Segment::Anchor), Some("Top"));

    normalizer.scan("example.com").unwrap();
    assert_eq!(normalizer.segment_str(Segment::Scheme), Some(""));
    assert_eq!(normalizer.segment_str(Segment::Query), None);
    assert!(normalizer.segments().is_visited(Segment::Path));
    assert!(!normalizer.segments().is_visited(Segment::Port));
}

#[test]
fn test_segment_equals() {
    let mut normalizer = Normalizer::new();
    normalizer.scan("https://a.com/x").unwrap();
    assert!(normalizer.segment_equals(Segment::Scheme, "https"));
    assert!(!normalizer.segment_equals(Segment::Scheme, "http"));
    assert!(normalizer.segment_equals(Segment::Anchor, ""));
    assert!(!normalizer.segment_equals(Segment::Anchor, "x"));
}

#[test]
fn test_find_index_of_token() {
    let mut normalizer = Normalizer::new();
    normalizer.scan("z.blah123456blah.com").unwrap();
    assert_eq!(normalizer.find_token("a", 2, 14), Some(4));
    assert_eq!(normalizer.find_token("ape", 2, 14), None);
    assert_eq!(normalizer.find_token("blah", 2, 14), Some(2));
    assert_eq!(normalizer.find_token("6blah", 2, 14), Some(11));
}

#[test]
fn test_original_keeps_cleaned_input() {
    let mut normalizer = Normalizer::new();
    normalizer.scan("  http: //a.com/x \n").unwrap();
    assert_eq!(normalizer.original(), "http://a.com/x");
}
