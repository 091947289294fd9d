#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use logurl::{Normalizer, Segment, reverse_labels};
use proptest::{
    arbitrary::any, option, prop_assert, prop_assert_eq, proptest, strategy::Strategy,
    test_runner::Config,
};

/// Hostnames of two to four labels. The first label never starts with 'w'
/// so that no "www" label is dropped.
fn hostname() -> impl Strategy<Value = String> {
    "[a-vx-zA-VX-Z][a-z0-9]{0,8}(\\.[a-z][a-z0-9-]{0,5}[a-z0-9]){1,3}"
}

/// Paths without dot segments or default documents
fn path() -> impl Strategy<Value = String> {
    "(/[a-zA-Z0-9_~-]{1,8}){0,4}/?"
}

fn query() -> impl Strategy<Value = Option<String>> {
    option::of("[a-z]{1,5}=[a-z0-9]{1,5}(&[a-z]{1,5}=[a-z0-9]{1,5}){0,2}")
}

fn url() -> impl Strategy<Value = String> {
    (
        option::of("(http|https|ftp|HTTP)://"),
        hostname(),
        option::of(":[0-9]{1,5}"),
        path(),
        query(),
    )
        .prop_map(|(scheme, host, port, path, query)| {
            let mut url = scheme.unwrap_or_default();
            url.push_str(&host);
            url.push_str(&port.unwrap_or_default());
            url.push_str(&path);
            if let Some(query) = query {
                url.push('?');
                url.push_str(&query);
            }
            url
        })
}

proptest! {
    #![proptest_config(Config::with_cases(2000))]

    #[test]
    fn grouping_form_is_idempotent(raw in url()) {
        let mut normalizer = Normalizer::new();
        normalizer.scan(&raw).unwrap();
        let once = normalizer.grouping_form();
        prop_assert!(!once.is_empty(), "empty grouping form for [{}]", raw);

        normalizer.scan(&once).unwrap();
        let twice = normalizer.grouping_form();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn path_grouping_is_a_prefix_of_grouping(raw in url()) {
        let mut normalizer = Normalizer::new();
        normalizer.scan(&raw).unwrap();
        let grouping = normalizer.grouping_form();
        let by_path = normalizer.path_grouping_form();
        prop_assert!(
            grouping.starts_with(&by_path),
            "[{}] grouped as {} but by path as {}", raw, grouping, by_path
        );
    }

    #[test]
    fn escapes_are_upper_cased(host in hostname(), hi in "[0-9a-f]", lo in "[0-9a-f]") {
        let mut normalizer = Normalizer::new();
        normalizer.scan(&format!("{host}/x%{hi}{lo}y")).unwrap();
        let expected = format!("x%{}{}y", hi.to_uppercase(), lo.to_uppercase());
        prop_assert_eq!(normalizer.segment_str(Segment::Path), Some(expected.as_str()));
    }

    #[test]
    fn label_reversal_round_trips(s in "[a-z0-9.]{0,30}") {
        prop_assert_eq!(reverse_labels(&reverse_labels(&s)), s);
    }

    #[test]
    fn hostname_is_lower_case_without_edge_dots(raw in url()) {
        let mut normalizer = Normalizer::new();
        normalizer.scan(&raw).unwrap();
        let host = normalizer.hostname().to_string();
        prop_assert!(!host.starts_with('.') && !host.ends_with('.'));
        prop_assert_eq!(host.clone(), host.to_lowercase());
    }

    #[test]
    fn arbitrary_input_never_panics(raw in any::<String>(), keep_spaces in any::<bool>()) {
        let mut normalizer = Normalizer::with_capacity(64, 48);
        let options = logurl::ScanOptions::default().keep_spaces(keep_spaces);
        if normalizer.scan_with(&raw, options).is_ok() {
            normalizer.grouping_form();
            normalizer.reversed_grouping_form();
            normalizer.path_grouping_form();
            normalizer.raw_form();
            normalizer.linkable_form();
            normalizer.document();
            normalizer.should_discard();
            prop_assert!(normalizer.hostname().len() <= 48);
        }
    }
}
