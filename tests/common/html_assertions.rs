//! Assertion macros for rendered email HTML.

/// Asserts that the rendered HTML contains a substring.
#[macro_export]
macro_rules! assert_html_contains {
    ($html:expr, $needle:expr) => {
        assert!(
            $html.contains($needle),
            "expected rendered HTML to contain {:?}\n--- html ---\n{}",
            $needle,
            $html
        )
    };
}

/// Asserts that the rendered HTML does NOT contain a substring.
#[macro_export]
macro_rules! assert_html_not_contains {
    ($html:expr, $needle:expr) => {
        assert!(
            !$html.contains($needle),
            "expected rendered HTML to not contain {:?}\n--- html ---\n{}",
            $needle,
            $html
        )
    };
}

/// Asserts the exact number of occurrences of a substring.
#[macro_export]
macro_rules! assert_html_count {
    ($html:expr, $needle:expr, $count:expr) => {
        assert_eq!(
            $html.matches($needle).count(),
            $count,
            "expected exactly {} occurrence(s) of {:?}\n--- html ---\n{}",
            $count,
            $needle,
            $html
        )
    };
}
