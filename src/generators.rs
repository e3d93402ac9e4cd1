//! Property test generators for path joining
//!
//! Segments are built from a small alphabet heavy in separators so that
//! boundary cases (leading, trailing and all-separator segments) come up often.

use proptest::prelude::*;

/// Generators for join segments
pub struct SegmentGenerators;

impl SegmentGenerators {
    /// A single path component with no separators
    pub fn component() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_.-]{1,12}"
    }

    /// Components joined by single separators, no leading or trailing separator
    pub fn relative_segment() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::component(), 1..=4).prop_map(|parts| parts.join("/"))
    }

    /// A relative segment wrapped in separator runs of random length
    pub fn slashed_segment() -> impl Strategy<Value = String> {
        (0usize..=3, Self::relative_segment(), 0usize..=3).prop_map(|(lead, body, trail)| {
            format!("{}{}{}", "/".repeat(lead), body, "/".repeat(trail))
        })
    }

    /// Segments made only of separators, including the empty segment
    pub fn separator_run() -> impl Strategy<Value = String> {
        (0usize..=4).prop_map(|n| "/".repeat(n))
    }

    /// Anything that may appear as a segment, interior separator runs included
    pub fn any_segment() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => Self::slashed_segment(),
            2 => "[a-z/]{0,10}",
            1 => Self::separator_run(),
        ]
    }

    /// Arbitrary bytes with a high share of separators
    pub fn raw_bytes() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(prop_oneof![2 => Just(b'/'), 3 => any::<u8>()], 0..16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn relative_segments_have_no_edge_separators(
            segment in SegmentGenerators::relative_segment()
        ) {
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.starts_with('/'));
            prop_assert!(!segment.ends_with('/'));
            prop_assert!(!segment.contains("//"));
        }

        #[test]
        fn separator_runs_are_only_separators(
            run in SegmentGenerators::separator_run()
        ) {
            prop_assert!(run.bytes().all(|b| b == b'/'));
        }

        #[test]
        fn generators_dont_panic(
            _segment in SegmentGenerators::any_segment(),
            _bytes in SegmentGenerators::raw_bytes()
        ) {
        }
    }
}
