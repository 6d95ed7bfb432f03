#![cfg(any(debug_assertions, feature = "check-assumptions"))]

use assuming::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn compare_reports_iff_relation_fails(a in any::<i32>(), b in any::<i32>()) {
        let r = RecordingReporter::new();
        assume_eq!(in &r; a, b);
        assume_ne!(in &r; a, b);
        assume_lt!(in &r; a, b);
        assume_gt!(in &r; a, b);
        assume_le!(in &r; a, b);
        assume_ge!(in &r; a, b);

        let expected = [a != b, a == b, a >= b, a <= b, a > b, a < b]
            .into_iter()
            .filter(|failed| *failed)
            .count();
        let failures = r.take();
        prop_assert_eq!(failures.len(), expected);
        let (a_text, b_text) = (a.to_string(), b.to_string());
        for f in &failures {
            prop_assert_eq!(f.values.len(), 2);
            prop_assert_eq!(f.value("a"), Some(a_text.as_str()));
            prop_assert_eq!(f.value("b"), Some(b_text.as_str()));
        }
    }

    #[test]
    fn valid_index_matches_bounds(index in -8_i64..16, len in 0_usize..10) {
        let r = RecordingReporter::new();
        let items = vec![0_u8; len];
        assume_valid_index!(in &r; index, items);

        let valid = index >= 0 && (index as usize) < len;
        prop_assert_eq!(r.is_empty(), valid);
        if let Some(f) = r.last() {
            let (index_text, len_text) = (index.to_string(), len.to_string());
            prop_assert_eq!(f.values.len(), 2);
            prop_assert_eq!(f.value("index"), Some(index_text.as_str()));
            prop_assert_eq!(f.value("size of items"), Some(len_text.as_str()));
        }
    }

    #[test]
    fn emptiness_kinds_agree(text in "[a-z]{0,4}") {
        let r = RecordingReporter::new();
        assume_empty!(in &r; text);
        assume_not_empty!(in &r; text);
        assume_null_or_empty!(in &r; text);
        assume_not_null_or_empty!(in &r; text);

        let failures = r.take();
        prop_assert_eq!(failures.len(), 2);
        let kinds: Vec<_> = failures.iter().map(|f| f.kind).collect();
        if text.is_empty() {
            prop_assert_eq!(kinds, vec![AssumptionKind::NotEmpty, AssumptionKind::NotNullOrEmpty]);
            prop_assert_eq!(failures[1].value("text"), Some("''"));
        } else {
            prop_assert_eq!(kinds, vec![AssumptionKind::Empty, AssumptionKind::NullOrEmpty]);
            let quoted = format!("'{text}'");
            prop_assert_eq!(failures[1].value("text"), Some(quoted.as_str()));
        }
    }
}
