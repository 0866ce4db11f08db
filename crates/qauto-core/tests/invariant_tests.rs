//! Property tests for the accumulated pass state

use proptest::prelude::*;
use qauto_core::AnalysisState;

fn item() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["QBtn", "QCard", "QInput", "QList", "QItem"]).prop_map(String::from)
}

fn items() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(item(), 0..5)
}

fn is_subset(part: &[String], whole: &[String]) -> bool {
    part.iter().all(|item| whole.contains(item))
}

fn has_duplicates(list: &[String]) -> bool {
    list.iter()
        .enumerate()
        .any(|(i, item)| list[..i].contains(item))
}

proptest! {
    #[test]
    fn existing_and_missing_stay_within_merged(
        scans in prop::collection::vec((items(), items()), 1..6)
    ) {
        let mut state = AnalysisState::new();
        for (declared, scanned) in &scans {
            state.record("components", declared, scanned);
        }

        let merged = state.merged_in("components");
        prop_assert!(is_subset(state.existing_in("components"), merged));
        prop_assert!(is_subset(state.missing_in("components"), merged));
        prop_assert!(!has_duplicates(merged));
        prop_assert!(!has_duplicates(state.missing_in("components")));
    }

    #[test]
    fn missing_never_contains_declared_items(declared in items(), scanned in items()) {
        let mut state = AnalysisState::new();
        state.record("components", &declared, &scanned);

        for item in state.missing_in("components") {
            prop_assert!(!declared.contains(item));
            prop_assert!(scanned.contains(item));
        }
    }

    #[test]
    fn merged_keeps_first_seen_order(declared in items(), scanned in items()) {
        let mut state = AnalysisState::new();
        state.record("components", &declared, &scanned);

        let mut expected: Vec<String> = Vec::new();
        for item in declared.iter().chain(scanned.iter()) {
            if !expected.contains(item) {
                expected.push(item.clone());
            }
        }
        prop_assert_eq!(state.merged_in("components"), expected.as_slice());
    }
}
