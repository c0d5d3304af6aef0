//! Property-based tests for the target scanner

use makers_parser::extract;
use proptest::prelude::*;

fn target_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,12}"
}

fn comment_body() -> impl Strategy<Value = String> {
    "[ a-zA-Z0-9.,`#-]{0,30}"
}

fn prerequisite_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(target_name(), 0..5)
}

proptest! {
    #[test]
    fn documented_block_roundtrips_its_comments(
        name in target_name(),
        comments in prop::collection::vec(comment_body(), 1..6),
    ) {
        let mut lines = vec![format!("{}:", name)];
        lines.extend(comments.iter().map(|c| format!("#{}", c)));
        lines.push(String::new());

        let targets = extract(&lines);
        prop_assert_eq!(targets.len(), 1);
        prop_assert_eq!(&targets[0].name, &name);

        let expected: String = comments.iter().map(|c| format!("{}\n", c)).collect();
        prop_assert_eq!(&targets[0].documentation, &expected);
    }

    #[test]
    fn spaced_prerequisites_are_kept_in_order(
        name in target_name(),
        prereqs in prerequisite_list(),
    ) {
        let line = format!("{}: {}", name, prereqs.join(" "));
        let targets = extract([line.as_str(), "# doc"]);
        prop_assert_eq!(&targets[0].prerequisites, &prereqs);
    }

    #[test]
    fn undocumented_declarations_yield_nothing(
        names in prop::collection::vec(target_name(), 0..8),
    ) {
        let lines: Vec<String> = names.iter().map(|n| format!("{}:", n)).collect();
        prop_assert!(extract(&lines).is_empty());
    }

    #[test]
    fn every_target_is_documented(lines in prop::collection::vec("[a-z#: \t]{0,12}", 0..40)) {
        for target in extract(&lines) {
            prop_assert!(target.is_documented());
            prop_assert!(!target.name.is_empty());
        }
    }
}
