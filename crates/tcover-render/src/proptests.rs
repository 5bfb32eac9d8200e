use crate::wrap::{tests::MockFace, wrap_lines};
use proptest::prelude::*;
use tcover_core::Face;

const BUDGET: f32 = 660.0;

fn width(text: &str) -> f32 {
    MockFace.bbox(text).width()
}

// Property: anything that fits the budget comes back as a single line
proptest! {
    #[test]
    fn prop_fitting_title_is_one_line(s in "[a-z美院学生]{1,30}") {
        prop_assume!(width(&s) <= BUDGET);
        prop_assert_eq!(wrap_lines(&s, &MockFace, BUDGET), vec![s]);
    }
}

// Property: wrapping never loses or reorders characters
proptest! {
    #[test]
    fn prop_lines_concatenate_to_title(s in "\\PC{0,200}") {
        let lines = wrap_lines(&s, &MockFace, BUDGET);
        prop_assert_eq!(lines.concat(), s);
    }
}

// Property: every line fits, unless it is a single oversized character
proptest! {
    #[test]
    fn prop_lines_fit_budget(s in "[a-zA-Z0-9 标题副]{0,300}", budget in 5.0f32..700.0) {
        for line in wrap_lines(&s, &MockFace, budget) {
            prop_assert!(!line.is_empty());
            prop_assert!(width(&line) <= budget || line.chars().count() == 1);
        }
    }
}

// Property: lines are as long as they can be
proptest! {
    #[test]
    fn prop_lines_are_greedy(s in "[a-z标题]{0,300}", budget in 5.0f32..700.0) {
        let lines = wrap_lines(&s, &MockFace, budget);
        for pair in lines.windows(2) {
            let next = pair[1].chars().next().unwrap();
            let extended = format!("{}{}", pair[0], next);
            prop_assert!(width(&extended) > budget);
        }
    }
}

// Property: rewrapping the joined lines finds the same split points
proptest! {
    #[test]
    fn prop_wrap_is_idempotent(s in "[a-z美院学生 ]{0,300}") {
        let lines = wrap_lines(&s, &MockFace, BUDGET);
        let rewrapped = wrap_lines(&lines.concat(), &MockFace, BUDGET);
        prop_assert_eq!(rewrapped, lines);
    }
}
