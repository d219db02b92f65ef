use homedesk_core::{evaluate_password, score_password, StrengthCategory};

#[test]
fn reference_scores() {
    assert_eq!(score_password(""), (StrengthCategory::VeryWeak, 0));
    assert_eq!(score_password("abc123"), (StrengthCategory::Strong, 3));
    assert_eq!(score_password("abcdef"), (StrengthCategory::Medium, 2));
    assert_eq!(score_password("12345"), (StrengthCategory::Weak, 1));
}

#[test]
fn category_labels_follow_score() {
    let labels: Vec<_> = (0..=3)
        .map(|score| StrengthCategory::from_score(score).label())
        .collect();
    assert_eq!(labels, vec!["Very Weak", "Weak", "Medium", "Strong"]);
}

#[test]
fn score_never_exceeds_three() {
    for password in [
        "",
        "a",
        "1",
        "######",
        "abc",
        "abc!!!",
        "a1",
        "Tr0ub4dor&3",
        "ππππππ7",
    ] {
        let report = evaluate_password(password);
        assert!(report.score <= 3, "{password} scored {}", report.score);
        assert_eq!(report.category, StrengthCategory::from_score(report.score));
    }
}

#[test]
fn unicode_letters_count_as_letters() {
    let report = evaluate_password("ππππππ7");
    assert!(report.checks.min_length);
    assert!(report.checks.has_letter);
    assert!(report.checks.has_digit);
    assert_eq!(report.category, StrengthCategory::Strong);
}

#[test]
fn weak_passwords_ask_for_a_tip() {
    assert!(evaluate_password("").needs_tip());
    assert!(evaluate_password("123").needs_tip());
    assert!(!evaluate_password("123456").needs_tip());
}
