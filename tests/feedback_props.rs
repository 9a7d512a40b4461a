use letter_feedback::commands::audit::check_pair;
use letter_feedback::core::{Feedback, Mark, Word, classify, fold};
use proptest::prelude::*;
use std::collections::HashMap;

fn counts(chars: &[char]) -> HashMap<char, usize> {
    let mut map = HashMap::new();
    for &c in chars {
        *map.entry(c).or_insert(0) += 1;
    }
    map
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn self_match_is_all_correct(target in "[a-eA-E]{1,10}") {
        let feedback = classify(&target, &target);
        prop_assert!(feedback.is_solved());
        prop_assert!(feedback.marks().iter().all(|&m| m == Mark::Correct));
        prop_assert_eq!(feedback.len(), target.chars().count());
    }

    #[test]
    fn hits_never_exceed_target_letters(target in "[a-d]{1,8}", guess in "[a-dA-D]{0,10}") {
        let feedback = classify(&target, &guess);
        let available = counts(&fold(&target));
        let guess_chars = fold(&guess);

        let mut credited: HashMap<char, usize> = HashMap::new();
        for (mark, letter) in feedback.marks().iter().zip(&guess_chars) {
            if mark.is_hit() {
                *credited.entry(*letter).or_insert(0) += 1;
            }
        }
        for (letter, n) in credited {
            prop_assert!(n <= available.get(&letter).copied().unwrap_or(0));
        }
    }

    #[test]
    fn output_shape_follows_lengths(target in "[a-c]{0,8}", guess in "[a-c]{0,8}") {
        let feedback = classify(&target, &guess);
        let (t, g) = (target.len(), guess.len());

        prop_assert_eq!(feedback.len(), t.max(g));
        for (i, &mark) in feedback.marks().iter().enumerate() {
            if i >= t {
                prop_assert_eq!(mark, Mark::Absent);
            } else if i >= g {
                prop_assert_eq!(mark, Mark::Missing);
            }
        }
        prop_assert_eq!(feedback.length_mismatch().is_none(), t == g);
    }

    #[test]
    fn exact_positions_are_always_correct(target in "[a-d]{1,8}", guess in "[a-d]{1,8}") {
        let feedback = classify(&target, &guess);
        for (i, (t, g)) in target.chars().zip(guess.chars()).enumerate() {
            prop_assert_eq!(feedback.marks()[i] == Mark::Correct, t == g);
        }
    }

    #[test]
    fn scoring_is_repeatable(target in "[a-z]{1,8}", guess in "[a-z]{0,8}") {
        prop_assert_eq!(classify(&target, &guess), classify(&target, &guess));
    }

    #[test]
    fn case_is_ignored(target in "[a-zA-Z]{1,8}", guess in "[a-zA-Z]{0,8}") {
        prop_assert_eq!(
            classify(&target, &guess),
            classify(&target.to_lowercase(), &guess.to_uppercase())
        );
    }

    #[test]
    fn word_and_str_entry_points_agree(target in "[a-e]{1,8}", guess in "[a-e ]{0,8}") {
        let word = Word::new(&target).unwrap();
        let feedback = Feedback::calculate(&word, &guess);
        prop_assert_eq!(&feedback, &classify(&target, &guess));
        prop_assert!(check_pair(&word, &guess, &feedback).is_empty());
    }

    #[test]
    fn glyphs_parse_back(target in "[a-c]{1,6}", guess in "[a-c]{0,6}") {
        let feedback = classify(&target, &guess);
        let parsed = Feedback::parse(&feedback.to_string()).unwrap();
        prop_assert_eq!(parsed.marks(), feedback.marks());
    }
}

#[test]
fn apple_pplea() {
    assert_eq!(classify("APPLE", "PPLEA").to_string(), "YGYYY");
}

#[test]
fn error_roar() {
    let feedback = classify("ERROR", "ROAR");
    assert_eq!(
        feedback.marks(),
        &[Mark::Present, Mark::Present, Mark::Absent, Mark::Present, Mark::Missing]
    );
}
