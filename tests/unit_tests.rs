// Unit tests for FAQ Bot matching

use faq_bot::core::{compare_two_strings, Matcher, TARGET_SIMILARITY};
use faq_bot::models::MatchResult;
use faq_bot::services::QuestionRepository;

fn builtin_questions() -> Vec<String> {
    QuestionRepository::builtin()
        .unwrap()
        .questions()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_match_is_always_a_candidate() {
    let matcher = Matcher::default();
    let questions = builtin_questions();
    let queries = [
        "hi",
        "helo",
        "thank u",
        "how r you",
        "what's up?",
        "can i ask you about rust",
        "weather",
        "",
        "?",
    ];

    for query in queries {
        match matcher.find_best_match(query, questions.iter().map(String::as_str)) {
            MatchResult::Matched(question) => {
                assert!(questions.contains(&question), "{:?} is not a candidate", question)
            }
            MatchResult::NoMatch => {}
        }
    }
}

#[test]
fn test_identical_query_matches_itself() {
    let matcher = Matcher::default();

    for question in builtin_questions() {
        let upper = question.to_uppercase();
        let result = matcher.find_best_match(&upper, [question.as_str()]);
        assert_eq!(result, MatchResult::Matched(question.clone()));
    }
}

#[test]
fn test_unrelated_query_has_no_match() {
    let matcher = Matcher::default();

    let result = matcher.find_best_match("zzz completely unrelated", ["hi", "bye", "thanks"]);

    assert_eq!(result, MatchResult::NoMatch);
}

#[test]
fn test_matched_score_is_maximal_and_above_threshold() {
    let matcher = Matcher::default();
    let questions = builtin_questions();

    for query in ["good afternon", "how is it going", "thank you!", "hey there"] {
        if let MatchResult::Matched(winner) =
            matcher.find_best_match(query, questions.iter().map(String::as_str))
        {
            let best = matcher.score(query, &winner);
            assert!(best >= TARGET_SIMILARITY);
            for question in &questions {
                assert!(matcher.score(query, question) <= best);
            }
        }
    }
}

#[test]
fn test_first_candidate_wins_tie() {
    let matcher = Matcher::default();

    let result = matcher.find_best_match("hello", ["hello", "HELLO"]);

    assert_eq!(result, MatchResult::Matched("hello".to_string()));
}

#[test]
fn test_similarity_bounds() {
    let questions = builtin_questions();

    for a in &questions {
        for b in &questions {
            let score = compare_two_strings(&a.to_lowercase(), &b.to_lowercase());
            assert!((0.0..=1.0).contains(&score));
        }
    }
}
