// reelmood-core/tests/scorer_tests.rs
use std::collections::HashSet;

use reelmood_core::{analyze, Lexicon, Sentiment, SentimentScorer, SentimentScores, ENTHUSIASTIC_TONE};

/// A spread of reviews covering every branch of the scorer.
fn review_corpus() -> Vec<String> {
    let mut corpus: Vec<String> = [
        "",
        "   ",
        "This movie was amazing and brilliant!",
        "It was okay, decent, average",
        "Terrible. Awful. Horrible. The worst film of the year.",
        "Great cast, great score, great direction, but a boring and predictable plot.",
        "Good good good bad bad fine",
        "Amazing excellent fantastic brilliant outstanding superb wonderful incredible",
        "Was it meant to be funny? Or sad? Who knows?",
        "!!!!!!!!!!!!",
        "LOVED IT. Best film ever, perfect in every way!!!",
        "hate hated hate, boring, stupid, but the soundtrack was fine and the acting okay",
        "goodness, badly, finest, averages",
        "It was a cliché from start to finish, so cliché.",
        "Normal, regular, typical, ordinary, standard fare. Good though.",
        "The film is mediocre. Not bad, not great.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    corpus.push("a".repeat(250));
    corpus.push(format!("{} awful", "great ".repeat(40)));
    corpus.push("bad ".repeat(101) + &"good ".repeat(99));
    corpus.push("good ".repeat(101) + &"bad ".repeat(99));
    corpus
}

#[test]
fn test_scores_always_sum_to_100() {
    for review in review_corpus() {
        let result = analyze(&review);
        assert_eq!(result.scores.total(), 100, "scores for {:?}: {:?}", review, result.scores);
    }
}

#[test]
fn test_confidence_within_bounds() {
    for review in review_corpus() {
        let result = analyze(&review);
        assert!(result.confidence <= 100, "confidence for {:?}: {}", review, result.confidence);
        assert!(result.confidence >= 60, "confidence for {:?}: {}", review, result.confidence);
    }
}

#[test]
fn test_key_phrases_are_distinct_and_bounded() {
    for review in review_corpus() {
        let result = analyze(&review);
        assert!(result.key_phrases.len() <= 5);
        let unique: HashSet<&String> = result.key_phrases.iter().collect();
        assert_eq!(unique.len(), result.key_phrases.len(), "duplicates for {:?}", review);
    }
}

#[test]
fn test_sentiment_consistent_with_raw_counts() {
    let scorer = SentimentScorer::builtin();
    for review in review_corpus() {
        let tally = scorer.tally(&review);
        if tally.total() == 0 {
            continue;
        }
        let result = scorer.analyze(&review);
        assert_eq!(result.sentiment, tally.dominant().unwrap_or(Sentiment::Neutral), "{:?}", review);
    }
}

#[test]
fn test_empty_string() {
    let result = analyze("");
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.confidence, 75);
    assert_eq!(result.scores, SentimentScores::new(25, 50, 25));
    assert!(result.key_phrases.is_empty());
}

#[test]
fn test_amazing_and_brilliant() {
    let result = analyze("This movie was amazing and brilliant!");
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.confidence, 95);
    assert_eq!(result.scores, SentimentScores::new(87, 9, 4));
    assert_eq!(result.key_phrases, vec!["amazing", "brilliant"]);
}

#[test]
fn test_exclamations_only() {
    let result = analyze("!!!!!!!!!!!!");
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.confidence, 65);
    assert_eq!(result.scores, SentimentScores::new(40, 50, 10));
    assert_eq!(result.key_phrases, vec![ENTHUSIASTIC_TONE]);
}

#[test]
fn test_neutral_words_only() {
    let result = analyze("It was okay, decent, average");
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.key_phrases, vec!["okay", "decent", "average"]);
    assert_eq!(result.scores, SentimentScores::new(5, 90, 5));
    assert_eq!(result.confidence, 90);
    assert!(result.scores.neutral > result.scores.positive);
    assert!(result.scores.neutral > result.scores.negative);
}

#[test]
fn test_analyze_is_idempotent() {
    for review in review_corpus() {
        assert_eq!(analyze(&review), analyze(&review));
    }
}

#[test]
fn test_matching_ignores_case() {
    assert_eq!(analyze("AMAZING"), analyze("amazing"));
    assert_eq!(analyze("BoRiNg").sentiment, Sentiment::Negative);
}

#[test]
fn test_substrings_do_not_match() {
    // None of these contain a keyword as a whole word.
    let result = analyze("goodness, badly, finest, averages");
    assert!(result.key_phrases.is_empty());
    assert_eq!(result.confidence, 75);
}

#[test]
fn test_key_phrases_follow_table_order_and_truncate() {
    let result = analyze("fine, bad, superb, amazing, waste, okay, great");
    // Positive table first in declaration order, then negative, then neutral.
    assert_eq!(result.key_phrases, vec!["amazing", "superb", "great", "bad", "waste"]);
}

#[test]
fn test_repeated_term_counts_every_occurrence() {
    let scorer = SentimentScorer::builtin();
    let tally = scorer.tally("Good good good bad bad fine");
    assert_eq!(tally.positive, 3);
    assert_eq!(tally.negative, 2);
    assert_eq!(tally.neutral, 1);
    assert_eq!(analyze("Good good good bad bad fine").sentiment, Sentiment::Positive);
}

#[test]
fn test_near_even_split_stays_consistent() {
    let review = "bad ".repeat(101) + &"good ".repeat(99);
    let result = analyze(&review);
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.scores.total(), 100);
    assert_eq!(result.key_phrases, vec!["good", "bad"]);
}

#[test]
fn test_scorer_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| analyze("Great fun, but predictable.")))
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_custom_lexicon_terms_are_counted() -> anyhow::Result<()> {
    let user = Lexicon {
        name: "horror".to_string(),
        positive: vec!["creepy".to_string(), "must-see".to_string()],
        negative: vec!["gory".to_string()],
        ..Default::default()
    };
    let merged = reelmood_core::merge_lexicons(Lexicon::builtin(), Some(user))?;
    let scorer = SentimentScorer::new(&merged)?;

    let result = scorer.analyze("Creepy, a must-see.");
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.key_phrases, vec!["creepy", "must-see"]);

    // The built-in scorer is unaffected.
    assert!(analyze("Creepy, a must-see.").key_phrases.is_empty());
    Ok(())
}
