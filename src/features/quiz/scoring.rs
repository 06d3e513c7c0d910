use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

use crate::data::models::{
    AnswerInput, AttemptRecord, QuestionResult, QuizContext, SubmittedItem, VocabEntry,
};
use crate::features::vocab::{canon, normalize_pos};

/// Each correct field is worth half a point.
pub const POINTS_PER_FIELD: f64 = 0.5;

/// Length of the client-side timer on the timed quiz.
pub const QUIZ_DURATION_SECONDS: u32 = 12 * 60;

/// Aggregate counts for one attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tally {
    pub total_questions: usize,
    pub answered: usize,
    pub correct_word: usize,
    pub correct_pos: usize,
    pub score: f64,
}

/// Comparison key for part-of-speech answers: "Verb", "v" and "v." agree.
pub fn pos_key(raw: &str) -> String {
    canon(&normalize_pos(raw)).replace('.', "")
}

pub fn is_word_correct(user_word: &str, word: &str) -> bool {
    canon(user_word) == canon(word)
}

pub fn is_pos_correct(user_pos: &str, pos: &str) -> bool {
    pos_key(user_pos) == pos_key(pos)
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Grades a single answer against canonical values.
    pub fn grade(
        word: &str,
        pos: &str,
        meaning: &str,
        user_word: &str,
        user_pos: &str,
    ) -> QuestionResult {
        QuestionResult {
            vocab_id: None,
            user_word: user_word.to_string(),
            user_pos: user_pos.to_string(),
            word: word.to_string(),
            pos: pos.to_string(),
            meaning: meaning.to_string(),
            is_word_correct: is_word_correct(user_word, word),
            is_pos_correct: is_pos_correct(user_pos, pos),
            skipped: false,
        }
    }

    /// Counts correct fields over `items`. `total_questions` is supplied by
    /// the caller since unknown answers are not part of `items`.
    pub fn tally(items: &[QuestionResult], total_questions: usize) -> Tally {
        let correct_word = items.iter().filter(|x| x.is_word_correct).count();
        let correct_pos = items.iter().filter(|x| x.is_pos_correct).count();
        let answered = items
            .iter()
            .filter(|x| !x.user_word.trim().is_empty() || !x.user_pos.trim().is_empty())
            .count();

        Tally {
            total_questions,
            answered,
            correct_word,
            correct_pos,
            score: (correct_pos as f64) * POINTS_PER_FIELD + (correct_word as f64) * POINTS_PER_FIELD,
        }
    }

    /// Grades the exam page's `{word: answer}` map.
    ///
    /// Keys are matched exactly against `VocabEntry::word`; unknown keys are
    /// skipped but still count towards `total_questions`.
    pub fn grade_exam(
        vocab: &[VocabEntry],
        answers: &BTreeMap<String, AnswerInput>,
    ) -> (Vec<QuestionResult>, Tally) {
        let lookup: HashMap<&str, &VocabEntry> =
            vocab.iter().map(|v| (v.word.as_str(), v)).collect();

        let items: Vec<QuestionResult> = answers
            .iter()
            .filter_map(|(word, answer)| {
                let entry = lookup.get(word.as_str())?;
                let mut result = Self::grade(
                    &entry.word,
                    &entry.pos,
                    &entry.meaning,
                    &answer.english,
                    &answer.pos,
                );
                result.vocab_id = Some(entry.id);
                Some(result)
            })
            .collect();

        let tally = Self::tally(&items, answers.len());
        (items, tally)
    }

    /// Re-grades items posted by the timed quiz.
    ///
    /// The stored entry is used when `vocab_id` still exists, otherwise the
    /// canonical values the client echoed back. Client verdicts are ignored.
    pub fn grade_submitted(
        vocab: &[VocabEntry],
        submitted: &[SubmittedItem],
    ) -> (Vec<QuestionResult>, Tally) {
        let by_id: HashMap<u64, &VocabEntry> = vocab.iter().map(|v| (v.id, v)).collect();

        let items: Vec<QuestionResult> = submitted
            .iter()
            .map(|item| {
                let entry = item.vocab_id.and_then(|id| by_id.get(&id).copied());
                let (word, pos, meaning) = match entry {
                    Some(v) => (v.word.as_str(), v.pos.as_str(), v.meaning.as_str()),
                    None => (
                        item.correct_word.as_str(),
                        item.correct_pos.as_str(),
                        item.meaning.as_str(),
                    ),
                };

                let mut result = Self::grade(word, pos, meaning, &item.user_word, &item.user_pos);
                let disagrees = item.is_word_correct.is_some_and(|v| v != result.is_word_correct)
                    || item.is_pos_correct.is_some_and(|v| v != result.is_pos_correct);
                if disagrees {
                    log::debug!("Client verdict for {:?} overridden by server grading", word);
                }
                result.vocab_id = item.vocab_id;
                result.skipped = item.skipped;
                result
            })
            .collect();

        let tally = Self::tally(&items, submitted.len());
        (items, tally)
    }

    pub fn build_record(
        ctx: &QuizContext,
        ended_at: DateTime<Utc>,
        duration_seconds: Option<u32>,
        items: Vec<QuestionResult>,
        tally: Tally,
    ) -> AttemptRecord {
        AttemptRecord {
            id: ended_at.timestamp_millis(),
            name: ctx.name.clone(),
            started_at: ctx.started_at,
            ended_at,
            duration_seconds,
            total_questions: tally.total_questions,
            answered: tally.answered,
            correct_pos: tally.correct_pos,
            correct_word: tally.correct_word,
            score: tally.score,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, word: &str, pos: &str, meaning: &str) -> VocabEntry {
        VocabEntry {
            id,
            word: word.to_string(),
            pos: pos.to_string(),
            meaning: meaning.to_string(),
        }
    }

    fn answer(english: &str, pos: &str) -> AnswerInput {
        AnswerInput {
            english: english.to_string(),
            pos: pos.to_string(),
        }
    }

    #[test]
    fn test_word_comparison_ignores_case_and_spacing() {
        assert!(is_word_correct("  Look   AFTER ", "look after"));
        assert!(!is_word_correct("looks after", "look after"));
    }

    #[test]
    fn test_pos_comparison_uses_normalized_tags() {
        assert!(is_pos_correct("verb", "v."));
        assert!(is_pos_correct("V", "v."));
        assert!(is_pos_correct("", ""));
        assert!(!is_pos_correct("noun", "v."));
        assert!(is_pos_correct("Idiom.", "idiom"));
    }

    #[test]
    fn test_run_verb_scores_full_point() {
        let vocab = vec![entry(1, "run", "v.", "to move fast")];
        let answers = BTreeMap::from([("run".to_string(), answer("run", "verb"))]);

        let (items, tally) = ScoringEngine::grade_exam(&vocab, &answers);

        assert_eq!(items.len(), 1);
        assert!(items[0].is_word_correct);
        assert!(items[0].is_pos_correct);
        assert_eq!(items[0].vocab_id, Some(1));
        assert_eq!(tally.score, 1.0);
    }

    #[test]
    fn test_unknown_words_skipped_but_counted() {
        let vocab = vec![entry(1, "run", "v.", "to move fast")];
        let answers = BTreeMap::from([
            ("run".to_string(), answer("run", "noun")),
            ("Run".to_string(), answer("run", "v.")),
            ("ghost".to_string(), answer("", "")),
        ]);

        let (items, tally) = ScoringEngine::grade_exam(&vocab, &answers);

        assert_eq!(items.len(), 1);
        assert_eq!(tally.total_questions, 3);
        assert_eq!(tally.correct_word, 1);
        assert_eq!(tally.correct_pos, 0);
        assert_eq!(tally.score, 0.5);
    }

    #[test]
    fn test_score_is_half_point_multiple_within_bounds() {
        let vocab = vec![
            entry(1, "run", "v.", "to move fast"),
            entry(2, "brave", "adj.", "bold"),
            entry(3, "quickly", "adv.", "fast"),
        ];
        let answers = BTreeMap::from([
            ("run".to_string(), answer("run", "v")),
            ("brave".to_string(), answer("bravo", "adjective")),
            ("quickly".to_string(), answer("", "")),
        ]);

        let (_, tally) = ScoringEngine::grade_exam(&vocab, &answers);

        assert_eq!(tally.score, 0.5 * tally.correct_pos as f64 + 0.5 * tally.correct_word as f64);
        assert_eq!((tally.score * 2.0).fract(), 0.0);
        assert!(tally.score >= 0.0 && tally.score <= tally.total_questions as f64);
        assert_eq!(tally.answered, 2);
        assert_eq!(tally.score, 1.5);
    }

    #[test]
    fn test_grade_submitted_prefers_stored_entry() {
        let vocab = vec![entry(7, "brave", "adj.", "bold")];
        let submitted = vec![
            SubmittedItem {
                vocab_id: Some(7),
                correct_word: "wrong".into(),
                user_word: "Brave".into(),
                user_pos: "adj".into(),
                is_word_correct: Some(false),
                ..Default::default()
            },
            SubmittedItem {
                vocab_id: Some(99),
                meaning: "gone".into(),
                correct_word: "deleted".into(),
                correct_pos: "n.".into(),
                user_word: "deleted".into(),
                skipped: true,
                is_word_correct: Some(true),
                is_pos_correct: Some(true),
                ..Default::default()
            },
        ];

        let (items, tally) = ScoringEngine::grade_submitted(&vocab, &submitted);

        assert_eq!(items[0].word, "brave");
        assert!(items[0].is_word_correct && items[0].is_pos_correct);
        assert_eq!(items[1].word, "deleted");
        assert!(items[1].is_word_correct);
        assert!(!items[1].is_pos_correct);
        assert!(items[1].skipped);
        assert_eq!(tally.total_questions, 2);
        assert_eq!(tally.score, 1.5);
    }

    #[test]
    fn test_build_record_copies_context() {
        let ctx = QuizContext {
            name: "Mina".into(),
            started_at: "2024-05-01T10:00:00Z".parse().unwrap(),
        };
        let ended_at: DateTime<Utc> = "2024-05-01T10:12:00Z".parse().unwrap();
        let items = vec![ScoringEngine::grade("run", "v.", "to move fast", "run", "")];
        let tally = ScoringEngine::tally(&items, 1);

        let record = ScoringEngine::build_record(
            &ctx,
            ended_at,
            Some(QUIZ_DURATION_SECONDS),
            items,
            tally,
        );

        assert_eq!(record.id, ended_at.timestamp_millis());
        assert_eq!(record.name, "Mina");
        assert_eq!(record.duration_seconds, Some(720));
        assert_eq!(record.correct_word, 1);
        assert_eq!(record.correct_pos, 0);
        assert_eq!(record.answered, 1);
        assert_eq!(record.score, 0.5);
    }
}
