use crate::data::models::AttemptRecord;
use crate::store::{JsonStore, StoreError, RESULTS_FILE};

pub struct ResultRepository;

impl ResultRepository {
    pub fn all(store: &JsonStore) -> Vec<AttemptRecord> {
        store.load(RESULTS_FILE, Vec::new())
    }

    /// All attempts, most recently started first.
    pub fn newest_first(store: &JsonStore) -> Vec<AttemptRecord> {
        let mut results = Self::all(store);
        results.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        results
    }

    pub fn find(store: &JsonStore, attempt_id: i64) -> Option<AttemptRecord> {
        Self::all(store).into_iter().find(|r| r.id == attempt_id)
    }

    pub fn append(store: &JsonStore, record: &AttemptRecord) -> Result<(), StoreError> {
        let mut results = Self::all(store);
        results.push(record.clone());
        store.save(RESULTS_FILE, &results)
    }

    pub fn delete(store: &JsonStore, attempt_id: i64) -> Result<bool, StoreError> {
        let mut results = Self::all(store);
        let before = results.len();
        results.retain(|r| r.id != attempt_id);
        store.save(RESULTS_FILE, &results)?;
        Ok(results.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::QuizContext;
    use crate::features::quiz::ScoringEngine;
    use chrono::{DateTime, Utc};
    use tempfile::TempDir;

    fn record(name: &str, started: &str, ended: &str) -> AttemptRecord {
        let ctx = QuizContext {
            name: name.to_string(),
            started_at: started.parse().unwrap(),
        };
        let ended_at: DateTime<Utc> = ended.parse().unwrap();
        ScoringEngine::build_record(&ctx, ended_at, None, Vec::new(), ScoringEngine::tally(&[], 0))
    }

    #[test]
    fn test_newest_first_and_delete() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        let older = record("a", "2024-01-01T09:00:00Z", "2024-01-01T09:10:00Z");
        let newer = record("b", "2024-02-01T09:00:00Z", "2024-02-01T09:10:00Z");
        ResultRepository::append(&store, &older).unwrap();
        ResultRepository::append(&store, &newer).unwrap();

        let names: Vec<_> = ResultRepository::newest_first(&store)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);

        assert_eq!(ResultRepository::find(&store, older.id).unwrap().name, "a");
        assert!(ResultRepository::delete(&store, older.id).unwrap());
        assert!(ResultRepository::find(&store, older.id).is_none());
        assert_eq!(ResultRepository::all(&store).len(), 1);
    }

    #[test]
    fn test_legacy_records_survive_append() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        let legacy = r#"[
          {
            "id": 1714557600000,
            "name": "Ana",
            "started_at": null,
            "ended_at": "2024-05-01T10:12:00.123456+00:00",
            "duration_seconds": 720,
            "total_questions": 1,
            "answered": 1,
            "correct_pos": 1,
            "correct_word": 0,
            "score": 0.5,
            "items": [
              {
                "vocab_id": 3,
                "meaning": "bold",
                "correct_pos": "adj.",
                "correct_word": "brave",
                "user_pos": "adj",
                "user_word": "brav",
                "is_pos_correct": true,
                "is_word_correct": false,
                "skipped": false
              }
            ]
          },
          {
            "id": 1714557700000,
            "name": "Guest",
            "started_at": "2024-05-01T10:00:00+00:00",
            "score": 1.0,
            "total_questions": 1,
            "correct_word": 1,
            "correct_pos": 1,
            "items": [],
            "timestamp": "2024-05-01T10:15:00+00:00"
          }
        ]"#;
        std::fs::write(store.path_of(RESULTS_FILE), legacy).unwrap();

        let loaded = ResultRepository::all(&store);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].items[0].word, "brave");
        assert_eq!(loaded[0].items[0].pos, "adj.");
        assert_eq!(loaded[0].started_at, DateTime::<Utc>::default());

        let fresh = record("Mina", "2024-06-01T09:00:00Z", "2024-06-01T09:10:00Z");
        ResultRepository::append(&store, &fresh).unwrap();

        let names: Vec<_> = ResultRepository::newest_first(&store)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Mina", "Guest", "Ana"]);
    }
}
