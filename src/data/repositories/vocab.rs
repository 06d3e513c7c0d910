use std::collections::HashSet;

use crate::data::models::{UpdateVocabForm, VocabDraft, VocabEntry};
use crate::features::vocab::{canon, normalize_pos};
use crate::store::{JsonStore, StoreError, VOCAB_FILE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Added(u64),
    Duplicate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped: usize,
}

pub fn next_vocab_id(items: &[VocabEntry]) -> u64 {
    items.iter().map(|v| v.id).max().unwrap_or(0) + 1
}

/// Entries are considered the same when the canonical word and exact meaning match.
fn dedupe_key(word: &str, meaning: &str) -> (String, String) {
    (canon(word), meaning.to_string())
}

fn to_entry(id: u64, draft: VocabDraft) -> VocabEntry {
    VocabEntry {
        id,
        word: draft.word.trim().to_string(),
        pos: normalize_pos(&draft.pos),
        meaning: draft.meaning.trim().to_string(),
    }
}

pub fn insert_unique(vocab: &mut Vec<VocabEntry>, draft: VocabDraft) -> InsertOutcome {
    let key = dedupe_key(draft.word.trim(), draft.meaning.trim());
    if vocab.iter().any(|v| dedupe_key(&v.word, &v.meaning) == key) {
        return InsertOutcome::Duplicate;
    }

    let id = next_vocab_id(vocab);
    vocab.push(to_entry(id, draft));
    InsertOutcome::Added(id)
}

/// Appends drafts not already present. Duplicates within the batch are
/// skipped as well.
pub fn import_drafts(vocab: &mut Vec<VocabEntry>, drafts: Vec<VocabDraft>) -> ImportSummary {
    let mut existing: HashSet<(String, String)> = vocab
        .iter()
        .map(|v| dedupe_key(&v.word, &v.meaning))
        .collect();
    let mut summary = ImportSummary::default();

    for draft in drafts {
        let key = dedupe_key(draft.word.trim(), draft.meaning.trim());
        if !existing.insert(key) {
            summary.skipped += 1;
            continue;
        }
        let id = next_vocab_id(vocab);
        vocab.push(to_entry(id, draft));
        summary.added += 1;
    }

    summary
}

/// Returns false when no entry has `id`.
pub fn apply_update(vocab: &mut [VocabEntry], id: u64, form: UpdateVocabForm) -> bool {
    let Some(entry) = vocab.iter_mut().find(|v| v.id == id) else {
        return false;
    };

    if let Some(word) = form.word {
        entry.word = word.trim().to_string();
    }
    if let Some(pos) = form.pos {
        entry.pos = normalize_pos(&pos);
    }
    if let Some(meaning) = form.meaning {
        entry.meaning = meaning.trim().to_string();
    }
    true
}

pub struct VocabRepository;

impl VocabRepository {
    pub fn all(store: &JsonStore) -> Vec<VocabEntry> {
        store.load(VOCAB_FILE, Vec::new())
    }

    pub fn add(store: &JsonStore, draft: VocabDraft) -> Result<InsertOutcome, StoreError> {
        let mut vocab = Self::all(store);
        let outcome = insert_unique(&mut vocab, draft);
        if let InsertOutcome::Added(_) = outcome {
            store.save(VOCAB_FILE, &vocab)?;
        }
        Ok(outcome)
    }

    pub fn import(store: &JsonStore, drafts: Vec<VocabDraft>) -> Result<ImportSummary, StoreError> {
        let mut vocab = Self::all(store);
        let summary = import_drafts(&mut vocab, drafts);
        store.save(VOCAB_FILE, &vocab)?;
        Ok(summary)
    }

    pub fn update(store: &JsonStore, id: u64, form: UpdateVocabForm) -> Result<bool, StoreError> {
        let mut vocab = Self::all(store);
        let found = apply_update(&mut vocab, id, form);
        if found {
            store.save(VOCAB_FILE, &vocab)?;
        }
        Ok(found)
    }

    pub fn delete(store: &JsonStore, id: u64) -> Result<bool, StoreError> {
        let mut vocab = Self::all(store);
        let before = vocab.len();
        vocab.retain(|v| v.id != id);
        store.save(VOCAB_FILE, &vocab)?;
        Ok(vocab.len() != before)
    }
}
