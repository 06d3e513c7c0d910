use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// A stored vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: u64,          // Assigned as max(id) + 1
    pub word: String,     // English word
    #[serde(default)]
    pub pos: String,      // Normalized part of speech, may be empty
    pub meaning: String,  // Target-language meaning
}

/// A candidate entry before it is given an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabDraft {
    pub word: String,
    pub pos: String,
    pub meaning: String,
}

impl VocabDraft {
    pub fn new(word: impl Into<String>, pos: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            pos: pos.into(),
            meaning: meaning.into(),
        }
    }
}

/// Renders the draft as a line the bulk parser accepts.
impl fmt::Display for VocabDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pos.is_empty() {
            write!(f, "{} - {}", self.word, self.meaning)
        } else {
            write!(f, "{} ({}) - {}", self.word, self.pos, self.meaning)
        }
    }
}

/// Admin single-add form
#[derive(Debug, Deserialize, Validate)]
pub struct NewVocabForm {
    #[validate(length(min = 1, message = "Word and meaning are required."))]
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub pos: String,
    #[validate(length(min = 1, message = "Word and meaning are required."))]
    #[serde(default)]
    pub meaning: String,
}

impl NewVocabForm {
    pub fn trimmed(self) -> Self {
        Self {
            word: self.word.trim().to_string(),
            pos: self.pos,
            meaning: self.meaning.trim().to_string(),
        }
    }
}

/// Admin edit form; absent fields keep their stored value
#[derive(Debug, Default, Deserialize)]
pub struct UpdateVocabForm {
    pub word: Option<String>,
    pub pos: Option<String>,
    pub meaning: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkForm {
    #[serde(default)]
    pub bulk_text: String,
    pub confirm: Option<String>,
}

/// One question served to the exam page
#[derive(Debug, Serialize, Deserialize)]
pub struct ExamQuestion {
    pub id: usize,        // Position after shuffling
    pub word: String,
    pub pos: String,
    pub meaning: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<ExamQuestion>,
}
