use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLogEntry {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

/// For logging new questions (no id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestionLogEntry {
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}
