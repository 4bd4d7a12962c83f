use serde::{Deserialize, Serialize};

/// A training module: an ordered set of lessons on one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: String,
    pub lessons: Vec<Lesson>,
}

impl Module {
    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    /// Markdown lesson body.
    pub content: String,
    pub quiz: Vec<QuizQuestion>,
}

/// Multiple-choice question. Invariant: `correct < options.len()` for every
/// question in the built-in catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

/// Latest recorded quiz submission for one (user, module, lesson).
/// Resubmission overwrites; no attempt history is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub module_id: String,
    pub lesson_id: String,
    pub score: f64,
    pub passed: bool,
}
