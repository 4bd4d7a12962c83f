//! Training catalog queries, quiz scoring, and per-user progress rollup.
//!
//! Progress is the only mutable state in the system. One global mutex
//! serializes access; racing submissions to the same lesson resolve
//! last-writer-wins, and no partially written attempt is ever observable.

use crate::domain::entities::training::{Lesson, Module, QuizAttempt};
use crate::domain::error::DomainError;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

type ProgressMap = HashMap<String, HashMap<String, QuizAttempt>>;

pub struct TrainingUseCase {
    modules: Vec<Module>,
    progress: Mutex<ProgressMap>,
}

#[derive(Debug, Serialize)]
pub struct ModuleSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub lesson_count: usize,
}

#[derive(Debug, Serialize)]
pub struct AnswerReview {
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct QuizOutcome {
    pub score: f64,
    pub correct: usize,
    pub total: usize,
    pub results: Vec<AnswerReview>,
    pub passed: bool,
}

#[derive(Debug, Serialize)]
pub struct ProgressSummary {
    pub user_id: String,
    pub completed_lessons: usize,
    pub total_lessons: usize,
    pub completion_percent: f64,
    pub average_score: f64,
    pub lesson_details: HashMap<String, QuizAttempt>,
}

pub const PASS_THRESHOLD: f64 = 70.0;

impl TrainingUseCase {
    pub fn new(modules: Vec<Module>) -> Self {
        Self {
            modules,
            progress: Mutex::new(HashMap::new()),
        }
    }

    pub fn modules(&self) -> Vec<ModuleSummary> {
        self.modules
            .iter()
            .map(|m| ModuleSummary {
                id: m.id.clone(),
                title: m.title.clone(),
                description: m.description.clone(),
                lesson_count: m.lessons.len(),
            })
            .collect()
    }

    pub fn module(&self, module_id: &str) -> Result<&Module, DomainError> {
        self.modules
            .iter()
            .find(|m| m.id == module_id)
            .ok_or_else(|| DomainError::NotFound(format!("module {module_id}")))
    }

    pub fn lesson(&self, module_id: &str, lesson_id: &str) -> Result<&Lesson, DomainError> {
        self.module(module_id)?
            .lesson(lesson_id)
            .ok_or_else(|| DomainError::NotFound(format!("lesson {module_id}:{lesson_id}")))
    }

    /// Score a submission and overwrite the stored attempt for this
    /// user/lesson. Out-of-range answer indices are recorded as incorrect
    /// with an "Invalid" label rather than rejected.
    pub fn submit_quiz(
        &self,
        module_id: &str,
        lesson_id: &str,
        answers: &[usize],
        user_id: &str,
    ) -> Result<QuizOutcome, DomainError> {
        let lesson = self.lesson(module_id, lesson_id)?;
        let quiz = &lesson.quiz;

        if answers.len() != quiz.len() {
            return Err(DomainError::InvalidInput(format!(
                "answer count mismatch: got {}, expected {}",
                answers.len(),
                quiz.len()
            )));
        }

        let mut results = Vec::with_capacity(quiz.len());
        let mut correct_count = 0;

        for (answer, question) in answers.iter().zip(quiz) {
            let is_correct = *answer == question.correct;
            if is_correct {
                correct_count += 1;
            }

            let your_answer = question
                .options
                .get(*answer)
                .cloned()
                .unwrap_or_else(|| "Invalid".to_string());

            results.push(AnswerReview {
                question: question.question.clone(),
                your_answer,
                correct_answer: question.options[question.correct].clone(),
                is_correct,
                explanation: question.explanation.clone(),
            });
        }

        // An empty quiz trivially scores 0 and therefore never passes.
        let score = if quiz.is_empty() {
            0.0
        } else {
            correct_count as f64 / quiz.len() as f64 * 100.0
        };
        let passed = score >= PASS_THRESHOLD;

        let attempt = QuizAttempt {
            module_id: module_id.to_string(),
            lesson_id: lesson_id.to_string(),
            score,
            passed,
        };

        let mut progress = self.progress.lock().unwrap();
        progress
            .entry(user_id.to_string())
            .or_default()
            .insert(format!("{module_id}:{lesson_id}"), attempt);

        Ok(QuizOutcome {
            score,
            correct: correct_count,
            total: quiz.len(),
            results,
            passed,
        })
    }

    pub fn user_progress(&self, user_id: &str) -> ProgressSummary {
        let progress = self.progress.lock().unwrap();
        let attempts = progress.get(user_id).cloned().unwrap_or_default();

        let total_lessons: usize = self.modules.iter().map(|m| m.lessons.len()).sum();
        let completed_lessons = attempts.len();

        let completion_percent = if total_lessons > 0 {
            completed_lessons as f64 / total_lessons as f64 * 100.0
        } else {
            0.0
        };
        let average_score = if attempts.is_empty() {
            0.0
        } else {
            attempts.values().map(|a| a.score).sum::<f64>() / attempts.len() as f64
        };

        ProgressSummary {
            user_id: user_id.to_string(),
            completed_lessons,
            total_lessons,
            completion_percent,
            average_score,
            lesson_details: attempts,
        }
    }
}
