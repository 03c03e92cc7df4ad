use std::ops::RangeInclusive;

use super::domain::{Assessment, AssessmentDraft, Question, QuestionId, QuestionKind};
use crate::hiring::store::id_sequence;

pub const DURATION_MINUTES: RangeInclusive<u32> = 5..=300;
pub const PASSING_SCORE: RangeInclusive<u32> = 0..=100;
pub const QUESTION_POINTS: RangeInclusive<u32> = 1..=100;

/// Validation failures reported before any call leaves the builder.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("assessment title is required")]
    TitleRequired,
    #[error("assessment description is required")]
    DescriptionRequired,
    #[error("duration must be between 5 and 300 minutes, got {minutes}")]
    DurationOutOfRange { minutes: u32 },
    #[error("passing score must be between 0 and 100, got {score}")]
    PassingScoreOutOfRange { score: u32 },
    #[error("at least one question is required")]
    NoQuestions,
    #[error("question {id} must be worth between 1 and 100 points, got {points}")]
    QuestionPointsOutOfRange { id: String, points: u32 },
}

/// Form-state composition for an assessment: a question list with
/// add/update/remove plus derived aggregates. Nothing here touches the store;
/// [`AssessmentBuilder::finish`] gates submission.
#[derive(Debug, Clone)]
pub struct AssessmentBuilder {
    title: String,
    description: String,
    duration: u32,
    passing_score: u32,
    questions: Vec<Question>,
    question_seq: u64,
}

impl Default for AssessmentBuilder {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            duration: 60,
            passing_score: 70,
            questions: Vec::new(),
            question_seq: 0,
        }
    }
}

impl AssessmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the form from an existing assessment for editing. The question
    /// sequence resumes past the highest existing id so added questions never
    /// collide.
    pub fn from_assessment(assessment: &Assessment) -> Self {
        let question_seq = assessment
            .questions
            .iter()
            .map(|question| id_sequence(&question.id.0))
            .max()
            .unwrap_or(0);
        Self {
            title: assessment.title.clone(),
            description: assessment.description.clone(),
            duration: assessment.duration,
            passing_score: assessment.passing_score,
            questions: assessment.questions.clone(),
            question_seq,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }

    pub fn passing_score(mut self, score: u32) -> Self {
        self.passing_score = score;
        self
    }

    /// Appends a question with a fresh locally-generated id.
    pub fn add_question(
        &mut self,
        kind: QuestionKind,
        question: impl Into<String>,
        points: u32,
    ) -> QuestionId {
        self.question_seq += 1;
        let id = QuestionId(format!("q-{}", self.question_seq));
        self.questions.push(Question {
            id: id.clone(),
            kind,
            question: question.into(),
            points,
        });
        id
    }

    /// Merges the supplied fields into the matching question. Returns false if
    /// the id is unknown.
    pub fn update_question(
        &mut self,
        id: &QuestionId,
        kind: Option<QuestionKind>,
        question: Option<String>,
        points: Option<u32>,
    ) -> bool {
        let Some(entry) = self.questions.iter_mut().find(|entry| &entry.id == id) else {
            return false;
        };
        if let Some(kind) = kind {
            entry.kind = kind;
        }
        if let Some(question) = question {
            entry.question = question;
        }
        if let Some(points) = points {
            entry.points = points;
        }
        true
    }

    /// Removes the matching question. Returns false if the id is unknown.
    pub fn remove_question(&mut self, id: &QuestionId) -> bool {
        let before = self.questions.len();
        self.questions.retain(|question| &question.id != id);
        self.questions.len() != before
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(|question| question.points).sum()
    }

    /// Validates the form and produces the draft to submit. No API call should
    /// be issued when this fails.
    pub fn finish(&self) -> Result<AssessmentDraft, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::DescriptionRequired);
        }
        if !DURATION_MINUTES.contains(&self.duration) {
            return Err(ValidationError::DurationOutOfRange {
                minutes: self.duration,
            });
        }
        if !PASSING_SCORE.contains(&self.passing_score) {
            return Err(ValidationError::PassingScoreOutOfRange {
                score: self.passing_score,
            });
        }
        if self.questions.is_empty() {
            return Err(ValidationError::NoQuestions);
        }
        for question in &self.questions {
            if !QUESTION_POINTS.contains(&question.points) {
                return Err(ValidationError::QuestionPointsOutOfRange {
                    id: question.id.0.clone(),
                    points: question.points,
                });
            }
        }

        Ok(AssessmentDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            duration: self.duration,
            passing_score: self.passing_score,
            questions: self.questions.clone(),
        })
    }
}
