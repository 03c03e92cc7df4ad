use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Identifier wrapper for pipeline candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Identifier wrapper for assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Identifier for a question inside its owning assessment. Questions have no
/// lifecycle of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub String);

/// Publication state of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Archived,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Archived => "archived",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            JobStatus::Active => JobStatus::Archived,
            JobStatus::Archived => JobStatus::Active,
        }
    }
}

/// A published job posting. `order` is the dense 0-based display position across
/// the whole collection; `applicants` is server-managed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: JobStatus,
    pub description: String,
    pub requirements: String,
    pub salary: String,
    pub applicants: u32,
    pub order: u32,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a job. Status, applicant count, order, and
/// timestamp are assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub salary: String,
}

/// Partial update for a job. `order` is owned by the reorder operation and
/// `applicants` stays server-managed, so neither appears here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPatch {
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<JobStatus>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary: Option<String>,
}

impl JobPatch {
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Fixed hiring pipeline columns. Any stage is reachable from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Applied,
    Screening,
    Interview,
    Offer,
    Rejected,
}

impl Stage {
    /// Column order on the kanban board.
    pub const ALL: [Stage; 5] = [
        Stage::Applied,
        Stage::Screening,
        Stage::Interview,
        Stage::Offer,
        Stage::Rejected,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Stage::Applied => "applied",
            Stage::Screening => "screening",
            Stage::Interview => "interview",
            Stage::Offer => "offer",
            Stage::Rejected => "rejected",
        }
    }
}

/// A candidate moving through the pipeline. `applied_date` is set once at
/// creation and immutable thereafter (the patch type has no such field).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub stage: Stage,
    pub experience: u32,
    pub rating: u8,
    pub resume_url: String,
    pub notes: String,
    pub applied_date: DateTime<Utc>,
}

/// Fields supplied when adding a candidate. New candidates always enter the
/// pipeline at `applied`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDraft {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub position: String,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub notes: String,
}

/// Partial update for a candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub stage: Option<Stage>,
    pub experience: Option<u32>,
    pub rating: Option<u8>,
    pub resume_url: Option<String>,
    pub notes: Option<String>,
}

impl CandidatePatch {
    pub fn stage(stage: Stage) -> Self {
        Self {
            stage: Some(stage),
            ..Self::default()
        }
    }
}

/// Question formats supported by the assessment builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    ShortAnswer,
    Coding,
    Essay,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple-choice",
            QuestionKind::ShortAnswer => "short-answer",
            QuestionKind::Coding => "coding",
            QuestionKind::Essay => "essay",
        }
    }
}

/// A question owned exclusively by its assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    pub points: u32,
}

/// A candidate assessment with its ordered question list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: AssessmentId,
    pub title: String,
    pub description: String,
    pub duration: u32,
    pub passing_score: u32,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
}

/// Validated builder output handed to the store for creation or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDraft {
    pub title: String,
    pub description: String,
    pub duration: u32,
    pub passing_score: u32,
    pub questions: Vec<Question>,
}

/// Partial update for an assessment. Replacing `questions` replaces the whole
/// ordered list; questions are never patched individually at this layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<u32>,
    pub passing_score: Option<u32>,
    pub questions: Option<Vec<Question>>,
}

impl From<AssessmentDraft> for AssessmentPatch {
    fn from(draft: AssessmentDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            duration: Some(draft.duration),
            passing_score: Some(draft.passing_score),
            questions: Some(draft.questions),
        }
    }
}
