//! Hiring pipeline engine: job postings, candidate kanban, and assessment
//! building over a snapshot-persisted store.
//!
//! The store owns the three entity collections and persists a full snapshot
//! after every successful mutation; the service facade adds the simulated
//! round-trip latency; the router exposes the REST-shaped surface; the board
//! module holds the per-page view-state controllers and drag semantics.

pub mod board;
pub mod builder;
pub mod domain;
pub mod router;
pub mod seed;
pub mod service;
pub mod snapshot;
pub mod store;

pub use board::{
    AssessmentsController, AutoConfirm, CandidatesController, ConfirmGate, ControllerPhase,
    JobsController, MemoryNotifier, Notification, Notifier, Severity, StatusFilter,
};
pub use builder::{AssessmentBuilder, ValidationError};
pub use domain::{
    Assessment, AssessmentDraft, AssessmentId, AssessmentPatch, Candidate, CandidateDraft,
    CandidateId, CandidatePatch, Job, JobDraft, JobId, JobPatch, JobStatus, Question, QuestionId,
    QuestionKind, Stage,
};
pub use router::hiring_router;
pub use service::{TalentService, DEFAULT_LATENCY};
pub use snapshot::{JsonFileStore, MemoryStore, SnapshotError, SnapshotStore, StateSnapshot};
pub use store::{HiringStore, StoreError};
