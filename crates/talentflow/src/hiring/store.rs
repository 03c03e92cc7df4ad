use std::collections::HashSet;
use std::sync::Mutex;

use chrono::Utc;
use tracing::debug;

use super::domain::{
    Assessment, AssessmentDraft, AssessmentId, AssessmentPatch, Candidate, CandidateDraft,
    CandidateId, CandidatePatch, Job, JobDraft, JobId, JobPatch, JobStatus, Stage,
};
use super::snapshot::{SnapshotError, SnapshotStore, StateSnapshot};

/// Error enumeration for store mutations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no {kind} with id {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("reorder payload does not cover the job collection: expected {expected} ids, got {supplied}")]
    ReorderMismatch { expected: usize, supplied: usize },
    #[error("reorder payload references an unknown or duplicate job id: {id}")]
    ReorderUnknownId { id: String },
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

impl StoreError {
    fn job_not_found(id: &JobId) -> Self {
        StoreError::NotFound {
            kind: "job",
            id: id.0.clone(),
        }
    }

    fn candidate_not_found(id: &CandidateId) -> Self {
        StoreError::NotFound {
            kind: "candidate",
            id: id.0.clone(),
        }
    }

    fn assessment_not_found(id: &AssessmentId) -> Self {
        StoreError::NotFound {
            kind: "assessment",
            id: id.0.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct StoreState {
    snapshot: StateSnapshot,
    job_seq: u64,
    candidate_seq: u64,
    assessment_seq: u64,
}

/// The three entity collections behind one mutation interface, persisted as a
/// whole snapshot after every successful mutation.
///
/// Mutations stage a copy of the state, persist the staged snapshot, and commit
/// to memory only once the save succeeded, so the in-memory collections never
/// run ahead of durable state. Reads never persist.
pub struct HiringStore<S> {
    state: Mutex<StoreState>,
    snapshots: S,
}

/// Extracts the numeric suffix of ids like `job-000042`.
pub(crate) fn id_sequence(raw: &str) -> u64 {
    raw.rsplit('-')
        .next()
        .and_then(|suffix| suffix.parse().ok())
        .unwrap_or(0)
}

fn max_sequence<'a>(ids: impl Iterator<Item = &'a str>) -> u64 {
    ids.map(id_sequence).max().unwrap_or(0)
}

impl<S: SnapshotStore> HiringStore<S> {
    /// Opens the store over a snapshot backend, hydrating collections and id
    /// sequences from the last saved snapshot when one exists.
    pub fn open(snapshots: S) -> Result<Self, StoreError> {
        let snapshot = snapshots.load()?.unwrap_or_default();
        let state = StoreState {
            job_seq: max_sequence(snapshot.jobs.iter().map(|job| job.id.0.as_str())),
            candidate_seq: max_sequence(snapshot.candidates.iter().map(|c| c.id.0.as_str())),
            assessment_seq: max_sequence(snapshot.assessments.iter().map(|a| a.id.0.as_str())),
            snapshot,
        };
        Ok(Self {
            state: Mutex::new(state),
            snapshots,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.state
            .lock()
            .expect("store mutex poisoned")
            .snapshot
            .is_empty()
    }

    /// Replaces all collections with the supplied snapshot and persists it.
    /// Used to seed a fresh store with demo data.
    pub fn import(&self, snapshot: StateSnapshot) -> Result<(), StoreError> {
        self.commit(|state| {
            state.job_seq = max_sequence(snapshot.jobs.iter().map(|job| job.id.0.as_str()));
            state.candidate_seq =
                max_sequence(snapshot.candidates.iter().map(|c| c.id.0.as_str()));
            state.assessment_seq =
                max_sequence(snapshot.assessments.iter().map(|a| a.id.0.as_str()));
            state.snapshot = snapshot.clone();
            Ok(())
        })
    }

    /// Stages a mutation, persists the staged snapshot, then commits. A failed
    /// save leaves the in-memory state untouched.
    fn commit<T>(
        &self,
        mutate: impl FnOnce(&mut StoreState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.state.lock().expect("store mutex poisoned");
        let mut staged = guard.clone();
        let value = mutate(&mut staged)?;
        self.snapshots.save(&staged.snapshot)?;
        *guard = staged;
        Ok(value)
    }

    // --- jobs ---

    /// All jobs irrespective of status, sorted by display order.
    pub fn jobs(&self) -> Vec<Job> {
        let guard = self.state.lock().expect("store mutex poisoned");
        let mut jobs = guard.snapshot.jobs.clone();
        jobs.sort_by_key(|job| job.order);
        jobs
    }

    pub fn create_job(&self, draft: JobDraft) -> Result<Job, StoreError> {
        self.commit(|state| {
            state.job_seq += 1;
            let job = Job {
                id: JobId(format!("job-{:06}", state.job_seq)),
                title: draft.title,
                department: draft.department,
                location: draft.location,
                kind: draft.kind,
                status: JobStatus::Active,
                description: draft.description,
                requirements: draft.requirements,
                salary: draft.salary,
                applicants: 0,
                order: state.snapshot.jobs.len() as u32,
                created_at: Utc::now(),
            };
            state.snapshot.jobs.push(job.clone());
            debug!(id = %job.id.0, title = %job.title, "job created");
            Ok(job)
        })
    }

    pub fn update_job(&self, id: &JobId, patch: JobPatch) -> Result<Job, StoreError> {
        self.commit(|state| {
            let job = state
                .snapshot
                .jobs
                .iter_mut()
                .find(|job| &job.id == id)
                .ok_or_else(|| StoreError::job_not_found(id))?;

            if let Some(title) = patch.title {
                job.title = title;
            }
            if let Some(department) = patch.department {
                job.department = department;
            }
            if let Some(location) = patch.location {
                job.location = location;
            }
            if let Some(kind) = patch.kind {
                job.kind = kind;
            }
            if let Some(status) = patch.status {
                job.status = status;
            }
            if let Some(description) = patch.description {
                job.description = description;
            }
            if let Some(requirements) = patch.requirements {
                job.requirements = requirements;
            }
            if let Some(salary) = patch.salary {
                job.salary = salary;
            }
            Ok(job.clone())
        })
    }

    pub fn delete_job(&self, id: &JobId) -> Result<(), StoreError> {
        self.commit(|state| {
            let before = state.snapshot.jobs.len();
            state.snapshot.jobs.retain(|job| &job.id != id);
            if state.snapshot.jobs.len() == before {
                return Err(StoreError::job_not_found(id));
            }
            debug!(id = %id.0, "job deleted");
            Ok(())
        })
    }

    /// Re-assigns every job's `order` to its 0-based position in the supplied
    /// sequence. The sequence must be a permutation of the current job ids;
    /// anything else is rejected and mutates nothing.
    pub fn reorder_jobs(&self, ordered: &[JobId]) -> Result<Vec<Job>, StoreError> {
        self.commit(|state| {
            if ordered.len() != state.snapshot.jobs.len() {
                return Err(StoreError::ReorderMismatch {
                    expected: state.snapshot.jobs.len(),
                    supplied: ordered.len(),
                });
            }

            let mut seen = HashSet::new();
            for id in ordered {
                let known = state.snapshot.jobs.iter().any(|job| &job.id == id);
                if !known || !seen.insert(id) {
                    return Err(StoreError::ReorderUnknownId { id: id.0.clone() });
                }
            }

            for (position, id) in ordered.iter().enumerate() {
                let job = state
                    .snapshot
                    .jobs
                    .iter_mut()
                    .find(|job| &job.id == id)
                    .expect("id validated against collection");
                job.order = position as u32;
            }

            let mut jobs = state.snapshot.jobs.clone();
            jobs.sort_by_key(|job| job.order);
            debug!(count = jobs.len(), "jobs reordered");
            Ok(jobs)
        })
    }

    // --- candidates ---

    pub fn candidates(&self) -> Vec<Candidate> {
        self.state
            .lock()
            .expect("store mutex poisoned")
            .snapshot
            .candidates
            .clone()
    }

    pub fn create_candidate(&self, draft: CandidateDraft) -> Result<Candidate, StoreError> {
        self.commit(|state| {
            state.candidate_seq += 1;
            let candidate = Candidate {
                id: CandidateId(format!("cand-{:06}", state.candidate_seq)),
                name: draft.name,
                email: draft.email,
                phone: draft.phone,
                position: draft.position,
                stage: Stage::Applied,
                experience: draft.experience,
                rating: draft.rating,
                resume_url: draft.resume_url,
                notes: draft.notes,
                applied_date: Utc::now(),
            };
            state.snapshot.candidates.push(candidate.clone());
            debug!(id = %candidate.id.0, name = %candidate.name, "candidate created");
            Ok(candidate)
        })
    }

    pub fn update_candidate(
        &self,
        id: &CandidateId,
        patch: CandidatePatch,
    ) -> Result<Candidate, StoreError> {
        self.commit(|state| {
            let candidate = state
                .snapshot
                .candidates
                .iter_mut()
                .find(|candidate| &candidate.id == id)
                .ok_or_else(|| StoreError::candidate_not_found(id))?;

            if let Some(name) = patch.name {
                candidate.name = name;
            }
            if let Some(email) = patch.email {
                candidate.email = email;
            }
            if let Some(phone) = patch.phone {
                candidate.phone = phone;
            }
            if let Some(position) = patch.position {
                candidate.position = position;
            }
            if let Some(stage) = patch.stage {
                candidate.stage = stage;
            }
            if let Some(experience) = patch.experience {
                candidate.experience = experience;
            }
            if let Some(rating) = patch.rating {
                candidate.rating = rating;
            }
            if let Some(resume_url) = patch.resume_url {
                candidate.resume_url = resume_url;
            }
            if let Some(notes) = patch.notes {
                candidate.notes = notes;
            }
            Ok(candidate.clone())
        })
    }

    pub fn delete_candidate(&self, id: &CandidateId) -> Result<(), StoreError> {
        self.commit(|state| {
            let before = state.snapshot.candidates.len();
            state.snapshot.candidates.retain(|candidate| &candidate.id != id);
            if state.snapshot.candidates.len() == before {
                return Err(StoreError::candidate_not_found(id));
            }
            Ok(())
        })
    }

    // --- assessments ---

    pub fn assessments(&self) -> Vec<Assessment> {
        self.state
            .lock()
            .expect("store mutex poisoned")
            .snapshot
            .assessments
            .clone()
    }

    pub fn create_assessment(&self, draft: AssessmentDraft) -> Result<Assessment, StoreError> {
        self.commit(|state| {
            state.assessment_seq += 1;
            let assessment = Assessment {
                id: AssessmentId(format!("asmt-{:06}", state.assessment_seq)),
                title: draft.title,
                description: draft.description,
                duration: draft.duration,
                passing_score: draft.passing_score,
                questions: draft.questions,
                created_at: Utc::now(),
            };
            state.snapshot.assessments.push(assessment.clone());
            debug!(id = %assessment.id.0, title = %assessment.title, "assessment created");
            Ok(assessment)
        })
    }

    pub fn update_assessment(
        &self,
        id: &AssessmentId,
        patch: AssessmentPatch,
    ) -> Result<Assessment, StoreError> {
        self.commit(|state| {
            let assessment = state
                .snapshot
                .assessments
                .iter_mut()
                .find(|assessment| &assessment.id == id)
                .ok_or_else(|| StoreError::assessment_not_found(id))?;

            if let Some(title) = patch.title {
                assessment.title = title;
            }
            if let Some(description) = patch.description {
                assessment.description = description;
            }
            if let Some(duration) = patch.duration {
                assessment.duration = duration;
            }
            if let Some(passing_score) = patch.passing_score {
                assessment.passing_score = passing_score;
            }
            if let Some(questions) = patch.questions {
                assessment.questions = questions;
            }
            Ok(assessment.clone())
        })
    }

    pub fn delete_assessment(&self, id: &AssessmentId) -> Result<(), StoreError> {
        self.commit(|state| {
            let before = state.snapshot.assessments.len();
            state.snapshot.assessments.retain(|assessment| &assessment.id != id);
            if state.snapshot.assessments.len() == before {
                return Err(StoreError::assessment_not_found(id));
            }
            Ok(())
        })
    }
}
