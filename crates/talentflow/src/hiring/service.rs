use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::domain::{
    Assessment, AssessmentDraft, AssessmentId, AssessmentPatch, Candidate, CandidateDraft,
    CandidateId, CandidatePatch, Job, JobDraft, JobId, JobPatch,
};
use super::snapshot::SnapshotStore;
use super::store::{HiringStore, StoreError};

/// Round-trip latency injected before every call. Tests and the demo run with
/// [`TalentService::with_latency`] at zero.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// Async facade over the hiring store. Every method suspends for the configured
/// artificial latency first, so callers exercise the same suspension points a
/// real network client would.
pub struct TalentService<S> {
    store: Arc<HiringStore<S>>,
    latency: Duration,
}

impl<S: SnapshotStore> TalentService<S> {
    pub fn new(store: Arc<HiringStore<S>>) -> Self {
        Self::with_latency(store, DEFAULT_LATENCY)
    }

    pub fn with_latency(store: Arc<HiringStore<S>>, latency: Duration) -> Self {
        Self { store, latency }
    }

    pub fn store(&self) -> &Arc<HiringStore<S>> {
        &self.store
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>, StoreError> {
        self.round_trip().await;
        Ok(self.store.jobs())
    }

    pub async fn create_job(&self, draft: JobDraft) -> Result<Job, StoreError> {
        self.round_trip().await;
        let job = self.store.create_job(draft)?;
        info!(id = %job.id.0, "job posting created");
        Ok(job)
    }

    pub async fn update_job(&self, id: &JobId, patch: JobPatch) -> Result<Job, StoreError> {
        self.round_trip().await;
        self.store.update_job(id, patch)
    }

    pub async fn delete_job(&self, id: &JobId) -> Result<(), StoreError> {
        self.round_trip().await;
        self.store.delete_job(id)
    }

    pub async fn reorder_jobs(&self, ordered: &[JobId]) -> Result<Vec<Job>, StoreError> {
        self.round_trip().await;
        self.store.reorder_jobs(ordered)
    }

    pub async fn list_candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        self.round_trip().await;
        Ok(self.store.candidates())
    }

    pub async fn create_candidate(&self, draft: CandidateDraft) -> Result<Candidate, StoreError> {
        self.round_trip().await;
        let candidate = self.store.create_candidate(draft)?;
        info!(id = %candidate.id.0, "candidate added to pipeline");
        Ok(candidate)
    }

    pub async fn update_candidate(
        &self,
        id: &CandidateId,
        patch: CandidatePatch,
    ) -> Result<Candidate, StoreError> {
        self.round_trip().await;
        self.store.update_candidate(id, patch)
    }

    pub async fn delete_candidate(&self, id: &CandidateId) -> Result<(), StoreError> {
        self.round_trip().await;
        self.store.delete_candidate(id)
    }

    pub async fn list_assessments(&self) -> Result<Vec<Assessment>, StoreError> {
        self.round_trip().await;
        Ok(self.store.assessments())
    }

    pub async fn create_assessment(
        &self,
        draft: AssessmentDraft,
    ) -> Result<Assessment, StoreError> {
        self.round_trip().await;
        let assessment = self.store.create_assessment(draft)?;
        info!(id = %assessment.id.0, "assessment created");
        Ok(assessment)
    }

    pub async fn update_assessment(
        &self,
        id: &AssessmentId,
        patch: AssessmentPatch,
    ) -> Result<Assessment, StoreError> {
        self.round_trip().await;
        self.store.update_assessment(id, patch)
    }

    pub async fn delete_assessment(&self, id: &AssessmentId) -> Result<(), StoreError> {
        self.round_trip().await;
        self.store.delete_assessment(id)
    }
}
