use std::sync::Arc;

use tracing::warn;

use super::reorder::array_move;
use super::{matches_query, ConfirmGate, ControllerPhase, Notification, Notifier};
use crate::hiring::domain::{Job, JobDraft, JobId, JobPatch, JobStatus};
use crate::hiring::service::TalentService;
use crate::hiring::snapshot::SnapshotStore;
use crate::hiring::store::StoreError;

/// Status facet over the job list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Archived,
}

impl StatusFilter {
    fn matches(self, status: JobStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == JobStatus::Active,
            StatusFilter::Archived => status == JobStatus::Archived,
        }
    }
}

/// Page controller for the job postings list, including drag reordering.
pub struct JobsController<S, N, C> {
    service: Arc<TalentService<S>>,
    notifier: Arc<N>,
    confirm: Arc<C>,
    jobs: Vec<Job>,
    phase: ControllerPhase,
    search_query: String,
    status_filter: StatusFilter,
}

impl<S, N, C> JobsController<S, N, C>
where
    S: SnapshotStore,
    N: Notifier,
    C: ConfirmGate,
{
    pub fn new(service: Arc<TalentService<S>>, notifier: Arc<N>, confirm: Arc<C>) -> Self {
        Self {
            service,
            notifier,
            confirm,
            jobs: Vec::new(),
            phase: ControllerPhase::Loading,
            search_query: String::new(),
            status_filter: StatusFilter::default(),
        }
    }

    pub fn phase(&self) -> ControllerPhase {
        self.phase
    }

    /// Full local collection in display order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Jobs passing the status facet and search query, in display order.
    pub fn visible(&self) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|job| self.status_filter.matches(job.status))
            .filter(|job| {
                matches_query(
                    &self.search_query,
                    &[&job.title, &job.department, &job.location],
                )
            })
            .collect()
    }

    /// Initial fetch. On failure the list stays empty and an error is surfaced;
    /// there is no retry.
    pub async fn load(&mut self) {
        self.sync_from_remote().await;
        self.phase = ControllerPhase::Ready;
    }

    async fn sync_from_remote(&mut self) {
        match self.service.list_jobs().await {
            Ok(jobs) => self.jobs = jobs,
            Err(err) => {
                warn!(error = %err, "job fetch failed");
                self.notifier.notify(Notification::error("Failed to load jobs"));
                self.jobs.clear();
            }
        }
    }

    /// Create through the service, then append the returned posting. Local
    /// state is untouched on failure.
    pub async fn create(&mut self, draft: JobDraft) {
        match self.service.create_job(draft).await {
            Ok(job) => {
                self.jobs.push(job);
                self.notifier
                    .notify(Notification::success("Job created successfully"));
            }
            Err(err) => {
                warn!(error = %err, "job create failed");
                self.notifier.notify(Notification::error("Failed to save job"));
            }
        }
    }

    /// Patch through the service, then replace the matching posting.
    pub async fn update(&mut self, id: &JobId, patch: JobPatch) {
        match self.service.update_job(id, patch).await {
            Ok(updated) => {
                if let Some(job) = self.jobs.iter_mut().find(|job| &job.id == id) {
                    *job = updated;
                }
                self.notifier
                    .notify(Notification::success("Job updated successfully"));
            }
            Err(err) => {
                warn!(error = %err, "job update failed");
                self.notifier.notify(Notification::error("Failed to save job"));
            }
        }
    }

    /// Flip between active and archived.
    pub async fn toggle_archive(&mut self, id: &JobId) {
        let Some(job) = self.jobs.iter().find(|job| &job.id == id) else {
            return;
        };
        let next = job.status.toggled();
        match self.service.update_job(id, JobPatch::status(next)).await {
            Ok(updated) => {
                if let Some(job) = self.jobs.iter_mut().find(|job| &job.id == id) {
                    *job = updated;
                }
                let message = match next {
                    JobStatus::Archived => "Job archived",
                    JobStatus::Active => "Job unarchived",
                };
                self.notifier.notify(Notification::success(message));
            }
            Err(err) => {
                warn!(error = %err, "job archive toggle failed");
                self.notifier
                    .notify(Notification::error("Failed to update job"));
            }
        }
    }

    /// Delete behind the confirmation gate. A not-found result means the
    /// posting was already removed; the local copy is dropped without
    /// surfacing an error.
    pub async fn delete(&mut self, id: &JobId) {
        if !self.confirm.confirm("Delete this job posting?") {
            return;
        }
        match self.service.delete_job(id).await {
            Ok(()) => {
                self.jobs.retain(|job| &job.id != id);
                self.notifier.notify(Notification::success("Job removed"));
            }
            Err(StoreError::NotFound { .. }) => {
                self.jobs.retain(|job| &job.id != id);
            }
            Err(err) => {
                warn!(error = %err, "job delete failed");
                self.notifier
                    .notify(Notification::error("Failed to remove job"));
            }
        }
    }

    /// Gesture completion for the sortable list: move `active` to the slot of
    /// `over`, apply locally at once, then commit the full new sequence. A
    /// failed commit rolls back by refetching the collection.
    pub async fn move_job(&mut self, active: &JobId, over: &JobId) {
        let Some(old_index) = self.jobs.iter().position(|job| &job.id == active) else {
            return;
        };
        let Some(new_index) = self.jobs.iter().position(|job| &job.id == over) else {
            return;
        };
        if old_index == new_index {
            return;
        }

        array_move(&mut self.jobs, old_index, new_index);
        let ordered: Vec<JobId> = self.jobs.iter().map(|job| job.id.clone()).collect();

        match self.service.reorder_jobs(&ordered).await {
            Ok(jobs) => {
                self.jobs = jobs;
                self.notifier.notify(Notification::success("Jobs reordered"));
            }
            Err(err) => {
                warn!(error = %err, "job reorder failed");
                self.notifier
                    .notify(Notification::error("Failed to reorder jobs"));
                self.sync_from_remote().await;
            }
        }
    }
}
