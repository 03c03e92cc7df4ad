use std::sync::Arc;

use tracing::warn;

use super::{matches_query, ConfirmGate, ControllerPhase, Notification, Notifier};
use crate::hiring::domain::{Candidate, CandidateDraft, CandidateId, CandidatePatch, Stage};
use crate::hiring::service::TalentService;
use crate::hiring::snapshot::SnapshotStore;
use crate::hiring::store::StoreError;

/// Page controller for the candidate kanban board.
pub struct CandidatesController<S, N, C> {
    service: Arc<TalentService<S>>,
    notifier: Arc<N>,
    confirm: Arc<C>,
    candidates: Vec<Candidate>,
    phase: ControllerPhase,
    search_query: String,
}

impl<S, N, C> CandidatesController<S, N, C>
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
            candidates: Vec::new(),
            phase: ControllerPhase::Loading,
            search_query: String::new(),
        }
    }

    pub fn phase(&self) -> ControllerPhase {
        self.phase
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Candidates passing the search query.
    pub fn visible(&self) -> Vec<&Candidate> {
        self.candidates
            .iter()
            .filter(|candidate| {
                matches_query(
                    &self.search_query,
                    &[&candidate.name, &candidate.position, &candidate.email],
                )
            })
            .collect()
    }

    /// Visible candidates in one kanban column.
    pub fn by_stage(&self, stage: Stage) -> Vec<&Candidate> {
        self.visible()
            .into_iter()
            .filter(|candidate| candidate.stage == stage)
            .collect()
    }

    pub async fn load(&mut self) {
        self.sync_from_remote().await;
        self.phase = ControllerPhase::Ready;
    }

    async fn sync_from_remote(&mut self) {
        match self.service.list_candidates().await {
            Ok(candidates) => self.candidates = candidates,
            Err(err) => {
                warn!(error = %err, "candidate fetch failed");
                self.notifier
                    .notify(Notification::error("Failed to load candidates"));
                self.candidates.clear();
            }
        }
    }

    pub async fn create(&mut self, draft: CandidateDraft) {
        match self.service.create_candidate(draft).await {
            Ok(candidate) => {
                self.candidates.push(candidate);
                self.notifier
                    .notify(Notification::success("Candidate added successfully"));
            }
            Err(err) => {
                warn!(error = %err, "candidate create failed");
                self.notifier
                    .notify(Notification::error("Failed to save candidate"));
            }
        }
    }

    pub async fn update(&mut self, id: &CandidateId, patch: CandidatePatch) {
        match self.service.update_candidate(id, patch).await {
            Ok(updated) => {
                if let Some(candidate) = self.candidates.iter_mut().find(|c| &c.id == id) {
                    *candidate = updated;
                }
                self.notifier
                    .notify(Notification::success("Candidate updated successfully"));
            }
            Err(err) => {
                warn!(error = %err, "candidate update failed");
                self.notifier
                    .notify(Notification::error("Failed to save candidate"));
            }
        }
    }

    pub async fn delete(&mut self, id: &CandidateId) {
        if !self.confirm.confirm("Remove this candidate?") {
            return;
        }
        match self.service.delete_candidate(id).await {
            Ok(()) => {
                self.candidates.retain(|candidate| &candidate.id != id);
                self.notifier
                    .notify(Notification::success("Candidate removed"));
            }
            Err(StoreError::NotFound { .. }) => {
                self.candidates.retain(|candidate| &candidate.id != id);
            }
            Err(err) => {
                warn!(error = %err, "candidate delete failed");
                self.notifier
                    .notify(Notification::error("Failed to remove candidate"));
            }
        }
    }

    /// Gesture completion for a card dropped on a kanban column. Dropping on
    /// the current column is a no-op and issues no call. Otherwise the card
    /// moves optimistically and a failed commit rolls back by refetch.
    pub async fn move_to_stage(&mut self, id: &CandidateId, stage: Stage) {
        let Some(index) = self.candidates.iter().position(|c| &c.id == id) else {
            return;
        };
        if self.candidates[index].stage == stage {
            return;
        }

        self.candidates[index].stage = stage;

        match self
            .service
            .update_candidate(id, CandidatePatch::stage(stage))
            .await
        {
            Ok(updated) => {
                self.candidates[index] = updated;
                self.notifier
                    .notify(Notification::success("Candidate moved successfully"));
            }
            Err(err) => {
                warn!(error = %err, "candidate stage move failed");
                self.notifier
                    .notify(Notification::error("Failed to move candidate"));
                self.sync_from_remote().await;
            }
        }
    }
}
