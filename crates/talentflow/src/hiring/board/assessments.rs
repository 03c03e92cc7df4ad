use std::sync::Arc;

use tracing::warn;

use super::{matches_query, ConfirmGate, ControllerPhase, Notification, Notifier};
use crate::hiring::builder::{AssessmentBuilder, ValidationError};
use crate::hiring::domain::{Assessment, AssessmentId, AssessmentPatch};
use crate::hiring::service::TalentService;
use crate::hiring::snapshot::SnapshotStore;
use crate::hiring::store::StoreError;

/// Page controller for the assessment library. Creation and edits go through
/// [`AssessmentBuilder`]; invalid forms never reach the service.
pub struct AssessmentsController<S, N, C> {
    service: Arc<TalentService<S>>,
    notifier: Arc<N>,
    confirm: Arc<C>,
    assessments: Vec<Assessment>,
    phase: ControllerPhase,
    search_query: String,
}

impl<S, N, C> AssessmentsController<S, N, C>
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
            assessments: Vec::new(),
            phase: ControllerPhase::Loading,
            search_query: String::new(),
        }
    }

    pub fn phase(&self) -> ControllerPhase {
        self.phase
    }

    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn visible(&self) -> Vec<&Assessment> {
        self.assessments
            .iter()
            .filter(|assessment| {
                matches_query(
                    &self.search_query,
                    &[&assessment.title, &assessment.description],
                )
            })
            .collect()
    }

    pub async fn load(&mut self) {
        match self.service.list_assessments().await {
            Ok(assessments) => self.assessments = assessments,
            Err(err) => {
                warn!(error = %err, "assessment fetch failed");
                self.notifier
                    .notify(Notification::error("Failed to load assessments"));
                self.assessments.clear();
            }
        }
        self.phase = ControllerPhase::Ready;
    }

    /// Submit a new assessment. Validation failures block the submission
    /// before any call is issued.
    pub async fn submit_new(&mut self, builder: &AssessmentBuilder) -> Result<(), ValidationError> {
        let draft = match builder.finish() {
            Ok(draft) => draft,
            Err(err) => {
                self.notifier.notify(Notification::error(err.to_string()));
                return Err(err);
            }
        };

        match self.service.create_assessment(draft).await {
            Ok(assessment) => {
                self.assessments.push(assessment);
                self.notifier
                    .notify(Notification::success("Assessment created successfully"));
            }
            Err(err) => {
                warn!(error = %err, "assessment create failed");
                self.notifier
                    .notify(Notification::error("Failed to save assessment"));
            }
        }
        Ok(())
    }

    /// Submit edits to an existing assessment through the same validation gate.
    pub async fn submit_update(
        &mut self,
        id: &AssessmentId,
        builder: &AssessmentBuilder,
    ) -> Result<(), ValidationError> {
        let draft = match builder.finish() {
            Ok(draft) => draft,
            Err(err) => {
                self.notifier.notify(Notification::error(err.to_string()));
                return Err(err);
            }
        };

        match self
            .service
            .update_assessment(id, AssessmentPatch::from(draft))
            .await
        {
            Ok(updated) => {
                if let Some(assessment) = self.assessments.iter_mut().find(|a| &a.id == id) {
                    *assessment = updated;
                }
                self.notifier
                    .notify(Notification::success("Assessment updated successfully"));
            }
            Err(err) => {
                warn!(error = %err, "assessment update failed");
                self.notifier
                    .notify(Notification::error("Failed to save assessment"));
            }
        }
        Ok(())
    }

    pub async fn delete(&mut self, id: &AssessmentId) {
        if !self.confirm.confirm("Delete this assessment?") {
            return;
        }
        match self.service.delete_assessment(id).await {
            Ok(()) => {
                self.assessments.retain(|assessment| &assessment.id != id);
                self.notifier
                    .notify(Notification::success("Assessment removed"));
            }
            Err(StoreError::NotFound { .. }) => {
                self.assessments.retain(|assessment| &assessment.id != id);
            }
            Err(err) => {
                warn!(error = %err, "assessment delete failed");
                self.notifier
                    .notify(Notification::error("Failed to remove assessment"));
            }
        }
    }
}
