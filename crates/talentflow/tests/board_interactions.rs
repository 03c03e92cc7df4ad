//! Controller specifications: optimistic drag commits, rollback by refetch,
//! confirmation gating, and the validation gate in front of assessment
//! submission.

mod common {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use talentflow::hiring::{
        AutoConfirm, CandidateDraft, HiringStore, JobDraft, MemoryNotifier, MemoryStore,
        SnapshotError, SnapshotStore, StateSnapshot, TalentService,
    };

    /// Snapshot backend whose saves can be made to fail on demand, standing in
    /// for a network/storage outage mid-gesture.
    #[derive(Default, Clone)]
    pub(super) struct FlakySnapshots {
        inner: MemoryStore,
        fail_saves: Arc<AtomicBool>,
    }

    impl FlakySnapshots {
        pub(super) fn fail_next_saves(&self, fail: bool) {
            self.fail_saves.store(fail, Ordering::SeqCst);
        }
    }

    impl SnapshotStore for FlakySnapshots {
        fn load(&self) -> Result<Option<StateSnapshot>, SnapshotError> {
            self.inner.load()
        }

        fn save(&self, snapshot: &StateSnapshot) -> Result<(), SnapshotError> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(SnapshotError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "storage unavailable",
                )));
            }
            self.inner.save(snapshot)
        }
    }

    pub(super) fn job_draft(title: &str) -> JobDraft {
        JobDraft {
            title: title.to_string(),
            department: "Engineering".to_string(),
            location: "Remote".to_string(),
            kind: "Full-time".to_string(),
            ..JobDraft::default()
        }
    }

    pub(super) fn candidate_draft(name: &str) -> CandidateDraft {
        CandidateDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            position: "Backend Developer".to_string(),
            experience: 5,
            rating: 4,
            ..CandidateDraft::default()
        }
    }

    pub(super) struct Harness<S: SnapshotStore> {
        pub(super) store: Arc<HiringStore<S>>,
        pub(super) service: Arc<TalentService<S>>,
        pub(super) notifier: Arc<MemoryNotifier>,
        pub(super) confirm: Arc<AutoConfirm>,
    }

    pub(super) fn harness() -> Harness<MemoryStore> {
        harness_over(MemoryStore::default())
    }

    pub(super) fn flaky_harness() -> (Harness<FlakySnapshots>, FlakySnapshots) {
        let backend = FlakySnapshots::default();
        (harness_over(backend.clone()), backend)
    }

    fn harness_over<S: SnapshotStore>(backend: S) -> Harness<S> {
        let store = Arc::new(HiringStore::open(backend).expect("open store"));
        let service = Arc::new(TalentService::with_latency(store.clone(), Duration::ZERO));
        Harness {
            store,
            service,
            notifier: Arc::new(MemoryNotifier::default()),
            confirm: Arc::new(AutoConfirm),
        }
    }
}

mod job_board {
    use super::common::*;
    use talentflow::hiring::{ControllerPhase, JobId, JobsController, Severity, StatusFilter};

    #[tokio::test]
    async fn drag_to_front_updates_local_and_persisted_order() {
        let h = harness();
        for title in ["A", "B", "C"] {
            h.store.create_job(job_draft(title)).expect("create");
        }

        let mut board = JobsController::new(h.service, h.notifier.clone(), h.confirm);
        assert_eq!(board.phase(), ControllerPhase::Loading);
        board.load().await;
        assert_eq!(board.phase(), ControllerPhase::Ready);

        let c = board.jobs()[2].id.clone();
        let a = board.jobs()[0].id.clone();
        board.move_job(&c, &a).await;

        let titles: Vec<&str> = board.jobs().iter().map(|job| job.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
        let orders: Vec<u32> = board.jobs().iter().map(|job| job.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);

        // Durable state agrees with the board.
        let persisted: Vec<String> = h.store.jobs().into_iter().map(|job| job.title).collect();
        assert_eq!(persisted, vec!["C", "A", "B"]);
        assert!(h
            .notifier
            .events()
            .iter()
            .any(|n| n.severity == Severity::Success));
    }

    #[tokio::test]
    async fn failed_reorder_rolls_back_by_refetch() {
        let (h, backend) = flaky_harness();
        for title in ["A", "B", "C"] {
            h.store.create_job(job_draft(title)).expect("create");
        }

        let mut board = JobsController::new(h.service, h.notifier.clone(), h.confirm);
        board.load().await;

        backend.fail_next_saves(true);
        let c = board.jobs()[2].id.clone();
        let a = board.jobs()[0].id.clone();
        board.move_job(&c, &a).await;
        backend.fail_next_saves(false);

        // The optimistic move was rolled back to the pre-drag ordering.
        let titles: Vec<&str> = board.jobs().iter().map(|job| job.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(h.notifier.errors().len(), 1);

        // Durable state was never corrupted either.
        let persisted: Vec<String> = h.store.jobs().into_iter().map(|job| job.title).collect();
        assert_eq!(persisted, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn deleting_an_already_removed_job_surfaces_no_error() {
        let h = harness();
        let a = h.store.create_job(job_draft("A")).expect("create");
        h.store.create_job(job_draft("B")).expect("create");

        let mut board = JobsController::new(h.service, h.notifier.clone(), h.confirm);
        board.load().await;

        // Removed out from under the controller.
        h.store.delete_job(&a.id).expect("delete");

        board.delete(&a.id).await;
        assert!(h.notifier.errors().is_empty());
        assert_eq!(board.jobs().len(), 1);
        assert_eq!(h.store.jobs().len(), 1);
    }

    #[tokio::test]
    async fn delete_respects_the_confirmation_gate() {
        use std::sync::Arc;
        use talentflow::hiring::board::DeclineAll;

        let h = harness();
        let a = h.store.create_job(job_draft("A")).expect("create");

        let mut board = JobsController::new(h.service, h.notifier.clone(), Arc::new(DeclineAll));
        board.load().await;
        board.delete(&a.id).await;

        assert_eq!(board.jobs().len(), 1);
        assert_eq!(h.store.jobs().len(), 1);
        assert!(h.notifier.events().is_empty());
    }

    #[tokio::test]
    async fn search_and_status_filters_compose() {
        let h = harness();
        h.store.create_job(job_draft("Frontend Engineer")).expect("create");
        h.store.create_job(job_draft("Backend Engineer")).expect("create");
        let designer = h.store.create_job(job_draft("Product Designer")).expect("create");

        let mut board = JobsController::new(h.service, h.notifier, h.confirm);
        board.load().await;
        board
            .update(&designer.id, talentflow::hiring::JobPatch::status(
                talentflow::hiring::JobStatus::Archived,
            ))
            .await;

        board.set_search_query("ENGINEER");
        assert_eq!(board.visible().len(), 2);

        board.set_search_query("");
        board.set_status_filter(StatusFilter::Archived);
        let archived: Vec<&str> = board
            .visible()
            .iter()
            .map(|job| job.title.as_str())
            .collect();
        assert_eq!(archived, vec!["Product Designer"]);
    }

    #[tokio::test]
    async fn moving_onto_an_unknown_target_is_a_noop() {
        let h = harness();
        let a = h.store.create_job(job_draft("A")).expect("create");
        h.store.create_job(job_draft("B")).expect("create");

        let mut board = JobsController::new(h.service, h.notifier.clone(), h.confirm);
        board.load().await;
        board.move_job(&a.id, &JobId("job-424242".to_string())).await;

        assert!(h.notifier.events().is_empty());
        let orders: Vec<u32> = board.jobs().iter().map(|job| job.order).collect();
        assert_eq!(orders, vec![0, 1]);
    }
}

mod kanban {
    use super::common::*;
    use talentflow::hiring::{CandidatesController, Stage};

    #[tokio::test]
    async fn drag_to_interview_persists_stage_and_nothing_else() {
        let h = harness();
        let before = h
            .store
            .create_candidate(candidate_draft("Dana Li"))
            .expect("create");
        assert_eq!(before.stage, Stage::Applied);

        let mut board = CandidatesController::new(h.service, h.notifier.clone(), h.confirm);
        board.load().await;
        board.move_to_stage(&before.id, Stage::Interview).await;

        assert_eq!(board.by_stage(Stage::Interview).len(), 1);
        assert!(board.by_stage(Stage::Applied).is_empty());

        let persisted = h
            .store
            .candidates()
            .into_iter()
            .find(|candidate| candidate.id == before.id)
            .expect("candidate present");
        assert_eq!(persisted.stage, Stage::Interview);
        assert_eq!(persisted.name, before.name);
        assert_eq!(persisted.email, before.email);
        assert_eq!(persisted.applied_date, before.applied_date);
    }

    #[tokio::test]
    async fn dropping_on_the_current_column_issues_no_call() {
        let (h, backend) = flaky_harness();
        let candidate = h
            .store
            .create_candidate(candidate_draft("Jordan Reyes"))
            .expect("create");

        let mut board = CandidatesController::new(h.service, h.notifier.clone(), h.confirm);
        board.load().await;

        // Any mutating call would now blow up.
        backend.fail_next_saves(true);
        board.move_to_stage(&candidate.id, Stage::Applied).await;

        assert!(h.notifier.events().is_empty());
        assert_eq!(board.by_stage(Stage::Applied).len(), 1);
    }

    #[tokio::test]
    async fn failed_stage_move_rolls_back_by_refetch() {
        let (h, backend) = flaky_harness();
        let candidate = h
            .store
            .create_candidate(candidate_draft("Priya Patel"))
            .expect("create");

        let mut board = CandidatesController::new(h.service, h.notifier.clone(), h.confirm);
        board.load().await;

        backend.fail_next_saves(true);
        board.move_to_stage(&candidate.id, Stage::Offer).await;
        backend.fail_next_saves(false);

        assert_eq!(h.notifier.errors().len(), 1);
        // The optimistic column move was undone.
        assert_eq!(board.by_stage(Stage::Applied).len(), 1);
        assert!(board.by_stage(Stage::Offer).is_empty());
        assert_eq!(h.store.candidates()[0].stage, Stage::Applied);
    }

    #[tokio::test]
    async fn search_matches_name_position_and_email() {
        let h = harness();
        h.store
            .create_candidate(candidate_draft("Dana Li"))
            .expect("create");
        h.store
            .create_candidate(candidate_draft("Jordan Reyes"))
            .expect("create");

        let mut board = CandidatesController::new(h.service, h.notifier, h.confirm);
        board.load().await;

        board.set_search_query("dana");
        assert_eq!(board.visible().len(), 1);

        board.set_search_query("jordan.reyes@");
        assert_eq!(board.visible().len(), 1);

        board.set_search_query("backend");
        assert_eq!(board.visible().len(), 2);
    }
}

mod assessment_forms {
    use super::common::*;
    use talentflow::hiring::{
        AssessmentBuilder, AssessmentsController, QuestionKind, ValidationError,
    };

    #[tokio::test]
    async fn zero_question_submission_is_blocked_before_any_call() {
        let h = harness();
        let mut board = AssessmentsController::new(h.service, h.notifier.clone(), h.confirm);
        board.load().await;

        let builder = AssessmentBuilder::new()
            .title("Incomplete")
            .description("Still drafting");
        let err = board.submit_new(&builder).await.expect_err("blocked");
        assert_eq!(err, ValidationError::NoQuestions);

        assert!(h.store.assessments().is_empty());
        assert_eq!(h.notifier.errors().len(), 1);
    }

    #[tokio::test]
    async fn valid_submission_lands_in_store_with_aggregates_intact() {
        let h = harness();
        let mut board = AssessmentsController::new(h.service, h.notifier.clone(), h.confirm);
        board.load().await;

        let mut builder = AssessmentBuilder::new()
            .title("Product Thinking Challenge")
            .description("Strategy and prioritization")
            .duration(45)
            .passing_score(70);
        builder.add_question(QuestionKind::ShortAnswer, "Prioritize this backlog", 60);
        builder.add_question(QuestionKind::Essay, "Defend a tradeoff", 40);
        assert_eq!(builder.total_points(), 100);

        board.submit_new(&builder).await.expect("accepted");

        let stored = h.store.assessments();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].questions.len(), 2);
        assert_eq!(
            stored[0].questions.iter().map(|q| q.points).sum::<u32>(),
            100
        );
        assert_eq!(board.assessments().len(), 1);
    }

    #[tokio::test]
    async fn editing_through_the_builder_replaces_the_question_list() {
        let h = harness();
        let mut board = AssessmentsController::new(h.service, h.notifier.clone(), h.confirm);
        board.load().await;

        let mut builder = AssessmentBuilder::new()
            .title("Design Portfolio Review")
            .description("Process and craft")
            .duration(90)
            .passing_score(60);
        builder.add_question(QuestionKind::Essay, "Walk through a project", 100);
        board.submit_new(&builder).await.expect("created");
        let id = board.assessments()[0].id.clone();

        let mut editor = AssessmentBuilder::from_assessment(&board.assessments()[0]);
        let first = board.assessments()[0].questions[0].id.clone();
        assert!(editor.remove_question(&first));
        editor.add_question(QuestionKind::ShortAnswer, "Critique this layout", 50);
        editor.add_question(QuestionKind::MultipleChoice, "Pick the best grid", 50);
        board.submit_update(&id, &editor).await.expect("updated");

        let stored = h.store.assessments();
        assert_eq!(stored[0].questions.len(), 2);
        assert_eq!(
            stored[0].questions.iter().map(|q| q.points).sum::<u32>(),
            100
        );
    }
}
