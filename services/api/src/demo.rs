use crate::infra::StdoutNotifier;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use talentflow::error::AppError;
use talentflow::hiring::{
    seed, AssessmentBuilder, AssessmentsController, AutoConfirm, CandidatesController,
    HiringStore, JobDraft, JobsController, JsonFileStore, MemoryStore, QuestionKind,
    SnapshotStore, Stage, TalentService,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Simulated round-trip latency in milliseconds (defaults to instant)
    #[arg(long, default_value_t = 0)]
    pub(crate) latency_ms: u64,
    /// Persist the demo session to this snapshot file instead of memory
    #[arg(long)]
    pub(crate) data_path: Option<PathBuf>,
}

/// Walks the three pages end to end: job list with a drag reorder, the
/// candidate kanban with a stage move, and the assessment builder with a
/// blocked and a successful submission.
pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let latency = Duration::from_millis(args.latency_ms);
    match args.data_path {
        Some(path) => {
            let store = Arc::new(HiringStore::open(JsonFileStore::new(path))?);
            run_session(store, latency).await
        }
        None => {
            let store = Arc::new(HiringStore::open(MemoryStore::default())?);
            run_session(store, latency).await
        }
    }
}

async fn run_session<S>(store: Arc<HiringStore<S>>, latency: Duration) -> Result<(), AppError>
where
    S: SnapshotStore + 'static,
{
    if store.is_empty() {
        store.import(seed::demo_snapshot())?;
    }
    let service = Arc::new(TalentService::with_latency(store, latency));
    let notifier = Arc::new(StdoutNotifier);
    let confirm = Arc::new(AutoConfirm);

    println!("TalentFlow demo session");

    println!("\nJob postings");
    let mut jobs = JobsController::new(service.clone(), notifier.clone(), confirm.clone());
    jobs.load().await;
    for job in jobs.visible() {
        println!("  {:>2}. {} ({})", job.order, job.title, job.department);
    }

    jobs.create(JobDraft {
        title: "Staff Platform Engineer".to_string(),
        department: "Engineering".to_string(),
        location: "Remote".to_string(),
        kind: "Full-time".to_string(),
        salary: "$170k - $220k".to_string(),
        ..JobDraft::default()
    })
    .await;

    if let (Some(newest), Some(first)) = (
        jobs.jobs().last().map(|job| job.id.clone()),
        jobs.jobs().first().map(|job| job.id.clone()),
    ) {
        println!("  dragging the new posting to the top...");
        jobs.move_job(&newest, &first).await;
    }
    for job in jobs.visible().iter().take(3) {
        println!("  {:>2}. {}", job.order, job.title);
    }

    println!("\nCandidate pipeline");
    let mut candidates =
        CandidatesController::new(service.clone(), notifier.clone(), confirm.clone());
    candidates.load().await;
    for stage in Stage::ALL {
        println!(
            "  {:<10} {} candidates",
            stage.label(),
            candidates.by_stage(stage).len()
        );
    }

    if let Some(id) = candidates
        .by_stage(Stage::Applied)
        .first()
        .map(|candidate| candidate.id.clone())
    {
        println!("  dragging a card from applied to interview...");
        candidates.move_to_stage(&id, Stage::Interview).await;
        println!(
            "  interview column now holds {} candidates",
            candidates.by_stage(Stage::Interview).len()
        );
    }

    println!("\nAssessment builder");
    let mut assessments = AssessmentsController::new(service, notifier, confirm);
    assessments.load().await;

    let empty = AssessmentBuilder::new()
        .title("Unfinished Assessment")
        .description("No questions yet");
    println!("  submitting a form with zero questions (should be blocked):");
    let _ = assessments.submit_new(&empty).await;

    let mut builder = AssessmentBuilder::new()
        .title("Platform Engineering Screen")
        .description("Infrastructure fundamentals and coding exercise")
        .duration(90)
        .passing_score(65);
    builder.add_question(QuestionKind::Coding, "Implement a rate limiter", 60);
    builder.add_question(QuestionKind::ShortAnswer, "Explain eventual consistency", 40);
    println!(
        "  submitting a valid form ({} questions, {} points):",
        builder.question_count(),
        builder.total_points()
    );
    let _ = assessments.submit_new(&builder).await;
    println!("  library now holds {} assessments", assessments.assessments().len());

    Ok(())
}
