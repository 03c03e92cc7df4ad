//! Deterministic demo data built from fixed rotation tables. Anything a real
//! dataset would randomize is derived from the entity index instead so demos
//! and tests are reproducible.

use chrono::{Duration, Utc};

use super::domain::{
    Assessment, AssessmentId, Candidate, CandidateId, Job, JobId, JobStatus, Question,
    QuestionId, QuestionKind, Stage,
};
use super::snapshot::StateSnapshot;

const JOB_TITLES: [&str; 6] = [
    "Senior Frontend Engineer",
    "Product Manager",
    "UX Designer",
    "Backend Developer",
    "Data Scientist",
    "DevOps Engineer",
];
const DEPARTMENTS: [&str; 6] = [
    "Engineering",
    "Product",
    "Design",
    "Engineering",
    "Data",
    "Operations",
];
const LOCATIONS: [&str; 6] = [
    "San Francisco, CA",
    "Remote",
    "New York, NY",
    "Austin, TX",
    "Remote",
    "Seattle, WA",
];
const JOB_TYPES: [&str; 6] = [
    "Full-time",
    "Full-time",
    "Contract",
    "Full-time",
    "Full-time",
    "Full-time",
];

const CANDIDATE_NAMES: [&str; 8] = [
    "Sarah Johnson",
    "Michael Chen",
    "Emily Rodriguez",
    "James Williams",
    "Priya Patel",
    "David Kim",
    "Maria Garcia",
    "Alex Thompson",
];
const POSITIONS: [&str; 8] = [
    "Frontend Engineer",
    "Product Manager",
    "UX Designer",
    "Backend Developer",
    "Data Scientist",
    "DevOps Engineer",
    "Frontend Engineer",
    "Product Manager",
];
const STAGES: [Stage; 8] = [
    Stage::Applied,
    Stage::Screening,
    Stage::Interview,
    Stage::Applied,
    Stage::Interview,
    Stage::Offer,
    Stage::Screening,
    Stage::Applied,
];

const ASSESSMENT_TITLES: [&str; 4] = [
    "Frontend Development Assessment",
    "Product Thinking Challenge",
    "Design Portfolio Review",
    "System Design Interview",
];
const ASSESSMENT_DESCRIPTIONS: [&str; 4] = [
    "Evaluate frontend coding skills with React and TypeScript",
    "Assess product strategy and prioritization abilities",
    "Review design process and creative thinking",
    "Test system architecture and scalability knowledge",
];
const DURATIONS: [u32; 4] = [60, 45, 90, 120];

/// Snapshot used to seed an empty store: 6 jobs, 12 candidates, 4 assessments.
pub fn demo_snapshot() -> StateSnapshot {
    let now = Utc::now();

    let jobs = (0..6)
        .map(|i| Job {
            id: JobId(format!("job-{:06}", i + 1)),
            title: JOB_TITLES[i % JOB_TITLES.len()].to_string(),
            department: DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
            location: LOCATIONS[i % LOCATIONS.len()].to_string(),
            kind: JOB_TYPES[i % JOB_TYPES.len()].to_string(),
            status: JobStatus::Active,
            description: "We are looking for a talented professional to join our growing team. \
                You will work on exciting projects and collaborate with a passionate team."
                .to_string(),
            requirements: "5+ years of experience\nStrong communication skills\nPassion for innovation"
                .to_string(),
            salary: "$120k - $180k".to_string(),
            applicants: 10 + ((i as u32 * 17) % 50),
            order: i as u32,
            created_at: now,
        })
        .collect();

    let candidates = (0..12)
        .map(|i| Candidate {
            id: CandidateId(format!("cand-{:06}", i + 1)),
            name: CANDIDATE_NAMES[i % CANDIDATE_NAMES.len()].to_string(),
            email: format!("candidate{i}@example.com"),
            phone: "+1 (555) 123-4567".to_string(),
            position: POSITIONS[i % POSITIONS.len()].to_string(),
            stage: STAGES[i % STAGES.len()],
            experience: 2 + ((i as u32 * 3) % 10),
            rating: 3 + ((i as u8) % 3),
            resume_url: "#".to_string(),
            notes: "Strong technical background with excellent communication skills.".to_string(),
            applied_date: now - Duration::days(((i as i64 * 7) % 30) + 1),
        })
        .collect();

    let assessments = (0..4)
        .map(|i| Assessment {
            id: AssessmentId(format!("asmt-{:06}", i + 1)),
            title: ASSESSMENT_TITLES[i].to_string(),
            description: ASSESSMENT_DESCRIPTIONS[i].to_string(),
            duration: DURATIONS[i],
            passing_score: 70,
            questions: seed_questions(i),
            created_at: now,
        })
        .collect();

    StateSnapshot {
        jobs,
        candidates,
        assessments,
    }
}

fn seed_questions(index: usize) -> Vec<Question> {
    if index == 0 {
        vec![
            Question {
                id: QuestionId("q-1".to_string()),
                kind: QuestionKind::Coding,
                question: "Build a responsive component".to_string(),
                points: 50,
            },
            Question {
                id: QuestionId("q-2".to_string()),
                kind: QuestionKind::MultipleChoice,
                question: "What is the Virtual DOM?".to_string(),
                points: 20,
            },
            Question {
                id: QuestionId("q-3".to_string()),
                kind: QuestionKind::ShortAnswer,
                question: "Explain React hooks".to_string(),
                points: 30,
            },
        ]
    } else {
        vec![Question {
            id: QuestionId("q-1".to_string()),
            kind: QuestionKind::ShortAnswer,
            question: "Sample question".to_string(),
            points: 100,
        }]
    }
}
