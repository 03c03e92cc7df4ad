//! HTTP surface specifications driven through the router with `tower::oneshot`,
//! covering the REST shape, wire format, and error signaling.

mod common {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, Response, StatusCode};
    use serde_json::Value;
    use talentflow::hiring::{hiring_router, seed, HiringStore, MemoryStore, TalentService};
    use tower::ServiceExt;

    pub(super) fn seeded_router() -> (axum::Router, Arc<HiringStore<MemoryStore>>) {
        let store = Arc::new(HiringStore::open(MemoryStore::default()).expect("open store"));
        store.import(seed::demo_snapshot()).expect("seed");
        let service = Arc::new(TalentService::with_latency(store.clone(), Duration::ZERO));
        (hiring_router(service), store)
    }

    pub(super) async fn send(router: &axum::Router, request: Request<Body>) -> Response<Body> {
        router
            .clone()
            .oneshot(request)
            .await
            .expect("router dispatch")
    }

    pub(super) async fn json_body(response: Response<Body>) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    pub(super) fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    pub(super) fn with_json(method: &str, uri: &str, payload: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&payload).expect("serialize")))
            .expect("request")
    }

    pub(super) fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    pub(super) async fn job_ids(router: &axum::Router) -> Vec<String> {
        let response = send(router, get("/api/jobs")).await;
        assert_eq!(response.status(), StatusCode::OK);
        json_body(response)
            .await
            .as_array()
            .expect("array")
            .iter()
            .map(|job| job["id"].as_str().expect("id").to_string())
            .collect()
    }
}

mod jobs {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn list_returns_the_collection_in_display_order() {
        let (router, _) = seeded_router();
        let response = send(&router, get("/api/jobs")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let payload = json_body(response).await;
        let jobs = payload.as_array().expect("array");
        assert_eq!(jobs.len(), 6);
        let orders: Vec<i64> = jobs.iter().map(|job| job["order"].as_i64().unwrap()).collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4, 5]);
        // camelCase wire format.
        assert!(jobs[0].get("createdAt").is_some());
        assert!(jobs[0].get("type").is_some());
    }

    #[tokio::test]
    async fn create_returns_created_job_with_server_managed_fields() {
        let (router, _) = seeded_router();
        let response = send(
            &router,
            with_json(
                "POST",
                "/api/jobs",
                json!({
                    "title": "Security Engineer",
                    "department": "Engineering",
                    "location": "Remote",
                    "type": "Full-time"
                }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let job = json_body(response).await;
        assert_eq!(job["title"], json!("Security Engineer"));
        assert_eq!(job["status"], json!("active"));
        assert_eq!(job["applicants"], json!(0));
        assert_eq!(job["order"], json!(6));
        assert!(job["id"].as_str().expect("id").starts_with("job-"));
    }

    #[tokio::test]
    async fn patch_of_missing_job_returns_not_found() {
        let (router, _) = seeded_router();
        let response = send(
            &router,
            with_json(
                "PATCH",
                "/api/jobs/job-999999",
                json!({ "status": "archived" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let payload = json_body(response).await;
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("job-999999"));
    }

    #[tokio::test]
    async fn delete_is_204_then_404() {
        let (router, store) = seeded_router();
        let ids = job_ids(&router).await;
        let target = &ids[0];

        let response = send(&router, delete(&format!("/api/jobs/{target}"))).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(store.jobs().len(), 5);

        let response = send(&router, delete(&format!("/api/jobs/{target}"))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(store.jobs().len(), 5);
    }

    #[tokio::test]
    async fn reorder_commits_the_supplied_sequence() {
        let (router, _) = seeded_router();
        let mut ids = job_ids(&router).await;
        ids.rotate_left(2);

        let payload = json!({
            "jobs": ids.iter().map(|id| json!({ "id": id })).collect::<Vec<Value>>()
        });
        let response = send(&router, with_json("PATCH", "/api/jobs/reorder", payload)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "success": true }));

        assert_eq!(job_ids(&router).await, ids);
    }

    #[tokio::test]
    async fn reorder_accepts_full_job_objects_in_the_payload() {
        let (router, _) = seeded_router();
        let response = send(&router, get("/api/jobs")).await;
        let mut jobs = json_body(response).await.as_array().expect("array").clone();
        jobs.reverse();

        let response = send(
            &router,
            with_json("PATCH", "/api/jobs/reorder", json!({ "jobs": jobs })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn mismatched_reorder_payload_is_rejected() {
        let (router, store) = seeded_router();
        let ids = job_ids(&router).await;

        let short = json!({ "jobs": [{ "id": ids[0] }] });
        let response = send(&router, with_json("PATCH", "/api/jobs/reorder", short)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // Ordering invariant untouched.
        let orders: Vec<u32> = store.jobs().iter().map(|job| job.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4, 5]);
    }
}

mod candidates {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn stage_patch_moves_the_card_and_nothing_else() {
        let (router, _) = seeded_router();
        let response = send(&router, get("/api/candidates")).await;
        let before = json_body(response).await;
        let card = before
            .as_array()
            .expect("array")
            .iter()
            .find(|candidate| candidate["stage"] == json!("applied"))
            .expect("an applied candidate")
            .clone();
        let id = card["id"].as_str().expect("id");

        let response = send(
            &router,
            with_json(
                "PATCH",
                &format!("/api/candidates/{id}"),
                json!({ "stage": "interview" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let updated = json_body(response).await;
        assert_eq!(updated["stage"], json!("interview"));
        assert_eq!(updated["name"], card["name"]);
        assert_eq!(updated["email"], card["email"]);
        assert_eq!(updated["appliedDate"], card["appliedDate"]);
    }

    #[tokio::test]
    async fn create_assigns_applied_stage_and_timestamp() {
        let (router, _) = seeded_router();
        let response = send(
            &router,
            with_json(
                "POST",
                "/api/candidates",
                json!({
                    "name": "Robin Walsh",
                    "email": "robin@example.com",
                    "position": "Data Scientist"
                }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let candidate = json_body(response).await;
        assert_eq!(candidate["stage"], json!("applied"));
        assert!(candidate.get("appliedDate").is_some());
        assert!(candidate["id"].as_str().expect("id").starts_with("cand-"));
    }
}

mod assessments {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn create_round_trips_questions_and_points() {
        let (router, _) = seeded_router();
        let response = send(
            &router,
            with_json(
                "POST",
                "/api/assessments",
                json!({
                    "title": "Backend Screen",
                    "description": "APIs and data modeling",
                    "duration": 60,
                    "passingScore": 70,
                    "questions": [
                        { "id": "q-1", "type": "coding", "question": "Design a queue", "points": 60 },
                        { "id": "q-2", "type": "essay", "question": "Describe a failure", "points": 40 }
                    ]
                }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        let id = created["id"].as_str().expect("id").to_string();

        let response = send(&router, get("/api/assessments")).await;
        let all = json_body(response).await;
        let fetched = all
            .as_array()
            .expect("array")
            .iter()
            .find(|assessment| assessment["id"] == json!(id))
            .expect("assessment listed");

        let questions = fetched["questions"].as_array().expect("questions");
        assert_eq!(questions.len(), 2);
        let total: i64 = questions
            .iter()
            .map(|question| question["points"].as_i64().unwrap())
            .sum();
        assert_eq!(total, 100);
        assert_eq!(questions[0]["type"], json!("coding"));
    }

    #[tokio::test]
    async fn delete_of_missing_assessment_returns_not_found() {
        let (router, store) = seeded_router();
        let response = send(&router, delete("/api/assessments/asmt-999999")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(store.assessments().len(), 4);
    }
}
