pub mod leaderboard;
pub mod performances;
pub mod rewards;
pub mod users;

use axum::Router;

use crate::middleware::auth::ApiKeys;
use crate::state::AppState;

pub fn router(state: AppState, api_keys: ApiKeys) -> Router {
    let api = Router::new()
        .nest(
            "/performances",
            performances::routes::routes(api_keys.clone()),
        )
        .nest("/users", users::routes::routes())
        .nest("/reward-pools", rewards::routes::pool_routes(api_keys))
        .nest("/invocations", rewards::routes::invocation_routes())
        .nest("/leaderboard", leaderboard::routes::routes());

    Router::new().nest("/api", api).with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use scoring::MemoryStore;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;

    const ADMIN_KEY: &str = "test-admin-key";

    fn app() -> Router {
        let state = AppState::new(Arc::new(MemoryStore::new()));
        router(state, ApiKeys::from_comma_separated(ADMIN_KEY))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    #[tokio::test]
    async fn test_preview_points() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/performances/preview",
            Some(json!({
                "metrics": {"activity": "climbing", "difficulty": "difficult", "attempts": 2, "climb_count": 3}
            })),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "climbing");
        assert_eq!(body["points"], "87.75");
    }

    #[tokio::test]
    async fn test_invalid_metrics_are_rejected() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/performances",
            Some(json!({
                "user_id": Uuid::new_v4(),
                "metrics": {"activity": "running", "distance_km": 5, "duration_minutes": 0}
            })),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("duration_minutes"));
    }

    #[tokio::test]
    async fn test_logged_performance_unlocks_achievements() {
        let app = app();
        let user_id = Uuid::new_v4();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/performances",
            Some(json!({
                "user_id": user_id,
                "metrics": {"activity": "combat", "kills": 10, "deaths": 4, "assists": 3},
                "outcome": "win"
            })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["points"], "9.95");

        let uri = format!("/api/users/{user_id}/achievements");
        let (status, body) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["unlocked_count"], 2);
        assert_eq!(body["total_points"], 30);
    }

    #[tokio::test]
    async fn test_reward_pool_requires_api_key() {
        let app = app();
        let pool = json!({"entries": [{"id": 1, "weight": 0}, {"id": 2, "weight": 0}]});

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/reward-pools/daily",
            Some(pool.clone()),
            Some("wrong"),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/reward-pools/daily",
            Some(pool),
            Some(ADMIN_KEY),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/invocations/daily",
            Some(json!({"user_id": Uuid::new_v4(), "count": 5})),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let pulls = body["pulls"].as_array().unwrap();
        assert_eq!(pulls.len(), 5);
        assert!(pulls.iter().all(|p| p["reward_id"] == 2));
    }

    #[tokio::test]
    async fn test_invocation_count_is_bounded() {
        let app = app();

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/invocations/daily",
            Some(json!({"user_id": Uuid::new_v4(), "count": 0})),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/invocations/missing",
            Some(json!({"user_id": Uuid::new_v4()})),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_leaderboard_reports_movement() {
        let app = app();
        let leader = Uuid::new_v4();
        let chaser = Uuid::new_v4();

        for (user_id, kills) in [(leader, 20), (chaser, 18)] {
            send(
                &app,
                Method::POST,
                "/api/performances",
                Some(json!({
                    "user_id": user_id,
                    "metrics": {"activity": "combat", "kills": kills, "deaths": 0, "assists": 0}
                })),
                None,
            )
            .await;
        }

        let (status, body) = send(&app, Method::GET, "/api/leaderboard/main", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["subject_id"], leader.to_string());
        assert_eq!(body["data"][0]["rank"], 1);
        assert!(body["data"][0]["movement"].is_null());
        assert_eq!(body["pagination"]["total_items"], 2);

        let uri = format!("/api/users/{chaser}/profile");
        let (status, _) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({"display_name": "chaser", "profile_style": "player"})),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/api/leaderboard/main", None, None).await;
        assert_eq!(body["data"][0]["subject_id"], chaser.to_string());
        assert_eq!(body["data"][0]["movement"], "up");
        assert_eq!(body["data"][0]["modified_total"], "23");
        assert_eq!(body["data"][1]["movement"], "down");
    }

    #[tokio::test]
    async fn test_preview_rejects_out_of_range_distance() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/performances/preview",
            Some(json!({
                "metrics": {"activity": "cycling", "distance_km": "79228162514264337593543950335", "duration_seconds": 60}
            })),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_input");
    }

    #[tokio::test]
    async fn test_reward_pool_with_overflowing_total_is_rejected() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/reward-pools/huge",
            Some(json!({"entries": [{"id": 1, "weight": f64::MAX}, {"id": 2, "weight": f64::MAX}]})),
            Some(ADMIN_KEY),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "total_weight_overflow");

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/invocations/huge",
            Some(json!({"user_id": Uuid::new_v4()})),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_leaderboard_scopes_are_bounded() {
        let state = AppState::new(Arc::new(MemoryStore::with_scope_limit(1)));
        let app = router(state, ApiKeys::from_comma_separated(ADMIN_KEY));

        let uri = format!("/api/leaderboard/{}", "x".repeat(65));
        let (status, _) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::GET, "/api/leaderboard/main", None, None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::GET, "/api/leaderboard/other", None, None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "constraint_violation");

        let (status, _) = send(&app, Method::GET, "/api/leaderboard/main", None, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_performance_requires_api_key() {
        let app = app();
        let uri = format!("/api/performances/{}", Uuid::new_v4());

        let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, Method::DELETE, &uri, None, Some(ADMIN_KEY)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
