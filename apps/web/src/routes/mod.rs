pub mod health;
pub mod page;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::listings::handlers as listings;
use crate::state::AppState;
use crate::ui::handlers as ui;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(page::handle_page))
        .route("/theme", post(ui::handle_toggle_theme_form))
        // Listings
        .route("/api/v1/resources", get(listings::handle_list_resources))
        .route(
            "/api/v1/resources/fragment",
            get(listings::handle_resource_fragment),
        )
        .route("/api/v1/jobs", get(listings::handle_list_jobs))
        .route("/api/v1/jobs/fragment", get(listings::handle_job_fragment))
        .route("/api/v1/mentors", get(listings::handle_list_mentors))
        .route(
            "/api/v1/mentors/fragment",
            get(listings::handle_mentor_fragment),
        )
        // UI state
        .route("/api/v1/stats", get(ui::handle_list_stats))
        .route("/api/v1/stats/stream", get(ui::handle_stats_stream))
        .route("/api/v1/theme", get(ui::handle_get_theme))
        .route("/api/v1/theme/toggle", post(ui::handle_toggle_theme))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config::default(), Catalog::builtin()))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app().oneshot(get_request(uri)).await.unwrap();
        let status = response.status();
        let body = body_string(response).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    fn ids(listing: &Value) -> Vec<u64> {
        listing["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, json) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_resources_by_category() {
        let (status, json) = get_json("/api/v1/resources?category=tech").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["category"], "tech");
        assert_eq!(json["listing"]["status"], "items");
        assert_eq!(ids(&json["listing"]), vec![1, 5]);
        assert_eq!(json["listing"]["items"][0]["category_label"], "Technology");
    }

    #[tokio::test]
    async fn test_show_all_resources_matches_all_sentinel() {
        let (_, explicit) = get_json("/api/v1/resources?category=all").await;
        let (_, implicit) = get_json("/api/v1/resources").await;
        assert_eq!(explicit, implicit);
        assert_eq!(ids(&explicit["listing"]), vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_unknown_category_is_bad_request() {
        let (status, json) = get_json("/api/v1/resources?category=cooking").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_jobs_filtered_by_salary() {
        let (status, json) = get_json("/api/v1/jobs?salary=90000").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json["listing"]), vec![1, 2, 6]);
        assert_eq!(json["filters"]["salary"], "90000");
    }

    #[tokio::test]
    async fn test_jobs_with_every_axis_all_return_catalog() {
        let (_, json) =
            get_json("/api/v1/jobs?type=all&industry=all&experience=all&salary=all").await;
        assert_eq!(ids(&json["listing"]), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(json["options"]["types"], serde_json::json!(["Full-time", "Part-time"]));
    }

    #[tokio::test]
    async fn test_jobs_empty_state() {
        let (status, json) = get_json("/api/v1/jobs?type=Part-time&experience=entry").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["listing"]["status"], "empty");
        assert_eq!(json["listing"]["empty_state"]["heading"], "No jobs found");
    }

    #[tokio::test]
    async fn test_non_numeric_salary_is_bad_request() {
        let (status, _) = get_json("/api/v1/jobs?salary=plenty").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_mentors_unaffected_by_filters() {
        let (_, json) = get_json("/api/v1/mentors?category=tech&salary=500000").await;
        assert_eq!(json["mentors"].as_array().unwrap().len(), 6);
        assert_eq!(json["mentors"][0]["avatar"], "avatar-purple");
    }

    #[tokio::test]
    async fn test_resource_fragment_is_html() {
        let response = app()
            .oneshot(get_request("/api/v1/resources/fragment?category=entrepreneurship"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        let html = body_string(response).await;
        assert_eq!(html.matches(r#"class="resource-card""#).count(), 1);
        assert!(html.contains("Startup Funding Strategies"));
    }

    #[tokio::test]
    async fn test_job_fragment_empty_state() {
        let response = app()
            .oneshot(get_request("/api/v1/jobs/fragment?industry=Aerospace"))
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("<h3>No jobs found</h3>"));
    }

    #[tokio::test]
    async fn test_page_renders_with_filters() {
        let response = app()
            .oneshot(get_request("/?category=leadership&experience=mid"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert_eq!(html.matches(r#"class="resource-card""#).count(), 2);
        assert_eq!(html.matches(r#"class="job-card""#).count(), 3);
        assert_eq!(html.matches(r#"class="mentor-card""#).count(), 6);
        assert!(html.contains(r#"data-theme="dark""#));
    }

    #[tokio::test]
    async fn test_page_reads_theme_cookie() {
        let request = Request::builder()
            .uri("/")
            .header(header::COOKIE, "empowerher-theme=light")
            .body(Body::empty())
            .unwrap();
        let html = body_string(app().oneshot(request).await.unwrap()).await;
        assert!(html.contains(r#"data-theme="light""#));
    }

    #[tokio::test]
    async fn test_theme_toggle_twice_restores_original() {
        let toggle = |cookie: Option<String>| {
            let mut builder = Request::builder().method("POST").uri("/api/v1/theme/toggle");
            if let Some(cookie) = cookie {
                builder = builder.header(header::COOKIE, cookie);
            }
            builder.body(Body::empty()).unwrap()
        };

        let first = app().oneshot(toggle(None)).await.unwrap();
        let set_cookie = first.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("empowerher-theme=light"));
        let json: Value = serde_json::from_str(&body_string(first).await).unwrap();
        assert_eq!(json["theme"], "light");
        assert_eq!(json["icon"], "fas fa-moon");

        let cookie = set_cookie.split(';').next().unwrap().to_string();
        let second = app().oneshot(toggle(Some(cookie))).await.unwrap();
        let json: Value = serde_json::from_str(&body_string(second).await).unwrap();
        assert_eq!(json["theme"], "dark");
    }

    fn theme_form_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/theme")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_theme_form_redirects_home() {
        let response = app().oneshot(theme_form_request("")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert!(response.headers().contains_key(header::SET_COOKIE));
    }

    #[tokio::test]
    async fn test_theme_form_keeps_active_filters() {
        // The page filtered by category and industry posts both back with the toggle.
        let page = app()
            .oneshot(get_request("/?category=tech&industry=Design"))
            .await
            .unwrap();
        let html = body_string(page).await;
        assert!(html.contains(r#"<input type="hidden" name="category" value="tech">"#));

        let response = app()
            .oneshot(theme_form_request("category=tech&industry=Design"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/?category=tech&industry=Design"
        );
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with("empowerher-theme=light"));
    }

    #[tokio::test]
    async fn test_malformed_query_uses_error_envelope() {
        let (status, json) = get_json("/api/v1/jobs?salary=1&salary=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");

        let (status, json) = get_json("/?category=tech&category=career").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_stats_listing() {
        let (status, json) = get_json("/api/v1/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["stats"].as_array().unwrap().len(), 4);
        assert_eq!(json["tick_ms"], 16);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stats_stream_ends_on_targets() {
        let config = Config {
            counter_duration_ms: 64,
            counter_tick_ms: 16,
            ..Config::default()
        };
        let app = build_router(AppState::new(config, Catalog::builtin()));
        let response = app.oneshot(get_request("/api/v1/stats/stream")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert_eq!(body.matches("event: tick").count(), 4);
        assert_eq!(body.matches(r#""finished":true"#).count(), 1);
        assert!(body.contains(r#""display":"50,000""#));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, json) = get_json("/api/v1/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
