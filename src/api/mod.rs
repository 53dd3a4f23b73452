//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Endpoints are mounted at the root so the resource paths match the
//! original deployment (`/publications/`, `/publications/{id}/`).

pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
    };

    router
}

#[cfg(feature = "swagger-ui")]
mod docs {
    //! OpenAPI document assembled from the handler annotations.

    use utoipa::OpenApi;

    /// Top-level OpenAPI document for the publications API.
    #[derive(Debug, OpenApi)]
    #[openapi(
        paths(
            super::handlers::publications::create_publication,
            super::handlers::publications::list_publications,
            super::handlers::publications::get_publication,
            super::handlers::system::health_handler,
        ),
        components(schemas(
            crate::api::dto::CreatePublicationRequest,
            crate::api::dto::PublicationResponse,
            crate::error::ErrorResponse,
            crate::error::ErrorBody,
        )),
        tags(
            (name = "Publications", description = "Gazette publication records"),
            (name = "System", description = "Service health"),
        )
    )]
    pub struct ApiDoc;
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::build_router;
    use crate::app_state::AppState;
    use crate::persistence::MemoryStore;
    use crate::service::PublicationService;

    fn make_app() -> axum::Router {
        let store = Arc::new(MemoryStore::new());
        let state = AppState {
            publications: Arc::new(PublicationService::new(store)),
        };
        build_router().with_state(state)
    }

    fn post_publication(file_url: &str, competence: &str) -> Request<Body> {
        let body = serde_json::json!({ "file_url": file_url, "competence": competence });
        let Ok(request) = Request::builder()
            .method("POST")
            .uri("/publications/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
        else {
            panic!("request build failed");
        };
        request
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let Ok(bytes) = response.into_body().collect().await else {
            panic!("body read failed");
        };
        let Ok(value) = serde_json::from_slice(&bytes.to_bytes()) else {
            panic!("body is not JSON");
        };
        value
    }

    #[tokio::test]
    async fn create_returns_201_with_representation() {
        let app = make_app();
        let Ok(response) = app
            .oneshot(post_publication("https://files.example/a.pdf", "2025-06"))
            .await
        else {
            panic!("request failed");
        };

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["file_url"], "https://files.example/a.pdf");
        assert_eq!(json["competence"], "2025-06");
        assert!(json["id"].is_i64());
    }

    #[tokio::test]
    async fn duplicate_create_returns_422() {
        let app = make_app();
        let Ok(first) = app
            .clone()
            .oneshot(post_publication("https://files.example/a.pdf", "2025-06"))
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(first.status(), StatusCode::CREATED);

        let Ok(second) = app
            .oneshot(post_publication("https://files.example/a.pdf", "2025-06"))
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(second.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn list_filters_by_competence_newest_first() {
        let app = make_app();
        for (url, competence) in [
            ("https://files.example/a.pdf", "2025-06"),
            ("https://files.example/b.pdf", "2025-05"),
            ("https://files.example/c.pdf", "2025-06"),
        ] {
            let Ok(response) = app.clone().oneshot(post_publication(url, competence)).await
            else {
                panic!("request failed");
            };
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let Ok(request) = Request::builder()
            .uri("/publications/?competence=2025-06")
            .body(Body::empty())
        else {
            panic!("request build failed");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let Some(rows) = json.as_array() else {
            panic!("expected JSON array");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.first().map(|r| &r["file_url"]), Some(&serde_json::json!("https://files.example/c.pdf")));
        assert!(rows.iter().all(|r| r["competence"] == "2025-06"));
    }

    #[tokio::test]
    async fn get_unknown_id_returns_404() {
        let app = make_app();
        let Ok(request) = Request::builder()
            .uri("/publications/99/")
            .body(Body::empty())
        else {
            panic!("request build failed");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = make_app();
        let Ok(request) = Request::builder().uri("/health").body(Body::empty()) else {
            panic!("request build failed");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::OK);
    }
}
