//! # HTTP Source
//!
//! reqwest-backed [`RemoteSource`]: one unauthenticated GET per call.
//!
//! ## Request Shape
//! ```text
//! GET {base_url}{path}
//! Accept: application/json
//! Content-Type: application/json
//!
//! • no query parameters, no auth, no pagination controls
//! • no retry, no cache
//! • timeout only if configured (otherwise reqwest/OS defaults)
//! ```

use std::time::Duration;

use async_trait::async_trait;
use plantapp_core::ResourceKind;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::ApiSettings;
use crate::error::{NetworkError, NetworkResult};
use crate::source::RemoteSource;

const JSON: &str = "application/json";

/// Remote source that talks to the real API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    categories_url: Url,
    questions_url: Url,
}

impl HttpSource {
    /// Builds the client and resolves both endpoints up front.
    ///
    /// ## Errors
    /// - `InvalidUrl` if the base URL carries a path, or a path cannot be joined
    /// - `Client` if reqwest cannot construct its client (e.g. TLS backend)
    pub fn new(settings: &ApiSettings) -> NetworkResult<Self> {
        let base = Url::parse(&settings.base_url)
            .map_err(|e| NetworkError::InvalidUrl(format!("{}: {}", settings.base_url, e)))?;
        if !ApiSettings::is_origin(&base) {
            return Err(NetworkError::InvalidUrl(format!(
                "{}: base URL must not carry a path, query or fragment",
                settings.base_url
            )));
        }

        let join = |kind: ResourceKind| {
            let path = settings.path(kind);
            base.join(path)
                .map_err(|e| NetworkError::InvalidUrl(format!("{}{}: {}", base, path, e)))
        };
        let categories_url = join(ResourceKind::Categories)?;
        let questions_url = join(ResourceKind::Questions)?;

        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| NetworkError::Client(e.to_string()))?;

        Ok(HttpSource {
            client,
            categories_url,
            questions_url,
        })
    }

    /// Endpoint serving `kind`.
    pub fn endpoint(&self, kind: ResourceKind) -> &Url {
        match kind {
            ResourceKind::Categories => &self.categories_url,
            ResourceKind::Questions => &self.questions_url,
        }
    }
}

#[async_trait]
impl RemoteSource for HttpSource {
    async fn fetch_body(&self, kind: ResourceKind) -> NetworkResult<Vec<u8>> {
        let url = self.endpoint(kind);
        debug!(resource = %kind, %url, "GET");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
            .send()
            .await
            .map_err(|e| NetworkError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkError::transport(url, e))?;

        debug!(resource = %kind, status = status.as_u16(), bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fetch;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use plantapp_core::{Category, Question};
    use serde_json::json;

    /// Serves `router` on an ephemeral localhost port and returns its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn source_for(base_url: &str) -> HttpSource {
        HttpSource::new(&ApiSettings::with_base_url(base_url)).unwrap()
    }

    #[test]
    fn test_endpoints_are_joined_onto_base() {
        let source = source_for("https://dummy-api-jtg6bessta-ey.a.run.app");
        assert_eq!(
            source.endpoint(ResourceKind::Categories).as_str(),
            "https://dummy-api-jtg6bessta-ey.a.run.app/getCategories"
        );
        assert_eq!(
            source.endpoint(ResourceKind::Questions).as_str(),
            "https://dummy-api-jtg6bessta-ey.a.run.app/getQuestions"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = HttpSource::new(&ApiSettings::with_base_url("::nope")).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidUrl(_)));
    }

    #[test]
    fn test_base_url_with_path_is_rejected() {
        let err =
            HttpSource::new(&ApiSettings::with_base_url("https://h.example/api")).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidUrl(_)));

        let source = source_for("https://h.example/");
        assert_eq!(
            source.endpoint(ResourceKind::Questions).as_str(),
            "https://h.example/getQuestions"
        );
    }

    #[tokio::test]
    async fn test_categories_200_envelope() {
        let router = Router::new().route(
            "/getCategories",
            get(|| async {
                Json(json!({
                    "data": [
                        {"id": 1, "name": "fern", "title": "Ferns", "rank": 0},
                        {"id": 2, "name": "cacti-and-succulent", "title": "Cacti and Succulents", "rank": 1}
                    ],
                    "meta": {"pagination": {"page": 1, "pageSize": 25, "pageCount": 1, "total": 2}}
                }))
            }),
        );
        let source = source_for(&serve(router).await);

        let categories = fetch::<Category>(&source).await.unwrap();

        assert_eq!(categories.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(categories[0].title, "Ferns");
    }

    #[tokio::test]
    async fn test_request_sends_json_accept_header() {
        let router = Router::new().route(
            "/getQuestions",
            get(|headers: HeaderMap| async move {
                match headers.get("accept").and_then(|v| v.to_str().ok()) {
                    Some("application/json") => (StatusCode::OK, "[]"),
                    _ => (StatusCode::NOT_ACCEPTABLE, ""),
                }
            }),
        );
        let source = source_for(&serve(router).await);

        let questions = fetch::<Question>(&source).await.unwrap();
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let router = Router::new().route(
            "/getCategories",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let source = source_for(&serve(router).await);

        let err = fetch::<Category>(&source).await.unwrap_err();

        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn test_unknown_route_maps_to_status_404() {
        let source = source_for(&serve(Router::new()).await);
        let err = fetch::<Question>(&source).await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_invalid_json_maps_to_decode() {
        let router = Router::new().route("/getQuestions", get(|| async { "not json" }));
        let source = source_for(&serve(router).await);

        let err = fetch::<Question>(&source).await.unwrap_err();

        assert!(matches!(err, NetworkError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_refused_connection_maps_to_transport() {
        // Bind then drop so the port is very likely closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = source_for(&format!("http://{}", addr));
        let err = fetch::<Question>(&source).await.unwrap_err();

        assert!(err.is_transport());
    }
}
