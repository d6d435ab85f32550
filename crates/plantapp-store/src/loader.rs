//! # Load Orchestration
//!
//! Fetch-then-fallback policy for one resource.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       load_resource::<R>(source)                        │
//! │                                                                         │
//! │   fetch::<R>(source) : Result<Vec<R>, NetworkError>                     │
//! │        │                                   │                            │
//! │        │ Ok(items)                         │ Err(e)                     │
//! │        ▼                                   ▼                            │
//! │   Settlement::Live(items)        warn!(e) + Settlement::Fallback {      │
//! │                                      items: R::fallback(),              │
//! │                                      reason: e.to_string() }            │
//! │                                                                         │
//! │   Return type is Settlement<R>: the caller cannot observe an error.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The UI never needs an error view for these resources. A failed request
//! looks, to the screen, like a successful one returning sample content.

use plantapp_client::{fetch, NetworkError, RemoteSource};
use plantapp_core::{Resource, Settlement};
use tracing::warn;

/// Loads `R`, substituting its fallback snapshot on any network failure.
pub async fn load_resource<R: Resource>(source: &dyn RemoteSource) -> Settlement<R> {
    fetch::<R>(source)
        .await
        .map(Settlement::Live)
        .unwrap_or_else(fallback_after::<R>)
}

fn fallback_after<R: Resource>(err: NetworkError) -> Settlement<R> {
    warn!(
        resource = %R::KIND,
        error = %err,
        status = ?err.status_code(),
        "Error fetching {}, using fallback data",
        R::KIND
    );
    Settlement::Fallback {
        items: R::fallback(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use plantapp_client::NetworkResult;
    use plantapp_core::{Category, DataSource, Question, ResourceKind};

    struct Respond(NetworkResult<&'static str>);

    #[async_trait]
    impl RemoteSource for Respond {
        async fn fetch_body(&self, _kind: ResourceKind) -> NetworkResult<Vec<u8>> {
            self.0.clone().map(|body| body.as_bytes().to_vec())
        }
    }

    fn http_500() -> NetworkError {
        NetworkError::Status {
            status: 500,
            url: "https://api.example/getCategories".into(),
        }
    }

    #[tokio::test]
    async fn test_live_payload_is_kept_verbatim() {
        let source = Respond(Ok(r#"[{"id": 9, "title": "Live"}, {"id": 4}]"#));

        let settlement = load_resource::<Question>(&source).await;

        assert_eq!(settlement.source(), DataSource::Live);
        let ids: Vec<i64> = settlement.items().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![9, 4]);
    }

    #[tokio::test]
    async fn test_live_payload_with_null_fields_is_kept() {
        for body in [
            r#"{"data": [{"id": 42, "title": "Herbs", "image": null}], "meta": {}}"#,
            r#"{"data": [{"id": 42, "title": "Herbs", "publishedAt": null}], "meta": {}}"#,
        ] {
            let settlement = load_resource::<Category>(&Respond(Ok(body))).await;

            assert_eq!(settlement.source(), DataSource::Live);
            let ids: Vec<i64> = settlement.items().iter().map(|c| c.id).collect();
            assert_eq!(ids, vec![42]);
        }
    }

    #[tokio::test]
    async fn test_status_error_falls_back() {
        let settlement = load_resource::<Category>(&Respond(Err(http_500()))).await;

        match settlement {
            Settlement::Fallback { items, reason } => {
                assert_eq!(items, Category::fallback());
                assert!(reason.contains("500"));
            }
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_falls_back() {
        let settlement = load_resource::<Question>(&Respond(Ok("{\"oops\": true}"))).await;
        assert_eq!(settlement.source(), DataSource::Fallback);
        assert_eq!(settlement.items().len(), 3);
    }
}
