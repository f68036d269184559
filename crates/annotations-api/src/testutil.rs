//! Shared fixtures for handler tests: a scriptable repository mock and an
//! ephemeral test server running the real route table.

use std::sync::Arc;

use async_trait::async_trait;

use annotations_core::{AnnotationsRepository, Error, ReadResult, Result};

use crate::AppState;

type ReadFn = Box<dyn Fn(&str, Option<&str>) -> Result<ReadResult> + Send + Sync>;
type ConnectivityFn = Box<dyn Fn() -> Result<()> + Send + Sync>;

pub struct MockDriver {
    read_fn: Option<ReadFn>,
    connectivity_fn: Option<ConnectivityFn>,
}

impl MockDriver {
    pub fn reading(
        read_fn: impl Fn(&str, Option<&str>) -> Result<ReadResult> + Send + Sync + 'static,
    ) -> Self {
        Self {
            read_fn: Some(Box::new(read_fn)),
            connectivity_fn: None,
        }
    }

    pub fn with_connectivity(
        connectivity_fn: impl Fn() -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            read_fn: None,
            connectivity_fn: Some(Box::new(connectivity_fn)),
        }
    }
}

#[async_trait]
impl AnnotationsRepository for MockDriver {
    async fn read(&self, content_uuid: &str, bookmark: Option<&str>) -> Result<ReadResult> {
        match &self.read_fn {
            Some(f) => f(content_uuid, bookmark),
            None => Err(Error::Store("not implemented".to_string())),
        }
    }

    async fn check_connectivity(&self) -> Result<()> {
        match &self.connectivity_fn {
            Some(f) => f(),
            None => Err(Error::Store("not implemented".to_string())),
        }
    }
}

/// Spawn the service router on an ephemeral port.
/// Returns the base URL, e.g. `http://127.0.0.1:PORT`.
pub async fn spawn_server(driver: MockDriver) -> String {
    let state = AppState {
        repo: Arc::new(driver),
        cache_control: "max-age=30, public".to_string(),
        api_doc: Some("openapi: 3.0.0\ninfo:\n  title: Public Annotations API\n".to_string()),
        system_code: "annotationsapi".to_string(),
        app_name: "public-annotations-api".to_string(),
    };
    let router = crate::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    // Give server a moment to start
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    format!("http://{}", addr)
}
