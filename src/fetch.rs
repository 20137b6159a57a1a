use std::path::Path;

use reqwest::Client;

use crate::models::DecompositionData;

/// The three mutually exclusive states of the single data load.
#[derive(Debug, Clone)]
pub enum FetchState {
    Loading,
    Success(Box<DecompositionData>),
    Error(String),
}

impl FetchState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, FetchState::Loading)
    }
}

/// Holds the fetch state for one mount of the consuming view. Starts in
/// `Loading` and settles at most once; a late resolution arriving after the
/// state has settled (e.g. the view was torn down) is a no-op.
#[derive(Debug)]
pub struct FetchLifecycle {
    state: FetchState,
}

impl Default for FetchLifecycle {
    fn default() -> Self {
        Self {
            state: FetchState::Loading,
        }
    }
}

impl FetchLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn resolve(&mut self, result: Result<DecompositionData, String>) {
        if self.state.is_settled() {
            return;
        }
        self.state = match result {
            Ok(data) => FetchState::Success(Box::new(data)),
            Err(message) => FetchState::Error(message),
        };
    }

    /// Issue the one fetch for this lifecycle and settle on its outcome.
    pub async fn load(&mut self, http: &Client, url: &str) {
        let result = fetch_decomposition(http, url).await;
        self.resolve(result);
    }
}

/// Fetch and decode the decomposition document. A completed request with a
/// non-success status maps to `"HTTP {status}"`; a transport failure or a
/// body that fails to decode maps to the underlying failure's description.
/// Single shot: no retry, no timeout, no cancellation.
pub async fn fetch_decomposition(http: &Client, url: &str) -> Result<DecompositionData, String> {
    log::info!("Fetching decomposition document from {url}");
    let response = http.get(url).send().await.map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {}", status.as_u16()));
    }

    response
        .json::<DecompositionData>()
        .await
        .map_err(|e| e.to_string())
}

/// Offline counterpart: load a `decomposition.json` produced by the analysis
/// pipeline straight from disk.
pub fn load_decomposition_file(path: &Path) -> Result<DecompositionData, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&raw).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_starts_loading() {
        let lifecycle = FetchLifecycle::new();
        assert!(matches!(lifecycle.state(), FetchState::Loading));
    }

    #[test]
    fn error_resolution_carries_the_message() {
        let mut lifecycle = FetchLifecycle::new();
        lifecycle.resolve(Err("Network failure".to_string()));
        match lifecycle.state() {
            FetchState::Error(message) => assert_eq!(message, "Network failure"),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn resolve_is_a_no_op_once_settled() {
        let mut lifecycle = FetchLifecycle::new();
        lifecycle.resolve(Err("HTTP 404".to_string()));
        lifecycle.resolve(Err("a later failure".to_string()));
        match lifecycle.state() {
            FetchState::Error(message) => assert_eq!(message, "HTTP 404"),
            other => panic!("expected Error, got {other:?}"),
        }
    }
}
