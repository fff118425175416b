use async_trait::async_trait;
use boiler_core::{SearchRequest, TransportError};
use serde_json::Value;

/// One page of hits as returned by the index, before decoding into records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    pub hits: Vec<Value>,
    pub estimated_total_hits: usize,
}

/// Runs a flattened query against a search index.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, TransportError>;
}
