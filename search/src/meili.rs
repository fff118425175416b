//! Meilisearch-backed [`SearchClient`].

use async_trait::async_trait;
use boiler_core::{SearchRequest, TransportError};
use meilisearch_sdk::client::Client;
use meilisearch_sdk::errors::Error as MeiliError;
use meilisearch_sdk::search::Selectors;
use serde_json::{Map, Value};

use crate::client::{SearchClient, SearchResponse};
use crate::config::SearchConfig;

/// Key the index uses for highlighted copies of a hit.
const FORMATTED: &str = "_formatted";

pub struct MeiliClient {
    client: Client,
}

impl MeiliClient {
    pub fn new(config: &SearchConfig) -> Result<Self, TransportError> {
        let client = Client::new(&config.meili_url, config.meili_key.as_deref())
            .map_err(transport_error)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SearchClient for MeiliClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, TransportError> {
        let index = self.client.index(&request.index);
        let filter = request.filters.join(" AND ");
        let sort: Vec<&str> = request.sort.iter().map(String::as_str).collect();
        let highlight: Vec<&str> = request
            .highlight
            .attributes
            .iter()
            .map(String::as_str)
            .collect();

        let mut query = index.search();
        query
            .with_query(&request.text)
            .with_limit(request.limit)
            .with_offset(request.offset)
            .with_attributes_to_highlight(Selectors::Some(&highlight))
            .with_highlight_pre_tag(&request.highlight.pre_tag)
            .with_highlight_post_tag(&request.highlight.post_tag);
        if !filter.is_empty() {
            query.with_filter(&filter);
        }
        if !sort.is_empty() {
            query.with_sort(&sort);
        }

        let results = query
            .execute::<Map<String, Value>>()
            .await
            .map_err(transport_error)?;

        let total = results.estimated_total_hits.unwrap_or(results.hits.len());
        let hits = results
            .hits
            .into_iter()
            .map(|hit| {
                let mut record = hit.result;
                if let Some(formatted) = hit.formatted_result {
                    record.insert(FORMATTED.to_string(), Value::Object(formatted));
                }
                Value::Object(record)
            })
            .collect();

        Ok(SearchResponse {
            hits,
            estimated_total_hits: total,
        })
    }
}

fn transport_error(err: MeiliError) -> TransportError {
    match err {
        MeiliError::Meilisearch(err) => TransportError::Client(err.error_message),
        MeiliError::MeilisearchCommunication(err) => TransportError::Status {
            status: err.status_code,
            body: err.message.unwrap_or_default(),
        },
        err => TransportError::Client(err.to_string()),
    }
}
