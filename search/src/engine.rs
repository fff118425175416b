//! Runs a controller's current query and feeds the outcome back into it.

use boiler_core::{Domain, ResultSet, SearchRequest, SearchState, TransportError};

use crate::client::{SearchClient, SearchResponse};
use crate::config::SearchConfig;

/// Search driver shared by every domain's controller.
///
/// `search` borrows the controller for the whole round trip. Callers that
/// must keep editing the controller while a request is in flight split it
/// into `request` / `fetch` / `apply`; a response that arrives after a newer
/// one still overwrites it, since nothing tags requests with a generation.
pub struct SearchEngine<C: SearchClient> {
    client: C,
    config: SearchConfig,
}

/// Create operations.
impl<C: SearchClient> SearchEngine<C> {
    pub fn new(client: C, config: SearchConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Query operations.
impl<C: SearchClient> SearchEngine<C> {
    /// Searches with the controller's current query and applies the outcome.
    pub async fn search<D: Domain>(
        &self,
        state: &mut SearchState<D>,
    ) -> Result<(), TransportError> {
        let request = self.request(state);
        let outcome = self.fetch::<D>(&request).await;
        self.apply(state, outcome)
    }

    pub fn request<D: Domain>(&self, state: &SearchState<D>) -> SearchRequest {
        state.request(&self.config.settings)
    }

    pub async fn fetch<D: Domain>(
        &self,
        request: &SearchRequest,
    ) -> Result<ResultSet<D::Record>, TransportError> {
        tracing::debug!(
            index = %request.index,
            text = %request.text,
            offset = request.offset,
            "searching"
        );
        let response = self.client.search(request).await?;
        decode::<D>(response)
    }

    /// Applies a fetched page, or records the failure and leaves the previous
    /// hits and total in place.
    pub fn apply<D: Domain>(
        &self,
        state: &mut SearchState<D>,
        outcome: Result<ResultSet<D::Record>, TransportError>,
    ) -> Result<(), TransportError> {
        match outcome {
            Ok(results) => {
                let total = results.total_hits();
                tracing::debug!("applying {} of {total} hits", results.len());
                state.clear_error();
                state.apply_results(results.into_records(), total);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("search failed: {err}");
                state.set_error(err.user_message(self.config.error_max_chars));
                Err(err)
            }
        }
    }
}

fn decode<D: Domain>(response: SearchResponse) -> Result<ResultSet<D::Record>, TransportError> {
    let records = response
        .hits
        .into_iter()
        .map(serde_json::from_value::<D::Record>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| TransportError::Client(format!("malformed hit: {err}")))?;

    Ok(ResultSet::new(records, response.estimated_total_hits))
}
