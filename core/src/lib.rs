pub mod auth;
pub mod error;
pub mod format;
pub mod limiter;
pub mod pagination;
pub mod query;
pub mod reviews;
pub mod state;
pub mod thumbs;
pub mod traffic;
pub mod types;
pub mod validate;

pub use auth::{Auth, AuthState, Backend, Status};
pub use error::{Error, Result, TransportError, ValidationError};
pub use limiter::RateLimiter;
pub use pagination::Pagination;
pub use query::{Domain, FilterSet, Query, QueryModel, SearchRequest, compose_query};
pub use reviews::{ReviewDesk, ReviewDraft, ReviewPayload};
pub use state::{Notify, ResultSet, SearchState};
pub use thumbs::{ThumbsBuffer, VoteBatch, VoteOutcome, VoteSink};
pub use traffic::{TrafficState, format_count};
pub use types::{AppConfig, PageSize, SearchSettings, SortBy, SortDirection};
