//! Writing reviews: draft validation and submission.

use serde::Serialize;
use std::time::Duration;

use crate::auth::Backend;
use crate::error::{Error, Result, TransportError, ValidationError};
use crate::limiter::RateLimiter;
use crate::types::domain::{HousingId, Ratings, ReviewRating};
use crate::types::{AppConfig, ReviewsConfig};
use crate::validate;

pub const REVIEW_PATH: &str = "/review";

/// Form state of a review being written. Unset ratings are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub housing: Option<HousingId>,
    pub overall_rating: Option<ReviewRating>,
    pub ratings: Ratings<Option<ReviewRating>>,
    pub description: String,
}

/// A complete review, ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewPayload {
    pub housing_id: HousingId,
    pub overall_rating: ReviewRating,
    pub ratings: Ratings<ReviewRating>,
    pub description: String,
}

impl ReviewDraft {
    /// Checks run in form order: housing, overall rating, sub-ratings,
    /// description. The first failure wins.
    pub fn validate(
        &self,
        config: &ReviewsConfig,
    ) -> std::result::Result<ReviewPayload, ValidationError> {
        let housing_id = self.housing.ok_or(ValidationError::InvalidHousing)?;
        let overall_rating = self
            .overall_rating
            .ok_or(ValidationError::InvalidOverallRating)?;

        let sub = |rating: Option<ReviewRating>| rating.ok_or(ValidationError::InvalidSubRating);
        let ratings = Ratings {
            living_conditions: sub(self.ratings.living_conditions)?,
            location: sub(self.ratings.location)?,
            amenities: sub(self.ratings.amenities)?,
            value: sub(self.ratings.value)?,
            community: sub(self.ratings.community)?,
        };

        validate::description(&self.description, config)?;

        Ok(ReviewPayload {
            housing_id,
            overall_rating,
            ratings,
            description: self.description.clone(),
        })
    }
}

/// Posts reviews and remembers which residence the next one is for.
pub struct ReviewDesk<B: Backend> {
    backend: B,
    housing: Option<HousingId>,
    post_error: String,
    limiter: RateLimiter,
    cooldown: Duration,
    config: ReviewsConfig,
    error_max_chars: usize,
}

impl<B: Backend> ReviewDesk<B> {
    pub fn new(backend: B, config: &AppConfig) -> Self {
        Self {
            backend,
            housing: None,
            post_error: String::new(),
            limiter: RateLimiter::new(),
            cooldown: config.limits.post_cooldown(),
            config: config.reviews.clone(),
            error_max_chars: config.account.error_max_chars,
        }
    }

    pub fn housing(&self) -> Option<HousingId> {
        self.housing
    }

    /// Remembers the residence a review is being written for.
    pub fn prefill(&mut self, housing: HousingId) {
        self.housing = Some(housing);
    }

    /// An empty draft for the prefilled residence.
    pub fn draft(&self) -> ReviewDraft {
        ReviewDraft {
            housing: self.housing,
            ..ReviewDraft::default()
        }
    }

    pub fn post_error(&self) -> &str {
        &self.post_error
    }

    pub fn is_limited(&self) -> bool {
        self.limiter.is_limited()
    }

    pub async fn submit(&mut self, draft: &ReviewDraft) -> Result<ReviewPayload> {
        if self.limiter.is_limited() {
            return Err(Error::Limited);
        }

        let payload = draft.validate(&self.config).map_err(|err| {
            self.post_error = err.to_string();
            Error::Validation(err)
        })?;

        let body = serde_json::to_value(&payload)
            .map_err(|err| Error::Transport(TransportError::Client(err.to_string())))?;

        self.limiter.engage(self.cooldown);
        if let Err(err) = self.backend.post_json(REVIEW_PATH, &body).await {
            tracing::warn!("posting review for {} failed: {err}", payload.housing_id);
            self.post_error = err.user_message(self.error_max_chars);
            return Err(Error::Transport(err));
        }

        tracing::info!("posted review for {}", payload.housing_id);
        self.post_error.clear();
        Ok(payload)
    }
}

#[cfg(test)]
mod tests;
