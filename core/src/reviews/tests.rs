use super::*;
use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;

mod common {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub(super) struct MockBackend {
        pub(super) posted: Arc<Mutex<Vec<(String, Value)>>>,
        pub(super) status: Option<u16>,
    }

    #[async_trait]
    impl Backend for MockBackend {
        async fn post_json(
            &self,
            path: &str,
            body: &Value,
        ) -> std::result::Result<(), TransportError> {
            self.posted
                .lock()
                .unwrap()
                .push((path.to_string(), body.clone()));
            match self.status {
                Some(status) => Err(TransportError::Status {
                    status,
                    body: "review rejected by moderation filter, please edit".to_string(),
                }),
                None => Ok(()),
            }
        }

        async fn post(&self, _path: &str) -> std::result::Result<(), TransportError> {
            Ok(())
        }

        async fn delete(&self, _path: &str) -> std::result::Result<(), TransportError> {
            Ok(())
        }
    }

    pub(super) fn complete_draft() -> ReviewDraft {
        ReviewDraft {
            housing: Some(HousingId::Owen),
            overall_rating: Some(ReviewRating::Four),
            ratings: Ratings {
                living_conditions: Some(ReviewRating::Four),
                location: Some(ReviewRating::Five),
                amenities: Some(ReviewRating::Three),
                value: Some(ReviewRating::Four),
                community: Some(ReviewRating::Two),
            },
            description: "Quiet floors, slow laundry.".to_string(),
        }
    }
}

mod validate {
    use super::common::complete_draft;
    use super::*;

    #[test]
    fn test_complete_draft_becomes_payload() {
        let payload = complete_draft().validate(&ReviewsConfig::default()).unwrap();

        assert_eq!(payload.housing_id, HousingId::Owen);
        assert_eq!(payload.ratings.location, ReviewRating::Five);
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = complete_draft().validate(&ReviewsConfig::default()).unwrap();

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["housing_id"], "owen");
        assert_eq!(value["overall_rating"], 400);
        assert_eq!(value["ratings"]["community"], 200);
    }

    #[test]
    fn test_first_failure_wins() {
        let draft = ReviewDraft {
            housing: None,
            overall_rating: None,
            ..complete_draft()
        };

        assert_eq!(
            draft.validate(&ReviewsConfig::default()),
            Err(ValidationError::InvalidHousing)
        );
    }

    #[test]
    fn test_missing_ratings() {
        let config = ReviewsConfig::default();

        let no_overall = ReviewDraft {
            overall_rating: None,
            ..complete_draft()
        };
        assert_eq!(
            no_overall.validate(&config),
            Err(ValidationError::InvalidOverallRating)
        );

        let mut no_sub = complete_draft();
        no_sub.ratings.value = None;
        assert_eq!(no_sub.validate(&config), Err(ValidationError::InvalidSubRating));
    }

    #[test]
    fn test_description_bounds() {
        let draft = ReviewDraft {
            description: "Too short".to_string(),
            ..complete_draft()
        };

        let err = draft.validate(&ReviewsConfig::default()).unwrap_err();

        assert_eq!(err.to_string(), "Invalid description");
    }
}

mod submit {
    use super::common::{MockBackend, complete_draft};
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_posts_payload() {
        let backend = MockBackend::default();
        let mut desk = ReviewDesk::new(backend.clone(), &AppConfig::default());

        desk.submit(&complete_draft()).await.unwrap();

        let posted = backend.posted.lock().unwrap().clone();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].0, REVIEW_PATH);
        assert_eq!(posted[0].1["description"], "Quiet floors, slow laundry.");
        assert!(desk.is_limited());
        assert_eq!(desk.post_error(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_prefilled_draft_needs_ratings() {
        let mut desk = ReviewDesk::new(MockBackend::default(), &AppConfig::default());
        desk.prefill(HousingId::Tarkington);

        let draft = desk.draft();
        assert_eq!(draft.housing, Some(HousingId::Tarkington));

        desk.submit(&draft).await.unwrap_err();
        assert_eq!(desk.post_error(), "Invalid overall rating");
        assert!(!desk.is_limited());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_within_cooldown_dropped() {
        let backend = MockBackend::default();
        let mut desk = ReviewDesk::new(backend.clone(), &AppConfig::default());
        desk.submit(&complete_draft()).await.unwrap();

        let err = desk.submit(&complete_draft()).await.unwrap_err();
        assert!(matches!(err, Error::Limited));

        tokio::time::advance(AppConfig::default().limits.post_cooldown()).await;
        desk.submit(&complete_draft()).await.unwrap();
        assert_eq!(backend.posted.lock().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejection_truncated_into_post_error() {
        let backend = MockBackend {
            status: Some(400),
            ..MockBackend::default()
        };
        let mut desk = ReviewDesk::new(backend, &AppConfig::default());

        desk.submit(&complete_draft()).await.unwrap_err();

        assert_eq!(
            desk.post_error(),
            "review rejected by moderation filter, please edit"
        );
    }
}
