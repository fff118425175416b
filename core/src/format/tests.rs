use super::*;

mod ratings {
    use super::*;

    #[test]
    fn test_base5_clamped() {
        assert_eq!(rating_to_base5(420), 4.2);
        assert_eq!(rating_to_base5(0), 0.0);
        assert_eq!(rating_to_base5(900), 5.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(housing_rating_label(420), "4.20");
        assert_eq!(housing_rating_label(500), "5.00");
        assert_eq!(review_rating_label(400), "4");
        assert_eq!(review_rating_label(250), "3");
    }

    #[test]
    fn test_stars_to_rating() {
        assert_eq!(stars_to_rating(0), None);
        assert_eq!(stars_to_rating(3), Some(ReviewRating::Three));
        assert_eq!(stars_to_rating(9), Some(ReviewRating::Five));
    }
}

mod cost {
    use super::*;

    #[test]
    fn test_single_cost() {
        assert_eq!(cost_label(8, 8), "Around $8,000 per year");
    }

    #[test]
    fn test_range_ordered_and_clamped() {
        assert_eq!(cost_label(10, 8), "Around $8,000 - $10,000 per year");
        assert_eq!(cost_label(0, 12), "Around $1,000 - $12,000 per year");
    }
}

mod walk_link {
    use super::*;

    #[test]
    fn test_origin_is_encoded() {
        let link = super::walk_link("1131 3rd Street, West Lafayette");

        assert_eq!(
            link,
            "https://www.google.com/maps/dir/?api=1&origin=1131%203rd%20Street%2C%20West%20Lafayette&destination=WALC,+West+Lafayette,+IN&travelmode=walking"
        );
    }

    #[test]
    fn test_unreserved_marks_kept() {
        assert!(super::walk_link("O'Neil (Apt. 2)").contains("origin=O'Neil%20(Apt.%202)&"));
    }
}

mod dates {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_both_shapes() {
        assert_eq!(parse_date("2025-03-14"), Some(date(2025, 3, 14)));
        assert_eq!(parse_date("2025-03-14T08:30:00Z"), Some(date(2025, 3, 14)));
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_review_date_label() {
        assert_eq!(
            review_date_label("2025-03-14").as_deref(),
            Some("March 2025")
        );
    }

    #[test]
    fn test_expiry_colors() {
        let today = date(2025, 4, 1);

        assert_eq!(
            expiry_label(today, today),
            ("Expires today!".to_string(), ExpirationColor::Red)
        );
        assert_eq!(
            expiry_label(date(2025, 4, 2), today),
            ("Expires tommorow!".to_string(), ExpirationColor::Yellow)
        );
        assert_eq!(
            expiry_label(date(2025, 4, 11), today),
            ("Expires in 10 days.".to_string(), ExpirationColor::Green)
        );
    }

    #[test]
    fn test_past_dates_read_as_today() {
        let (label, color) = expiry_label(date(2025, 3, 1), date(2025, 4, 1));

        assert_eq!(label, "Expires today!");
        assert_eq!(color.as_str(), "red");
    }
}
