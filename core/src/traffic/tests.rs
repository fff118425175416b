use super::*;
use crate::types::domain::Website;

mod common {
    use super::*;

    pub(super) fn bar(website: Website, visitors: u64) -> ChartData {
        ChartData {
            website,
            visitors,
            color: "red".to_string(),
        }
    }
}

mod set_data {
    use super::common::bar;
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_sorted_by_visitors_descending() {
        let mut state = TrafficState::new();

        state.set_data(vec![
            bar(Website::Home, 600),
            bar(Website::BoilerSwap, 1250),
            bar(Website::Voting, 700),
            bar(Website::BoilerCuts, 980),
        ]);

        let order: Vec<_> = state.data().iter().map(|d| d.website).collect();
        assert_eq!(
            order,
            vec![
                Website::BoilerSwap,
                Website::BoilerCuts,
                Website::Voting,
                Website::Home
            ]
        );
    }

    #[test]
    fn test_ties_keep_backend_order() {
        let mut state = TrafficState::new();

        state.set_data(vec![
            bar(Website::Voting, 10),
            bar(Website::Home, 10),
            bar(Website::BoilerCuts, 20),
        ]);

        let order: Vec<_> = state.data().iter().map(|d| d.website).collect();
        assert_eq!(order, vec![Website::BoilerCuts, Website::Voting, Website::Home]);
    }

    #[test]
    fn test_replaces_previous_data_and_notifies() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut state = TrafficState::new().with_notify(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        state.set_data(vec![bar(Website::Home, 1), bar(Website::Voting, 2)]);
        state.set_data(vec![bar(Website::BoilerSwap, 5)]);

        assert_eq!(state.data(), &[bar(Website::BoilerSwap, 5)]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_decodes_backend_payload() {
        let payload = r#"[{"website":"BoilerCuts","visitors":980,"color":"blue"}]"#;

        let data: Vec<ChartData> = serde_json::from_str(payload).unwrap();

        assert_eq!(data[0].website, Website::BoilerCuts);
        assert_eq!(data[0].visitors, 980);
        assert_eq!(data[0].color, "blue");
    }
}

mod format_count {
    use super::*;

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(999_999), "1000.0K");
        assert_eq!(format_count(1_000_000), "1.0M");
        assert_eq!(format_count(1_000_000_000), "1.0B");
    }

    #[test]
    fn test_one_decimal_rounded_half_up() {
        assert_eq!(format_count(1_234), "1.2K");
        assert_eq!(format_count(1_250), "1.3K");
        assert_eq!(format_count(3_449_999), "3.4M");
        assert_eq!(format_count(5_600_000_000), "5.6B");
    }

    #[test]
    fn test_largest_count() {
        assert_eq!(format_count(u64::MAX), "18446744073.7B");
    }
}
