use super::*;

mod common {
    use super::*;

    pub(super) fn paged(page_size: usize, total_hits: usize) -> Pagination {
        let mut pagination = Pagination::new(PageSize::try_new(page_size).unwrap());
        pagination.set_total_hits(total_hits);
        pagination
    }
}

mod set_offset {
    use super::common::paged;

    #[test]
    fn test_clamps_past_last_page() {
        let mut pagination = paged(10, 25);

        pagination.set_offset(30);

        assert_eq!(pagination.offset(), 20);
    }

    #[test]
    fn test_aligns_to_page_boundary() {
        let mut pagination = paged(10, 95);

        pagination.set_offset(37);

        assert_eq!(pagination.offset(), 30);
    }

    #[test]
    fn test_pinned_at_zero_without_hits() {
        let mut pagination = paged(10, 0);

        pagination.set_offset(50);

        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.last_page_start(), 0);
    }

    #[test]
    fn test_result_always_in_range() {
        for page_size in [1, 3, 10, 12] {
            for total_hits in [0, 1, 9, 10, 11, 25, 100] {
                for requested in [0, 1, 5, 10, 24, 25, 99, 1000] {
                    let mut pagination = paged(page_size, total_hits);
                    pagination.set_offset(requested);

                    let last = (total_hits / page_size) * page_size;
                    assert!(pagination.offset() <= last);
                    assert_eq!(pagination.offset() % page_size, 0);
                }
            }
        }
    }
}

mod increment_decrement {
    use super::common::paged;

    #[test]
    fn test_walkthrough_from_last_page() {
        let mut pagination = paged(10, 25);
        pagination.set_offset(30);
        assert_eq!(pagination.offset(), 20);

        pagination.increment();
        assert_eq!(pagination.offset(), 20);

        pagination.decrement();
        assert_eq!(pagination.offset(), 10);
        pagination.decrement();
        assert_eq!(pagination.offset(), 0);
        pagination.decrement();
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn test_increment_then_decrement_round_trips() {
        let mut pagination = paged(10, 100);
        pagination.set_offset(40);

        pagination.increment();
        assert_eq!(pagination.offset(), 50);
        pagination.decrement();

        assert_eq!(pagination.offset(), 40);
    }

    #[test]
    fn test_page_numbers() {
        let mut pagination = paged(10, 25);
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.last_page(), 3);
        assert!(pagination.has_next());
        assert!(!pagination.has_previous());

        pagination.increment();
        pagination.increment();

        assert_eq!(pagination.current_page(), 3);
        assert!(!pagination.has_next());
        assert!(pagination.has_previous());
    }
}

mod set_total_hits {
    use super::common::paged;

    #[test]
    fn test_shrinking_results_pull_offset_back() {
        let mut pagination = paged(10, 100);
        pagination.set_offset(80);

        pagination.set_total_hits(15);

        assert_eq!(pagination.offset(), 10);
    }

    #[test]
    fn test_growing_results_keep_offset() {
        let mut pagination = paged(10, 30);
        pagination.set_offset(20);

        pagination.set_total_hits(300);

        assert_eq!(pagination.offset(), 20);
    }
}
