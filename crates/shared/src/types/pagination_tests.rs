use super::*;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_page_request_default() {
    let request = PageRequest::default();
    assert_eq!(request.page_number, 1);
    assert_eq!(request.page_size, 10);
}

#[rstest]
#[case(1, 1)]
#[case(5, 5)]
#[case(10, 10)]
#[case(11, 10)]
#[case(50, 10)]
#[case(0, 10)]
#[case(-3, 10)]
fn test_page_size_is_clamped(#[case] requested: i64, #[case] expected: u64) {
    assert_eq!(PageRequest::new(1, requested).effective_page_size(), expected);
}

#[test]
fn test_page_request_skip() {
    assert_eq!(PageRequest::new(1, 10).skip(), 0);
    assert_eq!(PageRequest::new(2, 10).skip(), 10);
    assert_eq!(PageRequest::new(3, 4).skip(), 8);
    // Clamped page size drives the offset.
    assert_eq!(PageRequest::new(2, 50).skip(), 10);
}

#[test]
fn test_page_number_validity() {
    assert!(PageRequest::new(1, 10).has_valid_page_number());
    assert!(!PageRequest::new(0, 10).has_valid_page_number());
    assert!(!PageRequest::new(-1, 10).has_valid_page_number());
}

#[test]
fn test_page_request_deserializes_camel_case_with_defaults() {
    let request: PageRequest = serde_json::from_str(r#"{"pageNumber": 3}"#).unwrap();
    assert_eq!(request, PageRequest::new(3, 10));
}

#[test]
fn test_paged_result_new() {
    let result = PagedResult::new(vec![1, 2, 3], 1, 10, 3);

    assert_eq!(result.items, vec![1, 2, 3]);
    assert_eq!(result.page_number, 1);
    assert_eq!(result.page_size, 10);
    assert_eq!(result.total_count, 3);
    assert_eq!(result.total_pages, 1);
}

#[test]
fn test_paged_result_pagination() {
    // 25 items, 10 per page -> 3 pages
    let result: PagedResult<i32> = PagedResult::new(vec![], 1, 10, 25);
    assert_eq!(result.total_pages, 3);
}

#[test]
fn test_paged_result_empty_has_no_pages() {
    let result: PagedResult<i32> = PagedResult::new(vec![], 1, 10, 0);
    assert_eq!(result.total_pages, 0);
}

#[test]
fn test_paged_result_serializes_camel_case() {
    let json = serde_json::to_value(PagedResult::new(vec!["a"], 2, 10, 11)).unwrap();
    assert_eq!(json["pageNumber"], 2);
    assert_eq!(json["pageSize"], 10);
    assert_eq!(json["totalCount"], 11);
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["items"][0], "a");
}

#[test]
fn test_paged_result_map_keeps_metadata() {
    let result = PagedResult::new(vec![1, 2], 1, 2, 5).map(|n| n * 10);
    assert_eq!(result.items, vec![10, 20]);
    assert_eq!(result.total_pages, 3);
}

proptest! {
    /// total_pages * page_size covers every item, and one page fewer does not.
    #[test]
    fn test_total_pages_is_ceiling(total in 0u64..10_000, size in 1u64..=10) {
        let result: PagedResult<()> = PagedResult::new(vec![], 1, size, total);
        prop_assert!(result.total_pages * size >= total);
        if total > 0 {
            prop_assert!((result.total_pages - 1) * size < total);
        } else {
            prop_assert_eq!(result.total_pages, 0);
        }
    }

    /// Any requested size ends up inside 1..=10.
    #[test]
    fn test_effective_page_size_in_range(size in any::<i64>()) {
        let effective = PageRequest::new(1, size).effective_page_size();
        prop_assert!((1..=MAX_PAGE_SIZE).contains(&effective));
    }
}
