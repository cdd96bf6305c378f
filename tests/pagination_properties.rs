// Pagination properties
//
// Page arithmetic and link shape for the length-aware paginator across a
// grid of totals and page sizes.

use pretty_assertions::assert_eq;
use serde_json::json;
use support_kit::{LengthAwarePaginator, Objectifiable, Paginator};

/// Items actually present on `page` for a data source of `total` items
fn window(total: usize, per_page: usize, page: usize) -> Vec<usize> {
    let start = (page - 1) * per_page;
    (start..total.min(start + per_page)).map(|i| i + 1).collect()
}

#[test]
fn last_page_is_ceiling_with_floor_of_one() {
    for per_page in 1..=12 {
        for total in 0..=40 {
            let paginator = LengthAwarePaginator::new(Vec::<usize>::new(), total, per_page, 1);
            let expected = total.div_ceil(per_page).max(1);
            assert_eq!(paginator.last_page(), expected, "total={total} per_page={per_page}");
        }
    }
}

#[test]
fn item_positions_match_window() {
    for per_page in 1..=7 {
        for total in 0..=20usize {
            let last = total.div_ceil(per_page).max(1);
            for page in 1..=last {
                let items = window(total, per_page, page);
                let paginator = LengthAwarePaginator::new(items.clone(), total, per_page, page);

                match (paginator.first_item(), paginator.last_item()) {
                    (None, None) => assert!(paginator.is_empty()),
                    (Some(first), Some(last_item)) => {
                        assert_eq!(last_item - first + 1, paginator.count());
                        assert_eq!(Some(&first), items.first());
                        assert_eq!(Some(&last_item), items.last());
                    }
                    other => panic!("mismatched positions {other:?}"),
                }
                assert_eq!(paginator.has_more_pages(), page < last);
            }
        }
    }
}

#[test]
fn zero_page_links_to_first_page() {
    let mut paginator = LengthAwarePaginator::new(vec![1, 2, 3], 9, 3, 2);
    paginator.set_path("/reports").add_query("year", 2024);

    assert_eq!(paginator.url(0), paginator.url(1));
    assert_eq!(paginator.url(1), "/reports?year=2024&page=1");
}

#[test]
fn custom_page_name_and_path_with_query() {
    let mut paginator = LengthAwarePaginator::new(vec!["a"], 3, 1, 2);
    paginator
        .set_path("/search?term=rust")
        .set_page_name("p")
        .add_query("p", 99)
        .add_query("sort", "desc");

    assert_eq!(paginator.previous_page_url().as_deref(), Some("/search?term=rust&sort=desc&p=1"));
    assert_eq!(paginator.next_page_url().as_deref(), Some("/search?term=rust&sort=desc&p=3"));
    assert!(paginator.has_path());
    assert!(paginator.has_query());
}

#[test]
fn object_for_single_page_result() {
    let paginator = LengthAwarePaginator::new(vec![json!({"id": 1}), json!({"id": 2})], 2, 10, 1);
    let object = serde_json::to_value(paginator.to_object()).unwrap();

    assert_eq!(
        object,
        json!({
            "current_page": 1,
            "data": [{"id": 1}, {"id": 2}],
            "first_page_url": "/?page=1",
            "from": 1,
            "last_page": 1,
            "last_page_url": "/?page=1",
            "next_page_url": null,
            "path": "/",
            "per_page": 10,
            "prev_page_url": null,
            "to": 2,
            "total": 2
        })
    );
    assert!(!paginator.has_pages());
}

#[tokio::test]
async fn transform_keeps_links_and_replaces_items() {
    let mut paginator = LengthAwarePaginator::new(vec![4_u64, 5, 6], 9, 3, 2);
    paginator.set_path("/ids");

    let paginator = paginator
        .transform(|id| async move {
            tokio::time::sleep(std::time::Duration::from_millis(10 - id)).await;
            Ok::<_, std::convert::Infallible>(id * 10)
        })
        .await
        .unwrap();

    assert_eq!(paginator.items(), &[40, 50, 60]);
    assert_eq!(paginator.url(3), "/ids?page=3");
    assert_eq!(paginator.first_item(), Some(4));
}

#[tokio::test]
async fn transform_starts_every_item_before_any_finishes() {
    let barrier = std::sync::Arc::new(tokio::sync::Barrier::new(4));
    let paginator = LengthAwarePaginator::new(vec!["a", "b", "c", "d"], 4, 4, 1);

    let outcome = tokio::time::timeout(
        std::time::Duration::from_secs(2),
        paginator.transform(|item| {
            let barrier = std::sync::Arc::clone(&barrier);
            async move {
                barrier.wait().await;
                Ok::<_, String>(item.to_uppercase())
            }
        }),
    )
    .await;

    let paginator = outcome.expect("items were transformed one at a time").unwrap();
    assert_eq!(paginator.items(), &["A", "B", "C", "D"]);
}
