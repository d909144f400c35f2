use std::sync::Arc;

use admin_console::api::memory::InMemoryApi;
use admin_console::api::ApiError;
use admin_console::controller::ListController;
use admin_console::domain::user::{User, UserStatus};
use admin_console::pagination::{ListResult, PageControl};

mod common;

use common::{GatedListSource, make_users, wait_until};

fn seeded(n: usize) -> ListController<User, Arc<InMemoryApi>> {
    ListController::new(Arc::new(InMemoryApi::default().with_users(make_users(n))))
}

#[tokio::test]
async fn twenty_three_records_paginate_into_three_pages() {
    let list = seeded(23);
    list.refresh().await;

    let result = list.result().unwrap();
    assert_eq!(result.total, 23);
    assert_eq!(result.pages, 3);
    assert_eq!(result.items.len(), 10);

    list.go_to_page(3).await;
    let result = list.result().unwrap();
    assert_eq!(result.page, 3);
    assert_eq!(result.items.len(), 3);

    // out-of-range navigation is ignored in both directions
    list.go_to_page(4).await;
    assert_eq!(list.result().unwrap().page, 3);
    assert_eq!(list.query().page, 3);
    list.go_to_page(0).await;
    assert_eq!(list.query().page, 3);
}

#[tokio::test]
async fn navigation_is_ignored_before_the_first_load() {
    let list = seeded(23);
    list.go_to_page(2).await;
    assert_eq!(list.query().page, 1);
    assert!(list.result().is_none());
    assert_eq!(
        list.page_controls(),
        vec![
            PageControl::Prev { disabled: true },
            PageControl::Next { disabled: true },
        ]
    );
}

#[tokio::test]
async fn search_term_resets_page_without_fetching() {
    let list = seeded(60);
    list.refresh().await;
    list.go_to_page(5).await;
    assert_eq!(list.result().unwrap().page, 5);

    list.set_search_term("user_07");
    let query = list.query();
    assert_eq!(query.page, 1);
    assert_eq!(query.search, "user_07");
    // no fetch until the search is committed; the old page stays visible
    assert_eq!(list.result().unwrap().page, 5);
    assert!(!list.is_loading());

    list.commit_search().await;
    let result = list.result().unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.items[0].username, "user_07");
}

#[tokio::test]
async fn page_navigation_keeps_the_search_term() {
    let list = seeded(60);
    list.refresh().await;
    list.set_search_term("user");
    list.commit_search().await;
    assert_eq!(list.result().unwrap().pages, 6);

    list.go_to_page(3).await;
    let query = list.query();
    assert_eq!(query.page, 3);
    assert_eq!(query.search, "user");
}

#[tokio::test]
async fn filter_change_resets_page_and_applies() {
    let list = seeded(60);
    list.refresh().await;
    list.go_to_page(2).await;

    list.set_filter(Some("inactive".to_string())).await;
    let query = list.query();
    assert_eq!(query.page, 1);
    assert_eq!(query.filter.as_deref(), Some("inactive"));

    let result = list.result().unwrap();
    assert_eq!(result.total, 20);
    assert!(result.items.iter().all(|u| u.status == UserStatus::Inactive));
}

#[tokio::test]
async fn unsupported_page_sizes_are_ignored() {
    let list = seeded(60);
    list.refresh().await;

    list.set_page_size(25).await;
    let result = list.result().unwrap();
    assert_eq!(result.per_page, 25);
    assert_eq!(result.items.len(), 25);
    assert_eq!(result.pages, 3);

    list.set_page_size(7).await;
    assert_eq!(list.query().per_page, 25);
}

#[tokio::test]
async fn window_shifts_with_the_current_page() {
    let list = seeded(60);
    list.refresh().await;

    let pages: Vec<usize> = list
        .page_controls()
        .iter()
        .filter_map(|c| match c {
            PageControl::Page { number, .. } => Some(*number),
            _ => None,
        })
        .collect();
    assert_eq!(pages, vec![1, 2, 3, 4, 5]);

    list.go_to_page(6).await;
    let pages: Vec<usize> = list
        .page_controls()
        .iter()
        .filter_map(|c| match c {
            PageControl::Page { number, .. } => Some(*number),
            _ => None,
        })
        .collect();
    assert_eq!(pages, vec![2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn last_request_wins_commits_only_the_newest_response() {
    let source = GatedListSource::<String>::new();
    let list = Arc::new(ListController::new(source.clone()));

    list.set_search_term("alpha");
    let first = tokio::spawn({
        let list = list.clone();
        async move { list.commit_search().await }
    });
    wait_until(|| source.pending_count() == 1).await;

    list.set_search_term("beta");
    let second = tokio::spawn({
        let list = list.clone();
        async move { list.commit_search().await }
    });
    wait_until(|| source.pending_count() == 2).await;

    assert_eq!(source.query_at(0).search, "alpha");
    assert_eq!(source.query_at(1).search, "beta");

    // the newest response lands first; the stale one arrives afterwards
    source.release(1, Ok(ListResult::new(vec!["beta-item".to_string()], 1, 10, 1)));
    source.release(0, Ok(ListResult::new(vec!["alpha-item".to_string()], 1, 10, 1)));

    second.await.unwrap();
    first.await.unwrap();

    let result = list.result().unwrap();
    assert_eq!(result.items, vec!["beta-item".to_string()]);
    assert!(!list.is_loading());
    assert!(list.error().is_none());
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_result() {
    let source = GatedListSource::<String>::new();
    let list = Arc::new(ListController::new(source.clone()));

    let load = tokio::spawn({
        let list = list.clone();
        async move { list.refresh().await }
    });
    wait_until(|| source.pending_count() == 1).await;
    source.release(0, Ok(ListResult::new(vec!["kept".to_string()], 1, 10, 1)));
    load.await.unwrap();
    assert_eq!(list.result().unwrap().items, vec!["kept".to_string()]);

    let retry = tokio::spawn({
        let list = list.clone();
        async move { list.refresh().await }
    });
    wait_until(|| source.pending_count() == 1).await;
    assert!(list.is_loading());
    source.release(0, Err(ApiError::Status(502)));
    retry.await.unwrap();

    let result = list.result().unwrap();
    assert_eq!(result.items, vec!["kept".to_string()]);
    assert_eq!(list.error(), Some(ApiError::Status(502)));
    assert!(!list.is_loading());
}
