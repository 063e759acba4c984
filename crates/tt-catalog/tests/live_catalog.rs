//! # Live tests for tt-catalog
//!
//! These talk to the real demo API. They are skipped (not failed) unless
//! `TECHTRACK_LIVE_CATALOG=1` is set, so offline CI stays green.
//!
//! ```bash
//! TECHTRACK_LIVE_CATALOG=1 cargo test -p tt-catalog --test live_catalog -- --nocapture
//! ```

use std::sync::Arc;
use std::time::Duration;

use tt_catalog::{CatalogClient, LatestRequest};
use tt_config::CatalogConfig;

fn live_client() -> Option<CatalogClient> {
    if std::env::var("TECHTRACK_LIVE_CATALOG").as_deref() != Ok("1") {
        eprintln!("skipping: TECHTRACK_LIVE_CATALOG is not set");
        return None;
    }
    Some(CatalogClient::new(&CatalogConfig::default()).expect("client should build"))
}

#[tokio::test]
async fn first_page_respects_page_size() {
    let Some(client) = live_client() else {
        return;
    };
    let items = client.fetch_page(client.page_size()).await.expect("page");
    assert!(!items.is_empty());
    assert!(items.len() <= client.page_size() as usize);
    assert!(items.iter().all(|item| !item.brand.is_empty()));
}

#[tokio::test]
async fn search_finds_phones() {
    let Some(client) = live_client() else {
        return;
    };
    let items = client.search("phone", 5).await.expect("search");
    assert!(!items.is_empty());
}

#[tokio::test]
async fn resources_are_unique_links() {
    let Some(client) = live_client() else {
        return;
    };
    let links = client.load_resources(1).await.expect("resources");
    let mut deduped = links.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), links.len());
}

#[tokio::test]
async fn roadmap_is_normalized() {
    let Some(client) = live_client() else {
        return;
    };
    let entries = client.fetch_roadmap().await.expect("roadmap");
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|entry| !entry.title.is_empty()));
}

#[tokio::test]
async fn debounced_search_settles_once() {
    let Some(client) = live_client() else {
        return;
    };
    let mut register = LatestRequest::new(Arc::new(client), Duration::from_millis(50));
    register.issue("lap");
    register.issue("laptop");
    let outcome = register.next_outcome().await.expect("outcome");
    assert_eq!(outcome.query, "laptop");
    assert!(outcome.result.is_ok());
}
