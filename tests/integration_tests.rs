//! Integration tests
//!
//! Tests the full flow: request → PaginationQuery → data slice → envelope,
//! both through the library API and through the demo HTTP router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use pagy::cli::{router, ServerConfig};
use pagy::{
    default_pagination_response, load_config_from_str, pagination_from_request,
    paginated_response, Extractor, PaginationQuery, PaginationResponse, RawQuery, SortDirection,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;
use url::Url;

// ============================================================================
// Library Flow Tests
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct User {
    id: u32,
    first_name: String,
}

fn users(count: u32) -> Vec<User> {
    (1..=count)
        .map(|id| User {
            id,
            first_name: format!("user{id:03}"),
        })
        .collect()
}

/// Stand-in for a data store: order by first_name, then offset/limit
fn fetch_page(rows: &[User], query: &PaginationQuery) -> Vec<User> {
    let mut rows = rows.to_vec();
    rows.sort_by(|a, b| a.first_name.cmp(&b.first_name));
    if query.order_dir() == SortDirection::Desc {
        rows.reverse();
    }
    rows.into_iter()
        .skip(query.offset() as usize)
        .take(query.limit() as usize)
        .collect()
}

#[test]
fn test_end_to_end_from_url() {
    let url = Url::parse("https://api.example.com/users?page=1&size=10&orderBy=first_name&orderDir=desc")
        .unwrap();

    let query = pagination_from_request(&url).unwrap();
    assert_eq!(query.page(), 1);
    assert_eq!(query.size(), 10);
    assert_eq!(query.order_by(), "first_name DESC");

    let all = users(150);
    let page = fetch_page(&all, &query);
    let response = paginated_response(all.len() as i64, &query, page);

    assert_eq!(response.total_count, 150);
    assert_eq!(response.total_pages, 15);
    assert!(response.has_more);
    assert_eq!(response.len(), 10);
    assert_eq!(response.values[0].first_name, "user150");
}

#[test]
fn test_last_page() {
    let query = pagination_from_request(&RawQuery("page=15&size=10")).unwrap();
    let all = users(150);
    let response = paginated_response(150, &query, fetch_page(&all, &query));

    assert!(!response.has_more);
    assert_eq!(response.values.first().unwrap().id, 141);
    assert_eq!(response.values.last().unwrap().id, 150);
}

#[test]
fn test_no_results_short_circuit() {
    let query = pagination_from_request(&RawQuery("page=1&size=10")).unwrap();
    let response: PaginationResponse<User> = default_pagination_response(&query);

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "total_count": 0,
            "total_pages": 0,
            "page": 1,
            "size": 10,
            "has_more": false,
            "values": []
        })
    );
}

#[test]
fn test_configured_extractor() {
    let config = load_config_from_str(
        r#"
default_size: 3
default_order_field: first_name
params:
  size_param: limit
"#,
    )
    .unwrap();
    let extractor = Extractor::new(config);

    let query = extractor.extract(&RawQuery("page=2")).unwrap();
    assert_eq!(query.order_by(), "first_name ASC");
    assert_eq!(query.offset(), 3);

    let ids: Vec<u32> = fetch_page(&users(10), &query).iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![4, 5, 6]);
}

// ============================================================================
// HTTP Router Tests
// ============================================================================

async fn get_json(uri: &str, items: usize) -> (StatusCode, Value) {
    let app = router(ServerConfig {
        extractor: Extractor::default(),
        items,
    });

    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json("/health", 0).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_query_endpoint() {
    let (status, body) = get_json("/query?page=3&size=10&orderBy=first_name&orderDir=DESC", 0).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": {
                "page": 3,
                "size": 10,
                "offset": 20,
                "limit": 10,
                "order_by": "first_name DESC",
                "query_string": "page=3&size=10&orderBy=first_name DESC"
            }
        })
    );
}

#[tokio::test]
async fn test_items_endpoint() {
    let (status, body) = get_json("/items?page=2&size=4&orderDir=desc", 10).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["total_count"], 10);
    assert_eq!(data["total_pages"], 3);
    assert_eq!(data["page"], 2);
    assert_eq!(data["size"], 4);
    assert_eq!(data["has_more"], false);
    assert_eq!(
        data["values"],
        json!([
            {"id": 6, "name": "item-6"},
            {"id": 5, "name": "item-5"},
            {"id": 4, "name": "item-4"},
            {"id": 3, "name": "item-3"}
        ])
    );
}

#[tokio::test]
async fn test_items_endpoint_empty() {
    let (status, body) = get_json("/items", 0).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["values"], json!([]));
    assert_eq!(body["data"]["total_pages"], 0);
}

#[tokio::test]
async fn test_malformed_page_is_bad_request() {
    let (status, body) = get_json("/items?page=two", 10).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("'page'"));
    assert!(body.get("data").is_none());
}
