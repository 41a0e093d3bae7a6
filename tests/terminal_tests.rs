//! Integration tests for the order workflow and display panels.
//!
//! These run against an httpmock venue, so they cover the full path from
//! form coercion through the HTTP transport to the rendered output.
//!
//! Run with: cargo test --test terminal_tests

use std::sync::Once;

use httpmock::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use tradevenue_rs::prelude::*;
use tradevenue_rs::terminal::{RecordingSink, ORDER_ID_PROMPT};

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Build a client pointed at the mock venue.
fn mock_client(server: &MockServer) -> VenueClient {
    init_logging();
    VenueClient::new(
        ClientConfig::default().with_base_url(format!("{}/api/v1", server.base_url())),
    )
    .expect("client should build against mock venue")
}

fn filled_draft(draft: &mut OrderDraft) {
    draft.symbol = "AAPL".to_string();
    draft.side = "BUY".to_string();
    draft.order_type = "LIMIT".to_string();
    draft.quantity = "10".to_string();
    draft.price = "150.5".to_string();
}

#[tokio::test]
async fn submit_success_clears_form_and_renders_ack() {
    let server = MockServer::start();
    let ack = json!({"orderId": 1, "status": "EXECUTED"});
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/orders").json_body(json!({
            "symbol": "AAPL",
            "side": "BUY",
            "orderType": "LIMIT",
            "quantity": 10,
            "price": 150.5,
        }));
        then.status(200).json_body(ack.clone());
    });

    let client = mock_client(&server);
    let sink = RecordingSink::new();
    let mut panel = SubmitPanel::new(&client, sink.clone());
    filled_draft(panel.draft_mut());

    let result = panel.submit().await.expect("submission should succeed");

    mock.assert();
    assert_eq!(result, ack);
    assert!(panel.draft().is_empty(), "form must reset after success");
    assert_eq!(
        sink.last().as_deref(),
        Some(serde_json::to_string_pretty(&ack).unwrap().as_str())
    );
    assert_eq!(sink.frames()[0], "Submitting...");
}

#[tokio::test]
async fn submit_failure_preserves_form_and_renders_error_body() {
    let server = MockServer::start();
    let error_body = json!({"detail": "Insufficient holdings to sell"});
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/orders");
        then.status(400).json_body(error_body.clone());
    });

    let client = mock_client(&server);
    let sink = RecordingSink::new();
    let mut panel = SubmitPanel::new(&client, sink.clone());
    filled_draft(panel.draft_mut());
    let before = panel.draft().clone();

    let err = panel.submit().await.expect_err("venue rejected the order");

    mock.assert();
    assert!(err.is_venue_error());
    assert_eq!(err.status(), Some(400));
    assert_eq!(panel.draft(), &before, "form must survive a rejection");
    assert_eq!(
        sink.last().as_deref(),
        Some(serde_json::to_string_pretty(&error_body).unwrap().as_str())
    );
}

#[tokio::test]
async fn empty_price_field_omits_price_key() {
    let server = MockServer::start();
    // Exact-body match: a payload carrying any `price` key will not hit.
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/orders").json_body(json!({
            "symbol": "MSFT",
            "side": "SELL",
            "orderType": "MARKET",
            "quantity": 3,
        }));
        then.status(200).json_body(json!({"orderId": 2, "status": "EXECUTED"}));
    });

    let client = mock_client(&server);
    let mut panel = SubmitPanel::new(&client, RecordingSink::new());
    let draft = panel.draft_mut();
    draft.symbol = "MSFT".to_string();
    draft.side = "SELL".to_string();
    draft.order_type = "MARKET".to_string();
    draft.quantity = "3".to_string();

    panel.submit().await.expect("submission should succeed");
    mock.assert();
}

#[tokio::test]
async fn transport_failure_is_rendered_not_swallowed() {
    // Nothing listens on port 1; the request fails at the socket.
    let client = VenueClient::new(
        ClientConfig::default().with_base_url("http://127.0.0.1:1/api/v1"),
    )
    .unwrap();

    let sink = RecordingSink::new();
    let mut panel = SubmitPanel::new(&client, sink.clone());
    filled_draft(panel.draft_mut());

    let err = panel.submit().await.expect_err("no venue is listening");
    assert!(!err.is_venue_error());
    let last = sink.last().expect("failure must reach the sink");
    assert!(last.starts_with("Request failed: "), "got: {last}");
}

#[tokio::test]
async fn blank_order_id_issues_no_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path_contains("/api/v1/orders");
        then.status(200).json_body(json!({}));
    });

    let client = mock_client(&server);
    let sink = RecordingSink::new();
    let panel = StatusPanel::new(&client, sink.clone());

    let result = panel.check("").await.unwrap();
    assert!(result.is_none());
    let result = panel.check("   ").await.unwrap();
    assert!(result.is_none());

    mock.assert_hits(0);
    assert_eq!(sink.frames(), vec![ORDER_ID_PROMPT, ORDER_ID_PROMPT]);
}

#[tokio::test]
async fn status_check_fetches_and_renders_record_verbatim() {
    let server = MockServer::start();
    let record = json!({
        "orderId": 42,
        "symbol": "AAPL",
        "status": "EXECUTED",
        "executedPrice": 190.25,
    });
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/orders/ORD-42");
        then.status(200).json_body(record.clone());
    });

    let client = mock_client(&server);
    let sink = RecordingSink::new();
    let panel = StatusPanel::new(&client, sink.clone());

    let result = panel.check("ORD-42").await.unwrap();

    mock.assert();
    assert_eq!(result, Some(record.clone()));
    assert_eq!(sink.frames()[0], "Loading...");
    assert_eq!(
        sink.last().as_deref(),
        Some(serde_json::to_string_pretty(&record).unwrap().as_str())
    );
}

#[tokio::test]
async fn status_check_renders_failure_body_through_same_path() {
    let server = MockServer::start();
    let not_found = json!({"detail": "Order not found"});
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/orders/999");
        then.status(404).json_body(not_found.clone());
    });

    let client = mock_client(&server);
    let sink = RecordingSink::new();
    let panel = StatusPanel::new(&client, sink.clone());

    // No branch on status: the body is rendered and returned either way.
    let result = panel.check("999").await.unwrap();
    assert_eq!(result, Some(not_found.clone()));
    assert_eq!(
        sink.last().as_deref(),
        Some(serde_json::to_string_pretty(&not_found).unwrap().as_str())
    );
}

#[tokio::test]
async fn repeated_status_checks_fetch_independently() {
    let server = MockServer::start();
    let record = json!({"orderId": 7, "status": "PLACED"});
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/orders/7");
        then.status(200).json_body(record.clone());
    });

    let client = mock_client(&server);
    let sink = RecordingSink::new();
    let panel = StatusPanel::new(&client, sink.clone());

    let first = panel.check("7").await.unwrap();
    let second = panel.check("7").await.unwrap();

    mock.assert_hits(2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn instruments_panel_projects_one_line_per_record() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/instruments");
        then.status(200).json_body(json!([
            {
                "symbol": "AAPL",
                "exchange": "NASDAQ",
                "instrumentType": "EQUITY",
                "lastTradedPrice": 190.2,
            },
            {
                "symbol": "TSLA",
                "exchange": "NASDAQ",
                "instrumentType": "EQUITY",
                "lastTradedPrice": 245.8,
            },
        ]));
    });

    let client = mock_client(&server);
    let sink = RecordingSink::new();
    let panel = InstrumentsPanel::new(&client, sink.clone());

    let instruments = panel.refresh().await.unwrap();

    mock.assert();
    assert_eq!(instruments.len(), 2);
    assert_eq!(
        sink.last().as_deref(),
        Some("AAPL | NASDAQ | EQUITY | LTP: 190.2\nTSLA | NASDAQ | EQUITY | LTP: 245.8")
    );
}

#[tokio::test]
async fn trades_and_portfolio_panels_render_bodies_verbatim() {
    let server = MockServer::start();
    let trades = json!([{"tradeId": 1, "symbol": "AAPL", "quantity": 10}]);
    let portfolio = json!([{"symbol": "AAPL", "quantity": 10, "averagePrice": 190.25}]);
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/trades");
        then.status(200).json_body(trades.clone());
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/portfolio");
        then.status(200).json_body(portfolio.clone());
    });

    let client = mock_client(&server);

    let trades_sink = RecordingSink::new();
    TradesPanel::new(&client, trades_sink.clone())
        .refresh()
        .await
        .unwrap();
    assert_eq!(
        trades_sink.last().as_deref(),
        Some(serde_json::to_string_pretty(&trades).unwrap().as_str())
    );

    let portfolio_sink = RecordingSink::new();
    PortfolioPanel::new(&client, portfolio_sink.clone())
        .refresh()
        .await
        .unwrap();
    assert_eq!(
        portfolio_sink.last().as_deref(),
        Some(serde_json::to_string_pretty(&portfolio).unwrap().as_str())
    );
}

#[tokio::test]
async fn read_only_panel_renders_fetch_failure() {
    let client = VenueClient::new(
        ClientConfig::default().with_base_url("http://127.0.0.1:1/api/v1"),
    )
    .unwrap();

    let sink = RecordingSink::new();
    let panel = TradesPanel::new(&client, sink.clone());

    panel.refresh().await.expect_err("no venue is listening");
    let last = sink.last().expect("failure must reach the sink");
    assert!(last.starts_with("Request failed: "), "got: {last}");
}

#[tokio::test]
async fn typed_order_round_trips_through_the_service() {
    let server = MockServer::start();
    let ack = json!({"orderId": 3, "status": "EXECUTED"});
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/orders").json_body(json!({
            "symbol": "TSLA",
            "side": "BUY",
            "orderType": "MARKET",
            "quantity": 2,
        }));
        then.status(200).json_body(ack.clone());
    });

    let client = mock_client(&server);
    let result = client
        .orders()
        .place(&NewOrder::market("TSLA", Side::Buy, 2))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(result, ack);
}
