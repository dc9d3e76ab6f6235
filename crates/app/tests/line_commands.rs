//! End-to-end tests for line commands
//!
//! Each test drives `handle_line` exactly as the terminal loop does, through
//! the real HTTP client, against a wiremock backend.

mod support;

use goldledger_core::{render_screen, Tab};
use goldledger_domain::LedgerError;
use goldledger_lib::{handle_line, AppContext, Reply};
use serde_json::json;
use support::{context_for, customer, job, mount_customer_detail, mount_reads, transaction};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run(ctx: &AppContext, line: &str) -> Reply {
    handle_line(ctx, line).await.unwrap_or_else(|err| panic!("'{line}' failed: {err}"))
}

#[tokio::test]
async fn test_add_customer_from_the_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customers"))
        .and(body_json(json!({ "name": "Asha", "phone": "555", "notes": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer("c1", "Asha")))
        .expect(1)
        .mount(&server)
        .await;
    mount_reads(&server, json!([customer("c1", "Asha")]), json!([]), json!([])).await;

    let (ctx, output) = context_for(&server);
    assert_eq!(run(&ctx, "tab customers").await, Reply::Screen);
    run(&ctx, "set name Asha").await;
    run(&ctx, "set phone 555").await;
    assert_eq!(run(&ctx, "submit").await, Reply::Screen);

    assert_eq!(output.text(), "[ok] Customer added successfully!\n");
    assert_eq!(ctx.console.state().customers.get().len(), 1);
    assert!(render_screen(ctx.console.state()).contains("Asha"));
}

#[tokio::test]
async fn test_incomplete_form_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (ctx, _output) = context_for(&server);
    run(&ctx, "tab customers").await;
    assert_eq!(run(&ctx, "submit").await, Reply::Text("Please fill in: name".into()));

    run(&ctx, "tab dashboard").await;
    let err = handle_line(&ctx, "submit").await.unwrap_err();
    assert!(matches!(err, LedgerError::InvalidInput(_)));
}

#[tokio::test]
async fn test_set_customer_by_row_then_create_job() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .and(body_json(json!({
            "customer_id": "c2",
            "work_description": "Chain repair",
            "status": "In Progress",
            "expected_delivery": null
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(job("j1", "c2", "Ravi", "In Progress")),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_reads(
        &server,
        json!([customer("c1", "Asha"), customer("c2", "Ravi")]),
        json!([]),
        json!([]),
    )
    .await;

    let (ctx, output) = context_for(&server);
    run(&ctx, "refresh").await;
    run(&ctx, "tab jobs").await;
    run(&ctx, "set customer 2").await;
    assert_eq!(ctx.console.state().job_form.get().draft.customer_id, "c2");
    assert!(render_screen(ctx.console.state()).contains("(Ravi)"));

    run(&ctx, "set work Chain repair").await;
    run(&ctx, "submit").await;
    assert_eq!(output.text(), "[ok] Job created successfully!\n");

    let err = handle_line(&ctx, "set customer 9").await.unwrap_err();
    assert!(matches!(err, LedgerError::InvalidInput(_)));
}

#[tokio::test]
async fn test_open_customer_and_delete_history_row() {
    let server = MockServer::start().await;
    mount_customer_detail(&server, "c1", json!([transaction("t1", "c1", "Asha")])).await;
    Mock::given(method("DELETE"))
        .and(path("/api/transactions/t1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Transaction deleted" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_reads(&server, json!([customer("c1", "Asha")]), json!([]), json!([])).await;

    let (ctx, output) = context_for(&server);
    run(&ctx, "refresh").await;
    run(&ctx, "open 1").await;

    assert_eq!(ctx.console.active_tab(), Tab::Customers);
    let screen = render_screen(ctx.console.state());
    assert!(screen.contains("Transaction History"));
    assert!(screen.contains("Ring resize"));

    run(&ctx, "delete 1").await;
    assert_eq!(output.text(), "[ok] Transaction deleted\n");

    run(&ctx, "add-transaction").await;
    assert_eq!(ctx.console.active_tab(), Tab::Transactions);
    assert_eq!(ctx.console.state().transaction_form.get().draft.customer_id, "c1");
}

#[tokio::test]
async fn test_status_change_by_row() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/jobs/j1"))
        .and(query_param("status", "Delivered"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(job("j1", "c1", "Asha", "Delivered")),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_reads(
        &server,
        json!([customer("c1", "Asha")]),
        json!([]),
        json!([job("j1", "c1", "Asha", "In Progress")]),
    )
    .await;

    let (ctx, _output) = context_for(&server);
    run(&ctx, "refresh").await;
    run(&ctx, "tab jobs").await;
    assert_eq!(run(&ctx, "status 1 delivered").await, Reply::Screen);
}

#[tokio::test]
async fn test_failed_delete_reports_backend_detail() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/customers/c1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Customer not found" })),
        )
        .mount(&server)
        .await;
    mount_reads(&server, json!([customer("c1", "Asha")]), json!([]), json!([])).await;

    let (ctx, output) = context_for(&server);
    run(&ctx, "refresh").await;
    run(&ctx, "tab customers").await;
    run(&ctx, "delete 1").await;

    assert_eq!(output.text(), "[error] Error deleting customer: Customer not found\n");
    assert_eq!(ctx.console.state().customers.get().len(), 1);
}

#[tokio::test]
async fn test_ping_help_and_quit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Goldsmith Ledger API" })),
        )
        .mount(&server)
        .await;

    let (ctx, output) = context_for(&server);
    assert_eq!(run(&ctx, "ping").await, Reply::Empty);
    assert_eq!(output.text(), "[info] Backend reachable: Goldsmith Ledger API\n");

    assert!(matches!(run(&ctx, "help").await, Reply::Text(text) if text.contains("status <n>")));
    assert_eq!(run(&ctx, "").await, Reply::Empty);
    assert_eq!(run(&ctx, "quit").await, Reply::Quit);
}
