#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::Arc;

use goldledger_domain::Config;
use goldledger_infra::LedgerApiClient;
use goldledger_lib::adapters::TerminalNotifier;
use goldledger_lib::AppContext;
use parking_lot::Mutex;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Captures everything the terminal notifier prints.
#[derive(Clone, Default)]
pub struct Output(Arc<Mutex<Vec<u8>>>);

impl Output {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Context wired to the real HTTP client against `server`.
pub fn context_for(server: &MockServer) -> (AppContext, Output) {
    let config = Config::for_backend(server.uri());
    let api = Arc::new(LedgerApiClient::new(&config.backend).expect("client"));
    let output = Output::default();
    let notifier = Arc::new(TerminalNotifier::new(Box::new(output.clone())));
    (AppContext::with_adapters(config, api, notifier), output)
}

pub fn customer(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "phone": "555",
        "notes": "",
        "created_at": "2024-06-01T10:30:00.123000"
    })
}

pub fn transaction(id: &str, customer_id: &str, customer_name: &str) -> Value {
    json!({
        "id": id,
        "customer_id": customer_id,
        "customer_name": customer_name,
        "date": "2024-06-01",
        "work_description": "Ring resize",
        "gold_in": 2.5,
        "gold_out": 0.0,
        "cash_in": 100.0,
        "labour_charge": 20.0,
        "remarks": "",
        "created_at": "2024-06-01T10:30:00"
    })
}

pub fn job(id: &str, customer_id: &str, customer_name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "customer_id": customer_id,
        "customer_name": customer_name,
        "work_description": "Chain repair",
        "status": status,
        "expected_delivery": null,
        "created_at": "2024-06-01T10:30:00"
    })
}

/// Serve the four list/summary reads with fixed bodies.
pub async fn mount_reads(server: &MockServer, customers: Value, transactions: Value, jobs: Value) {
    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_gold_balance": 2.5,
            "total_money_balance": 120.0,
            "active_jobs_count": 1,
            "total_customers": 1,
            "total_transactions": 1
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customers))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(transactions))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs))
        .mount(server)
        .await;
}

/// Serve one customer's history and balance. Mount before [`mount_reads`]
/// so the filtered history wins over the global ledger.
pub async fn mount_customer_detail(server: &MockServer, customer_id: &str, history: Value) {
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .and(query_param("customer_id", customer_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(history))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/customer/{customer_id}/balance")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer_id": customer_id,
            "gold_balance": 2.5,
            "money_balance": 120.0
        })))
        .mount(server)
        .await;
}
