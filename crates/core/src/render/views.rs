use std::fmt::Write;

use goldledger_domain::utils::display::{date_label, date_of, grams, money, or_dash};
use goldledger_domain::{Customer, CustomerBalance, DashboardStats, Job, Transaction};

use super::table::Table;
use crate::forms::{DraftForm, FormState};
use crate::navigation::Tab;
use crate::state::{CustomerDetail, ViewState};

const CUSTOMER_HINT: &str = "Use `open <n>` to view a customer's history and balance.";
const DETAIL_BACK_HINT: &str = "Use `back` to return to the customer list.";
const DETAIL_ACTIONS: &str = "Quick actions: `add-transaction`, `create-job`";
const NO_HISTORY: &str = "No transactions found for this customer";
const LOADING: &str = "Loading...";

pub fn render_dashboard(state: &ViewState) -> String {
    let mut out = section_heading(Tab::Dashboard);
    if let Some(stats) = state.dashboard.get() {
        out.push_str(&dashboard_tiles(&stats));
    }
    out
}

fn dashboard_tiles(stats: &DashboardStats) -> String {
    let mut table = Table::new([
        "Gold Balance",
        "Money Balance",
        "Active Jobs",
        "Customers",
        "Transactions",
    ]);
    table.push_row(vec![
        grams(stats.total_gold_balance),
        money(stats.total_money_balance),
        stats.active_jobs_count.to_string(),
        stats.total_customers.to_string(),
        stats.total_transactions.to_string(),
    ]);
    table.render()
}

/// Customer list with its creation form, or the detail view when a customer
/// is open.
pub fn render_customers(state: &ViewState) -> String {
    if state.detail.selected.with(Option::is_some) {
        return render_customer_detail(&state.detail);
    }

    let mut out = section_heading(Tab::Customers);
    let customers = state.customers.get();
    state.customer_form.with(|form| out.push_str(&render_form(form, &customers)));
    out.push('\n');
    out.push_str(CUSTOMER_HINT);
    out.push('\n');

    let mut table = Table::new(["#", "Name", "Phone", "Notes", "Added"]);
    for (index, customer) in customers.iter().enumerate() {
        table.push_row(vec![
            (index + 1).to_string(),
            customer.name.clone(),
            or_dash(customer.phone.as_deref()),
            or_dash(customer.notes.as_deref()),
            date_of(&customer.created_at),
        ]);
    }
    out.push_str(&table.render());
    out
}

/// Drill-down for the selected customer. History and balance render as
/// loading while absent.
pub fn render_customer_detail(detail: &CustomerDetail) -> String {
    let Some(customer) = detail.selected.get() else {
        return String::new();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{DETAIL_BACK_HINT}\n");
    let _ = writeln!(out, "{}", customer.name);
    let _ = writeln!(out, "Phone: {}", or_dash(customer.phone.as_deref()));
    let _ = writeln!(out, "Notes: {}", or_dash(customer.notes.as_deref()));
    out.push('\n');

    match detail.balance.get() {
        Some(balance) => out.push_str(&balance_tiles(&balance)),
        None => {
            let _ = writeln!(out, "Balance: {LOADING}");
        }
    }
    out.push('\n');

    out.push_str("Transaction History\n");
    match detail.history.get() {
        None => {
            let _ = writeln!(out, "{LOADING}");
        }
        Some(history) if history.is_empty() => {
            let _ = writeln!(out, "{NO_HISTORY}");
        }
        Some(history) => out.push_str(&history_table(&history)),
    }
    out.push('\n');
    out.push_str(DETAIL_ACTIONS);
    out.push('\n');
    out
}

fn balance_tiles(balance: &CustomerBalance) -> String {
    let mut table = Table::new(["Gold Balance", "Money Balance"]);
    table.push_row(vec![grams(balance.gold_balance), money(balance.money_balance)]);
    table.render()
}

fn history_table(history: &[Transaction]) -> String {
    let mut table =
        Table::new(["#", "Date", "Work", "Gold In", "Gold Out", "Cash In", "Labour", "Remarks"]);
    for (index, row) in history.iter().enumerate() {
        table.push_row(vec![
            (index + 1).to_string(),
            date_label(&row.date),
            row.work_description.clone(),
            grams(row.gold_in),
            grams(row.gold_out),
            money(row.cash_in),
            money(row.labour_charge),
            or_dash(row.remarks.as_deref()),
        ]);
    }
    table.render()
}

pub fn render_transactions(state: &ViewState) -> String {
    let mut out = section_heading(Tab::Transactions);
    let customers = state.customers.get();
    state.transaction_form.with(|form| out.push_str(&render_form(form, &customers)));
    out.push('\n');

    let mut table = Table::new([
        "#", "Date", "Customer", "Work", "Gold In", "Gold Out", "Cash In", "Labour", "Remarks",
    ]);
    state.transactions.with(|rows| {
        for (index, row) in rows.iter().enumerate() {
            table.push_row(vec![
                (index + 1).to_string(),
                date_label(&row.date),
                row.customer_name.clone(),
                row.work_description.clone(),
                grams(row.gold_in),
                grams(row.gold_out),
                money(row.cash_in),
                money(row.labour_charge),
                or_dash(row.remarks.as_deref()),
            ]);
        }
    });
    out.push_str(&table.render());
    out
}

pub fn render_jobs(state: &ViewState) -> String {
    let mut out = section_heading(Tab::Jobs);
    let customers = state.customers.get();
    state.job_form.with(|form| out.push_str(&render_form(form, &customers)));
    out.push('\n');

    let filter =
        state.job_filter.get().map_or_else(|| "All".to_string(), |status| status.to_string());
    let _ = writeln!(out, "Filter: {filter}");

    state.jobs.with(|jobs| out.push_str(&jobs_table(jobs)));
    out
}

fn jobs_table(jobs: &[Job]) -> String {
    let mut table =
        Table::new(["#", "Customer", "Work Description", "Status", "Expected Delivery"]);
    for (index, job) in jobs.iter().enumerate() {
        table.push_row(vec![
            (index + 1).to_string(),
            job.customer_name.clone(),
            job.work_description.clone(),
            job.status.clone(),
            match job.expected_delivery.as_deref() {
                Some(delivery) if !delivery.trim().is_empty() => date_label(delivery),
                _ => or_dash(None),
            },
        ]);
    }
    table.render()
}

/// One line per input: the typed value, or the placeholder in angle brackets
/// while blank. Required inputs carry a `*`. A customer id is annotated with
/// the matching customer's name when it is listed.
pub fn render_form<D: DraftForm>(form: &FormState<D>, customers: &[Customer]) -> String {
    let mut out = String::new();
    let label_width = D::FIELDS.iter().map(|spec| spec.name.len()).max().unwrap_or(0) + 1;

    for spec in D::FIELDS {
        let marker = if spec.required { "*" } else { "" };
        let label = format!("{}{marker}", spec.name);
        let value = form.draft.value(spec.name);
        let shown = if value.trim().is_empty() {
            format!("<{}>", spec.placeholder)
        } else if spec.name == "customer_id" {
            match customers.iter().find(|customer| customer.id == value) {
                Some(customer) => format!("{value} ({})", customer.name),
                None => value,
            }
        } else {
            value
        };
        let _ = writeln!(out, "  {label:<label_width$} : {shown}");
    }
    let _ = writeln!(out, "  [{}]", form.submit_label());
    out
}

fn section_heading(tab: Tab) -> String {
    format!("{}\n\n", tab.heading())
}
