//! Line commands - terminal input to console operations
//!
//! Each input line parses into a [`Command`], which [`handle_line`] runs
//! against the [`AppContext`]'s console. Row numbers are the 1-based
//! positions shown in the rendered tables.

mod parse;

use std::time::Instant;

use goldledger_core::{LedgerConsole, RecordKind, SubmitOutcome, Tab};
use goldledger_domain::{LedgerError, Result};

pub use parse::{Command, HELP};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// What the terminal should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Redraw the screen.
    Screen,
    /// Print a message without redrawing.
    Text(String),
    /// Nothing to print (blank input).
    Empty,
    Quit,
}

/// Parse and run one input line.
///
/// # Errors
/// Returns `LedgerError::InvalidInput` for malformed commands or row numbers
/// that do not exist. Backend failures are reported through the notifier and
/// do not surface here.
pub async fn handle_line(ctx: &AppContext, line: &str) -> Result<Reply> {
    let Some(command) = Command::parse(line)? else {
        return Ok(Reply::Empty);
    };

    let start = Instant::now();
    let result = execute(&ctx.console, &command).await;
    log_command_execution(command.name(), start.elapsed(), result.is_ok());
    result
}

async fn execute(console: &LedgerConsole, command: &Command) -> Result<Reply> {
    match command {
        Command::Help => Ok(Reply::Text(HELP.to_string())),
        Command::Show => Ok(Reply::Screen),
        Command::Quit => Ok(Reply::Quit),
        Command::Refresh => {
            console.load_all().await;
            Ok(Reply::Screen)
        }
        Command::Ping => {
            console.check_backend().await;
            Ok(Reply::Empty)
        }
        Command::Tab(tab) => {
            console.switch_tab(*tab);
            Ok(Reply::Screen)
        }
        Command::Set { field, value } => {
            let kind = form_for(console.active_tab())?;
            let value = resolve_customer_reference(console, kind, field, value)?;
            console.edit_field(kind, field, &value)?;
            Ok(Reply::Screen)
        }
        Command::Clear { field } => {
            console.edit_field(form_for(console.active_tab())?, field, "")?;
            Ok(Reply::Screen)
        }
        Command::Submit => submit(console, form_for(console.active_tab())?).await,
        Command::Open(row) => {
            let customer = nth(&console.state().customers.get(), *row, "customer")?;
            console.switch_tab(Tab::Customers);
            console.open_customer(customer).await;
            Ok(Reply::Screen)
        }
        Command::Back => {
            console.close_customer();
            Ok(Reply::Screen)
        }
        Command::AddTransaction => {
            console.start_transaction_for_selected()?;
            Ok(Reply::Screen)
        }
        Command::CreateJob => {
            console.start_job_for_selected()?;
            Ok(Reply::Screen)
        }
        Command::Status { row, status } => {
            let job = nth(&console.state().jobs.get(), *row, "job")?;
            console.update_job_status(&job.id, *status).await;
            Ok(Reply::Screen)
        }
        Command::Filter(filter) => {
            console.switch_tab(Tab::Jobs);
            console.set_job_filter(*filter).await;
            Ok(Reply::Screen)
        }
        Command::Delete(row) => {
            delete_row(console, *row).await?;
            Ok(Reply::Screen)
        }
    }
}

async fn submit(console: &LedgerConsole, kind: RecordKind) -> Result<Reply> {
    match console.submit(kind).await {
        SubmitOutcome::Created | SubmitOutcome::Failed(_) => Ok(Reply::Screen),
        SubmitOutcome::Incomplete(missing) => {
            Ok(Reply::Text(format!("Please fill in: {}", missing.join(", "))))
        }
        SubmitOutcome::Busy => Ok(Reply::Text(format!(
            "A {} is already being submitted",
            kind.noun()
        ))),
    }
}

/// Delete the n-th row of whatever table the active tab shows.
async fn delete_row(console: &LedgerConsole, row: usize) -> Result<()> {
    let state = console.state();
    match console.active_tab() {
        Tab::Customers => {
            let history = state.detail.history.get();
            if state.detail.selected_id().is_some() {
                let rows = history.ok_or_else(|| {
                    LedgerError::InvalidInput("transaction history is still loading".into())
                })?;
                let transaction = nth(&rows, row, "transaction")?;
                console.delete_transaction(&transaction.id).await;
            } else {
                let customer = nth(&state.customers.get(), row, "customer")?;
                console.delete_customer(&customer.id).await;
            }
        }
        Tab::Transactions => {
            let transaction = nth(&state.transactions.get(), row, "transaction")?;
            console.delete_transaction(&transaction.id).await;
        }
        Tab::Jobs => {
            let job = nth(&state.jobs.get(), row, "job")?;
            console.delete_job(&job.id).await;
        }
        Tab::Dashboard => {
            return Err(LedgerError::InvalidInput("nothing to delete on the dashboard".into()))
        }
    }
    Ok(())
}

/// Creation form shown on `tab`.
fn form_for(tab: Tab) -> Result<RecordKind> {
    match tab {
        Tab::Customers => Ok(RecordKind::Customer),
        Tab::Transactions => Ok(RecordKind::Transaction),
        Tab::Jobs => Ok(RecordKind::Job),
        Tab::Dashboard => {
            Err(LedgerError::InvalidInput("the dashboard has no form; switch tabs first".into()))
        }
    }
}

/// `set customer 2` picks the second listed customer. Anything that is not a
/// row number is stored as typed.
fn resolve_customer_reference(
    console: &LedgerConsole,
    kind: RecordKind,
    field: &str,
    value: &str,
) -> Result<String> {
    let is_customer_field =
        field.eq_ignore_ascii_case("customer") || field.eq_ignore_ascii_case("customer_id");
    if kind == RecordKind::Customer || !is_customer_field {
        return Ok(value.to_string());
    }
    match value.parse::<usize>() {
        Ok(row) => Ok(nth(&console.state().customers.get(), row, "customer")?.id),
        Err(_) => Ok(value.to_string()),
    }
}

fn nth<T: Clone>(rows: &[T], row: usize, noun: &str) -> Result<T> {
    row.checked_sub(1).and_then(|index| rows.get(index)).cloned().ok_or_else(|| {
        LedgerError::InvalidInput(format!("no {noun} in row {row} ({} listed)", rows.len()))
    })
}
