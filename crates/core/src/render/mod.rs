//! Text rendering of the console screen
//!
//! Pure functions from [`ViewState`] to text. Nothing here mutates state or
//! talks to the network; a pending fetch simply renders as absent.

mod table;
mod views;

pub use table::Table;
pub use views::{
    render_customer_detail, render_customers, render_dashboard, render_form, render_jobs,
    render_transactions,
};

use crate::navigation::Tab;
use crate::state::ViewState;

const TITLE: &str = "Goldsmith Ledger";
const SUBTITLE: &str = "Digital ledger for your goldsmith business";

/// Header, tab bar and the active section.
pub fn render_screen(state: &ViewState) -> String {
    let active = state.active_tab.get();
    let mut out = String::new();
    out.push_str(&render_header());
    out.push_str(&render_tab_bar(active));
    out.push('\n');
    out.push_str(&render_tab(state, active));
    out
}

pub fn render_header() -> String {
    format!("{TITLE}\n{SUBTITLE}\n")
}

/// `[Dashboard]  Customers  Transactions  Jobs` with the active tab bracketed.
pub fn render_tab_bar(active: Tab) -> String {
    let tabs: Vec<String> = Tab::ALL
        .iter()
        .map(|tab| if *tab == active { format!("[{tab}]") } else { format!(" {tab} ") })
        .collect();
    format!("{}\n", tabs.join(" "))
}

pub fn render_tab(state: &ViewState, tab: Tab) -> String {
    match tab {
        Tab::Dashboard => render_dashboard(state),
        Tab::Customers => render_customers(state),
        Tab::Transactions => render_transactions(state),
        Tab::Jobs => render_jobs(state),
    }
}
