//! Tab navigation

use goldledger_domain::impl_domain_status_conversions;

/// The four top-level sections of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Customers,
    Transactions,
    Jobs,
}

impl_domain_status_conversions!(Tab {
    Dashboard => "Dashboard" | "home",
    Customers => "Customers" | "customer",
    Transactions => "Transactions" | "transaction" | "ledger",
    Jobs => "Jobs" | "job",
});

impl Tab {
    /// Tab bar order.
    pub const ALL: [Tab; 4] = [Self::Dashboard, Self::Customers, Self::Transactions, Self::Jobs];

    /// Heading shown above the tab's content.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Customers => "Customer Management",
            Self::Transactions => "Transaction Ledger",
            Self::Jobs => "Job Tracker",
        }
    }
}
