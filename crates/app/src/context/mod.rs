//! Application context - dependency injection container

use std::sync::Arc;

use goldledger_core::{LedgerApi, LedgerConsole, Notifier};
use goldledger_domain::{Config, Result};
use goldledger_infra::LedgerApiClient;
use tracing::info;

use crate::adapters::TerminalNotifier;

/// Application context - the configuration and the console it drives
pub struct AppContext {
    pub config: Config,
    pub console: LedgerConsole,
}

impl AppContext {
    /// Wire the HTTP backend client and the terminal notifier for `config`.
    ///
    /// The binary loads `config` itself so logging can be installed from it
    /// before anything else runs.
    ///
    /// # Errors
    /// Returns `LedgerError::Config` if the backend URL is invalid, or an
    /// error if the HTTP client cannot be built.
    pub fn from_config(config: Config) -> Result<Self> {
        let api = Arc::new(LedgerApiClient::new(&config.backend)?);
        info!(api_root = %api.api_root(), "ledger backend client ready");
        Ok(Self::with_adapters(config, api, Arc::new(TerminalNotifier::stdout())))
    }

    /// Assemble a context from explicit adapters.
    pub fn with_adapters(
        config: Config,
        api: Arc<dyn LedgerApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { config, console: LedgerConsole::new(api, notifier) }
    }
}
