use std::io::{self, Write};

use goldledger_core::{Notice, NoticeLevel, Notifier};
use parking_lot::Mutex;
use tracing::warn;

/// Prints acknowledgements as single lines, the terminal's alert box.
pub struct TerminalNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalNotifier {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }
}

/// `[ok] Customer added successfully!`
pub fn format_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Failure => "error",
        NoticeLevel::Info => "info",
    };
    format!("[{tag}] {}", notice.message)
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{}", format_notice(&notice)).and_then(|()| out.flush()) {
            warn!(error = %err, "failed to print notice");
        }
    }
}
