use goldledger_core::Tab;
use goldledger_domain::{JobStatus, LedgerError, Result};

/// One line typed at the console prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Quit,
    Refresh,
    Ping,
    Tab(Tab),
    /// Edit a field of the active tab's form.
    Set { field: String, value: String },
    Clear { field: String },
    Submit,
    /// Open the n-th listed customer (1-based).
    Open(usize),
    Back,
    AddTransaction,
    CreateJob,
    /// Move the n-th listed job to a status.
    Status { row: usize, status: JobStatus },
    Filter(Option<JobStatus>),
    /// Delete the n-th row of the active tab.
    Delete(usize),
}

pub const HELP: &str = "\
Commands:
  tab <dashboard|customers|transactions|jobs>   switch section
  set <field> <value>        edit the active tab's form
  set customer <n>           pick the n-th listed customer
  clear <field>              blank a form field
  submit                     send the active tab's form
  open <n>                   view the n-th customer's history and balance
  back                       leave the customer view
  add-transaction            new transaction for the open customer
  create-job                 new job for the open customer
  status <n> <status>        set the n-th job to In Progress, Completed or Delivered
  filter <status|all>        restrict the job list
  delete <n>                 delete the n-th row of the active tab
  refresh                    reload everything
  ping                       check the backend
  show                       redraw the screen
  quit                       exit";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// # Errors
    /// Returns `LedgerError::InvalidInput` for unknown commands or bad
    /// arguments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (name, rest) = split_word(line);

        let command = match name.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "show" | "ls" => Self::Show,
            "quit" | "exit" | "q" => Self::Quit,
            "refresh" => Self::Refresh,
            "ping" => Self::Ping,
            "submit" | "save" => Self::Submit,
            "back" => Self::Back,
            "add-transaction" => Self::AddTransaction,
            "create-job" => Self::CreateJob,
            "tab" => Self::Tab(
                required(rest, "tab <dashboard|customers|transactions|jobs>")?
                    .parse()
                    .map_err(LedgerError::InvalidInput)?,
            ),
            "set" => {
                let (field, value) = split_word(required(rest, "set <field> <value>")?);
                Self::Set { field: field.to_string(), value: value.to_string() }
            }
            "clear" => Self::Clear { field: required(rest, "clear <field>")?.to_string() },
            "open" => Self::Open(row_number(required(rest, "open <n>")?)?),
            "delete" | "rm" => Self::Delete(row_number(required(rest, "delete <n>")?)?),
            "status" => {
                let (row, status) = split_word(required(rest, "status <n> <status>")?);
                Self::Status {
                    row: row_number(row)?,
                    status: required(status, "status <n> <status>")?
                        .parse()
                        .map_err(LedgerError::InvalidInput)?,
                }
            }
            "filter" => {
                let value = required(rest, "filter <status|all>")?;
                if value.eq_ignore_ascii_case("all") || value.eq_ignore_ascii_case("none") {
                    Self::Filter(None)
                } else {
                    Self::Filter(Some(value.parse().map_err(LedgerError::InvalidInput)?))
                }
            }
            other => {
                return Err(LedgerError::InvalidInput(format!(
                    "unknown command '{other}' (type 'help' for a list)"
                )))
            }
        };
        Ok(Some(command))
    }

    /// Stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Show => "show",
            Self::Quit => "quit",
            Self::Refresh => "refresh",
            Self::Ping => "ping",
            Self::Tab(_) => "tab",
            Self::Set { .. } => "set",
            Self::Clear { .. } => "clear",
            Self::Submit => "submit",
            Self::Open(_) => "open",
            Self::Back => "back",
            Self::AddTransaction => "add-transaction",
            Self::CreateJob => "create-job",
            Self::Status { .. } => "status",
            Self::Filter(_) => "filter",
            Self::Delete(_) => "delete",
        }
    }
}

/// First word and the trimmed remainder.
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn required<'a>(value: &'a str, usage: &str) -> Result<&'a str> {
    if value.is_empty() {
        Err(LedgerError::InvalidInput(format!("usage: {usage}")))
    } else {
        Ok(value)
    }
}

/// Parse a 1-based row number.
fn row_number(text: &str) -> Result<usize> {
    match text.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(LedgerError::InvalidInput(format!("'{text}' is not a row number"))),
    }
}
