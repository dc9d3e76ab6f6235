//! Goldsmith Ledger - terminal console entry point.

use std::io::Write;

use anyhow::Context;
use goldledger_core::render_screen;
use goldledger_infra::config;
use goldledger_lib::{handle_line, AppContext, Reply};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const PROMPT: &str = "ledger> ";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let config = config::load().context("failed to load goldledger configuration")?;
    goldledger_lib::utils::logging::init_tracing(&config.logging)
        .context("failed to initialise logging")?;

    // Logged only now that a subscriber exists
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "no .env file loaded"),
    }

    let ctx = AppContext::from_config(config).context("failed to build application context")?;
    info!("Goldsmith Ledger starting");

    ctx.console.load_all().await;
    print_screen(&ctx);
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        match handle_line(&ctx, &line).await {
            Ok(Reply::Quit) => break,
            Ok(Reply::Screen) => print_screen(&ctx),
            Ok(Reply::Text(text)) => println!("{text}"),
            Ok(Reply::Empty) => {}
            Err(err) => println!("Error: {}", err.user_message()),
        }
        prompt()?;
    }

    info!("Goldsmith Ledger shutting down");
    Ok(())
}

fn print_screen(ctx: &AppContext) {
    println!("{}", render_screen(ctx.console.state()));
}

fn prompt() -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;
    Ok(())
}
