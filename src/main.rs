//! Command-line textwire client.
//!
//! Reads `ACTION MESSAGE` lines from a script file, sends every request
//! over one TCP connection, then prints each transformed response to
//! stdout as it arrives.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use textwire_client::input::{read_script, Request};
use textwire_client::{receive_responses, send_request, transport, Flow, Result};

#[derive(Parser, Debug)]
#[command(name = "textwire-client", version, about)]
struct Cli {
    /// Server hostname
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Server port
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Show diagnostic output
    #[arg(short, long)]
    verbose: bool,

    /// File with one "ACTION MESSAGE" request per line
    file: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Quiet by default, like the protocol tooling around it; -v opens up
    // the diagnostics. RUST_LOG still wins when set.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let requests = read_script(&cli.file).await?;
    if requests.is_empty() {
        tracing::warn!(file = %cli.file.display(), "script file holds no requests");
        return Ok(());
    }

    let stream = transport::connect(&cli.host, cli.port).await?;
    let (mut reader, mut writer) = stream.into_split();

    for Request { action, message } in &requests {
        tracing::debug!(%action, len = message.len(), "sending request");
        send_request(&mut writer, *action, message.as_bytes()).await?;
    }

    let expected = requests.len();
    let mut handled = 0usize;
    receive_responses(&mut reader, |payload| {
        println!("{}", String::from_utf8_lossy(&payload));
        handled += 1;
        tracing::debug!(handled, expected, "response delivered");
        if handled == expected {
            Flow::Stop
        } else {
            Flow::Continue
        }
    })
    .await?;

    tracing::debug!(handled, "all responses handled");
    Ok(())
}
