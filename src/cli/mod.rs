use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod history;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Fetch a session's history and print the view messages
    History {
        #[arg(long)]
        session_id: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format! {
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                }
                .into()
            }),
        )
        // Logs go to stderr so `history` output can be piped
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    init_tracing();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::History { session_id }) => {
            history::run(session_id).await?;
        }
        None => {}
    }

    Ok(())
}
