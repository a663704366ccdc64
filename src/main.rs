use anyhow::Result;
use chat_view::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
