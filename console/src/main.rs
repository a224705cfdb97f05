mod commands;
mod repl;
mod terminal_view;

use anyhow::Result;
use ask_client::{ClientConfig, HttpBackend, ViewController};
use clap::Parser;
use std::sync::Arc;
use terminal_view::TerminalView;
use tokio::io::BufReader;

#[derive(Parser, Debug)]
#[command(about = "Ask questions about your documents from the terminal")]
struct Args {
    /// Base URL of the question-answering backend [default: $ASK_SERVER_URL or http://127.0.0.1:5001]
    #[arg(long)]
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let config = match args.server_url {
        Some(url) => ClientConfig::new(&url)?,
        None => ClientConfig::from_env()?,
    };
    log::info!("Using backend at {}", config.base_url);

    let controller = Arc::new(ViewController::new(
        HttpBackend::new(config),
        TerminalView::new(),
    ));

    println!("{}", commands::HELP);
    repl::run(controller, BufReader::new(tokio::io::stdin())).await?;

    log::info!("Bye");
    Ok(())
}
