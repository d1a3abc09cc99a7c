#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod error;
mod mcp;
mod prelude;
mod reddit;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Read-only Reddit browsing from the terminal or over MCP"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "REDDITOOLS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Reddit (www.reddit.com) operations
    Reddit(crate::reddit::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Reddit(sub_app) => crate::reddit::run(sub_app, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
