mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use khl_api::{Session, SessionConfig};

use crate::output::print_json;

#[derive(Parser)]
#[command(name = "khl")]
#[command(about = "Call the KaiHeiLa bot API from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the bot's own user
    Me,
    /// Print the websocket gateway URL
    Gateway,
    /// List guilds the bot has joined
    Guilds(commands::guilds::GuildsArgs),
    /// List channels of a guild
    Channels(commands::guilds::GuildScopedArgs),
    /// List roles of a guild
    Roles(commands::guilds::GuildScopedArgs),
    /// List messages of a channel
    Messages(commands::messages::MessagesArgs),
    /// Send a message to a channel
    Send(commands::messages::SendArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("khl=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = SessionConfig::from_env()?;
    let session = Session::new(&config)?;

    match &cli.command {
        Commands::Me => print_json(&session.user_me().await?)?,
        Commands::Gateway => println!("{}", session.gateway().await?),
        Commands::Guilds(args) => commands::guilds::run_guilds(args, &session).await?,
        Commands::Channels(args) => commands::guilds::run_channels(args, &session).await?,
        Commands::Roles(args) => commands::guilds::run_roles(args, &session).await?,
        Commands::Messages(args) => commands::messages::run_list(args, &session).await?,
        Commands::Send(args) => commands::messages::run_send(args, &session).await?,
    }

    Ok(())
}
