use anyhow::Result;
use clap::Args;
use khl_api::Session;

use super::PageArgs;
use crate::output::print_page;

#[derive(Args, Debug)]
pub struct GuildsArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct GuildScopedArgs {
    /// Guild id
    #[arg(long)]
    pub guild: String,

    #[command(flatten)]
    pub page: PageArgs,
}

pub async fn run_guilds(args: &GuildsArgs, session: &Session) -> Result<()> {
    let (guilds, meta) = session.guild_list(&args.page.to_setting()).await?;
    print_page(&guilds, &meta)
}

pub async fn run_channels(args: &GuildScopedArgs, session: &Session) -> Result<()> {
    let (channels, meta) = session
        .channel_list(&args.guild, &args.page.to_setting())
        .await?;
    print_page(&channels, &meta)
}

pub async fn run_roles(args: &GuildScopedArgs, session: &Session) -> Result<()> {
    let (roles, meta) = session
        .guild_role_list(&args.guild, &args.page.to_setting())
        .await?;
    print_page(&roles, &meta)
}
