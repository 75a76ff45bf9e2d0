//! CLI subcommand implementations.

pub mod guilds;
pub mod messages;

use clap::Args;
use khl_api::PageSetting;

/// Pagination flags shared by list subcommands.
#[derive(Args, Debug)]
pub struct PageArgs {
    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Sort field, prefix with '-' for descending
    #[arg(long)]
    pub sort: Option<String>,
}

impl PageArgs {
    pub fn to_setting(&self) -> PageSetting {
        PageSetting {
            page: self.page,
            page_size: self.page_size,
            sort: self.sort.clone(),
        }
    }
}
