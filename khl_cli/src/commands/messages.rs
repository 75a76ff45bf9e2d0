use anyhow::{anyhow, Result};
use clap::builder::BoolishValueParser;
use clap::Args;
use khl_api::types::{MessageCreate, MessageCreateBase, MessageType};
use khl_api::{MessageListFlag, MessageListOption, Session};

use crate::output::print_json;

#[derive(Args, Debug)]
pub struct MessagesArgs {
    /// Channel id
    #[arg(long)]
    pub channel: String,

    /// Anchor message id
    #[arg(long)]
    pub msg_id: Option<String>,

    /// Direction from the anchor: before, around, after
    #[arg(long)]
    pub flag: Option<String>,

    /// Filter on pinned state (1/0, true/false); omitted means no filter
    #[arg(long, value_parser = BoolishValueParser::new())]
    pub pin: Option<bool>,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Channel id
    #[arg(long)]
    pub channel: String,

    /// Message text
    #[arg(long)]
    pub content: String,

    /// Send as KMarkdown instead of plain text
    #[arg(long)]
    pub kmarkdown: bool,
}

pub async fn run_list(args: &MessagesArgs, session: &Session) -> Result<()> {
    let mut options = Vec::new();
    if let Some(ref msg_id) = args.msg_id {
        options.push(MessageListOption::MsgId(msg_id.clone()));
    }
    if let Some(ref flag) = args.flag {
        let flag = flag
            .parse::<MessageListFlag>()
            .map_err(|_| anyhow!("invalid --flag {flag:?}, expected before, around or after"))?;
        options.push(MessageListOption::Flag(flag));
    }
    if let Some(pin) = args.pin {
        options.push(MessageListOption::Pin(pin));
    }

    let messages = session.message_list(&args.channel, &options).await?;
    print_json(&messages)
}

pub async fn run_send(args: &SendArgs, session: &Session) -> Result<()> {
    let create = MessageCreate {
        base: MessageCreateBase {
            message_type: Some(if args.kmarkdown {
                MessageType::KMarkdown
            } else {
                MessageType::Text
            }),
            target_id: args.channel.clone(),
            content: args.content.clone(),
            ..Default::default()
        },
        ..Default::default()
    };
    let resp = session.message_create(&create).await?;
    print_json(&resp)
}
