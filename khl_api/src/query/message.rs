use std::str::FromStr;

use super::{QueryOption, QueryParams};

/// Optional arguments for `message_list`.
#[derive(Clone, Debug)]
pub enum MessageListOption {
    /// Anchor message. Without it the latest messages are returned.
    MsgId(String),
    /// Only pinned (`true`) or only unpinned (`false`) messages.
    Pin(bool),
    /// Direction relative to the anchor message.
    Flag(MessageListFlag),
}

impl QueryOption for MessageListOption {
    fn apply(&self, params: &mut QueryParams) {
        match self {
            MessageListOption::MsgId(msg_id) => {
                params.set("msg_id", msg_id.as_str());
            }
            MessageListOption::Pin(pin) => {
                params.set_flag("pin", *pin);
            }
            MessageListOption::Flag(flag) => {
                params.set("flag", flag.to_string());
            }
        }
    }
}

/// Direction for `message_list` around an anchor message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageListFlag {
    #[default]
    Before,
    Around,
    After,
}

impl std::fmt::Display for MessageListFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MessageListFlag::Before => "before",
                MessageListFlag::Around => "around",
                MessageListFlag::After => "after",
            }
        )
    }
}

impl FromStr for MessageListFlag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(MessageListFlag::Before),
            "around" => Ok(MessageListFlag::Around),
            "after" => Ok(MessageListFlag::After),
            _ => Err(()),
        }
    }
}
