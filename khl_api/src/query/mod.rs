mod common;
pub use self::common::{QueryOption, QueryParams};

mod page;
pub use self::page::PageSetting;

mod message;
pub use self::message::{MessageListFlag, MessageListOption};

mod guild;
pub use self::guild::GuildUserListOption;
