mod meta;
pub use self::meta::{ListEnvelope, PageInfo};

mod user;
pub use self::user::{TargetInfo, User, UserChat};

mod guild;
pub use self::guild::{Guild, GuildMuteList, GuildMuteSetting, GuildNickname, MuteType, Role};

mod permission;
pub use self::permission::RolePermission;

mod channel;
pub use self::channel::{
    Channel, ChannelCreate, ChannelRoleBase, ChannelRoleCreate, ChannelRoleDelete,
    ChannelRoleIndex, ChannelRoleUpdate, ChannelRoleUpdateResp, ChannelType, PermissionOverwrite,
    PermissionUser,
};

mod message;
pub use self::message::{
    DetailedChannelMessage, DirectMessageCreate, DirectMessageUpdate, MessageCreate,
    MessageCreateBase, MessageResp, MessageType, MessageUpdate, MessageUpdateBase, ReactedUser,
    TagInfo,
};

mod lenient;
