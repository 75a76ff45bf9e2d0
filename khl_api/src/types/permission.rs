use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Permission bit set attached to roles and channel overwrites.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct RolePermission: u64 {
        const ADMIN = 1 << 0;
        const MANAGE_GUILD = 1 << 1;
        const VIEW_AUDIT_LOG = 1 << 2;
        const CREATE_INVITE = 1 << 3;
        const MANAGE_INVITE = 1 << 4;
        const MANAGE_CHANNEL = 1 << 5;
        const KICK_USER = 1 << 6;
        const BAN_USER = 1 << 7;
        const MANAGE_GUILD_EMOJI = 1 << 8;
        const CHANGE_NICKNAME = 1 << 9;
        const MANAGE_ROLE_PERMISSION = 1 << 10;
        const VIEW_CHANNEL = 1 << 11;
        const SEND_MESSAGE = 1 << 12;
        const MANAGE_MESSAGE = 1 << 13;
        const UPLOAD_FILE = 1 << 14;
        const CONNECT_VOICE = 1 << 15;
        const MANAGE_VOICE = 1 << 16;
        const MENTION_EVERYONE = 1 << 17;
        const ADD_REACTION = 1 << 18;
        const FOLLOW_REACTION = 1 << 19;
        const PASSIVE_CONNECT_VOICE = 1 << 20;
        const ONLY_PUSH_TO_TALK = 1 << 21;
        const FREE_VOICE_ACTIVITY = 1 << 22;
        const SPEAK = 1 << 23;
        const DEAFEN_USER = 1 << 24;
        const MUTE_USER = 1 << 25;
        const MANAGE_NICKNAME = 1 << 26;
        const PLAY_MUSIC = 1 << 27;
    }
}

// The wire form is the plain integer, not a list of flag names.
impl Serialize for RolePermission {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RolePermission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Bits this client does not know yet are kept as-is.
        let bits = u64::deserialize(deserializer)?;
        Ok(RolePermission::from_bits_retain(bits))
    }
}
