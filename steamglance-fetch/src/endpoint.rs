//! Steam Web API endpoints.

use std::fmt;

/// Maximum number of ids `GetPlayerSummaries` accepts per call.
pub const MAX_SUMMARY_IDS: usize = 100;

/// The Web API methods SteamGlance calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `ISteamUser/GetPlayerSummaries/v0002` - profile, persona state, current game.
    PlayerSummaries,
    /// `ISteamUser/GetFriendList/v0001` - friend ids of an account.
    FriendList,
}

impl Endpoint {
    /// Returns the path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::PlayerSummaries => "ISteamUser/GetPlayerSummaries/v0002/",
            Self::FriendList => "ISteamUser/GetFriendList/v0001/",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
