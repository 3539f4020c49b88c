//! Text output formatting with colors.

use chrono::Local;
use steamglance_client::AccountSummary;
use steamglance_core::{
    EntityKind, EntityState, FriendEntry, MediaPlayerAttributes, Origin, PlayingState, Resolved,
};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a resolved "currently playing" view.
    pub fn format_playing(&self, resolved: &Resolved<Option<PlayingState>>) -> String {
        let mut lines = Vec::new();

        match (&resolved.value, resolved.origin.is_unavailable()) {
            (_, true) => lines.push(self.red("Steam API error")),
            (Some(playing), false) => {
                lines.push(format!(
                    "{} {}",
                    self.green("▶"),
                    self.bold(&playing.game_name)
                ));
                lines.push(format!("  App ID:  {}", playing.app_id));
                lines.push(format!("  Status:  {}", playing.presence_state));
                lines.push(format!("  Artwork: {}", self.dim(&playing.artwork_url)));
            }
            (None, false) => lines.push(self.dim("No game detected")),
        }

        if let Some(note) = self.format_origin(&resolved.origin) {
            lines.push(note);
        }
        lines.join("\n")
    }

    /// Formats a resolved "online friends" view.
    pub fn format_friends(&self, resolved: &Resolved<Vec<FriendEntry>>) -> String {
        let mut lines = Vec::new();

        if resolved.origin.is_unavailable() {
            lines.push(self.red("Connection error"));
        } else {
            let count = resolved.value.len();
            let noun = if count == 1 { "friend" } else { "friends" };
            lines.push(self.bold(&format!("{count} {noun} online")));

            for friend in &resolved.value {
                let mut line = format!("  {:<24} {}", friend.display_name, friend.presence_state);
                if let Some(game) = &friend.game_name {
                    line.push_str(&format!(" - {}", self.cyan(game)));
                }
                lines.push(line);
            }
        }

        if let Some(note) = self.format_origin(&resolved.origin) {
            lines.push(note);
        }
        lines.join("\n")
    }

    /// Formats the account found by `check`.
    pub fn format_account(&self, account: &AccountSummary) -> String {
        let mut lines = vec![format!(
            "{} Steam API reachable",
            self.green("✓")
        )];
        lines.push(format!("  Account: {}", self.bold(&account.display_name)));
        lines.push(format!("  ID:      {}", account.account_id));
        lines.push(format!("  Status:  {}", account.presence_state));
        if let Some(url) = &account.profile_url {
            lines.push(format!("  Profile: {}", self.dim(url)));
        }
        lines.join("\n")
    }

    /// Formats the attributes of every entity.
    pub fn format_entities(&self, entities: &[(EntityKind, MediaPlayerAttributes)]) -> String {
        entities
            .iter()
            .map(|(kind, attributes)| self.format_entity(*kind, attributes))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn format_entity(&self, kind: EntityKind, attributes: &MediaPlayerAttributes) -> String {
        let mut lines = vec![format!(
            "{} [{}]",
            self.bold(&attributes.media_title),
            self.state(attributes.state)
        )];
        lines.push(format!("  {}", attributes.media_artist));
        lines.push(format!("  {}", self.dim(&attributes.media_album)));
        if !attributes.media_image_url.is_empty() {
            lines.push(format!("  {}", self.dim(&attributes.media_image_url)));
        }
        lines.push(self.dim(&format!("  ({})", kind.id())));
        lines.join("\n")
    }

    /// Describes a non-live origin. Live data needs no note.
    pub fn format_origin(&self, origin: &Origin) -> Option<String> {
        match origin {
            Origin::Live => None,
            Origin::Cached { stored_at, reason } => Some(self.yellow(&format!(
                "Showing data from {} ({reason})",
                stored_at.with_timezone(&Local).format("%H:%M:%S")
            ))),
            Origin::Fallback { reason } => Some(self.dim(reason)),
        }
    }

    fn state(&self, state: EntityState) -> String {
        match state {
            EntityState::Playing => self.green(state.as_str()),
            EntityState::Unknown => self.red(state.as_str()),
            EntityState::On | EntityState::Off => self.dim(state.as_str()),
        }
    }

    // ========================================================================
    // Color helpers
    // ========================================================================

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}
