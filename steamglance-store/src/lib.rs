// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # SteamGlance Store
//!
//! State and configuration for the SteamGlance bridge.
//!
//! - **BridgeConfig**: Credentials and tuning knobs, persisted as JSON
//! - **EntityStore**: Latest entity attributes with watch-channel notification
//! - **Persistence**: Owner-only JSON file helpers
//!
//! ## Usage
//!
//! ```ignore
//! use steamglance_store::{BridgeConfig, EntityStore};
//!
//! let config = BridgeConfig::load().await?;
//! let store = EntityStore::new();
//!
//! // Feed it from a poll driver
//! driver.poll_once(&store).await;
//!
//! let mut rx = store.subscribe();
//! while rx.changed().await.is_ok() {
//!     println!("Entities updated!");
//! }
//! ```

pub mod config;
pub mod entity_store;
pub mod error;
pub mod persistence;

pub use config::{BridgeConfig, ENV_API_KEY, ENV_STEAM_ID, MIN_UPDATE_INTERVAL_SECS};
pub use entity_store::EntityStore;
pub use error::StoreError;
pub use persistence::{default_config_dir, default_config_path, load_json, save_json};
