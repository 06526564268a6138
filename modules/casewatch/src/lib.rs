pub mod config;
pub mod detector;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod message;
pub mod notify;
pub mod scheduler;
pub mod snapshot;
pub mod store;
pub mod watcher;

pub use config::Config;
pub use error::{Result, WatchError};
pub use snapshot::{Delta, Snapshot};
