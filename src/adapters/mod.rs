//! Concrete collaborators used by the CLI.

pub mod assets;
pub mod clipboard;
pub mod notify;
pub mod watchlist;

pub use assets::{AssumeLoaded, HttpAssetLoader};
pub use clipboard::CommandClipboard;
pub use notify::ConsoleNotifier;
pub use watchlist::LocalWatchlist;
