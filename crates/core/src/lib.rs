#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod export;
pub mod identity;
pub mod links;
pub mod render;
pub mod slug;
pub mod vault;

pub use error::ErrorKind;
pub use identity::NoteId;
pub use slug::normalize;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
