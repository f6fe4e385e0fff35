#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::correctness)]
#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod config;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod mrl;
pub mod playlist;
pub mod store;
pub mod utils;

pub use error::PlaylistError;
pub use mrl::{MediaReference, Mrl};
pub use playlist::{Playlist, PlaylistFormat};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
extern crate log;
