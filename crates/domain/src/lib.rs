#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod config;
mod diet;
mod error;
mod exercise;
mod filter;
mod name;
mod profile;
mod service;
mod split;
mod volume;
mod workout;

pub use config::*;
pub use diet::*;
pub use error::*;
pub use exercise::*;
pub use filter::*;
pub use name::*;
pub use profile::*;
pub use service::*;
pub use split::*;
pub use volume::*;
pub use workout::*;
