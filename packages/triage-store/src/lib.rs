pub mod client;
pub mod models;

mod error;

pub use client::DeskClient;
pub use error::{Error, Result};
