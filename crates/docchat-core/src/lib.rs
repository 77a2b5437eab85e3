//! Shared vocabulary of the docchat workspace.
//!
//! Configuration is merged by Figment from `config.toml` + `config.<env>.toml`
//! + `DOCCHAT_*` env vars. `data_processor` stands in for the text-extraction
//! collaborator when documents arrive as plain text.
#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod data_processor;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
