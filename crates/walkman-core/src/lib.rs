pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod logging;
pub mod output;
pub mod resolve;
pub mod tree;

pub use error::WalkmanError;
