//! Command line shell for the Monkey language.
pub mod config;
mod error;
pub mod session;

pub use config::{Config, Mode};
pub use error::Error;
pub use session::{Outcome, Session, run_file};
