// Fri Oct 16 2026 - Alex

pub mod banner;
pub mod cli;
pub mod terminal;

pub use banner::Banner;
pub use cli::{Args, CommandHandler};
pub use terminal::TerminalReporter;
