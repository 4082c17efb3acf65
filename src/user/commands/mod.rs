//! Command implementations.
//!
//! Each command is defined in its own module file.

pub mod define;
pub mod del;
pub mod eval;
pub mod help;
pub mod history;
pub mod read;
pub mod resize;
pub mod system;

// Re-export command instances for registry
pub use define::{ADD, COMP, IDEN, SCAL, SUB, TRAN};
pub use del::DEL;
pub use eval::EVAL;
pub use help::HELP;
pub use history::HISTORY_CMD;
pub use read::READ;
pub use resize::RESIZE;
pub use system::EXIT;
