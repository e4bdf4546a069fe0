//! Use cases: the workspace state and the console that drives it

pub mod console;
pub mod workspace;

pub use console::{Console, Outcome};
pub use workspace::{OpenDictionary, Workspace};
