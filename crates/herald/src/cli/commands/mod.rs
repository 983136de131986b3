//! CLI commands

mod completions;
mod notes;
mod release;

pub use completions::CompletionsCommand;
pub use notes::NotesCommand;
pub use release::ReleaseCommand;
