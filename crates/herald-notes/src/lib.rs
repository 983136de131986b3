//! Herald Notes - Release notes generation
//!
//! Turns a raw `git log` into a release body: parse records, drop excluded
//! titles, optionally resolve authors, then render through the commit and
//! release templates.

pub mod authors;
pub mod filter;
pub mod generator;
pub mod parser;
pub mod template;
pub mod types;

pub use authors::AuthorLookup;
pub use filter::CommitFilter;
pub use generator::ReleaseNotesGenerator;
pub use types::CommitRecord;
