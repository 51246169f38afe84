//! File-backed adapters around the search core.

pub mod names_file;
pub mod session_file;

pub use names_file::load_roster;
pub use session_file::load_session;
