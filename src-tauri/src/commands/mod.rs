pub mod dialog;
pub mod file;

pub use dialog::*;
pub use file::*;
