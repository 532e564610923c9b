pub mod show;
pub mod write;

pub use show::run_show;
pub use write::{resolve_headers, run_write};
