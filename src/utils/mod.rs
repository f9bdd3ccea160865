pub mod paths;

pub use paths::{format_path_with_tilde, write_all_atomic, write_atomic};
