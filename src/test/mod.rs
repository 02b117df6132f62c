
pub use test_helper::{with_gzipped_input_file, with_input_file};
