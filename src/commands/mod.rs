mod tidy;

pub use tidy::{Tidy, TidyOptions};
