mod default_val;

pub use default_val::{DefaultSchema, DefaultValidator};
