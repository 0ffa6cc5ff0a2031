mod all_of;
mod one_of;

pub use all_of::{AllOfSchema, AllOfValidator};
pub use one_of::{OneOfSchema, OneOfValidator};
