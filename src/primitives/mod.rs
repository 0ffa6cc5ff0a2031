mod any;
mod boolean;
mod constant;
mod date;
mod number;
mod string;

pub use any::AnyValidator;
pub use boolean::BooleanValidator;
pub use constant::ConstantValidator;
pub(crate) use constant::json_equal;
pub use date::DateValidator;
pub use number::NumberValidator;
pub use string::StringValidator;
