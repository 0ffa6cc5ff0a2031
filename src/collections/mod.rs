mod array;
mod tuple;

pub use array::{ArraySchema, ArrayValidator};
pub use tuple::{TupleMember, TupleSchema, TupleSlot, TupleValidator};
