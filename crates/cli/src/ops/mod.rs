mod arithmetic;
mod history;

pub use arithmetic::{Add, Divide, Multiply, Subtract};
pub use history::History;
