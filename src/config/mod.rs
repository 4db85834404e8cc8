mod env;
mod pool;

pub use env::*;
pub use pool::*;
