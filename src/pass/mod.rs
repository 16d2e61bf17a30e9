//! Password generation and entropy scoring.

pub mod charset;
mod entropy;
mod generate;

pub use charset::{CharClass, ClassSet};
pub use entropy::{entropy, Strength};
pub use generate::{generate, InvalidRequest};
