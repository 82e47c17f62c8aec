pub mod instruction;
pub mod manifest;

pub use instruction::*;
pub use manifest::*;
