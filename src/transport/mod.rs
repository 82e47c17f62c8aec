pub mod client;
#[cfg(test)]
pub mod memory;
pub mod traits;

pub use client::*;
#[cfg(test)]
pub use memory::*;
pub use traits::*;
