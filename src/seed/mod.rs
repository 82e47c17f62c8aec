pub mod dispatch;
pub mod driver;
pub mod key;
pub mod source;

pub use dispatch::dispatch;
pub use driver::*;
pub use key::key_path;
pub use source::read_tokens;
