//! Events layer
//!
//! - `consumed` - messages delivered by the execution engine
//! - `published` - side effects of accepted messages

mod consumed;
mod published;

pub use consumed::*;
pub use published::*;
