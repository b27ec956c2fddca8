pub mod error;
pub mod proxy;
pub mod types;

pub use error::*;
pub use proxy::*;
pub use types::*;
