pub mod advocate;
pub mod common;
pub mod court;
pub mod court_type;
pub mod error;
pub mod firm;
pub mod session;

pub use advocate::*;
pub use common::*;
pub use court::*;
pub use court_type::*;
pub use error::*;
pub use firm::*;
pub use session::*;
