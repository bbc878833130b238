pub mod types;

pub use types::{ItemId, Money};
