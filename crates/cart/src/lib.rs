//! Cart state manager.
//!
//! This crate provides the session cart and its three mutations:
//! - `add_item`: add one unit of an item, subject to live stock
//! - `remove_item`: drop an item from the cart
//! - `set_amount`: set an item's quantity, subject to live stock
//!
//! Every successful mutation is written through to a persistent snapshot
//! before it becomes visible in memory, so cart state survives process
//! restarts. Every failure is converted into a single notification and
//! leaves the cart exactly as it was.

pub mod config;
pub mod failure;
pub mod item;
pub mod notify;
pub mod store;

pub use config::Config;
pub use failure::CartFailure;
pub use item::{Cart, CartItem};
pub use notify::{ChannelSink, NotificationSink, RecordingSink, TracingSink};
pub use store::CartStore;
