//! # Domain Model
//!
//! Pure data structures for the notification flow: the order payload
//! submitted by checkout and the order record tracked by the store actor.

pub mod order;
pub mod record;

pub use order::*;
pub use record::*;
