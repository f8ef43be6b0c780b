//! Web assertion façade
//!
//! Pre-built DOM assertions on top of a [`Session`](crate::session::Session).
//! Step helpers delegate to the [`WebAssert`] trait and pass its failures
//! through untouched.

pub mod traits;
pub mod web_assert;


pub use traits::WebAssert;
pub use web_assert::SessionWebAssert;
