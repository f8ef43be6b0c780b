//! Browser-Steps: reusable step helpers for browser acceptance tests
//!
//! This library provides selector-based element assertions, a Maildev inbox
//! helper and a natural-language step surface, all on top of abstract browser
//! session traits.

pub mod error;
pub mod config;
pub mod logging;

pub mod session;
pub mod assertion;
pub mod helpers;
pub mod steps;

// Re-exports
pub use error::{Error, ExpectedCount, Result};
pub use assertion::{SessionWebAssert, WebAssert};
pub use helpers::{ElementSteps, MaildevSteps};
pub use steps::{FeatureContext, Step};

/// Browser-Steps library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
