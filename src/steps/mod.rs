//! # Step surface
//!
//! Natural-language steps for a behaviour-driven runner.
//!
//! ## Module structure
//! - `definitions`: step patterns and the typed [`Step`]
//! - `context`: [`FeatureContext`], which runs steps against a session
//!
//! ## Example
//! ```rust,no_run
//! use browser_steps::session::Session;
//! use browser_steps::steps::FeatureContext;
//! use std::sync::Arc;
//!
//! # async fn example(session: Arc<dyn Session>) -> browser_steps::Result<()> {
//! let mut context = FeatureContext::new(session);
//! context.maildev_mut().set_mail_dev_host("maildev").await;
//!
//! context.run_scenario([
//!     "When I browse latest received email",
//!     "Then I should see \"Welcome\" in the \".container-padding\" element",
//! ]).await?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod definitions;

#[cfg(test)]
mod tests;

pub use context::FeatureContext;
pub use definitions::{strip_keyword, Step, StepDefinition, DEFINITIONS};
