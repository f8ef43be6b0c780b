//! # Step helpers
//!
//! Reusable building blocks for browser acceptance steps.
//!
//! ## Module structure
//! - `element`: selector assertions (existence, count, attributes) and clicks
//! - `maildev`: inspection of the newest message in a Maildev inbox
//! - `selectors`: the Maildev UI selector table
//! - `scripts`: JavaScript run inside the page

pub mod element;
pub mod maildev;
pub mod scripts;
pub mod selectors;


pub use element::{fix_step_argument, ElementSteps};
pub use maildev::{resolve_host, MaildevSteps};
pub use selectors::MaildevSelectors;
