//! # Browser session layer
//!
//! Abstract capabilities of the browser driver behind the step helpers.
//!
//! ## Core concepts
//! - **Session**: a live browser connection owned by the host test context
//! - **Page**: the document currently loaded, fetched fresh for every query
//! - **Element**: a node matched by a selector, used once and dropped
//!
//! ## Module structure
//! - `traits`: the capability traits and `SelectorKind`
//! - `mock`: in-memory implementations for tests
//!
//! ## Example
//! ```rust,no_run
//! use browser_steps::session::{Session, SelectorKind};
//! use std::sync::Arc;
//!
//! # async fn example(session: Arc<dyn Session>) -> browser_steps::Result<()> {
//! session.visit("http://127.0.0.1").await?;
//! let page = session.page().await?;
//! let links = page.find_all(SelectorKind::Css, "a").await?;
//! println!("{} links", links.len());
//! # Ok(())
//! # }
//! ```

pub mod traits;
pub mod mock;

pub use traits::{Element, Page, SelectorKind, Session};

pub use mock::{MockElement, MockPage, MockSession, RecordedWait};
