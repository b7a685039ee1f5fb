//! # serror — Site-stamped Error
//!
//! A zero-dependency error substrate that decouples what went wrong from
//! where it was raised: a concrete error kind formats its message from its
//! own fields at construction time, and the raise site stamps `file!()` /
//! `line!()` onto a copy at the moment of signaling.
//!
//! ## Design
//!
//! Three pieces, one job each:
//!
//! - **[`ErrorBase`]** — the storage every concrete kind embeds: an owned
//!   message plus a bounded, heap-free [`Site`] (file/line). Unstamped until
//!   signaled.
//!
//! - **[`SiteError`]** — the polymorphic capability handlers catch by:
//!   `.message()`, `.file()`, `.line()`. Object-safe; `Box<dyn SiteError>`
//!   works as a catch-all error type.
//!
//! - **[`stamp`] + [`raise!`]** — the raise-site construct. `stamp` clones
//!   the error and sets the context on the clone (the input is never
//!   mutated); `raise!` captures the current location and signals the
//!   stamped copy as `Err` in one step.
//!
//! ## Quick Start
//!
//! ```rust
//! use serror::{ErrorBase, SiteError, impl_site_error, raise};
//!
//! // Define a concrete kind: message fixed at construction.
//! #[derive(Clone, Debug)]
//! struct NotFound {
//!     base: ErrorBase,
//! }
//!
//! impl NotFound {
//!     fn new(symbol: &str) -> Self {
//!         Self { base: ErrorBase::new(format!("symbol '{symbol}' not found")) }
//!     }
//! }
//!
//! impl_site_error!(NotFound);
//!
//! // Signal through the raise-site macro: context is attached before
//! // control leaves the raising frame.
//! fn lookup(symbol: &str) -> Result<u32, NotFound> {
//!     raise!(NotFound::new(symbol));
//! }
//!
//! let err = lookup("x").unwrap_err();
//! assert_eq!(err.message(), "symbol 'x' not found");
//! assert_eq!(err.file(), file!());
//! assert!(err.line() > 0);
//! ```
//!
//! ## Context rules
//!
//! | Rule | Behavior |
//! |------|----------|
//! | Unstamped default | `file() == ""`, `line() == 0` |
//! | Stamping | copies the error, never mutates the input |
//! | Re-raise | last stamp wins — re-raising layers go through [`raise!`] again |
//! | Long file names | truncated to [`FILE_CAPACITY`]` - 1` bytes, never an error |
//!
//! ## Dependencies
//!
//! Zero. By design.

mod site;
mod base;
mod error;
mod stamp;
#[macro_use]
mod macros;

// ── Public API ────────────────────────────────────────────────────

pub use site::{Site, FILE_CAPACITY};
pub use base::ErrorBase;
pub use error::SiteError;
pub use stamp::{stamp, stamp_here};

// Macros (`impl_site_error!`, `stamped!`, `raise!`, `ensure!`) use
// #[macro_export], so they already live at the crate root.
