//! cscan-util - Foundation types shared by the cscan crates
//!
//! This crate holds the pieces of the scanner front end that are not about
//! scanning itself:
//!
//! - [`span`] - source locations ([`Span`]) and line lookup ([`SourceFile`])
//! - [`diagnostic`] - coded warnings and the [`Handler`] that collects them
//! - [`error`] - error types for the fallible operations above
//!
//! # Example
//!
//! ```
//! use cscan_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::warning("unterminated string literal")
//!     .code(DiagnosticCode::W_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&mut handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{DiagnosticError, DiagnosticResult, SourceError, SourceResult};
pub use span::{SourceFile, Span};

static_assertions::assert_impl_all!(Span: Send, Sync, Copy);
static_assertions::assert_impl_all!(Diagnostic: Send, Sync, Clone);
