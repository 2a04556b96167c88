//! HTML escaping with safe-markup tagging.
//!
//! Converts untrusted text into HTML-safe text by replacing `"`, `'`, `&`,
//! `<` and `>` with character references, and tracks already-safe content
//! with the [`Markup`] type so nothing gets escaped twice.
//!
//! Pure logic, no I/O: [`escape_text`] is a total function over string
//! slices, and the policy layer ([`escape_value`], [`ToHtmlText`]) decides
//! per value whether escaping is needed at all.
//!
//! # Example
//!
//! ```
//! use safemark::{Markup, escape_value};
//!
//! let escaped = escape_value("Tom & Jerry").unwrap();
//! assert_eq!(escaped.as_str(), "Tom &amp; Jerry");
//!
//! // Already-safe markup passes through untouched.
//! let again = escape_value(&escaped).unwrap();
//! assert_eq!(again, escaped);
//!
//! // Numbers never need escaping and skip the scan.
//! assert_eq!(escape_value(&42).unwrap(), Markup::raw("42"));
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod util;

pub use crate::core::escape::escape_text;
pub use crate::core::markup::Markup;
pub use crate::core::policy::{HtmlText, ToHtmlText, escape_display, escape_value};
pub use crate::error::{RenderError, RenderResult};
pub use crate::util::text::{coerce_to_text, concat_values};
