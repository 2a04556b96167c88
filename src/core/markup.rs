//! The safe-markup string type

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use crate::core::escape::escape_text;
use crate::core::policy::{HtmlText, ToHtmlText};
use crate::error::RenderResult;

/// A string that is safe to embed in HTML markup verbatim.
///
/// A `Markup` either came out of [`escape_text`] or was explicitly asserted
/// safe by the caller. The escaping policy never escapes it again, so
/// wrapping a value twice cannot double-escape it.
///
/// Serializes transparently as its inner string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Wrap `text` without escaping. The caller asserts the content is
    /// already HTML-safe.
    pub fn raw(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Escape `text` and wrap the result.
    pub fn escape(text: &str) -> Self {
        Self(escape_text(text).into_owned())
    }

    /// View the safe content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the underlying string, dropping the safety tag.
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append already-safe markup verbatim.
    pub fn push_markup(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    /// Escape `text` and append it.
    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape_text(text));
    }

    /// Append any value under the escaping policy: safe values verbatim, raw
    /// text escaped. Fails if the value's own rendering fails.
    pub fn push_value<T: ToHtmlText + ?Sized>(&mut self, value: &T) -> RenderResult<()> {
        match value.to_html_text()? {
            HtmlText::Safe(text) => self.0.push_str(&text),
            HtmlText::Raw(text) => self.0.push_str(&escape_text(&text)),
        }
        Ok(())
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for Markup {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}
