//! Soft text coercion and composition helpers

use tracing::debug;

use crate::core::markup::Markup;
use crate::core::policy::{HtmlText, ToHtmlText};
use crate::error::RenderResult;

/// Get a value's text without forcing an escaping decision.
///
/// A value that is already text comes back borrowed and unchanged; in
/// particular a [`Markup`] stays tagged safe instead of collapsing into a
/// plain string. Anything else is converted. Use this when composing values
/// where the safe/raw distinction must survive the composition.
///
/// # Examples
///
/// ```
/// use safemark::{Markup, coerce_to_text};
///
/// let safe = Markup::escape("a < b");
/// let text = coerce_to_text(&safe).unwrap();
/// assert!(text.is_safe());
/// assert_eq!(text.as_str(), "a &lt; b");
///
/// let plain = coerce_to_text("a < b").unwrap();
/// assert!(!plain.is_safe());
/// assert_eq!(plain.as_str(), "a < b");
/// ```
pub fn coerce_to_text<T: ToHtmlText + ?Sized>(value: &T) -> RenderResult<HtmlText<'_>> {
    value.to_html_text()
}

/// Concatenate values into one piece of safe markup.
///
/// Raw operands are escaped, safe operands are appended verbatim.
pub fn concat_values<'a, I>(values: I) -> RenderResult<Markup>
where
    I: IntoIterator<Item = &'a dyn ToHtmlText>,
{
    let mut output = Markup::default();
    let mut count = 0usize;
    for value in values {
        output.push_value(value)?;
        count += 1;
    }
    debug!("Concatenated {} values into {} bytes", count, output.len());
    Ok(output)
}
