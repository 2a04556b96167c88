//! The escaping policy: deciding per value whether to escape at all

use std::borrow::Cow;
use std::fmt::{self, Write};
use tracing::debug;

use crate::core::escape::escape_text;
use crate::core::markup::Markup;
use crate::error::RenderResult;

/// Text as a value presents it to the escaping policy.
///
/// The decision between the two variants is made once, here; downstream code
/// never rescans safe content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlText<'a> {
    /// Already HTML-safe, inserted verbatim.
    Safe(Cow<'a, str>),
    /// Raw text that must be escaped before insertion.
    Raw(Cow<'a, str>),
}

impl HtmlText<'_> {
    /// The text itself, regardless of variant.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Safe(text) | Self::Raw(text) => text,
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe(_))
    }

    /// Apply the policy, yielding safe markup.
    pub fn into_markup(self) -> Markup {
        match self {
            Self::Safe(text) => Markup::raw(text.into_owned()),
            Self::Raw(text) => Markup::raw(escape_text(&text).into_owned()),
        }
    }
}

/// Values that can present themselves to the escaping policy.
///
/// Implement this to control how a type reaches HTML output: return
/// [`HtmlText::Safe`] for content the type guarantees is already escaped (or
/// can never need escaping), [`HtmlText::Raw`] for plain text. A rendering
/// that can itself fail propagates its error through the `RenderResult`.
pub trait ToHtmlText {
    fn to_html_text(&self) -> RenderResult<HtmlText<'_>>;
}

/// Escape an arbitrary value under the policy.
///
/// Values already tagged safe (including every [`Markup`]) pass through
/// verbatim; numbers, bools and `None` bypass the scan entirely; everything
/// else is converted to text and run through [`escape_text`].
pub fn escape_value<T: ToHtmlText + ?Sized>(value: &T) -> RenderResult<Markup> {
    Ok(value.to_html_text()?.into_markup())
}

/// Render any `Display` value to text, then escape it.
///
/// This is the catch-all path for types without a [`ToHtmlText`]
/// implementation. A formatter error surfaces as a rendering error instead of
/// panicking.
pub fn escape_display<T: fmt::Display + ?Sized>(value: &T) -> RenderResult<Markup> {
    let mut text = String::new();
    write!(text, "{value}")?;
    debug!("Rendered display value to {} bytes of text", text.len());
    Ok(Markup::escape(&text))
}

impl ToHtmlText for Markup {
    fn to_html_text(&self) -> RenderResult<HtmlText<'_>> {
        Ok(HtmlText::Safe(Cow::Borrowed(self.as_str())))
    }
}

impl ToHtmlText for str {
    fn to_html_text(&self) -> RenderResult<HtmlText<'_>> {
        Ok(HtmlText::Raw(Cow::Borrowed(self)))
    }
}

impl ToHtmlText for String {
    fn to_html_text(&self) -> RenderResult<HtmlText<'_>> {
        Ok(HtmlText::Raw(Cow::Borrowed(self)))
    }
}

impl ToHtmlText for Cow<'_, str> {
    fn to_html_text(&self) -> RenderResult<HtmlText<'_>> {
        Ok(HtmlText::Raw(Cow::Borrowed(self)))
    }
}

// A lone char may itself be one of the escaped five.
impl ToHtmlText for char {
    fn to_html_text(&self) -> RenderResult<HtmlText<'_>> {
        Ok(HtmlText::Raw(Cow::Owned(self.to_string())))
    }
}

impl ToHtmlText for bool {
    fn to_html_text(&self) -> RenderResult<HtmlText<'_>> {
        Ok(HtmlText::Safe(Cow::Borrowed(if *self {
            "true"
        } else {
            "false"
        })))
    }
}

// Decimal renderings of the numeric primitives never contain an escapable
// character. Swapping these impls for locale-aware formatting would break
// that assumption; such formatting must go through `Raw` instead.
macro_rules! impl_numeric_bypass {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToHtmlText for $ty {
                fn to_html_text(&self) -> RenderResult<HtmlText<'_>> {
                    Ok(HtmlText::Safe(Cow::Owned(self.to_string())))
                }
            }
        )*
    };
}

impl_numeric_bypass!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Absent values render as empty safe text.
impl<T: ToHtmlText> ToHtmlText for Option<T> {
    fn to_html_text(&self) -> RenderResult<HtmlText<'_>> {
        match self {
            Some(value) => value.to_html_text(),
            None => Ok(HtmlText::Safe(Cow::Borrowed(""))),
        }
    }
}

impl<T: ToHtmlText + ?Sized> ToHtmlText for &T {
    fn to_html_text(&self) -> RenderResult<HtmlText<'_>> {
        (**self).to_html_text()
    }
}
