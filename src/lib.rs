//! datefmt: token-based, locale-aware date/time formatting
//!
//! Formats a point in time by substituting recognized tokens in a pattern
//! string (`YYYY`, `MMMM`, `hh`, `ZZ`, ...) with zero-padded or named
//! representations of the corresponding date components. Unrecognized
//! characters pass through verbatim, and whole patterns can be aliased as
//! named formats (`ISODate`, ...).
//!
//! ```
//! use chrono::DateTime;
//!
//! let date = DateTime::parse_from_rfc3339("2024-08-09T14:30:05.123+03:00").unwrap();
//! assert_eq!(datefmt::format("YYYY-MM-dd hh:mm A", date), "2024-08-09 02:30 PM");
//! assert_eq!(datefmt::format("ISODate", date), "2024-08-09");
//! ```
//!
//! The free functions below operate on a process-wide shared
//! [`FormatterContext`]; callers that want isolated locale or named-format
//! state construct their own context and call its methods directly.

pub mod engine;
pub mod locale;
pub mod snapshot;
pub mod tokens;

pub use engine::{replace_shared, FormatterContext, DEFAULT_LANG};
pub use locale::{LocaleDefinition, NameFn, NameSource};
pub use snapshot::{DateInput, DateSnapshot};

/// Formats `date` according to `pattern` against the shared context.
pub fn format(pattern: &str, date: impl Into<DateInput>) -> String {
    engine::with_shared(|ctx| ctx.format(pattern, date))
}

/// Formats the current instant according to `pattern`.
pub fn format_now(pattern: &str) -> String {
    format(pattern, DateInput::Now)
}

/// Current locale name of the shared context.
pub fn lang() -> String {
    engine::with_shared(|ctx| ctx.lang().to_string())
}

/// Makes `name` the shared context's current locale; see
/// [`FormatterContext::set_lang`] for the permissive-name semantics.
pub fn set_lang(name: &str) -> String {
    engine::with_shared(|ctx| ctx.set_lang(name))
}

/// Registers `definition` under `name` in the shared context and makes it
/// current.
pub fn define_lang(name: &str, definition: LocaleDefinition) -> String {
    engine::with_shared(|ctx| ctx.define_lang(name, definition))
}

/// Locale names registered in the shared context.
pub fn languages() -> Vec<String> {
    engine::with_shared(|ctx| ctx.languages())
}

/// Registers (or overwrites) a named format in the shared context.
pub fn register(name: &str, pattern: &str) {
    engine::with_shared(|ctx| ctx.register(name, pattern))
}

/// Named-format keys registered in the shared context.
pub fn formatters() -> Vec<String> {
    engine::with_shared(|ctx| ctx.formatters())
}
