//! Format engine and the process-wide shared context
//!
//! `FormatterContext` owns the locale registry, the current-locale pointer
//! and the named-format table. Callers can own a context directly; the free
//! functions in the crate root operate on a shared instance behind a mutex.

use crate::locale::LocaleDefinition;
use crate::snapshot::DateInput;
use crate::tokens::{self, TOKEN_RE};
use lazy_static::lazy_static;
use regex::Captures;
use std::collections::HashMap;
use std::sync::Mutex;

/// The pre-registered default locale name.
pub const DEFAULT_LANG: &str = "en";

/// Per-field lookups against a name with no registered definition fall back
/// to the `en` tables.
static UNDEFINED_LOCALE: LocaleDefinition = LocaleDefinition {
    months: None,
    months_short: None,
    weekdays: None,
    weekdays_short: None,
    weekdays_min: None,
};

/// Locale registry, current-locale pointer and named-format table.
#[derive(Debug, Clone)]
pub struct FormatterContext {
    languages: HashMap<String, LocaleDefinition>,
    current: String,
    formatters: HashMap<String, String>,
}

impl FormatterContext {
    /// A fresh context with `en` registered and the standard ISO named
    /// formats pre-registered.
    pub fn new() -> Self {
        let mut languages = HashMap::new();
        languages.insert(DEFAULT_LANG.to_string(), LocaleDefinition::en());

        let mut context = Self {
            languages,
            current: DEFAULT_LANG.to_string(),
            formatters: HashMap::new(),
        };

        context.register("ISODate", "YYYY-MM-dd");
        context.register("ISOTime", "hh:mm:ss");
        context.register("ISODateTime", "YYYY-MM-ddThh:mm:ss");
        context.register("ISODateTimeTZ", "YYYY-MM-ddThh:mm:ssZ");
        context
    }

    /// lang() - current locale name. Pure read.
    pub fn lang(&self) -> &str {
        &self.current
    }

    /// Makes `name` the current locale and returns it.
    ///
    /// The name is accepted whether or not a definition was ever registered
    /// for it; lookups against an undefined locale fall back to `en` per
    /// field.
    pub fn set_lang(&mut self, name: &str) -> String {
        self.current = name.to_string();
        self.current.clone()
    }

    /// Registers (or overwrites) `definition` under `name`, makes it the
    /// current locale and returns the name.
    pub fn define_lang(&mut self, name: &str, definition: LocaleDefinition) -> String {
        self.languages.insert(name.to_string(), definition);
        self.set_lang(name)
    }

    /// The definition registered under `name`, if any.
    pub fn language(&self, name: &str) -> Option<&LocaleDefinition> {
        self.languages.get(name)
    }

    /// Registered locale names, in no particular order.
    pub fn languages(&self) -> Vec<String> {
        self.languages.keys().cloned().collect()
    }

    /// Registers (or overwrites) a named format expanding to `pattern`.
    pub fn register(&mut self, name: &str, pattern: &str) {
        self.formatters
            .insert(name.to_string(), pattern.to_string());
    }

    /// Registered named-format keys, in no particular order.
    pub fn formatters(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    /// format() - formats `date` according to `pattern`.
    ///
    /// A pattern that exactly matches a registered named format expands to
    /// that format's pattern first; a name occurring inside a longer pattern
    /// is not expanded. Tokens are then substituted longest-match-first and
    /// every other character is copied through verbatim. Formatting never
    /// mutates the context.
    pub fn format(&self, pattern: &str, date: impl Into<DateInput>) -> String {
        let snapshot = date.into().snapshot();

        let pattern = match self.formatters.get(pattern) {
            Some(expansion) => expansion.as_str(),
            None => pattern,
        };

        let locale = self
            .languages
            .get(&self.current)
            .unwrap_or(&UNDEFINED_LOCALE);

        TOKEN_RE
            .replace_all(pattern, |caps: &Captures| {
                tokens::resolve(&caps[0], &snapshot, locale)
            })
            .into_owned()
    }
}

impl Default for FormatterContext {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref SHARED: Mutex<FormatterContext> = Mutex::new(FormatterContext::new());
}

/// Runs `f` against the process-wide shared context.
pub fn with_shared<R>(f: impl FnOnce(&mut FormatterContext) -> R) -> R {
    let mut context = SHARED.lock().unwrap();
    f(&mut context)
}

/// Installs `context` as the shared context and returns the previous
/// occupant, so a caller can put an earlier context back while keeping a
/// handle to the one it displaced.
pub fn replace_shared(context: FormatterContext) -> FormatterContext {
    let mut shared = SHARED.lock().unwrap();
    std::mem::replace(&mut *shared, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::NameSource;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn fixed(text: &str) -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339(text).unwrap()
    }

    #[test]
    fn test_format_composite_pattern() {
        let ctx = FormatterContext::new();
        let date = fixed("2024-08-09T14:30:05.123+03:00");
        assert_eq!(ctx.format("YYYY-MM-dd", date), "2024-08-09");
        assert_eq!(ctx.format("HH:mm:ss.ff", date), "14:30:05.123");
        assert_eq!(ctx.format("DDD, MMM d", date), "Friday, Aug 9");
    }

    #[test]
    fn test_named_format_exact_match_only() {
        let ctx = FormatterContext::new();
        let date = fixed("2024-08-09T14:30:05+03:00");
        assert_eq!(ctx.format("ISODate", date), "2024-08-09");
        // Inside a longer pattern the name is ordinary token/literal text.
        assert_eq!(ctx.format("ISODate dd", date), "ISOFrpmte 09");
    }

    #[test]
    fn test_register_overwrites() {
        let mut ctx = FormatterContext::new();
        let date = fixed("2024-08-09T14:30:05+03:00");
        ctx.register("ISODate", "dd.MM.YYYY");
        assert_eq!(ctx.format("ISODate", date), "09.08.2024");
    }

    #[test]
    fn test_set_lang_is_permissive() {
        let mut ctx = FormatterContext::new();
        assert_eq!(ctx.set_lang("xx"), "xx");
        assert_eq!(ctx.lang(), "xx");
        // Undefined locale formats with the default tables.
        let date = fixed("2024-08-09T14:30:05+03:00");
        assert_eq!(ctx.format("MMMM", date), "August");
    }

    #[test]
    fn test_define_lang_sets_current() {
        let mut ctx = FormatterContext::new();
        let name = ctx.define_lang(
            "pl",
            LocaleDefinition {
                months: Some(NameSource::fixed(&[
                    "styczeń",
                    "luty",
                    "marzec",
                    "kwiecień",
                    "maj",
                    "czerwiec",
                    "lipiec",
                    "sierpień",
                    "wrzesień",
                    "październik",
                    "listopad",
                    "grudzień",
                ])),
                ..Default::default()
            },
        );
        assert_eq!(name, "pl");
        assert_eq!(ctx.lang(), "pl");

        let date = fixed("2024-08-09T14:30:05+03:00");
        assert_eq!(ctx.format("MMMM", date), "sierpień");
        assert_eq!(ctx.format("DDD", date), "Friday");
    }

    #[test]
    fn test_formatters_listing() {
        let ctx = FormatterContext::new();
        let names = ctx.formatters();
        assert!(names.contains(&"ISODate".to_string()));
        assert!(names.contains(&"ISOTime".to_string()));
        assert!(names.contains(&"ISODateTime".to_string()));
        assert!(names.contains(&"ISODateTimeTZ".to_string()));
    }

    #[test]
    fn test_format_does_not_mutate_registry() {
        let ctx = FormatterContext::new();
        let before = ctx.languages();
        ctx.format("YYYY-MM-dd", fixed("2024-08-09T14:30:05+03:00"));
        assert_eq!(ctx.languages(), before);
        assert_eq!(ctx.lang(), "en");
    }
}
