//! Language codes and the ambient language context.

use std::cell::RefCell;
use std::fmt;

/// A content language code, e.g. `"en"` or `"da"`.
///
/// Field values are stored per language. The "current" language is
/// ambient, thread-local state read with [`Language::current`] and
/// changed for a lexical scope with [`LanguageScope`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

thread_local! {
    static CURRENT: RefCell<Language> = RefCell::new(Language::new(Language::DEFAULT));
}

impl Language {
    /// The language used when no scope is active.
    pub const DEFAULT: &'static str = "en";

    /// Creates a language from a code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The invariant language (empty code).
    #[must_use]
    pub fn invariant() -> Self {
        Self(String::new())
    }

    /// Returns the language code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the invariant language.
    #[must_use]
    pub fn is_invariant(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the ambient current language of this thread.
    #[must_use]
    pub fn current() -> Self {
        CURRENT.with(|current| current.borrow().clone())
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// RAII guard that switches the ambient current language.
///
/// The previous language is restored when the guard is dropped. Scopes
/// nest.
///
/// # Example
///
/// ```rust
/// use fakecms_model::{Language, LanguageScope};
///
/// assert_eq!(Language::current().as_str(), "en");
/// {
///     let _scope = LanguageScope::enter("da");
///     assert_eq!(Language::current().as_str(), "da");
/// }
/// assert_eq!(Language::current().as_str(), "en");
/// ```
#[must_use = "the previous language is restored when the scope is dropped"]
pub struct LanguageScope {
    previous: Language,
}

impl LanguageScope {
    /// Switches the current language until the returned guard is dropped.
    pub fn enter(language: impl Into<Language>) -> Self {
        let previous = CURRENT.with(|current| current.replace(language.into()));
        Self { previous }
    }
}

impl Drop for LanguageScope {
    fn drop(&mut self) {
        CURRENT.with(|current| {
            *current.borrow_mut() = self.previous.clone();
        });
    }
}
