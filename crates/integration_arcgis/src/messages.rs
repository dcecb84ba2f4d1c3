//! User-facing message rendering
//!
//! Error texts are English templates with `{name}` placeholders. A host
//! application that localizes its UI plugs its own [`MessageCatalog`] in
//! and renders errors with [`crate::ArcgisError::localized`].

/// Translates a message template and fills in its placeholders
pub trait MessageCatalog: Send + Sync {
    /// Render `template`, replacing each `{name}` with the matching value
    fn translate(&self, template: &str, args: &[(&str, String)]) -> String;
}

/// Catalog that keeps the English template and only substitutes arguments
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn translate(&self, template: &str, args: &[(&str, String)]) -> String {
        substitute(template, args)
    }
}

/// Replace `{name}` placeholders in `template`
///
/// Unknown placeholders are left untouched.
#[must_use]
pub fn substitute(template: &str, args: &[(&str, String)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}
