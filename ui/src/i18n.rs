//! Localization for `chic44-ui`.
//!
//! Wires together `i18n-embed` (language selection + asset loading),
//! `fluent` (message formatting), `rust-embed` (compile-time embedding of
//! the `.ftl` files) and `i18n-embed-fl` (compile-time-checked `fl!`).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/chic44-ui.ftl   (fallback/reference)
//!   es-CO/chic44-ui.ftl   (store default)
//! ```
//!
//! Two lookup paths exist on purpose:
//! - [`t!`] for literal keys in component markup (checked at compile time).
//! - [`tr`] for data-driven keys (navigation labels, product names) that
//!   only exist as strings at runtime.
//!
//! The platform shells call [`init`] once at startup and then
//! [`set_language`] whenever the user toggles the language button; both
//! operate on the shared [`LOADER`].

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro for literal keys.
/// Examples:
///     t!("nav-woman")
///     t!("search-no-results", query = query.as_str())
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the FTL filename in each locale folder).
const DOMAIN: &str = "chic44-ui";

/// Language the storefront starts in. The shops are in Antioquia; Spanish
/// first, English on toggle.
pub const DEFAULT_LANGUAGE: &str = "es-CO";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro and [`tr`].
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent). Selects the store default language; the
/// shells re-select on user toggle.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = set_language(DEFAULT_LANGUAGE) {
            eprintln!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored
/// (Ok returned) and the current selection stays in effect.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Runtime lookup for keys that arrive as data (nav labels, product name
/// keys from the remote catalog). Falls back per the loader's rules.
pub fn tr(key: &str) -> String {
    LOADER.get(key)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// The tag the language toggle switches to from `current`.
pub fn toggled_language(current: &str) -> &'static str {
    if current.starts_with("es") {
        "en-US"
    } else {
        DEFAULT_LANGUAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_store_languages_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-CO"));
    }

    #[test]
    fn invalid_language_tag_is_ignored() {
        init();
        let before = tr("nav-woman");
        let _ = set_language("not a tag");
        let after = tr("nav-woman");
        assert_eq!(before, after);
    }

    #[test]
    fn toggle_alternates_between_spanish_and_english() {
        assert_eq!(toggled_language("es-CO"), "en-US");
        assert_eq!(toggled_language("en-US"), "es-CO");
        // Unknown tags fall back to the store default.
        assert_eq!(toggled_language("fr-FR"), "es-CO");
    }
}
