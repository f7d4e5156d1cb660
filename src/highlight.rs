//! Syntax highlighting and language resolution

use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

use crate::{Error, Result};

// Dark theme to match the card styling of the document template.
const THEME: &str = "base16-ocean.dark";

/// Syntax and theme sets loaded once per invocation.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

/// The outcome of language resolution for one snippet.
///
/// `label` is what the document's info region displays: the caller's label
/// verbatim when one was given, the detected syntax's name otherwise. The
/// same `syntax` drives highlighting, so resolution happens exactly once.
#[derive(Debug)]
pub struct ResolvedLanguage<'a> {
    pub label: String,
    pub syntax: &'a SyntaxReference,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    /// Resolve the language for a snippet.
    ///
    /// An explicit non-empty label must name a known syntax, by name or by
    /// file-extension token; anything else is an `UnknownLanguage` error.
    /// Absent or textually-empty labels fall back to first-line detection,
    /// then to the plain-text syntax.
    pub fn resolve<'a>(
        &'a self,
        code: &str,
        language: Option<&str>,
    ) -> Result<ResolvedLanguage<'a>> {
        match language.map(str::trim).filter(|l| !l.is_empty()) {
            Some(label) => {
                let syntax = self
                    .syntaxes
                    .find_syntax_by_token(label)
                    .ok_or_else(|| Error::UnknownLanguage(label.to_string()))?;
                Ok(ResolvedLanguage {
                    label: label.to_string(),
                    syntax,
                })
            }
            None => {
                let first_line = code.lines().next().unwrap_or("");
                let syntax = self
                    .syntaxes
                    .find_syntax_by_first_line(first_line)
                    .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
                Ok(ResolvedLanguage {
                    label: syntax.name.to_lowercase(),
                    syntax,
                })
            }
        }
    }

    /// Highlight a snippet into an HTML block with inline span styles.
    pub fn highlight(&self, code: &str, syntax: &SyntaxReference) -> Result<String> {
        let theme = self
            .themes
            .themes
            .get(THEME)
            .ok_or_else(|| Error::HighlightError(format!("Theme not found: {}", THEME)))?;

        highlighted_html_for_string(code, &self.syntaxes, syntax, theme)
            .map_err(|e| Error::HighlightError(e.to_string()))
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_label_resolves_known_syntax() {
        let highlighter = Highlighter::new();
        let resolved = highlighter
            .resolve("console.log('hi')", Some("javascript"))
            .unwrap();
        assert_eq!(resolved.label, "javascript");
        assert_eq!(resolved.syntax.name, "JavaScript");
    }

    #[test]
    fn explicit_label_is_kept_verbatim() {
        let highlighter = Highlighter::new();
        // Extension tokens resolve too, and the label stays as given
        let resolved = highlighter.resolve("fn main() {}", Some("rs")).unwrap();
        assert_eq!(resolved.label, "rs");
        assert_eq!(resolved.syntax.name, "Rust");
    }

    #[test]
    fn unknown_label_is_an_error() {
        let highlighter = Highlighter::new();
        let err = highlighter.resolve("x", Some("blorbscript")).unwrap_err();
        assert!(matches!(err, Error::UnknownLanguage(_)));
    }

    #[test]
    fn empty_label_falls_back_to_detection() {
        let highlighter = Highlighter::new();
        let resolved = highlighter.resolve("just some words", Some("  ")).unwrap();
        assert_eq!(resolved.label, "plain text");
    }

    #[test]
    fn first_line_detection() {
        let highlighter = Highlighter::new();
        let resolved = highlighter
            .resolve("<?xml version=\"1.0\"?>\n<root/>", None)
            .unwrap();
        assert!(resolved.label.contains("xml"), "detected: {}", resolved.label);
    }

    #[test]
    fn detection_always_yields_a_label() {
        let highlighter = Highlighter::new();
        let resolved = highlighter.resolve("SELECT * FROM t;", None).unwrap();
        assert!(!resolved.label.is_empty());

        // The same resolved syntax drives the highlighted block
        let html = highlighter
            .highlight("SELECT * FROM t;", resolved.syntax)
            .unwrap();
        assert!(html.contains("SELECT"));
    }

    #[test]
    fn highlight_escapes_markup() {
        let highlighter = Highlighter::new();
        let resolved = highlighter.resolve("<b>&</b>", None).unwrap();
        let html = highlighter.highlight("<b>&</b>", resolved.syntax).unwrap();
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
