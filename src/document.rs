//! Self-contained HTML document assembly

use tera::{Context, Tera};

use crate::highlight::Highlighter;
use crate::{Error, Result, Snippet};

// Presentational shell for one snippet. Static content, not logic; the
// document it produces is self-contained (no network-fetched assets), so a
// local file:// load settles without outbound requests.
const TEMPLATE: &str = include_str!("../assets/template.html");

// The `.html` suffix keeps Tera's autoescaping on for the language label.
const TEMPLATE_NAME: &str = "snippet.html";

/// A fully assembled document for one invocation.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Resolved language label, as shown in the info region
    pub language: String,
    /// Complete markup, ready to load in a browser and to copy
    pub html: String,
}

/// Interpolate the highlighted markup and the language label into the
/// presentational template.
pub fn render_document(language: &str, highlighted: &str) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| Error::TemplateError(e.to_string()))?;

    let mut context = Context::new();
    context.insert("language", language);
    context.insert("code", highlighted);

    tera.render(TEMPLATE_NAME, &context)
        .map_err(|e| Error::TemplateError(e.to_string()))
}

/// Resolve, highlight, and wrap a snippet into a rendered document.
///
/// This is the browser-free front half of the pipeline; `create_code_image`
/// builds on it. Language resolution runs once and the resolved label flows
/// into both the highlighted block and the info region.
pub fn render_markup(snippet: &Snippet) -> Result<RenderedDocument> {
    let highlighter = Highlighter::new();
    let resolved = highlighter.resolve(&snippet.code, snippet.language.as_deref())?;
    let highlighted = highlighter.highlight(&snippet.code, resolved.syntax)?;
    let html = render_document(&resolved.label, &highlighted)?;

    Ok(RenderedDocument {
        language: resolved.label,
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_region_carries_label_verbatim() {
        let html = render_document("javascript", "<pre>x</pre>").unwrap();
        assert!(html.contains("class=\"code-info\">javascript<"));
    }

    #[test]
    fn highlighted_block_is_inserted_unescaped() {
        let block = "<pre><span style=\"color:#c0c5ce;\">x</span></pre>";
        let html = render_document("rust", block).unwrap();
        assert!(html.contains(block));
    }

    #[test]
    fn label_is_escaped() {
        let html = render_document("a<b", "<pre>x</pre>").unwrap();
        assert!(html.contains("a&lt;b"));
        assert!(!html.contains("class=\"code-info\">a<b<"));
    }

    #[test]
    fn document_is_complete() {
        let html = render_document("rust", "<pre>x</pre>").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn render_markup_reuses_detected_language() {
        let snippet = Snippet::new("<?xml version=\"1.0\"?>\n<root/>");
        let doc = render_markup(&snippet).unwrap();
        let info = format!("class=\"code-info\">{}<", doc.language);
        assert!(doc.html.contains(&info));
    }
}
