//! Full HTML document assembly
//!
//! Wraps a generated fragment and its stylesheet into a standalone page, either
//! for on-screen preview or for handing to an external PDF renderer.

use super::markup::escape_html;

/// Target medium for an assembled document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentMode {
    #[default]
    Screen,
    /// A4 page with no margins and exact color reproduction
    Print,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub title: String,
    pub mode: DocumentMode,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: "Resume".to_string(),
            mode: DocumentMode::Screen,
        }
    }
}

impl DocumentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_mode(mut self, mode: DocumentMode) -> Self {
        self.mode = mode;
        self
    }
}

const PRINT_PAGE_CSS: &str = "@page {\n  size: A4;\n  margin: 0;\n}\nhtml, body {\n  -webkit-print-color-adjust: exact;\n  print-color-adjust: exact;\n}\n";

/// Make a stylesheet safe to inline in a `<style>` element
///
/// Font and palette strings reach the stylesheet verbatim. `</` becomes `<\/`,
/// which reads the same to a CSS parser but cannot end the element.
pub fn escape_style(css: &str) -> String {
    css.replace("</", "<\\/")
}

/// Assemble a complete HTML document from a fragment and its stylesheet
pub fn assemble_document(body_html: &str, css: &str, options: &DocumentOptions) -> String {
    let mut doc = String::new();
    doc.push_str("<!DOCTYPE html>\n");
    doc.push_str("<html lang=\"en\">\n");
    doc.push_str("<head>\n");
    doc.push_str("<meta charset=\"utf-8\">\n");
    doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    doc.push_str(&format!("<title>{}</title>\n", escape_html(&options.title)));
    doc.push_str("<style>\n");
    doc.push_str(&escape_style(css));
    if !css.ends_with('\n') {
        doc.push('\n');
    }
    if options.mode == DocumentMode::Print {
        doc.push_str(PRINT_PAGE_CSS);
    }
    doc.push_str("</style>\n");
    doc.push_str("</head>\n");
    doc.push_str("<body>\n");
    doc.push_str(body_html);
    if !body_html.ends_with('\n') {
        doc.push('\n');
    }
    doc.push_str("</body>\n");
    doc.push_str("</html>\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_screen_document_layout() {
        let doc = assemble_document("<div>x</div>", ".a{}", &DocumentOptions::new());
        assert_eq!(
            doc,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>Resume</title>\n<style>\n.a{}\n</style>\n</head>\n<body>\n<div>x</div>\n\
             </body>\n</html>\n"
        );
    }

    #[test]
    fn test_print_mode_adds_page_rules() {
        let options = DocumentOptions::new().with_mode(DocumentMode::Print);
        let doc = assemble_document("", "", &options);
        assert!(doc.contains("size: A4;"));
        assert!(!assemble_document("", "", &DocumentOptions::new()).contains("@page"));
    }

    #[test]
    fn test_style_cannot_be_closed_by_css_text() {
        let css = ".a { font-family: x</style><script>alert(1)</script>; }";
        let doc = assemble_document("", css, &DocumentOptions::new());
        assert!(doc.contains("x<\\/style><script>alert(1)<\\/script>"));
        assert_eq!(doc.matches("</style>").count(), 1);
        let close = doc.find("</style>").expect("style element closes");
        assert!(doc.find("alert(1)").expect("css text kept") < close);
    }

    #[test]
    fn test_title_is_escaped() {
        let options = DocumentOptions::new().with_title("Ada <CV>");
        let doc = assemble_document("", "", &options);
        assert!(doc.contains("<title>Ada &lt;CV&gt;</title>"));
    }
}
