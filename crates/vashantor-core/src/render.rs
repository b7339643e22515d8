//! HTML and terminal output for a page

use std::fmt::Write;

use vashantor_types::PageView;

/// Escape text for use inside HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Table body rows: index, dialect text, standard text
pub fn render_html_rows(view: &PageView) -> String {
    let mut html = String::new();
    for row in &view.rows {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.index,
            escape_html(&row.record.dialect),
            escape_html(&row.record.standard),
        );
    }
    html
}

/// Standalone document for one page
pub fn render_html_page(view: &PageView) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\">");
    let _ = write!(html, "<title>{}</title>", escape_html(&view.label));
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h2 id=\"current-info\">{}</h2>", escape_html(&view.label));
    let _ = writeln!(html, "<p id=\"page-info\">{}</p>", view.range_text());
    html.push_str("<table>\n<thead><tr><th>#</th><th>Dialect</th><th>Standard</th></tr></thead>\n");
    html.push_str("<tbody id=\"data-body\">\n");
    html.push_str(&render_html_rows(view));
    html.push_str("</tbody>\n</table>\n");
    let _ = writeln!(
        html,
        "<p id=\"pagination-text\">{}{}{}</p>",
        if view.has_previous { "&laquo; " } else { "" },
        view.page_text(),
        if view.has_next { " &raquo;" } else { "" },
    );
    html.push_str("</body>\n</html>\n");
    html
}

/// Standalone document showing only an error, no data table
pub fn render_html_error(message: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\">");
    html.push_str("<title>Error</title></head>\n<body>\n");
    let _ = writeln!(html, "<p id=\"error-message\">{}</p>", escape_html(message));
    html.push_str("</body>\n</html>\n");
    html
}

/// Plain text rendering for the terminal
pub fn render_text_page(view: &PageView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.label);
    for row in &view.rows {
        let _ = writeln!(out, "{:>4}. {}", row.index, row.record.dialect);
        let _ = writeln!(out, "      {}", row.record.standard);
    }
    let _ = writeln!(out, "{}", view.range_text());
    let _ = write!(
        out,
        "{} {} {}",
        if view.has_previous { "[prev]" } else { "      " },
        view.page_text(),
        if view.has_next { "[next]" } else { "" },
    );
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use vashantor_types::{Direction, Record};

    use super::*;
    use crate::pagination::Pagination;

    fn view_of(records: &[Record]) -> PageView {
        Pagination::new(records.len()).view("Sylhet (Split 1)", records)
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>Tom & "Jerry"</b>'s"#),
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;&#39;s"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape_html("আমি ভাত খাই"), "আমি ভাত খাই");
    }

    #[test]
    fn rows_never_contain_raw_markup() {
        let records = vec![Record::new("a < b", "<script>alert(1)</script>", "Sylhet")];
        let html = render_html_rows(&view_of(&records));
        assert_eq!(
            html,
            "<tr><td>1</td><td>&lt;script&gt;alert(1)&lt;/script&gt;</td><td>a &lt; b</td></tr>\n"
        );
    }

    #[test]
    fn page_document_has_descriptors() {
        let records: Vec<Record> = (0..7)
            .map(|i| Record::new(format!("s{i}"), format!("d{i}"), "Sylhet"))
            .collect();
        let html = render_html_page(&view_of(&records));
        assert!(html.contains("Showing 1-5 of 7"));
        assert!(html.contains("Page 1 of 2 &raquo;"));
        assert!(!html.contains("&laquo;"));
        assert_eq!(html.matches("<tr><td>").count(), 5);
    }

    #[test]
    fn error_document_has_no_rows() {
        let html = render_html_error("Error loading data: Failed to load file: <404>");
        assert!(html.contains(
            "<p id=\"error-message\">Error loading data: Failed to load file: &lt;404&gt;</p>"
        ));
        assert!(!html.contains("data-body"));
        assert!(!html.contains("<tr>"));
    }

    #[test]
    fn text_page_shows_navigation_hints() {
        let records: Vec<Record> = (0..12)
            .map(|i| Record::new(format!("s{i}"), format!("d{i}"), "Sylhet"))
            .collect();
        let mut pagination = Pagination::new(records.len());
        pagination.change_page(Direction::Next);
        let text = render_text_page(&pagination.view("Sylhet (Split 1)", &records));

        assert!(text.starts_with("== Sylhet (Split 1) =="));
        assert!(text.contains("   6. d5"));
        assert!(text.contains("Showing 6-10 of 12"));
        assert!(text.ends_with("[prev] Page 2 of 3 [next]"));
    }
}
