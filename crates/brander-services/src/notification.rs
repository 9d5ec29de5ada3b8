//! HTML rendering of a finished request.
//!
//! The same document is the `/brand` response body and the email body. URLs are
//! inserted as-is.

use brander_core::{ImageResult, NotificationPayload};
use std::fmt::Write;

/// Render the results page: optional package link, then one original/processed pair per image.
pub fn render_results_html(payload: &NotificationPayload) -> String {
    let mut html = String::from("<html><body>");

    if let Some(ref package_url) = payload.package_url {
        html.push_str("<div style=\"margin-top: 20px;\">");
        html.push_str("<h3>Download Zip File</h3>");
        let _ = write!(html, "<a href=\"{0}\">{0}</a><br/>", package_url);
        html.push_str("</div><br/>");
    }

    for result in &payload.results {
        render_result(&mut html, result);
    }

    html.push_str("</body></html>");
    html
}

fn render_result(html: &mut String, result: &ImageResult) {
    html.push_str("<div style=\"display: flex;\">");
    render_column(html, "Original Image", &result.original_url);
    render_column(html, "Processed Image", &result.processed_url);
    html.push_str("</div>");
}

fn render_column(html: &mut String, title: &str, url: &str) {
    html.push_str("<div style=\"flex: 1;\">");
    let _ = write!(html, "<h3>{}</h3>", title);
    let _ = write!(html, "<a href=\"{0}\">{0}</a><br/>", url);
    let _ = write!(html, "<a href=\"{}\">", url);
    let _ = write!(
        html,
        "<img src=\"{}\" alt=\"{}\" style=\"max-width: 400px;\"/><br/>",
        url, title
    );
    html.push_str("</a>");
    html.push_str("</div>");
}

/// Body of a failed request. The message is echoed unescaped.
pub fn render_error_html(message: &str) -> String {
    format!("<h1>Error processing request</h1><p>{}</p>", message)
}
