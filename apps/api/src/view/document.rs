use crate::view::node::Node;
use crate::view::styles::DOCUMENT_CSS;

/// Wraps a rendered resume in a standalone HTML page with the base stylesheet.
pub fn standalone_document(root: &Node, title: Option<&str>) -> String {
    let mut html = String::with_capacity(8192);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<title>");
    html.push_str(&Node::text(title.unwrap_or("Resume")).to_html());
    html.push_str("</title>\n<style>\n");
    html.push_str(DOCUMENT_CSS);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&root.to_html());
    html.push_str("\n</body>\n</html>\n");
    html
}
