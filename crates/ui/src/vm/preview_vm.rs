use std::collections::{HashMap, HashSet};

/// The document the playground opens with.
pub const STARTER_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>My Page</title>
  <style>
    body {
      font-family: Arial, sans-serif;
      padding: 20px;
      background: linear-gradient(135deg, #0B3B24, #1a5c3a);
      color: white;
    }
    .container {
      max-width: 600px;
      margin: 0 auto;
      text-align: center;
    }
    h1 {
      color: #CBA135;
    }
  </style>
</head>
<body>
  <div class="container">
    <h1>Welcome to GMU Coding Club!</h1>
    <p>Edit the code on the left to see changes here.</p>
  </div>
</body>
</html>"#;

/// Sanitize playground markup before it reaches the preview pane.
///
/// This is the isolation boundary for user-supplied code: structural tags and
/// `<style>` survive so HTML/CSS demos work, while scripts, event-handler
/// attributes, and `javascript:` URLs are removed. Nothing rendered in the
/// preview can reach app state or the network. Every preview render must go
/// through this function.
#[must_use]
pub fn sanitize_preview(raw: &str) -> String {
    let tags: HashSet<&str> = [
        "html", "head", "body", "title", "style", "p", "div", "span", "br", "hr", "em", "strong",
        "b", "i", "u", "code", "pre", "blockquote", "ul", "ol", "li", "a", "h1", "h2", "h3", "h4",
        "h5", "h6", "img", "table", "thead", "tbody", "tr", "th", "td", "section", "header",
        "footer",
    ]
    .into_iter()
    .collect();

    // `style` is stripped with its content by default; the playground keeps
    // it so CSS demos render. Scripts stay gone, content included.
    let strip_with_content: HashSet<&str> = ["script"].into_iter().collect();

    let generic: HashSet<&str> = ["class", "id"].into_iter().collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("img", ["src", "alt"].into_iter().collect());

    ammonia::Builder::new()
        .clean_content_tags(strip_with_content)
        .tags(tags)
        .generic_attributes(generic)
        .tag_attributes(attributes)
        .clean(raw)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_structure_and_style() {
        let clean = sanitize_preview(STARTER_DOCUMENT);
        assert!(clean.contains("Welcome to GMU Coding Club!"));
        assert!(clean.contains("<style>"));
        assert!(clean.contains("#CBA135"));
        assert!(clean.contains("class=\"container\""));
    }

    #[test]
    fn strips_script_tags_with_content() {
        let clean = sanitize_preview("<p>ok</p><script>fetch('/secrets')</script>");
        assert!(clean.contains("<p>ok</p>"));
        assert!(!clean.contains("script"));
        assert!(!clean.contains("fetch"));
    }

    #[test]
    fn strips_event_handler_attributes() {
        let clean = sanitize_preview("<div onclick=\"steal()\">hi</div>");
        assert!(clean.contains("hi"));
        assert!(!clean.contains("onclick"));
    }

    #[test]
    fn strips_javascript_urls() {
        let clean = sanitize_preview("<a href=\"javascript:alert(1)\">Link</a>");
        assert!(clean.contains("Link"));
        assert!(!clean.contains("javascript:"));
    }

    #[test]
    fn strips_iframes() {
        let clean = sanitize_preview("<iframe src=\"https://example.com\"></iframe><p>after</p>");
        assert!(!clean.contains("iframe"));
        assert!(clean.contains("after"));
    }
}
