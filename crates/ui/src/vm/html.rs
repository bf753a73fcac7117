use std::collections::{HashMap, HashSet};

/// Sanitize question HTML (stems, choices, explanations) before it is
/// injected with `dangerous_inner_html`.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "u", "sub", "sup", "code", "pre",
        "blockquote", "ul", "ol", "li", "table", "thead", "tbody", "tr", "th", "td", "figure",
        "figcaption", "img", "math", "mrow", "mi", "mn", "mo", "msup", "msub", "mfrac", "msqrt",
        "mroot", "mtext", "mspace", "mtable", "mtr", "mtd", "semantics", "annotation",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("img", ["src", "alt", "width", "height"].into_iter().collect());
    attributes.insert("td", ["colspan", "rowspan"].into_iter().collect());
    attributes.insert("th", ["colspan", "rowspan", "scope"].into_iter().collect());
    attributes.insert("math", ["display"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .add_generic_attributes(["aria-label", "role"])
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scripts_and_handlers() {
        let html = r#"<p onclick="steal()">Solve <script>alert(1)</script><em>x</em></p>"#;
        assert_eq!(sanitize_html(html), "<p>Solve <em>x</em></p>");
    }

    #[test]
    fn keeps_tables_and_images() {
        let html = r#"<table><tr><td>1</td></tr></table><img src="https://cdn.test/graph.png" alt="graph" onerror="x()">"#;
        let clean = sanitize_html(html);
        assert!(clean.contains("<td>1</td>"));
        assert!(clean.contains(r#"src="https://cdn.test/graph.png""#));
        assert!(!clean.contains("onerror"));
    }
}
