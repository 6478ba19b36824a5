//! Placeholder template rendering
//!
//! Templates embed three constructs:
//!
//! ```text
//! {{ hero.heading }}                         placeholder substitution
//! {% for plan in pricing.plans %} ... {% endfor %}
//! {% if hero.video %} ... {% else %} ... {% endif %}
//! ```
//!
//! Placeholder paths are dotted/bracketed ([`crate::doc`]). A missing
//! path renders as an empty string and never aborts the page; only a
//! structurally broken template (unterminated tag, unbalanced blocks)
//! is an error. Rendering is pure, so the same document always yields
//! the same output.

use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::OnceLock;

use crate::doc::{get_path, get_value_path, scalar_to_string, truthy};
use crate::error::{Result, template_malformed};

#[derive(Debug)]
enum Token {
    Text(String),
    /// `{{ path }}`
    Var(String),
    /// `{% ... %}`
    Tag(String),
}

#[derive(Debug)]
enum Node {
    Text(String),
    Placeholder(String),
    For {
        var: String,
        path: String,
        body: Vec<Node>,
    },
    If {
        path: String,
        then_body: Vec<Node>,
        else_body: Vec<Node>,
    },
}

fn for_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^for\s+(\w+)\s+in\s+(\S+)$").expect("static regex"))
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut rest = input;

    loop {
        let var_at = rest.find("{{");
        let tag_at = rest.find("{%");

        let (at, open, close, is_tag) = match (var_at, tag_at) {
            (None, None) => break,
            (Some(v), None) => (v, "{{", "}}", false),
            (None, Some(t)) => (t, "{%", "%}", true),
            (Some(v), Some(t)) if v < t => (v, "{{", "}}", false),
            (_, Some(t)) => (t, "{%", "%}", true),
        };

        if at > 0 {
            tokens.push(Token::Text(rest[..at].to_string()));
        }

        let after_open = &rest[at + open.len()..];
        let end = after_open
            .find(close)
            .ok_or_else(|| template_malformed(format!("unterminated '{}'", open)))?;
        let inner = after_open[..end].trim().to_string();

        tokens.push(if is_tag {
            Token::Tag(inner)
        } else {
            Token::Var(inner)
        });
        rest = &after_open[end + close.len()..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest.to_string()));
    }
    Ok(tokens)
}

fn parse(template: &str) -> Result<Vec<Node>> {
    let tokens = tokenize(template)?;
    let mut pos = 0;
    let nodes = parse_nodes(&tokens, &mut pos, None)?;
    if pos < tokens.len() {
        if let Token::Tag(tag) = &tokens[pos] {
            return Err(template_malformed(format!("unexpected '{{% {} %}}'", tag)));
        }
    }
    Ok(nodes)
}

/// Parse until the end of input or a closing tag for `until`
fn parse_nodes(tokens: &[Token], pos: &mut usize, until: Option<&str>) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();

    while *pos < tokens.len() {
        match &tokens[*pos] {
            Token::Text(text) => {
                nodes.push(Node::Text(text.clone()));
                *pos += 1;
            }
            Token::Var(path) => {
                nodes.push(Node::Placeholder(path.clone()));
                *pos += 1;
            }
            Token::Tag(tag) => {
                if let Some(until) = until {
                    // `else` splits an if body; end tags close the block
                    if tag == until || (until == "endif" && tag == "else") {
                        return Ok(nodes);
                    }
                }

                if let Some(caps) = for_tag_re().captures(tag) {
                    let var = caps[1].to_string();
                    let path = caps[2].to_string();
                    *pos += 1;
                    let body = parse_nodes(tokens, pos, Some("endfor"))?;
                    expect_tag(tokens, pos, "endfor")?;
                    nodes.push(Node::For { var, path, body });
                } else if let Some(path) = tag.strip_prefix("if ") {
                    let path = path.trim().to_string();
                    *pos += 1;
                    let then_body = parse_nodes(tokens, pos, Some("endif"))?;
                    let else_body = if matches!(tokens.get(*pos), Some(Token::Tag(t)) if t == "else")
                    {
                        *pos += 1;
                        parse_nodes(tokens, pos, Some("endif"))?
                    } else {
                        Vec::new()
                    };
                    expect_tag(tokens, pos, "endif")?;
                    nodes.push(Node::If {
                        path,
                        then_body,
                        else_body,
                    });
                } else {
                    return Err(template_malformed(format!("unknown tag '{{% {} %}}'", tag)));
                }
            }
        }
    }

    if let Some(until) = until {
        return Err(template_malformed(format!("missing '{{% {} %}}'", until)));
    }
    Ok(nodes)
}

fn expect_tag(tokens: &[Token], pos: &mut usize, expected: &str) -> Result<()> {
    match tokens.get(*pos) {
        Some(Token::Tag(tag)) if tag == expected => {
            *pos += 1;
            Ok(())
        }
        _ => Err(template_malformed(format!("missing '{{% {} %}}'", expected))),
    }
}

/// Lookup scope: the document plus any enclosing loop bindings
struct Scope<'a> {
    root: &'a Mapping,
    bindings: Vec<(String, Value)>,
}

impl<'a> Scope<'a> {
    fn new(root: &'a Mapping) -> Self {
        Self {
            root,
            bindings: Vec::new(),
        }
    }

    fn lookup(&self, path: &str) -> Option<Value> {
        let (head, rest) = match path.find(['.', '[']) {
            Some(at) if path.as_bytes()[at] == b'[' => (&path[..at], &path[at..]),
            Some(at) => (&path[..at], &path[at + 1..]),
            None => (path, ""),
        };

        // Innermost loop binding wins over the document
        for (name, value) in self.bindings.iter().rev() {
            if name == head {
                return if rest.is_empty() {
                    Some(value.clone())
                } else {
                    get_value_path(value, rest).cloned()
                };
            }
        }

        get_path(self.root, path).cloned()
    }
}

fn render_nodes(nodes: &[Node], scope: &mut Scope<'_>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Placeholder(path) => {
                if let Some(value) = scope.lookup(path) {
                    if let Some(text) = scalar_to_string(&value) {
                        out.push_str(&text);
                    }
                }
                // Missing paths and containers render as nothing
            }
            Node::For { var, path, body } => {
                let items = match scope.lookup(path) {
                    Some(Value::Sequence(seq)) => seq,
                    _ => Vec::new(),
                };
                for item in items {
                    scope.bindings.push((var.clone(), item));
                    render_nodes(body, scope, out);
                    scope.bindings.pop();
                }
            }
            Node::If {
                path,
                then_body,
                else_body,
            } => {
                let value = scope.lookup(path);
                if truthy(value.as_ref()) {
                    render_nodes(then_body, scope, out);
                } else {
                    render_nodes(else_body, scope, out);
                }
            }
        }
    }
}

/// Render a template against a document
pub fn render(template: &str, document: &Mapping) -> Result<String> {
    let nodes = parse(template)?;
    let mut out = String::new();
    render_nodes(&nodes, &mut Scope::new(document), &mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PagesmithError;

    fn doc(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_placeholder_substitution() {
        let d = doc("hero:\n  heading: Hello\n  cta_button:\n    text: Go\n");
        let out = render("<h1>{{ hero.heading }}</h1><a>{{ hero.cta_button.text }}</a>", &d)
            .unwrap();
        assert_eq!(out, "<h1>Hello</h1><a>Go</a>");
    }

    #[test]
    fn test_missing_placeholder_renders_empty() {
        let d = doc("hero:\n  heading: Hello\n");
        let out = render("<p>{{ hero.subtitle }}</p><p>{{ hero.heading }}</p>", &d).unwrap();
        assert_eq!(out, "<p></p><p>Hello</p>");
    }

    #[test]
    fn test_bracketed_index_path() {
        let d = doc("pricing:\n  plans:\n    - name: Free\n    - name: Pro\n");
        let out = render("{{ pricing.plans[1].name }}", &d).unwrap();
        assert_eq!(out, "Pro");
    }

    #[test]
    fn test_for_loop() {
        let d = doc("faq:\n  faq_items:\n    - question: Q1\n    - question: Q2\n");
        let out = render(
            "{% for item in faq.faq_items %}<li>{{ item.question }}</li>{% endfor %}",
            &d,
        )
        .unwrap();
        assert_eq!(out, "<li>Q1</li><li>Q2</li>");
    }

    #[test]
    fn test_for_loop_over_strings() {
        let d = doc("plan:\n  features: [a, b]\n");
        let out = render("{% for f in plan.features %}{{ f }};{% endfor %}", &d).unwrap();
        assert_eq!(out, "a;b;");
    }

    #[test]
    fn test_nested_loops() {
        let d = doc(
            "pricing:\n  plans:\n    - name: Free\n      features: [x, y]\n    - name: Pro\n      features: [z]\n",
        );
        let out = render(
            "{% for plan in pricing.plans %}{{ plan.name }}:{% for f in plan.features %}{{ f }},{% endfor %};{% endfor %}",
            &d,
        )
        .unwrap();
        assert_eq!(out, "Free:x,y,;Pro:z,;");
    }

    #[test]
    fn test_loop_over_missing_list_renders_nothing() {
        let d = doc("hero:\n  heading: H\n");
        let out = render("a{% for x in absent.list %}{{ x }}{% endfor %}b", &d).unwrap();
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_if_gates_on_truthiness() {
        let with_video = doc("hero:\n  video:\n    source: a.mp4\n");
        let without = doc("hero:\n  heading: H\n");
        let template = "{% if hero.video.source %}<video src=\"{{ hero.video.source }}\">{% endif %}";

        assert_eq!(
            render(template, &with_video).unwrap(),
            "<video src=\"a.mp4\">"
        );
        assert_eq!(render(template, &without).unwrap(), "");
    }

    #[test]
    fn test_if_else() {
        let d = doc("plan:\n  is_popular: true\n");
        let template = "{% if plan.is_popular %}hot{% else %}regular{% endif %}";
        assert_eq!(render(template, &d).unwrap(), "hot");

        let d = doc("plan:\n  is_popular: false\n");
        assert_eq!(render(template, &d).unwrap(), "regular");
    }

    #[test]
    fn test_loop_variable_shadows_document_key() {
        let d = doc("item: top\nlist: [inner]\n");
        let out = render("{% for item in list %}{{ item }}{% endfor %}|{{ item }}", &d).unwrap();
        assert_eq!(out, "inner|top");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let d = doc("faq:\n  title: 常见问题\n  faq_items:\n    - question: Q\n      answer: A\n");
        let template =
            "<h2>{{ faq.title }}</h2>{% for i in faq.faq_items %}{{ i.question }}={{ i.answer }}{% endfor %}";
        let first = render(template, &d).unwrap();
        let second = render(template, &d).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "<h2>常见问题</h2>Q=A");
    }

    #[test]
    fn test_unterminated_placeholder_is_malformed() {
        let d = Mapping::new();
        let err = render("{{ hero.heading", &d).unwrap_err();
        assert!(matches!(err, PagesmithError::TemplateMalformed { .. }));
    }

    #[test]
    fn test_unbalanced_blocks_are_malformed() {
        let d = Mapping::new();
        assert!(render("{% for x in list %}no end", &d).is_err());
        assert!(render("{% endif %}", &d).is_err());
        assert!(render("{% if a %}x", &d).is_err());
    }

    #[test]
    fn test_unknown_tag_is_malformed() {
        let d = Mapping::new();
        let err = render("{% include other.html %}", &d).unwrap_err();
        assert!(matches!(err, PagesmithError::TemplateMalformed { .. }));
    }

    #[test]
    fn test_container_placeholder_renders_empty() {
        let d = doc("pricing:\n  plans:\n    - name: Free\n");
        let out = render("[{{ pricing.plans }}]", &d).unwrap();
        assert_eq!(out, "[]");
    }
}
