use indexmap::IndexMap;

use crate::render::escape::escape_html;

/// One node in a markup fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Tag),
    /// Text content, escaped at serialization time.
    Text(String),
    /// Pre-rendered markup inserted verbatim. The caller vouches for it.
    Raw(String),
}

/// Structured HTML element: name, ordered attribute map, ordered children.
///
/// Serialization is the only place that produces text, so escaping happens
/// exactly once, on the way out.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    name: &'static str,
    attrs: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Tag {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any previous value under the same name.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Sets the `class` attribute from a token list. Empty lists leave the
    /// attribute unset.
    #[must_use]
    pub fn classes<I, S>(self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = tokens
            .into_iter()
            .map(|token| token.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            self
        } else {
            self.attr("class", joined)
        }
    }

    #[must_use]
    pub fn child(mut self, tag: Tag) -> Self {
        self.children.push(Node::Element(tag));
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    #[must_use]
    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    pub fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');

        for child in &self.children {
            match child {
                Node::Element(tag) => tag.write_into(out),
                Node::Text(text) => out.push_str(&escape_html(text)),
                Node::Raw(markup) => out.push_str(markup),
            }
        }

        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }
}
