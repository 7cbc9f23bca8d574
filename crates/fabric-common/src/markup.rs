//! Minimal HTML markup helpers used by the headless renderers.

use std::fmt::Write as _;

/// Escapes text for use in element content or a double-quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Joins class names, skipping empty ones.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builder for a single element.
///
/// Attribute values and text children are escaped; [`Element::raw`]
/// children are inserted verbatim and must already be markup.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<(String, String)>,
    children: String,
}

impl Element {
    /// Starts an element.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: String::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl AsRef<str>) -> Self {
        self.attributes
            .push((name.to_string(), value.as_ref().to_string()));
        self
    }

    /// Adds an attribute only when `value` is `Some`.
    #[must_use]
    pub fn attr_opt(self, name: &str, value: Option<impl AsRef<str>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Adds a `class` attribute unless `classes` is empty.
    #[must_use]
    pub fn class(self, classes: &str) -> Self {
        if classes.is_empty() {
            self
        } else {
            self.attr("class", classes)
        }
    }

    /// Appends escaped text.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.children.push_str(&escape_html(text));
        self
    }

    /// Appends pre-rendered markup.
    #[must_use]
    pub fn raw(mut self, markup: &str) -> Self {
        self.children.push_str(markup);
        self
    }

    /// Appends a rendered child element.
    #[must_use]
    pub fn child(self, child: Self) -> Self {
        let rendered = child.render();
        self.raw(&rendered)
    }

    /// Renders the element.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape_html(value));
        }
        let _ = write!(out, ">{}</{}>", self.children, self.tag);
        out
    }
}
