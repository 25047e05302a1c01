//! Structured element tree standing in for the page DOM.
//! Renderers build `Element` values and swap them into a `Document` by id;
//! nothing is assembled from HTML strings. Serialization escapes all text
//! and attribute values.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub children: Vec<Element>,
    /// Index of the child the container is scrolled to (transcripts).
    pub scroll_top: usize,
}

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["img", "input", "br", "hr", "meta", "link"];

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    // ── Builders ─────────────────────────────────────

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children<I: IntoIterator<Item = Element>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    // ── Classes ──────────────────────────────────────

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Flip `class`; returns whether it is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Add or remove `class` depending on `on`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    // ── Content ──────────────────────────────────────

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attrs.insert(key.to_string(), value.to_string());
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(|v| v.as_str())
    }

    /// Drop every child and install `children` in their place.
    pub fn replace_children(&mut self, children: Vec<Element>) {
        self.children = children;
        self.scroll_top = 0;
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Remove the first direct child carrying `id`.
    pub fn remove_child_by_id(&mut self, id: &str) -> Option<Element> {
        let pos = self
            .children
            .iter()
            .position(|c| c.id.as_deref() == Some(id))?;
        Some(self.children.remove(pos))
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_top = self.children.len().saturating_sub(1);
    }

    /// Own text followed by all descendant text, depth first.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    // ── Lookup ───────────────────────────────────────

    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    fn collect_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in &self.children {
            child.collect_by_class(class, out);
        }
    }

    fn visit_mut(&mut self, f: &mut dyn FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            child.visit_mut(f);
        }
    }

    // ── Serialization ────────────────────────────────

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, html: &mut String) {
        html.push('<');
        html.push_str(&self.tag);
        if let Some(ref id) = self.id {
            html.push_str(&format!(" id=\"{}\"", html_escape(id)));
        }
        if !self.classes.is_empty() {
            html.push_str(&format!(" class=\"{}\"", html_escape(&self.classes.join(" "))));
        }
        for (key, value) in &self.attrs {
            html.push_str(&format!(" {}=\"{}\"", key, html_escape(value)));
        }
        html.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        html.push_str(&html_escape(&self.text));
        for child in &self.children {
            child.write_html(html);
        }
        html.push_str("</");
        html.push_str(&self.tag);
        html.push('>');
    }
}

/// The page: a root element plus the pending smooth-scroll target.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
    /// Element id an in-page anchor asked to smooth-scroll to.
    pub smooth_scroll_target: Option<String>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Document {
            root,
            smooth_scroll_target: None,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.root.find(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_mut(id)
    }

    /// Like `get_mut`, but logs a warning when the id is missing.
    pub fn target_mut(&mut self, id: &str) -> Option<&mut Element> {
        let found = self.root.find_mut(id);
        if found.is_none() {
            log::warn!("Element #{} not found in document", id);
        }
        found
    }

    /// All elements carrying `class`, in document order.
    pub fn by_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.root.collect_by_class(class, &mut out);
        out
    }

    /// Apply `f` to every element carrying `class`, passing its document-order index.
    pub fn for_each_class_mut(&mut self, class: &str, mut f: impl FnMut(usize, &mut Element)) {
        let mut index = 0;
        self.root.visit_mut(&mut |el: &mut Element| {
            if el.has_class(class) {
                f(index, el);
                index += 1;
            }
        });
    }

    /// Apply `f` to every element with tag `tag` under element `id`.
    pub fn for_each_tag_under_mut(&mut self, id: &str, tag: &str, mut f: impl FnMut(&mut Element)) {
        if let Some(scope) = self.root.find_mut(id) {
            scope.visit_mut(&mut |el: &mut Element| {
                if el.tag == tag {
                    f(el);
                }
            });
        }
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>{}", self.root.to_html())
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
