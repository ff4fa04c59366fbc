// hkdeps: Hollow Knight Mod Dependency Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Minimal XML document tree for MSBuild project files.
//!
//! Every element carries a document-unique id so callers can hold plain
//! data handles to items instead of live node pointers. The writer is
//! hand-rolled: indenting writers break single-line text elements such as
//! `<HintPath>...</HintPath>`.

use quick_xml::Reader;
use quick_xml::escape::{escape, partial_escape};
use quick_xml::events::{BytesStart, Event};

use crate::error::ProjectError;

/// One child slot of an element.
#[derive(Debug, Clone)]
pub(crate) enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

/// An XML element with a document-unique id.
#[derive(Debug, Clone)]
pub(crate) struct Element {
    id: u64,
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub(crate) fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub(crate) const fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn push_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    pub(crate) fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    pub(crate) fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    pub(crate) fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    pub(crate) fn find_child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.name == name)
    }

    /// Concatenated text content, or `None` if the element has no text.
    pub(crate) fn text(&self) -> Option<String> {
        let mut out: Option<String> = None;
        for node in &self.children {
            if let Node::Text(t) = node {
                out.get_or_insert_with(String::new).push_str(t);
            }
        }
        out
    }
}

/// A parsed XML document with an id-tagged element tree.
#[derive(Debug, Clone)]
pub(crate) struct XmlDocument {
    root: Element,
    has_decl: bool,
    next_id: u64,
}

impl XmlDocument {
    /// Parses a document from a string.
    ///
    /// Whitespace-only text is dropped; comments are kept in place.
    pub(crate) fn parse(xml: &str) -> Result<Self, ProjectError> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut has_decl = false;
        let mut next_id: u64 = 1;

        loop {
            match reader.read_event().map_err(|e| xml_err(&reader, &e))? {
                Event::Eof => break,
                Event::Decl(_) => has_decl = true,
                Event::Start(e) => {
                    let elem = element_from(&reader, &e, next_id)?;
                    next_id += 1;
                    stack.push(elem);
                }
                Event::Empty(e) => {
                    let elem = element_from(&reader, &e, next_id)?;
                    next_id += 1;
                    attach(&mut stack, &mut root, Node::Element(elem))?;
                }
                Event::End(_) => {
                    let elem = stack.pop().ok_or_else(|| ProjectError::Xml {
                        message: "unexpected closing tag".to_string(),
                    })?;
                    attach(&mut stack, &mut root, Node::Element(elem))?;
                }
                Event::Text(t) => {
                    let text = t.unescape().map_err(|e| xml_err(&reader, &e))?;
                    if !text.is_empty() {
                        attach(&mut stack, &mut root, Node::Text(text.into_owned()))?;
                    }
                }
                Event::CData(t) => {
                    let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                    attach(&mut stack, &mut root, Node::Text(text))?;
                }
                Event::Comment(t) => {
                    let text = t.unescape().map_err(|e| xml_err(&reader, &e))?;
                    attach(&mut stack, &mut root, Node::Comment(text.into_owned()))?;
                }
                Event::PI(_) | Event::DocType(_) => {}
            }
        }

        let root = root.ok_or(ProjectError::NoRootElement)?;
        Ok(Self {
            root,
            has_decl,
            next_id,
        })
    }

    pub(crate) const fn root(&self) -> &Element {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Allocates a fresh element id.
    pub(crate) fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn find(&self, id: u64) -> Option<&Element> {
        find_in(&self.root, id)
    }

    pub(crate) fn find_mut(&mut self, id: u64) -> Option<&mut Element> {
        find_in_mut(&mut self.root, id)
    }

    /// Removes the element with the given id. The root cannot be removed.
    pub(crate) fn remove(&mut self, id: u64) -> bool {
        remove_in(&mut self.root, id)
    }

    /// Serializes the document with two-space indentation.
    pub(crate) fn to_xml(&self) -> String {
        let mut out = String::new();
        if self.has_decl {
            out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        }
        write_element(&mut out, &self.root, 0);
        out
    }
}

fn xml_err<R>(reader: &Reader<R>, error: &impl std::fmt::Display) -> ProjectError {
    ProjectError::Xml {
        message: format!("{error} at position {}", reader.buffer_position()),
    }
}

fn element_from(
    reader: &Reader<&[u8]>,
    start: &BytesStart<'_>,
    id: u64,
) -> Result<Element, ProjectError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut elem = Element::new(id, name);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| xml_err(reader, &e))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| xml_err(reader, &e))?
            .into_owned();
        elem.push_attr(key, value);
    }
    Ok(elem)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    node: Node,
) -> Result<(), ProjectError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    match node {
        Node::Element(elem) => {
            if root.is_some() {
                return Err(ProjectError::Xml {
                    message: "multiple root elements".to_string(),
                });
            }
            *root = Some(elem);
        }
        // Stray text or comments outside the root carry no meaning here.
        Node::Text(_) | Node::Comment(_) => {}
    }
    Ok(())
}

fn find_in(elem: &Element, id: u64) -> Option<&Element> {
    if elem.id == id {
        return Some(elem);
    }
    for child in &elem.children {
        if let Node::Element(e) = child
            && let Some(found) = find_in(e, id)
        {
            return Some(found);
        }
    }
    None
}

fn find_in_mut(elem: &mut Element, id: u64) -> Option<&mut Element> {
    if elem.id == id {
        return Some(elem);
    }
    for child in &mut elem.children {
        if let Node::Element(e) = child
            && let Some(found) = find_in_mut(e, id)
        {
            return Some(found);
        }
    }
    None
}

fn remove_in(elem: &mut Element, id: u64) -> bool {
    if let Some(pos) = elem
        .children
        .iter()
        .position(|n| matches!(n, Node::Element(e) if e.id == id))
    {
        elem.children.remove(pos);
        return true;
    }
    elem.children.iter_mut().any(|n| match n {
        Node::Element(e) => remove_in(e, id),
        _ => false,
    })
}

fn write_element(out: &mut String, elem: &Element, depth: usize) {
    let pad = "  ".repeat(depth);
    out.push_str(&pad);
    out.push('<');
    out.push_str(&elem.name);
    for (key, value) in &elem.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape(value.as_str()));
        out.push('"');
    }
    match elem.children.as_slice() {
        [] => out.push_str(" />\n"),
        [Node::Text(text)] => {
            out.push('>');
            out.push_str(&partial_escape(text.as_str()));
            out.push_str("</");
            out.push_str(&elem.name);
            out.push_str(">\n");
        }
        children => {
            out.push_str(">\n");
            for child in children {
                match child {
                    Node::Element(e) => write_element(out, e, depth + 1),
                    Node::Text(text) => {
                        out.push_str(&pad);
                        out.push_str("  ");
                        out.push_str(&partial_escape(text.as_str()));
                        out.push('\n');
                    }
                    Node::Comment(text) => {
                        out.push_str(&pad);
                        out.push_str("  <!--");
                        out.push_str(text);
                        out.push_str("-->\n");
                    }
                }
            }
            out.push_str(&pad);
            out.push_str("</");
            out.push_str(&elem.name);
            out.push_str(">\n");
        }
    }
}
