//! Support for Android `strings.xml` resource files.
//!
//! Reading collects every `<string>` element in document order. Writing
//! loads the document into a small in-memory tree, swaps the text of the
//! matched `<string>` elements, optionally appends new ones under
//! `<resources>`, and serializes the tree again with 4-space indentation.
//! Elements holding text are written back inline exactly as they were read.

use std::collections::HashSet;

use lazy_static::lazy_static;
use quick_xml::{
    Reader, Writer,
    escape::partial_escape,
    events::{BytesDecl, BytesStart, BytesText, Event},
};
use regex::Regex;

use crate::{
    error::Error,
    formats::FormatType,
    traits::{MappingFormat, Rendered},
    types::{Entry, Mapping, WriteOutcome},
};

const INDENT: &str = "    ";

lazy_static! {
    static ref STANDALONE_HINT_REGEX: Regex = Regex::new(r#"\sstandalone="[^"]*""#).unwrap();
    static ref NON_WHITESPACE_REGEX: Regex = Regex::new(r"\S").unwrap();
}

/// Codec for Android `strings.xml` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct Format;

impl MappingFormat for Format {
    const FORMAT: FormatType = FormatType::AndroidStrings;

    fn parse_entries(text: &str) -> Result<Mapping, Error> {
        let document = Document::parse(text)?;
        let mut entries = Vec::new();
        for element in document.string_elements() {
            entries.push(Entry::new(element.name()?, element.text_content()?));
        }
        Ok(entries)
    }

    fn render(text: &str, mapping: &[Entry], add_new_entries: bool) -> Result<Rendered, Error> {
        let mut document = Document::parse(text)?;
        let mut outcome = WriteOutcome::default();
        let mut consumed = HashSet::new();

        for element in document.string_elements_mut() {
            let name = element.name()?;
            match mapping.iter().find(|entry| entry.name == name) {
                Some(entry) => {
                    element.set_text(&entry.content);
                    consumed.insert(entry.name.as_str());
                    outcome.record_moved(&name);
                }
                None => outcome.record_unmoved(&name),
            }
        }

        if add_new_entries {
            let new_entries = mapping
                .iter()
                .filter(|entry| !consumed.contains(entry.name.as_str()))
                .collect::<Vec<_>>();
            if !new_entries.is_empty() {
                let resources = document.resources_mut().ok_or_else(|| {
                    Error::InvalidResource(
                        "no <resources> element to add new string resources to".to_string(),
                    )
                })?;
                resources.self_closing = false;
                for entry in new_entries {
                    resources.children.push(Node::Element(Element::string(entry)));
                    outcome.record_moved(&entry.name);
                }
            }
        }

        let serialized = document.serialize()?;
        Ok(Rendered {
            text: clean_up(&serialized, has_standalone_hint(text)),
            outcome,
        })
    }
}

/// Drops whitespace-only lines, removes a `standalone` hint the original
/// declaration did not carry, and trims the result.
fn clean_up(serialized: &str, keep_standalone_hint: bool) -> String {
    let mut lines = serialized
        .lines()
        .filter(|line| NON_WHITESPACE_REGEX.is_match(line))
        .map(str::to_string)
        .collect::<Vec<_>>();

    if !keep_standalone_hint
        && let Some(first) = lines.first_mut()
    {
        *first = STANDALONE_HINT_REGEX.replace_all(first, "").into_owned();
    }

    lines.join("\n").trim().to_string()
}

fn has_standalone_hint(text: &str) -> bool {
    text.lines()
        .next()
        .is_some_and(|line| STANDALONE_HINT_REGEX.is_match(line))
}

#[derive(Debug, Clone)]
enum Node<'a> {
    Element(Element<'a>),
    /// Text, CDATA, comments, processing instructions and doctypes, kept raw.
    Other(Event<'a>),
}

impl Node<'_> {
    fn is_blank_text(&self) -> bool {
        matches!(self, Node::Other(Event::Text(text)) if text.iter().all(u8::is_ascii_whitespace))
    }

    fn is_text(&self) -> bool {
        matches!(self, Node::Other(Event::Text(_) | Event::CData(_))) && !self.is_blank_text()
    }

    fn is_markup(&self) -> bool {
        !matches!(self, Node::Other(Event::Text(_) | Event::CData(_)))
    }
}

#[derive(Debug, Clone)]
struct Element<'a> {
    start: BytesStart<'a>,
    children: Vec<Node<'a>>,
    self_closing: bool,
}

impl<'a> Element<'a> {
    fn string(entry: &Entry) -> Self {
        let mut start = BytesStart::new("string");
        start.push_attribute(("name", entry.name.as_str()));
        let mut element = Element {
            start,
            children: Vec::new(),
            self_closing: false,
        };
        element.set_text(&entry.content);
        element
    }

    fn is_named(&self, name: &str) -> bool {
        self.start.name().as_ref() == name.as_bytes()
    }

    fn name(&self) -> Result<String, Error> {
        for attr in self.start.attributes().with_checks(false) {
            let attr = attr?;
            if attr.key.as_ref() == b"name" {
                return Ok(attr.unescape_value()?.into_owned());
            }
        }
        Err(Error::InvalidResource(
            "string tag missing 'name'".to_string(),
        ))
    }

    /// Concatenated text of all descendants.
    fn text_content(&self) -> Result<String, Error> {
        let mut text = String::new();
        for child in &self.children {
            match child {
                Node::Element(element) => text.push_str(&element.text_content()?),
                Node::Other(Event::Text(raw)) => text.push_str(&raw.unescape()?),
                Node::Other(Event::CData(raw)) => text.push_str(&String::from_utf8_lossy(raw)),
                Node::Other(_) => {}
            }
        }
        Ok(text)
    }

    /// Replaces all children with a single text node.
    fn set_text(&mut self, content: &str) {
        self.children = if content.is_empty() {
            Vec::new()
        } else {
            let escaped = partial_escape(content).into_owned();
            vec![Node::Other(Event::Text(BytesText::from_escaped(escaped)))]
        };
        self.self_closing = false;
    }

    fn has_text(&self) -> bool {
        self.children.iter().any(Node::is_text)
    }

    /// Only containers of markup are re-indented. Everything holding text,
    /// blank text included, and every `<string>` is written as read.
    fn is_inline(&self) -> bool {
        self.self_closing
            || self.is_named("string")
            || self.has_text()
            || !self.children.iter().any(Node::is_markup)
    }

    fn write_pretty(&self, writer: &mut Writer<Vec<u8>>, level: usize) -> Result<(), Error> {
        if self.is_inline() {
            return self.write_inline(writer);
        }

        writer.write_event(Event::Start(self.start.borrow()))?;
        for child in self.children.iter().filter(|c| !c.is_blank_text()) {
            write_line_break(writer, level + 1)?;
            match child {
                Node::Element(element) => element.write_pretty(writer, level + 1)?,
                Node::Other(event) => writer.write_event(event.borrow())?,
            }
        }
        write_line_break(writer, level)?;
        writer.write_event(Event::End(self.start.to_end()))?;
        Ok(())
    }

    fn write_inline(&self, writer: &mut Writer<Vec<u8>>) -> Result<(), Error> {
        if self.self_closing {
            writer.write_event(Event::Empty(self.start.borrow()))?;
            return Ok(());
        }
        writer.write_event(Event::Start(self.start.borrow()))?;
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_inline(writer)?,
                Node::Other(event) => writer.write_event(event.borrow())?,
            }
        }
        writer.write_event(Event::End(self.start.to_end()))?;
        Ok(())
    }
}

fn write_line_break(writer: &mut Writer<Vec<u8>>, level: usize) -> Result<(), Error> {
    let indent = format!("\n{}", INDENT.repeat(level));
    writer.write_event(Event::Text(BytesText::from_escaped(indent.as_str())))?;
    Ok(())
}

/// An XML document held in memory for rewriting.
#[derive(Debug, Clone)]
struct Document<'a> {
    declaration: Option<BytesDecl<'a>>,
    nodes: Vec<Node<'a>>,
}

impl<'a> Document<'a> {
    fn parse(text: &'a str) -> Result<Self, Error> {
        let mut reader = Reader::from_str(text);
        let mut declaration = None;
        let mut nodes = Vec::new();
        let mut open: Vec<Element<'a>> = Vec::new();

        loop {
            let node = match reader.read_event()? {
                Event::Decl(decl) => {
                    declaration = Some(decl);
                    continue;
                }
                Event::Start(start) => {
                    open.push(Element {
                        start,
                        children: Vec::new(),
                        self_closing: false,
                    });
                    continue;
                }
                Event::End(_) => match open.pop() {
                    Some(element) => Node::Element(element),
                    None => {
                        return Err(Error::InvalidResource(
                            "closing tag without opening tag".to_string(),
                        ));
                    }
                },
                Event::Empty(start) => Node::Element(Element {
                    start,
                    children: Vec::new(),
                    self_closing: true,
                }),
                Event::Eof => break,
                other => Node::Other(other),
            };
            match open.last_mut() {
                Some(parent) => parent.children.push(node),
                None => nodes.push(node),
            }
        }

        if let Some(element) = open.last() {
            return Err(Error::InvalidResource(format!(
                "unexpected end of document inside <{}>",
                String::from_utf8_lossy(element.start.name().as_ref())
            )));
        }

        Ok(Document { declaration, nodes })
    }

    /// All `<string>` elements in document order.
    fn string_elements(&self) -> Vec<&Element<'a>> {
        fn collect<'d, 'a>(nodes: &'d [Node<'a>], found: &mut Vec<&'d Element<'a>>) {
            for node in nodes {
                if let Node::Element(element) = node {
                    if element.is_named("string") {
                        found.push(element);
                    }
                    collect(&element.children, found);
                }
            }
        }

        let mut found = Vec::new();
        collect(&self.nodes, &mut found);
        found
    }

    /// All `<string>` elements in document order, for modification.
    ///
    /// `<string>` elements nested inside another `<string>` are not
    /// returned, since replacing the outer text would drop them anyway.
    fn string_elements_mut(&mut self) -> Vec<&mut Element<'a>> {
        fn collect<'d, 'a>(nodes: &'d mut [Node<'a>], found: &mut Vec<&'d mut Element<'a>>) {
            for node in nodes {
                if let Node::Element(element) = node {
                    if element.is_named("string") {
                        found.push(element);
                    } else {
                        collect(&mut element.children, found);
                    }
                }
            }
        }

        let mut found = Vec::new();
        collect(&mut self.nodes, &mut found);
        found
    }

    /// The first `<resources>` element in document order.
    fn resources_mut(&mut self) -> Option<&mut Element<'a>> {
        fn find<'d, 'a>(nodes: &'d mut [Node<'a>]) -> Option<&'d mut Element<'a>> {
            for node in nodes {
                if let Node::Element(element) = node {
                    if element.is_named("resources") {
                        return Some(element);
                    }
                    if let Some(found) = find(&mut element.children) {
                        return Some(found);
                    }
                }
            }
            None
        }

        find(&mut self.nodes)
    }

    fn serialize(&self) -> Result<String, Error> {
        let mut writer = Writer::new(Vec::new());
        let declaration = self
            .declaration
            .clone()
            .unwrap_or_else(|| BytesDecl::new("1.0", Some("utf-8"), None));
        writer.write_event(Event::Decl(declaration))?;

        for node in self.nodes.iter().filter(|n| !n.is_blank_text()) {
            write_line_break(&mut writer, 0)?;
            match node {
                Node::Element(element) => element.write_pretty(&mut writer, 0)?,
                Node::Other(event) => writer.write_event(event.borrow())?,
            }
        }

        String::from_utf8(writer.into_inner())
            .map_err(|e| Error::InvalidResource(format!("serialized XML is not UTF-8: {}", e)))
    }
}
