//! Icon catalogs: the `IconLibrary*.xml` documents inside a library.
//!
//! A catalog is a single root element holding one `<Icon/>` child per icon.
//! Only the root's element children are interpreted; everything else
//! (declaration, comments, whitespace, unknown attributes) is carried through
//! verbatim, so an edit leaves the rest of a vendor catalog intact.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::discover::IconDescriptor;
use crate::ident::icon_uuid;
use crate::{Error, Result};

/// Tag name of catalog entries.
pub const ICON_TAG: &str = "Icon";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone)]
enum Node {
    Element(Element),
    Other(Event<'static>),
}

#[derive(Debug, Clone)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> std::result::Result<Self, String> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| e.to_string())?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(|e| e.to_string())?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn is_icon(&self, id: &str) -> bool {
        self.name == ICON_TAG && self.attribute("Id") == Some(id)
    }

    fn icons(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) if e.name == ICON_TAG => Some(e),
            _ => None,
        })
    }

    /// Appends `child`, reusing the indentation of existing children.
    fn append_child(&mut self, child: Element) {
        let trailing_blank = matches!(
            self.children.last(),
            Some(Node::Other(Event::Text(t))) if is_blank(t)
        );
        let closing = if trailing_blank {
            self.children.pop()
        } else {
            None
        };
        if let Some(indent) = self.child_indent() {
            self.children.push(Node::Other(Event::Text(indent)));
        }
        self.children.push(Node::Element(child));
        if let Some(node) = closing {
            self.children.push(node);
        }
    }

    fn child_indent(&self) -> Option<BytesText<'static>> {
        let first = self
            .children
            .iter()
            .position(|n| matches!(n, Node::Element(_)))?;
        match first.checked_sub(1).map(|i| &self.children[i]) {
            Some(Node::Other(Event::Text(t))) if is_blank(t) => Some(t.clone()),
            _ => None,
        }
    }

    /// Removes every icon child with this `Id` along with its indentation.
    fn remove_icons(&mut self, id: &str) -> usize {
        let mut removed = 0;
        let mut kept = Vec::with_capacity(self.children.len());
        for node in self.children.drain(..) {
            match node {
                Node::Element(e) if e.is_icon(id) => {
                    if matches!(kept.last(), Some(Node::Other(Event::Text(t))) if is_blank(t)) {
                        kept.pop();
                    }
                    removed += 1;
                }
                other => kept.push(other),
            }
        }
        self.children = kept;
        removed
    }

    fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            write_node(writer, child)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<()> {
    match node {
        Node::Element(e) => e.write_to(writer),
        Node::Other(event) => Ok(writer.write_event(event.clone())?),
    }
}

fn is_blank(text: &[u8]) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

/// A read-only view of an `<Icon/>` element.
#[derive(Debug, Clone, Copy)]
pub struct IconRef<'a>(&'a Element);

impl<'a> IconRef<'a> {
    /// Returns the value of an attribute.
    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.0.attribute(key)
    }

    /// Returns the icon's `Id`.
    pub fn id(&self) -> Option<&'a str> {
        self.attribute("Id")
    }

    /// Returns the icon's `uuid`.
    pub fn uuid(&self) -> Option<&'a str> {
        self.attribute("uuid")
    }

    /// Returns the icon's tags.
    pub fn tags(&self) -> Vec<&'a str> {
        self.attribute("Tags")
            .map(|t| t.split(',').filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// A new catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIcon {
    /// Identifier derived from the icon index.
    pub uuid: String,
    /// Icon name, matching the SVG entry under `IconsFilled/`.
    pub id: String,
    /// Search tags.
    pub tags: Vec<String>,
    /// Usable as a line icon.
    pub line: bool,
    /// Usable as a filled icon.
    pub filled: bool,
}

impl CatalogIcon {
    /// Builds the catalog entry for a matched icon file.
    pub fn new(icon: &IconDescriptor, tags: &[String], line: bool, filled: bool) -> Self {
        Self {
            uuid: icon_uuid(icon.index),
            id: icon.name.clone(),
            tags: tags.to_vec(),
            line,
            filled,
        }
    }

    fn to_element(&self) -> Element {
        Element {
            name: ICON_TAG.to_string(),
            attributes: vec![
                ("uuid".into(), self.uuid.clone()),
                ("Id".into(), self.id.clone()),
                ("Tags".into(), self.tags.join(",")),
                ("line".into(), self.line.to_string()),
                ("filled".into(), self.filled.to_string()),
            ],
            children: Vec::new(),
        }
    }
}

/// Outcome of [`IconCatalog::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// No entry with this `Id` existed; one was appended.
    Added,
    /// Existing entries were removed and the new one appended.
    Replaced,
    /// An entry exists and `force` was not set.
    Skipped,
}

impl Insertion {
    /// Returns `true` if the catalog changed.
    pub fn is_modified(self) -> bool {
        !matches!(self, Insertion::Skipped)
    }
}

/// A parsed icon catalog.
#[derive(Debug, Clone)]
pub struct IconCatalog {
    prolog: Vec<Node>,
    root: Element,
    epilog: Vec<Node>,
}

impl IconCatalog {
    /// Parses the catalog stored in the entry `entry`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] unless `bytes` is a well-formed UTF-8
    /// document with exactly one root element.
    pub fn parse(entry: &str, bytes: &[u8]) -> Result<Self> {
        let invalid = |reason: String| Error::invalid_catalog(entry, reason);

        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let text = std::str::from_utf8(bytes).map_err(|e| invalid(format!("not UTF-8: {}", e)))?;

        let mut reader = Reader::from_str(text);
        let mut prolog = Vec::new();
        let mut epilog = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                invalid(format!("{} at byte {}", e, reader.error_position()))
            })?;

            let finished = match event {
                Event::Eof => break,
                Event::Start(start) => {
                    if root.is_some() && stack.is_empty() {
                        return Err(invalid("multiple root elements".into()));
                    }
                    stack.push(Element::from_start(&start).map_err(&invalid)?);
                    None
                }
                Event::Empty(start) => Some(Element::from_start(&start).map_err(&invalid)?),
                Event::End(_) => Some(
                    stack
                        .pop()
                        .ok_or_else(|| invalid("unmatched end tag".into()))?,
                ),
                other => {
                    let node = Node::Other(other.into_owned());
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(node);
                    } else {
                        if let Node::Other(Event::Text(t)) = &node {
                            if !is_blank(t) {
                                return Err(invalid("text outside the root element".into()));
                            }
                        }
                        if root.is_none() {
                            prolog.push(node);
                        } else {
                            epilog.push(node);
                        }
                    }
                    None
                }
            };

            if let Some(element) = finished {
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Node::Element(element));
                } else if root.is_some() {
                    return Err(invalid("multiple root elements".into()));
                } else {
                    root = Some(element);
                }
            }
        }

        if let Some(open) = stack.last() {
            return Err(invalid(format!("unclosed element <{}>", open.name)));
        }
        let root = root.ok_or_else(|| invalid("no root element".into()))?;

        Ok(Self {
            prolog,
            root,
            epilog,
        })
    }

    /// Returns the root element's tag name.
    pub fn root_name(&self) -> &str {
        &self.root.name
    }

    /// Returns the first icon with this `Id`.
    pub fn find(&self, id: &str) -> Option<IconRef<'_>> {
        self.root
            .icons()
            .find(|e| e.attribute("Id") == Some(id))
            .map(IconRef)
    }

    /// Returns all icons in document order.
    pub fn icons(&self) -> impl Iterator<Item = IconRef<'_>> {
        self.root.icons().map(IconRef)
    }

    /// Returns the `Id` of every icon in document order.
    pub fn icon_ids(&self) -> Vec<&str> {
        self.root.icons().filter_map(|e| e.attribute("Id")).collect()
    }

    /// Returns the number of icon elements.
    pub fn icon_count(&self) -> usize {
        self.root.icons().count()
    }

    /// Inserts an icon entry.
    ///
    /// An existing entry with the same `Id` is kept unless `force` is set, in
    /// which case every existing entry with that `Id` is removed before the
    /// new one is appended.
    pub fn insert(&mut self, icon: &CatalogIcon, force: bool) -> Insertion {
        let exists = self.find(&icon.id).is_some();
        if exists && !force {
            return Insertion::Skipped;
        }
        if exists {
            self.root.remove_icons(&icon.id);
        }
        self.root.append_child(icon.to_element());
        if exists {
            Insertion::Replaced
        } else {
            Insertion::Added
        }
    }

    /// Serializes the catalog.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());
        for node in &self.prolog {
            write_node(&mut writer, node)?;
        }
        self.root.write_to(&mut writer)?;
        for node in &self.epilog {
            write_node(&mut writer, node)?;
        }
        Ok(writer.into_inner())
    }
}
