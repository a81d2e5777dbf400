//! The signal data model: what parsers produce and writers consume.

/// An ordered parser product: either a report bound for the user callback
/// or a signal bound for the stream. Delivery order is meaningful (reports
/// for a signal come strictly before the signal).
#[derive(Debug)]
pub(crate) enum Emit {
    Report(crate::Location, crate::Error),
    Signal(crate::Location, Signal),
}

/// Well-known namespace URIs.
pub mod ns {
    /// The HTML namespace.
    pub const HTML: &str = "http://www.w3.org/1999/xhtml";
    /// The SVG namespace.
    pub const SVG: &str = "http://www.w3.org/2000/svg";
    /// The MathML namespace.
    pub const MATHML: &str = "http://www.w3.org/1998/Math/MathML";
    /// The namespace of the reserved `xml` prefix.
    pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
    /// The namespace of the reserved `xmlns` prefix.
    pub const XMLNS: &str = "http://www.w3.org/2000/xmlns/";
    /// The XLink namespace.
    pub const XLINK: &str = "http://www.w3.org/1999/xlink";
}

/// An expanded name: a namespace URI paired with a local name.
///
/// Unprefixed names in the null namespace carry an empty `uri`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name {
    /// The namespace URI, or `""` for the null namespace.
    pub uri: String,
    /// The local part of the name.
    pub local: String,
}

impl Name {
    /// A name in the null namespace.
    pub fn local(local: impl Into<String>) -> Name {
        Name {
            uri: String::new(),
            local: local.into(),
        }
    }

    /// A name in the given namespace.
    pub fn in_ns(uri: impl Into<String>, local: impl Into<String>) -> Name {
        Name {
            uri: uri.into(),
            local: local.into(),
        }
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.uri.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{{{}}}{}", self.uri, self.local)
        }
    }
}

/// A single attribute of a start tag.
///
/// Attribute order on a start tag is preserved; values are already
/// entity-decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name.
    pub name: Name,
    /// The decoded attribute value.
    pub value: String,
}

impl Attribute {
    /// An attribute in the null namespace.
    pub fn new(local: impl Into<String>, value: impl Into<String>) -> Attribute {
        Attribute {
            name: Name::local(local),
            value: value.into(),
        }
    }
}

/// A doctype declaration.
///
/// HTML doctypes populate `name`, the identifiers and `force_quirks`; XML
/// doctypes additionally preserve the verbatim declaration text in `raw`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Doctype {
    /// The root element name named by the doctype.
    pub name: Option<String>,
    /// The public identifier, if any.
    pub public_id: Option<String>,
    /// The system identifier, if any.
    pub system_id: Option<String>,
    /// The verbatim text of the declaration (XML only).
    pub raw: Option<String>,
    /// The HTML "force quirks" flag.
    pub force_quirks: bool,
}

/// An XML declaration (`<?xml version="1.0" ...?>`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlDeclaration {
    /// The declared version, e.g. `"1.0"`.
    pub version: String,
    /// The declared encoding label, if any.
    pub encoding: Option<String>,
    /// The standalone declaration, if any.
    pub standalone: Option<bool>,
}

/// A single parsing event.
///
/// Parsers yield these paired with a [`crate::Location`]; writers consume
/// them. Start and end signals are always balanced in parser output, even
/// after error recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    /// An element starts. Carries its expanded name and its attributes in
    /// order of appearance.
    StartElement {
        /// The element name.
        name: Name,
        /// The attributes, in source order, entity-decoded.
        attributes: Vec<Attribute>,
    },
    /// The most recently started element ends.
    EndElement,
    /// Character data. The concatenation of the chunks is the logical text;
    /// the chunk boundaries carry no meaning. The logical text is never
    /// empty, and adjacent character data is merged into one signal.
    Text(Vec<String>),
    /// A doctype declaration.
    Doctype(Doctype),
    /// An XML declaration. When present it is the first signal.
    XmlDeclaration(XmlDeclaration),
    /// A processing instruction.
    ProcessingInstruction {
        /// The PI target.
        target: String,
        /// The PI body, verbatim.
        body: String,
    },
    /// A comment.
    Comment(String),
}

impl Signal {
    /// Convenience constructor for a [`Signal::Text`] with one chunk.
    pub fn text(s: impl Into<String>) -> Signal {
        Signal::Text(vec![s.into()])
    }

    /// The logical text of a [`Signal::Text`], concatenated.
    pub fn joined_text(&self) -> Option<String> {
        match self {
            Signal::Text(chunks) => Some(chunks.concat()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_display() {
        assert_eq!(Name::local("p").to_string(), "p");
        assert_eq!(
            Name::in_ns(ns::SVG, "svg").to_string(),
            "{http://www.w3.org/2000/svg}svg"
        );
    }

    #[test]
    fn joined_text() {
        let s = Signal::Text(vec!["a".into(), "b".into()]);
        assert_eq!(s.joined_text().as_deref(), Some("ab"));
        assert_eq!(Signal::EndElement.joined_text(), None);
    }
}
