#![deny(missing_docs)]
// These are markup parsers. Markup can be untrusted input from the internet.
#![forbid(unsafe_code)]

//! Streaming, error-recovering parsing and serialization for HTML and XML.
//!
//! Parsers take a byte stream of unknown encoding and produce a lazy
//! sequence of SAX-style [`Signal`]s paired with source [`Location`]s;
//! writers consume signal sequences and produce well-formed bytes. The
//! whole pipeline is single-pass and incremental: nothing buffers the full
//! input, nothing is read before the consumer asks, and malformed input is
//! reported and recovered from rather than rejected.
//!
//! ```
//! use pullmark::{parse_html, Signal};
//!
//! for item in parse_html("<p>weird<b>markup") {
//!     let (location, signal) = item.unwrap();
//!     match signal {
//!         Signal::StartElement { name, .. } => println!("{location}: <{}>", name.local),
//!         Signal::EndElement => println!("{location}: end"),
//!         Signal::Text(chunks) => println!("{location}: {:?}", chunks.concat()),
//!         _ => {}
//!     }
//! }
//! ```
//!
//! Start/end signals are always balanced, even for input like the above.
//! Errors go to the `report` callback; see [`parse_html`], [`parse_xml`],
//! [`write_html`] and [`write_xml`] for the configuration surface.

mod context;
mod encoding;
mod entities;
mod error;
mod html;
mod location;
mod signal;
mod source;
mod stream;
mod xml;

pub use context::Context;
pub use encoding::Encoding;
pub use error::{Error, ParseError};
pub use html::{parse_html, write_html, write_html_with, HtmlParser, HtmlWriter};
pub use location::Location;
pub use signal::{ns, Attribute, Doctype, Name, Signal, XmlDeclaration};
pub use source::{ByteSource, FnSource, IntoByteSource, IoSource, SliceSource};
pub use stream::PullStream;
pub use xml::{parse_xml, write_xml, write_xml_with, XmlParser, XmlWriter};
