//! The XML serializer: signals to bytes.

use std::convert::Infallible;
use std::io;

use crate::error::{silent_report, Report};
use crate::signal::{ns, Signal};
use crate::{Error, Location, ParseError};

/// The resolver consulted when a namespace URI has no prefix in scope.
pub(crate) type PrefixFn = Box<dyn FnMut(&str) -> Option<String>>;

/// Serialize a stream of signals as XML, yielding UTF-8 byte chunks.
///
/// ```
/// use pullmark::{write_xml, Attribute, Name, Signal};
///
/// let signals = vec![
///     Signal::StartElement {
///         name: Name::local("doc"),
///         attributes: vec![Attribute::new("id", "1")],
///     },
///     Signal::text("hi"),
///     Signal::EndElement,
/// ];
/// let out = write_xml(signals).into_string().unwrap();
/// assert_eq!(out, "<doc id=\"1\">hi</doc>");
/// ```
pub fn write_xml<I>(
    signals: I,
) -> XmlWriter<std::iter::Map<I::IntoIter, fn(Signal) -> Result<Signal, Infallible>>, Infallible>
where
    I: IntoIterator<Item = Signal>,
{
    write_xml_with(signals.into_iter().map(Ok as fn(Signal) -> _))
}

/// Like [`write_xml`], for signal streams that can fail (such as a parser
/// piped straight into the writer). Upstream errors pass through as
/// [`ParseError::Source`].
pub fn write_xml_with<I, E>(signals: I) -> XmlWriter<I::IntoIter, E>
where
    I: IntoIterator<Item = Result<Signal, E>>,
{
    XmlWriter {
        input: signals.into_iter(),
        report: silent_report(),
        prefix: None,
        stack: Vec::new(),
        bindings: Vec::new(),
        location: Location::START,
        failed: None,
        eoi_reported: false,
        done: false,
    }
}

struct OpenTag {
    qname: String,
    bindings: usize,
}

/// A configured XML write, driving the input stream on demand.
///
/// Created by [`write_xml`]/[`write_xml_with`].
pub struct XmlWriter<I, E>
where
    I: Iterator<Item = Result<Signal, E>>,
{
    input: I,
    report: Report,
    prefix: Option<PrefixFn>,
    stack: Vec<OpenTag>,
    bindings: Vec<(String, String)>,
    /// Position in the produced byte stream; used for error reports.
    location: Location,
    failed: Option<(Location, Error)>,
    eoi_reported: bool,
    done: bool,
}

impl<I, E> XmlWriter<I, E>
where
    I: Iterator<Item = Result<Signal, E>>,
{
    /// Install an error callback, called for every recoverable problem the
    /// writer finds. Returning `Err` aborts the write.
    pub fn report(
        mut self,
        f: impl FnMut(Location, &Error) -> Result<(), Error> + 'static,
    ) -> Self {
        self.report = Box::new(f);
        self
    }

    /// Install a resolver that assigns a prefix to a namespace URI with no
    /// binding in scope. Returning `None` makes the writer report
    /// [`Error::BadNamespace`].
    pub fn prefix(mut self, f: impl FnMut(&str) -> Option<String> + 'static) -> Self {
        self.prefix = Some(Box::new(f));
        self
    }

    /// Drain the writer into anything that implements [`io::Write`].
    pub fn write_to<W: io::Write>(self, sink: &mut W) -> io::Result<()>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        for chunk in self {
            let chunk = chunk.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
            sink.write_all(&chunk)?;
        }
        Ok(())
    }

    /// Collect the output into one byte vector.
    pub fn into_bytes(self) -> Result<Vec<u8>, ParseError<E>> {
        let mut out = Vec::new();
        for chunk in self {
            out.extend_from_slice(&chunk?);
        }
        Ok(out)
    }

    /// Collect the output into a string (the writer only emits UTF-8).
    pub fn into_string(self) -> Result<String, ParseError<E>> {
        let bytes = self.into_bytes()?;
        Ok(String::from_utf8(bytes).expect("writer output is UTF-8"))
    }

    fn emit(&mut self, text: String) -> Vec<u8> {
        for c in text.chars() {
            self.location.advance(c);
        }
        text.into_bytes()
    }

    /// Deliver a report; `Err` means the callback aborted the write.
    fn deliver(&mut self, error: Error) -> Result<(), ()> {
        match (self.report)(self.location, &error) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.failed = Some((self.location, error));
                Err(())
            }
        }
    }

    fn lookup_prefix(&self, uri: &str) -> Option<&str> {
        self.bindings
            .iter()
            .rev()
            .find(|(_, u)| u == uri)
            .map(|(p, _)| p.as_str())
    }

    fn default_namespace(&self) -> &str {
        self.bindings
            .iter()
            .rev()
            .find(|(p, _)| p.is_empty())
            .map(|(_, u)| u.as_str())
            .unwrap_or("")
    }

    fn start_element(
        &mut self,
        name: crate::Name,
        attributes: Vec<crate::Attribute>,
    ) -> Result<String, ()> {
        let mut pushed = 0;
        let mut markup = String::from("<");
        let mut synthesized: Vec<(String, String)> = Vec::new();

        // declarations carried in the input bind before anything else
        for attribute in &attributes {
            if attribute.name.uri == ns::XMLNS {
                let prefix = if attribute.name.local == "xmlns" {
                    String::new()
                } else {
                    attribute.name.local.clone()
                };
                self.bindings.push((prefix, attribute.value.clone()));
                pushed += 1;
            }
        }

        // element name: unprefixed via the default namespace
        let qname = if name.uri.is_empty() {
            if !self.default_namespace().is_empty() {
                self.bindings.push((String::new(), String::new()));
                pushed += 1;
                synthesized.push(("xmlns".into(), String::new()));
            }
            name.local.clone()
        } else if self.default_namespace() == name.uri {
            name.local.clone()
        } else if name.uri == ns::XML {
            format!("xml:{}", name.local)
        } else if let Some(prefix) = self.lookup_prefix(&name.uri) {
            if prefix.is_empty() {
                name.local.clone()
            } else {
                format!("{}:{}", prefix, name.local)
            }
        } else {
            self.bindings.push((String::new(), name.uri.clone()));
            pushed += 1;
            synthesized.push(("xmlns".into(), name.uri.clone()));
            name.local.clone()
        };
        markup.push_str(&qname);

        for attribute in &attributes {
            let aname = &attribute.name;
            let aqname = if aname.uri.is_empty() {
                aname.local.clone()
            } else if aname.uri == ns::XMLNS {
                if aname.local == "xmlns" {
                    "xmlns".to_owned()
                } else {
                    format!("xmlns:{}", aname.local)
                }
            } else if aname.uri == ns::XML {
                format!("xml:{}", aname.local)
            } else {
                let bound = self
                    .lookup_prefix(&aname.uri)
                    .filter(|prefix| !prefix.is_empty())
                    .map(str::to_owned);
                match bound {
                    Some(prefix) => format!("{}:{}", prefix, aname.local),
                    None => match self.prefix.as_mut().and_then(|f| f(&aname.uri)) {
                        Some(prefix) => {
                            self.bindings.push((prefix.clone(), aname.uri.clone()));
                            pushed += 1;
                            synthesized
                                .push((format!("xmlns:{prefix}"), aname.uri.clone()));
                            format!("{}:{}", prefix, aname.local)
                        }
                        None => {
                            self.deliver(Error::BadNamespace(aname.uri.clone()))?;
                            aname.local.clone()
                        }
                    },
                }
            };
            markup.push(' ');
            markup.push_str(&aqname);
            markup.push_str("=\"");
            markup.push_str(&escape_attribute(&attribute.value));
            markup.push('"');
        }
        for (name, value) in synthesized {
            markup.push(' ');
            markup.push_str(&name);
            markup.push_str("=\"");
            markup.push_str(&escape_attribute(&value));
            markup.push('"');
        }
        markup.push('>');

        self.stack.push(OpenTag { qname, bindings: pushed });
        Ok(markup)
    }

    fn next_chunk(&mut self) -> Option<Result<Vec<u8>, ParseError<E>>> {
        let signal = match self.input.next() {
            Some(Ok(signal)) => signal,
            Some(Err(e)) => {
                self.done = true;
                return Some(Err(ParseError::Source(e)));
            }
            None => {
                // close anything the input left open
                if let Some(open) = self.stack.pop() {
                    if !std::mem::replace(&mut self.eoi_reported, true)
                        && self
                            .deliver(Error::UnexpectedEoi {
                                place: "element".into(),
                            })
                            .is_err()
                    {
                        return self.take_failure();
                    }
                    self.bindings.truncate(self.bindings.len() - open.bindings);
                    let markup = format!("</{}>", open.qname);
                    return Some(Ok(self.emit(markup)));
                }
                self.done = true;
                return None;
            }
        };

        let markup = match signal {
            Signal::StartElement { name, attributes } => {
                match self.start_element(name, attributes) {
                    Ok(markup) => markup,
                    Err(()) => return self.take_failure(),
                }
            }
            Signal::EndElement => match self.stack.pop() {
                Some(open) => {
                    self.bindings.truncate(self.bindings.len() - open.bindings);
                    format!("</{}>", open.qname)
                }
                None => {
                    if self
                        .deliver(Error::UnmatchedEndTag { name: String::new() })
                        .is_err()
                    {
                        return self.take_failure();
                    }
                    String::new()
                }
            },
            Signal::Text(chunks) => escape_text(&chunks),
            Signal::Doctype(doctype) => {
                if let Some(raw) = &doctype.raw {
                    format!("<!DOCTYPE{raw}>")
                } else if let Some(name) = &doctype.name {
                    let mut markup = format!("<!DOCTYPE {name}");
                    match (&doctype.public_id, &doctype.system_id) {
                        (Some(public), Some(system)) => {
                            markup.push_str(&format!(" PUBLIC \"{public}\" \"{system}\""));
                        }
                        (Some(public), None) => {
                            markup.push_str(&format!(" PUBLIC \"{public}\""));
                        }
                        (None, Some(system)) => {
                            markup.push_str(&format!(" SYSTEM \"{system}\""));
                        }
                        (None, None) => (),
                    }
                    markup.push('>');
                    markup
                } else {
                    String::new()
                }
            }
            Signal::XmlDeclaration(declaration) => {
                let mut markup = format!("<?xml version=\"{}\"", declaration.version);
                if let Some(encoding) = &declaration.encoding {
                    markup.push_str(&format!(" encoding=\"{encoding}\""));
                }
                if let Some(standalone) = declaration.standalone {
                    markup.push_str(if standalone {
                        " standalone=\"yes\""
                    } else {
                        " standalone=\"no\""
                    });
                }
                markup.push_str("?>");
                markup
            }
            Signal::ProcessingInstruction { target, body } => {
                if body.is_empty() {
                    format!("<?{target}?>")
                } else {
                    format!("<?{target} {body}?>")
                }
            }
            Signal::Comment(body) => {
                if body.contains("--") {
                    let report = Error::BadToken {
                        token: "--".into(),
                        place: "comment".into(),
                        suggestion: "split the comment".into(),
                    };
                    if self.deliver(report).is_err() {
                        return self.take_failure();
                    }
                }
                format!("<!--{body}-->")
            }
        };
        Some(Ok(self.emit(markup)))
    }

    fn take_failure(&mut self) -> Option<Result<Vec<u8>, ParseError<E>>> {
        let (location, error) = self.failed.clone().expect("a recorded failure");
        Some(Err(ParseError::Report { location, error }))
    }
}

impl<I, E> Iterator for XmlWriter<I, E>
where
    I: Iterator<Item = Result<Signal, E>>,
{
    type Item = Result<Vec<u8>, ParseError<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((location, error)) = &self.failed {
            return Some(Err(ParseError::Report {
                location: *location,
                error: error.clone(),
            }));
        }
        if self.done {
            return None;
        }
        loop {
            match self.next_chunk() {
                Some(Ok(chunk)) if chunk.is_empty() => continue,
                other => return other,
            }
        }
    }
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("&#x{:X};", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

fn escape_text(chunks: &[String]) -> String {
    let mut out = String::new();
    let mut tail = ['\0'; 2];
    for chunk in chunks {
        for c in chunk.chars() {
            match c {
                '<' => out.push_str("&lt;"),
                '&' => out.push_str("&amp;"),
                '>' if tail == [']', ']'] => out.push_str("&gt;"),
                c => out.push(c),
            }
            tail = [tail[1], c];
        }
    }
    out
}
