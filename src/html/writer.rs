//! The HTML5 serializer: signals to bytes.
//!
//! Follows the HTML serialization algorithm: void elements get no end
//! tag, raw-text elements are emitted verbatim, non-void elements never
//! self-close, and attribute quoting is minimised where the value allows
//! it.

use std::convert::Infallible;
use std::io;

use crate::error::{silent_report, Report};
use crate::html::tables::is_void;
use crate::signal::{ns, Signal};
use crate::{Error, Location, ParseError};

/// Raw-text elements: their text content is emitted verbatim.
fn is_raw_text(name: &str) -> bool {
    matches!(
        name,
        "script" | "style" | "xmp" | "iframe" | "noembed" | "noframes" | "plaintext"
    )
}

/// Serialize a stream of signals as HTML5, yielding UTF-8 byte chunks.
///
/// ```
/// use pullmark::{write_html, Attribute, Name, Signal};
///
/// let signals = vec![
///     Signal::StartElement {
///         name: Name::in_ns(pullmark::ns::HTML, "img"),
///         attributes: vec![Attribute::new("src", "a.png")],
///     },
///     Signal::EndElement,
/// ];
/// let out = write_html(signals).into_string().unwrap();
/// assert_eq!(out, "<img src=a.png>");
/// ```
pub fn write_html<I>(
    signals: I,
) -> HtmlWriter<std::iter::Map<I::IntoIter, fn(Signal) -> Result<Signal, Infallible>>, Infallible>
where
    I: IntoIterator<Item = Signal>,
{
    write_html_with(signals.into_iter().map(Ok as fn(Signal) -> _))
}

/// Like [`write_html`], for signal streams that can fail (such as a parser
/// piped straight into the writer).
pub fn write_html_with<I, E>(signals: I) -> HtmlWriter<I::IntoIter, E>
where
    I: IntoIterator<Item = Result<Signal, E>>,
{
    HtmlWriter {
        input: signals.into_iter(),
        report: silent_report(),
        stack: Vec::new(),
        location: Location::START,
        failed: None,
        eoi_reported: false,
        done: false,
    }
}

#[derive(Debug)]
struct OpenTag {
    name: String,
    void: bool,
    raw_text: bool,
}

/// A configured HTML write, driving the input stream on demand.
///
/// Created by [`write_html`]/[`write_html_with`].
pub struct HtmlWriter<I, E>
where
    I: Iterator<Item = Result<Signal, E>>,
{
    input: I,
    report: Report,
    stack: Vec<OpenTag>,
    /// Position in the produced byte stream; used for error reports.
    location: Location,
    failed: Option<(Location, Error)>,
    eoi_reported: bool,
    done: bool,
}

impl<I, E> HtmlWriter<I, E>
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

    fn deliver(&mut self, error: Error) -> Result<(), ()> {
        match (self.report)(self.location, &error) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.failed = Some((self.location, error));
                Err(())
            }
        }
    }

    fn take_failure(&mut self) -> Option<Result<Vec<u8>, ParseError<E>>> {
        let (location, error) = self.failed.clone().expect("a recorded failure");
        Some(Err(ParseError::Report { location, error }))
    }

    /// Content arrived while the top of the stack is a void element.
    fn check_void_content(&mut self) -> Result<(), ()> {
        if let Some(top) = self.stack.last() {
            if top.void {
                let place = top.name.clone();
                return self.deliver(Error::BadContent { place });
            }
        }
        Ok(())
    }

    fn next_chunk(&mut self) -> Option<Result<Vec<u8>, ParseError<E>>> {
        let signal = match self.input.next() {
            Some(Ok(signal)) => signal,
            Some(Err(e)) => {
                self.done = true;
                return Some(Err(ParseError::Source(e)));
            }
            None => {
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
                    if open.void {
                        return Some(Ok(Vec::new()));
                    }
                    let markup = format!("</{}>", open.name);
                    return Some(Ok(self.emit(markup)));
                }
                self.done = true;
                return None;
            }
        };

        let markup = match signal {
            Signal::StartElement { name, attributes } => {
                if self.check_void_content().is_err() {
                    return self.take_failure();
                }
                // HTML, SVG and MathML element names all serialize as the
                // local name; a stream serializer has no prefix to attach
                // for anything else either
                let tag_name = name.local.clone();
                let mut markup = format!("<{tag_name}");
                for attribute in &attributes {
                    let attr_name =
                        serialized_attribute_name(&attribute.name.uri, &attribute.name.local);
                    markup.push(' ');
                    markup.push_str(&attr_name);
                    if attribute.value == attr_name || attribute.value.is_empty() {
                        continue;
                    }
                    markup.push('=');
                    if needs_quoting(&attribute.value) {
                        markup.push('"');
                        markup.push_str(&escape_attribute(&attribute.value));
                        markup.push('"');
                    } else {
                        markup.push_str(&attribute.value);
                    }
                }
                markup.push('>');
                let html = name.uri.is_empty() || name.uri == ns::HTML;
                self.stack.push(OpenTag {
                    void: html && is_void(&tag_name),
                    raw_text: html && is_raw_text(&tag_name),
                    name: tag_name,
                });
                markup
            }
            Signal::EndElement => match self.stack.pop() {
                Some(open) if open.void => String::new(),
                Some(open) => format!("</{}>", open.name),
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
            Signal::Text(chunks) => {
                if self.check_void_content().is_err() {
                    return self.take_failure();
                }
                let raw_name = match self.stack.last() {
                    Some(open) if open.raw_text => Some(open.name.clone()),
                    _ => None,
                };
                match raw_name {
                    Some(name) => {
                        let text = chunks.concat();
                        let closer = format!("</{name}");
                        if text.to_ascii_lowercase().contains(&closer) {
                            let report = Error::BadToken {
                                token: closer,
                                place: name,
                                suggestion: "raw text may not contain its own end tag".into(),
                            };
                            if self.deliver(report).is_err() {
                                return self.take_failure();
                            }
                        }
                        text
                    }
                    None => escape_text(&chunks),
                }
            }
            Signal::Doctype(_) => "<!DOCTYPE html>".to_owned(),
            // HTML has no XML declarations or processing instructions
            Signal::XmlDeclaration(_) | Signal::ProcessingInstruction { .. } => String::new(),
            Signal::Comment(body) => format!("<!--{body}-->"),
        };
        Some(Ok(self.emit(markup)))
    }
}

impl<I, E> Iterator for HtmlWriter<I, E>
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

fn serialized_attribute_name(uri: &str, local: &str) -> String {
    match uri {
        "" => local.to_owned(),
        u if u == ns::XML => format!("xml:{local}"),
        u if u == ns::XLINK => format!("xlink:{local}"),
        u if u == ns::XMLNS => {
            if local == "xmlns" {
                "xmlns".to_owned()
            } else {
                format!("xmlns:{local}")
            }
        }
        _ => local.to_owned(),
    }
}

/// Quoting may be omitted only for values free of whitespace, quotes,
/// `=`, `<`, `>` and backticks.
fn needs_quoting(value: &str) -> bool {
    value
        .chars()
        .any(|c| matches!(c, ' ' | '\t' | '\n' | '\u{c}' | '\r' | '"' | '\'' | '=' | '<' | '>' | '`'))
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
    out
}

fn escape_text(chunks: &[String]) -> String {
    let mut out = String::new();
    for chunk in chunks {
        for c in chunk.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '\u{a0}' => out.push_str("&nbsp;"),
                c => out.push(c),
            }
        }
    }
    out
}
