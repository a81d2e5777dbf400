//! The XML tree constructor: tokens to located, balanced signals.

use std::collections::VecDeque;

use crate::signal::{ns, Attribute, Doctype, Emit, Name, Signal};
use crate::source::ByteSource;
use crate::xml::tokenizer::{XmlToken, XmlTokenizer};
use crate::{Context, Error, Location};

/// The resolver for unbound namespace prefixes.
pub(crate) type NamespaceFn = Box<dyn FnMut(&str) -> Option<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Before the root element (misc and doctype allowed).
    Prolog,
    /// Inside the root element.
    Content,
    /// After the root element closed (misc only, under `Document`).
    Epilog,
}

struct OpenElement {
    raw_name: String,
    bindings: usize,
}

pub(crate) struct XmlConstructor<S: ByteSource> {
    tokenizer: XmlTokenizer<S>,
    context: Option<Context>,
    namespace: Option<NamespaceFn>,
    phase: Phase,
    seen_doctype: bool,
    seen_root: bool,
    emitted_any: bool,
    stack: Vec<OpenElement>,
    bindings: Vec<(String, String)>,
    text: Vec<String>,
    text_start: Location,
    out: VecDeque<Emit>,
    last_location: Location,
    done: bool,
}

impl<S: ByteSource> XmlConstructor<S> {
    pub(crate) fn new(
        tokenizer: XmlTokenizer<S>,
        context: Option<Context>,
        namespace: Option<NamespaceFn>,
    ) -> Self {
        XmlConstructor {
            tokenizer,
            context,
            namespace,
            phase: Phase::Prolog,
            seen_doctype: false,
            seen_root: false,
            emitted_any: false,
            stack: Vec::new(),
            bindings: Vec::new(),
            text: Vec::new(),
            text_start: Location::START,
            out: VecDeque::new(),
            last_location: Location::START,
            done: false,
        }
    }

    /// Produce the next report or signal, pumping the tokenizer as needed.
    pub(crate) fn next_emit(&mut self) -> Result<Option<Emit>, S::Error> {
        loop {
            if let Some(emit) = self.out.pop_front() {
                if matches!(emit, Emit::Signal(..)) {
                    self.emitted_any = true;
                }
                return Ok(Some(emit));
            }
            if self.done {
                return Ok(None);
            }
            self.pump()?;
        }
    }

    fn pump(&mut self) -> Result<(), S::Error> {
        let token = self.tokenizer.next_token()?;
        while let Some((location, error)) = self.tokenizer.take_report() {
            self.out.push_back(Emit::Report(location, error));
        }
        if self.context.is_none() {
            // a stream that opens with character data is a fragment
            self.context = Some(match &token {
                Some((_, XmlToken::Chars(text))) if !text.trim().is_empty() => {
                    Context::Fragment(String::new())
                }
                _ => Context::Document,
            });
        }
        match token {
            Some((location, token)) => self.process(location, token),
            None => self.finish(),
        }
        Ok(())
    }

    fn is_document(&self) -> bool {
        matches!(self.context, Some(Context::Document))
    }

    fn report(&mut self, location: Location, error: Error) {
        self.last_location = self.last_location.max(location);
        self.out.push_back(Emit::Report(location, error));
    }

    fn signal(&mut self, location: Location, signal: Signal) {
        self.last_location = self.last_location.max(location);
        self.out.push_back(Emit::Signal(location, signal));
    }

    fn flush_text(&mut self) {
        if self.text.iter().all(|chunk| chunk.is_empty()) {
            self.text.clear();
            return;
        }
        let chunks = std::mem::take(&mut self.text);
        self.signal(self.text_start, Signal::Text(chunks));
    }

    fn process(&mut self, location: Location, token: XmlToken) {
        match token {
            XmlToken::Chars(text) => {
                let at_top_level = self.stack.is_empty();
                if at_top_level && self.is_document() {
                    if !text.chars().all(|c| c.is_ascii_whitespace()) {
                        self.report(
                            location,
                            Error::BadDocument {
                                detail: "text at top level".into(),
                            },
                        );
                    }
                    return;
                }
                if self.text.is_empty() {
                    self.text_start = location;
                }
                self.text.push(text);
            }
            XmlToken::XmlDeclaration(declaration) => {
                if self.emitted_any || self.out.iter().any(|e| matches!(e, Emit::Signal(..))) {
                    self.report(
                        location,
                        Error::BadDocument {
                            detail: "XML declaration must come first".into(),
                        },
                    );
                } else {
                    self.signal(location, Signal::XmlDeclaration(declaration));
                }
            }
            XmlToken::Doctype {
                name,
                public_id,
                system_id,
                raw,
            } => {
                if self.phase != Phase::Prolog || self.seen_doctype || !self.is_document() {
                    self.report(
                        location,
                        Error::BadDocument {
                            detail: "doctype not allowed here".into(),
                        },
                    );
                    return;
                }
                self.seen_doctype = true;
                self.signal(
                    location,
                    Signal::Doctype(Doctype {
                        name,
                        public_id,
                        system_id,
                        raw: Some(raw),
                        force_quirks: false,
                    }),
                );
            }
            XmlToken::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                self.flush_text();
                if self.phase == Phase::Epilog && self.is_document() {
                    self.report(
                        location,
                        Error::BadDocument {
                            detail: "multiple root elements".into(),
                        },
                    );
                }
                self.start_element(location, name, attributes, self_closing);
            }
            XmlToken::EndTag { name } => {
                self.flush_text();
                self.end_element(location, name);
            }
            XmlToken::Pi { target, body } => {
                self.flush_text();
                self.signal(location, Signal::ProcessingInstruction { target, body });
            }
            XmlToken::Comment(body) => {
                self.flush_text();
                self.signal(location, Signal::Comment(body));
            }
        }
    }

    fn start_element(
        &mut self,
        location: Location,
        raw_name: String,
        raw_attributes: Vec<(String, String)>,
        self_closing: bool,
    ) {
        // namespace declarations take effect on their own element
        let mut pushed = 0;
        for (name, value) in &raw_attributes {
            if name == "xmlns" {
                self.bindings.push((String::new(), value.clone()));
                pushed += 1;
            } else if let Some(prefix) = name.strip_prefix("xmlns:") {
                self.bindings.push((prefix.to_owned(), value.clone()));
                pushed += 1;
            }
        }

        let name = self.resolve(location, &raw_name, false);
        let mut attributes: Vec<Attribute> = Vec::with_capacity(raw_attributes.len());
        for (raw, value) in raw_attributes {
            let attr_name = if raw == "xmlns" {
                Name::in_ns(ns::XMLNS, "xmlns")
            } else if let Some(prefix) = raw.strip_prefix("xmlns:") {
                Name::in_ns(ns::XMLNS, prefix)
            } else {
                self.resolve(location, &raw, true)
            };
            if attributes.iter().any(|a| a.name == attr_name) {
                self.report(
                    location,
                    Error::BadToken {
                        token: raw,
                        place: "tag".into(),
                        suggestion: "remove the duplicate attribute".into(),
                    },
                );
                continue;
            }
            attributes.push(Attribute {
                name: attr_name,
                value,
            });
        }

        if self.stack.is_empty() {
            self.seen_root = true;
            self.phase = Phase::Content;
        }
        self.signal(location, Signal::StartElement { name, attributes });

        if self_closing {
            self.signal(location, Signal::EndElement);
            self.bindings.truncate(self.bindings.len() - pushed);
            if self.stack.is_empty() {
                self.phase = Phase::Epilog;
            }
        } else {
            self.stack.push(OpenElement {
                raw_name,
                bindings: pushed,
            });
        }
    }

    fn end_element(&mut self, location: Location, name: String) {
        let matched = self
            .stack
            .iter()
            .rposition(|open| open.raw_name == name);
        let matched = match matched {
            Some(i) => i,
            None => {
                self.report(location, Error::UnmatchedEndTag { name });
                return;
            }
        };
        while self.stack.len() > matched + 1 {
            let open = self.stack.pop().expect("stack entries above the match");
            self.report(
                location,
                Error::UnmatchedStartTag {
                    name: open.raw_name,
                },
            );
            self.signal(location, Signal::EndElement);
            self.bindings.truncate(self.bindings.len() - open.bindings);
        }
        let open = self.stack.pop().expect("the matched entry");
        self.signal(location, Signal::EndElement);
        self.bindings.truncate(self.bindings.len() - open.bindings);
        if self.stack.is_empty() {
            self.phase = Phase::Epilog;
        }
    }

    fn finish(&mut self) {
        self.flush_text();
        let location = self.last_location;
        while let Some(open) = self.stack.pop() {
            self.report(
                location,
                Error::UnmatchedStartTag {
                    name: open.raw_name,
                },
            );
            self.signal(location, Signal::EndElement);
            self.bindings.truncate(self.bindings.len() - open.bindings);
        }
        if self.is_document() && !self.seen_root {
            self.report(
                location,
                Error::BadDocument {
                    detail: "no root element".into(),
                },
            );
        }
        self.done = true;
    }

    /// Resolve a qualified name against the in-scope bindings.
    fn resolve(&mut self, location: Location, qname: &str, is_attribute: bool) -> Name {
        let (prefix, local) = match qname.split_once(':') {
            Some((prefix, local)) => (prefix, local),
            None => {
                if is_attribute {
                    // unprefixed attributes are never in the default namespace
                    return Name::local(qname);
                }
                ("", qname)
            }
        };
        match prefix {
            "xml" => return Name::in_ns(ns::XML, local),
            "xmlns" => return Name::in_ns(ns::XMLNS, local),
            _ => (),
        }
        let bound = self
            .bindings
            .iter()
            .rev()
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.clone());
        match bound {
            Some(uri) => Name::in_ns(uri, local),
            None if prefix.is_empty() => Name::local(local),
            None => match self.namespace.as_mut().and_then(|f| f(prefix)) {
                Some(uri) => Name::in_ns(uri, local),
                None => {
                    self.report(location, Error::BadNamespace(prefix.to_owned()));
                    Name::local(local)
                }
            },
        }
    }
}
