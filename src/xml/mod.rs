//! XML parsing and writing.

mod constructor;
mod tokenizer;
mod writer;

pub use writer::{write_xml, write_xml_with, XmlWriter};

use crate::encoding::{decoder_for, CodePoints, Dialect, Encoding};
use crate::error::{silent_report, Report};
use crate::source::{ByteSource, IntoByteSource};
use crate::{Context, Error, Location, ParseError, Signal};

use crate::signal::Emit;
use constructor::{NamespaceFn, XmlConstructor};
use tokenizer::{EntityFn, XmlTokenizer};

/// Parse XML from any byte input, with best-effort error recovery.
///
/// The returned parser is an iterator of located [`Signal`]s and is also a
/// builder: configure it before the first `next()` call. Nothing is read
/// from the input until then.
///
/// ```
/// use pullmark::{parse_xml, Signal};
///
/// let signals: Vec<_> = parse_xml("<doc>hi</doc>")
///     .map(|result| result.unwrap().1)
///     .collect();
/// assert_eq!(
///     signals,
///     vec![
///         Signal::StartElement { name: pullmark::Name::local("doc"), attributes: vec![] },
///         Signal::text("hi"),
///         Signal::EndElement,
///     ],
/// );
/// ```
pub fn parse_xml<'a, I: IntoByteSource<'a>>(input: I) -> XmlParser<I::Source> {
    XmlParser {
        inner: Inner::Pending {
            source: input.into_byte_source(),
            encoding: None,
            context: None,
            report: silent_report(),
            entity: None,
            namespace: None,
        },
    }
}

/// A configured XML parse, yielding located signals.
///
/// Created by [`parse_xml`]; see there for usage.
pub struct XmlParser<S: ByteSource> {
    inner: Inner<S>,
}

enum Inner<S: ByteSource> {
    Pending {
        source: S,
        encoding: Option<Encoding>,
        context: Option<Context>,
        report: Report,
        entity: Option<EntityFn>,
        namespace: Option<NamespaceFn>,
    },
    Running {
        constructor: XmlConstructor<S>,
        report: Report,
    },
    Failed {
        location: Location,
        error: Error,
    },
    Done,
}

impl<S: ByteSource> XmlParser<S> {
    fn configure(&mut self, f: impl FnOnce(&mut Inner<S>)) {
        debug_assert!(
            matches!(self.inner, Inner::Pending { .. }),
            "parsers are configured before iteration starts"
        );
        f(&mut self.inner);
    }

    /// Install an error callback. It is called for every recoverable error
    /// before recovery; returning `Err` aborts the parse with
    /// [`ParseError::Report`].
    pub fn report(
        mut self,
        f: impl FnMut(Location, &Error) -> Result<(), Error> + 'static,
    ) -> Self {
        self.configure(|inner| {
            if let Inner::Pending { report, .. } = inner {
                *report = Box::new(f);
            }
        });
        self
    }

    /// Bypass encoding detection and decode with `encoding`.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.configure(|inner| {
            if let Inner::Pending { encoding: e, .. } = inner {
                *e = Some(encoding);
            }
        });
        self
    }

    /// Fix the parse context instead of auto-detecting it.
    pub fn context(mut self, context: Context) -> Self {
        self.configure(|inner| {
            if let Inner::Pending { context: c, .. } = inner {
                *c = Some(context);
            }
        });
        self
    }

    /// Install a resolver for entity references beyond the built-in five.
    /// The returned replacement text is inserted as character data.
    pub fn entity(mut self, f: impl FnMut(&str) -> Option<String> + 'static) -> Self {
        self.configure(|inner| {
            if let Inner::Pending { entity, .. } = inner {
                *entity = Some(Box::new(f));
            }
        });
        self
    }

    /// Install a resolver consulted when a namespace prefix is unbound.
    /// Returning `None` makes the parser report [`Error::BadNamespace`].
    pub fn namespace(mut self, f: impl FnMut(&str) -> Option<String> + 'static) -> Self {
        self.configure(|inner| {
            if let Inner::Pending { namespace, .. } = inner {
                *namespace = Some(Box::new(f));
            }
        });
        self
    }
}

impl<S: ByteSource> Iterator for XmlParser<S> {
    type Item = Result<(Location, Signal), ParseError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.inner, Inner::Done) {
                Inner::Pending {
                    source,
                    encoding,
                    context,
                    report,
                    entity,
                    namespace,
                } => {
                    let decoder = match decoder_for(source, encoding, Dialect::Xml) {
                        Ok(decoder) => decoder,
                        Err(e) => return Some(Err(ParseError::Source(e))),
                    };
                    let tokenizer = XmlTokenizer::new(CodePoints::new(decoder), entity);
                    let constructor = XmlConstructor::new(tokenizer, context, namespace);
                    self.inner = Inner::Running {
                        constructor,
                        report,
                    };
                }
                Inner::Running {
                    mut constructor,
                    mut report,
                } => match constructor.next_emit() {
                    Ok(Some(Emit::Report(location, error))) => match report(location, &error) {
                        Ok(()) => {
                            self.inner = Inner::Running {
                                constructor,
                                report,
                            };
                        }
                        Err(error) => {
                            self.inner = Inner::Failed { location, error };
                        }
                    },
                    Ok(Some(Emit::Signal(location, signal))) => {
                        self.inner = Inner::Running {
                            constructor,
                            report,
                        };
                        return Some(Ok((location, signal)));
                    }
                    Ok(None) => return None,
                    Err(e) => return Some(Err(ParseError::Source(e))),
                },
                Inner::Failed { location, error } => {
                    let item = ParseError::Report {
                        location,
                        error: error.clone(),
                    };
                    self.inner = Inner::Failed { location, error };
                    return Some(Err(item));
                }
                Inner::Done => return None,
            }
        }
    }
}
