//! HTML parsing and writing.

mod constructor;
mod tables;
mod tokenizer;
mod writer;

pub use writer::{write_html, write_html_with, HtmlWriter};

use crate::encoding::{decoder_for, CodePoints, Dialect, Encoding};
use crate::error::{silent_report, Report};
use crate::signal::Emit;
use crate::source::{ByteSource, IntoByteSource};
use crate::{Context, Error, Location, ParseError, Signal};

use constructor::HtmlConstructor;
use tokenizer::HtmlTokenizer;

/// Parse HTML from any byte input, recovering from malformed markup the
/// way browsers do.
///
/// The returned parser is an iterator of located [`Signal`]s and is also a
/// builder: configure it before the first `next()` call. Nothing is read
/// from the input until then.
///
/// ```
/// use pullmark::{parse_html, Signal};
///
/// let text: String = parse_html("<p>some <b>text</b></p>")
///     .filter_map(|result| result.unwrap().1.joined_text())
///     .collect();
/// assert_eq!(text, "some text");
/// ```
pub fn parse_html<'a, I: IntoByteSource<'a>>(input: I) -> HtmlParser<I::Source> {
    HtmlParser {
        inner: Inner::Pending {
            source: input.into_byte_source(),
            encoding: None,
            context: None,
            report: silent_report(),
        },
    }
}

/// A configured HTML parse, yielding located signals.
///
/// Created by [`parse_html`]; see there for usage.
pub struct HtmlParser<S: ByteSource> {
    inner: Inner<S>,
}

enum Inner<S: ByteSource> {
    Pending {
        source: S,
        encoding: Option<Encoding>,
        context: Option<Context>,
        report: Report,
    },
    Running {
        constructor: HtmlConstructor<S>,
        report: Report,
    },
    Failed {
        location: Location,
        error: Error,
    },
    Done,
}

impl<S: ByteSource> HtmlParser<S> {
    /// Install an error callback. It is called for every recoverable error
    /// before recovery; returning `Err` aborts the parse with
    /// [`ParseError::Report`].
    pub fn report(
        mut self,
        f: impl FnMut(Location, &Error) -> Result<(), Error> + 'static,
    ) -> Self {
        if let Inner::Pending { report, .. } = &mut self.inner {
            *report = Box::new(f);
        }
        self
    }

    /// Bypass encoding detection and decode with `encoding`.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        if let Inner::Pending { encoding: e, .. } = &mut self.inner {
            *e = Some(encoding);
        }
        self
    }

    /// Fix the parse context instead of auto-detecting it. Fragment
    /// contexts name the element the content notionally sits inside, e.g.
    /// `Context::fragment("tr")` for row content.
    pub fn context(mut self, context: Context) -> Self {
        if let Inner::Pending { context: c, .. } = &mut self.inner {
            *c = Some(context);
        }
        self
    }
}

impl<S: ByteSource> Iterator for HtmlParser<S> {
    type Item = Result<(Location, Signal), ParseError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.inner, Inner::Done) {
                Inner::Pending {
                    source,
                    encoding,
                    context,
                    report,
                } => {
                    let decoder = match decoder_for(source, encoding, Dialect::Html) {
                        Ok(decoder) => decoder,
                        Err(e) => return Some(Err(ParseError::Source(e))),
                    };
                    let tokenizer = HtmlTokenizer::new(CodePoints::new(decoder));
                    let constructor = HtmlConstructor::new(tokenizer, context);
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
