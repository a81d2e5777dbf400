use crate::Location;

/// A recoverable markup error.
///
/// Parsers and writers never stop on these: every one is handed to the
/// `report` callback and then recovered from with best-effort output. The
/// only way an `Error` stops a stream is the callback itself returning
/// `Err` (see [`ParseError::Report`]).
///
/// The `Display` impl produces the human-readable rendering; prefix it with
/// a [`Location`] (`format!("{location}: {error}")`) for the conventional
/// `line:column: message` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An illegal byte sequence for the encoding being decoded.
    Decoding {
        /// The offending bytes (the minimal illegal prefix that was skipped).
        bytes: Vec<u8>,
        /// Name of the encoding that rejected them.
        encoding: &'static str,
    },
    /// A local syntactic problem.
    BadToken {
        /// The text of the offending token, abbreviated.
        token: String,
        /// What was being parsed when the token appeared, e.g. `"attribute"`.
        place: String,
        /// How to repair the input.
        suggestion: String,
    },
    /// The input ended in the middle of a construct.
    UnexpectedEoi {
        /// The unterminated construct, e.g. `"comment"`.
        place: String,
    },
    /// A document-level structural problem.
    BadDocument {
        /// What is wrong with the document.
        detail: String,
    },
    /// A start tag that was never closed.
    UnmatchedStartTag {
        /// The tag name.
        name: String,
    },
    /// An end tag with no matching start tag.
    UnmatchedEndTag {
        /// The tag name.
        name: String,
    },
    /// A namespace prefix or URI could not be resolved.
    BadNamespace(String),
    /// A tag appeared somewhere its content model does not allow it.
    MisnestedTag {
        /// The offending tag name.
        what: String,
        /// The element it could not nest inside.
        place: String,
    },
    /// Content appeared inside an element that does not allow it.
    BadContent {
        /// The element whose content model was violated.
        place: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Decoding { bytes, encoding } => {
                write!(f, "bad bytes")?;
                for b in bytes {
                    write!(f, " {b:02x}")?;
                }
                write!(f, " for encoding {encoding}")
            }
            Error::BadToken {
                token,
                place,
                suggestion,
            } => write!(f, "bad token '{token}' in {place}: {suggestion}"),
            Error::UnexpectedEoi { place } => {
                write!(f, "unexpected end of input in {place}")
            }
            Error::BadDocument { detail } => write!(f, "bad document: {detail}"),
            Error::UnmatchedStartTag { name } => {
                write!(f, "unmatched start tag '{name}'")
            }
            Error::UnmatchedEndTag { name } => {
                write!(f, "unmatched end tag '{name}'")
            }
            Error::BadNamespace(s) => write!(f, "unknown namespace '{s}'"),
            Error::MisnestedTag { what, place } => {
                write!(f, "misnested tag '{what}': not allowed in '{place}'")
            }
            Error::BadContent { place } => {
                write!(f, "bad content in '{place}'")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A fatal parse-stream failure.
///
/// Parse errors themselves are recoverable and reported through the
/// `report` callback; a parser's iterator only ever yields `Err` for the
/// two conditions here.
///
/// After a [`ParseError::Report`] the stream is permanently failed and
/// yields the same error on every subsequent call. After a
/// [`ParseError::Source`] the stream is fused (source errors are not
/// guaranteed to be cloneable, so they cannot be re-yielded).
#[derive(Debug)]
pub enum ParseError<E> {
    /// The underlying byte source failed.
    Source(E),
    /// The `report` callback returned `Err`, aborting the parse.
    Report {
        /// Where the reported error was found.
        location: Location,
        /// The error the callback rejected.
        error: Error,
    },
}

impl<E: std::fmt::Display> std::fmt::Display for ParseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Source(e) => write!(f, "input error: {e}"),
            ParseError::Report { location, error } => write!(f, "{location}: {error}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for ParseError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Source(e) => Some(e),
            ParseError::Report { error, .. } => Some(error),
        }
    }
}

/// The boxed report callback stored by parsers and writers.
pub(crate) type Report = Box<dyn FnMut(Location, &Error) -> Result<(), Error>>;

/// A report callback that ignores every error (the default).
pub(crate) fn silent_report() -> Report {
    Box::new(|_, _| Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering() {
        let e = Error::BadToken {
            token: "&".into(),
            place: "attribute".into(),
            suggestion: "replace with '&amp;'".into(),
        };
        assert_eq!(
            e.to_string(),
            "bad token '&' in attribute: replace with '&amp;'"
        );

        let e = Error::Decoding {
            bytes: vec![0xc3, 0x28],
            encoding: "utf-8",
        };
        assert_eq!(e.to_string(), "bad bytes c3 28 for encoding utf-8");
    }

    #[test]
    fn located_rendering() {
        let loc = Location { line: 2, column: 7 };
        let e = Error::UnmatchedEndTag { name: "b".into() };
        assert_eq!(format!("{loc}: {e}"), "2:7: unmatched end tag 'b'");
    }
}
