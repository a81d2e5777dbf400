//! The XML tokenizer: code points to markup tokens.

use std::collections::VecDeque;

use crate::encoding::CodePoints;
use crate::signal::XmlDeclaration;
use crate::source::ByteSource;
use crate::{Error, Location};

/// One token of XML markup. Character data arrives in runs; the tree
/// constructor merges adjacent runs into a single text signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum XmlToken {
    XmlDeclaration(XmlDeclaration),
    Doctype {
        name: Option<String>,
        public_id: Option<String>,
        system_id: Option<String>,
        raw: String,
    },
    StartTag {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
    Chars(String),
    Pi {
        target: String,
        body: String,
    },
    Comment(String),
}

/// XML 1.0 `NameStartChar`.
pub(crate) fn is_name_start(c: char) -> bool {
    matches!(c,
        ':' | '_' | 'A'..='Z' | 'a'..='z'
        | '\u{c0}'..='\u{d6}' | '\u{d8}'..='\u{f6}' | '\u{f8}'..='\u{2ff}'
        | '\u{370}'..='\u{37d}' | '\u{37f}'..='\u{1fff}'
        | '\u{200c}'..='\u{200d}' | '\u{2070}'..='\u{218f}'
        | '\u{2c00}'..='\u{2fef}' | '\u{3001}'..='\u{d7ff}'
        | '\u{f900}'..='\u{fdcf}' | '\u{fdf0}'..='\u{fffd}'
        | '\u{10000}'..='\u{effff}')
}

/// XML 1.0 `NameChar`.
pub(crate) fn is_name_char(c: char) -> bool {
    is_name_start(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{b7}'
            | '\u{300}'..='\u{36f}' | '\u{203f}'..='\u{2040}')
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// The resolver for user-defined entity references.
pub(crate) type EntityFn = Box<dyn FnMut(&str) -> Option<String>>;

#[derive(Debug)]
enum TextEnd {
    Markup(Location),
    Eof,
}

pub(crate) struct XmlTokenizer<S: ByteSource> {
    input: CodePoints<S>,
    entity: Option<EntityFn>,
    reports: VecDeque<(Location, Error)>,
    first_token: bool,
}

impl<S: ByteSource> XmlTokenizer<S> {
    pub(crate) fn new(input: CodePoints<S>, entity: Option<EntityFn>) -> Self {
        XmlTokenizer {
            input,
            entity,
            reports: VecDeque::new(),
            first_token: true,
        }
    }

    /// Drain the next queued error report, oldest first. Reports produced
    /// while tokenizing a token are queued before that token is returned.
    pub(crate) fn take_report(&mut self) -> Option<(Location, Error)> {
        if let Some(report) = self.input.take_report() {
            return Some(report);
        }
        self.reports.pop_front()
    }

    fn report(&mut self, location: Location, error: Error) {
        self.reports.push_back((location, error));
    }

    fn report_bad_token(
        &mut self,
        location: Location,
        token: impl Into<String>,
        place: &str,
        suggestion: impl Into<String>,
    ) {
        self.report(
            location,
            Error::BadToken {
                token: token.into(),
                place: place.into(),
                suggestion: suggestion.into(),
            },
        );
    }

    pub(crate) fn next_token(&mut self) -> Result<Option<(Location, XmlToken)>, S::Error> {
        let first = std::mem::take(&mut self.first_token);

        let mut text = String::new();
        let mut text_start = Location::START;
        let ended = loop {
            match self.input.read()? {
                None => break TextEnd::Eof,
                Some((location, '<')) => {
                    if text.is_empty() {
                        break TextEnd::Markup(location);
                    }
                    self.input.unread((location, '<'));
                    return Ok(Some((text_start, XmlToken::Chars(text))));
                }
                Some((location, '&')) => {
                    if text.is_empty() {
                        text_start = location;
                    }
                    self.character_reference(location, "text", &mut text)?;
                }
                Some((location, ']')) => {
                    if text.is_empty() {
                        text_start = location;
                    }
                    text.push(']');
                    if self.input.try_read("]>", false)? {
                        self.report_bad_token(
                            location,
                            "]]>",
                            "text",
                            "replace with ']]&gt;'",
                        );
                        text.push_str("]>");
                    }
                }
                Some((location, c)) => {
                    if text.is_empty() {
                        text_start = location;
                    }
                    text.push(c);
                }
            }
        };

        match ended {
            TextEnd::Eof => {
                if text.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some((text_start, XmlToken::Chars(text))))
                }
            }
            TextEnd::Markup(location) => self.markup(location, first),
        }
    }

    /// `<` has been consumed.
    fn markup(
        &mut self,
        location: Location,
        first: bool,
    ) -> Result<Option<(Location, XmlToken)>, S::Error> {
        if self.input.try_read("!--", false)? {
            return Ok(Some((location, self.comment(location)?)));
        }
        if self.input.try_read("![CDATA[", false)? {
            return Ok(Some((location, self.cdata(location)?)));
        }
        if self.input.try_read("!DOCTYPE", false)? {
            return Ok(Some((location, self.doctype(location)?)));
        }
        if self.input.try_read("!", false)? {
            // some other declaration subset; skip it
            self.report_bad_token(location, "<!", "document", "remove this declaration");
            self.skip_past('>')?;
            return self.next_token();
        }
        if self.input.try_read("?", false)? {
            return self.pi(location, first);
        }
        if self.input.try_read("/", false)? {
            return Ok(Some((location, self.end_tag(location)?)));
        }
        match self.input.read()? {
            Some((name_location, c)) if is_name_start(c) => {
                self.input.unread((name_location, c));
                Ok(Some((location, self.start_tag(location)?)))
            }
            other => {
                // a stray '<' is character data
                if let Some(item) = other {
                    self.input.unread(item);
                }
                self.report_bad_token(location, "<", "text", "replace with '&lt;'");
                let mut text = String::from("<");
                let start = location;
                loop {
                    match self.input.read()? {
                        Some((l, '<')) => {
                            self.input.unread((l, '<'));
                            break;
                        }
                        Some((_, c)) => text.push(c),
                        None => break,
                    }
                }
                Ok(Some((start, XmlToken::Chars(text))))
            }
        }
    }

    fn read_name(&mut self) -> Result<Option<String>, S::Error> {
        let mut name = String::new();
        match self.input.read()? {
            Some((_, c)) if is_name_start(c) => name.push(c),
            Some(item) => {
                self.input.unread(item);
                return Ok(None);
            }
            None => return Ok(None),
        }
        loop {
            match self.input.read()? {
                Some((_, c)) if is_name_char(c) => name.push(c),
                Some(item) => {
                    self.input.unread(item);
                    break;
                }
                None => break,
            }
        }
        Ok(Some(name))
    }

    fn skip_space(&mut self) -> Result<bool, S::Error> {
        let mut seen = false;
        loop {
            match self.input.read()? {
                Some((_, c)) if is_space(c) => seen = true,
                Some(item) => {
                    self.input.unread(item);
                    break;
                }
                None => break,
            }
        }
        Ok(seen)
    }

    fn skip_past(&mut self, end: char) -> Result<(), S::Error> {
        loop {
            match self.input.read()? {
                Some((_, c)) if c == end => break,
                Some(_) => (),
                None => break,
            }
        }
        Ok(())
    }

    fn start_tag(&mut self, location: Location) -> Result<XmlToken, S::Error> {
        let name = self.read_name()?.unwrap_or_default();
        let mut attributes = Vec::new();
        let mut self_closing = false;
        loop {
            let had_space = self.skip_space()?;
            match self.input.read()? {
                Some((_, '>')) => break,
                Some((slash_location, '/')) => {
                    if self.input.try_read(">", false)? {
                        self_closing = true;
                        break;
                    }
                    self.report_bad_token(slash_location, "/", "tag", "expected '/>'");
                }
                Some((attr_location, c)) if is_name_start(c) => {
                    self.input.unread((attr_location, c));
                    if !had_space {
                        self.report_bad_token(
                            attr_location,
                            c,
                            "tag",
                            "expected whitespace before attribute",
                        );
                    }
                    let attr_name = self.read_name()?.unwrap_or_default();
                    self.skip_space()?;
                    let value = if self.input.try_read("=", false)? {
                        self.skip_space()?;
                        self.attribute_value(attr_location)?
                    } else {
                        self.report_bad_token(
                            attr_location,
                            attr_name.clone(),
                            "tag",
                            "attribute has no value",
                        );
                        String::new()
                    };
                    attributes.push((attr_name, value));
                }
                Some((bad_location, c)) => {
                    self.report_bad_token(
                        bad_location,
                        c,
                        "tag",
                        "not allowed here",
                    );
                }
                None => {
                    self.report(location, Error::UnexpectedEoi { place: "tag".into() });
                    break;
                }
            }
        }
        Ok(XmlToken::StartTag {
            name,
            attributes,
            self_closing,
        })
    }

    fn attribute_value(&mut self, location: Location) -> Result<String, S::Error> {
        let quote = match self.input.read()? {
            Some((_, q @ ('"' | '\''))) => Some(q),
            Some(item) => {
                self.input.unread(item);
                self.report_bad_token(location, "=", "attribute", "value must be quoted");
                None
            }
            None => {
                self.report(
                    location,
                    Error::UnexpectedEoi {
                        place: "attribute".into(),
                    },
                );
                return Ok(String::new());
            }
        };
        let mut value = String::new();
        loop {
            match self.input.read()? {
                Some((_, c)) if Some(c) == quote => break,
                Some((item_location, c)) if quote.is_none() && (is_space(c) || c == '>') => {
                    self.input.unread((item_location, c));
                    break;
                }
                Some((amp_location, '&')) => {
                    self.character_reference(amp_location, "attribute", &mut value)?;
                }
                Some((lt_location, '<')) => {
                    self.report_bad_token(lt_location, "<", "attribute", "replace with '&lt;'");
                    value.push('<');
                }
                // attribute-value normalization
                Some((_, c)) if is_space(c) => value.push(' '),
                Some((_, c)) => value.push(c),
                None => {
                    self.report(
                        location,
                        Error::UnexpectedEoi {
                            place: "attribute".into(),
                        },
                    );
                    break;
                }
            }
        }
        Ok(value)
    }

    fn end_tag(&mut self, location: Location) -> Result<XmlToken, S::Error> {
        let name = self.read_name()?.unwrap_or_default();
        self.skip_space()?;
        match self.input.read()? {
            Some((_, '>')) => (),
            Some((bad_location, c)) => {
                self.report_bad_token(
                    bad_location,
                    c,
                    "end tag",
                    "expected '>'",
                );
                self.skip_past('>')?;
            }
            None => self.report(
                location,
                Error::UnexpectedEoi {
                    place: "end tag".into(),
                },
            ),
        }
        Ok(XmlToken::EndTag { name })
    }

    fn comment(&mut self, location: Location) -> Result<XmlToken, S::Error> {
        let mut body = String::new();
        loop {
            match self.input.read()? {
                Some((dash_location, '-')) => {
                    if self.input.try_read("->", false)? {
                        break;
                    }
                    if self.input.try_read("-", false)? {
                        // "--" is not allowed inside comments
                        self.report_bad_token(dash_location, "--", "comment", "split the comment");
                        body.push_str("--");
                        // '>' directly after would have ended a well-formed
                        // comment; keep scanning
                        continue;
                    }
                    body.push('-');
                }
                Some((_, c)) => body.push(c),
                None => {
                    self.report(
                        location,
                        Error::UnexpectedEoi {
                            place: "comment".into(),
                        },
                    );
                    break;
                }
            }
        }
        Ok(XmlToken::Comment(body))
    }

    fn cdata(&mut self, location: Location) -> Result<XmlToken, S::Error> {
        let mut text = String::new();
        loop {
            match self.input.read()? {
                Some((_, ']')) => {
                    if self.input.try_read("]>", false)? {
                        break;
                    }
                    text.push(']');
                }
                Some((_, c)) => text.push(c),
                None => {
                    self.report(
                        location,
                        Error::UnexpectedEoi {
                            place: "cdata".into(),
                        },
                    );
                    break;
                }
            }
        }
        Ok(XmlToken::Chars(text))
    }

    fn pi(
        &mut self,
        location: Location,
        first: bool,
    ) -> Result<Option<(Location, XmlToken)>, S::Error> {
        let target = match self.read_name()? {
            Some(name) => name,
            None => {
                self.report_bad_token(location, "<?", "processing instruction", "expected a name");
                self.skip_past('>')?;
                return self.next_token();
            }
        };
        self.skip_space()?;
        let mut body = String::new();
        loop {
            match self.input.read()? {
                Some((_, '?')) => {
                    if self.input.try_read(">", false)? {
                        break;
                    }
                    body.push('?');
                }
                Some((_, c)) => body.push(c),
                None => {
                    self.report(
                        location,
                        Error::UnexpectedEoi {
                            place: "processing instruction".into(),
                        },
                    );
                    break;
                }
            }
        }
        if target.eq_ignore_ascii_case("xml") {
            if first {
                return Ok(Some((location, self.xml_declaration(location, &body))));
            }
            self.report_bad_token(
                location,
                "<?xml",
                "document",
                "an XML declaration must come first",
            );
            return self.next_token();
        }
        Ok(Some((location, XmlToken::Pi { target, body })))
    }

    fn xml_declaration(&mut self, location: Location, body: &str) -> XmlToken {
        let mut version = None;
        let mut encoding = None;
        let mut standalone = None;
        for (name, value) in pseudo_attributes(body) {
            match name.as_str() {
                "version" => version = Some(value),
                "encoding" => encoding = Some(value),
                "standalone" => match value.as_str() {
                    "yes" => standalone = Some(true),
                    "no" => standalone = Some(false),
                    _ => self.report_bad_token(
                        location,
                        value.clone(),
                        "xml declaration",
                        "standalone must be 'yes' or 'no'",
                    ),
                },
                _ => self.report_bad_token(
                    location,
                    name.clone(),
                    "xml declaration",
                    "unknown declaration attribute",
                ),
            }
        }
        let version = version.unwrap_or_else(|| {
            self.report_bad_token(
                location,
                "<?xml",
                "xml declaration",
                "missing version",
            );
            "1.0".to_owned()
        });
        XmlToken::XmlDeclaration(XmlDeclaration {
            version,
            encoding,
            standalone,
        })
    }

    fn doctype(&mut self, location: Location) -> Result<XmlToken, S::Error> {
        let mut raw = String::new();
        let mut depth = 0usize;
        let mut quote: Option<char> = None;
        loop {
            match self.input.read()? {
                Some((_, c)) => {
                    match (quote, c) {
                        (Some(q), _) if c == q => quote = None,
                        (Some(_), _) => (),
                        (None, '"' | '\'') => quote = Some(c),
                        (None, '[') => depth += 1,
                        (None, ']') => depth = depth.saturating_sub(1),
                        (None, '>') if depth == 0 => break,
                        _ => (),
                    }
                    raw.push(c);
                }
                None => {
                    self.report(
                        location,
                        Error::UnexpectedEoi {
                            place: "doctype".into(),
                        },
                    );
                    break;
                }
            }
        }
        let (name, public_id, system_id) = parse_doctype(&raw);
        Ok(XmlToken::Doctype {
            name,
            public_id,
            system_id,
            raw,
        })
    }

    /// `&` has been consumed; decode one reference into `out`, or re-emit
    /// the literal text on failure.
    fn character_reference(
        &mut self,
        location: Location,
        place: &str,
        out: &mut String,
    ) -> Result<(), S::Error> {
        if self.input.try_read("#x", false)? || self.input.try_read("#X", false)? {
            return self.numeric_reference(location, place, 16, out);
        }
        if self.input.try_read("#", false)? {
            return self.numeric_reference(location, place, 10, out);
        }
        let name = match self.read_name()? {
            Some(name) => name,
            None => {
                self.report_bad_token(location, "&", place, "replace with '&amp;'");
                out.push('&');
                return Ok(());
            }
        };
        if !self.input.try_read(";", false)? {
            self.report_bad_token(location, "&", place, "replace with '&amp;'");
            out.push('&');
            out.push_str(&name);
            return Ok(());
        }
        match name.as_str() {
            "lt" => out.push('<'),
            "gt" => out.push('>'),
            "amp" => out.push('&'),
            "apos" => out.push('\''),
            "quot" => out.push('"'),
            _ => match self.entity.as_mut().and_then(|f| f(&name)) {
                Some(replacement) => out.push_str(&replacement),
                None => {
                    self.report_bad_token(
                        location,
                        format!("&{name};"),
                        place,
                        format!("undefined entity; replace with '&amp;{name};'"),
                    );
                    out.push('&');
                    out.push_str(&name);
                    out.push(';');
                }
            },
        }
        Ok(())
    }

    fn numeric_reference(
        &mut self,
        location: Location,
        place: &str,
        radix: u32,
        out: &mut String,
    ) -> Result<(), S::Error> {
        let mut digits = String::new();
        loop {
            match self.input.read()? {
                Some((_, c)) if c.is_digit(radix) => digits.push(c),
                Some((_, ';')) => break,
                Some(item) => {
                    self.input.unread(item);
                    self.report_bad_token(location, "&#", place, "replace with '&amp;#'");
                    out.push_str(if radix == 16 { "&#x" } else { "&#" });
                    out.push_str(&digits);
                    return Ok(());
                }
                None => {
                    self.report(
                        location,
                        Error::UnexpectedEoi {
                            place: place.into(),
                        },
                    );
                    return Ok(());
                }
            }
        }
        let c = u32::from_str_radix(&digits, radix)
            .ok()
            .and_then(char::from_u32);
        match c {
            Some(c) => out.push(c),
            None => {
                self.report_bad_token(
                    location,
                    format!("&#{digits};"),
                    place,
                    "not a Unicode scalar value",
                );
                out.push('\u{fffd}');
            }
        }
        Ok(())
    }
}

/// Parse `version="..."`-style pseudo-attributes out of a declaration body.
fn pseudo_attributes(body: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut rest = body;
    loop {
        rest = rest.trim_start();
        let name_end = match rest.find(|c: char| c == '=' || is_space(c)) {
            Some(i) => i,
            None => break,
        };
        if name_end == 0 {
            break;
        }
        let name = &rest[..name_end];
        rest = rest[name_end..].trim_start();
        rest = match rest.strip_prefix('=') {
            Some(r) => r.trim_start(),
            None => break,
        };
        let quote = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => break,
        };
        rest = &rest[1..];
        let end = match rest.find(quote) {
            Some(i) => i,
            None => break,
        };
        out.push((name.to_owned(), rest[..end].to_owned()));
        rest = &rest[end + 1..];
    }
    out
}

/// Extract the root name and PUBLIC/SYSTEM identifiers from raw doctype
/// text.
fn parse_doctype(raw: &str) -> (Option<String>, Option<String>, Option<String>) {
    let mut rest = raw.trim_start();
    let name_end = rest
        .find(|c: char| !is_name_char(c))
        .unwrap_or(rest.len());
    let name = (name_end > 0).then(|| rest[..name_end].to_owned());
    rest = rest[name_end..].trim_start();

    let quoted = |s: &str| -> Option<(String, usize)> {
        let quote = s.chars().next().filter(|q| matches!(q, '"' | '\''))?;
        let inner = &s[1..];
        let end = inner.find(quote)?;
        Some((inner[..end].to_owned(), end + 2))
    };

    let mut public_id = None;
    let mut system_id = None;
    if let Some(after) = rest.strip_prefix("PUBLIC") {
        let after = after.trim_start();
        if let Some((public, used)) = quoted(after) {
            public_id = Some(public);
            let after = after[used..].trim_start();
            if let Some((system, _)) = quoted(after) {
                system_id = Some(system);
            }
        }
    } else if let Some(after) = rest.strip_prefix("SYSTEM") {
        if let Some((system, _)) = quoted(after.trim_start()) {
            system_id = Some(system);
        }
    }
    (name, public_id, system_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{decoder_for, Dialect};
    use crate::source::SliceSource;

    fn tokens(input: &str) -> (Vec<XmlToken>, Vec<Error>) {
        let decoder = decoder_for(SliceSource::new(input.as_bytes()), None, Dialect::Xml)
            .expect("infallible");
        let mut tokenizer = XmlTokenizer::new(CodePoints::new(decoder), None);
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        while let Some((_, token)) = tokenizer.next_token().unwrap() {
            while let Some((_, e)) = tokenizer.take_report() {
                errors.push(e);
            }
            tokens.push(token);
        }
        while let Some((_, e)) = tokenizer.take_report() {
            errors.push(e);
        }
        (tokens, errors)
    }

    #[test]
    fn minimal_document() {
        let (tokens, errors) = tokens("<?xml version=\"1.0\"?><r>hi</r>");
        assert!(errors.is_empty());
        assert_eq!(
            tokens,
            vec![
                XmlToken::XmlDeclaration(XmlDeclaration {
                    version: "1.0".into(),
                    encoding: None,
                    standalone: None,
                }),
                XmlToken::StartTag {
                    name: "r".into(),
                    attributes: vec![],
                    self_closing: false,
                },
                XmlToken::Chars("hi".into()),
                XmlToken::EndTag { name: "r".into() },
            ]
        );
    }

    #[test]
    fn bare_ampersand_recovers_as_text() {
        let (tokens, errors) = tokens("<r>a & b</r>");
        assert_eq!(
            errors,
            vec![Error::BadToken {
                token: "&".into(),
                place: "text".into(),
                suggestion: "replace with '&amp;'".into(),
            }]
        );
        assert_eq!(tokens[1], XmlToken::Chars("a & b".into()));
    }

    #[test]
    fn entities_and_numeric_references() {
        let (tokens, errors) = tokens("<r>&lt;&#65;&#x42;</r>");
        assert!(errors.is_empty());
        assert_eq!(tokens[1], XmlToken::Chars("<AB".into()));
    }

    #[test]
    fn cdata_is_character_data() {
        let (tokens, errors) = tokens("<r><![CDATA[a < b & c]]></r>");
        assert!(errors.is_empty());
        assert_eq!(tokens[1], XmlToken::Chars("a < b & c".into()));
    }

    #[test]
    fn attributes_are_decoded_and_normalized() {
        let (tokens, _) = tokens("<r a=\"x&amp;y\" b='1\t2'/>");
        assert_eq!(
            tokens[0],
            XmlToken::StartTag {
                name: "r".into(),
                attributes: vec![
                    ("a".into(), "x&y".into()),
                    ("b".into(), "1 2".into()),
                ],
                self_closing: true,
            }
        );
    }

    #[test]
    fn doctype_ids() {
        let (tokens, _) =
            tokens("<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0//EN\" \"xhtml1.dtd\"><r/>");
        match &tokens[0] {
            XmlToken::Doctype {
                name,
                public_id,
                system_id,
                ..
            } => {
                assert_eq!(name.as_deref(), Some("html"));
                assert_eq!(public_id.as_deref(), Some("-//W3C//DTD XHTML 1.0//EN"));
                assert_eq!(system_id.as_deref(), Some("xhtml1.dtd"));
            }
            other => panic!("expected a doctype, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_comment_reports_eoi() {
        let (tokens, errors) = tokens("<!-- never closed");
        assert_eq!(tokens, vec![XmlToken::Comment(" never closed".into())]);
        assert_eq!(
            errors,
            vec![Error::UnexpectedEoi {
                place: "comment".into()
            }]
        );
    }
}
