//! The HTML tokenizer: the WHATWG state machine over located code points.
//!
//! Every parse error the specification annotates is reported (as
//! [`Error::BadToken`] naming the construct) and tokenization always
//! continues. The tree constructor drives the handful of state switches
//! tokenization alone cannot decide (RCDATA/RAWTEXT/script data/PLAINTEXT
//! after certain start tags, and whether `<![CDATA[` is foreign content).

use std::collections::VecDeque;

use log::trace;

use crate::encoding::CodePoints;
use crate::entities::try_read_character_reference;
use crate::source::ByteSource;
use crate::{Error, Location};

/// A doctype token under construction or complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DoctypeToken {
    pub(crate) name: Option<String>,
    pub(crate) public_id: Option<String>,
    pub(crate) system_id: Option<String>,
    pub(crate) force_quirks: bool,
}

/// A start or end tag token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TagToken {
    pub(crate) name: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) self_closing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HtmlToken {
    Doctype(DoctypeToken),
    StartTag(TagToken),
    EndTag(TagToken),
    /// A run of character data. Runs are maximal between other tokens.
    Chars(String),
    Comment(String),
}

/// Tokenizer states, named as in the WHATWG specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub(crate) enum State {
    Data,
    RcData,
    RawText,
    ScriptData,
    PlainText,
    TagOpen,
    EndTagOpen,
    TagName,
    RcDataLessThanSign,
    RcDataEndTagOpen,
    RcDataEndTagName,
    RawTextLessThanSign,
    RawTextEndTagOpen,
    RawTextEndTagName,
    ScriptDataLessThanSign,
    ScriptDataEndTagOpen,
    ScriptDataEndTagName,
    ScriptDataEscapeStart,
    ScriptDataEscapeStartDash,
    ScriptDataEscaped,
    ScriptDataEscapedDash,
    ScriptDataEscapedDashDash,
    ScriptDataEscapedLessThanSign,
    ScriptDataEscapedEndTagOpen,
    ScriptDataEscapedEndTagName,
    ScriptDataDoubleEscapeStart,
    ScriptDataDoubleEscaped,
    ScriptDataDoubleEscapedDash,
    ScriptDataDoubleEscapedDashDash,
    ScriptDataDoubleEscapedLessThanSign,
    ScriptDataDoubleEscapeEnd,
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValueDoubleQuoted,
    AttributeValueSingleQuoted,
    AttributeValueUnquoted,
    AfterAttributeValueQuoted,
    SelfClosingStartTag,
    BogusComment,
    MarkupDeclarationOpen,
    CommentStart,
    CommentStartDash,
    Comment,
    CommentLessThanSign,
    CommentLessThanSignBang,
    CommentLessThanSignBangDash,
    CommentLessThanSignBangDashDash,
    CommentEndDash,
    CommentEnd,
    CommentEndBang,
    Doctype,
    BeforeDoctypeName,
    DoctypeName,
    AfterDoctypeName,
    AfterDoctypePublicKeyword,
    BeforeDoctypePublicIdentifier,
    DoctypePublicIdentifierDoubleQuoted,
    DoctypePublicIdentifierSingleQuoted,
    AfterDoctypePublicIdentifier,
    BetweenDoctypePublicAndSystemIdentifiers,
    AfterDoctypeSystemKeyword,
    BeforeDoctypeSystemIdentifier,
    DoctypeSystemIdentifierDoubleQuoted,
    DoctypeSystemIdentifierSingleQuoted,
    AfterDoctypeSystemIdentifier,
    BogusDoctype,
    CdataSection,
    CdataSectionBracket,
    CdataSectionEnd,
    CharacterReference,
    NamedCharacterReference,
    AmbiguousAmpersand,
    NumericCharacterReference,
    HexadecimalCharacterReferenceStart,
    DecimalCharacterReferenceStart,
    HexadecimalCharacterReference,
    DecimalCharacterReference,
    NumericCharacterReferenceEnd,
}

#[derive(Debug)]
enum CurrentToken {
    None,
    StartTag(TagToken),
    EndTag(TagToken),
    Comment(String),
    Doctype(DoctypeToken),
}

pub(crate) struct HtmlTokenizer<S: ByteSource> {
    input: CodePoints<S>,
    state: State,
    return_state: Option<State>,
    temp: String,
    character_reference_code: u32,
    current: CurrentToken,
    current_attribute: Option<(String, String)>,
    last_start_tag: String,
    token_start: Location,
    /// Location of the `&` that opened the character reference in flight.
    temp_location: Location,
    text: String,
    text_start: Location,
    tokens: VecDeque<(Location, HtmlToken)>,
    reports: VecDeque<(Location, Error)>,
    eof: bool,
    /// Whether the adjusted current node is outside the HTML namespace;
    /// maintained by the tree constructor, gates `<![CDATA[`.
    foreign: bool,
}

impl<S: ByteSource> HtmlTokenizer<S> {
    pub(crate) fn new(input: CodePoints<S>) -> Self {
        HtmlTokenizer {
            input,
            state: State::Data,
            return_state: None,
            temp: String::new(),
            character_reference_code: 0,
            current: CurrentToken::None,
            current_attribute: None,
            last_start_tag: String::new(),
            token_start: Location::START,
            temp_location: Location::START,
            text: String::new(),
            text_start: Location::START,
            tokens: VecDeque::new(),
            reports: VecDeque::new(),
            eof: false,
            foreign: false,
        }
    }

    /// Override the state. The tree constructor calls this after start tags
    /// of raw-text-ish elements, and fragment parsing uses it for its
    /// context element.
    pub(crate) fn set_state(&mut self, state: State) {
        trace!("tokenizer state override: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    pub(crate) fn set_last_start_tag(&mut self, name: &str) {
        self.last_start_tag = name.to_owned();
    }

    /// Maintained by the tree constructor: whether the adjusted current
    /// node is outside the HTML namespace.
    pub(crate) fn set_foreign(&mut self, foreign: bool) {
        self.foreign = foreign;
    }

    pub(crate) fn take_report(&mut self) -> Option<(Location, Error)> {
        if let Some(report) = self.input.take_report() {
            return Some(report);
        }
        self.reports.pop_front()
    }

    pub(crate) fn next_token(&mut self) -> Result<Option<(Location, HtmlToken)>, S::Error> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(Some(token));
            }
            if self.eof {
                return Ok(None);
            }
            self.step()?;
        }
    }

    // ------------------------------------------------------------------
    // plumbing

    fn read(&mut self) -> Result<Option<(Location, char)>, S::Error> {
        self.input.read()
    }

    fn switch_to(&mut self, state: State) {
        self.state = state;
    }

    fn reconsume_in(&mut self, item: Option<(Location, char)>, state: State) {
        if let Some(item) = item {
            self.input.unread(item);
        }
        self.state = state;
    }

    fn enter_state(&mut self, state: State) {
        debug_assert!(self.return_state.is_none());
        self.return_state = Some(self.state);
        self.state = state;
    }

    fn pop_return_state(&mut self) -> State {
        self.return_state.take().unwrap_or(State::Data)
    }

    fn bad(
        &mut self,
        location: Location,
        token: impl Into<String>,
        place: &str,
        suggestion: impl Into<String>,
    ) {
        self.reports.push_back((
            location,
            Error::BadToken {
                token: token.into(),
                place: place.into(),
                suggestion: suggestion.into(),
            },
        ));
    }

    fn eoi(&mut self, place: &str) {
        let location = self.input.location();
        self.reports
            .push_back((location, Error::UnexpectedEoi { place: place.into() }));
    }

    fn push_char(&mut self, location: Location, c: char) {
        if self.text.is_empty() {
            self.text_start = location;
        }
        self.text.push(c);
    }

    fn push_str(&mut self, location: Location, s: &str) {
        if self.text.is_empty() && !s.is_empty() {
            self.text_start = location;
        }
        self.text.push_str(s);
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.tokens
                .push_back((self.text_start, HtmlToken::Chars(text)));
        }
    }

    fn queue_token(&mut self, token: HtmlToken) {
        self.flush_text();
        self.tokens.push_back((self.token_start, token));
    }

    fn end_of_input(&mut self) {
        self.flush_text();
        self.eof = true;
    }

    // ------------------------------------------------------------------
    // current-token builders

    fn init_start_tag(&mut self) {
        self.finish_attribute();
        self.current = CurrentToken::StartTag(TagToken::default());
    }

    fn init_end_tag(&mut self) {
        self.finish_attribute();
        self.current = CurrentToken::EndTag(TagToken::default());
    }

    fn init_comment(&mut self, text: &str) {
        self.current = CurrentToken::Comment(text.to_owned());
    }

    fn init_doctype(&mut self) {
        self.current = CurrentToken::Doctype(DoctypeToken::default());
    }

    fn push_tag_name(&mut self, c: char) {
        if let CurrentToken::StartTag(tag) | CurrentToken::EndTag(tag) = &mut self.current {
            tag.name.push(c);
        }
    }

    fn push_comment(&mut self, c: char) {
        if let CurrentToken::Comment(body) = &mut self.current {
            body.push(c);
        }
    }

    fn push_comment_str(&mut self, s: &str) {
        if let CurrentToken::Comment(body) = &mut self.current {
            body.push_str(s);
        }
    }

    fn doctype_mut(&mut self) -> &mut DoctypeToken {
        if !matches!(self.current, CurrentToken::Doctype(_)) {
            self.current = CurrentToken::Doctype(DoctypeToken::default());
        }
        match &mut self.current {
            CurrentToken::Doctype(doctype) => doctype,
            _ => unreachable!(),
        }
    }

    fn init_attribute(&mut self) {
        self.finish_attribute();
        self.current_attribute = Some((String::new(), String::new()));
    }

    fn finish_attribute(&mut self) {
        let (name, value) = match self.current_attribute.take() {
            Some(attribute) => attribute,
            None => return,
        };
        if let CurrentToken::StartTag(tag) | CurrentToken::EndTag(tag) = &mut self.current {
            if tag.attributes.iter().any(|(n, _)| *n == name) {
                self.reports.push_back((
                    self.token_start,
                    Error::BadToken {
                        token: name,
                        place: "tag".into(),
                        suggestion: "remove the duplicate attribute".into(),
                    },
                ));
            } else {
                tag.attributes.push((name, value));
            }
        }
    }

    fn push_attribute_name(&mut self, c: char) {
        if let Some((name, _)) = &mut self.current_attribute {
            name.push(c);
        }
    }

    fn push_attribute_value(&mut self, c: char) {
        if let Some((_, value)) = &mut self.current_attribute {
            value.push(c);
        }
    }

    fn push_attribute_value_str(&mut self, s: &str) {
        if let Some((_, value)) = &mut self.current_attribute {
            value.push_str(s);
        }
    }

    fn emit_current_tag(&mut self) {
        self.finish_attribute();
        match std::mem::replace(&mut self.current, CurrentToken::None) {
            CurrentToken::StartTag(tag) => {
                self.last_start_tag = tag.name.clone();
                self.queue_token(HtmlToken::StartTag(tag));
            }
            CurrentToken::EndTag(tag) => {
                if !tag.attributes.is_empty() {
                    self.bad(
                        self.token_start,
                        format!("</{}", tag.name),
                        "end tag",
                        "end tags cannot have attributes",
                    );
                }
                if tag.self_closing {
                    self.bad(
                        self.token_start,
                        format!("</{}/", tag.name),
                        "end tag",
                        "end tags cannot be self-closing",
                    );
                }
                self.queue_token(HtmlToken::EndTag(TagToken {
                    name: tag.name,
                    attributes: Vec::new(),
                    self_closing: false,
                }));
            }
            other => {
                debug_assert!(false, "no tag under construction: {other:?}");
            }
        }
    }

    fn emit_current_comment(&mut self) {
        if let CurrentToken::Comment(body) = std::mem::replace(&mut self.current, CurrentToken::None)
        {
            self.queue_token(HtmlToken::Comment(body));
        }
    }

    fn emit_current_doctype(&mut self) {
        if let CurrentToken::Doctype(doctype) =
            std::mem::replace(&mut self.current, CurrentToken::None)
        {
            self.queue_token(HtmlToken::Doctype(doctype));
        }
    }

    fn set_self_closing(&mut self) {
        if let CurrentToken::StartTag(tag) | CurrentToken::EndTag(tag) = &mut self.current {
            tag.self_closing = true;
        }
    }

    fn current_is_appropriate_end_tag(&self) -> bool {
        match &self.current {
            CurrentToken::EndTag(tag) => {
                !self.last_start_tag.is_empty() && tag.name == self.last_start_tag
            }
            _ => false,
        }
    }

    fn is_consumed_as_part_of_an_attribute(&self) -> bool {
        matches!(
            self.return_state,
            Some(
                State::AttributeValueDoubleQuoted
                    | State::AttributeValueSingleQuoted
                    | State::AttributeValueUnquoted
            )
        )
    }

    fn flush_code_points_consumed_as_character_reference(&mut self, location: Location) {
        if self.is_consumed_as_part_of_an_attribute() {
            let temp = std::mem::take(&mut self.temp);
            self.push_attribute_value_str(&temp);
        } else {
            let temp = std::mem::take(&mut self.temp);
            self.push_str(location, &temp);
        }
    }

    // ------------------------------------------------------------------
    // the state machine

    #[allow(clippy::too_many_lines)]
    fn step(&mut self) -> Result<(), S::Error> {
        match self.state {
            State::Data => match self.read()? {
                Some((location, '&')) => {
                    self.temp_location = location;
                    self.enter_state(State::CharacterReference);
                }
                Some((location, '<')) => {
                    self.token_start = location;
                    self.switch_to(State::TagOpen);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "text", "null characters are not allowed");
                    self.push_char(location, '\0');
                }
                Some((location, c)) => self.push_char(location, c),
                None => self.end_of_input(),
            },
            State::RcData => match self.read()? {
                Some((location, '&')) => {
                    self.temp_location = location;
                    self.enter_state(State::CharacterReference);
                }
                Some((location, '<')) => {
                    self.token_start = location;
                    self.switch_to(State::RcDataLessThanSign);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "text", "null characters are not allowed");
                    self.push_char(location, '\u{fffd}');
                }
                Some((location, c)) => self.push_char(location, c),
                None => self.end_of_input(),
            },
            State::RawText => match self.read()? {
                Some((location, '<')) => {
                    self.token_start = location;
                    self.switch_to(State::RawTextLessThanSign);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "text", "null characters are not allowed");
                    self.push_char(location, '\u{fffd}');
                }
                Some((location, c)) => self.push_char(location, c),
                None => self.end_of_input(),
            },
            State::ScriptData => match self.read()? {
                Some((location, '<')) => {
                    self.token_start = location;
                    self.switch_to(State::ScriptDataLessThanSign);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "script", "null characters are not allowed");
                    self.push_char(location, '\u{fffd}');
                }
                Some((location, c)) => self.push_char(location, c),
                None => self.end_of_input(),
            },
            State::PlainText => match self.read()? {
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "text", "null characters are not allowed");
                    self.push_char(location, '\u{fffd}');
                }
                Some((location, c)) => self.push_char(location, c),
                None => self.end_of_input(),
            },
            State::TagOpen => match self.read()? {
                Some((_, '!')) => self.switch_to(State::MarkupDeclarationOpen),
                Some((_, '/')) => self.switch_to(State::EndTagOpen),
                Some((location, c)) if c.is_ascii_alphabetic() => {
                    self.init_start_tag();
                    self.reconsume_in(Some((location, c)), State::TagName);
                }
                Some((location, '?')) => {
                    self.bad(location, "<?", "tag", "HTML has no processing instructions");
                    self.init_comment("");
                    self.reconsume_in(Some((location, '?')), State::BogusComment);
                }
                None => {
                    self.eoi("tag");
                    self.push_char(self.token_start, '<');
                    self.end_of_input();
                }
                Some((location, c)) => {
                    self.bad(location, c, "tag", "expected a tag name");
                    self.push_char(self.token_start, '<');
                    self.reconsume_in(Some((location, c)), State::Data);
                }
            },
            State::EndTagOpen => match self.read()? {
                Some((location, c)) if c.is_ascii_alphabetic() => {
                    self.init_end_tag();
                    self.reconsume_in(Some((location, c)), State::TagName);
                }
                Some((location, '>')) => {
                    self.bad(location, "</>", "end tag", "missing end tag name");
                    self.switch_to(State::Data);
                }
                None => {
                    self.eoi("end tag");
                    self.push_str(self.token_start, "</");
                    self.end_of_input();
                }
                Some((location, c)) => {
                    self.bad(location, c, "end tag", "expected a tag name");
                    self.init_comment("");
                    self.reconsume_in(Some((location, c)), State::BogusComment);
                }
            },
            State::TagName => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => {
                    self.switch_to(State::BeforeAttributeName);
                }
                Some((_, '/')) => self.switch_to(State::SelfClosingStartTag),
                Some((_, '>')) => {
                    self.emit_current_tag();
                    self.switch_to(State::Data);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "tag", "null characters are not allowed");
                    self.push_tag_name('\u{fffd}');
                }
                Some((_, c)) => self.push_tag_name(c.to_ascii_lowercase()),
                None => {
                    self.eoi("tag");
                    self.end_of_input();
                }
            },
            State::RcDataLessThanSign => match self.read()? {
                Some((_, '/')) => {
                    self.temp.clear();
                    self.switch_to(State::RcDataEndTagOpen);
                }
                other => {
                    self.push_char(self.token_start, '<');
                    self.reconsume_in(other, State::RcData);
                }
            },
            State::RcDataEndTagOpen => match self.read()? {
                Some((location, c)) if c.is_ascii_alphabetic() => {
                    self.init_end_tag();
                    self.reconsume_in(Some((location, c)), State::RcDataEndTagName);
                }
                other => {
                    self.push_str(self.token_start, "</");
                    self.reconsume_in(other, State::RcData);
                }
            },
            State::RcDataEndTagName => self.raw_end_tag_name(State::RcData)?,
            State::RawTextLessThanSign => match self.read()? {
                Some((_, '/')) => {
                    self.temp.clear();
                    self.switch_to(State::RawTextEndTagOpen);
                }
                other => {
                    self.push_char(self.token_start, '<');
                    self.reconsume_in(other, State::RawText);
                }
            },
            State::RawTextEndTagOpen => match self.read()? {
                Some((location, c)) if c.is_ascii_alphabetic() => {
                    self.init_end_tag();
                    self.reconsume_in(Some((location, c)), State::RawTextEndTagName);
                }
                other => {
                    self.push_str(self.token_start, "</");
                    self.reconsume_in(other, State::RawText);
                }
            },
            State::RawTextEndTagName => self.raw_end_tag_name(State::RawText)?,
            State::ScriptDataLessThanSign => match self.read()? {
                Some((_, '/')) => {
                    self.temp.clear();
                    self.switch_to(State::ScriptDataEndTagOpen);
                }
                Some((location, '!')) => {
                    self.switch_to(State::ScriptDataEscapeStart);
                    self.push_str(location, "<!");
                }
                other => {
                    self.push_char(self.token_start, '<');
                    self.reconsume_in(other, State::ScriptData);
                }
            },
            State::ScriptDataEndTagOpen => match self.read()? {
                Some((location, c)) if c.is_ascii_alphabetic() => {
                    self.init_end_tag();
                    self.reconsume_in(Some((location, c)), State::ScriptDataEndTagName);
                }
                other => {
                    self.push_str(self.token_start, "</");
                    self.reconsume_in(other, State::ScriptData);
                }
            },
            State::ScriptDataEndTagName => self.raw_end_tag_name(State::ScriptData)?,
            State::ScriptDataEscapeStart => match self.read()? {
                Some((location, '-')) => {
                    self.switch_to(State::ScriptDataEscapeStartDash);
                    self.push_char(location, '-');
                }
                other => self.reconsume_in(other, State::ScriptData),
            },
            State::ScriptDataEscapeStartDash => match self.read()? {
                Some((location, '-')) => {
                    self.switch_to(State::ScriptDataEscapedDashDash);
                    self.push_char(location, '-');
                }
                other => self.reconsume_in(other, State::ScriptData),
            },
            State::ScriptDataEscaped => match self.read()? {
                Some((location, '-')) => {
                    self.switch_to(State::ScriptDataEscapedDash);
                    self.push_char(location, '-');
                }
                Some((location, '<')) => {
                    self.token_start = location;
                    self.switch_to(State::ScriptDataEscapedLessThanSign);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "script", "null characters are not allowed");
                    self.push_char(location, '\u{fffd}');
                }
                Some((location, c)) => self.push_char(location, c),
                None => {
                    self.eoi("script");
                    self.end_of_input();
                }
            },
            State::ScriptDataEscapedDash => match self.read()? {
                Some((location, '-')) => {
                    self.switch_to(State::ScriptDataEscapedDashDash);
                    self.push_char(location, '-');
                }
                Some((location, '<')) => {
                    self.token_start = location;
                    self.switch_to(State::ScriptDataEscapedLessThanSign);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "script", "null characters are not allowed");
                    self.switch_to(State::ScriptDataEscaped);
                    self.push_char(location, '\u{fffd}');
                }
                Some((location, c)) => {
                    self.switch_to(State::ScriptDataEscaped);
                    self.push_char(location, c);
                }
                None => {
                    self.eoi("script");
                    self.end_of_input();
                }
            },
            State::ScriptDataEscapedDashDash => match self.read()? {
                Some((location, '-')) => self.push_char(location, '-'),
                Some((location, '<')) => {
                    self.token_start = location;
                    self.switch_to(State::ScriptDataEscapedLessThanSign);
                }
                Some((location, '>')) => {
                    self.switch_to(State::ScriptData);
                    self.push_char(location, '>');
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "script", "null characters are not allowed");
                    self.switch_to(State::ScriptDataEscaped);
                    self.push_char(location, '\u{fffd}');
                }
                Some((location, c)) => {
                    self.switch_to(State::ScriptDataEscaped);
                    self.push_char(location, c);
                }
                None => {
                    self.eoi("script");
                    self.end_of_input();
                }
            },
            State::ScriptDataEscapedLessThanSign => match self.read()? {
                Some((_, '/')) => {
                    self.temp.clear();
                    self.switch_to(State::ScriptDataEscapedEndTagOpen);
                }
                Some((location, c)) if c.is_ascii_alphabetic() => {
                    self.temp.clear();
                    self.push_char(self.token_start, '<');
                    self.reconsume_in(Some((location, c)), State::ScriptDataDoubleEscapeStart);
                }
                other => {
                    self.push_char(self.token_start, '<');
                    self.reconsume_in(other, State::ScriptDataEscaped);
                }
            },
            State::ScriptDataEscapedEndTagOpen => match self.read()? {
                Some((location, c)) if c.is_ascii_alphabetic() => {
                    self.init_end_tag();
                    self.reconsume_in(Some((location, c)), State::ScriptDataEscapedEndTagName);
                }
                other => {
                    self.push_str(self.token_start, "</");
                    self.reconsume_in(other, State::ScriptDataEscaped);
                }
            },
            State::ScriptDataEscapedEndTagName => self.raw_end_tag_name(State::ScriptDataEscaped)?,
            State::ScriptDataDoubleEscapeStart => match self.read()? {
                Some((location, c)) if is_html_whitespace(c) || c == '/' || c == '>' => {
                    if self.temp == "script" {
                        self.switch_to(State::ScriptDataDoubleEscaped);
                    } else {
                        self.switch_to(State::ScriptDataEscaped);
                    }
                    self.push_char(location, c);
                }
                Some((location, c)) if c.is_ascii_alphabetic() => {
                    self.temp.push(c.to_ascii_lowercase());
                    self.push_char(location, c);
                }
                other => self.reconsume_in(other, State::ScriptDataEscaped),
            },
            State::ScriptDataDoubleEscaped => match self.read()? {
                Some((location, '-')) => {
                    self.switch_to(State::ScriptDataDoubleEscapedDash);
                    self.push_char(location, '-');
                }
                Some((location, '<')) => {
                    self.switch_to(State::ScriptDataDoubleEscapedLessThanSign);
                    self.push_char(location, '<');
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "script", "null characters are not allowed");
                    self.push_char(location, '\u{fffd}');
                }
                Some((location, c)) => self.push_char(location, c),
                None => {
                    self.eoi("script");
                    self.end_of_input();
                }
            },
            State::ScriptDataDoubleEscapedDash => match self.read()? {
                Some((location, '-')) => {
                    self.switch_to(State::ScriptDataDoubleEscapedDashDash);
                    self.push_char(location, '-');
                }
                Some((location, '<')) => {
                    self.switch_to(State::ScriptDataDoubleEscapedLessThanSign);
                    self.push_char(location, '<');
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "script", "null characters are not allowed");
                    self.switch_to(State::ScriptDataDoubleEscaped);
                    self.push_char(location, '\u{fffd}');
                }
                Some((location, c)) => {
                    self.switch_to(State::ScriptDataDoubleEscaped);
                    self.push_char(location, c);
                }
                None => {
                    self.eoi("script");
                    self.end_of_input();
                }
            },
            State::ScriptDataDoubleEscapedDashDash => match self.read()? {
                Some((location, '-')) => self.push_char(location, '-'),
                Some((location, '<')) => {
                    self.switch_to(State::ScriptDataDoubleEscapedLessThanSign);
                    self.push_char(location, '<');
                }
                Some((location, '>')) => {
                    self.switch_to(State::ScriptData);
                    self.push_char(location, '>');
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "script", "null characters are not allowed");
                    self.switch_to(State::ScriptDataDoubleEscaped);
                    self.push_char(location, '\u{fffd}');
                }
                Some((location, c)) => {
                    self.switch_to(State::ScriptDataDoubleEscaped);
                    self.push_char(location, c);
                }
                None => {
                    self.eoi("script");
                    self.end_of_input();
                }
            },
            State::ScriptDataDoubleEscapedLessThanSign => match self.read()? {
                Some((location, '/')) => {
                    self.temp.clear();
                    self.switch_to(State::ScriptDataDoubleEscapeEnd);
                    self.push_char(location, '/');
                }
                other => self.reconsume_in(other, State::ScriptDataDoubleEscaped),
            },
            State::ScriptDataDoubleEscapeEnd => match self.read()? {
                Some((location, c)) if is_html_whitespace(c) || c == '/' || c == '>' => {
                    if self.temp == "script" {
                        self.switch_to(State::ScriptDataEscaped);
                    } else {
                        self.switch_to(State::ScriptDataDoubleEscaped);
                    }
                    self.push_char(location, c);
                }
                Some((location, c)) if c.is_ascii_alphabetic() => {
                    self.temp.push(c.to_ascii_lowercase());
                    self.push_char(location, c);
                }
                other => self.reconsume_in(other, State::ScriptDataDoubleEscaped),
            },
            State::BeforeAttributeName => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => (),
                item @ (Some((_, '/' | '>')) | None) => {
                    self.reconsume_in(item, State::AfterAttributeName);
                }
                Some((location, '=')) => {
                    self.bad(location, "=", "attribute", "unexpected '=' before a name");
                    self.init_attribute();
                    self.push_attribute_name('=');
                    self.switch_to(State::AttributeName);
                }
                item => {
                    self.init_attribute();
                    self.reconsume_in(item, State::AttributeName);
                }
            },
            State::AttributeName => match self.read()? {
                Some((location, c)) if is_html_whitespace(c) => {
                    self.reconsume_in(Some((location, c)), State::AfterAttributeName);
                }
                item @ (Some((_, '/' | '>')) | None) => {
                    self.reconsume_in(item, State::AfterAttributeName);
                }
                Some((_, '=')) => self.switch_to(State::BeforeAttributeValue),
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "attribute", "null characters are not allowed");
                    self.push_attribute_name('\u{fffd}');
                }
                Some((location, c @ ('"' | '\'' | '<'))) => {
                    self.bad(location, c, "attribute", "not allowed in attribute names");
                    self.push_attribute_name(c);
                }
                Some((_, c)) => self.push_attribute_name(c.to_ascii_lowercase()),
            },
            State::AfterAttributeName => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => (),
                Some((_, '/')) => self.switch_to(State::SelfClosingStartTag),
                Some((_, '=')) => self.switch_to(State::BeforeAttributeValue),
                Some((_, '>')) => {
                    self.emit_current_tag();
                    self.switch_to(State::Data);
                }
                None => {
                    self.eoi("tag");
                    self.end_of_input();
                }
                item => {
                    self.init_attribute();
                    self.reconsume_in(item, State::AttributeName);
                }
            },
            State::BeforeAttributeValue => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => (),
                Some((_, '"')) => self.switch_to(State::AttributeValueDoubleQuoted),
                Some((_, '\'')) => self.switch_to(State::AttributeValueSingleQuoted),
                Some((location, '>')) => {
                    self.bad(location, ">", "attribute", "missing attribute value");
                    self.emit_current_tag();
                    self.switch_to(State::Data);
                }
                item => self.reconsume_in(item, State::AttributeValueUnquoted),
            },
            State::AttributeValueDoubleQuoted => match self.read()? {
                Some((_, '"')) => self.switch_to(State::AfterAttributeValueQuoted),
                Some((location, '&')) => {
                    self.temp_location = location;
                    self.enter_state(State::CharacterReference);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "attribute", "null characters are not allowed");
                    self.push_attribute_value('\u{fffd}');
                }
                Some((_, c)) => self.push_attribute_value(c),
                None => {
                    self.eoi("attribute");
                    self.end_of_input();
                }
            },
            State::AttributeValueSingleQuoted => match self.read()? {
                Some((_, '\'')) => self.switch_to(State::AfterAttributeValueQuoted),
                Some((location, '&')) => {
                    self.temp_location = location;
                    self.enter_state(State::CharacterReference);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "attribute", "null characters are not allowed");
                    self.push_attribute_value('\u{fffd}');
                }
                Some((_, c)) => self.push_attribute_value(c),
                None => {
                    self.eoi("attribute");
                    self.end_of_input();
                }
            },
            State::AttributeValueUnquoted => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => {
                    self.switch_to(State::BeforeAttributeName);
                }
                Some((location, '&')) => {
                    self.temp_location = location;
                    self.enter_state(State::CharacterReference);
                }
                Some((_, '>')) => {
                    self.emit_current_tag();
                    self.switch_to(State::Data);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "attribute", "null characters are not allowed");
                    self.push_attribute_value('\u{fffd}');
                }
                Some((location, c @ ('"' | '\'' | '<' | '=' | '`'))) => {
                    self.bad(location, c, "attribute", "quote the attribute value");
                    self.push_attribute_value(c);
                }
                Some((_, c)) => self.push_attribute_value(c),
                None => {
                    self.eoi("attribute");
                    self.end_of_input();
                }
            },
            State::AfterAttributeValueQuoted => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => {
                    self.switch_to(State::BeforeAttributeName);
                }
                Some((_, '/')) => self.switch_to(State::SelfClosingStartTag),
                Some((_, '>')) => {
                    self.emit_current_tag();
                    self.switch_to(State::Data);
                }
                None => {
                    self.eoi("tag");
                    self.end_of_input();
                }
                Some((location, c)) => {
                    self.bad(location, c, "tag", "expected whitespace between attributes");
                    self.reconsume_in(Some((location, c)), State::BeforeAttributeName);
                }
            },
            State::SelfClosingStartTag => match self.read()? {
                Some((_, '>')) => {
                    self.set_self_closing();
                    self.emit_current_tag();
                    self.switch_to(State::Data);
                }
                None => {
                    self.eoi("tag");
                    self.end_of_input();
                }
                Some((location, c)) => {
                    self.bad(location, "/", "tag", "unexpected '/' in tag");
                    self.reconsume_in(Some((location, c)), State::BeforeAttributeName);
                }
            },
            State::BogusComment => match self.read()? {
                Some((_, '>')) => {
                    self.emit_current_comment();
                    self.switch_to(State::Data);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "comment", "null characters are not allowed");
                    self.push_comment('\u{fffd}');
                }
                Some((_, c)) => self.push_comment(c),
                None => {
                    self.emit_current_comment();
                    self.end_of_input();
                }
            },
            State::MarkupDeclarationOpen => {
                if self.input.try_read("--", false)? {
                    self.init_comment("");
                    self.switch_to(State::CommentStart);
                } else if self.input.try_read("doctype", true)? {
                    self.switch_to(State::Doctype);
                } else if self.input.try_read("[CDATA[", false)? {
                    if self.foreign {
                        self.switch_to(State::CdataSection);
                    } else {
                        self.bad(
                            self.token_start,
                            "<![CDATA[",
                            "text",
                            "CDATA is only allowed in foreign content",
                        );
                        self.init_comment("[CDATA[");
                        self.switch_to(State::BogusComment);
                    }
                } else {
                    self.bad(self.token_start, "<!", "comment", "should be '<!--'");
                    self.init_comment("");
                    self.switch_to(State::BogusComment);
                }
            }
            State::CommentStart => match self.read()? {
                Some((_, '-')) => self.switch_to(State::CommentStartDash),
                Some((location, '>')) => {
                    self.bad(location, "<!-->", "comment", "comment closed abruptly");
                    self.emit_current_comment();
                    self.switch_to(State::Data);
                }
                item => self.reconsume_in(item, State::Comment),
            },
            State::CommentStartDash => match self.read()? {
                Some((_, '-')) => self.switch_to(State::CommentEnd),
                Some((location, '>')) => {
                    self.bad(location, "<!--->", "comment", "comment closed abruptly");
                    self.emit_current_comment();
                    self.switch_to(State::Data);
                }
                None => {
                    self.eoi("comment");
                    self.emit_current_comment();
                    self.end_of_input();
                }
                item => {
                    self.push_comment('-');
                    self.reconsume_in(item, State::Comment);
                }
            },
            State::Comment => match self.read()? {
                Some((_, '<')) => {
                    self.push_comment('<');
                    self.switch_to(State::CommentLessThanSign);
                }
                Some((_, '-')) => self.switch_to(State::CommentEndDash),
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "comment", "null characters are not allowed");
                    self.push_comment('\u{fffd}');
                }
                Some((_, c)) => self.push_comment(c),
                None => {
                    self.eoi("comment");
                    self.emit_current_comment();
                    self.end_of_input();
                }
            },
            State::CommentLessThanSign => match self.read()? {
                Some((_, '!')) => {
                    self.push_comment('!');
                    self.switch_to(State::CommentLessThanSignBang);
                }
                Some((_, '<')) => self.push_comment('<'),
                item => self.reconsume_in(item, State::Comment),
            },
            State::CommentLessThanSignBang => match self.read()? {
                Some((_, '-')) => self.switch_to(State::CommentLessThanSignBangDash),
                item => self.reconsume_in(item, State::Comment),
            },
            State::CommentLessThanSignBangDash => match self.read()? {
                Some((_, '-')) => self.switch_to(State::CommentLessThanSignBangDashDash),
                item => self.reconsume_in(item, State::CommentEndDash),
            },
            State::CommentLessThanSignBangDashDash => match self.read()? {
                item @ (Some((_, '>')) | None) => self.reconsume_in(item, State::CommentEnd),
                Some((location, c)) => {
                    self.bad(location, "<!--", "comment", "nested comments are not allowed");
                    self.reconsume_in(Some((location, c)), State::CommentEnd);
                }
            },
            State::CommentEndDash => match self.read()? {
                Some((_, '-')) => self.switch_to(State::CommentEnd),
                None => {
                    self.eoi("comment");
                    self.emit_current_comment();
                    self.end_of_input();
                }
                item => {
                    self.push_comment('-');
                    self.reconsume_in(item, State::Comment);
                }
            },
            State::CommentEnd => match self.read()? {
                Some((_, '>')) => {
                    self.emit_current_comment();
                    self.switch_to(State::Data);
                }
                Some((_, '!')) => self.switch_to(State::CommentEndBang),
                Some((_, '-')) => self.push_comment('-'),
                None => {
                    self.eoi("comment");
                    self.emit_current_comment();
                    self.end_of_input();
                }
                item => {
                    self.push_comment_str("--");
                    self.reconsume_in(item, State::Comment);
                }
            },
            State::CommentEndBang => match self.read()? {
                Some((_, '-')) => {
                    self.push_comment_str("--!");
                    self.switch_to(State::CommentEndDash);
                }
                Some((location, '>')) => {
                    self.bad(location, "--!>", "comment", "comment closed incorrectly");
                    self.emit_current_comment();
                    self.switch_to(State::Data);
                }
                None => {
                    self.eoi("comment");
                    self.emit_current_comment();
                    self.end_of_input();
                }
                item => {
                    self.push_comment_str("--!");
                    self.reconsume_in(item, State::Comment);
                }
            },
            State::Doctype => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => {
                    self.switch_to(State::BeforeDoctypeName);
                }
                item @ Some((_, '>')) => self.reconsume_in(item, State::BeforeDoctypeName),
                None => {
                    self.eoi("doctype");
                    self.init_doctype();
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.end_of_input();
                }
                Some((location, c)) => {
                    self.bad(location, c, "doctype", "expected whitespace after 'DOCTYPE'");
                    self.reconsume_in(Some((location, c)), State::BeforeDoctypeName);
                }
            },
            State::BeforeDoctypeName => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => (),
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "doctype", "null characters are not allowed");
                    self.init_doctype();
                    self.doctype_mut().name = Some('\u{fffd}'.into());
                    self.switch_to(State::DoctypeName);
                }
                Some((location, '>')) => {
                    self.bad(location, ">", "doctype", "missing doctype name");
                    self.init_doctype();
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.switch_to(State::Data);
                }
                None => {
                    self.eoi("doctype");
                    self.init_doctype();
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.end_of_input();
                }
                Some((_, c)) => {
                    self.init_doctype();
                    self.doctype_mut().name = Some(c.to_ascii_lowercase().into());
                    self.switch_to(State::DoctypeName);
                }
            },
            State::DoctypeName => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => {
                    self.switch_to(State::AfterDoctypeName);
                }
                Some((_, '>')) => {
                    self.emit_current_doctype();
                    self.switch_to(State::Data);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "doctype", "null characters are not allowed");
                    if let Some(name) = &mut self.doctype_mut().name {
                        name.push('\u{fffd}');
                    }
                }
                Some((_, c)) => {
                    if let Some(name) = &mut self.doctype_mut().name {
                        name.push(c.to_ascii_lowercase());
                    }
                }
                None => {
                    self.eoi("doctype");
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.end_of_input();
                }
            },
            State::AfterDoctypeName => {
                if self.input.try_read("public", true)? {
                    self.switch_to(State::AfterDoctypePublicKeyword);
                } else if self.input.try_read("system", true)? {
                    self.switch_to(State::AfterDoctypeSystemKeyword);
                } else {
                    match self.read()? {
                        Some((_, c)) if is_html_whitespace(c) => (),
                        Some((_, '>')) => {
                            self.emit_current_doctype();
                            self.switch_to(State::Data);
                        }
                        None => {
                            self.eoi("doctype");
                            self.doctype_mut().force_quirks = true;
                            self.emit_current_doctype();
                            self.end_of_input();
                        }
                        Some((location, c)) => {
                            self.bad(location, c, "doctype", "expected PUBLIC or SYSTEM");
                            self.doctype_mut().force_quirks = true;
                            self.reconsume_in(Some((location, c)), State::BogusDoctype);
                        }
                    }
                }
            }
            State::AfterDoctypePublicKeyword => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => {
                    self.switch_to(State::BeforeDoctypePublicIdentifier);
                }
                Some((location, q @ ('"' | '\''))) => {
                    self.bad(location, q, "doctype", "expected whitespace before the identifier");
                    self.doctype_mut().public_id = Some(String::new());
                    self.switch_to(if q == '"' {
                        State::DoctypePublicIdentifierDoubleQuoted
                    } else {
                        State::DoctypePublicIdentifierSingleQuoted
                    });
                }
                Some((location, '>')) => {
                    self.bad(location, ">", "doctype", "missing public identifier");
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.switch_to(State::Data);
                }
                None => {
                    self.eoi("doctype");
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.end_of_input();
                }
                Some((location, c)) => {
                    self.bad(location, c, "doctype", "expected a quoted identifier");
                    self.doctype_mut().force_quirks = true;
                    self.reconsume_in(Some((location, c)), State::BogusDoctype);
                }
            },
            State::BeforeDoctypePublicIdentifier => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => (),
                Some((_, '"')) => {
                    self.doctype_mut().public_id = Some(String::new());
                    self.switch_to(State::DoctypePublicIdentifierDoubleQuoted);
                }
                Some((_, '\'')) => {
                    self.doctype_mut().public_id = Some(String::new());
                    self.switch_to(State::DoctypePublicIdentifierSingleQuoted);
                }
                Some((location, '>')) => {
                    self.bad(location, ">", "doctype", "missing public identifier");
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.switch_to(State::Data);
                }
                None => {
                    self.eoi("doctype");
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.end_of_input();
                }
                Some((location, c)) => {
                    self.bad(location, c, "doctype", "expected a quoted identifier");
                    self.doctype_mut().force_quirks = true;
                    self.reconsume_in(Some((location, c)), State::BogusDoctype);
                }
            },
            State::DoctypePublicIdentifierDoubleQuoted => {
                self.doctype_identifier('"', true, State::AfterDoctypePublicIdentifier)?;
            }
            State::DoctypePublicIdentifierSingleQuoted => {
                self.doctype_identifier('\'', true, State::AfterDoctypePublicIdentifier)?;
            }
            State::AfterDoctypePublicIdentifier => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => {
                    self.switch_to(State::BetweenDoctypePublicAndSystemIdentifiers);
                }
                Some((_, '>')) => {
                    self.emit_current_doctype();
                    self.switch_to(State::Data);
                }
                Some((location, q @ ('"' | '\''))) => {
                    self.bad(location, q, "doctype", "expected whitespace between identifiers");
                    self.doctype_mut().system_id = Some(String::new());
                    self.switch_to(if q == '"' {
                        State::DoctypeSystemIdentifierDoubleQuoted
                    } else {
                        State::DoctypeSystemIdentifierSingleQuoted
                    });
                }
                None => {
                    self.eoi("doctype");
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.end_of_input();
                }
                Some((location, c)) => {
                    self.bad(location, c, "doctype", "expected a quoted identifier");
                    self.doctype_mut().force_quirks = true;
                    self.reconsume_in(Some((location, c)), State::BogusDoctype);
                }
            },
            State::BetweenDoctypePublicAndSystemIdentifiers => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => (),
                Some((_, '>')) => {
                    self.emit_current_doctype();
                    self.switch_to(State::Data);
                }
                Some((_, '"')) => {
                    self.doctype_mut().system_id = Some(String::new());
                    self.switch_to(State::DoctypeSystemIdentifierDoubleQuoted);
                }
                Some((_, '\'')) => {
                    self.doctype_mut().system_id = Some(String::new());
                    self.switch_to(State::DoctypeSystemIdentifierSingleQuoted);
                }
                None => {
                    self.eoi("doctype");
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.end_of_input();
                }
                Some((location, c)) => {
                    self.bad(location, c, "doctype", "expected a quoted identifier");
                    self.doctype_mut().force_quirks = true;
                    self.reconsume_in(Some((location, c)), State::BogusDoctype);
                }
            },
            State::AfterDoctypeSystemKeyword => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => {
                    self.switch_to(State::BeforeDoctypeSystemIdentifier);
                }
                Some((location, q @ ('"' | '\''))) => {
                    self.bad(location, q, "doctype", "expected whitespace before the identifier");
                    self.doctype_mut().system_id = Some(String::new());
                    self.switch_to(if q == '"' {
                        State::DoctypeSystemIdentifierDoubleQuoted
                    } else {
                        State::DoctypeSystemIdentifierSingleQuoted
                    });
                }
                Some((location, '>')) => {
                    self.bad(location, ">", "doctype", "missing system identifier");
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.switch_to(State::Data);
                }
                None => {
                    self.eoi("doctype");
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.end_of_input();
                }
                Some((location, c)) => {
                    self.bad(location, c, "doctype", "expected a quoted identifier");
                    self.doctype_mut().force_quirks = true;
                    self.reconsume_in(Some((location, c)), State::BogusDoctype);
                }
            },
            State::BeforeDoctypeSystemIdentifier => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => (),
                Some((_, '"')) => {
                    self.doctype_mut().system_id = Some(String::new());
                    self.switch_to(State::DoctypeSystemIdentifierDoubleQuoted);
                }
                Some((_, '\'')) => {
                    self.doctype_mut().system_id = Some(String::new());
                    self.switch_to(State::DoctypeSystemIdentifierSingleQuoted);
                }
                Some((location, '>')) => {
                    self.bad(location, ">", "doctype", "missing system identifier");
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.switch_to(State::Data);
                }
                None => {
                    self.eoi("doctype");
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.end_of_input();
                }
                Some((location, c)) => {
                    self.bad(location, c, "doctype", "expected a quoted identifier");
                    self.doctype_mut().force_quirks = true;
                    self.reconsume_in(Some((location, c)), State::BogusDoctype);
                }
            },
            State::DoctypeSystemIdentifierDoubleQuoted => {
                self.doctype_identifier('"', false, State::AfterDoctypeSystemIdentifier)?;
            }
            State::DoctypeSystemIdentifierSingleQuoted => {
                self.doctype_identifier('\'', false, State::AfterDoctypeSystemIdentifier)?;
            }
            State::AfterDoctypeSystemIdentifier => match self.read()? {
                Some((_, c)) if is_html_whitespace(c) => (),
                Some((_, '>')) => {
                    self.emit_current_doctype();
                    self.switch_to(State::Data);
                }
                None => {
                    self.eoi("doctype");
                    self.doctype_mut().force_quirks = true;
                    self.emit_current_doctype();
                    self.end_of_input();
                }
                Some((location, c)) => {
                    self.bad(location, c, "doctype", "unexpected characters after the identifier");
                    self.reconsume_in(Some((location, c)), State::BogusDoctype);
                }
            },
            State::BogusDoctype => match self.read()? {
                Some((_, '>')) => {
                    self.emit_current_doctype();
                    self.switch_to(State::Data);
                }
                Some((location, '\0')) => {
                    self.bad(location, "\\0", "doctype", "null characters are not allowed");
                }
                Some(_) => (),
                None => {
                    self.emit_current_doctype();
                    self.end_of_input();
                }
            },
            State::CdataSection => match self.read()? {
                Some((_, ']')) => self.switch_to(State::CdataSectionBracket),
                Some((location, c)) => self.push_char(location, c),
                None => {
                    self.eoi("cdata");
                    self.end_of_input();
                }
            },
            State::CdataSectionBracket => match self.read()? {
                Some((_, ']')) => self.switch_to(State::CdataSectionEnd),
                item => {
                    self.push_char(self.input.location(), ']');
                    self.reconsume_in(item, State::CdataSection);
                }
            },
            State::CdataSectionEnd => match self.read()? {
                Some((location, ']')) => self.push_char(location, ']'),
                Some((_, '>')) => self.switch_to(State::Data),
                item => {
                    self.push_str(self.input.location(), "]]");
                    self.reconsume_in(item, State::CdataSection);
                }
            },
            State::CharacterReference => {
                self.temp.clear();
                self.temp.push('&');
                match self.read()? {
                    Some((location, c)) if c.is_ascii_alphanumeric() => {
                        self.reconsume_in(Some((location, c)), State::NamedCharacterReference);
                    }
                    Some((_, '#')) => {
                        self.temp.push('#');
                        self.switch_to(State::NumericCharacterReference);
                    }
                    item => {
                        self.flush_code_points_consumed_as_character_reference(self.temp_location);
                        let state = self.pop_return_state();
                        self.reconsume_in(item, state);
                    }
                }
            }
            State::NamedCharacterReference => {
                let item = self.read()?;
                let char_ref = match item {
                    Some((_, x)) => {
                        let input = &mut self.input;
                        try_read_character_reference(x, |s| input.try_read(s, false))?
                            .map(|char_ref| (x, char_ref))
                    }
                    None => None,
                };

                if let Some((x, char_ref)) = char_ref {
                    let ends_with_semicolon = char_ref.name.ends_with(';');
                    let next = self.read()?;
                    let next_is_equals_or_alnum = matches!(
                        next,
                        Some((_, c)) if c == '=' || c.is_ascii_alphanumeric()
                    );
                    if !self.is_consumed_as_part_of_an_attribute()
                        || ends_with_semicolon
                        || !next_is_equals_or_alnum
                    {
                        if !ends_with_semicolon {
                            self.bad(
                                self.temp_location,
                                format!("&{}{}", x, char_ref.name),
                                "text",
                                "character reference is missing ';'",
                            );
                        }
                        self.temp.clear();
                        self.temp.push_str(char_ref.characters);
                    } else {
                        // legacy-compat: inside attributes, `&copy=` stays literal
                        self.temp.push(x);
                        self.temp.push_str(char_ref.name);
                    }
                    self.flush_code_points_consumed_as_character_reference(self.temp_location);
                    let state = self.pop_return_state();
                    self.reconsume_in(next, state);
                } else {
                    self.flush_code_points_consumed_as_character_reference(self.temp_location);
                    self.reconsume_in(item, State::AmbiguousAmpersand);
                }
            }
            State::AmbiguousAmpersand => match self.read()? {
                Some((location, c)) if c.is_ascii_alphanumeric() => {
                    if self.is_consumed_as_part_of_an_attribute() {
                        self.push_attribute_value(c);
                    } else {
                        self.push_char(location, c);
                    }
                }
                Some((location, ';')) => {
                    self.bad(
                        location,
                        "&",
                        "text",
                        "unknown named character reference; replace '&' with '&amp;'",
                    );
                    let state = self.pop_return_state();
                    self.reconsume_in(Some((location, ';')), state);
                }
                item => {
                    let state = self.pop_return_state();
                    self.reconsume_in(item, state);
                }
            },
            State::NumericCharacterReference => {
                self.character_reference_code = 0;
                match self.read()? {
                    Some((_, x @ ('x' | 'X'))) => {
                        self.temp.push(x);
                        self.switch_to(State::HexadecimalCharacterReferenceStart);
                    }
                    item => self.reconsume_in(item, State::DecimalCharacterReferenceStart),
                }
            }
            State::HexadecimalCharacterReferenceStart => match self.read()? {
                item @ Some((_, c)) if c.is_ascii_hexdigit() => {
                    self.reconsume_in(item, State::HexadecimalCharacterReference);
                }
                item => {
                    self.bad(
                        self.temp_location,
                        "&#",
                        "text",
                        "numeric character reference has no digits",
                    );
                    self.flush_code_points_consumed_as_character_reference(self.temp_location);
                    let state = self.pop_return_state();
                    self.reconsume_in(item, state);
                }
            },
            State::DecimalCharacterReferenceStart => match self.read()? {
                item @ Some((_, c)) if c.is_ascii_digit() => {
                    self.reconsume_in(item, State::DecimalCharacterReference);
                }
                item => {
                    self.bad(
                        self.temp_location,
                        "&#",
                        "text",
                        "numeric character reference has no digits",
                    );
                    self.flush_code_points_consumed_as_character_reference(self.temp_location);
                    let state = self.pop_return_state();
                    self.reconsume_in(item, state);
                }
            },
            State::HexadecimalCharacterReference => match self.read()? {
                Some((_, c)) if c.is_ascii_hexdigit() => {
                    self.mutate_character_reference(16, c.to_digit(16).unwrap_or(0));
                }
                Some((_, ';')) => self.switch_to(State::NumericCharacterReferenceEnd),
                item => {
                    self.bad(
                        self.temp_location,
                        "&#x",
                        "text",
                        "character reference is missing ';'",
                    );
                    self.reconsume_in(item, State::NumericCharacterReferenceEnd);
                }
            },
            State::DecimalCharacterReference => match self.read()? {
                Some((_, c)) if c.is_ascii_digit() => {
                    self.mutate_character_reference(10, c.to_digit(10).unwrap_or(0));
                }
                Some((_, ';')) => self.switch_to(State::NumericCharacterReferenceEnd),
                item => {
                    self.bad(
                        self.temp_location,
                        "&#",
                        "text",
                        "character reference is missing ';'",
                    );
                    self.reconsume_in(item, State::NumericCharacterReferenceEnd);
                }
            },
            State::NumericCharacterReferenceEnd => {
                let code = self.character_reference_code;
                let code = match code {
                    0x00 => {
                        self.bad(
                            self.temp_location,
                            "&#0;",
                            "text",
                            "null character references are not allowed",
                        );
                        0xfffd
                    }
                    0x11_0000.. => {
                        self.bad(
                            self.temp_location,
                            "&#",
                            "text",
                            "character reference is outside Unicode",
                        );
                        0xfffd
                    }
                    0xd800..=0xdfff => {
                        self.bad(
                            self.temp_location,
                            "&#",
                            "text",
                            "character reference is a surrogate",
                        );
                        0xfffd
                    }
                    code => {
                        if is_noncharacter(code) {
                            self.bad(
                                self.temp_location,
                                "&#",
                                "text",
                                "character reference is a noncharacter",
                            );
                        } else if code == 0x0d
                            || (is_control(code)
                                && !matches!(code, 0x09 | 0x0a | 0x0c | 0x20))
                        {
                            self.bad(
                                self.temp_location,
                                "&#",
                                "text",
                                "character reference is a control character",
                            );
                        }
                        remap_c1_reference(code)
                    }
                };
                self.temp.clear();
                self.temp
                    .push(char::from_u32(code).unwrap_or('\u{fffd}'));
                self.flush_code_points_consumed_as_character_reference(self.temp_location);
                let state = self.pop_return_state();
                self.switch_to(state);
            }
        }
        Ok(())
    }

    /// Shared body of the RCDATA/RAWTEXT/script-data end-tag-name states.
    fn raw_end_tag_name(&mut self, fallback: State) -> Result<(), S::Error> {
        match self.read()? {
            Some((_, c)) if is_html_whitespace(c) && self.current_is_appropriate_end_tag() => {
                self.switch_to(State::BeforeAttributeName);
            }
            Some((_, '/')) if self.current_is_appropriate_end_tag() => {
                self.switch_to(State::SelfClosingStartTag);
            }
            Some((_, '>')) if self.current_is_appropriate_end_tag() => {
                self.emit_current_tag();
                self.switch_to(State::Data);
            }
            Some((_, c)) if c.is_ascii_alphabetic() => {
                self.push_tag_name(c.to_ascii_lowercase());
                self.temp.push(c);
            }
            item => {
                // not an appropriate end tag after all: the text run gets
                // the literal characters back
                let name = self.temp.clone();
                self.push_str(self.token_start, "</");
                self.push_str(self.token_start, &name);
                self.current = CurrentToken::None;
                self.reconsume_in(item, fallback);
            }
        }
        Ok(())
    }

    fn doctype_identifier(
        &mut self,
        quote: char,
        public: bool,
        next_state: State,
    ) -> Result<(), S::Error> {
        match self.read()? {
            Some((_, c)) if c == quote => self.switch_to(next_state),
            Some((location, '\0')) => {
                self.bad(location, "\\0", "doctype", "null characters are not allowed");
                self.push_doctype_identifier(public, '\u{fffd}');
            }
            Some((location, '>')) => {
                self.bad(location, ">", "doctype", "identifier closed abruptly");
                self.doctype_mut().force_quirks = true;
                self.emit_current_doctype();
                self.switch_to(State::Data);
            }
            Some((_, c)) => self.push_doctype_identifier(public, c),
            None => {
                self.eoi("doctype");
                self.doctype_mut().force_quirks = true;
                self.emit_current_doctype();
                self.end_of_input();
            }
        }
        Ok(())
    }

    fn push_doctype_identifier(&mut self, public: bool, c: char) {
        let doctype = self.doctype_mut();
        let id = if public {
            &mut doctype.public_id
        } else {
            &mut doctype.system_id
        };
        if let Some(id) = id {
            id.push(c);
        }
    }

    fn mutate_character_reference(&mut self, base: u32, digit: u32) {
        self.character_reference_code = self
            .character_reference_code
            .checked_mul(base)
            .and_then(|code| code.checked_add(digit))
            // out of range; NumericCharacterReferenceEnd reports it
            .unwrap_or(0x11_0000);
    }
}

pub(crate) fn is_html_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{c}' | ' ')
}

fn is_noncharacter(code: u32) -> bool {
    matches!(code, 0xfdd0..=0xfdef) || (code & 0xfffe) == 0xfffe
}

fn is_control(code: u32) -> bool {
    matches!(code, 0x00..=0x1f | 0x7f..=0x9f)
}

/// The Windows-1252 remapping of C1 numeric character references.
fn remap_c1_reference(code: u32) -> u32 {
    match code {
        0x80 => 0x20ac,
        0x82 => 0x201a,
        0x83 => 0x0192,
        0x84 => 0x201e,
        0x85 => 0x2026,
        0x86 => 0x2020,
        0x87 => 0x2021,
        0x88 => 0x02c6,
        0x89 => 0x2030,
        0x8a => 0x0160,
        0x8b => 0x2039,
        0x8c => 0x0152,
        0x8e => 0x017d,
        0x91 => 0x2018,
        0x92 => 0x2019,
        0x93 => 0x201c,
        0x94 => 0x201d,
        0x95 => 0x2022,
        0x96 => 0x2013,
        0x97 => 0x2014,
        0x98 => 0x02dc,
        0x99 => 0x2122,
        0x9a => 0x0161,
        0x9b => 0x203a,
        0x9c => 0x0153,
        0x9e => 0x017e,
        0x9f => 0x0178,
        _ => code,
    }
}
