//! The HTML tree constructor: the insertion-mode state machine, emitting
//! located, balanced signals instead of building a tree.
//!
//! The machinery follows the WHATWG tree-construction algorithm: an
//! open-element stack, a list of active formatting elements with scope
//! markers and the adoption agency, foreign-content dispatch for SVG and
//! MathML, and fragment parsing. Where the algorithm moves nodes that have
//! already been emitted (true foster parenting), the constructor reports
//! and keeps document order instead: a signal stream cannot be reordered
//! after the fact.

use std::collections::VecDeque;

use log::trace;

use crate::html::tables::{
    adjust_foreign_attribute, adjust_svg_attribute, adjust_svg_tag_name,
    annotation_xml_is_integration_point, bounds_scope, breaks_out_of_foreign, doctype_is_quirky,
    has_implied_end_tag, is_formatting, is_heading, is_mathml_text_integration_point, is_rawtext,
    is_rcdata, is_special, is_svg_html_integration_point, Ns, Scope,
};
use crate::html::tokenizer::{
    is_html_whitespace, DoctypeToken, HtmlToken, HtmlTokenizer, State, TagToken,
};
use crate::signal::{ns, Attribute, Doctype, Emit, Name, Signal};
use crate::source::ByteSource;
use crate::{Context, Error, Location};

/// The insertion modes of the HTML specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Initial,
    BeforeHtml,
    BeforeHead,
    InHead,
    InHeadNoscript,
    AfterHead,
    InBody,
    Text,
    InTable,
    InTableText,
    InCaption,
    InColumnGroup,
    InTableBody,
    InRow,
    InCell,
    InSelect,
    InSelectInTable,
    InTemplate,
    AfterBody,
    InFrameset,
    AfterFrameset,
    AfterAfterBody,
    AfterAfterFrameset,
}

#[derive(Debug, Clone)]
struct Open {
    id: usize,
    name: String,
    namespace: Ns,
    /// No signal was emitted for this element (fragment scaffolding), so
    /// no EndElement is emitted when it pops.
    synthetic: bool,
    /// MathML text integration point.
    text_integration: bool,
    /// HTML integration point.
    html_integration: bool,
    /// A MathML `annotation-xml` element (SVG may start inside it).
    annotation_xml: bool,
}

#[derive(Debug, Clone)]
enum FormatEntry {
    Marker,
    Element {
        id: usize,
        name: String,
        attributes: Vec<(String, String)>,
    },
}

enum Input {
    Token(Location, HtmlToken),
    Eof(Location),
}

pub(crate) struct HtmlConstructor<S: ByteSource> {
    tokenizer: HtmlTokenizer<S>,
    context: Option<Context>,
    fragment: bool,
    /// The notional element a fragment is parsed inside of.
    context_element: Option<Open>,
    replay: VecDeque<(Location, HtmlToken)>,
    mode: Mode,
    original_mode: Option<Mode>,
    template_modes: Vec<Mode>,
    stack: Vec<Open>,
    formatting: Vec<FormatEntry>,
    next_id: usize,
    head_seen: bool,
    form_seen: bool,
    frameset_ok: bool,
    quirks: bool,
    ignore_next_lf: bool,
    pending_table_text: Option<(Location, String)>,
    out: VecDeque<Emit>,
    last_location: Location,
    started: bool,
    done: bool,
}

impl<S: ByteSource> HtmlConstructor<S> {
    pub(crate) fn new(tokenizer: HtmlTokenizer<S>, context: Option<Context>) -> Self {
        HtmlConstructor {
            tokenizer,
            context,
            fragment: false,
            context_element: None,
            replay: VecDeque::new(),
            mode: Mode::Initial,
            original_mode: None,
            template_modes: Vec::new(),
            stack: Vec::new(),
            formatting: Vec::new(),
            next_id: 0,
            head_seen: false,
            form_seen: false,
            frameset_ok: true,
            quirks: false,
            ignore_next_lf: false,
            pending_table_text: None,
            out: VecDeque::new(),
            last_location: Location::START,
            started: false,
            done: false,
        }
    }

    pub(crate) fn next_emit(&mut self) -> Result<Option<Emit>, S::Error> {
        loop {
            if let Some(emit) = self.out.pop_front() {
                return Ok(Some(emit));
            }
            if self.done {
                return Ok(None);
            }
            self.pump()?;
        }
    }

    fn pump(&mut self) -> Result<(), S::Error> {
        if !self.started {
            self.start_up()?;
            return Ok(());
        }
        let input = self.next_input()?;
        self.dispatch(input);
        self.sync_tokenizer_foreign_flag();
        Ok(())
    }

    fn next_input(&mut self) -> Result<Input, S::Error> {
        if let Some((location, token)) = self.replay.pop_front() {
            self.drain_reports();
            return Ok(Input::Token(location, token));
        }
        let item = self.tokenizer.next_token()?;
        self.drain_reports();
        Ok(match item {
            Some((location, token)) => Input::Token(location, token),
            None => Input::Eof(self.end_location()),
        })
    }

    fn drain_reports(&mut self) {
        while let Some((location, error)) = self.tokenizer.take_report() {
            self.out.push_back(Emit::Report(location, error));
        }
    }

    fn end_location(&self) -> Location {
        self.last_location
    }

    // ------------------------------------------------------------------
    // start-up: context detection and fragment scaffolding

    fn start_up(&mut self) -> Result<(), S::Error> {
        if self.context.is_none() {
            self.context = Some(self.detect_context()?);
        }
        match self.context.clone() {
            Some(Context::Fragment(name)) => self.set_up_fragment(&name),
            _ => {
                self.mode = Mode::Initial;
            }
        }
        self.started = true;
        Ok(())
    }

    /// Peek the leading tokens (buffered for replay) and pick a context,
    /// keyed by the first token that is neither whitespace nor a comment.
    fn detect_context(&mut self) -> Result<Context, S::Error> {
        loop {
            let item = match self.tokenizer.next_token()? {
                Some(item) => item,
                None => return Ok(Context::Document),
            };
            self.drain_reports();
            let verdict = match &item.1 {
                HtmlToken::Comment(_) => None,
                HtmlToken::Chars(text)
                    if text.chars().all(is_html_whitespace) =>
                {
                    None
                }
                HtmlToken::Doctype(_) => Some(Context::Document),
                HtmlToken::StartTag(tag) => Some(match tag.name.as_str() {
                    "td" | "th" => Context::fragment("tr"),
                    "tr" => Context::fragment("tbody"),
                    "tbody" | "thead" | "tfoot" | "caption" | "colgroup" => {
                        Context::fragment("table")
                    }
                    "col" => Context::fragment("colgroup"),
                    "option" | "optgroup" => Context::fragment("select"),
                    "svg" => Context::fragment("svg"),
                    "math" => Context::fragment("math"),
                    _ => Context::Document,
                }),
                _ => Some(Context::Document),
            };
            self.replay.push_back(item);
            if let Some(context) = verdict {
                return Ok(context);
            }
        }
    }

    fn set_up_fragment(&mut self, name: &str) {
        self.fragment = true;
        let root_id = self.fresh_id();
        self.stack.push(Open {
            id: root_id,
            name: "html".into(),
            namespace: Ns::Html,
            synthetic: true,
            text_integration: false,
            html_integration: false,
            annotation_xml: false,
        });
        let context_ns = match name {
            "svg" => Ns::Svg,
            "math" => Ns::MathMl,
            _ => Ns::Html,
        };
        let id = self.fresh_id();
        self.context_element = Some(Open {
            id,
            name: name.to_owned(),
            namespace: context_ns,
            synthetic: true,
            text_integration: is_mathml_text_integration_point(name, context_ns),
            html_integration: is_svg_html_integration_point(name, context_ns),
            annotation_xml: context_ns == Ns::MathMl && name == "annotation-xml",
        });
        self.tokenizer.set_last_start_tag(name);
        if context_ns == Ns::Html {
            let state = match name {
                n if is_rcdata(n) => Some(State::RcData),
                n if is_rawtext(n) => Some(State::RawText),
                "script" => Some(State::ScriptData),
                "plaintext" => Some(State::PlainText),
                _ => None,
            };
            if let Some(state) = state {
                self.tokenizer.set_state(state);
            }
        }
        self.mode = match name {
            "select" => Mode::InSelect,
            "td" | "th" => Mode::InCell,
            "tr" => Mode::InRow,
            "tbody" | "thead" | "tfoot" => Mode::InTableBody,
            "caption" => Mode::InCaption,
            "colgroup" => Mode::InColumnGroup,
            "table" => Mode::InTable,
            "template" => {
                self.template_modes.push(Mode::InTemplate);
                Mode::InTemplate
            }
            "head" => Mode::InHead,
            "frameset" => Mode::InFrameset,
            "html" => Mode::BeforeHead,
            n if is_rcdata(n) || is_rawtext(n) || n == "script" => {
                self.original_mode = Some(Mode::InBody);
                Mode::Text
            }
            _ => Mode::InBody,
        };
        self.sync_tokenizer_foreign_flag();
    }

    // ------------------------------------------------------------------
    // dispatch

    fn dispatch(&mut self, input: Input) {
        let (location, token) = match input {
            Input::Eof(location) => {
                self.handle_eof(location);
                return;
            }
            Input::Token(location, token) => (location, token),
        };

        if self.ignore_next_lf {
            self.ignore_next_lf = false;
            if let HtmlToken::Chars(text) = &token {
                let stripped = text.strip_prefix('\n').unwrap_or(text).to_owned();
                if stripped.is_empty() {
                    return;
                }
                self.dispatch(Input::Token(location, HtmlToken::Chars(stripped)));
                return;
            }
        }

        let foreign = match self.adjusted_current_node() {
            None => false,
            Some(node) if node.namespace == Ns::Html => false,
            Some(node) => {
                let integration_pass = match &token {
                    HtmlToken::StartTag(tag) => {
                        (node.text_integration
                            && !matches!(tag.name.as_str(), "mglyph" | "malignmark"))
                            || (node.annotation_xml && tag.name == "svg")
                            || node.html_integration
                    }
                    HtmlToken::Chars(_) => node.text_integration || node.html_integration,
                    _ => false,
                };
                !integration_pass
            }
        };

        if foreign {
            self.foreign_content(location, token);
        } else {
            self.process(location, token);
        }
    }

    fn adjusted_current_node(&self) -> Option<&Open> {
        if self.fragment && self.stack.len() == 1 {
            return self.context_element.as_ref();
        }
        self.stack.last()
    }

    fn sync_tokenizer_foreign_flag(&mut self) {
        let foreign = matches!(
            self.adjusted_current_node(),
            Some(node) if node.namespace != Ns::Html
        );
        self.tokenizer.set_foreign(foreign);
    }

    fn process(&mut self, location: Location, token: HtmlToken) {
        match self.mode {
            Mode::Initial => self.mode_initial(location, token),
            Mode::BeforeHtml => self.mode_before_html(location, token),
            Mode::BeforeHead => self.mode_before_head(location, token),
            Mode::InHead => self.mode_in_head(location, token),
            Mode::InHeadNoscript => self.mode_in_head_noscript(location, token),
            Mode::AfterHead => self.mode_after_head(location, token),
            Mode::InBody => self.mode_in_body(location, token),
            Mode::Text => self.mode_text(location, token),
            Mode::InTable => self.mode_in_table(location, token),
            Mode::InTableText => self.mode_in_table_text(location, token),
            Mode::InCaption => self.mode_in_caption(location, token),
            Mode::InColumnGroup => self.mode_in_column_group(location, token),
            Mode::InTableBody => self.mode_in_table_body(location, token),
            Mode::InRow => self.mode_in_row(location, token),
            Mode::InCell => self.mode_in_cell(location, token),
            Mode::InSelect => self.mode_in_select(location, token),
            Mode::InSelectInTable => self.mode_in_select_in_table(location, token),
            Mode::InTemplate => self.mode_in_template(location, token),
            Mode::AfterBody => self.mode_after_body(location, token),
            Mode::InFrameset => self.mode_in_frameset(location, token),
            Mode::AfterFrameset => self.mode_after_frameset(location, token),
            Mode::AfterAfterBody => self.mode_after_after_body(location, token),
            Mode::AfterAfterFrameset => self.mode_after_after_frameset(location, token),
        }
    }

    fn switch_mode(&mut self, mode: Mode) {
        trace!("insertion mode: {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    // ------------------------------------------------------------------
    // emission and stack primitives

    fn fresh_id(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    fn report(&mut self, location: Location, error: Error) {
        self.last_location = self.last_location.max(location);
        self.out.push_back(Emit::Report(location, error));
    }

    fn signal(&mut self, location: Location, signal: Signal) {
        self.last_location = self.last_location.max(location);
        self.out.push_back(Emit::Signal(location, signal));
    }

    fn current_name(&self) -> String {
        self.adjusted_current_node()
            .map(|node| node.name.clone())
            .unwrap_or_else(|| "html".into())
    }

    fn misnested(&mut self, location: Location, what: &str) {
        let place = self.current_name();
        self.report(
            location,
            Error::MisnestedTag {
                what: what.into(),
                place,
            },
        );
    }

    fn emit_text(&mut self, location: Location, text: String) {
        if text.is_empty() {
            return;
        }
        self.signal(location, Signal::Text(vec![text]));
    }

    fn html_attributes(attributes: Vec<(String, String)>) -> Vec<Attribute> {
        attributes
            .into_iter()
            .map(|(name, value)| Attribute {
                name: Name::local(name),
                value,
            })
            .collect()
    }

    /// Emit a StartElement for an HTML element and push it.
    fn insert_html(
        &mut self,
        location: Location,
        name: &str,
        attributes: Vec<(String, String)>,
    ) -> usize {
        let id = self.fresh_id();
        self.signal(
            location,
            Signal::StartElement {
                name: Name::in_ns(ns::HTML, name),
                attributes: Self::html_attributes(attributes),
            },
        );
        self.stack.push(Open {
            id,
            name: name.to_owned(),
            namespace: Ns::Html,
            synthetic: false,
            text_integration: false,
            html_integration: false,
            annotation_xml: false,
        });
        id
    }

    /// Emit a void element: StartElement immediately followed by its
    /// EndElement, with nothing pushed.
    fn insert_void(&mut self, location: Location, name: &str, attributes: Vec<(String, String)>) {
        self.signal(
            location,
            Signal::StartElement {
                name: Name::in_ns(ns::HTML, name),
                attributes: Self::html_attributes(attributes),
            },
        );
        self.signal(location, Signal::EndElement);
    }

    /// Pop the current element, emitting EndElement unless synthetic.
    fn pop(&mut self, location: Location) {
        if let Some(open) = self.stack.pop() {
            if !open.synthetic {
                self.signal(location, Signal::EndElement);
            }
        }
    }

    fn pop_until_html(&mut self, location: Location, name: &str) {
        while let Some(top) = self.stack.last() {
            let found = top.namespace == Ns::Html && top.name == name;
            self.pop(location);
            if found {
                break;
            }
        }
    }

    fn has_in_scope(&self, scope: Scope, name: &str) -> bool {
        for open in self.stack.iter().rev() {
            if open.namespace == Ns::Html && open.name == name {
                return true;
            }
            if bounds_scope(scope, &open.name, open.namespace) {
                return false;
            }
        }
        false
    }

    fn has_heading_in_scope(&self) -> bool {
        for open in self.stack.iter().rev() {
            if open.namespace == Ns::Html && is_heading(&open.name) {
                return true;
            }
            if bounds_scope(Scope::Default, &open.name, open.namespace) {
                return false;
            }
        }
        false
    }

    fn generate_implied_end_tags(&mut self, location: Location, except: Option<&str>) {
        while let Some(top) = self.stack.last() {
            if top.namespace == Ns::Html
                && has_implied_end_tag(&top.name)
                && Some(top.name.as_str()) != except
            {
                self.pop(location);
            } else {
                break;
            }
        }
    }

    /// Close a `p` element per the specification's "close a p element".
    fn close_p(&mut self, location: Location) {
        self.generate_implied_end_tags(location, Some("p"));
        if self.stack.last().map(|open| open.name.as_str()) != Some("p") {
            self.misnested(location, "p");
        }
        self.pop_until_html(location, "p");
    }

    // ------------------------------------------------------------------
    // active formatting list

    fn push_formatting(&mut self, id: usize, name: &str, attributes: Vec<(String, String)>) {
        // the Noah's Ark clause: at most three identical entries since the
        // last marker
        let mut identical = Vec::new();
        for (index, entry) in self.formatting.iter().enumerate().rev() {
            match entry {
                FormatEntry::Marker => break,
                FormatEntry::Element {
                    name: n,
                    attributes: a,
                    ..
                } if n == name && *a == attributes => identical.push(index),
                FormatEntry::Element { .. } => (),
            }
        }
        if identical.len() >= 3 {
            let earliest = *identical.last().expect("three entries at least");
            self.formatting.remove(earliest);
        }
        self.formatting.push(FormatEntry::Element {
            id,
            name: name.to_owned(),
            attributes,
        });
    }

    fn in_open_stack(&self, id: usize) -> bool {
        self.stack.iter().any(|open| open.id == id)
    }

    /// Reconstruct the active formatting elements, re-emitting StartElement
    /// signals for entries whose elements have been closed.
    fn reconstruct_formatting(&mut self, location: Location) {
        let needs_work = match self.formatting.last() {
            None | Some(FormatEntry::Marker) => false,
            Some(FormatEntry::Element { id, .. }) => !self.in_open_stack(*id),
        };
        if !needs_work {
            return;
        }
        let mut index = self.formatting.len() - 1;
        loop {
            if index == 0 {
                break;
            }
            match &self.formatting[index - 1] {
                FormatEntry::Marker => break,
                FormatEntry::Element { id, .. } if self.in_open_stack(*id) => break,
                FormatEntry::Element { .. } => index -= 1,
            }
        }
        while index < self.formatting.len() {
            let (name, attributes) = match &self.formatting[index] {
                FormatEntry::Element {
                    name, attributes, ..
                } => (name.clone(), attributes.clone()),
                FormatEntry::Marker => unreachable!("markers bound the walk"),
            };
            let id = self.insert_html(location, &name, attributes.clone());
            self.formatting[index] = FormatEntry::Element {
                id,
                name,
                attributes,
            };
            index += 1;
        }
    }

    fn clear_formatting_to_marker(&mut self) {
        while let Some(entry) = self.formatting.pop() {
            if matches!(entry, FormatEntry::Marker) {
                break;
            }
        }
    }

    /// The adoption agency, restated for stream output: emit the
    /// EndElement signals the reconstruction implies, and leave
    /// still-open formatting entries in the list so the next insertion
    /// reopens them.
    fn adoption_agency(&mut self, location: Location, name: &str) {
        // fast path: current node is the element and it is not listed
        if let Some(top) = self.stack.last() {
            if top.namespace == Ns::Html && top.name == name && !self.formatting_has_id(top.id) {
                self.pop(location);
                return;
            }
        }

        let entry_index = match self.formatting_index_after_marker(name) {
            Some(index) => index,
            None => {
                self.any_other_end_tag(location, name);
                return;
            }
        };
        let entry_id = match &self.formatting[entry_index] {
            FormatEntry::Element { id, .. } => *id,
            FormatEntry::Marker => unreachable!(),
        };

        if !self.in_open_stack(entry_id) {
            self.report(
                location,
                Error::UnmatchedEndTag { name: name.into() },
            );
            self.formatting.remove(entry_index);
            return;
        }
        if !self.has_in_scope(Scope::Default, name) {
            self.report(
                location,
                Error::UnmatchedEndTag { name: name.into() },
            );
            return;
        }
        if self.stack.last().map(|open| open.id) != Some(entry_id) {
            self.misnested(location, name);
        }

        // unwind everything above the formatting element; formatting
        // entries among the popped elements stay listed and reopen on the
        // next reconstruction
        while let Some(top) = self.stack.last() {
            if top.id == entry_id {
                break;
            }
            self.pop(location);
        }
        self.pop(location);
        self.formatting.remove(entry_index);
    }

    fn formatting_has_id(&self, id: usize) -> bool {
        self.formatting
            .iter()
            .any(|entry| matches!(entry, FormatEntry::Element { id: i, .. } if *i == id))
    }

    /// Index of the last formatting entry with this name, bounded by the
    /// last scope marker.
    fn formatting_index_after_marker(&self, name: &str) -> Option<usize> {
        for (index, entry) in self.formatting.iter().enumerate().rev() {
            match entry {
                FormatEntry::Marker => return None,
                FormatEntry::Element { name: n, .. } if n == name => return Some(index),
                FormatEntry::Element { .. } => (),
            }
        }
        None
    }

    fn any_other_end_tag(&mut self, location: Location, name: &str) {
        for index in (0..self.stack.len()).rev() {
            let open = &self.stack[index];
            if open.namespace == Ns::Html && open.name == name {
                self.generate_implied_end_tags(location, Some(name));
                if self.stack.last().map(|o| o.name.as_str()) != Some(name) {
                    self.misnested(location, name);
                }
                while self.stack.len() > index {
                    self.pop(location);
                }
                return;
            }
            if is_special(&open.name) && open.namespace == Ns::Html {
                self.report(
                    location,
                    Error::UnmatchedEndTag { name: name.into() },
                );
                return;
            }
        }
        self.report(location, Error::UnmatchedEndTag { name: name.into() });
    }

    // ------------------------------------------------------------------
    // raw text and foreign insertion

    fn parse_raw_text(&mut self, location: Location, tag: TagToken, state: State) {
        self.insert_html(location, &tag.name.clone(), tag.attributes);
        self.tokenizer.set_state(state);
        self.tokenizer.set_last_start_tag(&tag.name);
        self.original_mode = Some(self.mode);
        self.switch_mode(Mode::Text);
    }

    fn insert_foreign(&mut self, location: Location, tag: TagToken, namespace: Ns) {
        let name = if namespace == Ns::Svg {
            adjust_svg_tag_name(&tag.name).to_owned()
        } else {
            tag.name.clone()
        };
        let mut attributes = Vec::with_capacity(tag.attributes.len());
        for (attr_name, value) in &tag.attributes {
            let adjusted = if namespace == Ns::Svg {
                adjust_svg_attribute(attr_name).to_owned()
            } else if namespace == Ns::MathMl && attr_name == "definitionurl" {
                "definitionURL".to_owned()
            } else {
                attr_name.clone()
            };
            let attribute_name = match adjust_foreign_attribute(&adjusted) {
                Some((uri, local)) => Name::in_ns(uri, local),
                None => Name::local(adjusted),
            };
            attributes.push(Attribute {
                name: attribute_name,
                value: value.clone(),
            });
        }
        self.signal(
            location,
            Signal::StartElement {
                name: Name::in_ns(namespace.uri(), &name),
                attributes,
            },
        );
        if tag.self_closing {
            self.signal(location, Signal::EndElement);
            return;
        }
        let id = self.fresh_id();
        self.stack.push(Open {
            id,
            name: name.clone(),
            namespace,
            synthetic: false,
            text_integration: is_mathml_text_integration_point(&name, namespace),
            html_integration: is_svg_html_integration_point(&name, namespace)
                || (namespace == Ns::MathMl
                    && name == "annotation-xml"
                    && annotation_xml_is_integration_point(&tag.attributes)),
            annotation_xml: namespace == Ns::MathMl && name == "annotation-xml",
        });
    }

    fn foreign_content(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(text) => {
                let mut cleaned = String::with_capacity(text.len());
                for c in text.chars() {
                    if c == '\0' {
                        self.report(
                            location,
                            Error::BadToken {
                                token: "\\0".into(),
                                place: "text".into(),
                                suggestion: "null characters are not allowed".into(),
                            },
                        );
                        cleaned.push('\u{fffd}');
                    } else {
                        cleaned.push(c);
                    }
                }
                if !cleaned.chars().all(is_html_whitespace) {
                    self.frameset_ok = false;
                }
                self.emit_text(location, cleaned);
            }
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Doctype(_) => {
                self.report(
                    location,
                    Error::BadDocument {
                        detail: "doctype not allowed here".into(),
                    },
                );
            }
            HtmlToken::StartTag(tag) => {
                if breaks_out_of_foreign(&tag.name, &tag.attributes) {
                    self.misnested(location, &tag.name);
                    while let Some(top) = self.stack.last() {
                        if top.namespace == Ns::Html
                            || top.text_integration
                            || top.html_integration
                        {
                            break;
                        }
                        self.pop(location);
                    }
                    // reprocess via the insertion mode, not the foreign
                    // dispatch: in the fragment case the context element
                    // stays foreign and would loop
                    self.process(location, HtmlToken::StartTag(tag));
                    return;
                }
                let namespace = self
                    .adjusted_current_node()
                    .map(|node| node.namespace)
                    .unwrap_or(Ns::Html);
                self.insert_foreign(location, tag, namespace);
            }
            HtmlToken::EndTag(tag) => {
                let matches_current = self
                    .stack
                    .last()
                    .is_some_and(|top| top.name.to_ascii_lowercase() == tag.name);
                if !matches_current {
                    self.misnested(location, &tag.name);
                }
                let mut html_rules = false;
                let mut pop_to = None;
                for index in (0..self.stack.len()).rev() {
                    let open = &self.stack[index];
                    if open.namespace == Ns::Html {
                        html_rules = true;
                        break;
                    }
                    if open.name.to_ascii_lowercase() == tag.name {
                        pop_to = Some(index);
                        break;
                    }
                }
                if let Some(index) = pop_to {
                    while self.stack.len() > index {
                        self.pop(location);
                    }
                } else if html_rules {
                    self.process(location, HtmlToken::EndTag(tag));
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // end of input

    fn handle_eof(&mut self, location: Location) {
        if let Some((text_location, text)) = self.pending_table_text.take() {
            if !text.chars().all(is_html_whitespace) {
                self.report(
                    text_location,
                    Error::BadContent {
                        place: "table".into(),
                    },
                );
            }
            self.emit_text(text_location, text);
        }
        while !self.stack.is_empty() {
            self.pop(location);
        }
        trace!("parse done");
        self.done = true;
    }

    // ------------------------------------------------------------------
    // insertion modes

    /// Split a character run: whitespace prefix (ignored or inserted by
    /// the caller), then the remainder for the anything-else path.
    fn split_whitespace(text: &str) -> (&str, &str) {
        let split = text
            .find(|c| !is_html_whitespace(c))
            .unwrap_or(text.len());
        text.split_at(split)
    }

    fn mode_initial(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(text) => {
                let (_, rest) = Self::split_whitespace(&text);
                if rest.is_empty() {
                    return;
                }
                let rest = rest.to_owned();
                self.switch_mode(Mode::BeforeHtml);
                self.quirks = true;
                self.process(location, HtmlToken::Chars(rest));
            }
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Doctype(doctype) => {
                let DoctypeToken {
                    name,
                    public_id,
                    system_id,
                    force_quirks,
                } = doctype;
                let quirky = force_quirks
                    || doctype_is_quirky(name.as_deref(), public_id.as_deref(), system_id.as_deref());
                self.quirks = quirky;
                self.signal(
                    location,
                    Signal::Doctype(Doctype {
                        name,
                        public_id,
                        system_id,
                        raw: None,
                        force_quirks: quirky,
                    }),
                );
                self.switch_mode(Mode::BeforeHtml);
            }
            token => {
                self.quirks = true;
                self.switch_mode(Mode::BeforeHtml);
                self.process(location, token);
            }
        }
    }

    fn mode_before_html(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Chars(text) => {
                let (_, rest) = Self::split_whitespace(&text);
                if rest.is_empty() {
                    return;
                }
                let rest = rest.to_owned();
                self.insert_html(location, "html", Vec::new());
                self.switch_mode(Mode::BeforeHead);
                self.process(location, HtmlToken::Chars(rest));
            }
            HtmlToken::StartTag(tag) if tag.name == "html" => {
                self.insert_html(location, "html", tag.attributes);
                self.switch_mode(Mode::BeforeHead);
            }
            HtmlToken::EndTag(tag)
                if !matches!(tag.name.as_str(), "head" | "body" | "html" | "br") =>
            {
                self.report(location, Error::UnmatchedEndTag { name: tag.name });
            }
            token => {
                self.insert_html(location, "html", Vec::new());
                self.switch_mode(Mode::BeforeHead);
                self.process(location, token);
            }
        }
    }

    fn mode_before_head(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(text) => {
                let (_, rest) = Self::split_whitespace(&text);
                if rest.is_empty() {
                    return;
                }
                let rest = rest.to_owned();
                self.insert_html(location, "head", Vec::new());
                self.head_seen = true;
                self.switch_mode(Mode::InHead);
                self.process(location, HtmlToken::Chars(rest));
            }
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            HtmlToken::StartTag(tag) if tag.name == "html" => {
                self.in_body_html_start(location, tag);
            }
            HtmlToken::StartTag(tag) if tag.name == "head" => {
                self.insert_html(location, "head", tag.attributes);
                self.head_seen = true;
                self.switch_mode(Mode::InHead);
            }
            HtmlToken::EndTag(tag)
                if !matches!(tag.name.as_str(), "head" | "body" | "html" | "br") =>
            {
                self.report(location, Error::UnmatchedEndTag { name: tag.name });
            }
            token => {
                self.insert_html(location, "head", Vec::new());
                self.head_seen = true;
                self.switch_mode(Mode::InHead);
                self.process(location, token);
            }
        }
    }

    fn mode_in_head(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(text) => {
                let (space, rest) = Self::split_whitespace(&text);
                if !space.is_empty() {
                    let space = space.to_owned();
                    self.emit_text(location, space);
                }
                if rest.is_empty() {
                    return;
                }
                let rest = rest.to_owned();
                self.pop(location); // head
                self.switch_mode(Mode::AfterHead);
                self.process(location, HtmlToken::Chars(rest));
            }
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            HtmlToken::StartTag(tag) => match tag.name.as_str() {
                "html" => self.in_body_html_start(location, tag),
                "base" | "basefont" | "bgsound" | "link" | "meta" => {
                    self.insert_void(location, &tag.name.clone(), tag.attributes);
                }
                "title" => self.parse_raw_text(location, tag, State::RcData),
                "noscript" => {
                    // scripting is off, so noscript content is real markup
                    self.insert_html(location, "noscript", tag.attributes);
                    self.switch_mode(Mode::InHeadNoscript);
                }
                "noframes" | "style" => self.parse_raw_text(location, tag, State::RawText),
                "script" => self.parse_raw_text(location, tag, State::ScriptData),
                "template" => {
                    self.insert_html(location, "template", tag.attributes);
                    self.formatting.push(FormatEntry::Marker);
                    self.frameset_ok = false;
                    self.switch_mode(Mode::InTemplate);
                    self.template_modes.push(Mode::InTemplate);
                }
                "head" => self.misnested(location, "head"),
                _ => {
                    self.pop(location); // head
                    self.switch_mode(Mode::AfterHead);
                    self.process(location, HtmlToken::StartTag(tag));
                }
            },
            HtmlToken::EndTag(tag) => match tag.name.as_str() {
                "head" => {
                    self.pop(location);
                    self.switch_mode(Mode::AfterHead);
                }
                "template" => self.end_template(location),
                "body" | "html" | "br" => {
                    self.pop(location); // head
                    self.switch_mode(Mode::AfterHead);
                    self.process(location, HtmlToken::EndTag(tag));
                }
                _ => self.report(location, Error::UnmatchedEndTag { name: tag.name }),
            },
        }
    }

    fn mode_in_head_noscript(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            HtmlToken::Comment(_) => self.mode_in_head(location, token),
            HtmlToken::Chars(ref text)
                if text.chars().all(is_html_whitespace) =>
            {
                self.mode_in_head(location, token);
            }
            HtmlToken::StartTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "basefont" | "bgsound" | "link" | "meta" | "noframes" | "style"
                ) =>
            {
                self.mode_in_head(location, token);
            }
            HtmlToken::StartTag(ref tag) if tag.name == "html" => {
                self.mode_in_head(location, token);
            }
            HtmlToken::EndTag(tag) if tag.name == "noscript" => {
                self.pop(location);
                self.switch_mode(Mode::InHead);
            }
            HtmlToken::StartTag(tag)
                if matches!(tag.name.as_str(), "head" | "noscript") =>
            {
                self.misnested(location, &tag.name);
            }
            HtmlToken::EndTag(tag) if tag.name != "br" => {
                self.report(location, Error::UnmatchedEndTag { name: tag.name });
            }
            token => {
                let what = match &token {
                    HtmlToken::StartTag(tag) => tag.name.clone(),
                    _ => "noscript".to_owned(),
                };
                self.misnested(location, &what);
                self.pop(location); // noscript
                self.switch_mode(Mode::InHead);
                self.process(location, token);
            }
        }
    }

    fn mode_after_head(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(text) => {
                let (space, rest) = Self::split_whitespace(&text);
                if !space.is_empty() {
                    let space = space.to_owned();
                    self.emit_text(location, space);
                }
                if rest.is_empty() {
                    return;
                }
                let rest = rest.to_owned();
                self.insert_html(location, "body", Vec::new());
                self.switch_mode(Mode::InBody);
                self.process(location, HtmlToken::Chars(rest));
            }
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            HtmlToken::StartTag(tag) => match tag.name.as_str() {
                "html" => self.in_body_html_start(location, tag),
                "body" => {
                    self.insert_html(location, "body", tag.attributes);
                    self.frameset_ok = false;
                    self.switch_mode(Mode::InBody);
                }
                "frameset" => {
                    self.insert_html(location, "frameset", tag.attributes);
                    self.switch_mode(Mode::InFrameset);
                }
                "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes" | "script"
                | "style" | "template" | "title" => {
                    self.report(
                        location,
                        Error::MisnestedTag {
                            what: tag.name.clone(),
                            place: "head".into(),
                        },
                    );
                    self.mode_in_head(location, HtmlToken::StartTag(tag));
                }
                "head" => self.misnested(location, "head"),
                _ => {
                    self.insert_html(location, "body", Vec::new());
                    self.switch_mode(Mode::InBody);
                    self.process(location, HtmlToken::StartTag(tag));
                }
            },
            HtmlToken::EndTag(tag) => match tag.name.as_str() {
                "template" => self.end_template(location),
                "body" | "html" | "br" => {
                    self.insert_html(location, "body", Vec::new());
                    self.switch_mode(Mode::InBody);
                    self.process(location, HtmlToken::EndTag(tag));
                }
                _ => self.report(location, Error::UnmatchedEndTag { name: tag.name }),
            },
        }
    }

    /// `<html>` anywhere after the first: merging attributes onto an
    /// already-emitted element is impossible in a stream, so report and
    /// drop.
    fn in_body_html_start(&mut self, location: Location, tag: TagToken) {
        let _ = tag;
        self.misnested(location, "html");
    }

    #[allow(clippy::too_many_lines)]
    fn mode_in_body(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(text) => {
                let mut cleaned = String::with_capacity(text.len());
                for c in text.chars() {
                    if c == '\0' {
                        self.report(
                            location,
                            Error::BadToken {
                                token: "\\0".into(),
                                place: "text".into(),
                                suggestion: "null characters are not allowed".into(),
                            },
                        );
                    } else {
                        cleaned.push(c);
                    }
                }
                if cleaned.is_empty() {
                    return;
                }
                self.reconstruct_formatting(location);
                if !cleaned.chars().all(is_html_whitespace) {
                    self.frameset_ok = false;
                }
                self.emit_text(location, cleaned);
            }
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            HtmlToken::StartTag(tag) => self.in_body_start_tag(location, tag),
            HtmlToken::EndTag(tag) => self.in_body_end_tag(location, tag),
        }
    }

    #[allow(clippy::too_many_lines)]
    fn in_body_start_tag(&mut self, location: Location, tag: TagToken) {
        match tag.name.as_str() {
            "html" => self.in_body_html_start(location, tag),
            "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes" | "script"
            | "style" | "template" | "title" => {
                self.mode_in_head_delegate(location, HtmlToken::StartTag(tag));
            }
            "body" => {
                self.misnested(location, "body");
                self.frameset_ok = false;
            }
            "frameset" => {
                // replacing an emitted body is impossible in a stream
                self.misnested(location, "frameset");
            }
            "address" | "article" | "aside" | "blockquote" | "center" | "details" | "dialog"
            | "dir" | "div" | "dl" | "fieldset" | "figcaption" | "figure" | "footer" | "header"
            | "hgroup" | "main" | "menu" | "nav" | "ol" | "p" | "search" | "section"
            | "summary" | "ul" => {
                if self.has_in_scope(Scope::Button, "p") {
                    self.close_p(location);
                }
                self.insert_html(location, &tag.name.clone(), tag.attributes);
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                if self.has_in_scope(Scope::Button, "p") {
                    self.close_p(location);
                }
                if self
                    .stack
                    .last()
                    .is_some_and(|top| is_heading(&top.name) && top.namespace == Ns::Html)
                {
                    self.misnested(location, &tag.name);
                    self.pop(location);
                }
                self.insert_html(location, &tag.name.clone(), tag.attributes);
            }
            "pre" | "listing" => {
                if self.has_in_scope(Scope::Button, "p") {
                    self.close_p(location);
                }
                self.insert_html(location, &tag.name.clone(), tag.attributes);
                self.ignore_next_lf = true;
                self.frameset_ok = false;
            }
            "form" => {
                if self.form_seen && self.template_modes.is_empty() {
                    self.misnested(location, "form");
                    return;
                }
                if self.has_in_scope(Scope::Button, "p") {
                    self.close_p(location);
                }
                self.insert_html(location, "form", tag.attributes);
                self.form_seen = true;
            }
            "li" => {
                self.frameset_ok = false;
                for index in (0..self.stack.len()).rev() {
                    let name = self.stack[index].name.clone();
                    if name == "li" {
                        self.generate_implied_end_tags(location, Some("li"));
                        if self.stack.last().map(|o| o.name.as_str()) != Some("li") {
                            self.misnested(location, "li");
                        }
                        self.pop_until_html(location, "li");
                        break;
                    }
                    if is_special(&name) && !matches!(name.as_str(), "address" | "div" | "p") {
                        break;
                    }
                }
                if self.has_in_scope(Scope::Button, "p") {
                    self.close_p(location);
                }
                self.insert_html(location, "li", tag.attributes);
            }
            "dd" | "dt" => {
                self.frameset_ok = false;
                for index in (0..self.stack.len()).rev() {
                    let name = self.stack[index].name.clone();
                    if name == "dd" || name == "dt" {
                        self.generate_implied_end_tags(location, Some(&name));
                        if self.stack.last().map(|o| o.name.as_str()) != Some(name.as_str()) {
                            self.misnested(location, &tag.name);
                        }
                        self.pop_until_html(location, &name);
                        break;
                    }
                    if is_special(&name) && !matches!(name.as_str(), "address" | "div" | "p") {
                        break;
                    }
                }
                if self.has_in_scope(Scope::Button, "p") {
                    self.close_p(location);
                }
                self.insert_html(location, &tag.name.clone(), tag.attributes);
            }
            "plaintext" => {
                if self.has_in_scope(Scope::Button, "p") {
                    self.close_p(location);
                }
                self.insert_html(location, "plaintext", tag.attributes);
                self.tokenizer.set_state(State::PlainText);
            }
            "button" => {
                if self.has_in_scope(Scope::Default, "button") {
                    self.misnested(location, "button");
                    self.generate_implied_end_tags(location, None);
                    self.pop_until_html(location, "button");
                }
                self.reconstruct_formatting(location);
                self.insert_html(location, "button", tag.attributes);
                self.frameset_ok = false;
            }
            "a" => {
                let has_a = self
                    .formatting
                    .iter()
                    .rev()
                    .take_while(|entry| !matches!(entry, FormatEntry::Marker))
                    .any(|entry| matches!(entry, FormatEntry::Element { name, .. } if name == "a"));
                if has_a {
                    self.misnested(location, "a");
                    self.adoption_agency(location, "a");
                    if let Some(index) = self.formatting_index_after_marker("a") {
                        self.formatting.remove(index);
                    }
                }
                self.reconstruct_formatting(location);
                let attributes = tag.attributes.clone();
                let id = self.insert_html(location, "a", tag.attributes);
                self.push_formatting(id, "a", attributes);
            }
            "b" | "big" | "code" | "em" | "font" | "i" | "s" | "small" | "strike" | "strong"
            | "tt" | "u" => {
                self.reconstruct_formatting(location);
                let name = tag.name.clone();
                let attributes = tag.attributes.clone();
                let id = self.insert_html(location, &name, tag.attributes);
                self.push_formatting(id, &name, attributes);
            }
            "nobr" => {
                self.reconstruct_formatting(location);
                if self.has_in_scope(Scope::Default, "nobr") {
                    self.misnested(location, "nobr");
                    self.adoption_agency(location, "nobr");
                    self.reconstruct_formatting(location);
                }
                let attributes = tag.attributes.clone();
                let id = self.insert_html(location, "nobr", tag.attributes);
                self.push_formatting(id, "nobr", attributes);
            }
            "applet" | "marquee" | "object" => {
                self.reconstruct_formatting(location);
                self.insert_html(location, &tag.name.clone(), tag.attributes);
                self.formatting.push(FormatEntry::Marker);
                self.frameset_ok = false;
            }
            "table" => {
                if !self.quirks && self.has_in_scope(Scope::Button, "p") {
                    self.close_p(location);
                }
                self.insert_html(location, "table", tag.attributes);
                self.frameset_ok = false;
                self.switch_mode(Mode::InTable);
            }
            "area" | "br" | "embed" | "img" | "keygen" | "wbr" => {
                self.reconstruct_formatting(location);
                self.insert_void(location, &tag.name.clone(), tag.attributes);
                self.frameset_ok = false;
            }
            "input" => {
                self.reconstruct_formatting(location);
                let hidden = tag
                    .attributes
                    .iter()
                    .any(|(n, v)| n == "type" && v.eq_ignore_ascii_case("hidden"));
                self.insert_void(location, "input", tag.attributes);
                if !hidden {
                    self.frameset_ok = false;
                }
            }
            "param" | "source" | "track" => {
                self.insert_void(location, &tag.name.clone(), tag.attributes);
            }
            "hr" => {
                if self.has_in_scope(Scope::Button, "p") {
                    self.close_p(location);
                }
                self.insert_void(location, "hr", tag.attributes);
                self.frameset_ok = false;
            }
            "image" => {
                self.report(
                    location,
                    Error::BadToken {
                        token: "image".into(),
                        place: "tag".into(),
                        suggestion: "use 'img'".into(),
                    },
                );
                let mut tag = tag;
                tag.name = "img".into();
                self.in_body_start_tag(location, tag);
            }
            "textarea" => {
                self.ignore_next_lf = true;
                self.frameset_ok = false;
                self.parse_raw_text(location, tag, State::RcData);
            }
            "xmp" => {
                if self.has_in_scope(Scope::Button, "p") {
                    self.close_p(location);
                }
                self.reconstruct_formatting(location);
                self.frameset_ok = false;
                self.parse_raw_text(location, tag, State::RawText);
            }
            "iframe" => {
                self.frameset_ok = false;
                self.parse_raw_text(location, tag, State::RawText);
            }
            "noembed" => self.parse_raw_text(location, tag, State::RawText),
            "select" => {
                self.reconstruct_formatting(location);
                self.insert_html(location, "select", tag.attributes);
                self.frameset_ok = false;
                let mode = match self.mode {
                    Mode::InTable
                    | Mode::InCaption
                    | Mode::InTableBody
                    | Mode::InRow
                    | Mode::InCell => Mode::InSelectInTable,
                    _ => Mode::InSelect,
                };
                self.switch_mode(mode);
            }
            "optgroup" | "option" => {
                if self.stack.last().map(|o| o.name.as_str()) == Some("option") {
                    self.pop(location);
                }
                self.reconstruct_formatting(location);
                self.insert_html(location, &tag.name.clone(), tag.attributes);
            }
            "rb" | "rtc" => {
                if self.has_in_scope(Scope::Default, "ruby") {
                    self.generate_implied_end_tags(location, None);
                }
                self.insert_html(location, &tag.name.clone(), tag.attributes);
            }
            "rp" | "rt" => {
                if self.has_in_scope(Scope::Default, "ruby") {
                    self.generate_implied_end_tags(location, Some("rtc"));
                }
                self.insert_html(location, &tag.name.clone(), tag.attributes);
            }
            "math" => {
                self.reconstruct_formatting(location);
                self.insert_foreign(location, tag, Ns::MathMl);
            }
            "svg" => {
                self.reconstruct_formatting(location);
                self.insert_foreign(location, tag, Ns::Svg);
            }
            "caption" | "col" | "colgroup" | "frame" | "head" | "tbody" | "td" | "tfoot"
            | "th" | "thead" | "tr" => {
                self.misnested(location, &tag.name);
            }
            _ => {
                self.reconstruct_formatting(location);
                self.insert_html(location, &tag.name.clone(), tag.attributes);
            }
        }
    }

    fn in_body_end_tag(&mut self, location: Location, tag: TagToken) {
        match tag.name.as_str() {
            "body" => {
                if !self.has_in_scope(Scope::Default, "body") && !self.fragment {
                    self.report(location, Error::UnmatchedEndTag { name: "body".into() });
                    return;
                }
                self.switch_mode(Mode::AfterBody);
            }
            "html" => {
                if !self.has_in_scope(Scope::Default, "body") && !self.fragment {
                    self.report(location, Error::UnmatchedEndTag { name: "html".into() });
                    return;
                }
                self.switch_mode(Mode::AfterBody);
                self.process(location, HtmlToken::EndTag(tag));
            }
            "address" | "article" | "aside" | "blockquote" | "button" | "center" | "details"
            | "dialog" | "dir" | "div" | "dl" | "fieldset" | "figcaption" | "figure"
            | "footer" | "header" | "hgroup" | "listing" | "main" | "menu" | "nav" | "ol"
            | "pre" | "search" | "section" | "summary" | "ul" => {
                if !self.has_in_scope(Scope::Default, &tag.name) {
                    self.report(location, Error::UnmatchedEndTag { name: tag.name });
                    return;
                }
                self.generate_implied_end_tags(location, None);
                if self.stack.last().map(|o| o.name.as_str()) != Some(tag.name.as_str()) {
                    self.misnested(location, &tag.name);
                }
                self.pop_until_html(location, &tag.name);
            }
            "form" => {
                self.form_seen = false;
                if !self.has_in_scope(Scope::Default, "form") {
                    self.report(location, Error::UnmatchedEndTag { name: "form".into() });
                    return;
                }
                self.generate_implied_end_tags(location, None);
                if self.stack.last().map(|o| o.name.as_str()) != Some("form") {
                    self.misnested(location, "form");
                }
                self.pop_until_html(location, "form");
            }
            "p" => {
                if !self.has_in_scope(Scope::Button, "p") {
                    self.report(location, Error::UnmatchedEndTag { name: "p".into() });
                    // the specification inserts an empty p and closes it
                    self.insert_void(location, "p", Vec::new());
                    return;
                }
                self.close_p(location);
            }
            "li" => {
                if !self.has_in_scope(Scope::ListItem, "li") {
                    self.report(location, Error::UnmatchedEndTag { name: "li".into() });
                    return;
                }
                self.generate_implied_end_tags(location, Some("li"));
                if self.stack.last().map(|o| o.name.as_str()) != Some("li") {
                    self.misnested(location, "li");
                }
                self.pop_until_html(location, "li");
            }
            "dd" | "dt" => {
                if !self.has_in_scope(Scope::Default, &tag.name) {
                    self.report(location, Error::UnmatchedEndTag { name: tag.name });
                    return;
                }
                self.generate_implied_end_tags(location, Some(&tag.name));
                if self.stack.last().map(|o| o.name.as_str()) != Some(tag.name.as_str()) {
                    self.misnested(location, &tag.name);
                }
                self.pop_until_html(location, &tag.name);
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                if !self.has_heading_in_scope() {
                    self.report(location, Error::UnmatchedEndTag { name: tag.name });
                    return;
                }
                self.generate_implied_end_tags(location, None);
                if self.stack.last().map(|o| o.name.as_str()) != Some(tag.name.as_str()) {
                    self.misnested(location, &tag.name);
                }
                while let Some(top) = self.stack.last() {
                    let found = top.namespace == Ns::Html && is_heading(&top.name);
                    self.pop(location);
                    if found {
                        break;
                    }
                }
            }
            name if is_formatting(name) => {
                let name = name.to_owned();
                self.adoption_agency(location, &name);
            }
            "applet" | "marquee" | "object" => {
                if !self.has_in_scope(Scope::Default, &tag.name) {
                    self.report(location, Error::UnmatchedEndTag { name: tag.name });
                    return;
                }
                self.generate_implied_end_tags(location, None);
                if self.stack.last().map(|o| o.name.as_str()) != Some(tag.name.as_str()) {
                    self.misnested(location, &tag.name);
                }
                self.pop_until_html(location, &tag.name);
                self.clear_formatting_to_marker();
            }
            "br" => {
                self.report(
                    location,
                    Error::BadToken {
                        token: "</br>".into(),
                        place: "tag".into(),
                        suggestion: "use '<br>'".into(),
                    },
                );
                self.reconstruct_formatting(location);
                self.insert_void(location, "br", Vec::new());
                self.frameset_ok = false;
            }
            "template" => self.end_template(location),
            _ => self.any_other_end_tag(location, &tag.name),
        }
    }

    /// Delegate to the in-head rules. Only tokens with explicit in-head
    /// arms are delegated, so the anything-else path (which closes the
    /// head) can never run for them.
    fn mode_in_head_delegate(&mut self, location: Location, token: HtmlToken) {
        self.mode_in_head(location, token);
    }

    fn end_template(&mut self, location: Location) {
        if !self
            .stack
            .iter()
            .any(|open| open.name == "template" && open.namespace == Ns::Html)
        {
            self.report(
                location,
                Error::UnmatchedEndTag {
                    name: "template".into(),
                },
            );
            return;
        }
        self.generate_implied_end_tags(location, None);
        if self.stack.last().map(|o| o.name.as_str()) != Some("template") {
            self.misnested(location, "template");
        }
        self.pop_until_html(location, "template");
        self.clear_formatting_to_marker();
        self.template_modes.pop();
        self.reset_insertion_mode();
    }

    fn mode_text(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(text) => self.emit_text(location, text),
            HtmlToken::EndTag(_) => {
                // in a fragment whose context element is the raw-text
                // element itself, nothing was pushed for it
                if self.stack.last().is_some_and(|open| !open.synthetic) {
                    self.pop(location);
                }
                let mode = self.original_mode.take().unwrap_or(Mode::InBody);
                self.switch_mode(mode);
            }
            token => {
                // the tokenizer only produces chars and the matching end
                // tag in these states; EOF is handled upstream
                debug_assert!(false, "unexpected token in text mode: {token:?}");
                let _ = token;
            }
        }
    }

    // ------------------------------------------------------------------
    // table modes

    fn clear_stack_to_table_context(&mut self, location: Location) {
        while let Some(top) = self.stack.last() {
            if top.namespace == Ns::Html
                && matches!(top.name.as_str(), "table" | "template" | "html")
            {
                break;
            }
            self.pop(location);
        }
    }

    fn clear_stack_to_table_body_context(&mut self, location: Location) {
        while let Some(top) = self.stack.last() {
            if top.namespace == Ns::Html
                && matches!(
                    top.name.as_str(),
                    "tbody" | "tfoot" | "thead" | "template" | "html"
                )
            {
                break;
            }
            self.pop(location);
        }
    }

    fn clear_stack_to_table_row_context(&mut self, location: Location) {
        while let Some(top) = self.stack.last() {
            if top.namespace == Ns::Html && matches!(top.name.as_str(), "tr" | "template" | "html")
            {
                break;
            }
            self.pop(location);
        }
    }

    fn reset_insertion_mode(&mut self) {
        let mut new_mode = Mode::InBody;
        for (index, open) in self.stack.iter().enumerate().rev() {
            let last = index == 0;
            let name = if last && self.fragment {
                self.context_element
                    .as_ref()
                    .map(|c| c.name.as_str())
                    .unwrap_or(open.name.as_str())
            } else {
                open.name.as_str()
            };
            let mode = match name {
                "select" => Some(Mode::InSelect),
                "td" | "th" if !last => Some(Mode::InCell),
                "tr" => Some(Mode::InRow),
                "tbody" | "thead" | "tfoot" => Some(Mode::InTableBody),
                "caption" => Some(Mode::InCaption),
                "colgroup" => Some(Mode::InColumnGroup),
                "table" => Some(Mode::InTable),
                "template" => self.template_modes.last().copied(),
                "head" if !last => Some(Mode::InHead),
                "body" => Some(Mode::InBody),
                "frameset" => Some(Mode::InFrameset),
                "html" => Some(if self.head_seen {
                    Mode::AfterHead
                } else {
                    Mode::BeforeHead
                }),
                _ if last => Some(Mode::InBody),
                _ => None,
            };
            if let Some(mode) = mode {
                new_mode = mode;
                break;
            }
        }
        self.switch_mode(new_mode);
    }

    fn mode_in_table(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(_)
                if self.stack.last().is_some_and(|top| {
                    matches!(
                        top.name.as_str(),
                        "table" | "tbody" | "tfoot" | "thead" | "tr"
                    )
                }) =>
            {
                self.original_mode = Some(self.mode);
                self.switch_mode(Mode::InTableText);
                self.process(location, token);
            }
            HtmlToken::Chars(_) => self.foster_parented_in_body(location, token),
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            HtmlToken::StartTag(tag) => match tag.name.as_str() {
                "caption" => {
                    self.clear_stack_to_table_context(location);
                    self.formatting.push(FormatEntry::Marker);
                    self.insert_html(location, "caption", tag.attributes);
                    self.switch_mode(Mode::InCaption);
                }
                "colgroup" => {
                    self.clear_stack_to_table_context(location);
                    self.insert_html(location, "colgroup", tag.attributes);
                    self.switch_mode(Mode::InColumnGroup);
                }
                "col" => {
                    self.clear_stack_to_table_context(location);
                    self.insert_html(location, "colgroup", Vec::new());
                    self.switch_mode(Mode::InColumnGroup);
                    self.process(location, HtmlToken::StartTag(tag));
                }
                "tbody" | "tfoot" | "thead" => {
                    self.clear_stack_to_table_context(location);
                    self.insert_html(location, &tag.name.clone(), tag.attributes);
                    self.switch_mode(Mode::InTableBody);
                }
                "td" | "th" | "tr" => {
                    self.clear_stack_to_table_context(location);
                    self.insert_html(location, "tbody", Vec::new());
                    self.switch_mode(Mode::InTableBody);
                    self.process(location, HtmlToken::StartTag(tag));
                }
                "table" => {
                    self.misnested(location, "table");
                    if self.has_in_scope(Scope::Table, "table") {
                        self.pop_until_html(location, "table");
                        self.reset_insertion_mode();
                        self.process(location, HtmlToken::StartTag(tag));
                    }
                }
                "style" | "script" | "template" => {
                    self.mode_in_head_delegate(location, HtmlToken::StartTag(tag));
                }
                "input" => {
                    let hidden = tag
                        .attributes
                        .iter()
                        .any(|(n, v)| n == "type" && v.eq_ignore_ascii_case("hidden"));
                    if hidden {
                        self.misnested(location, "input");
                        self.insert_void(location, "input", tag.attributes);
                    } else {
                        self.foster_parented_in_body(location, HtmlToken::StartTag(tag));
                    }
                }
                "form" => {
                    self.misnested(location, "form");
                    if !self.form_seen && self.template_modes.is_empty() {
                        self.insert_html(location, "form", tag.attributes);
                        self.form_seen = true;
                        self.pop(location);
                    }
                }
                _ => self.foster_parented_in_body(location, HtmlToken::StartTag(tag)),
            },
            HtmlToken::EndTag(tag) => match tag.name.as_str() {
                "table" => {
                    if !self.has_in_scope(Scope::Table, "table") {
                        self.report(location, Error::UnmatchedEndTag { name: "table".into() });
                        return;
                    }
                    self.pop_until_html(location, "table");
                    self.reset_insertion_mode();
                }
                "body" | "caption" | "col" | "colgroup" | "html" | "tbody" | "td" | "tfoot"
                | "th" | "thead" | "tr" => {
                    self.report(location, Error::UnmatchedEndTag { name: tag.name });
                }
                "template" => self.end_template(location),
                _ => self.foster_parented_in_body(location, HtmlToken::EndTag(tag)),
            },
        }
    }

    /// Content a table cannot contain. A stream cannot move it before the
    /// table, so it is emitted in place (after reporting when text is
    /// involved; see `mode_in_table_text`).
    fn foster_parented_in_body(&mut self, location: Location, token: HtmlToken) {
        self.mode_in_body(location, token);
    }

    fn mode_in_table_text(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(text) => {
                let mut cleaned = String::with_capacity(text.len());
                for c in text.chars() {
                    if c == '\0' {
                        self.report(
                            location,
                            Error::BadToken {
                                token: "\\0".into(),
                                place: "table".into(),
                                suggestion: "null characters are not allowed".into(),
                            },
                        );
                    } else {
                        cleaned.push(c);
                    }
                }
                match &mut self.pending_table_text {
                    Some((_, pending)) => pending.push_str(&cleaned),
                    None => self.pending_table_text = Some((location, cleaned)),
                }
            }
            token => {
                if let Some((text_location, text)) = self.pending_table_text.take() {
                    if !text.is_empty() {
                        if !text.chars().all(is_html_whitespace) {
                            self.report(
                                text_location,
                                Error::BadContent {
                                    place: "table".into(),
                                },
                            );
                        }
                        self.emit_text(text_location, text);
                    }
                }
                let mode = self.original_mode.take().unwrap_or(Mode::InTable);
                self.switch_mode(mode);
                self.process(location, token);
            }
        }
    }

    fn mode_in_caption(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::EndTag(tag) if tag.name == "caption" => {
                if !self.has_in_scope(Scope::Table, "caption") {
                    self.report(location, Error::UnmatchedEndTag { name: "caption".into() });
                    return;
                }
                self.generate_implied_end_tags(location, None);
                if self.stack.last().map(|o| o.name.as_str()) != Some("caption") {
                    self.misnested(location, "caption");
                }
                self.pop_until_html(location, "caption");
                self.clear_formatting_to_marker();
                self.switch_mode(Mode::InTable);
            }
            HtmlToken::StartTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot" | "th" | "thead"
                        | "tr"
                ) =>
            {
                if self.close_caption(location) {
                    self.process(location, token);
                }
            }
            HtmlToken::EndTag(ref tag) if tag.name == "table" => {
                if self.close_caption(location) {
                    self.process(location, token);
                }
            }
            HtmlToken::EndTag(tag)
                if matches!(
                    tag.name.as_str(),
                    "body" | "col" | "colgroup" | "html" | "tbody" | "td" | "tfoot" | "th"
                        | "thead" | "tr"
                ) =>
            {
                self.report(location, Error::UnmatchedEndTag { name: tag.name });
            }
            token => self.mode_in_body(location, token),
        }
    }

    fn close_caption(&mut self, location: Location) -> bool {
        if !self.has_in_scope(Scope::Table, "caption") {
            self.report(location, Error::UnmatchedEndTag { name: "caption".into() });
            return false;
        }
        self.misnested(location, "caption");
        self.generate_implied_end_tags(location, None);
        self.pop_until_html(location, "caption");
        self.clear_formatting_to_marker();
        self.switch_mode(Mode::InTable);
        true
    }

    fn mode_in_column_group(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(text) => {
                let (space, rest) = Self::split_whitespace(&text);
                if !space.is_empty() {
                    let space = space.to_owned();
                    self.emit_text(location, space);
                }
                if rest.is_empty() {
                    return;
                }
                let rest = rest.to_owned();
                self.close_colgroup_and_reprocess(location, HtmlToken::Chars(rest));
            }
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            HtmlToken::StartTag(tag) => match tag.name.as_str() {
                "html" => self.in_body_html_start(location, tag),
                "col" => self.insert_void(location, "col", tag.attributes),
                "template" => self.mode_in_head_delegate(location, HtmlToken::StartTag(tag)),
                _ => self.close_colgroup_and_reprocess(location, HtmlToken::StartTag(tag)),
            },
            HtmlToken::EndTag(tag) => match tag.name.as_str() {
                "colgroup" => {
                    if self.stack.last().map(|o| o.name.as_str()) != Some("colgroup") {
                        self.report(
                            location,
                            Error::UnmatchedEndTag {
                                name: "colgroup".into(),
                            },
                        );
                        return;
                    }
                    self.pop(location);
                    self.switch_mode(Mode::InTable);
                }
                "col" => {
                    self.report(location, Error::UnmatchedEndTag { name: "col".into() })
                }
                "template" => self.end_template(location),
                _ => self.close_colgroup_and_reprocess(location, HtmlToken::EndTag(tag)),
            },
        }
    }

    fn close_colgroup_and_reprocess(&mut self, location: Location, token: HtmlToken) {
        if self.stack.last().map(|o| o.name.as_str()) != Some("colgroup") {
            self.report(
                location,
                Error::BadContent {
                    place: "colgroup".into(),
                },
            );
            return;
        }
        self.pop(location);
        self.switch_mode(Mode::InTable);
        self.process(location, token);
    }

    fn mode_in_table_body(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::StartTag(tag) if tag.name == "tr" => {
                self.clear_stack_to_table_body_context(location);
                self.insert_html(location, "tr", tag.attributes);
                self.switch_mode(Mode::InRow);
            }
            HtmlToken::StartTag(tag) if matches!(tag.name.as_str(), "td" | "th") => {
                self.misnested(location, &tag.name);
                self.clear_stack_to_table_body_context(location);
                self.insert_html(location, "tr", Vec::new());
                self.switch_mode(Mode::InRow);
                self.process(location, HtmlToken::StartTag(tag));
            }
            HtmlToken::EndTag(tag)
                if matches!(tag.name.as_str(), "tbody" | "tfoot" | "thead") =>
            {
                if !self.has_in_scope(Scope::Table, &tag.name) {
                    self.report(location, Error::UnmatchedEndTag { name: tag.name });
                    return;
                }
                self.clear_stack_to_table_body_context(location);
                self.pop(location);
                self.switch_mode(Mode::InTable);
            }
            HtmlToken::StartTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead"
                ) =>
            {
                self.close_table_body_and_reprocess(location, token);
            }
            HtmlToken::EndTag(ref tag) if tag.name == "table" => {
                self.close_table_body_and_reprocess(location, token);
            }
            HtmlToken::EndTag(tag)
                if matches!(
                    tag.name.as_str(),
                    "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th" | "tr"
                ) =>
            {
                self.report(location, Error::UnmatchedEndTag { name: tag.name });
            }
            token => self.mode_in_table(location, token),
        }
    }

    fn close_table_body_and_reprocess(&mut self, location: Location, token: HtmlToken) {
        let has_section = ["tbody", "thead", "tfoot"]
            .iter()
            .any(|name| self.has_in_scope(Scope::Table, name));
        if !has_section {
            self.report(
                location,
                Error::BadContent {
                    place: "table".into(),
                },
            );
            return;
        }
        self.clear_stack_to_table_body_context(location);
        self.pop(location);
        self.switch_mode(Mode::InTable);
        self.process(location, token);
    }

    fn mode_in_row(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::StartTag(tag) if matches!(tag.name.as_str(), "td" | "th") => {
                self.clear_stack_to_table_row_context(location);
                self.insert_html(location, &tag.name.clone(), tag.attributes);
                self.switch_mode(Mode::InCell);
                self.formatting.push(FormatEntry::Marker);
            }
            HtmlToken::EndTag(tag) if tag.name == "tr" => {
                if !self.has_in_scope(Scope::Table, "tr") {
                    self.report(location, Error::UnmatchedEndTag { name: "tr".into() });
                    return;
                }
                self.clear_stack_to_table_row_context(location);
                self.pop(location);
                self.switch_mode(Mode::InTableBody);
            }
            HtmlToken::StartTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead" | "tr"
                ) =>
            {
                self.close_row_and_reprocess(location, token);
            }
            HtmlToken::EndTag(ref tag)
                if matches!(tag.name.as_str(), "table" | "tbody" | "tfoot" | "thead") =>
            {
                self.close_row_and_reprocess(location, token);
            }
            HtmlToken::EndTag(tag)
                if matches!(
                    tag.name.as_str(),
                    "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th"
                ) =>
            {
                self.report(location, Error::UnmatchedEndTag { name: tag.name });
            }
            token => self.mode_in_table(location, token),
        }
    }

    fn close_row_and_reprocess(&mut self, location: Location, token: HtmlToken) {
        if !self.has_in_scope(Scope::Table, "tr") {
            self.report(location, Error::UnmatchedEndTag { name: "tr".into() });
            return;
        }
        self.clear_stack_to_table_row_context(location);
        self.pop(location);
        self.switch_mode(Mode::InTableBody);
        self.process(location, token);
    }

    fn mode_in_cell(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::EndTag(tag) if matches!(tag.name.as_str(), "td" | "th") => {
                if !self.has_in_scope(Scope::Table, &tag.name) {
                    self.report(location, Error::UnmatchedEndTag { name: tag.name });
                    return;
                }
                self.generate_implied_end_tags(location, None);
                if self.stack.last().map(|o| o.name.as_str()) != Some(tag.name.as_str()) {
                    self.misnested(location, &tag.name);
                }
                self.pop_until_html(location, &tag.name);
                self.clear_formatting_to_marker();
                self.switch_mode(Mode::InRow);
            }
            HtmlToken::StartTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot" | "th" | "thead"
                        | "tr"
                ) =>
            {
                if self.close_cell(location) {
                    self.process(location, token);
                }
            }
            HtmlToken::EndTag(ref tag)
                if matches!(tag.name.as_str(), "table" | "tbody" | "tfoot" | "thead" | "tr") =>
            {
                if self.close_cell(location) {
                    self.process(location, token);
                }
            }
            HtmlToken::EndTag(tag)
                if matches!(tag.name.as_str(), "body" | "caption" | "col" | "colgroup" | "html") =>
            {
                self.report(location, Error::UnmatchedEndTag { name: tag.name });
            }
            token => self.mode_in_body(location, token),
        }
    }

    fn close_cell(&mut self, location: Location) -> bool {
        let cell = ["td", "th"]
            .iter()
            .find(|name| self.has_in_scope(Scope::Table, name))
            .copied();
        let cell = match cell {
            Some(cell) => cell,
            None => {
                self.report(
                    location,
                    Error::BadContent {
                        place: "table".into(),
                    },
                );
                return false;
            }
        };
        self.generate_implied_end_tags(location, None);
        if self.stack.last().map(|o| o.name.as_str()) != Some(cell) {
            self.misnested(location, cell);
        }
        self.pop_until_html(location, cell);
        self.clear_formatting_to_marker();
        self.switch_mode(Mode::InRow);
        true
    }

    // ------------------------------------------------------------------
    // select modes

    fn mode_in_select(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(text) => {
                let mut cleaned = String::with_capacity(text.len());
                for c in text.chars() {
                    if c == '\0' {
                        self.report(
                            location,
                            Error::BadToken {
                                token: "\\0".into(),
                                place: "select".into(),
                                suggestion: "null characters are not allowed".into(),
                            },
                        );
                    } else {
                        cleaned.push(c);
                    }
                }
                self.emit_text(location, cleaned);
            }
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            HtmlToken::StartTag(tag) => match tag.name.as_str() {
                "html" => self.in_body_html_start(location, tag),
                "option" => {
                    if self.stack.last().map(|o| o.name.as_str()) == Some("option") {
                        self.pop(location);
                    }
                    self.insert_html(location, "option", tag.attributes);
                }
                "optgroup" => {
                    if self.stack.last().map(|o| o.name.as_str()) == Some("option") {
                        self.pop(location);
                    }
                    if self.stack.last().map(|o| o.name.as_str()) == Some("optgroup") {
                        self.pop(location);
                    }
                    self.insert_html(location, "optgroup", tag.attributes);
                }
                "select" => {
                    self.misnested(location, "select");
                    if self.has_in_scope(Scope::Select, "select") {
                        self.pop_until_html(location, "select");
                        self.reset_insertion_mode();
                    }
                }
                "input" | "keygen" | "textarea" => {
                    self.misnested(location, &tag.name);
                    if self.has_in_scope(Scope::Select, "select") {
                        self.pop_until_html(location, "select");
                        self.reset_insertion_mode();
                        self.process(location, HtmlToken::StartTag(tag));
                    }
                }
                "script" | "template" => {
                    self.mode_in_head_delegate(location, HtmlToken::StartTag(tag));
                }
                _ => self.report(
                    location,
                    Error::BadContent {
                        place: "select".into(),
                    },
                ),
            },
            HtmlToken::EndTag(tag) => match tag.name.as_str() {
                "optgroup" => {
                    if self.stack.last().map(|o| o.name.as_str()) == Some("option")
                        && self
                            .stack
                            .get(self.stack.len().wrapping_sub(2))
                            .map(|o| o.name.as_str())
                            == Some("optgroup")
                    {
                        self.pop(location);
                    }
                    if self.stack.last().map(|o| o.name.as_str()) == Some("optgroup") {
                        self.pop(location);
                    } else {
                        self.report(
                            location,
                            Error::UnmatchedEndTag {
                                name: "optgroup".into(),
                            },
                        );
                    }
                }
                "option" => {
                    if self.stack.last().map(|o| o.name.as_str()) == Some("option") {
                        self.pop(location);
                    } else {
                        self.report(
                            location,
                            Error::UnmatchedEndTag {
                                name: "option".into(),
                            },
                        );
                    }
                }
                "select" => {
                    if !self.has_in_scope(Scope::Select, "select") {
                        self.report(
                            location,
                            Error::UnmatchedEndTag {
                                name: "select".into(),
                            },
                        );
                        return;
                    }
                    self.pop_until_html(location, "select");
                    self.reset_insertion_mode();
                }
                "template" => self.end_template(location),
                _ => self.report(
                    location,
                    Error::BadContent {
                        place: "select".into(),
                    },
                ),
            },
        }
    }

    fn mode_in_select_in_table(&mut self, location: Location, token: HtmlToken) {
        match &token {
            HtmlToken::StartTag(tag)
                if matches!(
                    tag.name.as_str(),
                    "caption" | "table" | "tbody" | "tfoot" | "thead" | "tr" | "td" | "th"
                ) =>
            {
                self.misnested(location, &tag.name.clone());
                self.pop_until_html(location, "select");
                self.reset_insertion_mode();
                self.process(location, token);
            }
            HtmlToken::EndTag(tag)
                if matches!(
                    tag.name.as_str(),
                    "caption" | "table" | "tbody" | "tfoot" | "thead" | "tr" | "td" | "th"
                ) =>
            {
                let name = tag.name.clone();
                self.report(location, Error::UnmatchedEndTag { name: name.clone() });
                if self.has_in_scope(Scope::Table, &name) {
                    self.pop_until_html(location, "select");
                    self.reset_insertion_mode();
                    self.process(location, token);
                }
            }
            _ => self.mode_in_select(location, token),
        }
    }

    // ------------------------------------------------------------------
    // template mode

    fn mode_in_template(&mut self, location: Location, token: HtmlToken) {
        match &token {
            HtmlToken::Chars(_) | HtmlToken::Comment(_) | HtmlToken::Doctype(_) => {
                self.mode_in_body(location, token);
            }
            HtmlToken::StartTag(tag) => match tag.name.as_str() {
                "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes" | "script"
                | "style" | "template" | "title" => {
                    self.mode_in_head_delegate(location, token);
                }
                "caption" | "colgroup" | "tbody" | "tfoot" | "thead" => {
                    self.repoint_template(location, Mode::InTable, token);
                }
                "col" => self.repoint_template(location, Mode::InColumnGroup, token),
                "tr" => self.repoint_template(location, Mode::InTableBody, token),
                "td" | "th" => self.repoint_template(location, Mode::InRow, token),
                _ => self.repoint_template(location, Mode::InBody, token),
            },
            HtmlToken::EndTag(tag) if tag.name == "template" => self.end_template(location),
            HtmlToken::EndTag(tag) => {
                self.report(
                    location,
                    Error::UnmatchedEndTag {
                        name: tag.name.clone(),
                    },
                );
            }
        }
    }

    fn repoint_template(&mut self, location: Location, mode: Mode, token: HtmlToken) {
        self.template_modes.pop();
        self.template_modes.push(mode);
        self.switch_mode(mode);
        self.process(location, token);
    }

    // ------------------------------------------------------------------
    // after-body and frameset modes

    fn mode_after_body(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(ref text) if text.chars().all(is_html_whitespace) => {
                self.mode_in_body(location, token);
            }
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            HtmlToken::StartTag(ref tag) if tag.name == "html" => {
                self.mode_in_body(location, token);
            }
            HtmlToken::EndTag(tag) if tag.name == "html" => {
                if self.fragment {
                    self.report(location, Error::UnmatchedEndTag { name: "html".into() });
                    return;
                }
                self.switch_mode(Mode::AfterAfterBody);
            }
            token => {
                self.report(
                    location,
                    Error::BadDocument {
                        detail: "content after body".into(),
                    },
                );
                self.switch_mode(Mode::InBody);
                self.process(location, token);
            }
        }
    }

    fn mode_in_frameset(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(text) => {
                let (space, _) = Self::split_whitespace(&text);
                if !space.is_empty() {
                    let space = space.to_owned();
                    self.emit_text(location, space);
                }
                if space.len() != text.len() {
                    self.report(
                        location,
                        Error::BadContent {
                            place: "frameset".into(),
                        },
                    );
                }
            }
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            HtmlToken::StartTag(tag) => match tag.name.as_str() {
                "html" => self.in_body_html_start(location, tag),
                "frameset" => {
                    self.insert_html(location, "frameset", tag.attributes);
                }
                "frame" => self.insert_void(location, "frame", tag.attributes),
                "noframes" => self.mode_in_head_delegate(location, HtmlToken::StartTag(tag)),
                _ => self.report(
                    location,
                    Error::BadContent {
                        place: "frameset".into(),
                    },
                ),
            },
            HtmlToken::EndTag(tag) if tag.name == "frameset" => {
                if self.stack.last().map(|o| o.name.as_str()) == Some("html") {
                    self.report(
                        location,
                        Error::UnmatchedEndTag {
                            name: "frameset".into(),
                        },
                    );
                    return;
                }
                self.pop(location);
                if !self.fragment
                    && self.stack.last().map(|o| o.name.as_str()) != Some("frameset")
                {
                    self.switch_mode(Mode::AfterFrameset);
                }
            }
            HtmlToken::EndTag(tag) => {
                self.report(location, Error::UnmatchedEndTag { name: tag.name });
            }
        }
    }

    fn mode_after_frameset(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Chars(text) => {
                let (space, rest) = Self::split_whitespace(&text);
                if !space.is_empty() {
                    let space = space.to_owned();
                    self.emit_text(location, space);
                }
                if !rest.is_empty() {
                    self.report(
                        location,
                        Error::BadContent {
                            place: "frameset".into(),
                        },
                    );
                }
            }
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            HtmlToken::StartTag(tag) if tag.name == "html" => {
                self.in_body_html_start(location, tag);
            }
            HtmlToken::StartTag(tag) if tag.name == "noframes" => {
                self.mode_in_head_delegate(location, HtmlToken::StartTag(tag));
            }
            HtmlToken::EndTag(tag) if tag.name == "html" => {
                self.switch_mode(Mode::AfterAfterFrameset);
            }
            HtmlToken::StartTag(tag) => self.report(
                location,
                Error::MisnestedTag {
                    what: tag.name,
                    place: "frameset".into(),
                },
            ),
            HtmlToken::EndTag(tag) => {
                self.report(location, Error::UnmatchedEndTag { name: tag.name });
            }
        }
    }

    fn mode_after_after_body(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            token @ HtmlToken::Doctype(_) => self.mode_in_body(location, token),
            HtmlToken::Chars(ref text) if text.chars().all(is_html_whitespace) => {
                self.mode_in_body(location, token);
            }
            HtmlToken::StartTag(ref tag) if tag.name == "html" => {
                self.mode_in_body(location, token);
            }
            token => {
                self.report(
                    location,
                    Error::BadDocument {
                        detail: "content after document".into(),
                    },
                );
                self.switch_mode(Mode::InBody);
                self.process(location, token);
            }
        }
    }

    fn mode_after_after_frameset(&mut self, location: Location, token: HtmlToken) {
        match token {
            HtmlToken::Comment(body) => self.signal(location, Signal::Comment(body)),
            HtmlToken::Chars(ref text) if text.chars().all(is_html_whitespace) => {
                self.mode_in_body(location, token);
            }
            HtmlToken::StartTag(ref tag) if tag.name == "html" => {
                self.mode_in_body(location, token);
            }
            HtmlToken::StartTag(ref tag) if tag.name == "noframes" => {
                self.mode_in_head_delegate(location, token);
            }
            HtmlToken::Doctype(_) => self.report(
                location,
                Error::BadDocument {
                    detail: "doctype not allowed here".into(),
                },
            ),
            token => {
                let name = match &token {
                    HtmlToken::StartTag(tag) | HtmlToken::EndTag(tag) => tag.name.clone(),
                    _ => "#text".into(),
                };
                self.report(
                    location,
                    Error::BadContent {
                        place: format!("after frameset document: {name}"),
                    },
                );
            }
        }
    }
}
