use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use pullmark::{ns, parse_html, Attribute, Context, Error, Name, Signal};

fn start(name: &str) -> Signal {
    Signal::StartElement {
        name: Name::in_ns(ns::HTML, name),
        attributes: vec![],
    }
}

fn svg_start(name: &str) -> Signal {
    Signal::StartElement {
        name: Name::in_ns(ns::SVG, name),
        attributes: vec![],
    }
}

fn fragment_signals(input: &str, context: &str) -> Vec<Signal> {
    parse_html(input)
        .context(Context::fragment(context))
        .map(|item| item.unwrap().1)
        .collect()
}

fn signals_and_errors(input: &str) -> (Vec<Signal>, Vec<Error>) {
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = errors.clone();
    let signals = parse_html(input)
        .report(move |_, error| {
            sink.borrow_mut().push(error.clone());
            Ok(())
        })
        .map(|item| item.unwrap().1)
        .collect();
    let errors = errors.borrow().clone();
    (signals, errors)
}

#[test]
fn misnested_formatting_runs_the_adoption_agency() {
    assert_eq!(
        fragment_signals("<p>1<b>2<i>3</b>4</i>5</p>", "body"),
        vec![
            start("p"),
            Signal::text("1"),
            start("b"),
            Signal::text("2"),
            start("i"),
            Signal::text("3"),
            Signal::EndElement, // i
            Signal::EndElement, // b
            start("i"),         // reopened by reconstruction
            Signal::text("4"),
            Signal::EndElement, // i
            Signal::text("5"),
            Signal::EndElement, // p
        ],
    );
}

#[test]
fn foreign_content_breaks_out_on_html_tags() {
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = errors.clone();
    let signals: Vec<_> = parse_html("<svg><g><p>x</svg>")
        .report(move |_, error| {
            sink.borrow_mut().push(error.clone());
            Ok(())
        })
        .map(|item| item.unwrap().1)
        .collect();
    assert_eq!(
        signals,
        vec![
            svg_start("svg"),
            svg_start("g"),
            Signal::EndElement, // g
            Signal::EndElement, // svg
            start("p"),
            Signal::text("x"),
            Signal::EndElement, // p
        ],
    );
    assert!(errors.borrow().contains(&Error::MisnestedTag {
        what: "p".into(),
        place: "g".into(),
    }));
}

#[test]
fn context_detection_infers_table_fragments() {
    // a bare <td> is parsed as row content, not as a document
    let signals: Vec<_> = parse_html("<td>x</td>")
        .map(|item| item.unwrap().1)
        .collect();
    assert_eq!(
        signals,
        vec![start("td"), Signal::text("x"), Signal::EndElement],
    );
}

#[test]
fn documents_get_implicit_structure() {
    let (signals, _) = signals_and_errors("<!DOCTYPE html><p>hi");
    let expected = vec![
        Signal::Doctype(pullmark::Doctype {
            name: Some("html".into()),
            public_id: None,
            system_id: None,
            raw: None,
            force_quirks: false,
        }),
        start("html"),
        start("head"),
        Signal::EndElement,
        start("body"),
        start("p"),
        Signal::text("hi"),
        Signal::EndElement, // p
        Signal::EndElement, // body
        Signal::EndElement, // html
    ];
    assert_eq!(signals, expected);
}

#[test]
fn signals_always_balance() {
    for input in [
        "<b><i></b></i>",
        "<table><tr><td>a<td>b",
        "<ul><li>a<li>b</ul>",
        "<select><option>a<option>b",
        "<p><div>x</p></div>",
        "<svg><foreignObject><p>x",
        "<template><tr><td>x",
    ] {
        let signals: Vec<_> = parse_html(input).map(|item| item.unwrap().1).collect();
        let mut depth = 0i64;
        for signal in &signals {
            match signal {
                Signal::StartElement { .. } => depth += 1,
                Signal::EndElement => {
                    depth -= 1;
                    assert!(depth >= 0, "unbalanced output for {input:?}");
                }
                _ => {}
            }
        }
        assert_eq!(depth, 0, "unclosed elements for {input:?}");
    }
}

#[test]
fn locations_are_monotone() {
    let input = "<!DOCTYPE html>\n<p>one\n<b>two</b></p>\n<table><td>x";
    let mut last = pullmark::Location { line: 1, column: 1 };
    for item in parse_html(input) {
        let (location, _) = item.unwrap();
        assert!(location >= last, "{location} went backwards from {last}");
        last = location;
    }
}

#[test]
fn void_elements_emit_both_signals() {
    assert_eq!(
        fragment_signals("a<br>b", "body"),
        vec![
            Signal::text("a"),
            start("br"),
            Signal::EndElement,
            Signal::text("b"),
        ],
    );
}

#[test]
fn script_content_is_raw_text()  {
    assert_eq!(
        fragment_signals("<script>if (a<b) x();</script>", "body"),
        vec![
            start("script"),
            Signal::text("if (a<b) x();"),
            Signal::EndElement,
        ],
    );
}

#[test]
fn rcdata_expands_character_references() {
    // the context element itself is notional, so the fragment is only the
    // decoded text
    assert_eq!(
        fragment_signals("<title>a &amp; b</title>", "title"),
        vec![Signal::text("a & b")],
    );
}

#[test]
fn named_references_use_the_full_table() {
    assert_eq!(
        fragment_signals("&CounterClockwiseContourIntegral; &notinva;", "body"),
        vec![Signal::text("\u{2233} \u{2209}")],
    );
}

#[test]
fn attribute_references_keep_legacy_compat() {
    // a nameless reference followed by `=` stays literal inside attribute
    // values, and `&amp;` always decodes
    let signals = fragment_signals("<a href=\"?x=1&copy=2\" title=\"a&amp;b\">t</a>", "body");
    assert_eq!(
        signals[0],
        Signal::StartElement {
            name: Name::in_ns(ns::HTML, "a"),
            attributes: vec![
                Attribute::new("href", "?x=1&copy=2"),
                Attribute::new("title", "a&b"),
            ],
        },
    );
}

#[test]
fn list_items_close_each_other() {
    assert_eq!(
        fragment_signals("<ul><li>a<li>b</ul>", "body"),
        vec![
            start("ul"),
            start("li"),
            Signal::text("a"),
            Signal::EndElement, // first li
            start("li"),
            Signal::text("b"),
            Signal::EndElement, // second li
            Signal::EndElement, // ul
        ],
    );
}

#[test]
fn tables_synthesize_missing_sections() {
    let signals = fragment_signals("<table><td>x</td></table>", "body");
    assert_eq!(
        signals,
        vec![
            start("table"),
            start("tbody"),
            start("tr"),
            start("td"),
            Signal::text("x"),
            Signal::EndElement, // td
            Signal::EndElement, // tr
            Signal::EndElement, // tbody
            Signal::EndElement, // table
        ],
    );
}

#[test]
fn stray_text_in_tables_is_reported() {
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = errors.clone();
    let _: Vec<_> = parse_html("<table>oops</table>")
        .context(Context::fragment("body"))
        .report(move |_, error| {
            sink.borrow_mut().push(error.clone());
            Ok(())
        })
        .collect();
    assert!(errors.borrow().contains(&Error::BadContent {
        place: "table".into(),
    }));
}

#[test]
fn duplicate_attributes_keep_the_first() {
    let (signals, errors) = {
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = errors.clone();
        let signals: Vec<_> = parse_html("<p id=one id=two>x")
            .context(Context::fragment("body"))
            .report(move |_, error| {
                sink.borrow_mut().push(error.clone());
                Ok(())
            })
            .map(|item| item.unwrap().1)
            .collect();
        let errors = errors.borrow().clone();
        (signals, errors)
    };
    assert_eq!(
        signals[0],
        Signal::StartElement {
            name: Name::in_ns(ns::HTML, "p"),
            attributes: vec![Attribute::new("id", "one")],
        },
    );
    assert!(errors.iter().any(|error| matches!(
        error,
        Error::BadToken { token, .. } if token == "id"
    )));
}

#[test]
fn quirky_doctypes_force_quirks() {
    let (signals, _) = signals_and_errors(
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\"><p>x",
    );
    match &signals[0] {
        Signal::Doctype(doctype) => assert!(doctype.force_quirks),
        other => panic!("expected a doctype, got {other:?}"),
    }
}

#[test]
fn svg_names_get_their_case_back() {
    let signals = fragment_signals("<svg viewbox=\"0 0 1 1\"><foreignobject/></svg>", "body");
    assert_eq!(
        signals[0],
        Signal::StartElement {
            name: Name::in_ns(ns::SVG, "svg"),
            attributes: vec![Attribute::new("viewBox", "0 0 1 1")],
        },
    );
    assert_eq!(signals[1], svg_start("foreignObject"));
}

#[test]
fn cdata_is_allowed_in_foreign_content_only() {
    let signals = fragment_signals("<svg><![CDATA[a<b]]></svg>", "body");
    assert_eq!(
        signals,
        vec![svg_start("svg"), Signal::text("a<b"), Signal::EndElement],
    );

    let (signals, errors) = signals_and_errors("<p><![CDATA[a]]></p>");
    // outside foreign content the whole thing is a bogus comment
    assert!(signals
        .iter()
        .any(|s| matches!(s, Signal::Comment(body) if body == "[CDATA[a]]")));
    assert!(errors
        .iter()
        .any(|error| matches!(error, Error::BadToken { token, .. } if token == "<![CDATA[")));
}

#[test]
fn plaintext_swallows_the_rest() {
    assert_eq!(
        fragment_signals("<plaintext></plaintext>not markup<", "body"),
        vec![
            start("plaintext"),
            Signal::text("</plaintext>not markup<"),
            Signal::EndElement,
        ],
    );
}

#[test]
fn comments_pass_through() {
    assert_eq!(
        fragment_signals("a<!-- b -->c", "body"),
        vec![
            Signal::text("a"),
            Signal::Comment(" b ".into()),
            Signal::text("c"),
        ],
    );
}

#[test]
fn eof_in_tag_is_reported_and_recovered() {
    let (signals, errors) = {
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = errors.clone();
        let signals: Vec<_> = parse_html("<p>x<a href=")
            .context(Context::fragment("body"))
            .report(move |_, error| {
                sink.borrow_mut().push(error.clone());
                Ok(())
            })
            .map(|item| item.unwrap().1)
            .collect();
        let errors = errors.borrow().clone();
        (signals, errors)
    };
    assert_eq!(
        signals,
        vec![
            start("p"),
            Signal::text("x"),
            Signal::EndElement, // p, closed at end of input
        ],
    );
    assert!(errors
        .iter()
        .any(|error| matches!(error, Error::UnexpectedEoi { .. })));
}
