use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use pullmark::{
    ns, parse_xml, write_xml_with, Attribute, Error, Location, Name, Signal, XmlDeclaration,
};

fn signals(input: &str) -> Vec<Signal> {
    parse_xml(input).map(|item| item.unwrap().1).collect()
}

fn signals_and_errors(input: &str) -> (Vec<Signal>, Vec<Error>) {
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = errors.clone();
    let signals = parse_xml(input)
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
fn minimal_document() {
    assert_eq!(
        signals("<?xml version=\"1.0\"?><r>hi</r>"),
        vec![
            Signal::XmlDeclaration(XmlDeclaration {
                version: "1.0".into(),
                encoding: None,
                standalone: None,
            }),
            Signal::StartElement {
                name: Name::local("r"),
                attributes: vec![],
            },
            Signal::text("hi"),
            Signal::EndElement,
        ],
    );
}

#[test]
fn entity_recovery() {
    // interleaving matters: the report arrives after the start tag and
    // before the text signal it concerns
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    for item in parse_xml("<r>a & b</r>").report(move |_, error| {
        sink.borrow_mut().push(format!("error: {error}"));
        Ok(())
    }) {
        let (_, signal) = item.unwrap();
        events.borrow_mut().push(format!("signal: {signal:?}"));
    }
    let events = events.borrow();
    assert_eq!(events.len(), 4);
    assert!(events[0].starts_with("signal: StartElement"));
    assert_eq!(
        events[1],
        "error: bad token '&' in text: replace with '&amp;'"
    );
    assert!(events[2].contains("a & b"));
    assert!(events[3].starts_with("signal: EndElement"));
}

#[test]
fn encoding_switch_via_declaration() {
    let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><r>".to_vec();
    bytes.push(0xe9);
    bytes.extend_from_slice(b"</r>");
    let (signals, errors): (Vec<_>, _) = {
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = errors.clone();
        let signals: Vec<_> = parse_xml(&bytes)
            .report(move |_, error| {
                sink.borrow_mut().push(error.clone());
                Ok(())
            })
            .map(|item| item.unwrap().1)
            .collect();
        let errors = errors.borrow().clone();
        (signals, errors)
    };
    assert_eq!(errors, vec![]);
    assert_eq!(
        signals[0],
        Signal::XmlDeclaration(XmlDeclaration {
            version: "1.0".into(),
            encoding: Some("ISO-8859-1".into()),
            standalone: None,
        }),
    );
    assert_eq!(signals[2], Signal::text("\u{e9}"));
}

#[test]
fn namespace_resolution() {
    assert_eq!(
        signals("<a xmlns=\"urn:x\" xmlns:b=\"urn:y\"><b:c d=\"1\"/></a>"),
        vec![
            Signal::StartElement {
                name: Name::in_ns("urn:x", "a"),
                attributes: vec![
                    Attribute {
                        name: Name::in_ns(ns::XMLNS, "xmlns"),
                        value: "urn:x".into(),
                    },
                    Attribute {
                        name: Name::in_ns(ns::XMLNS, "b"),
                        value: "urn:y".into(),
                    },
                ],
            },
            Signal::StartElement {
                name: Name::in_ns("urn:y", "c"),
                attributes: vec![Attribute::new("d", "1")],
            },
            Signal::EndElement,
            Signal::EndElement,
        ],
    );
}

#[test]
fn unbound_prefix_consults_the_callback() {
    let signals: Vec<_> = parse_xml("<x:r/>")
        .namespace(|prefix| (prefix == "x").then(|| "urn:z".to_owned()))
        .map(|item| item.unwrap().1)
        .collect();
    assert_eq!(
        signals[0],
        Signal::StartElement {
            name: Name::in_ns("urn:z", "r"),
            attributes: vec![],
        },
    );
}

#[test]
fn unbound_prefix_reports_bad_namespace() {
    let (signals, errors) = signals_and_errors("<x:r/>");
    assert_eq!(errors, vec![Error::BadNamespace("x".into())]);
    assert_eq!(
        signals[0],
        Signal::StartElement {
            name: Name::local("r"),
            attributes: vec![],
        },
    );
}

#[test]
fn user_entities() {
    let signals: Vec<_> = parse_xml("<r>&said;</r>")
        .entity(|name| (name == "said").then(|| "\u{201c}quote\u{201d}".to_owned()))
        .map(|item| item.unwrap().1)
        .collect();
    assert_eq!(signals[1], Signal::text("\u{201c}quote\u{201d}"));
}

#[test]
fn unmatched_end_tag_is_dropped() {
    let (signals, errors) = signals_and_errors("<a></b></a>");
    assert_eq!(errors, vec![Error::UnmatchedEndTag { name: "b".into() }]);
    assert_eq!(
        signals,
        vec![
            Signal::StartElement {
                name: Name::local("a"),
                attributes: vec![],
            },
            Signal::EndElement,
        ],
    );
}

#[test]
fn deep_end_tag_closes_intervening_elements() {
    let (signals, errors) = signals_and_errors("<a><b><c></a>");
    assert_eq!(
        errors,
        vec![
            Error::UnmatchedStartTag { name: "c".into() },
            Error::UnmatchedStartTag { name: "b".into() },
        ],
    );
    // balanced regardless
    let starts = signals
        .iter()
        .filter(|s| matches!(s, Signal::StartElement { .. }))
        .count();
    let ends = signals
        .iter()
        .filter(|s| matches!(s, Signal::EndElement))
        .count();
    assert_eq!(starts, 3);
    assert_eq!(ends, 3);
}

#[test]
fn multiple_roots_are_reported() {
    let (signals, errors) = signals_and_errors("<a/><b/>");
    assert_eq!(
        errors,
        vec![Error::BadDocument {
            detail: "multiple root elements".into(),
        }],
    );
    assert_eq!(signals.len(), 4);
}

#[test]
fn fragments_allow_bare_content() {
    let (signals, errors) = signals_and_errors("hi <b>x</b>");
    assert_eq!(errors, vec![]);
    assert_eq!(
        signals,
        vec![
            Signal::text("hi "),
            Signal::StartElement {
                name: Name::local("b"),
                attributes: vec![],
            },
            Signal::text("x"),
            Signal::EndElement,
        ],
    );
}

#[test]
fn cdata_merges_with_surrounding_text() {
    let (signals, errors) = signals_and_errors("<r>a<![CDATA[<&>]]>b</r>");
    assert_eq!(errors, vec![]);
    assert_eq!(signals[1].joined_text().as_deref(), Some("a<&>b"));
}

#[test]
fn doctype_is_surfaced_with_raw_text() {
    let signals = signals("<!DOCTYPE greeting SYSTEM \"hello.dtd\"><greeting/>");
    match &signals[0] {
        Signal::Doctype(doctype) => {
            assert_eq!(doctype.name.as_deref(), Some("greeting"));
            assert_eq!(doctype.system_id.as_deref(), Some("hello.dtd"));
            assert_eq!(
                doctype.raw.as_deref(),
                Some(" greeting SYSTEM \"hello.dtd\""),
            );
        }
        other => panic!("expected a doctype, got {other:?}"),
    }
}

#[test]
fn report_callback_can_abort() {
    let mut parser = parse_xml("<r>a & b</r>").report(|_, error| Err(error.clone()));
    assert!(matches!(parser.next(), Some(Ok(_)))); // <r>
    let failure = parser.next().expect("an aborted item");
    assert!(failure.is_err());
    // permanently failed: the same error again
    let again = parser.next().expect("still failed");
    assert!(again.is_err());
}

#[test]
fn locations_are_monotone() {
    let input = "<?xml version=\"1.0\"?>\n<a>\n  <b>text</b>\n</a>";
    let mut last = Location { line: 1, column: 1 };
    for item in parse_xml(input) {
        let (location, _) = item.unwrap();
        assert!(location >= last, "{location} went backwards from {last}");
        last = location;
    }
    assert_eq!(last.line, 4);
}

#[test]
fn parse_write_parse_is_stable() {
    let input =
        "<?xml version=\"1.0\"?><root a=\"1\"><child>text &amp; more</child><!--c--></root>";
    let first: Vec<_> = parse_xml(input).map(|item| item.unwrap().1).collect();
    let written = write_xml_with(parse_xml(input).map(|item| item.map(|(_, s)| s)))
        .into_string()
        .unwrap();
    let second: Vec<_> = parse_xml(&written).map(|item| item.unwrap().1).collect();
    assert_eq!(first, second);
}
