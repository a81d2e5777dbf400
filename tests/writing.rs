use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use pullmark::{
    ns, parse_html, write_html, write_html_with, write_xml, Attribute, Doctype, Error, Name,
    Signal, XmlDeclaration,
};

fn elem(name: &str, attributes: Vec<Attribute>) -> Signal {
    Signal::StartElement {
        name: Name::local(name),
        attributes,
    }
}

fn html_elem(name: &str, attributes: Vec<Attribute>) -> Signal {
    Signal::StartElement {
        name: Name::in_ns(ns::HTML, name),
        attributes,
    }
}

#[test]
fn xml_basics() {
    let out = write_xml(vec![
        Signal::XmlDeclaration(XmlDeclaration {
            version: "1.0".into(),
            encoding: Some("utf-8".into()),
            standalone: None,
        }),
        elem("doc", vec![Attribute::new("a", "x < y")]),
        Signal::text("1 & 2"),
        Signal::EndElement,
    ])
    .into_string()
    .unwrap();
    assert_eq!(
        out,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?><doc a=\"x &lt; y\">1 &amp; 2</doc>"
    );
}

#[test]
fn xml_escapes_bracket_bracket_gt() {
    let out = write_xml(vec![
        elem("d", vec![]),
        Signal::text("a]]>b"),
        Signal::EndElement,
    ])
    .into_string()
    .unwrap();
    assert_eq!(out, "<d>a]]&gt;b</d>");
}

#[test]
fn xml_synthesizes_namespace_declarations() {
    let out = write_xml(vec![
        Signal::StartElement {
            name: Name::in_ns("urn:x", "r"),
            attributes: vec![],
        },
        Signal::StartElement {
            name: Name::in_ns("urn:x", "c"),
            attributes: vec![],
        },
        Signal::EndElement,
        Signal::EndElement,
    ])
    .into_string()
    .unwrap();
    assert_eq!(out, "<r xmlns=\"urn:x\"><c></c></r>");
}

#[test]
fn xml_prefix_callback_names_attribute_namespaces() {
    let out = write_xml(vec![
        elem(
            "r",
            vec![Attribute {
                name: Name::in_ns("urn:meta", "id"),
                value: "7".into(),
            }],
        ),
        Signal::EndElement,
    ])
    .prefix(|uri| (uri == "urn:meta").then(|| "m".to_owned()))
    .into_string()
    .unwrap();
    assert_eq!(out, "<r m:id=\"7\" xmlns:m=\"urn:meta\"></r>");
}

#[test]
fn xml_unbound_attribute_namespace_reports() {
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = errors.clone();
    let out = write_xml(vec![
        elem(
            "r",
            vec![Attribute {
                name: Name::in_ns("urn:meta", "id"),
                value: "7".into(),
            }],
        ),
        Signal::EndElement,
    ])
    .report(move |_, error| {
        sink.borrow_mut().push(error.clone());
        Ok(())
    })
    .into_string()
    .unwrap();
    assert_eq!(out, "<r id=\"7\"></r>");
    assert_eq!(
        errors.borrow().clone(),
        vec![Error::BadNamespace("urn:meta".into())],
    );
}

#[test]
fn xml_closes_unfinished_elements() {
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = errors.clone();
    let out = write_xml(vec![elem("a", vec![]), elem("b", vec![])])
        .report(move |_, error| {
            sink.borrow_mut().push(error.clone());
            Ok(())
        })
        .into_string()
        .unwrap();
    assert_eq!(out, "<a><b></b></a>");
    assert_eq!(
        errors.borrow().clone(),
        vec![Error::UnexpectedEoi {
            place: "element".into(),
        }],
    );
}

#[test]
fn html_void_elements_have_no_end_tag() {
    let out = write_html(vec![
        html_elem("br", vec![]),
        Signal::EndElement,
        html_elem("p", vec![]),
        Signal::EndElement,
    ])
    .into_string()
    .unwrap();
    assert_eq!(out, "<br><p></p>");
}

#[test]
fn html_content_in_void_elements_reports() {
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = errors.clone();
    let _ = write_html(vec![
        html_elem("br", vec![]),
        Signal::text("x"),
        Signal::EndElement,
    ])
    .report(move |_, error| {
        sink.borrow_mut().push(error.clone());
        Ok(())
    })
    .into_string()
    .unwrap();
    assert_eq!(
        errors.borrow().clone(),
        vec![Error::BadContent { place: "br".into() }],
    );
}

#[test]
fn html_attribute_quoting_is_minimised() {
    let out = write_html(vec![
        html_elem(
            "input",
            vec![
                Attribute::new("type", "text"),
                Attribute::new("value", "two words"),
                Attribute::new("disabled", ""),
            ],
        ),
        Signal::EndElement,
    ])
    .into_string()
    .unwrap();
    assert_eq!(out, "<input type=text value=\"two words\" disabled>");
}

#[test]
fn html_raw_text_is_verbatim() {
    let out = write_html(vec![
        html_elem("script", vec![]),
        Signal::text("if (a < b && c) run();"),
        Signal::EndElement,
    ])
    .into_string()
    .unwrap();
    assert_eq!(out, "<script>if (a < b && c) run();</script>");
}

#[test]
fn html_raw_text_end_tag_inside_reports() {
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = errors.clone();
    let _ = write_html(vec![
        html_elem("script", vec![]),
        Signal::text("x = \"</script>\";"),
        Signal::EndElement,
    ])
    .report(move |_, error| {
        sink.borrow_mut().push(error.clone());
        Ok(())
    })
    .into_string()
    .unwrap();
    assert!(matches!(
        errors.borrow()[0],
        Error::BadToken { ref token, .. } if token == "</script"
    ));
}

#[test]
fn html_doctype_is_normalized_and_xml_constructs_dropped() {
    let out = write_html(vec![
        Signal::XmlDeclaration(XmlDeclaration {
            version: "1.0".into(),
            encoding: None,
            standalone: None,
        }),
        Signal::Doctype(Doctype {
            name: Some("html".into()),
            public_id: Some("-//W3C//DTD HTML 4.01//EN".into()),
            system_id: None,
            raw: None,
            force_quirks: false,
        }),
        Signal::ProcessingInstruction {
            target: "php".into(),
            body: "echo".into(),
        },
        html_elem("p", vec![]),
        Signal::text("x"),
        Signal::EndElement,
    ])
    .into_string()
    .unwrap();
    assert_eq!(out, "<!DOCTYPE html><p>x</p>");
}

#[test]
fn html_text_is_escaped_outside_raw_text() {
    let out = write_html(vec![
        html_elem("p", vec![]),
        Signal::text("a < b & c\u{a0}d"),
        Signal::EndElement,
    ])
    .into_string()
    .unwrap();
    assert_eq!(out, "<p>a &lt; b &amp; c&nbsp;d</p>");
}

#[test]
fn write_parse_round_trip_is_stable() {
    let input = "<!DOCTYPE html><html><head><title>t</title></head>\
                 <body><p class=\"x\">one <b>two</b></p></body></html>";
    let first: Vec<_> = parse_html(input).map(|item| item.unwrap().1).collect();
    let written = write_html_with(parse_html(input).map(|item| item.map(|(_, s)| s)))
        .into_string()
        .unwrap();
    let second: Vec<_> = parse_html(&written).map(|item| item.unwrap().1).collect();
    assert_eq!(first, second);
}
