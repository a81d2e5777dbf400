//! Fixture-driven end-to-end tests: each case is a JSON description of an
//! input and the signal sequence it must produce.

use pretty_assertions::assert_eq;
use pullmark::{parse_html, parse_xml, Context, Signal};
use serde::Deserialize;

macro_rules! def_const {
    ($str:expr, $ty:ident) => {
        #[derive(Deserialize)]
        enum $ty {
            #[serde(rename = $str)]
            $ty,
        }
    };
}

def_const!("StartElement", StartElementConst);
def_const!("EndElement", EndElementConst);
def_const!("Text", TextConst);
def_const!("Comment", CommentConst);
def_const!("Doctype", DoctypeConst);

/// One expected signal, as a compact tagged array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ExpectedSignal {
    // ["StartElement", local-name, {attr: value}]
    StartElement(StartElementConst, String, Vec<(String, String)>),
    // ["EndElement"] -- the inner tuple keeps this deserializing from a
    // one-element sequence rather than a bare string
    EndElement((EndElementConst,)),
    // ["Text", joined-text]
    Text(TextConst, String),
    // ["Comment", body]
    Comment(CommentConst, String),
    // ["Doctype", name]
    Doctype(DoctypeConst, String),
}

#[derive(Deserialize)]
struct Fixture {
    description: String,
    input: String,
    #[serde(default)]
    syntax: Option<String>,
    #[serde(default)]
    fragment: Option<String>,
    output: Vec<ExpectedSignal>,
}

/// Collapse a signal into the comparable fixture shape, dropping
/// locations, namespaces and signal kinds the fixtures do not cover.
fn flatten(signal: &Signal) -> Option<(String, String, Vec<(String, String)>)> {
    match signal {
        Signal::StartElement { name, attributes } => Some((
            "StartElement".into(),
            name.local.clone(),
            attributes
                .iter()
                .map(|a| (a.name.local.clone(), a.value.clone()))
                .collect(),
        )),
        Signal::EndElement => Some(("EndElement".into(), String::new(), vec![])),
        Signal::Text(chunks) => Some(("Text".into(), chunks.concat(), vec![])),
        Signal::Comment(body) => Some(("Comment".into(), body.clone(), vec![])),
        Signal::Doctype(doctype) => Some((
            "Doctype".into(),
            doctype.name.clone().unwrap_or_default(),
            vec![],
        )),
        Signal::XmlDeclaration(_) | Signal::ProcessingInstruction { .. } => None,
    }
}

fn flatten_expected(expected: &ExpectedSignal) -> (String, String, Vec<(String, String)>) {
    match expected {
        ExpectedSignal::StartElement(_, name, attributes) => {
            ("StartElement".into(), name.clone(), attributes.clone())
        }
        ExpectedSignal::EndElement(_) => ("EndElement".into(), String::new(), vec![]),
        ExpectedSignal::Text(_, text) => ("Text".into(), text.clone(), vec![]),
        ExpectedSignal::Comment(_, body) => ("Comment".into(), body.clone(), vec![]),
        ExpectedSignal::Doctype(_, name) => ("Doctype".into(), name.clone(), vec![]),
    }
}

fn run(fixtures: &str) {
    let fixtures: Vec<Fixture> = serde_json::from_str(fixtures).expect("well-formed fixtures");
    for fixture in fixtures {
        let xml = fixture.syntax.as_deref() == Some("xml");
        let actual: Vec<_> = if xml {
            let mut parser = parse_xml(fixture.input.as_str());
            if let Some(context) = &fixture.fragment {
                parser = parser.context(Context::fragment(context.clone()));
            }
            parser
                .map(|item| item.expect("infallible input").1)
                .filter_map(|signal| flatten(&signal))
                .collect()
        } else {
            let mut parser = parse_html(fixture.input.as_str());
            if let Some(context) = &fixture.fragment {
                parser = parser.context(Context::fragment(context.clone()));
            }
            parser
                .map(|item| item.expect("infallible input").1)
                .filter_map(|signal| flatten(&signal))
                .collect()
        };
        let expected: Vec<_> = fixture.output.iter().map(flatten_expected).collect();
        assert_eq!(actual, expected, "{}", fixture.description);
    }
}

#[test]
fn html_fixtures() {
    run(r##"[
        {
            "description": "plain paragraph in a body fragment",
            "input": "<p>hello</p>",
            "fragment": "body",
            "output": [
                ["StartElement", "p", []],
                ["Text", "hello"],
                ["EndElement"]
            ]
        },
        {
            "description": "unclosed elements are closed at end of input",
            "input": "<div><p>x",
            "fragment": "body",
            "output": [
                ["StartElement", "div", []],
                ["StartElement", "p", []],
                ["Text", "x"],
                ["EndElement"],
                ["EndElement"]
            ]
        },
        {
            "description": "attributes survive with their values decoded",
            "input": "<a href=\"?a=1&amp;b=2\" class=link>x</a>",
            "fragment": "body",
            "output": [
                ["StartElement", "a", [["href", "?a=1&b=2"], ["class", "link"]]],
                ["Text", "x"],
                ["EndElement"]
            ]
        },
        {
            "description": "numeric references, including the C1 remapping",
            "input": "&#65;&#x42;&#150;",
            "fragment": "body",
            "output": [
                ["Text", "AB–"]
            ]
        },
        {
            "description": "headings close open headings",
            "input": "<h1>a<h2>b",
            "fragment": "body",
            "output": [
                ["StartElement", "h1", []],
                ["Text", "a"],
                ["EndElement"],
                ["StartElement", "h2", []],
                ["Text", "b"],
                ["EndElement"]
            ]
        },
        {
            "description": "definition lists imply their item end tags",
            "input": "<dl><dt>t<dd>d</dl>",
            "fragment": "body",
            "output": [
                ["StartElement", "dl", []],
                ["StartElement", "dt", []],
                ["Text", "t"],
                ["EndElement"],
                ["StartElement", "dd", []],
                ["Text", "d"],
                ["EndElement"],
                ["EndElement"]
            ]
        },
        {
            "description": "a full document gets its implied elements",
            "input": "<!DOCTYPE html>x",
            "output": [
                ["Doctype", "html"],
                ["StartElement", "html", []],
                ["StartElement", "head", []],
                ["EndElement"],
                ["StartElement", "body", []],
                ["Text", "x"],
                ["EndElement"],
                ["EndElement"]
            ]
        },
        {
            "description": "bogus comment from a stray end-tag bang",
            "input": "<!x>y",
            "fragment": "body",
            "output": [
                ["Comment", "x"],
                ["Text", "y"]
            ]
        }
    ]"##);
}

#[test]
fn xml_fixtures() {
    run(r#"[
        {
            "description": "elements, text and comments",
            "syntax": "xml",
            "input": "<a><!--c-->x<b/></a>",
            "output": [
                ["StartElement", "a", []],
                ["Comment", "c"],
                ["Text", "x"],
                ["StartElement", "b", []],
                ["EndElement"],
                ["EndElement"]
            ]
        },
        {
            "description": "attribute values are normalized",
            "syntax": "xml",
            "input": "<a b=\"1\n2\"/>",
            "output": [
                ["StartElement", "a", [["b", "1 2"]]],
                ["EndElement"]
            ]
        },
        {
            "description": "numeric and named references in text",
            "syntax": "xml",
            "input": "<a>&#x3C;&gt;</a>",
            "output": [
                ["StartElement", "a", []],
                ["Text", "<>"],
                ["EndElement"]
            ]
        }
    ]"#);
}
