//! Element classification tables the tree constructor dispatches on.

/// Elements with no content and no end tag.
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub(crate) fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// The active-formatting-list elements.
pub(crate) fn is_formatting(name: &str) -> bool {
    matches!(
        name,
        "a" | "b" | "big" | "code" | "em" | "font" | "i" | "nobr" | "s" | "small" | "strike"
            | "strong" | "tt" | "u"
    )
}

/// The "special" category: elements an "any other end tag" walk may not
/// step over.
pub(crate) fn is_special(name: &str) -> bool {
    matches!(
        name,
        "address" | "applet" | "area" | "article" | "aside" | "base" | "basefont" | "bgsound"
            | "blockquote" | "body" | "br" | "button" | "caption" | "center" | "col" | "colgroup"
            | "dd" | "details" | "dir" | "div" | "dl" | "dt" | "embed" | "fieldset"
            | "figcaption" | "figure" | "footer" | "form" | "frame" | "frameset" | "h1" | "h2"
            | "h3" | "h4" | "h5" | "h6" | "head" | "header" | "hgroup" | "hr" | "html" | "iframe"
            | "img" | "input" | "keygen" | "li" | "link" | "listing" | "main" | "marquee"
            | "menu" | "meta" | "nav" | "noembed" | "noframes" | "noscript" | "object" | "ol"
            | "p" | "param" | "plaintext" | "pre" | "script" | "search" | "section" | "select"
            | "source" | "style" | "summary" | "table" | "tbody" | "td" | "template"
            | "textarea" | "tfoot" | "th" | "thead" | "title" | "tr" | "track" | "ul" | "wbr"
            | "xmp"
    )
}

/// Elements whose end tags are implied when certain other content starts.
pub(crate) fn has_implied_end_tag(name: &str) -> bool {
    matches!(
        name,
        "dd" | "dt" | "li" | "optgroup" | "option" | "p" | "rb" | "rp" | "rt" | "rtc"
    )
}

pub(crate) fn is_heading(name: &str) -> bool {
    matches!(name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// RCDATA elements (character references expand, markup does not).
pub(crate) fn is_rcdata(name: &str) -> bool {
    matches!(name, "title" | "textarea")
}

/// RAWTEXT elements (content is uninterpreted text; `script` uses the
/// script-data states instead).
pub(crate) fn is_rawtext(name: &str) -> bool {
    matches!(name, "style" | "xmp" | "iframe" | "noembed" | "noframes")
}

/// The element namespaces the constructor distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Ns {
    Html,
    Svg,
    MathMl,
}

impl Ns {
    pub(crate) fn uri(self) -> &'static str {
        match self {
            Ns::Html => crate::signal::ns::HTML,
            Ns::Svg => crate::signal::ns::SVG,
            Ns::MathMl => crate::signal::ns::MATHML,
        }
    }
}

/// Scope variants for "has an element in scope" queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Default,
    ListItem,
    Button,
    Table,
    Select,
}

/// Whether `(name, ns)` terminates a scope search.
pub(crate) fn bounds_scope(scope: Scope, name: &str, ns: Ns) -> bool {
    let default = match ns {
        Ns::Html => matches!(
            name,
            "applet" | "caption" | "html" | "table" | "td" | "th" | "marquee" | "object"
                | "template"
        ),
        Ns::MathMl => matches!(name, "mi" | "mo" | "mn" | "ms" | "mtext" | "annotation-xml"),
        Ns::Svg => matches!(name, "foreignObject" | "desc" | "title"),
    };
    match scope {
        Scope::Default => default,
        Scope::ListItem => default || (ns == Ns::Html && matches!(name, "ol" | "ul")),
        Scope::Button => default || (ns == Ns::Html && name == "button"),
        Scope::Table => ns == Ns::Html && matches!(name, "html" | "table" | "template"),
        // select scope is inverted: everything bounds it except these
        Scope::Select => !(ns == Ns::Html && matches!(name, "optgroup" | "option")),
    }
}

/// SVG tag names whose casing the parser restores.
pub(crate) fn adjust_svg_tag_name(name: &str) -> &str {
    match name {
        "altglyph" => "altGlyph",
        "altglyphdef" => "altGlyphDef",
        "altglyphitem" => "altGlyphItem",
        "animatecolor" => "animateColor",
        "animatemotion" => "animateMotion",
        "animatetransform" => "animateTransform",
        "clippath" => "clipPath",
        "feblend" => "feBlend",
        "fecolormatrix" => "feColorMatrix",
        "fecomponenttransfer" => "feComponentTransfer",
        "fecomposite" => "feComposite",
        "feconvolvematrix" => "feConvolveMatrix",
        "fediffuselighting" => "feDiffuseLighting",
        "fedisplacementmap" => "feDisplacementMap",
        "fedistantlight" => "feDistantLight",
        "fedropshadow" => "feDropShadow",
        "feflood" => "feFlood",
        "fefunca" => "feFuncA",
        "fefuncb" => "feFuncB",
        "fefuncg" => "feFuncG",
        "fefuncr" => "feFuncR",
        "fegaussianblur" => "feGaussianBlur",
        "feimage" => "feImage",
        "femerge" => "feMerge",
        "femergenode" => "feMergeNode",
        "femorphology" => "feMorphology",
        "feoffset" => "feOffset",
        "fepointlight" => "fePointLight",
        "fespecularlighting" => "feSpecularLighting",
        "fespotlight" => "feSpotLight",
        "fetile" => "feTile",
        "feturbulence" => "feTurbulence",
        "foreignobject" => "foreignObject",
        "glyphref" => "glyphRef",
        "lineargradient" => "linearGradient",
        "radialgradient" => "radialGradient",
        "textpath" => "textPath",
        other => other,
    }
}

/// SVG attribute names whose casing the parser restores.
pub(crate) fn adjust_svg_attribute(name: &str) -> &str {
    match name {
        "attributename" => "attributeName",
        "attributetype" => "attributeType",
        "basefrequency" => "baseFrequency",
        "baseprofile" => "baseProfile",
        "calcmode" => "calcMode",
        "clippathunits" => "clipPathUnits",
        "diffuseconstant" => "diffuseConstant",
        "edgemode" => "edgeMode",
        "filterunits" => "filterUnits",
        "glyphref" => "glyphRef",
        "gradienttransform" => "gradientTransform",
        "gradientunits" => "gradientUnits",
        "kernelmatrix" => "kernelMatrix",
        "kernelunitlength" => "kernelUnitLength",
        "keypoints" => "keyPoints",
        "keysplines" => "keySplines",
        "keytimes" => "keyTimes",
        "lengthadjust" => "lengthAdjust",
        "limitingconeangle" => "limitingConeAngle",
        "markerheight" => "markerHeight",
        "markerunits" => "markerUnits",
        "markerwidth" => "markerWidth",
        "maskcontentunits" => "maskContentUnits",
        "maskunits" => "maskUnits",
        "numoctaves" => "numOctaves",
        "pathlength" => "pathLength",
        "patterncontentunits" => "patternContentUnits",
        "patterntransform" => "patternTransform",
        "patternunits" => "patternUnits",
        "pointsatx" => "pointsAtX",
        "pointsaty" => "pointsAtY",
        "pointsatz" => "pointsAtZ",
        "preservealpha" => "preserveAlpha",
        "preserveaspectratio" => "preserveAspectRatio",
        "primitiveunits" => "primitiveUnits",
        "refx" => "refX",
        "refy" => "refY",
        "repeatcount" => "repeatCount",
        "repeatdur" => "repeatDur",
        "requiredextensions" => "requiredExtensions",
        "requiredfeatures" => "requiredFeatures",
        "specularconstant" => "specularConstant",
        "specularexponent" => "specularExponent",
        "spreadmethod" => "spreadMethod",
        "startoffset" => "startOffset",
        "stddeviation" => "stdDeviation",
        "stitchtiles" => "stitchTiles",
        "surfacescale" => "surfaceScale",
        "systemlanguage" => "systemLanguage",
        "tablevalues" => "tableValues",
        "targetx" => "targetX",
        "targety" => "targetY",
        "textlength" => "textLength",
        "viewbox" => "viewBox",
        "viewtarget" => "viewTarget",
        "xchannelselector" => "xChannelSelector",
        "ychannelselector" => "yChannelSelector",
        "zoomandpan" => "zoomAndPan",
        other => other,
    }
}

/// Foreign attributes that carry a namespace on the expanded name.
/// Returns `(namespace URI, local name)`.
pub(crate) fn adjust_foreign_attribute(name: &str) -> Option<(&'static str, &str)> {
    use crate::signal::ns;
    let (prefix, local) = name.split_once(':')?;
    match prefix {
        "xlink"
            if matches!(
                local,
                "actuate" | "arcrole" | "href" | "role" | "show" | "title" | "type"
            ) =>
        {
            Some((ns::XLINK, local))
        }
        "xml" if matches!(local, "lang" | "space") => Some((ns::XML, local)),
        "xmlns" => Some((ns::XMLNS, local)),
        _ => None,
    }
}

/// HTML start tags that break out of foreign (SVG/MathML) content.
pub(crate) fn breaks_out_of_foreign(name: &str, attributes: &[(String, String)]) -> bool {
    match name {
        "b" | "big" | "blockquote" | "body" | "br" | "center" | "code" | "dd" | "div" | "dl"
        | "dt" | "em" | "embed" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "head" | "hr"
        | "i" | "img" | "li" | "listing" | "menu" | "meta" | "nobr" | "ol" | "p" | "pre"
        | "ruby" | "s" | "small" | "span" | "strong" | "strike" | "sub" | "sup" | "table"
        | "tt" | "u" | "ul" | "var" => true,
        "font" => attributes
            .iter()
            .any(|(n, _)| matches!(n.as_str(), "color" | "face" | "size")),
        _ => false,
    }
}

/// MathML text integration points.
pub(crate) fn is_mathml_text_integration_point(name: &str, ns: Ns) -> bool {
    ns == Ns::MathMl && matches!(name, "mi" | "mo" | "mn" | "ms" | "mtext")
}

/// HTML integration points. `annotation-xml` qualifies only with an HTML
/// encoding attribute, which the caller resolves before pushing the
/// element; the flag is carried on the open-element record.
pub(crate) fn is_svg_html_integration_point(name: &str, ns: Ns) -> bool {
    ns == Ns::Svg && matches!(name, "foreignObject" | "desc" | "title")
}

pub(crate) fn annotation_xml_is_integration_point(attributes: &[(String, String)]) -> bool {
    attributes.iter().any(|(name, value)| {
        name == "encoding"
            && (value.eq_ignore_ascii_case("text/html")
                || value.eq_ignore_ascii_case("application/xhtml+xml"))
    })
}

// Quirks-mode doctype identifiers, from the table in the HTML
// specification. Matching is ASCII case-insensitive, by prefix.
const QUIRKY_PUBLIC_PREFIXES: &[&str] = &[
    "+//Silmaril//dtd html Pro v0r11 19970101//",
    "-//AS//DTD HTML 3.0 asWedit + extensions//",
    "-//AdvaSoft Ltd//DTD HTML 3.0 asWedit + extensions//",
    "-//IETF//DTD HTML 2.0 Level 1//",
    "-//IETF//DTD HTML 2.0 Level 2//",
    "-//IETF//DTD HTML 2.0 Strict Level 1//",
    "-//IETF//DTD HTML 2.0 Strict Level 2//",
    "-//IETF//DTD HTML 2.0 Strict//",
    "-//IETF//DTD HTML 2.0//",
    "-//IETF//DTD HTML 2.1E//",
    "-//IETF//DTD HTML 3.0//",
    "-//IETF//DTD HTML 3.2 Final//",
    "-//IETF//DTD HTML 3.2//",
    "-//IETF//DTD HTML 3//",
    "-//IETF//DTD HTML Level 0//",
    "-//IETF//DTD HTML Level 1//",
    "-//IETF//DTD HTML Level 2//",
    "-//IETF//DTD HTML Level 3//",
    "-//IETF//DTD HTML Strict Level 0//",
    "-//IETF//DTD HTML Strict Level 1//",
    "-//IETF//DTD HTML Strict Level 2//",
    "-//IETF//DTD HTML Strict Level 3//",
    "-//IETF//DTD HTML Strict//",
    "-//IETF//DTD HTML//",
    "-//Metrius//DTD Metrius Presentational//",
    "-//Microsoft//DTD Internet Explorer 2.0 HTML Strict//",
    "-//Microsoft//DTD Internet Explorer 2.0 HTML//",
    "-//Microsoft//DTD Internet Explorer 2.0 Tables//",
    "-//Microsoft//DTD Internet Explorer 3.0 HTML Strict//",
    "-//Microsoft//DTD Internet Explorer 3.0 HTML//",
    "-//Microsoft//DTD Internet Explorer 3.0 Tables//",
    "-//Netscape Comm. Corp.//DTD HTML//",
    "-//Netscape Comm. Corp.//DTD Strict HTML//",
    "-//O'Reilly and Associates//DTD HTML 2.0//",
    "-//O'Reilly and Associates//DTD HTML Extended 1.0//",
    "-//O'Reilly and Associates//DTD HTML Extended Relaxed 1.0//",
    "-//SQ//DTD HTML 2.0 HoTMetaL + extensions//",
    "-//SoftQuad Software//DTD HoTMetaL PRO 6.0::19990601::extensions to HTML 4.0//",
    "-//SoftQuad//DTD HoTMetaL PRO 4.0::19971010::extensions to HTML 4.0//",
    "-//Spyglass//DTD HTML 2.0 Extended//",
    "-//Sun Microsystems Corp.//DTD HotJava HTML//",
    "-//Sun Microsystems Corp.//DTD HotJava Strict HTML//",
    "-//W3C//DTD HTML 3 1995-03-24//",
    "-//W3C//DTD HTML 3.2 Draft//",
    "-//W3C//DTD HTML 3.2 Final//",
    "-//W3C//DTD HTML 3.2//",
    "-//W3C//DTD HTML 3.2S Draft//",
    "-//W3C//DTD HTML 4.0 Frameset//",
    "-//W3C//DTD HTML 4.0 Transitional//",
    "-//W3C//DTD HTML Experimental 19960712//",
    "-//W3C//DTD HTML Experimental 970421//",
    "-//W3C//DTD W3 HTML//",
    "-//W3O//DTD W3 HTML 3.0//",
    "-//WebTechs//DTD Mozilla HTML 2.0//",
    "-//WebTechs//DTD Mozilla HTML//",
];

fn starts_with_ignore_ascii_case(haystack: &str, prefix: &str) -> bool {
    haystack
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Whether a doctype forces quirks mode, per the legacy-compat table.
pub(crate) fn doctype_is_quirky(
    name: Option<&str>,
    public_id: Option<&str>,
    system_id: Option<&str>,
) -> bool {
    let public = public_id.unwrap_or_default();
    let system = system_id.unwrap_or_default();

    name != Some("html")
        || public.eq_ignore_ascii_case("-//W3O//DTD W3 HTML Strict 3.0//EN//")
        || public.eq_ignore_ascii_case("-/W3C/DTD HTML 4.0 Transitional/EN")
        || public.eq_ignore_ascii_case("HTML")
        || system.eq_ignore_ascii_case("http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd")
        || QUIRKY_PUBLIC_PREFIXES
            .iter()
            .any(|prefix| starts_with_ignore_ascii_case(public, prefix))
        || (system_id.is_none()
            && (starts_with_ignore_ascii_case(public, "-//W3C//DTD HTML 4.01 Frameset//")
                || starts_with_ignore_ascii_case(public, "-//W3C//DTD HTML 4.01 Transitional//")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_boundaries() {
        assert!(bounds_scope(Scope::Default, "table", Ns::Html));
        assert!(!bounds_scope(Scope::Default, "ul", Ns::Html));
        assert!(bounds_scope(Scope::ListItem, "ul", Ns::Html));
        assert!(bounds_scope(Scope::Button, "button", Ns::Html));
        assert!(!bounds_scope(Scope::Table, "td", Ns::Html));
        assert!(bounds_scope(Scope::Select, "table", Ns::Html));
        assert!(!bounds_scope(Scope::Select, "option", Ns::Html));
    }

    #[test]
    fn svg_case_restoration() {
        assert_eq!(adjust_svg_tag_name("foreignobject"), "foreignObject");
        assert_eq!(adjust_svg_attribute("viewbox"), "viewBox");
        assert_eq!(adjust_svg_tag_name("circle"), "circle");
    }

    #[test]
    fn quirky_doctypes() {
        assert!(doctype_is_quirky(None, None, None));
        assert!(!doctype_is_quirky(Some("html"), None, None));
        assert!(doctype_is_quirky(
            Some("html"),
            Some("-//W3C//DTD HTML 4.01 Transitional//EN"),
            None,
        ));
        assert!(!doctype_is_quirky(
            Some("html"),
            Some("-//W3C//DTD HTML 4.01 Transitional//EN"),
            Some("http://www.w3.org/TR/html4/loose.dtd"),
        ));
    }
}
