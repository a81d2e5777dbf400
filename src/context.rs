/// What a parser should expect the input to be.
///
/// By default parsers detect the context themselves: an input that starts
/// with a doctype is a document, `<td>…` is a fragment of a table row, and
/// so on (the HTML rules are in the tree constructor; XML inputs that open
/// with character data are fragments). Pass a `Context` via the
/// `context(..)` option to fix it instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Context {
    /// A complete document: one root element, with misc content around it.
    Document,
    /// A fragment of content, as found inside the named element. The name
    /// matters to HTML (it selects the insertion mode, e.g. `"tr"` or
    /// `"svg"`); XML fragments ignore it.
    Fragment(String),
}

impl Context {
    /// A fragment context inside the named element.
    pub fn fragment(name: impl Into<String>) -> Context {
        Context::Fragment(name.into())
    }
}
