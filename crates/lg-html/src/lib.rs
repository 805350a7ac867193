//! LG HTML Loader
//!
//! Turns markup into an `lg_dom::Document` using html5ever.

mod parser;

pub use parser::HtmlParser;

use lg_dom::Document;

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build document: {0}")]
    Tree(#[from] lg_dom::DomError),
}
