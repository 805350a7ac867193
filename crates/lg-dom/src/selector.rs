//! Selector Matching
//!
//! Compound simple selectors: `tag`, `*`, `#id`, `.class` and any number of
//! `[attr]` / `[attr="value"]` filters. No combinators, no groups.

use crate::ElementData;

const DELIMS: [char; 3] = ['#', '.', '['];

/// Attribute filter inside `[...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrFilter {
    Exists(String),
    Equals(String, String),
}

impl AttrFilter {
    fn parse(inner: &str) -> Option<Self> {
        match inner.split_once('=') {
            Some((name, value)) => {
                let name = valid_name(name.trim())?;
                let value = value.trim();
                let value = ['"', '\'']
                    .iter()
                    .find_map(|q| value.strip_prefix(*q)?.strip_suffix(*q))
                    .unwrap_or(value);
                Some(Self::Equals(name.to_string(), value.to_string()))
            }
            None => Some(Self::Exists(valid_name(inner.trim())?.to_string())),
        }
    }

    fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Exists(name) => elem.has_attr(name),
            Self::Equals(name, value) => elem.get_attr(name) == Some(value.as_str()),
        }
    }
}

/// Parsed compound selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrFilter>,
}

impl Selector {
    /// Parse a selector string; `None` when it uses unsupported syntax
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        let mut sel = Selector::default();
        let tag_end = s.find(DELIMS).unwrap_or(s.len());
        let tag = &s[..tag_end];
        if !tag.is_empty() && tag != "*" {
            sel.tag = Some(valid_name(tag)?.to_ascii_lowercase());
        }

        let mut rest = &s[tag_end..];
        while let Some(c) = rest.chars().next() {
            match c {
                '#' | '.' => {
                    let body = &rest[1..];
                    let end = body.find(DELIMS).unwrap_or(body.len());
                    let name = valid_name(&body[..end])?.to_string();
                    if c == '#' {
                        sel.id = Some(name);
                    } else {
                        sel.classes.push(name);
                    }
                    rest = &body[end..];
                }
                '[' => {
                    let close = rest.find(']')?;
                    sel.attrs.push(AttrFilter::parse(&rest[1..close])?);
                    rest = &rest[close + 1..];
                }
                _ => return None,
            }
        }
        Some(sel)
    }

    pub fn matches(&self, elem: &ElementData) -> bool {
        if let Some(tag) = &self.tag {
            if !elem.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if elem.id() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| elem.classes().any(|have| have == c)) {
            return false;
        }
        self.attrs.iter().all(|f| f.matches(elem))
    }
}

fn valid_name(s: &str) -> Option<&str> {
    let ok = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'));
    ok.then_some(s)
}
