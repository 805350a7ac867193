//! `data-lg-options` payloads
//!
//! Each widget reads a JSON object from its element. Absent or blank
//! payloads mean defaults; anything unparseable is an `OptionsError`.

use lg_dom::{Document, NodeId};
use serde::de::DeserializeOwned;

use crate::markers;

/// Malformed options payload
#[derive(Debug, thiserror::Error)]
#[error("invalid {attr} payload: {source}", attr = markers::OPTIONS)]
pub struct OptionsError {
    #[from]
    source: serde_json::Error,
}

/// Read and decode the options payload on `element`
pub fn parse_options<T>(doc: &Document, element: NodeId) -> Result<T, OptionsError>
where
    T: DeserializeOwned + Default,
{
    match doc.get_attribute(element, markers::OPTIONS) {
        Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(raw)?),
        _ => Ok(T::default()),
    }
}
