//! Element Attributes
//!
//! Attribute manipulation: get, set, remove, has, toggle.

use std::collections::HashMap;

/// Named node map (attribute collection), kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn is_id(&self) -> bool {
        self.name == "id"
    }
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn length(&self) -> usize {
        self.attributes.len()
    }

    /// Get attribute by index
    pub fn item(&self, index: usize) -> Option<&Attr> {
        self.attributes.get(index)
    }

    /// Get attribute by name
    pub fn get_named_item(&self, name: &str) -> Option<&Attr> {
        self.by_name.get(name).and_then(|&i| self.attributes.get(i))
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.get_named_item(name).map(|a| a.value.as_str())
    }

    /// Set attribute, returning the replaced one
    pub fn set_named_item(&mut self, attr: Attr) -> Option<Attr> {
        if let Some(&index) = self.by_name.get(&attr.name) {
            Some(std::mem::replace(&mut self.attributes[index], attr))
        } else {
            self.by_name.insert(attr.name.clone(), self.attributes.len());
            self.attributes.push(attr);
            None
        }
    }

    /// Set attribute by name/value
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(&index) = self.by_name.get(name) {
            let slot = &mut self.attributes[index].value;
            slot.clear();
            slot.push_str(value);
        } else {
            self.set_named_item(Attr::new(name, value));
        }
    }

    /// Remove attribute by name
    pub fn remove_named_item(&mut self, name: &str) -> Option<Attr> {
        let index = self.by_name.remove(name)?;
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.attributes.remove(index))
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Toggle a boolean attribute; `force` pins the outcome
    pub fn toggle_attribute(&mut self, name: &str, force: Option<bool>) -> bool {
        let present = self.has_attribute(name);
        let want = force.unwrap_or(!present);
        match (present, want) {
            (false, true) => self.set_attribute(name, ""),
            (true, false) => {
                self.remove_named_item(name);
            }
            _ => {}
        }
        want
    }

    /// Get attribute names
    pub fn get_attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Iterate over attributes
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_attribute() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("aria-expanded", "false");
        attrs.set_attribute("aria-controls", "nav");

        assert_eq!(attrs.length(), 2);
        assert_eq!(attrs.get_attribute("aria-expanded"), Some("false"));
        assert_eq!(attrs.get_attribute("aria-controls"), Some("nav"));

        attrs.set_attribute("aria-expanded", "true");
        assert_eq!(attrs.length(), 2);
        assert_eq!(attrs.get_attribute("aria-expanded"), Some("true"));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("a", "1");
        attrs.set_attribute("b", "2");
        attrs.set_attribute("c", "3");

        assert!(attrs.remove_named_item("a").is_some());
        assert!(attrs.remove_named_item("a").is_none());
        assert_eq!(attrs.get_attribute_names(), vec!["b", "c"]);
        assert_eq!(attrs.get_attribute("c"), Some("3"));
    }

    #[test]
    fn test_toggle_attribute() {
        let mut attrs = NamedNodeMap::new();

        assert!(attrs.toggle_attribute("hidden", None));
        assert!(attrs.has_attribute("hidden"));
        assert!(attrs.toggle_attribute("hidden", Some(true)));
        assert!(!attrs.toggle_attribute("hidden", None));
        assert!(!attrs.has_attribute("hidden"));
    }
}
