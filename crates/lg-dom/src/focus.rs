//! Focus Management
//!
//! Reachability (`tabindex`) parsing. The focused element itself is tracked
//! on `Document`.

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// `tabindex="-1"`: focusable from script only
    Programmatic,
    /// `tabindex="0"` or positive: part of the sequential order
    Sequential(i32),
}

impl TabIndex {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Some(Self::Programmatic),
            Ok(n) => Some(Self::Sequential(n)),
            Err(_) => None,
        }
    }

    pub fn is_sequential(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }

    /// Attribute value to write back
    pub fn as_attr(&self) -> String {
        match self {
            Self::Programmatic => "-1".to_string(),
            Self::Sequential(n) => n.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_index() {
        assert_eq!(TabIndex::parse("-1"), Some(TabIndex::Programmatic));
        assert_eq!(TabIndex::parse("0"), Some(TabIndex::Sequential(0)));
        assert!(TabIndex::parse(" 3 ").is_some_and(|t| t.is_sequential()));
        assert_eq!(TabIndex::parse("nope"), None);
        assert_eq!(TabIndex::Programmatic.as_attr(), "-1");
    }
}
