//! Declarative markers, roles and notification names

/// Hamburger trigger button
pub const HAMBURGER: &str = "data-lg-hamburger";
/// Region a hamburger may control
pub const NAV: &str = "data-lg-nav";
/// Accordion root
pub const ACCORDION: &str = "data-lg-accordion";
/// Accordion trigger, paired with `aria-controls`
pub const ACC_TRIGGER: &str = "data-lg-acc-trigger";
/// Tab set root
pub const TABS: &str = "data-lg-tabs";
/// JSON options payload on any widget element
pub const OPTIONS: &str = "data-lg-options";

pub mod roles {
    pub const TABLIST: &str = "tablist";
    pub const TAB: &str = "tab";
    pub const TABPANEL: &str = "tabpanel";
}

pub mod events {
    pub const NAV_OPEN: &str = "lg:nav:open";
    pub const NAV_CLOSE: &str = "lg:nav:close";
    pub const ACCORDION_TOGGLE: &str = "lg:accordion:toggle";
    pub const TABS_CHANGE: &str = "lg:tabs:change";
}
