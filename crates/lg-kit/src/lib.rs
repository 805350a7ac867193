//! LG UI Kit
//!
//! Accessible widgets that wire behavior onto existing markup:
//! - `Toggle`: hamburger button opening a `data-lg-nav` region
//! - `Accordion`: trigger/panel pairs, single or multiple open
//! - `Tabs`: tab/panel pairs with arrow, Home and End navigation
//!
//! `init_all` scans a document for `data-lg-*` markers and returns a
//! `Registry` owning every instance it built.

pub mod markers;
pub mod state;

mod accordion;
mod bindings;
mod init;
mod options;
mod tabs;
mod toggle;

pub use accordion::{Accordion, AccordionDetail, AccordionOptions};
pub use init::{init_all, Diagnostic, Registry, WidgetKind};
pub use options::{parse_options, OptionsError};
pub use tabs::{Activation, Tabs, TabsDetail, TabsOptions};
pub use toggle::{NavDetail, Toggle, ToggleOptions};

use lg_dom::{Document, NodeId};

/// Lifecycle shared by all widgets
pub trait Widget {
    /// Element the widget was constructed on (trigger or root)
    fn element(&self) -> NodeId;

    /// Normalize attributes and attach listeners. On error the widget stays
    /// inert; the failure has already been logged.
    fn init(&mut self, doc: &mut Document) -> Result<(), WidgetError>;

    /// Detach every listener added by `init`. Safe to call repeatedly.
    fn destroy(&mut self, doc: &mut Document);

    /// Whether `init` succeeded and `destroy` has not run since
    fn is_active(&self) -> bool;
}

/// Wiring failure that leaves a widget inert
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("trigger has neither a target option nor aria-controls")]
    MissingTarget,

    #[error("target #{0} not found")]
    TargetNotFound(String),

    #[error("#{0} is not marked with {marker}", marker = markers::NAV)]
    NotANavRegion(String),
}
