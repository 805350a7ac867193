//! Shared markup fixtures

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use lg_dom::{Document, EventType, NodeId};

pub const HAMBURGER: &str = r#"
<header>
  <button id="menu" data-lg-hamburger aria-controls="site-nav" aria-expanded="false">
    <span id="menu-icon">Menu</span>
  </button>
  <nav id="site-nav" data-lg-nav data-state="closed">
    <a id="nav-link" href="/a">A</a>
  </nav>
</header>
<main><p id="outside">Body copy</p></main>
"#;

pub const ACCORDION: &str = r#"
<div id="faq" data-lg-accordion>
  <h3><button id="q1" data-lg-acc-trigger aria-controls="a1" aria-expanded="true">Q1</button></h3>
  <div id="a1" role="region" aria-labelledby="q1">A1</div>
  <h3><button id="q2" data-lg-acc-trigger aria-controls="a2">Q2</button></h3>
  <div id="a2" role="region" aria-labelledby="q2">A2</div>
  <h3><button id="q3" data-lg-acc-trigger aria-controls="a3">Q3</button></h3>
  <div id="a3" role="region" aria-labelledby="q3" hidden>A3</div>
</div>
"#;

pub const TABS: &str = r#"
<div id="panes" data-lg-tabs>
  <div role="tablist" aria-label="Sections">
    <button role="tab" id="t0" aria-controls="p0">One</button>
    <button role="tab" id="t1" aria-controls="p1">Two</button>
    <button role="tab" id="t2" aria-controls="p2">Three</button>
    <button role="tab" id="t3" aria-controls="p3">Four</button>
  </div>
  <section role="tabpanel" id="p0" aria-labelledby="t0">1</section>
  <section role="tabpanel" id="p1" aria-labelledby="t1">2</section>
  <section role="tabpanel" id="p2" aria-labelledby="t2">3</section>
  <section role="tabpanel" id="p3" aria-labelledby="t3">4</section>
</div>
"#;

pub fn load(html: &str) -> Document {
    lg_html::parse(html).expect("fixture parses")
}

pub fn by_id(doc: &Document, id: &str) -> NodeId {
    doc.get_element_by_id(id)
        .unwrap_or_else(|| panic!("fixture has #{id}"))
}

pub fn attr(doc: &Document, id: &str, name: &str) -> Option<String> {
    doc.get_attribute(by_id(doc, id), name).map(str::to_owned)
}

/// Count custom events of `name` reaching the document
pub fn count_events(doc: &mut Document, name: &str) -> Rc<RefCell<usize>> {
    let count = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&count);
    let root = doc.root();
    doc.add_event_listener(root, EventType::custom(name), move |_, _| *seen.borrow_mut() += 1);
    count
}
