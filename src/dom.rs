//! Element access the controller needs from the page.
//!
//! Everything the controller touches goes through [`Control`] and
//! [`ElementLookup`], so the same logic runs against `web_sys` in the browser
//! and against an in-memory page in unit tests.

/// A single element: its class list and attributes.
///
/// Handles are cheap clones that refer to the same underlying node, which is
/// how `web_sys::Element` behaves.
pub trait Control: Clone {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&self, class: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// Resolves elements by id.
pub trait ElementLookup {
    type Element: Control;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

impl Control for web_sys::Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.class_list().toggle(class).unwrap_or(false)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = web_sys::Element::set_attribute(self, name, value);
    }

    fn remove_attribute(&self, name: &str) {
        let _ = web_sys::Element::remove_attribute(self, name);
    }
}

impl ElementLookup for web_sys::Document {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.get_element_by_id(id)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory page used by the unit tests.

    use super::{Control, ElementLookup};
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Node {
        classes: BTreeSet<String>,
        attributes: BTreeMap<String, String>,
    }

    #[derive(Debug, Clone, Default)]
    pub struct MemoryElement {
        id: String,
        node: Rc<RefCell<Node>>,
    }

    impl MemoryElement {
        pub fn new(id: &str) -> Self {
            Self {
                id: id.to_string(),
                node: Rc::default(),
            }
        }

        pub fn with_attribute(self, name: &str, value: &str) -> Self {
            self.set_attribute(name, value);
            self
        }

        pub fn with_class(self, class: &str) -> Self {
            self.add_class(class);
            self
        }

        pub fn id(&self) -> &str {
            &self.id
        }
    }

    impl Control for MemoryElement {
        fn has_class(&self, class: &str) -> bool {
            self.node.borrow().classes.contains(class)
        }

        fn add_class(&self, class: &str) {
            self.node.borrow_mut().classes.insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.node.borrow_mut().classes.remove(class);
        }

        fn toggle_class(&self, class: &str) -> bool {
            let mut node = self.node.borrow_mut();
            if node.classes.remove(class) {
                false
            } else {
                node.classes.insert(class.to_string());
                true
            }
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.node.borrow().attributes.get(name).cloned()
        }

        fn set_attribute(&self, name: &str, value: &str) {
            self.node
                .borrow_mut()
                .attributes
                .insert(name.to_string(), value.to_string());
        }

        fn remove_attribute(&self, name: &str) {
            self.node.borrow_mut().attributes.remove(name);
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct MemoryPage {
        elements: Vec<MemoryElement>,
    }

    impl MemoryPage {
        pub fn insert(&mut self, element: MemoryElement) -> MemoryElement {
            self.elements.push(element.clone());
            element
        }
    }

    impl ElementLookup for MemoryPage {
        type Element = MemoryElement;

        fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
            self.elements.iter().find(|e| e.id() == id).cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::{MemoryElement, MemoryPage};
    use super::*;

    #[test]
    fn test_toggle_class_reports_new_state() {
        let el = MemoryElement::new("menu");
        assert!(el.toggle_class("is-active"));
        assert!(el.has_class("is-active"));
        assert!(!el.toggle_class("is-active"));
        assert!(!el.has_class("is-active"));
    }

    #[test]
    fn test_clones_share_the_same_node() {
        let el = MemoryElement::new("button");
        let other = el.clone();
        other.set_attribute("disabled", "true");
        assert!(el.has_attribute("disabled"));
        el.remove_attribute("disabled");
        assert!(!other.has_attribute("disabled"));
    }

    #[test]
    fn test_lookup_by_id() {
        let mut page = MemoryPage::default();
        page.insert(MemoryElement::new("a").with_class("x"));
        page.insert(MemoryElement::new("b"));

        assert!(page.element_by_id("a").is_some_and(|e| e.has_class("x")));
        assert!(page.element_by_id("b").is_some());
        assert!(page.element_by_id("missing").is_none());
    }
}
