use crate::dom::{Control, ElementLookup};
use crate::error::{ControllerError, Result};

/// A navbar burger and the menu it opens.
///
/// The target is looked up on every click, so menus added after startup
/// still work as long as their id is in place by then.
#[derive(Debug, Clone)]
pub struct Burger<E> {
    index: usize,
    element: E,
    target_attribute: String,
}

impl<E: Control> Burger<E> {
    pub fn new(index: usize, element: E, target_attribute: impl Into<String>) -> Self {
        Self {
            index,
            element,
            target_attribute: target_attribute.into(),
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn target_id(&self) -> Option<String> {
        self.element
            .attribute(&self.target_attribute)
            .filter(|id| !id.is_empty())
    }

    /// Flip `active_class` on the burger and its target together.
    ///
    /// Nothing changes when the target can't be resolved, so the pair never
    /// drifts apart.
    pub fn toggle<D>(&self, page: &D, active_class: &str) -> Result<bool>
    where
        D: ElementLookup<Element = E>,
    {
        let target = self
            .target_id()
            .and_then(|id| page.element_by_id(&id))
            .ok_or_else(|| ControllerError::MissingTarget {
                index: self.index,
                attribute: self.target_attribute.clone(),
            })?;

        let active = self.element.toggle_class(active_class);
        target.toggle_class(active_class);
        Ok(active)
    }
}
