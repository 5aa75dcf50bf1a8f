//! The page interaction controller.
//!
//! Built once per page load from explicit element handles. Browser listeners
//! translate DOM events into [`PageEvent`]s and hand them to
//! [`PageController::handle`]; nothing here knows about `web_sys`.
//!
//! Burgers are resolved up front. The form controls are looked up on every
//! use, so a page without the scrape form still gets a working navbar and
//! only the form events fail.

use crate::config::PageConfig;
use crate::dom::ElementLookup;
use crate::error::{ControllerError, Result};
use crate::form::{FormState, ScrapeForm};
use crate::menu::Burger;

/// Everything the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// A burger was clicked, identified by its position in document order.
    BurgerClicked(usize),
    /// The scrape form was submitted.
    FormSubmitted,
    /// The media container gained or lost children.
    ContainerChildrenChanged,
}

pub struct PageController<D: ElementLookup> {
    page: D,
    burgers: Vec<Burger<D::Element>>,
    input_id: String,
    button_id: String,
    active_class: String,
    loading_class: String,
}

impl<D: ElementLookup> PageController<D> {
    pub fn new(config: &PageConfig, page: D, burgers: Vec<D::Element>) -> Self {
        let burgers = burgers
            .into_iter()
            .enumerate()
            .map(|(i, el)| Burger::new(i, el, config.target_attribute.as_str()))
            .collect();

        Self {
            page,
            burgers,
            input_id: config.input_id.clone(),
            button_id: config.button_id.clone(),
            active_class: config.active_class.clone(),
            loading_class: config.loading_class.clone(),
        }
    }

    pub fn handle(&self, event: PageEvent) -> Result<()> {
        log::debug!("page event: {:?}", event);
        match event {
            PageEvent::BurgerClicked(index) => self.toggle_burger(index).map(|_| ()),
            PageEvent::FormSubmitted => self.form().map(|form| form.lock_for_submit()),
            PageEvent::ContainerChildrenChanged => self.enable_form(),
        }
    }

    /// Returns whether the burger is active afterwards.
    pub fn toggle_burger(&self, index: usize) -> Result<bool> {
        let burger = self
            .burgers
            .get(index)
            .ok_or(ControllerError::UnknownBurger { index })?;
        burger.toggle(&self.page, &self.active_class)
    }

    pub fn enable_form(&self) -> Result<()> {
        self.form().map(|form| form.enable())
    }

    pub fn disable_form(&self) -> Result<()> {
        self.form().map(|form| form.disable())
    }

    pub fn form_state(&self) -> Result<FormState> {
        self.form().map(|form| form.state())
    }

    pub fn burger_count(&self) -> usize {
        self.burgers.len()
    }

    fn form(&self) -> Result<ScrapeForm<D::Element>> {
        let input = require(&self.page, &self.input_id)?;
        let button = require(&self.page, &self.button_id)?;
        Ok(ScrapeForm::new(input, button, self.loading_class.as_str()))
    }
}

pub(crate) fn require<D: ElementLookup>(page: &D, id: &str) -> Result<D::Element> {
    page.element_by_id(id)
        .ok_or_else(|| ControllerError::MissingElement { id: id.to_string() })
}
