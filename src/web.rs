//! Browser wiring: turns DOM events into [`PageEvent`]s.
//!
//! The decisions made here (when to install, which DOM events map to which
//! page events, what the container observer watches) are plain values so
//! they can be checked without a browser.

use crate::config::{load_config, PageConfig};
use crate::controller::{require, PageController, PageEvent};
use crate::dom::ElementLookup;
use crate::error::Result;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MutationObserver, MutationObserverInit};

pub type BrowserController = PageController<Document>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallTiming {
    /// The parser is still running; wait for `DOMContentLoaded`.
    OnContentLoaded,
    /// `DOMContentLoaded` already fired (or is firing); install now.
    Now,
}

/// Map `document.readyState` to when the controller should be installed.
pub fn install_timing(ready_state: &str) -> InstallTiming {
    match ready_state {
        "loading" => InstallTiming::OnContentLoaded,
        _ => InstallTiming::Now,
    }
}

/// What a `MutationObserver` is asked to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserveOptions {
    pub child_list: bool,
    pub subtree: bool,
    pub attributes: bool,
    pub character_data: bool,
}

/// Direct children of the media container only.
pub const CONTAINER_OBSERVE: ObserveOptions = ObserveOptions {
    child_list: true,
    subtree: false,
    attributes: false,
    character_data: false,
};

impl ObserveOptions {
    fn to_init(self) -> MutationObserverInit {
        let init = MutationObserverInit::new();
        init.set_child_list(self.child_list);
        init.set_subtree(self.subtree);
        init.set_attributes(self.attributes);
        init.set_character_data(self.character_data);
        init
    }
}

/// One DOM listener and the page event it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    pub dom_event: &'static str,
    pub event: PageEvent,
    pub prevent_default: bool,
}

impl Subscription {
    pub fn burger(index: usize) -> Self {
        Self {
            dom_event: "click",
            event: PageEvent::BurgerClicked(index),
            prevent_default: false,
        }
    }

    /// The scrape request still goes out; the lock is a side effect only.
    pub const SUBMIT: Subscription = Subscription {
        dom_event: "submit",
        event: PageEvent::FormSubmitted,
        prevent_default: false,
    };
}

/// Install the controller once the document has been parsed.
///
/// The wasm module may start before or after `DOMContentLoaded`; in the
/// latter case the listener would never fire, so install right away.
pub fn install_when_ready(document: Document) {
    match install_timing(&document.ready_state()) {
        InstallTiming::OnContentLoaded => {
            let target = document.clone();
            let closure = Closure::once(Box::new(move |_: Event| {
                start(&target);
            }) as Box<dyn FnOnce(Event)>);

            let _ = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
        InstallTiming::Now => start(&document),
    }
}

fn start(document: &Document) {
    let config = load_config(document);
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Err(e) = install(document, &config) {
        log::error!("Scrape page: controller not installed: {}", e);
    }
}

/// Register every listener the page supports.
///
/// Burgers are wired first and do not depend on the form. A missing form or
/// media container only disables that part, with an error in the console.
/// Listener closures are leaked on purpose: they live exactly as long as the
/// page does.
pub fn install(document: &Document, config: &PageConfig) -> Result<Rc<BrowserController>> {
    let burgers = burger_elements(document, &config.burger_selector())?;
    let controller = Rc::new(PageController::new(
        config,
        document.clone(),
        burgers.clone(),
    ));

    for (index, burger) in burgers.iter().enumerate() {
        subscribe(burger, Subscription::burger(index), Rc::clone(&controller))?;
    }

    match require(document, &config.form_id) {
        Ok(form) => subscribe(&form, Subscription::SUBMIT, Rc::clone(&controller))?,
        Err(e) => log::error!("Scrape page: form lock not wired: {}", e),
    }

    match require(document, &config.container_id) {
        Ok(container) => {
            observe_children(&container, CONTAINER_OBSERVE, Rc::clone(&controller))?
        }
        Err(e) => log::error!("Scrape page: form unlock not wired: {}", e),
    }

    log::info!(
        "Scrape page: controller installed ({} burger(s))",
        controller.burger_count()
    );
    Ok(controller)
}

fn burger_elements(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    let burgers = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    Ok(burgers)
}

fn subscribe(
    target: &Element,
    subscription: Subscription,
    controller: Rc<BrowserController>,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if subscription.prevent_default {
            event.prevent_default();
        }
        dispatch(&controller, subscription.event);
    }) as Box<dyn Fn(Event)>);

    target.add_event_listener_with_callback(
        subscription.dom_event,
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}

fn observe_children(
    container: &Element,
    options: ObserveOptions,
    controller: Rc<BrowserController>,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(move |records: js_sys::Array, _: MutationObserver| {
        deliver(&controller, records.length());
    }) as Box<dyn Fn(js_sys::Array, MutationObserver)>);

    let observer = MutationObserver::new(closure.as_ref().unchecked_ref())?;
    observer.observe_with_options(container, &options.to_init())?;
    closure.forget();
    Ok(())
}

/// Handle one observer delivery. However many records it carries, the form
/// is unlocked once.
fn deliver<D: ElementLookup>(controller: &PageController<D>, record_count: u32) {
    log::debug!("media container changed ({} record(s))", record_count);
    dispatch(controller, PageEvent::ContainerChildrenChanged);
}

fn dispatch<D: ElementLookup>(controller: &PageController<D>, event: PageEvent) {
    if let Err(e) = controller.handle(event) {
        log::warn!("Scrape page: {:?} ignored: {}", event, e);
    }
}
