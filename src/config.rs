use serde::Deserialize;

/// Id of the optional `<script type="application/json">` block that overrides
/// the page contract.
pub const CONFIG_ELEMENT_ID: &str = "page-controller-config";

/// Names of everything the controller looks for on the page.
///
/// Defaults match the markup served with the scrape page. Any field may be
/// overridden from the config block; omitted fields keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_burger_class")]
    pub burger_class: String,
    #[serde(default = "default_target_attribute")]
    pub target_attribute: String,
    #[serde(default = "default_form_id")]
    pub form_id: String,
    #[serde(default = "default_input_id")]
    pub input_id: String,
    #[serde(default = "default_button_id")]
    pub button_id: String,
    #[serde(default = "default_container_id")]
    pub container_id: String,
    #[serde(default = "default_active_class")]
    pub active_class: String,
    #[serde(default = "default_loading_class")]
    pub loading_class: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_burger_class() -> String {
    "navbar-burger".to_string()
}

fn default_target_attribute() -> String {
    "data-target".to_string()
}

fn default_form_id() -> String {
    "website-url-form".to_string()
}

fn default_input_id() -> String {
    "website-url-input".to_string()
}

fn default_button_id() -> String {
    "scrape-submit-button".to_string()
}

fn default_container_id() -> String {
    "media-container".to_string()
}

fn default_active_class() -> String {
    "is-active".to_string()
}

fn default_loading_class() -> String {
    "is-loading".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            burger_class: default_burger_class(),
            target_attribute: default_target_attribute(),
            form_id: default_form_id(),
            input_id: default_input_id(),
            button_id: default_button_id(),
            container_id: default_container_id(),
            active_class: default_active_class(),
            loading_class: default_loading_class(),
            log_level: default_log_level(),
        }
    }
}

impl PageConfig {
    /// Parse an override block. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Like [`PageConfig::from_json`], but a malformed block yields the
    /// defaults together with the parse error so the caller can report it.
    pub fn from_json_or_default(json: &str) -> (Self, Option<serde_json::Error>) {
        match Self::from_json(json) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// CSS selector matching every burger element.
    pub fn burger_selector(&self) -> String {
        format!(".{}", self.burger_class)
    }

    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" | "warning" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

/// Read the config block from `document`.
///
/// Called once the document has been parsed, so the block may sit anywhere
/// in the page, before or after the module script.
///
/// # Fallback Behavior
///
/// Returns the defaults if there is no config block or the block is not
/// valid JSON. Only the latter is worth a console warning; most pages never
/// ship a config block.
pub fn load_config(document: &web_sys::Document) -> PageConfig {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());

    match text {
        Some(json) => {
            let (config, err) = PageConfig::from_json_or_default(&json);
            if let Some(e) = err {
                // The logger is not up yet; go straight to the console.
                web_sys::console::warn_1(
                    &format!("Scrape page: ignoring malformed config block: {}", e).into(),
                );
            }
            config
        }
        None => PageConfig::default(),
    }
}
