use crate::dom::Control;

const DISABLED: &str = "disabled";

/// Snapshot of the scrape form's visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormState {
    pub input_disabled: bool,
    pub button_disabled: bool,
    pub button_loading: bool,
}

impl FormState {
    pub const ENABLED: FormState = FormState {
        input_disabled: false,
        button_disabled: false,
        button_loading: false,
    };

    pub const SUBMITTING: FormState = FormState {
        input_disabled: true,
        button_disabled: true,
        button_loading: true,
    };
}

/// The URL input and its submit button.
#[derive(Debug, Clone)]
pub struct ScrapeForm<E> {
    input: E,
    button: E,
    loading_class: String,
}

impl<E: Control> ScrapeForm<E> {
    pub fn new(input: E, button: E, loading_class: impl Into<String>) -> Self {
        Self {
            input,
            button,
            loading_class: loading_class.into(),
        }
    }

    pub fn enable(&self) {
        self.input.remove_attribute(DISABLED);
        self.button.remove_attribute(DISABLED);
        self.button.remove_class(&self.loading_class);
    }

    /// Disables both controls. Clears the loading marker rather than setting
    /// it; [`ScrapeForm::lock_for_submit`] is what adds it.
    pub fn disable(&self) {
        self.input.set_attribute(DISABLED, "true");
        self.button.set_attribute(DISABLED, "true");
        self.button.remove_class(&self.loading_class);
    }

    pub fn lock_for_submit(&self) {
        self.disable();
        self.button.add_class(&self.loading_class);
    }

    pub fn state(&self) -> FormState {
        FormState {
            input_disabled: self.input.has_attribute(DISABLED),
            button_disabled: self.button.has_attribute(DISABLED),
            button_loading: self.button.has_class(&self.loading_class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryElement;

    fn form() -> ScrapeForm<MemoryElement> {
        ScrapeForm::new(
            MemoryElement::new("website-url-input"),
            MemoryElement::new("scrape-submit-button"),
            "is-loading",
        )
    }

    #[test]
    fn test_fresh_form_is_enabled() {
        assert_eq!(form().state(), FormState::ENABLED);
    }

    #[test]
    fn test_lock_for_submit() {
        let form = form();
        form.lock_for_submit();
        assert_eq!(form.state(), FormState::SUBMITTING);
    }

    #[test]
    fn test_disable_clears_loading_without_setting_it() {
        let form = form();
        form.lock_for_submit();
        form.disable();
        assert_eq!(
            form.state(),
            FormState {
                input_disabled: true,
                button_disabled: true,
                button_loading: false,
            }
        );
    }

    #[test]
    fn test_enable_clears_everything() {
        let form = form();
        form.lock_for_submit();
        form.enable();
        assert_eq!(form.state(), FormState::ENABLED);
    }

    #[test]
    fn test_enable_and_disable_are_idempotent() {
        let form = form();

        form.disable();
        let once = form.state();
        form.disable();
        assert_eq!(form.state(), once);

        form.enable();
        let once = form.state();
        form.enable();
        assert_eq!(form.state(), once);
        assert_eq!(once, FormState::ENABLED);
    }
}
