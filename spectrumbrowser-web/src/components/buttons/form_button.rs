use leptos::*;

use super::button_type::ButtonType;

#[derive(Clone)]
pub struct FormButton {
    button_type: ButtonType,
    enabled: bool,
}

impl FormButton {
    pub fn new(button_type: ButtonType) -> Self {
        Self {
            button_type,
            enabled: true, // default
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn text(&self) -> &'static str {
        self.button_type.button_text()
    }

    pub fn button_class(&self) -> String {
        self.button_type.button_class(!self.is_enabled())
    }

    pub fn into_view(self) -> impl IntoView {
        view! {
            <button
                type="submit"
                class=self.button_class()
                disabled={!self.is_enabled()}
            >
                {self.text()}
            </button>
        }
        .into_view()
    }
}
