mod button_type;
mod click_button;
mod form_button;

pub use button_type::ButtonType;
pub use click_button::ClickButton;
pub use form_button::FormButton;
