mod change_password_form;

pub mod buttons;
pub mod input;

pub use change_password_form::ChangePasswordForm;
