use spectrumbrowser::{CredentialFields, FieldRead, FieldReadError};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::vars::{
    CONFIRM_PASSWORD_INPUT_ID, EMAIL_INPUT_ID, NEW_PASSWORD_INPUT_ID,
    OLD_PASSWORD_INPUT_ID,
};

/// Read the value of the `<input>` with element id `id`.
pub fn read_input(id: &str) -> FieldRead {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| {
            FieldReadError::Unavailable("no document available".to_string())
        })?;

    match document.get_element_by_id(id) {
        Some(element) => element
            .dyn_into::<HtmlInputElement>()
            .map(|input| Some(input.value()))
            .map_err(|_| FieldReadError::NotAnInput(id.to_string())),
        None => Ok(None),
    }
}

pub fn read_credential_fields() -> CredentialFields {
    CredentialFields {
        email: read_input(EMAIL_INPUT_ID),
        old_password: read_input(OLD_PASSWORD_INPUT_ID),
        new_password: read_input(NEW_PASSWORD_INPUT_ID),
        confirm_password: read_input(CONFIRM_PASSWORD_INPUT_ID),
    }
}
