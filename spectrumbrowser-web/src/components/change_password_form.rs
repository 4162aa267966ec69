use std::rc::Rc;

use futures::FutureExt;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::*;
use spectrumbrowser::vars::CHANGE_PASSWORD_LABEL;
use spectrumbrowser::{ChangePasswordScreen, Screen};
use wasm_bindgen_futures::spawn_local;

use crate::api::FetchCredentialService;
use crate::components::buttons::{ButtonType, ClickButton, FormButton};
use crate::helpers::alert::WindowAlert;
use crate::helpers::form_fields::read_credential_fields;
use crate::helpers::navigation::RouterScreenHost;
use crate::vars::{
    CONFIRM_PASSWORD_INPUT_ID, EMAIL_INPUT_ID, NEW_PASSWORD_INPUT_ID,
    OLD_PASSWORD_INPUT_ID,
};
use crate::GlobalState;

#[component]
pub fn ChangePasswordForm() -> impl IntoView {
    let state = use_context::<RwSignal<GlobalState>>()
        .expect("state to have been provided");
    let service_url =
        state.with_untracked(|state| state.config.change_password_url());

    let panel_open = create_rw_signal(true);
    let screen = Rc::new(ChangePasswordScreen::new(
        Rc::new(FetchCredentialService::new(service_url)),
        Rc::new(WindowAlert),
        Rc::new(RouterScreenHost::new(panel_open)),
    ));
    screen.draw();

    let on_submit = {
        let screen = Rc::clone(&screen);
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if let Some(pending) = screen.submit(read_credential_fields()) {
                // runs to completion even after this form is unmounted
                spawn_local(pending.map(|_| ()));
            }
        }
    };

    let on_cancel = move |ev: MouseEvent| {
        ev.prevent_default();
        screen.cancel();
    };

    let submit_button = FormButton::new(ButtonType::Submit);
    let cancel_button = FormButton::new(ButtonType::Cancel);

    view! {
        <form
            class=move || {
                if panel_open.get() {
                    "flex flex-col w-96 text-black p-4 font-mono"
                } else {
                    "hidden"
                }
            }
            on:submit=on_submit
        >
            <h2 class="w-full text-2xl mb-4">{CHANGE_PASSWORD_LABEL}</h2>
            <CredentialInput
                id=EMAIL_INPUT_ID
                label="Email Address"
                input_type="text"
            />
            <CredentialInput
                id=OLD_PASSWORD_INPUT_ID
                label="Current Password"
                input_type="password"
            />
            <CredentialInput
                id=NEW_PASSWORD_INPUT_ID
                label="New Password"
                input_type="password"
            />
            <CredentialInput
                id=CONFIRM_PASSWORD_INPUT_ID
                label="Re-type New Password"
                input_type="password"
            />
            <div class="flex gap-2">
                {submit_button.into_view()}
                <ClickButton
                    form_button=cancel_button
                    enabled=panel_open.into()
                    on_click=on_cancel
                />
            </div>
        </form>
    }
}

#[component]
fn CredentialInput(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col mb-4">
            <label for=id class="mb-2 text-base font-semibold text-gray-900">
                {label}
            </label>
            <input
                id=id
                type=input_type
                class="shadow appearance-none border rounded w-full py-2 px-3 text-gray-700 leading-tight focus:outline-none focus:shadow-outline"
            />
        </div>
    }
}
