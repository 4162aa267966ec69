use leptos::*;
use spectrumbrowser::vars::CHANGE_PASSWORD_LABEL;

use crate::vars::{CHANGE_PASSWORD_PATH, DAY_COUNT_PATH};

#[component]
pub fn Login() -> impl IntoView {
    view! {
        <div class="flex flex-col w-96 p-4 font-mono">
            <h2 class="w-full text-2xl mb-4">"Spectrum Browser"</h2>
            <a href=DAY_COUNT_PATH class="text-blue-600 hover:text-blue-800 mb-2">
                "Sensor Data"
            </a>
            <a href=CHANGE_PASSWORD_PATH class="text-blue-600 hover:text-blue-800">
                {CHANGE_PASSWORD_LABEL}
            </a>
        </div>
    }
}
