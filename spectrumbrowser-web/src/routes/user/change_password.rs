use leptos::*;

use crate::components::ChangePasswordForm;

#[component]
pub fn ChangePassword() -> impl IntoView {
    view! { <ChangePasswordForm /> }.into_view()
}
