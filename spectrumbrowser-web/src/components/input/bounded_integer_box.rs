use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev::Event;
use leptos::*;
use spectrumbrowser::{AlertSink, BoundedIntegerField, DayCountOwner};

use crate::helpers::alert::WindowAlert;

/// Labeled text box holding a day-count in `[1, max_days]`. Values are
/// checked on commit (blur or enter), out of range input is reset.
#[component]
pub fn BoundedIntegerBox(
    label: String,
    initial_value: String,
    max_days: u32,
    owner: Rc<dyn DayCountOwner>,
    #[prop(into)] enabled: MaybeSignal<bool>,
    // window.alert when not given
    #[prop(optional)] alerts: Option<Rc<dyn AlertSink>>,
) -> impl IntoView {
    let alerts = alerts.unwrap_or_else(|| Rc::new(WindowAlert));
    let field =
        Rc::new(RefCell::new(BoundedIntegerField::new(&label, &initial_value)));
    field.borrow_mut().on_commit(max_days, owner);
    let title = field.borrow().title().map(str::to_string);

    let display_value = create_rw_signal(initial_value);

    create_effect({
        let field = Rc::clone(&field);
        move |_| field.borrow_mut().set_enabled(enabled.get())
    });

    let on_change = move |ev: Event| {
        let mut field = field.borrow_mut();
        if !field.is_enabled() {
            return;
        }
        field.set_value(event_target_value(&ev));
        field.commit(alerts.as_ref());
        display_value.set(field.value().to_string());
    };

    view! {
        <div class="flex items-center justify-center mb-2">
            <label class="mr-2 text-base">{label}</label>
            <input
                type="text"
                class="w-12 text-center bg-gray-50 border border-gray-300 text-gray-900 rounded-lg p-1"
                title=title
                prop:value=display_value
                on:change=on_change
                disabled=move || !enabled.get()
            />
        </div>
    }
}
