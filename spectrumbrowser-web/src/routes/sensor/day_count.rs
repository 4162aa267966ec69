use std::rc::Rc;

use leptos::*;
use spectrumbrowser::DayCountOwner;

use crate::components::input::BoundedIntegerBox;
use crate::GlobalState;

/// Owner of the day-count box; keeps the accepted value in the global state
/// and the acquisition window text derived from it.
#[derive(Clone, Copy)]
struct AcquisitionWindow {
    state: RwSignal<GlobalState>,
    summary: RwSignal<String>,
}

impl DayCountOwner for AcquisitionWindow {
    fn set_day_count(&self, day_count: u32) {
        self.state.update(|state| state.day_count = Some(day_count));
    }

    fn update_acquisition_count(&self) {
        let day_count = self.state.with_untracked(|state| state.day_count());
        log::debug!("Acquisition window set to {} days", day_count);
        self.summary.set(window_summary(day_count));
    }
}

fn window_summary(day_count: u32) -> String {
    match day_count {
        1 => "Acquisitions from the last day".to_string(),
        n => format!("Acquisitions from the last {} days", n),
    }
}

#[component]
pub fn DayCount() -> impl IntoView {
    let state = use_context::<RwSignal<GlobalState>>()
        .expect("state to have been provided");
    let (day_count, max_days) = state.with_untracked(|state| {
        (state.day_count(), state.config.max_days)
    });

    let summary = create_rw_signal(window_summary(day_count));
    let owner: Rc<dyn DayCountOwner> =
        Rc::new(AcquisitionWindow { state, summary });

    view! {
        <div class="flex flex-col w-96 p-4 font-mono">
            <h2 class="w-full text-2xl mb-4">"Sensor Data"</h2>
            <BoundedIntegerBox
                label="Days:".to_string()
                initial_value=day_count.to_string()
                max_days
                owner
                enabled=true
            />
            <div class="text-gray-700">{move || summary.get()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn test_window_summary() {
        assert_eq!(window_summary(1), "Acquisitions from the last day");
        assert_eq!(window_summary(14), "Acquisitions from the last 14 days");
    }
}
