use std::rc::Rc;

use leptos::*;
use leptos_router::use_navigate;
use spectrumbrowser::ScreenHost;

use crate::vars::LOGIN_PATH;

/// Hides the current panel and routes back to the login screen.
pub struct RouterScreenHost {
    panel_open: RwSignal<bool>,
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterScreenHost {
    // must be created inside the Router
    pub fn new(panel_open: RwSignal<bool>) -> Self {
        let navigate = use_navigate();
        Self {
            panel_open,
            navigate: Rc::new(move |path: &str| {
                navigate(path, Default::default())
            }),
        }
    }
}

impl ScreenHost for RouterScreenHost {
    fn clear_panel(&self) {
        self.panel_open.set(false);
    }

    fn draw_login(&self) {
        (self.navigate)(LOGIN_PATH);
    }
}
