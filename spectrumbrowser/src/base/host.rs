/// Blocking user notification, `window.alert` in the browser.
pub trait AlertSink {
    fn alert(&self, message: &str);
}

/// The panel a screen draws into, and the way back to the login screen.
pub trait ScreenHost {
    fn clear_panel(&self);
    fn draw_login(&self);
}

pub trait Screen {
    fn draw(&self);

    fn label(&self) -> Option<&str> {
        None
    }

    fn end_label(&self) -> Option<&str> {
        None
    }
}
