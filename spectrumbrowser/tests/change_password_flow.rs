use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use futures::FutureExt;
use spectrumbrowser::{
    AlertSink, ChangePasswordPayload, ChangePasswordScreen, ClientError,
    CredentialFields, CredentialService, ScreenHost, ScreenState,
};

#[derive(Default)]
struct Alerts(RefCell<Vec<String>>);

impl AlertSink for Alerts {
    fn alert(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
struct Panel {
    logins_drawn: RefCell<usize>,
}

impl ScreenHost for Panel {
    fn clear_panel(&self) {}

    fn draw_login(&self) {
        *self.logins_drawn.borrow_mut() += 1;
    }
}

// Service whose reply is delivered by the test through a channel.
struct DeferredService {
    reply: RefCell<Option<oneshot::Receiver<String>>>,
}

impl CredentialService for DeferredService {
    fn change_password(
        &self,
        _payload: ChangePasswordPayload,
    ) -> LocalBoxFuture<'static, Result<String, ClientError>> {
        let rx = self.reply.borrow_mut().take();
        async move {
            match rx {
                Some(rx) => rx.await.map_err(|_| {
                    ClientError::Transport("connection closed".to_string())
                }),
                None => Err(ClientError::Transport("no reply".to_string())),
            }
        }
        .boxed_local()
    }
}

fn filled_form() -> CredentialFields {
    CredentialFields {
        email: Ok(Some("analyst@example.org".to_string())),
        old_password: Ok(Some("current".to_string())),
        new_password: Ok(Some("replacement".to_string())),
        confirm_password: Ok(Some("replacement".to_string())),
    }
}

#[test]
fn test_reply_arrives_after_navigation() {
    let (tx, rx) = oneshot::channel();
    let service = Rc::new(DeferredService {
        reply: RefCell::new(Some(rx)),
    });
    let alerts = Rc::new(Alerts::default());
    let panel = Rc::new(Panel::default());
    let screen =
        ChangePasswordScreen::new(service, alerts.clone(), panel.clone());

    let mut pool = LocalPool::new();
    let pending = screen.submit(filled_form()).expect("request dispatched");
    pool.spawner()
        .spawn_local(pending.map(|_| ()))
        .expect("task spawned");

    pool.run_until_stalled();
    assert_eq!(*panel.logins_drawn.borrow(), 1);
    assert_eq!(screen.state(), ScreenState::Submitting);
    assert!(alerts.0.borrow().is_empty());

    tx.send(r#"{"status_message": "Password changed."}"#.to_string())
        .expect("receiver alive");
    pool.run();
    assert_eq!(screen.state(), ScreenState::Success);
    assert_eq!(*alerts.0.borrow(), vec!["Password changed.".to_string()]);
}

#[test]
fn test_dropped_connection_reports_failure() {
    let (tx, rx) = oneshot::channel::<String>();
    let service = Rc::new(DeferredService {
        reply: RefCell::new(Some(rx)),
    });
    let alerts = Rc::new(Alerts::default());
    let screen = ChangePasswordScreen::new(
        service,
        alerts.clone(),
        Rc::new(Panel::default()),
    );

    let mut pool = LocalPool::new();
    let pending = screen.submit(filled_form()).expect("request dispatched");
    pool.spawner()
        .spawn_local(pending.map(|_| ()))
        .expect("task spawned");
    drop(screen);
    drop(tx);
    pool.run();

    assert_eq!(
        *alerts.0.borrow(),
        vec!["Error occured contacting server in UserChangePassword."
            .to_string()]
    );
}
