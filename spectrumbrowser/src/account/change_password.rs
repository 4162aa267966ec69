use std::cell::Cell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use log::{debug, error};

use super::request::StatusReply;
use super::service::CredentialService;
use super::validation::{validate_submission, CredentialFields};
use crate::vars::CONTACT_FAILURE;
use crate::{AlertSink, ClientError, Screen, ScreenHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Editing,
    Submitting,
    Success,
    Failure,
    Cancelled,
}

#[derive(Debug, Clone)]
pub enum ChangeOutcome {
    Success(String),
    Failure(ClientError),
}

impl ChangeOutcome {
    fn state(&self) -> ScreenState {
        match self {
            ChangeOutcome::Success(_) => ScreenState::Success,
            ChangeOutcome::Failure(_) => ScreenState::Failure,
        }
    }
}

// state of the current drawing of the screen; `draw` starts a new
// generation so replies to earlier drawings leave it alone
struct Session {
    generation: Cell<u64>,
    state: Cell<ScreenState>,
}

impl Session {
    fn record(&self, generation: u64, state: ScreenState) {
        if self.generation.get() == generation {
            self.state.set(state);
        } else {
            debug!("Reply for an earlier change password screen");
        }
    }
}

/// Change password screen for a user who still knows the old password.
pub struct ChangePasswordScreen {
    service: Rc<dyn CredentialService>,
    alerts: Rc<dyn AlertSink>,
    host: Rc<dyn ScreenHost>,
    session: Rc<Session>,
}

impl ChangePasswordScreen {
    pub fn new(
        service: Rc<dyn CredentialService>,
        alerts: Rc<dyn AlertSink>,
        host: Rc<dyn ScreenHost>,
    ) -> Self {
        Self {
            service,
            alerts,
            host,
            session: Rc::new(Session {
                generation: Cell::new(0),
                state: Cell::new(ScreenState::Editing),
            }),
        }
    }

    pub fn state(&self) -> ScreenState {
        self.session.state.get()
    }

    /// Validate `fields` and, when they pass, dispatch the change request and
    /// return to the login screen without waiting for the reply.
    ///
    /// The returned future completes the request. It only keeps a weak
    /// reference to this screen, so it may run after the screen is dropped.
    pub fn submit(
        &self,
        fields: CredentialFields,
    ) -> Option<LocalBoxFuture<'static, ChangeOutcome>> {
        if self.state() != ScreenState::Editing {
            debug!("Ignoring submit in state {:?}", self.state());
            return None;
        }

        let request = match validate_submission(&fields) {
            Ok(request) => request,
            Err(err) => {
                self.alerts.alert(&err.to_string());
                return None;
            }
        };
        debug!("SubmitChangePassword: {}", request.email);

        let reply = self.service.change_password(request.into_payload());
        self.session.state.set(ScreenState::Submitting);
        self.host.clear_panel();
        self.host.draw_login();

        let alerts = Rc::clone(&self.alerts);
        let generation = self.session.generation.get();
        let session = Rc::downgrade(&self.session);
        Some(Box::pin(async move {
            let outcome = match reply.await.and_then(|r| StatusReply::parse(&r))
            {
                Ok(status) => {
                    alerts.alert(&status.status_message);
                    ChangeOutcome::Success(status.status_message)
                }
                Err(err) => {
                    error!(
                        "Error occured when contacting server in \
                         UserChangePassword: {}",
                        err
                    );
                    alerts.alert(CONTACT_FAILURE);
                    ChangeOutcome::Failure(err)
                }
            };
            match session.upgrade() {
                Some(session) => session.record(generation, outcome.state()),
                None => debug!("Change password screen closed before reply"),
            }
            outcome
        }))
    }

    pub fn cancel(&self) {
        if self.state() != ScreenState::Editing {
            return;
        }
        self.session.state.set(ScreenState::Cancelled);
        self.host.clear_panel();
        self.host.draw_login();
    }
}

impl Screen for ChangePasswordScreen {
    fn draw(&self) {
        let session = &self.session;
        session.generation.set(session.generation.get().wrapping_add(1));
        session.state.set(ScreenState::Editing);
    }
}
