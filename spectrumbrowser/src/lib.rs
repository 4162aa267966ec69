pub(crate) mod account;
pub(crate) mod base;
pub(crate) mod error;
pub(crate) mod input;

pub mod vars;

pub use account::{
    validate_submission, ChangeOutcome, ChangePasswordPayload,
    ChangePasswordScreen, CredentialChangeRequest, CredentialFields,
    CredentialService, FieldRead, FieldReadError, ScreenState, StatusReply,
    ValidationError,
};
pub use base::config::ClientConfig;
pub use base::host::{AlertSink, Screen, ScreenHost};
pub use error::ClientError;
pub use input::{
    evaluate_commit, is_integer, is_non_negative, BoundedIntegerField,
    CommitOutcome, DayCountOwner,
};
