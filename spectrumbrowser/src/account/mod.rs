mod change_password;
mod field_read;
mod request;
mod service;
mod validation;

pub use change_password::{ChangeOutcome, ChangePasswordScreen, ScreenState};
pub use field_read::{FieldRead, FieldReadError};
pub use request::{ChangePasswordPayload, CredentialChangeRequest, StatusReply};
pub use service::CredentialService;
pub use validation::{validate_submission, CredentialFields, ValidationError};
