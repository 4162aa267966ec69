use futures::future::LocalBoxFuture;

use super::request::ChangePasswordPayload;
use crate::ClientError;

/// Remote service that changes a user's password. Resolves to the raw reply
/// body.
pub trait CredentialService {
    fn change_password(
        &self,
        payload: ChangePasswordPayload,
    ) -> LocalBoxFuture<'static, Result<String, ClientError>>;
}
