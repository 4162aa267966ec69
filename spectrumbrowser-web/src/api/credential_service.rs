use futures::future::LocalBoxFuture;
use futures::FutureExt;
use spectrumbrowser::{ChangePasswordPayload, ClientError, CredentialService};

use super::requests::http_post_json;

/// Credential service reached over `fetch`.
pub struct FetchCredentialService {
    url: String,
}

impl FetchCredentialService {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl CredentialService for FetchCredentialService {
    fn change_password(
        &self,
        payload: ChangePasswordPayload,
    ) -> LocalBoxFuture<'static, Result<String, ClientError>> {
        let url = self.url.clone();
        async move {
            let body = payload.to_json()?;
            http_post_json(&url, &body).await
        }
        .boxed_local()
    }
}
