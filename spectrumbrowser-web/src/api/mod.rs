mod credential_service;
mod requests;

pub use credential_service::FetchCredentialService;
