// wire field names of the change password request
pub const ACCOUNT_EMAIL_ADDRESS: &str = "email_address";
pub const ACCOUNT_OLD_PASSWORD: &str = "old_password";
pub const ACCOUNT_NEW_PASSWORD: &str = "new_password";
pub const ACCOUNT_PRIVILEGE: &str = "privilege";
pub const USER_PRIVILEGE: &str = "user";

// wire field name of the credential service reply
pub const STATUS_MESSAGE: &str = "status_message";

pub const CHANGE_PASSWORD_LABEL: &str = "Change Password";
pub const CONTACT_FAILURE: &str =
    "Error occured contacting server in UserChangePassword.";

pub const DEFAULT_SERVICE_URL: &str = "/spectrumbrowser";
pub const DEFAULT_MAX_DAYS: u32 = 30;
pub const DEFAULT_INITIAL_DAYS: u32 = 1;
