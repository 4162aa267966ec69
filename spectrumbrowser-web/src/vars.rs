pub const CLIENT_CONFIG: &str = include_str!("../config/client.yaml");

pub const LOGIN_PATH: &str = "/";
pub const CHANGE_PASSWORD_PATH: &str = "/user/change-password";
pub const DAY_COUNT_PATH: &str = "/sensor/day-count";

// element ids of the change password inputs
pub const EMAIL_INPUT_ID: &str = "change-password-email";
pub const OLD_PASSWORD_INPUT_ID: &str = "change-password-current";
pub const NEW_PASSWORD_INPUT_ID: &str = "change-password-new";
pub const CONFIRM_PASSWORD_INPUT_ID: &str = "change-password-confirm";
