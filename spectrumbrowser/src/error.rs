use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub enum ClientError {
    Transport(String),
    Status(u16, String),
    Reply(String),
    Config(String),
    #[cfg(target_arch = "wasm32")]
    Js(wasm_bindgen::JsValue),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::Transport(s) => write!(f, "Transport error: {}", s),
            ClientError::Status(status, body) => {
                write!(f, "Error: {} - {}", status, body)
            }
            ClientError::Reply(s) => write!(f, "Invalid reply: {}", s),
            ClientError::Config(s) => write!(f, "Config error: {}", s),
            #[cfg(target_arch = "wasm32")]
            ClientError::Js(e) => write!(
                f,
                "JsError: {}",
                e.as_string().unwrap_or_else(|| "Unknown error".to_string())
            ),
        }
    }
}

impl Error for ClientError {}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::Reply(error.to_string())
    }
}

impl From<serde_yaml::Error> for ClientError {
    fn from(error: serde_yaml::Error) -> Self {
        ClientError::Config(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ClientError {
    fn from(error: wasm_bindgen::JsValue) -> Self {
        ClientError::Js(error)
    }
}
