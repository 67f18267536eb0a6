use thiserror::Error;

use crate::order_of_service::ServiceScriptError;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Invalid order of service: {0}")]
    InvalidScript(#[from] ServiceScriptError),

    #[error("Check not implemented: {0}")]
    NotImplemented(&'static str),
}
