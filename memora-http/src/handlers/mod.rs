pub mod similarity;
#[doc(hidden)]
pub mod test_helpers;
pub mod validator;
pub mod value_history;

// Re-export all handlers for easier imports
pub use similarity::*;
pub use validator::*;
pub use value_history::*;

use crate::error::AppError;

/// The `id` query parameter, or a 400 carrying `message`
pub(crate) fn required_id(id: Option<String>, message: &str) -> Result<String, AppError> {
    match id.map(|id| id.trim().to_string()) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// Fallback for every method other than GET on the analytics routes
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
