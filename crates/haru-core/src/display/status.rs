//! Status and alert messages for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation feedback messages.
///
/// Store failures are surfaced to the user as blocking alerts; the fixed
/// Korean alert texts live here so every interface shows the same wording.
#[derive(Debug)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Alert shown when saving a task fails.
    pub fn save_failed() -> Self {
        Self::failure("저장 중 오류가 발생했습니다.".to_string())
    }

    /// Alert shown when deleting a task fails.
    pub fn delete_failed() -> Self {
        Self::failure("삭제 중 오류가 발생했습니다.".to_string())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
