//! 统一错误处理
//!
//! 错误类型统一来自 `shared::error`：
//! - [`AppError`] - 带错误码的应用错误
//! - [`ApiResponse`] - API 响应结构
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::record_not_found(ErrorCode::EngineerNotFound, id))
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Convert a store lookup into a not-found error with the entity's code
pub trait OrNotFound<T> {
    fn or_not_found(self, code: ErrorCode, id: i64) -> AppResult<T>;
}

impl<T> OrNotFound<T> for Option<T> {
    fn or_not_found(self, code: ErrorCode, id: i64) -> AppResult<T> {
        self.ok_or_else(|| AppError::record_not_found(code, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_not_found() {
        let found: Option<u8> = Some(1);
        assert_eq!(found.or_not_found(ErrorCode::UserNotFound, 1).unwrap(), 1);

        let missing: Option<u8> = None;
        let err = missing
            .or_not_found(ErrorCode::UserNotFound, 5)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UserNotFound);
        assert_eq!(err.details.unwrap().get("id").unwrap(), 5);
    }
}
