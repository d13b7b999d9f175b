// ==========================================
// 일정 보드 - 내보내기 오류 타입
// ==========================================

use thiserror::Error;

/// 내보내기 계층 오류 타입
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Excel 기록 실패: {0}")]
    XlsxWriteError(String),

    #[error("파일 쓰기 실패: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::XlsxWriteError(err.to_string())
    }
}

/// Result 타입 별칭
pub type ExportResult<T> = Result<T, ExportError>;
