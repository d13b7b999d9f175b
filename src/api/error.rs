// ==========================================
// 일정 보드 - API 계층 오류 타입
// ==========================================

use crate::exporter::ExportError;
use crate::importer::ImportError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// API 계층 오류 타입
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("보드 상태 락 획득 실패: {0}")]
    LockError(String),

    #[error("내부 오류: {0}")]
    InternalError(String),
}

/// Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;
