// ==========================================
// 일정 보드 - 가져오기 오류 타입
// ==========================================
// 도구: thiserror 파생 매크로
// 파싱 실패는 이 경계에서 잡혀 사용자 알림으로 표면화되고,
// 저장소는 손대지 않는다.
// ==========================================

use thiserror::Error;

/// 가져오기 계층 오류 타입
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("파일이 없습니다: {0}")]
    FileNotFound(String),

    #[error("지원하지 않는 파일 형식: {0}")]
    UnsupportedFormat(String),

    #[error("Excel 파싱 실패: {0}")]
    ExcelParseError(String),

    #[error("CSV 파싱 실패: {0}")]
    CsvParseError(String),

    #[error("파일 읽기 실패: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// calamine 오류 변환
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

// csv 오류 변환
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 타입 별칭
pub type ImportResult<T> = Result<T, ImportError>;
