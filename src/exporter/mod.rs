// ==========================================
// 일정 보드 - 내보내기 계층
// ==========================================
// 책임: 표 행을 단일 시트 Excel 파일로 기록
// 제약: 행 구성(필터/정렬)은 엔진(SpreadsheetBridge) 담당
// ==========================================

pub mod error;
pub mod excel_writer;

pub use error::{ExportError, ExportResult};
pub use excel_writer::ExcelWriter;
