// ==========================================
// 일정 보드 - 가져오기 계층
// ==========================================
// 책임: 외부 스프레드시트 파일(.xlsx/.xls/.csv)을
//       느슨한 키/값 행으로 파싱
// 제약: 일정으로의 매핑은 엔진(SpreadsheetBridge) 담당
// ==========================================

pub mod error;
pub mod file_parser;

pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};
