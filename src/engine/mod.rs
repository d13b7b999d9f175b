// ==========================================
// 일정 보드 - 엔진 계층
// ==========================================
// 책임: 보드 상호작용 규칙 (그리드 생성, 날짜 분류,
//       모드 상태기계, 클립보드, 되돌리기, 표 변환)
// 제약: UI 로직 없음, 파일 입출력 없음, 저장소 접근은 API 계층에서
// ==========================================

pub mod clipboard;
pub mod controller;
pub mod day_classifier;
pub mod month_grid;
pub mod spreadsheet;
pub mod store;
pub mod undo;

pub use clipboard::ClipboardBuffer;
pub use controller::BoardController;
pub use day_classifier::DayClassifier;
pub use month_grid::MonthGridGenerator;
pub use spreadsheet::{RawScheduleRow, SheetRow, SpreadsheetBridge};
pub use store::ScheduleStore;
pub use undo::UndoStack;
