// ==========================================
// 일정 보드 - 도메인 모델 계층
// ==========================================
// 책임: 엔티티, 타입, 파생 뷰 구조 정의
// 제약: 데이터 접근 로직 없음, 엔진 로직 없음
// ==========================================

pub mod calendar;
pub mod schedule;
pub mod types;

// 핵심 타입 재노출
pub use calendar::{CalendarCell, DayCategory, DayStatus};
pub use schedule::Schedule;
pub use types::{ClickOutcome, ImportMode, WorkMode};
