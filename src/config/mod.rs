// ==========================================
// 일정 보드 - 설정 계층
// ==========================================
// 책임: 연도별 휴일/공휴일 데이터 제공
// 제약: 분류 규칙은 엔진 계층에, 여기는 데이터만
// ==========================================

pub mod holiday_calendar;

pub use holiday_calendar::HolidayCalendar;
