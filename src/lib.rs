// ==========================================
// 일정 보드 - 코어 라이브러리
// ==========================================
// 기술 스택: Tauri + Rust + SQLite
// 시스템 성격: 개인 일정 관리 (단일 사용자, 로컬 저장)
// ==========================================

// 국제화 시스템 초기화
rust_i18n::i18n!("locales", fallback = "ko");

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 엔티티와 타입
pub mod domain;

// 설정 계층 - 연도별 휴일 달력
pub mod config;

// 엔진 계층 - 보드 상호작용 규칙
pub mod engine;

// 가져오기 계층 - 외부 파일 파싱
pub mod importer;

// 내보내기 계층 - Excel 생성
pub mod exporter;

// 저장소 계층 - 데이터 접근
pub mod repository;

// 데이터베이스 기반 (연결 초기화/PRAGMA 통일)
pub mod db;

// 로그 시스템
pub mod logging;

// 국제화
pub mod i18n;

// API 계층 - 호출자 인터페이스
pub mod api;

// 애플리케이션 계층 - Tauri 연동
pub mod app;

// ==========================================
// 핵심 타입 재노출
// ==========================================

// 도메인 타입
pub use domain::types::{ClickOutcome, ImportMode, WorkMode};

// 도메인 엔티티
pub use domain::{CalendarCell, DayCategory, DayStatus, Schedule};

// 설정
pub use config::HolidayCalendar;

// 엔진
pub use engine::{
    BoardController, ClipboardBuffer, DayClassifier, MonthGridGenerator, ScheduleStore,
    SpreadsheetBridge, UndoStack,
};

// API
pub use api::BoardApi;

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 이름
pub const APP_NAME: &str = "일정 보드";
