// ==========================================
// 일정 보드 - 애플리케이션 계층
// ==========================================
// 책임: 앱 수준 공유 상태와 Tauri 명령 연동
// ==========================================

pub mod state;

#[cfg(feature = "tauri-app")]
pub mod tauri_commands;

pub use state::{get_default_db_path, AppState};
