// ==========================================
// 일정 보드 - 애플리케이션 상태
// ==========================================
// 책임: BoardApi 인스턴스와 공유 자원 관리
// Tauri 앱에서는 전역 관리 상태로 쓰인다.
// ==========================================

use std::sync::Arc;

use crate::api::BoardApi;
use crate::config::HolidayCalendar;
use crate::repository::ScheduleRepository;

/// 애플리케이션 상태
pub struct AppState {
    /// 데이터베이스 경로
    pub db_path: String,

    /// 보드 API
    pub board_api: Arc<BoardApi>,
}

impl AppState {
    /// AppState 생성
    ///
    /// # 인자
    /// - db_path: 데이터베이스 파일 경로
    ///
    /// 저장소를 열고 저장된 일정으로 보드를 재수화한다.
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("AppState 초기화, 데이터베이스: {}", db_path);

        let repo = Arc::new(
            ScheduleRepository::new(&db_path)
                .map_err(|e| format!("저장소 초기화 실패: {}", e))?,
        );

        let board_api = Arc::new(
            BoardApi::new(repo, HolidayCalendar::korea_2026())
                .map_err(|e| format!("BoardApi 초기화 실패: {}", e))?,
        );

        tracing::info!("AppState 초기화 완료");

        Ok(Self { db_path, board_api })
    }
}

// ==========================================
// 기본 데이터베이스 경로
// ==========================================

/// 기본 데이터베이스 경로 결정
///
/// 환경 변수 SCHEDULE_BOARD_DB_PATH 가 있으면 우선한다.
/// 없으면 사용자 데이터 디렉터리 아래 schedule-board(-dev)/schedule_board.db.
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var("SCHEDULE_BOARD_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./schedule_board.db");

    if let Some(data_dir) = dirs::data_dir() {
        // 개발 환경은 별도 디렉터리로 분리해 운영 데이터 오염을 피한다
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("schedule-board-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("schedule-board");
        }

        std::fs::create_dir_all(&path).ok();
        path = path.join("schedule_board.db");
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_default_db_path() {
        let path = get_default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }

    #[test]
    fn test_app_state_new_with_temp_db() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let state = AppState::new(file.path().to_str().unwrap().to_string()).unwrap();
        assert!(state.board_api.schedules().unwrap().is_empty());
    }
}
