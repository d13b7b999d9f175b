// ==========================================
// 일정 보드 - Tauri 명령 계층
// ==========================================
// 프런트엔드에 노출되는 명령. 결과는 JSON 문자열로 직렬화해 반환.
// 확인 대화상자("추가/덮어쓰기?")는 프런트엔드 몫이고,
// 여기서는 명시적 mode 인자만 받는다.
// ==========================================

use crate::api::ApiError;
use crate::app::state::AppState;
use crate::domain::{ImportMode, Schedule, WorkMode};
use chrono::NaiveDate;

fn map_api_error(e: ApiError) -> String {
    tracing::error!("API 오류: {}", e);
    e.to_string()
}

fn parse_month(month: &str) -> Result<NaiveDate, String> {
    // "YYYY-MM" 또는 "YYYY-MM-DD" 허용
    let full = if month.len() == 7 {
        format!("{}-01", month)
    } else {
        month.to_string()
    };
    NaiveDate::parse_from_str(&full, "%Y-%m-%d")
        .map_err(|e| format!("월 형식이 잘못되었습니다 ({}): {}", month, e))
}

/// 표시 월 그리드 조회
#[tauri::command(rename_all = "snake_case")]
pub fn get_grid(state: tauri::State<'_, AppState>, month: String) -> Result<String, String> {
    let month = parse_month(&month)?;
    let cells = state.board_api.grid(month).map_err(map_api_error)?;
    serde_json::to_string(&cells).map_err(|e| format!("직렬화 실패: {}", e))
}

/// 날짜 칸 클릭
#[tauri::command(rename_all = "snake_case")]
pub fn cell_click(state: tauri::State<'_, AppState>, date: String) -> Result<String, String> {
    let outcome = state.board_api.cell_click(&date).map_err(map_api_error)?;
    serde_json::to_string(&outcome).map_err(|e| format!("직렬화 실패: {}", e))
}

/// 작업 모드 전환
#[tauri::command(rename_all = "snake_case")]
pub fn set_mode(state: tauri::State<'_, AppState>, mode: WorkMode) -> Result<(), String> {
    state.board_api.set_mode(mode).map_err(map_api_error)
}

/// 마지막 삭제 복원 (복원 건수 반환)
#[tauri::command(rename_all = "snake_case")]
pub fn undo(state: tauri::State<'_, AppState>) -> Result<usize, String> {
    state.board_api.undo().map_err(map_api_error)
}

/// 되돌리기 스택 깊이 (버튼 카운터 표시용)
#[tauri::command(rename_all = "snake_case")]
pub fn undo_depth(state: tauri::State<'_, AppState>) -> Result<usize, String> {
    state.board_api.undo_depth().map_err(map_api_error)
}

/// 전체 일정 조회
#[tauri::command(rename_all = "snake_case")]
pub fn list_schedules(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let schedules = state.board_api.schedules().map_err(map_api_error)?;
    serde_json::to_string(&schedules).map_err(|e| format!("직렬화 실패: {}", e))
}

/// 하루치 일정 교체 (상세 화면 저장)
#[tauri::command(rename_all = "snake_case")]
pub fn replace_day(
    state: tauri::State<'_, AppState>,
    date: String,
    schedules: Vec<Schedule>,
) -> Result<(), String> {
    state
        .board_api
        .replace_day(&date, schedules)
        .map_err(map_api_error)
}

/// 표시 월을 Excel 파일로 내보내기
///
/// # 반환
/// - Some(경로): 기록된 파일
/// - None: 해당 월 일정 없음
#[tauri::command(rename_all = "snake_case")]
pub fn export_month(
    state: tauri::State<'_, AppState>,
    month: String,
    dir: String,
) -> Result<Option<String>, String> {
    let month = parse_month(&month)?;
    let path = state
        .board_api
        .export_month_to_file(month, std::path::Path::new(&dir))
        .map_err(map_api_error)?;
    Ok(path.map(|p| p.display().to_string()))
}

/// 스프레드시트 파일 가져오기
#[tauri::command(rename_all = "snake_case")]
pub async fn import_schedules(
    state: tauri::State<'_, AppState>,
    file_path: String,
    mode: ImportMode,
) -> Result<usize, String> {
    state
        .board_api
        .import_from_file(&file_path, mode)
        .await
        .map_err(map_api_error)
}
