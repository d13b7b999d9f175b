// ==========================================
// 일정 보드 - Tauri 주 진입점
// ==========================================
// 기술 스택: Tauri + Rust + SQLite
// ==========================================

// 콘솔 창 숨김 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use schedule_board::app::{get_default_db_path, AppState};

#[cfg(feature = "tauri-app")]
fn main() {
    use schedule_board::app::tauri_commands::*;

    schedule_board::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", schedule_board::APP_NAME, schedule_board::VERSION);
    tracing::info!("==================================================");

    let db_path = get_default_db_path();
    tracing::info!("데이터베이스: {}", db_path);

    let app_state = AppState::new(db_path).expect("AppState 초기화 실패");

    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // 보드 상호작용
            get_grid,
            cell_click,
            set_mode,
            undo,
            undo_depth,
            // 일정 조회/편집
            list_schedules,
            replace_day,
            // 스프레드시트 연동
            export_month,
            import_schedules,
        ])
        .run(tauri::generate_context!())
        .expect("Tauri 앱 시작 실패");

    tracing::info!("Tauri 앱 종료");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    schedule_board::logging::init();

    println!("==================================================");
    println!("{} v{}", schedule_board::APP_NAME, schedule_board::VERSION);
    println!("==================================================");
    println!();
    println!("이 실행 파일은 tauri-app 피처가 필요합니다");
    println!("사용: cargo run --features tauri-app");
    println!();
    println!("라이브러리 모드:");
    println!("use schedule_board::app::AppState;");

    // 피처 없이 실행해도 로컬 데이터 상태는 확인해 준다
    let db_path = get_default_db_path();
    match AppState::new(db_path.clone()) {
        Ok(state) => match state.board_api.schedules() {
            Ok(list) => println!("\n{} 에 일정 {}건 저장됨", db_path, list.len()),
            Err(e) => eprintln!("\n일정 조회 실패: {}", e),
        },
        Err(e) => eprintln!("\n초기화 실패: {}", e),
    }
}
