// ==========================================
// 일정 보드 - 통합 테스트
// ==========================================
// 보드 API 전체 흐름: 클릭 모드, 되돌리기, 영속화,
// Excel 내보내기/가져오기 왕복
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use schedule_board::api::BoardApi;
use schedule_board::config::HolidayCalendar;
use schedule_board::domain::{ClickOutcome, ImportMode, Schedule, WorkMode};
use schedule_board::repository::ScheduleRepository;

fn temp_api() -> (tempfile::NamedTempFile, BoardApi) {
    let file = tempfile::NamedTempFile::new().unwrap();
    let repo = Arc::new(ScheduleRepository::new(file.path().to_str().unwrap()).unwrap());
    let api = BoardApi::new(repo, HolidayCalendar::korea_2026()).unwrap();
    (file, api)
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn copy_paste_scenario_matches_contract() {
    // 저장소 = [{2026-05-05 10:00-11:00 "A"}], copy 모드에서
    // 5/5 클릭 → 클립보드 [A], 빈 5/6 클릭 → 5/6 에 "A" 생성, 클립보드 유지
    let (_f, api) = temp_api();
    api.replace_day(
        "2026-05-05",
        vec![Schedule::new("2026-05-05", "10:00", "11:00", "A")],
    )
    .unwrap();

    api.set_mode(WorkMode::Copy).unwrap();
    assert_eq!(api.cell_click("2026-05-05").unwrap(), ClickOutcome::Captured(1));
    assert_eq!(api.cell_click("2026-05-06").unwrap(), ClickOutcome::Pasted(1));

    let all = api.schedules().unwrap();
    assert_eq!(all.len(), 2);
    let pasted = all.iter().find(|s| s.date == "2026-05-06").unwrap();
    assert_eq!(pasted.title, "A");
    assert_eq!(pasted.start_time, "10:00");
    assert_eq!(pasted.end_time, "11:00");

    // 클립보드가 유지되어 다른 빈 날에도 붙여넣기 가능
    assert_eq!(api.cell_click("2026-05-07").unwrap(), ClickOutcome::Pasted(1));
}

#[test]
fn delete_undo_scenario_matches_contract() {
    // delete 모드에서 5/5 클릭 → A 제거, 스택 [[A]];
    // undo → A 복원(동일 id), 스택 []
    let (_f, api) = temp_api();
    api.replace_day(
        "2026-05-05",
        vec![Schedule::new("2026-05-05", "10:00", "11:00", "A")],
    )
    .unwrap();
    let original_id = api.schedules().unwrap()[0].id.clone();

    api.set_mode(WorkMode::Delete).unwrap();
    assert_eq!(api.cell_click("2026-05-05").unwrap(), ClickOutcome::Deleted(1));
    assert_eq!(api.undo_depth().unwrap(), 1);
    assert!(api.schedules().unwrap().is_empty());

    assert_eq!(api.undo().unwrap(), 1);
    assert_eq!(api.undo_depth().unwrap(), 0);

    let restored = api.schedules().unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].id, original_id);
    assert_eq!(restored[0].title, "A");
}

#[test]
fn new_years_day_classification_reaches_grid() {
    let (_f, api) = temp_api();
    let cells = api.grid(date("2026-01-15")).unwrap();

    let new_year = cells.iter().find(|c| c.date == "2026-01-01").unwrap();
    assert!(new_year.is_rest_day);
    assert!(!new_year.is_saturday);
    assert_eq!(new_year.holiday_label.as_deref(), Some("신정"));
}

#[test]
fn grid_covers_whole_month_in_full_weeks() {
    let (_f, api) = temp_api();
    for month in 1..=12 {
        let target = NaiveDate::from_ymd_opt(2026, month, 15).unwrap();
        let cells = api.grid(target).unwrap();
        assert_eq!(cells.len() % 7, 0);

        let in_month = cells.iter().filter(|c| c.is_current_month).count();
        let expected = {
            let next = if month == 12 {
                NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()
            } else {
                NaiveDate::from_ymd_opt(2026, month + 1, 1).unwrap()
            };
            (next - NaiveDate::from_ymd_opt(2026, month, 1).unwrap()).num_days() as usize
        };
        assert_eq!(in_month, expected, "2026-{:02} 월 일수 불일치", month);
    }
}

#[tokio::test]
async fn export_import_roundtrip_through_xlsx_file() {
    // 내보낸 파일을 빈 보드로 재가져오면 (date, start, end, title) 가 보존된다
    let (_f, api) = temp_api();
    api.replace_day(
        "2026-05-05",
        vec![
            Schedule::new("2026-05-05", "14:00", "15:00", "오후 회의"),
            Schedule::new("2026-05-05", "10:00", "11:00", "오전 회의"),
        ],
    )
    .unwrap();
    api.replace_day(
        "2026-05-20",
        vec![Schedule::new("2026-05-20", "09:00", "10:00", "점검")],
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = api
        .export_month_to_file(date("2026-05-01"), dir.path())
        .unwrap()
        .expect("일정이 있으므로 파일이 생성되어야 함");
    assert!(path.ends_with("2026-05_일정관리.xlsx"));

    let (_f2, fresh) = temp_api();
    let count = fresh.import_from_file(&path, ImportMode::Append).await.unwrap();
    assert_eq!(count, 3);

    let imported = fresh.schedules().unwrap();
    for (d, start, end, title) in [
        ("2026-05-05", "10:00", "11:00", "오전 회의"),
        ("2026-05-05", "14:00", "15:00", "오후 회의"),
        ("2026-05-20", "09:00", "10:00", "점검"),
    ] {
        assert!(
            imported.iter().any(|s| s.date == d
                && s.start_time == start
                && s.end_time == end
                && s.title == title),
            "{} {} 행이 왕복 후 없음",
            d,
            title
        );
    }
}

#[tokio::test]
async fn import_overwrite_replaces_store() {
    let (_f, api) = temp_api();
    api.replace_day(
        "2026-05-05",
        vec![Schedule::new("2026-05-05", "10:00", "11:00", "기존")],
    )
    .unwrap();

    // CSV 파일로도 가져올 수 있다 (영문 폴백 키 포함)
    let mut csv = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    {
        use std::io::Write;
        writeln!(csv, "date,title").unwrap();
        writeln!(csv, "2026-07-01,새 달").unwrap();
    }

    let count = api
        .import_from_file(csv.path(), ImportMode::Overwrite)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let all = api.schedules().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].date, "2026-07-01");
    assert_eq!(all[0].title, "새 달");
    // 누락 필드 기본값
    assert_eq!(all[0].start_time, "09:00");
    assert_eq!(all[0].end_time, "10:00");
}

#[tokio::test]
async fn malformed_file_leaves_store_untouched() {
    let (_f, api) = temp_api();
    api.replace_day(
        "2026-05-05",
        vec![Schedule::new("2026-05-05", "10:00", "11:00", "보존")],
    )
    .unwrap();

    let mut bogus = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
    {
        use std::io::Write;
        bogus.write_all(b"definitely not xlsx").unwrap();
    }

    let result = api.import_from_file(bogus.path(), ImportMode::Append).await;
    assert!(result.is_err());

    let all = api.schedules().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "보존");
}

#[test]
fn undo_is_positional_not_date_aware() {
    // 삭제 후 같은 날짜에 붙여넣기가 일어나도 undo 는 위치 기반으로
    // 원래 배치를 그대로 되돌린다 (중복 검사 없음 - 명시된 계약)
    let (_f, api) = temp_api();
    api.replace_day(
        "2026-05-05",
        vec![Schedule::new("2026-05-05", "10:00", "11:00", "A")],
    )
    .unwrap();
    api.replace_day(
        "2026-05-07",
        vec![Schedule::new("2026-05-07", "10:00", "11:00", "B")],
    )
    .unwrap();

    api.set_mode(WorkMode::Delete).unwrap();
    api.cell_click("2026-05-05").unwrap();

    // 삭제 후 5/7 을 캡처해 5/5 에 붙여넣기
    api.set_mode(WorkMode::Copy).unwrap();
    api.cell_click("2026-05-07").unwrap();
    api.cell_click("2026-05-05").unwrap();

    assert_eq!(api.undo().unwrap(), 1);
    let day = api
        .schedules()
        .unwrap()
        .into_iter()
        .filter(|s| s.date == "2026-05-05")
        .count();
    // 붙여넣은 B 복제본 + 복원된 A = 2건 (병합/재배치 없음)
    assert_eq!(day, 2);
}
