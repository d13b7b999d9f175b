// ==========================================
// 일정 보드 - 스프레드시트 브리지
// ==========================================
// 일정 레코드 ↔ 평면 표 형식의 양방향 매핑.
// 내보내기: 표시 월 필터 + (date, start_time) 오름차순 정렬
//           (둘 다 0 패딩 ISO 계열 문자열이라 사전식 비교가 올바름)
// 가져오기: 한글 컬럼명 또는 영문 폴백 키 허용, 누락 필드는 기본값,
//           date 는 검증 없이 그대로 수용
// ==========================================

use crate::domain::{ImportMode, Schedule};
use crate::engine::store::ScheduleStore;
use chrono::NaiveDate;
use std::collections::HashMap;

// ===== 컬럼 레이블 (한글 / 영문 폴백) =====
pub const COL_DATE: &str = "날짜";
pub const COL_START: &str = "시작시간";
pub const COL_END: &str = "종료시간";
pub const COL_TITLE: &str = "제목";

pub const COL_DATE_EN: &str = "date";
pub const COL_START_EN: &str = "startTime";
pub const COL_END_EN: &str = "endTime";
pub const COL_TITLE_EN: &str = "title";

// ===== 누락 필드 기본값 (원본 계약) =====
pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "10:00";
pub const DEFAULT_TITLE: &str = "새 일정";

// 내보내기 시트 이름
pub const EXPORT_SHEET_NAME: &str = "월간일정";

// ==========================================
// SheetRow - 내보내기 행 (레이블 붙은 평면 행)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
}

impl SheetRow {
    /// 헤더 행 (한글 레이블)
    pub fn headers() -> [&'static str; 4] {
        [COL_DATE, COL_START, COL_END, COL_TITLE]
    }
}

// ==========================================
// RawScheduleRow - 가져오기 중간 레코드
// ==========================================
// 느슨한 키/값 행을 엄격한 중간 구조로 먼저 파싱한 뒤 매핑한다.
// 필드별 기본값 적용은 into_schedule 에 모아 둔다.
#[derive(Debug, Clone, Default)]
pub struct RawScheduleRow {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub title: Option<String>,
}

impl RawScheduleRow {
    /// 느슨한 행에서 파싱 (한글 레이블 우선, 영문 키 폴백)
    pub fn from_loose(row: &HashMap<String, String>) -> Self {
        Self {
            date: lookup(row, COL_DATE, COL_DATE_EN),
            start_time: lookup(row, COL_START, COL_START_EN),
            end_time: lookup(row, COL_END, COL_END_EN),
            title: lookup(row, COL_TITLE, COL_TITLE_EN),
        }
    }

    /// 일정 레코드로 변환 (id 신규 발급, 누락 필드 기본값)
    ///
    /// date 는 형식 검증 없이 그대로 수용한다. date 까지 없는 행은
    /// 빈 문자열 날짜가 되며, 어느 날짜 칸에도 나타나지 않는다.
    pub fn into_schedule(self) -> Schedule {
        Schedule::new(
            self.date.as_deref().unwrap_or(""),
            self.start_time.as_deref().unwrap_or(DEFAULT_START_TIME),
            self.end_time.as_deref().unwrap_or(DEFAULT_END_TIME),
            self.title.as_deref().unwrap_or(DEFAULT_TITLE),
        )
    }
}

fn lookup(row: &HashMap<String, String>, key: &str, fallback: &str) -> Option<String> {
    row.get(key)
        .or_else(|| row.get(fallback))
        .filter(|v| !v.is_empty())
        .cloned()
}

// ==========================================
// SpreadsheetBridge
// ==========================================
pub struct SpreadsheetBridge;

impl SpreadsheetBridge {
    /// 표시 월의 일정을 표 행으로 변환
    ///
    /// # 반환
    /// - (date, start_time) 오름차순 정렬된 행. 해당 월 일정이 없으면 빈 Vec.
    pub fn export_rows(store: &ScheduleStore, month: NaiveDate) -> Vec<SheetRow> {
        let month_key = month.format("%Y-%m").to_string();

        let mut monthly: Vec<&Schedule> = store
            .records()
            .iter()
            .filter(|s| s.date.starts_with(&month_key))
            .collect();
        monthly.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.start_time.cmp(&b.start_time))
        });

        monthly
            .into_iter()
            .map(|s| SheetRow {
                date: s.date.clone(),
                start_time: s.start_time.clone(),
                end_time: s.end_time.clone(),
                title: s.title.clone(),
            })
            .collect()
    }

    /// 느슨한 표 행들을 일정 레코드로 매핑
    ///
    /// 행마다 새 id 를 발급한다. 중복 제거도 월 필터도 없다
    /// (내보내기만 표시 월로 거르는 의도된 비대칭).
    pub fn map_rows(rows: &[HashMap<String, String>]) -> Vec<Schedule> {
        rows.iter()
            .map(|row| RawScheduleRow::from_loose(row).into_schedule())
            .collect()
    }

    /// 가져온 레코드를 저장소에 반영
    ///
    /// Append: 기존 목록 뒤에 일괄 추가
    /// Overwrite: 기존 목록 전체 교체
    /// 둘 다 호출자 관점에서 전부-아니면-전무.
    pub fn apply_import(store: &mut ScheduleStore, imported: Vec<Schedule>, mode: ImportMode) {
        match mode {
            ImportMode::Append => store.add_batch(imported),
            ImportMode::Overwrite => store.replace_all(imported),
        }
    }
}
