// ==========================================
// 일정 보드 - 휴일 달력 설정
// ==========================================
// 연도별 휴일 세트와 공휴일 명칭 테이블.
// 하드코딩 상수가 아니라 주입 가능한 설정 데이터로 다루어,
// 분류기가 어느 연도에도 일반화되도록 한다.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ==========================================
// HolidayCalendar - 휴일/공휴일 데이터
// ==========================================
// rest_days: "YYYY-MM-DD" 키의 지정 휴일 (대체공휴일, 연휴 포함)
// holiday_labels: 날짜 → 공휴일 명칭
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayCalendar {
    pub rest_days: HashSet<String>,
    pub holiday_labels: HashMap<String, String>,
}

impl HolidayCalendar {
    /// 빈 달력 (주말 규칙만 적용됨)
    pub fn empty() -> Self {
        Self::default()
    }

    /// JSON 문자열에서 로드
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// 지정 휴일 여부
    pub fn is_rest_day(&self, date_key: &str) -> bool {
        self.rest_days.contains(date_key)
    }

    /// 공휴일 명칭 조회
    pub fn holiday_label(&self, date_key: &str) -> Option<&str> {
        self.holiday_labels.get(date_key).map(String::as_str)
    }

    /// 2026년 대한민국 공휴일 데이터
    pub fn korea_2026() -> Self {
        let holiday_labels: HashMap<String, String> = [
            ("2026-01-01", "신정"),
            ("2026-02-17", "설날"),
            ("2026-03-01", "삼일절"),
            ("2026-05-05", "어린이날"),
            ("2026-05-24", "석가탄신일"),
            ("2026-06-06", "현충일"),
            ("2026-08-15", "광복절"),
            ("2026-09-25", "추석"),
            ("2026-10-03", "개천절"),
            ("2026-10-09", "한글날"),
            ("2026-12-25", "성탄절"),
        ]
        .into_iter()
        .map(|(d, l)| (d.to_string(), l.to_string()))
        .collect();

        // 연휴/대체공휴일을 포함한 휴일 세트
        let rest_days: HashSet<String> = [
            "2026-01-01", "2026-02-16", "2026-02-17", "2026-02-18", "2026-03-01",
            "2026-03-02", "2026-05-05", "2026-05-24", "2026-05-25", "2026-06-06",
            "2026-08-15", "2026-08-17", "2026-09-24", "2026-09-25", "2026-09-26",
            "2026-10-03", "2026-10-05", "2026-10-09", "2026-12-25",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        Self {
            rest_days,
            holiday_labels,
        }
    }
}
