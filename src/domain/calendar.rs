// ==========================================
// 일정 보드 - 달력 파생 뷰 구조
// ==========================================
// CalendarCell 은 저장소와 표시 월로부터 매 렌더마다 재계산되는
// 파생 데이터이며 직접 수정하지 않는다.
// ==========================================

use crate::domain::schedule::Schedule;
use serde::{Deserialize, Serialize};

// ==========================================
// DayStatus - 날짜 분류 결과
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    pub is_rest_day: bool,             // 일요일 또는 지정 휴일
    pub is_saturday: bool,             // 토요일
    pub holiday_label: Option<String>, // 공휴일 명칭 (예: "신정")
}

impl DayStatus {
    /// 표시 색을 결정하는 단일 분류
    ///
    /// 휴일 색이 토요일 색보다 우선한다 (휴일 판정을 먼저 평가).
    pub fn category(&self) -> DayCategory {
        if self.is_rest_day {
            DayCategory::RestDay
        } else if self.is_saturday {
            DayCategory::Saturday
        } else {
            DayCategory::Weekday
        }
    }
}

// ==========================================
// DayCategory - 색 결정 분류
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayCategory {
    RestDay,  // 휴일 (빨간색)
    Saturday, // 토요일 (파란색)
    Weekday,  // 평일
}

// ==========================================
// CalendarCell - 월 그리드의 칸 하나
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: String,                  // "YYYY-MM-DD"
    pub is_current_month: bool,        // 표시 월 소속 여부 (인접 월 칸은 비활성 렌더)
    pub is_rest_day: bool,
    pub is_saturday: bool,
    pub holiday_label: Option<String>,
    pub schedules: Vec<Schedule>,      // 해당 날짜의 일정 (저장소에서 재계산)
}
