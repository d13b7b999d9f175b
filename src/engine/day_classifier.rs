// ==========================================
// 일정 보드 - 날짜 분류기
// ==========================================
// 순수 함수: 날짜 → {휴일 여부, 토요일 여부, 공휴일 명칭}
// 휴일 = 일요일 OR 주입된 달력의 지정 휴일
// 부수효과 없음, 결정적
// ==========================================

use crate::config::HolidayCalendar;
use crate::domain::DayStatus;
use chrono::{Datelike, NaiveDate, Weekday};

// ==========================================
// DayClassifier
// ==========================================
pub struct DayClassifier {
    calendar: HolidayCalendar,
}

impl DayClassifier {
    /// 휴일 달력을 주입하여 생성
    pub fn new(calendar: HolidayCalendar) -> Self {
        Self { calendar }
    }

    /// 날짜 분류
    ///
    /// 색 결정 시 휴일이 토요일보다 우선한다 (DayStatus::category 참고).
    pub fn classify(&self, date: NaiveDate) -> DayStatus {
        let key = date.format("%Y-%m-%d").to_string();
        let weekday = date.weekday();

        let is_rest_day = weekday == Weekday::Sun || self.calendar.is_rest_day(&key);
        let is_saturday = weekday == Weekday::Sat;
        let holiday_label = self.calendar.holiday_label(&key).map(str::to_string);

        DayStatus {
            is_rest_day,
            is_saturday,
            holiday_label,
        }
    }
}
