// ==========================================
// 일정 보드 - 월 그리드 생성기
// ==========================================
// 표시 월의 1일이 속한 주의 일요일부터 말일이 속한 주의 토요일까지,
// 항상 7의 배수 길이의 날짜 열을 만든다 (보통 5~6주).
// 상태 없음, 주 시작은 일요일 고정.
// ==========================================

use crate::domain::{CalendarCell, Schedule};
use crate::engine::day_classifier::DayClassifier;
use chrono::{Datelike, Days, NaiveDate};

// ==========================================
// MonthGridGenerator
// ==========================================
pub struct MonthGridGenerator;

impl MonthGridGenerator {
    /// 표시 월을 덮는 날짜 열 생성
    ///
    /// # 인자
    /// - target: 표시 월에 속한 아무 날짜
    ///
    /// # 반환
    /// - 일요일 시작 ~ 토요일 끝, 길이는 7의 배수
    pub fn span(target: NaiveDate) -> Vec<NaiveDate> {
        let month_start = target
            .with_day(1)
            .unwrap_or(target);
        let month_end = Self::last_day_of_month(month_start);

        // 1일이 속한 주의 일요일로 후퇴
        let grid_start = month_start - Days::new(u64::from(month_start.weekday().num_days_from_sunday()));
        // 말일이 속한 주의 토요일로 전진
        let grid_end = month_end + Days::new(u64::from(6 - month_end.weekday().num_days_from_sunday()));

        let mut days = Vec::new();
        let mut day = grid_start;
        while day <= grid_end {
            days.push(day);
            day = day + Days::new(1);
        }
        days
    }

    /// 그리드 칸 계산 (저장소 + 분류기 결합)
    ///
    /// 매 렌더마다 재계산되는 파생 뷰이며 캐시하지 않는다.
    pub fn cells(
        target: NaiveDate,
        schedules: &[Schedule],
        classifier: &DayClassifier,
    ) -> Vec<CalendarCell> {
        let target_month = (target.year(), target.month());

        Self::span(target)
            .into_iter()
            .map(|day| {
                let key = day.format("%Y-%m-%d").to_string();
                let status = classifier.classify(day);
                let day_schedules: Vec<Schedule> = schedules
                    .iter()
                    .filter(|s| s.date == key)
                    .cloned()
                    .collect();

                CalendarCell {
                    date: key,
                    is_current_month: (day.year(), day.month()) == target_month,
                    is_rest_day: status.is_rest_day,
                    is_saturday: status.is_saturday,
                    holiday_label: status.holiday_label,
                    schedules: day_schedules,
                }
            })
            .collect()
    }

    fn last_day_of_month(month_start: NaiveDate) -> NaiveDate {
        let next_month = if month_start.month() == 12 {
            NaiveDate::from_ymd_opt(month_start.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(month_start.year(), month_start.month() + 1, 1)
        };
        match next_month {
            Some(d) => d - Days::new(1),
            None => month_start,
        }
    }
}
