// ==========================================
// 일정 보드 - 일정 저장소 (메모리)
// ==========================================
// 세션 동안의 일정 컬렉션. 외부에는 조회/전체교체만 노출되고
// 변형은 컨트롤러/브리지 연산을 통해서만 일어난다.
// ==========================================

use crate::domain::Schedule;

// ==========================================
// ScheduleStore
// ==========================================
#[derive(Debug, Default, Clone)]
pub struct ScheduleStore {
    records: Vec<Schedule>,
}

impl ScheduleStore {
    /// 빈 저장소 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 전체 목록으로 생성 (영속 계층 재수화)
    pub fn from_records(records: Vec<Schedule>) -> Self {
        Self { records }
    }

    /// 전체 목록 조회
    pub fn records(&self) -> &[Schedule] {
        &self.records
    }

    /// 건수
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 비어 있는지
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 특정 날짜의 일정 스냅샷
    pub fn on_date(&self, date: &str) -> Vec<Schedule> {
        self.records
            .iter()
            .filter(|s| s.date == date)
            .cloned()
            .collect()
    }

    /// 일정 한 건 추가
    pub fn add(&mut self, schedule: Schedule) {
        self.records.push(schedule);
    }

    /// 일정 일괄 추가 (붙여넣기/가져오기/복원)
    pub fn add_batch(&mut self, batch: Vec<Schedule>) {
        self.records.extend(batch);
    }

    /// 특정 날짜의 일정을 원자적으로 제거하고 제거된 배치를 반환
    ///
    /// 해당 날짜에 일정이 없으면 빈 배치를 반환한다.
    pub fn remove_by_date(&mut self, date: &str) -> Vec<Schedule> {
        let mut removed = Vec::new();
        self.records.retain(|s| {
            if s.date == date {
                removed.push(s.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// 전체 목록 교체 (가져오기 overwrite / 외부 저장 동기화)
    pub fn replace_all(&mut self, records: Vec<Schedule>) {
        self.records = records;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_date_filters() {
        let mut store = ScheduleStore::new();
        store.add(Schedule::new("2026-05-05", "10:00", "11:00", "A"));
        store.add(Schedule::new("2026-05-06", "10:00", "11:00", "B"));
        store.add(Schedule::new("2026-05-05", "12:00", "13:00", "C"));

        let day = store.on_date("2026-05-05");
        assert_eq!(day.len(), 2);
        assert!(day.iter().all(|s| s.date == "2026-05-05"));
    }

    #[test]
    fn test_remove_by_date_returns_batch_and_keeps_others() {
        let mut store = ScheduleStore::new();
        store.add(Schedule::new("2026-05-05", "10:00", "11:00", "A"));
        store.add(Schedule::new("2026-05-06", "10:00", "11:00", "B"));

        let removed = store.remove_by_date("2026-05-05");
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].title, "A");
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].title, "B");
    }

    #[test]
    fn test_remove_by_date_empty_day() {
        let mut store = ScheduleStore::new();
        let removed = store.remove_by_date("2026-05-05");
        assert!(removed.is_empty());
    }

    #[test]
    fn test_replace_all() {
        let mut store = ScheduleStore::from_records(vec![Schedule::new(
            "2026-05-05",
            "10:00",
            "11:00",
            "A",
        )]);
        store.replace_all(vec![
            Schedule::new("2026-06-01", "09:00", "10:00", "B"),
            Schedule::new("2026-06-02", "09:00", "10:00", "C"),
        ]);
        assert_eq!(store.len(), 2);
        assert!(store.on_date("2026-05-05").is_empty());
    }
}
