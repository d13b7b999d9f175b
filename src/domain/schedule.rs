// ==========================================
// 일정 보드 - 일정 엔티티
// ==========================================
// date 는 "YYYY-MM-DD" 문자열로 저장하며 일 단위 연산의 파티션 키다.
// start/end 시각은 표시용 필드로, 순서 제약을 두지 않는다.
// ==========================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// Schedule - 달력 항목 한 건
// ==========================================
// 불변식: id 는 저장소 내에서 유일, date 는 중복 가능 (하루 여러 건)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,         // 고유 식별자 (UUID v4, 재사용 금지)
    pub date: String,       // 날짜 "YYYY-MM-DD"
    pub start_time: String, // 시작 시각 "HH:MM"
    pub end_time: String,   // 종료 시각 "HH:MM"
    pub title: String,      // 제목
}

impl Schedule {
    /// 새 일정 생성 (id 자동 발급)
    pub fn new(date: &str, start_time: &str, end_time: &str, title: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: date.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            title: title.to_string(),
        }
    }

    /// 다른 날짜로 복제 (붙여넣기 용)
    ///
    /// id 는 새로 발급하고 date 만 바꾸며 나머지 필드는 그대로 복사한다.
    pub fn duplicate_to(&self, date: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: date.to_string(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            title: self.title.clone(),
        }
    }

    /// 월 키 ("YYYY-MM") 반환
    ///
    /// date 는 ASCII 전제이므로 앞 7자 절단이 안전하다. 형식이 짧으면 전체를 반환.
    pub fn month_key(&self) -> &str {
        self.date.get(0..7).unwrap_or(&self.date)
    }
}
