// ==========================================
// 일정 보드 - 클립보드 버퍼
// ==========================================
// 하루치 일정 스냅샷(참조 아님)을 보관한다.
// 캡처는 항상 기존 내용을 덮어쓰고, 붙여넣기는 버퍼를 지우지 않는다
// (한 번 캡처해서 여러 날짜에 붙여넣기 가능). 모드 전환 시 비워진다.
// ==========================================

use crate::domain::Schedule;

// ==========================================
// ClipboardBuffer
// ==========================================
#[derive(Debug, Default, Clone)]
pub struct ClipboardBuffer {
    snapshots: Vec<Schedule>,
}

impl ClipboardBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 캡처: 버퍼 내용을 주어진 스냅샷으로 교체
    ///
    /// 기존 내용이 있어도 무조건 덮어쓴다.
    pub fn capture(&mut self, snapshots: Vec<Schedule>) {
        self.snapshots = snapshots;
    }

    /// 붙여넣기 대상 생성: 스냅샷마다 새 id + 대상 날짜로 복제
    ///
    /// 버퍼 자체는 소비되지 않는다.
    pub fn paste_to(&self, date: &str) -> Vec<Schedule> {
        self.snapshots.iter().map(|s| s.duplicate_to(date)).collect()
    }

    /// 버퍼 비우기 (모드 전환 시)
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}
