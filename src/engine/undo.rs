// ==========================================
// 일정 보드 - 되돌리기 스택
// ==========================================
// 삭제 배치(한 번의 삭제로 제거된 하루치 전체)의 LIFO 이력.
// 복원은 원래 id 그대로 되돌리는 정확 복원이며, 위치 기반이다
// (날짜/충돌 검사 없음 - 의도된 계약, DESIGN.md 참고).
// ==========================================

use crate::domain::Schedule;

// ==========================================
// UndoStack
// ==========================================
#[derive(Debug, Default, Clone)]
pub struct UndoStack {
    batches: Vec<Vec<Schedule>>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// 삭제 배치 기록
    pub fn push(&mut self, batch: Vec<Schedule>) {
        self.batches.push(batch);
    }

    /// 가장 최근 배치 꺼내기 (비어 있으면 None)
    pub fn pop(&mut self) -> Option<Vec<Schedule>> {
        self.batches.pop()
    }

    /// 관측 가능한 스택 깊이 (UI 카운터 표시용)
    pub fn depth(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}
