// ==========================================
// 일정 보드 - 상호작용 모드 컨트롤러
// ==========================================
// 상태: normal / copy / delete (초기 normal)
// 전환은 사용자 조작으로만 일어나며 자동 복귀 없음.
// 칸 클릭 한 번의 의미를 현재 모드에 따라 결정한다.
// 모든 연산은 빈 집합에 대해서도 전함수 - 오류 조건 없음.
// ==========================================

use crate::domain::{ClickOutcome, WorkMode};
use crate::engine::clipboard::ClipboardBuffer;
use crate::engine::store::ScheduleStore;
use crate::engine::undo::UndoStack;

// ==========================================
// BoardController
// ==========================================
pub struct BoardController {
    mode: WorkMode,
    clipboard: ClipboardBuffer,
    undo_stack: UndoStack,
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardController {
    pub fn new() -> Self {
        Self {
            mode: WorkMode::Normal,
            clipboard: ClipboardBuffer::new(),
            undo_stack: UndoStack::new(),
        }
    }

    /// 현재 모드
    pub fn mode(&self) -> WorkMode {
        self.mode
    }

    /// 모드 전환
    ///
    /// 실제로 모드가 바뀔 때 클립보드를 비운다
    /// (copy 모드를 떠나면 대기 중인 캡처 내용이 사라진다).
    /// 같은 모드를 다시 선택하면 아무 일도 없다.
    pub fn set_mode(&mut self, mode: WorkMode) {
        if self.mode == mode {
            return;
        }
        tracing::debug!("모드 전환: {} → {}", self.mode, mode);
        self.mode = mode;
        self.clipboard.clear();
    }

    /// 날짜 칸 클릭 처리
    ///
    /// # 모드별 동작
    /// - normal: 클릭한 날짜를 상위로 보고, 저장소 무변경
    /// - copy: 일정 있으면 캡처(덮어쓰기) / 없고 클립보드가 차 있으면 붙여넣기
    /// - delete: 하루치 전체를 배치로 기록 후 원자적 제거
    pub fn cell_click(&mut self, store: &mut ScheduleStore, date: &str) -> ClickOutcome {
        match self.mode {
            WorkMode::Normal => ClickOutcome::Selected(date.to_string()),
            WorkMode::Copy => self.copy_click(store, date),
            WorkMode::Delete => self.delete_click(store, date),
        }
    }

    fn copy_click(&mut self, store: &mut ScheduleStore, date: &str) -> ClickOutcome {
        let day_schedules = store.on_date(date);

        if !day_schedules.is_empty() {
            // 캡처: 기존 클립보드 내용이 있어도 항상 덮어쓴다
            let count = day_schedules.len();
            self.clipboard.capture(day_schedules);
            tracing::debug!("캡처: {} ({}건)", date, count);
            return ClickOutcome::Captured(count);
        }

        if !self.clipboard.is_empty() {
            // 붙여넣기: 버퍼는 지우지 않는다 (여러 날짜에 반복 붙여넣기)
            let pasted = self.clipboard.paste_to(date);
            let count = pasted.len();
            store.add_batch(pasted);
            tracing::debug!("붙여넣기: {} ({}건)", date, count);
            return ClickOutcome::Pasted(count);
        }

        ClickOutcome::Ignored
    }

    fn delete_click(&mut self, store: &mut ScheduleStore, date: &str) -> ClickOutcome {
        let removed = store.remove_by_date(date);
        if removed.is_empty() {
            return ClickOutcome::Ignored;
        }

        let count = removed.len();
        self.undo_stack.push(removed);
        tracing::debug!("삭제: {} ({}건), 스택 깊이 {}", date, count, self.undo_stack.depth());
        ClickOutcome::Deleted(count)
    }

    /// 마지막 삭제 배치 복원
    ///
    /// 스택이 비어 있으면 아무 일도 하지 않고 0을 반환한다.
    /// 복원은 원래 id 그대로의 정확 복원이다.
    pub fn undo(&mut self, store: &mut ScheduleStore) -> usize {
        match self.undo_stack.pop() {
            Some(batch) => {
                let count = batch.len();
                store.add_batch(batch);
                tracing::debug!("복원: {}건, 스택 깊이 {}", count, self.undo_stack.depth());
                count
            }
            None => 0,
        }
    }

    /// 되돌리기 스택 깊이 (UI 카운터)
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.depth()
    }

    /// 클립보드에 담긴 스냅샷 건수
    pub fn clipboard_len(&self) -> usize {
        self.clipboard.len()
    }

    #[cfg(test)]
    pub(crate) fn clipboard_snapshot(&self, date: &str) -> Vec<crate::domain::Schedule> {
        self.clipboard.paste_to(date)
    }
}
