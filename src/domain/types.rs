// ==========================================
// 일정 보드 - 도메인 타입 정의
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 작업 모드 (Work Mode)
// ==========================================
// 날짜 칸 클릭의 의미를 결정한다. 항상 정확히 하나만 활성.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Normal, // 선택 - 클릭한 날짜를 상위로 보고
    Copy,   // 복사 - 캡처/붙여넣기
    Delete, // 삭제 - 하루 단위 일괄 삭제
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkMode::Normal => write!(f, "normal"),
            WorkMode::Copy => write!(f, "copy"),
            WorkMode::Delete => write!(f, "delete"),
        }
    }
}

// ==========================================
// 가져오기 모드 (Import Mode)
// ==========================================
// 확인 대화상자 대신 명시적 결정 인자로 전달한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    Append,    // 기존 목록 뒤에 추가 (중복 제거 없음)
    Overwrite, // 기존 목록 전체 교체
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportMode::Append => write!(f, "append"),
            ImportMode::Overwrite => write!(f, "overwrite"),
        }
    }
}

// ==========================================
// 클릭 결과 (Click Outcome)
// ==========================================
// 칸 클릭 한 번이 저장소에 어떤 효과를 냈는지 호출자에게 알린다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum ClickOutcome {
    Selected(String), // normal 모드: 클릭한 날짜 보고
    Captured(usize),  // copy 모드: 클립보드에 캡처한 건수
    Pasted(usize),    // copy 모드: 붙여넣은 건수
    Deleted(usize),   // delete 모드: 삭제한 건수
    Ignored,          // 효과 없음
}
