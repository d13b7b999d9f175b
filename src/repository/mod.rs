// ==========================================
// 일정 보드 - 저장소 계층
// ==========================================
// 책임: SQLite 영속화 (전체 목록 로드 / 전체 교체 저장)
// 제약: 비즈니스 로직 없음 - 부분/델타 저장 없음
// ==========================================

pub mod error;
pub mod schedule_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use schedule_repo::ScheduleRepository;
