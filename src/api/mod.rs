// ==========================================
// 일정 보드 - API 계층
// ==========================================
// 책임: 호출자(앱 셸)가 쓰는 단일 인터페이스.
//       모든 저장소 변형을 직렬화하고 변경 시마다 영속화.
// ==========================================

pub mod board_api;
pub mod error;

pub use board_api::BoardApi;
pub use error::{ApiError, ApiResult};
