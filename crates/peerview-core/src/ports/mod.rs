//! 포트 인터페이스 (trait).
//!
//! Hexagonal Architecture의 포트 레이어.
//! 각 어댑터 crate가 이 trait들을 구현하며,
//! `peerview-app`에서 `Arc<dyn T>`로 와이어링한다.
//!
//! 모든 포트는 UI 스레드에서 짧게 호출되므로 동기 메서드만 가진다.

pub mod clipboard;
pub mod session_store;
pub mod surface;
