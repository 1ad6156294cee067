//! peerview 도메인 모델.
//!
//! 알림(토스트)과 세션 사용자처럼 여러 crate가 공유하는 데이터 구조체를 정의한다.

pub mod notification;
pub mod user;
