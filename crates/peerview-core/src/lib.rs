//! # peerview-core
//!
//! peerview 도메인 모델, 포트(trait) 정의, 에러 타입, 설정.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`]: 알림/사용자 데이터 구조체
//! - [`ports`]: 표시면, 클립보드, 세션 저장소 인터페이스
//! - [`error`]: 핵심 에러 타입 (thiserror)
//! - [`config`]: 애플리케이션 설정 구조체
//! - [`config_manager`]: 설정 파일 관리 (로드/저장)
//! - [`labels`]: 코드값 라벨 변환
//! - [`session`]: 세션 사용자 저장소 구현

pub mod config;
pub mod config_manager;
pub mod error;
pub mod labels;
pub mod models;
pub mod ports;
pub mod session;
