//! # Caching Module
//!
//! 세션 저장소의 Redis 백엔드를 제공합니다.
//! 키 설계는 [`crate::repositories::sessions`]에서 정합니다.

pub mod redis;
