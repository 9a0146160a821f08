//! 세션 저장소
//!
//! | 키 | 값 | 만료 |
//! |----|----|------|
//! | `session:{session_id}` | [`SessionPrincipal`](crate::domain::session::SessionPrincipal) JSON | `SESSION_TTL_SECONDS` |
//! | `oauth_state:{state}` | [`OAuthProvider`](crate::domain::oauth::OAuthProvider) JSON | `OAUTH_STATE_TTL_SECONDS` |

pub mod session_store;
pub mod redis_session_store;
pub mod memory_session_store;

pub use session_store::SessionStore;
pub use redis_session_store::RedisSessionStore;
pub use memory_session_store::MemorySessionStore;
