//! 접근 게이트의 동작 모드

/// 보호 라우트에서 익명 요청을 어떻게 다룰지 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccessMode {
    /// 세션이 없으면 `/login`으로 리다이렉트
    Required,
    /// 세션이 있으면 사용자를 붙이고, 없어도 그대로 진행
    Optional,
}
