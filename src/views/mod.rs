//! # HTML Views
//!
//! askama 템플릿(`templates/`)과 템플릿에 넘기는 값 구조체입니다.
//! 템플릿 안에서는 분기를 최소화하고, 표시 여부는 핸들러가 미리 계산해 넘깁니다.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use askama::Template;

use crate::domain::User;
use crate::domain::oauth::OAuthProvider;
use crate::errors::{AppError, AppResult};

/// 소셜 로그인 버튼
#[derive(Debug, Clone)]
pub struct ProviderButton {
    pub href: String,
    pub label: &'static str,
    pub css_class: &'static str,
}

impl ProviderButton {
    pub fn for_providers(providers: &[OAuthProvider]) -> Vec<Self> {
        providers
            .iter()
            .map(|provider| Self {
                href: format!("/auth/{}", provider.as_str()),
                label: provider.label(),
                css_class: match provider {
                    OAuthProvider::Google => "btn-google",
                    OAuthProvider::Facebook => "btn-facebook",
                },
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "home.html", escape = "html")]
pub struct HomeView {
    pub logged_in: bool,
}

#[derive(Template)]
#[template(path = "login.html", escape = "html")]
pub struct LoginView {
    pub logged_in: bool,
    pub providers: Vec<ProviderButton>,
}

#[derive(Template)]
#[template(path = "register.html", escape = "html")]
pub struct RegisterView {
    pub logged_in: bool,
    pub providers: Vec<ProviderButton>,
}

/// 목록의 한 줄. OAuth 전용 사용자는 작성자가 "Someone"으로 표시됩니다.
#[derive(Debug, Clone)]
pub struct SecretEntry {
    pub author: String,
    pub secret: String,
}

impl SecretEntry {
    /// `secret`이 없는 사용자는 None
    pub fn from_user(user: &User) -> Option<Self> {
        user.secret.as_ref().map(|secret| Self {
            author: user.display_name().to_string(),
            secret: secret.clone(),
        })
    }
}

#[derive(Template)]
#[template(path = "secrets.html", escape = "html")]
pub struct SecretsView {
    pub logged_in: bool,
    pub secrets: Vec<SecretEntry>,
}

#[derive(Template)]
#[template(path = "submit.html", escape = "html")]
pub struct SubmitView {
    pub logged_in: bool,
    pub max_chars: usize,
}

/// 템플릿을 HTML 응답으로 렌더링합니다.
pub fn render<T: Template>(template: &T) -> AppResult<HttpResponse> {
    let html = template
        .render()
        .map_err(|e| AppError::InternalError(format!("템플릿 렌더링 실패: {}", e)))?;

    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_view_shows_only_configured_providers() {
        let view = LoginView {
            logged_in: false,
            providers: ProviderButton::for_providers(&[OAuthProvider::Facebook]),
        };

        let html = view.render().unwrap();

        assert!(html.contains("href=\"/auth/facebook\""));
        assert!(!html.contains("/auth/google"));
        assert!(html.contains("action=\"/login\""));
    }

    fn entry(author: &str, secret: &str) -> SecretEntry {
        SecretEntry {
            author: author.to_string(),
            secret: secret.to_string(),
        }
    }

    #[test]
    fn test_secrets_view_escapes_text() {
        let view = SecretsView {
            logged_in: false,
            secrets: vec![
                entry("<b>mallory</b>", "<script>alert(1)</script>"),
                entry("alice", "plain"),
            ],
        };

        let html = view.render().unwrap();

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>mallory</b>"));
        assert!(html.contains("alert(1)"));
        assert!(html.contains("plain"));
    }

    #[test]
    fn test_secret_entry_names_author() {
        let mut local = User::new_local("alice".to_string(), "hash".to_string());
        let mut social = User::new_oauth(OAuthProvider::Google, "g-1".to_string());
        let silent = User::new_local("bob".to_string(), "hash".to_string());
        local.secret = Some("x".to_string());
        social.secret = Some("y".to_string());

        let a = SecretEntry::from_user(&local).unwrap();
        let c = SecretEntry::from_user(&social).unwrap();

        assert_eq!((a.author.as_str(), a.secret.as_str()), ("alice", "x"));
        assert_eq!((c.author.as_str(), c.secret.as_str()), ("Someone", "y"));
        assert!(SecretEntry::from_user(&silent).is_none());
    }

    #[test]
    fn test_layout_switches_nav_on_login_state() {
        let anonymous = HomeView { logged_in: false }.render().unwrap();
        let member = HomeView { logged_in: true }.render().unwrap();

        assert!(anonymous.contains("href=\"/register\""));
        assert!(member.contains("href=\"/logout\""));
    }
}
