//! Auth API endpoints
//!
//! Provides the endpoints the login and signup pages talk to:
//! - POST /api/auth/login - Password sign-in, stores the session cookies
//! - POST /api/auth/signup - Account creation, emails a confirmation link
//! - GET /api/auth/callback - Confirmation link target, exchanges the code
//!
//! Login and signup always answer with an [`AuthReply`] body.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use std::sync::Arc;

use super::service::{AuthBackend, AuthError, Session, with_timeout};
use crate::core::config::Config;
use crate::core::reply::AuthReply;
use crate::core::validation::{Credentials, FormSchema, SignupCredentials};

pub const ACCESS_TOKEN_COOKIE: &str = "ideaforge-access-token";
pub const REFRESH_TOKEN_COOKIE: &str = "ideaforge-refresh-token";
pub const CODE_VERIFIER_COOKIE: &str = "ideaforge-code-verifier";

/// Auth API state containing the backend client and config
#[derive(Clone)]
pub struct AuthApiState<B> {
    /// `None` when the hosted auth project is not configured
    pub backend: Option<B>,
    pub config: Config,
}

impl<B: AuthBackend> AuthApiState<B> {
    pub fn new(backend: Option<B>, config: Config) -> Self {
        Self { backend, config }
    }

    fn backend(&self) -> Result<&B, AuthError> {
        self.backend.as_ref().ok_or(AuthError::NotConfigured)
    }
}

/// Convert AuthError to API response
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::InvalidInput(_) | AuthError::MissingVerifier => StatusCode::BAD_REQUEST,
            AuthError::Rejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST)
            }
            AuthError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AuthError::Transport(_) => StatusCode::BAD_GATEWAY,
            AuthError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        };

        (status, Json(AuthReply::failure(self.reply_message()))).into_response()
    }
}

/// Malformed bodies get the same reply shape as every other failure
impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::InvalidInput(rejection.body_text())
    }
}

/// Query of the confirmation link callback
#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error_description: Option<String>,
}

/// Create the auth API router
pub fn auth_api_router<B: AuthBackend>(state: AuthApiState<B>) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/auth/login", post(login_handler::<B>))
        .route("/api/auth/signup", post(signup_handler::<B>))
        .route("/api/auth/callback", get(callback_handler::<B>))
        .with_state(state)
}

/// POST /api/auth/login
async fn login_handler<B: AuthBackend>(
    State(state): State<Arc<AuthApiState<B>>>,
    jar: CookieJar,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<(CookieJar, Json<AuthReply>), AuthError> {
    let Json(request) = payload?;
    tracing::info!("Login attempt for email: {}", request.email);

    let credentials = request.parse()?;
    let backend = state.backend()?;

    let session = with_timeout(state.config.auth_timeout, backend.sign_in(&credentials))
        .await
        .inspect_err(|e| tracing::warn!("Login failed for {}: {}", credentials.email, e))?;

    tracing::info!("User logged in: {}", credentials.email);

    Ok((
        store_session(jar, session, state.config.secure_cookies()),
        Json(AuthReply::ok()),
    ))
}

/// POST /api/auth/signup
async fn signup_handler<B: AuthBackend>(
    State(state): State<Arc<AuthApiState<B>>>,
    jar: CookieJar,
    payload: Result<Json<SignupCredentials>, JsonRejection>,
) -> Result<(CookieJar, Json<AuthReply>), AuthError> {
    let Json(request) = payload?;
    tracing::info!("Signup attempt for email: {}", request.email);

    let credentials = request.parse()?.credentials();
    let backend = state.backend()?;

    let verifier = new_code_verifier();
    let redirect_to = state.config.callback_url();

    with_timeout(
        state.config.auth_timeout,
        backend.sign_up(&credentials, &redirect_to, &verifier),
    )
    .await
    .inspect_err(|e| tracing::warn!("Signup failed for {}: {}", credentials.email, e))?;

    tracing::info!("Confirmation email requested for: {}", credentials.email);

    Ok((
        jar.add(http_only_cookie(
            CODE_VERIFIER_COOKIE,
            verifier,
            state.config.secure_cookies(),
        )),
        Json(AuthReply::ok()),
    ))
}

/// GET /api/auth/callback
///
/// Failures land back on the signup page with `error_description` set.
async fn callback_handler<B: AuthBackend>(
    State(state): State<Arc<AuthApiState<B>>>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> (CookieJar, Redirect) {
    if let Some(description) = params.error_description.filter(|d| !d.is_empty()) {
        tracing::warn!("Confirmation link rejected by provider: {}", description);
        return (jar, Redirect::to(&signup_error_location(&description)));
    }

    match exchange(&state, &jar, params.code.as_deref()).await {
        Ok(session) => {
            tracing::info!("Confirmation code exchanged");
            let jar = jar.remove(Cookie::build(CODE_VERIFIER_COOKIE).path("/"));
            let secure = state.config.secure_cookies();
            (store_session(jar, session, secure), Redirect::to("/dashboard"))
        }
        Err(e) => {
            tracing::warn!("Confirmation code exchange failed: {}", e);
            (jar, Redirect::to(&signup_error_location(&e.reply_message())))
        }
    }
}

async fn exchange<B: AuthBackend>(
    state: &AuthApiState<B>,
    jar: &CookieJar,
    code: Option<&str>,
) -> Result<Session, AuthError> {
    let code = code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AuthError::InvalidInput("Missing confirmation code".to_string()))?;
    let verifier = jar
        .get(CODE_VERIFIER_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(AuthError::MissingVerifier)?;
    let backend = state.backend()?;

    with_timeout(
        state.config.auth_timeout,
        backend.exchange_code(code, &verifier),
    )
    .await
}

fn http_only_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

/// The access-token cookie expires with the token it carries
fn store_session(jar: CookieJar, session: Session, secure: bool) -> CookieJar {
    let mut access = http_only_cookie(ACCESS_TOKEN_COOKIE, session.access_token, secure);
    if session.expires_in > 0 {
        access.set_max_age(time::Duration::seconds(session.expires_in));
    }

    jar.add(access).add(http_only_cookie(
        REFRESH_TOKEN_COOKIE,
        session.refresh_token,
        secure,
    ))
}

/// PKCE verifier sent as a plain challenge and kept in a cookie until the
/// confirmation link comes back
fn new_code_verifier() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

/// Relative signup URL carrying an encoded `error_description`
fn signup_error_location(description: &str) -> String {
    match reqwest::Url::parse_with_params(
        "http://localhost/signup",
        &[("error_description", description)],
    ) {
        Ok(url) => format!("{}?{}", url.path(), url.query().unwrap_or_default()),
        Err(_) => "/signup".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reply::TIMEOUT_MESSAGE;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::header;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Clone, Copy)]
    enum Behaviour {
        Succeed,
        Reject(&'static str),
        Hang,
    }

    #[derive(Clone)]
    struct MockBackend {
        behaviour: Behaviour,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockBackend {
        fn new(behaviour: Behaviour) -> Self {
            Self {
                behaviour,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        async fn respond<T>(&self, call: String, value: T) -> Result<T, AuthError> {
            self.calls.lock().unwrap().push(call);
            match self.behaviour {
                Behaviour::Succeed => Ok(value),
                Behaviour::Reject(message) => Err(AuthError::Rejected {
                    status: 400,
                    message: message.to_string(),
                }),
                Behaviour::Hang => std::future::pending().await,
            }
        }
    }

    fn session() -> Session {
        Session {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: 3600,
        }
    }

    impl AuthBackend for MockBackend {
        async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
            self.respond(format!("sign_in:{}", credentials.email), session())
                .await
        }

        async fn sign_up(
            &self,
            credentials: &Credentials,
            redirect_to: &str,
            code_challenge: &str,
        ) -> Result<(), AuthError> {
            assert_eq!(code_challenge.len(), 64);
            self.respond(format!("sign_up:{}:{}", credentials.email, redirect_to), ())
                .await
        }

        async fn exchange_code(
            &self,
            auth_code: &str,
            code_verifier: &str,
        ) -> Result<Session, AuthError> {
            self.respond(format!("exchange:{}:{}", auth_code, code_verifier), session())
                .await
        }
    }

    fn state(backend: &MockBackend) -> State<Arc<AuthApiState<MockBackend>>> {
        let mut config = Config::from_lookup(|key| match key {
            "SITE_URL" => Some("https://ideaforge.app".to_string()),
            _ => None,
        });
        config.auth_timeout = Duration::from_millis(50);
        State(Arc::new(AuthApiState::new(Some(backend.clone()), config)))
    }

    async fn reply_of(response: Response) -> (StatusCode, AuthReply) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn location(redirect: Redirect) -> String {
        let response = redirect.into_response();
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_login_success_sets_session_cookies() {
        let backend = MockBackend::new(Behaviour::Succeed);
        let (jar, Json(reply)) = login_handler(
            state(&backend),
            CookieJar::new(),
            Ok(Json(Credentials::new("a@b.com", "longenough"))),
        )
        .await
        .unwrap();

        assert_eq!(reply, AuthReply::ok());
        assert_eq!(jar.get(ACCESS_TOKEN_COOKIE).unwrap().value(), "access");
        assert_eq!(jar.get(REFRESH_TOKEN_COOKIE).unwrap().value(), "refresh");
        assert!(jar.get(ACCESS_TOKEN_COOKIE).unwrap().http_only().unwrap_or(false));
        assert_eq!(
            jar.get(ACCESS_TOKEN_COOKIE).unwrap().max_age(),
            Some(time::Duration::seconds(3600))
        );
        assert_eq!(jar.get(REFRESH_TOKEN_COOKIE).unwrap().secure(), Some(true));
        assert_eq!(backend.calls(), vec!["sign_in:a@b.com".to_string()]);
    }

    #[test]
    fn test_session_cookies_on_plain_http_site() {
        let jar = store_session(
            CookieJar::new(),
            Session {
                expires_in: 0,
                ..session()
            },
            false,
        );

        let access = jar.get(ACCESS_TOKEN_COOKIE).unwrap();
        assert_eq!(access.max_age(), None);
        assert_eq!(access.secure(), Some(false));
    }

    #[tokio::test]
    async fn test_malformed_login_body_gets_reply() {
        let backend = MockBackend::new(Behaviour::Succeed);
        let request = axum::http::Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"email\": "))
            .unwrap();
        let rejection = Json::<Credentials>::from_request(request, &())
            .await
            .unwrap_err();

        let err = login_handler(state(&backend), CookieJar::new(), Err(rejection))
            .await
            .unwrap_err();

        let (status, reply) = reply_of(err.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(reply.error.is_some_and(|e| !e.message.is_empty()));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_rejection_is_reported_in_reply() {
        let backend = MockBackend::new(Behaviour::Reject("Invalid credentials"));
        let err = login_handler(
            state(&backend),
            CookieJar::new(),
            Ok(Json(Credentials::new("a@b.com", "longenough"))),
        )
        .await
        .unwrap_err();

        let (status, reply) = reply_of(err.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply, AuthReply::failure("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_login_invalid_input_never_reaches_backend() {
        let backend = MockBackend::new(Behaviour::Succeed);
        let err = login_handler(
            state(&backend),
            CookieJar::new(),
            Ok(Json(Credentials::new("not-an-email", "longenough"))),
        )
        .await
        .unwrap_err();

        let (status, reply) = reply_of(err.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply, AuthReply::failure("Invalid Email"));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_times_out() {
        let backend = MockBackend::new(Behaviour::Hang);
        let err = login_handler(
            state(&backend),
            CookieJar::new(),
            Ok(Json(Credentials::new("a@b.com", "longenough"))),
        )
        .await
        .unwrap_err();

        let (status, reply) = reply_of(err.into_response()).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(reply, AuthReply::failure(TIMEOUT_MESSAGE));
    }

    #[tokio::test]
    async fn test_login_without_backend_is_unavailable() {
        let config = Config::from_lookup(|_| None);
        let state = State(Arc::new(AuthApiState::<MockBackend>::new(None, config)));
        let err = login_handler(
            state,
            CookieJar::new(),
            Ok(Json(Credentials::new("a@b.com", "longenough"))),
        )
        .await
        .unwrap_err();

        let (status, _) = reply_of(err.into_response()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_signup_success_stores_verifier() {
        let backend = MockBackend::new(Behaviour::Succeed);
        let (jar, Json(reply)) = signup_handler(
            state(&backend),
            CookieJar::new(),
            Ok(Json(SignupCredentials::new("x@y.com", "password1", "password1"))),
        )
        .await
        .unwrap();

        assert_eq!(reply, AuthReply::ok());
        assert_eq!(jar.get(CODE_VERIFIER_COOKIE).unwrap().value().len(), 64);
        assert_eq!(
            backend.calls(),
            vec!["sign_up:x@y.com:https://ideaforge.app/api/auth/callback".to_string()]
        );
    }

    #[tokio::test]
    async fn test_signup_mismatch_is_rejected_locally() {
        let backend = MockBackend::new(Behaviour::Succeed);
        let err = signup_handler(
            state(&backend),
            CookieJar::new(),
            Ok(Json(SignupCredentials::new("x@y.com", "password1", "password2"))),
        )
        .await
        .unwrap_err();

        let (_, reply) = reply_of(err.into_response()).await;
        assert_eq!(reply, AuthReply::failure("Passwords don't match."));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_callback_forwards_provider_error() {
        let backend = MockBackend::new(Behaviour::Succeed);
        let (_, redirect) = callback_handler(
            state(&backend),
            CookieJar::new(),
            Query(CallbackParams {
                code: None,
                error_description: Some("Email link is invalid or has expired".to_string()),
            }),
        )
        .await;

        assert_eq!(
            location(redirect),
            "/signup?error_description=Email+link+is+invalid+or+has+expired"
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_callback_exchanges_code() {
        let backend = MockBackend::new(Behaviour::Succeed);
        let jar = CookieJar::new().add(Cookie::new(CODE_VERIFIER_COOKIE, "verifier"));
        let (jar, redirect) = callback_handler(
            state(&backend),
            jar,
            Query(CallbackParams {
                code: Some("abc".to_string()),
                error_description: None,
            }),
        )
        .await;

        assert_eq!(location(redirect), "/dashboard");
        assert_eq!(jar.get(ACCESS_TOKEN_COOKIE).unwrap().value(), "access");
        assert!(jar.get(CODE_VERIFIER_COOKIE).is_none());
        assert_eq!(backend.calls(), vec!["exchange:abc:verifier".to_string()]);
    }

    #[tokio::test]
    async fn test_callback_without_verifier_reports_link_error() {
        let backend = MockBackend::new(Behaviour::Succeed);
        let (_, redirect) = callback_handler(
            state(&backend),
            CookieJar::new(),
            Query(CallbackParams {
                code: Some("abc".to_string()),
                error_description: None,
            }),
        )
        .await;

        assert!(location(redirect).starts_with("/signup?error_description="));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_callback_failed_exchange_reports_link_error() {
        let backend = MockBackend::new(Behaviour::Reject("bad_code"));
        let jar = CookieJar::new().add(Cookie::new(CODE_VERIFIER_COOKIE, "verifier"));
        let (_, redirect) = callback_handler(
            state(&backend),
            jar,
            Query(CallbackParams {
                code: Some("abc".to_string()),
                error_description: None,
            }),
        )
        .await;

        assert_eq!(location(redirect), "/signup?error_description=bad_code");
    }

    #[test]
    fn test_code_verifier_is_random_hex() {
        let a = new_code_verifier();
        let b = new_code_verifier();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
