//! CMS OAuth redirect endpoint.
//!
//! A single route, `GET /api/auth`, that kicks off the GitHub OAuth flow
//! for the content-management backend. The CMS opens this route in a popup;
//! some browsers treat plain HTTP redirects as downloads in popup contexts,
//! so browser callers get a small HTML page that force-navigates to the
//! authorization server instead of a `Location` header. Non-browser callers
//! (detected via the `Accept` header) get the URL as JSON and follow it
//! themselves.
//!
//! Misconfiguration is the only failure path: without a client id the
//! route answers 500 with a diagnostic page telling the operator exactly
//! what to set. Everything else is a straight-line request/response.

use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::config::SiteConfig;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const OAUTH_SCOPE: &str = "repo";

/// Runtime settings for the auth route.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub client_id: Option<String>,
    pub base_url: String,
}

impl AuthSettings {
    /// Resolve settings with the environment taking precedence over config:
    /// `GITHUB_CLIENT_ID` over `[auth] client_id`, `PUBLIC_BASE_URL` over
    /// `[site] base_url`.
    pub fn resolve(config: &SiteConfig) -> Self {
        let env_nonempty =
            |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            client_id: env_nonempty("GITHUB_CLIENT_ID").or_else(|| config.auth.client_id.clone()),
            base_url: env_nonempty("PUBLIC_BASE_URL").unwrap_or_else(|| config.site.base_url.clone()),
        }
    }
}

/// The application router: one route, plus state.
pub fn router(settings: AuthSettings) -> Router {
    Router::new()
        .route("/api/auth", get(auth))
        .with_state(settings)
}

/// Bind and serve the auth endpoint until shutdown.
pub async fn serve(settings: AuthSettings, addr: SocketAddr) -> Result<(), ServeError> {
    if settings.client_id.is_none() {
        tracing::warn!("no OAuth client id configured; /api/auth will answer 500");
    }
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "auth endpoint listening");
    axum::serve(listener, router(settings)).await?;
    Ok(())
}

/// Build the GitHub authorization URL. Query values are form-encoded, so
/// the result never contains quotes and can be embedded in HTML verbatim.
fn authorize_url(client_id: &str, base_url: &str, state: &str) -> String {
    let redirect_uri = format!("{base_url}/api/callback");
    let query = serde_urlencoded::to_string([
        ("client_id", client_id),
        ("redirect_uri", redirect_uri.as_str()),
        ("state", state),
        ("scope", OAUTH_SCOPE),
    ])
    .expect("string pairs must encode");
    format!("{AUTHORIZE_URL}?{query}")
}

async fn auth(State(settings): State<AuthSettings>, headers: HeaderMap) -> Response {
    let Some(client_id) = settings.client_id.as_deref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::X_CONTENT_TYPE_OPTIONS, "nosniff")],
            Html(misconfigured_page().into_string()),
        )
            .into_response();
    };

    // Fresh anti-forgery token per request; the callback compares it.
    let state = Uuid::new_v4().to_string();
    let auth_url = authorize_url(client_id, &settings.base_url, &state);

    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    // Browsers (and the CMS popup) send text/html or */*; programmatic
    // callers asking for something narrower get the URL as data.
    let wants_html = accept.is_empty() || accept.contains("text/html") || accept.contains("*/*");

    if !wants_html {
        return Json(json!({ "auth_url": auth_url })).into_response();
    }

    (
        StatusCode::OK,
        [
            (header::CONTENT_DISPOSITION, "inline"),
            (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
            (header::PRAGMA, "no-cache"),
            (header::EXPIRES, "0"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        Html(redirect_page(&auth_url).into_string()),
    )
        .into_response()
}

/// Operator-facing diagnostic for the missing-client-id case.
fn misconfigured_page() -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Configuration Error" }
                style {
                    (PreEscaped(
                        "body { font-family: sans-serif; padding: 2rem; max-width: 600px; margin: 0 auto; }\n\
                         h1 { color: #d32f2f; }\n\
                         code { background: #f5f5f5; padding: 2px 6px; border-radius: 3px; }"
                    ))
                }
            }
            body {
                h1 { "Configuration Error" }
                p { strong { "GITHUB_CLIENT_ID is not configured" } }
                p { "To fix this:" }
                ol {
                    li {
                        "Create a " code { ".env" } " file next to the server, or export the \
                         variables in its environment"
                    }
                    li {
                        "Add your GitHub OAuth credentials:"
                        pre {
                            code {
                                "GITHUB_CLIENT_ID=your_client_id_here\n\
                                 GITHUB_CLIENT_SECRET=your_client_secret_here\n\
                                 PUBLIC_BASE_URL=http://localhost:4321"
                            }
                        }
                    }
                    li { "Restart the server" }
                }
                p {
                    "Get your credentials from: "
                    a href="https://github.com/settings/developers" target="_blank" {
                        "GitHub OAuth Apps"
                    }
                }
            }
        }
    }
}

/// Force-navigation page for popup contexts. Belt and braces: meta refresh,
/// script, and a manual link all point at the same URL.
fn redirect_page(auth_url: &str) -> Markup {
    let script = format!(
        "(function() {{\n  try {{ window.location.replace(\"{auth_url}\"); }}\n  catch (e) {{ window.location.href = \"{auth_url}\"; }}\n}})();"
    );
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content=(format!("0; url={auth_url}"));
                title { "Redirecting to GitHub..." }
                script { (PreEscaped(script)) }
            }
            body {
                p { "Redirecting to GitHub..." }
                p {
                    "If you are not redirected, "
                    a href=(auth_url) { "click here" }
                    "."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(client_id: Option<&str>) -> AuthSettings {
        AuthSettings {
            client_id: client_id.map(|s| s.to_string()),
            base_url: "http://localhost:4321".to_string(),
        }
    }

    fn accept(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if !value.is_empty() {
            headers.insert(header::ACCEPT, value.parse().unwrap());
        }
        headers
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn missing_client_id_answers_500_with_diagnostic() {
        let response = auth(State(settings(None)), accept("text/html")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );

        let body = body_string(response).await;
        assert!(body.contains("GITHUB_CLIENT_ID is not configured"));
        assert!(body.contains("github.com/settings/developers"));
    }

    #[tokio::test]
    async fn json_caller_gets_auth_url_payload() {
        let response = auth(
            State(settings(Some("Iv1.abc123"))),
            accept("application/json"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("application/json")
        );

        let body = body_string(response).await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        let url = value["auth_url"].as_str().unwrap();
        assert!(url.starts_with("https://github.com/login/oauth/authorize?"));
        assert!(url.contains("client_id=Iv1.abc123"));
        assert!(url.contains("scope=repo"));
        assert!(url.contains("state="));
        // redirect_uri is form-encoded
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A4321%2Fapi%2Fcallback"));
    }

    #[tokio::test]
    async fn browser_caller_gets_forced_navigation_page() {
        let response = auth(State(settings(Some("Iv1.abc123"))), accept("text/html")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "no-cache, no-store, must-revalidate"
        );

        let body = body_string(response).await;
        assert!(body.contains("http-equiv=\"refresh\""));
        assert!(body.contains("window.location.replace"));
        assert!(body.contains("client_id=Iv1.abc123"));
        assert!(body.contains("click here"));
    }

    #[tokio::test]
    async fn absent_accept_header_is_treated_as_browser() {
        let response = auth(State(settings(Some("Iv1.abc123"))), accept("")).await;
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn wildcard_accept_is_treated_as_browser() {
        let response = auth(State(settings(Some("Iv1.abc123"))), accept("*/*")).await;
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn state_token_is_fresh_per_request() {
        let extract_state = |body: &str| {
            let value: serde_json::Value = serde_json::from_str(body).unwrap();
            let url = value["auth_url"].as_str().unwrap().to_string();
            url.split("state=")
                .nth(1)
                .unwrap()
                .split('&')
                .next()
                .unwrap()
                .to_string()
        };

        let s = settings(Some("Iv1.abc123"));
        let first = body_string(auth(State(s.clone()), accept("application/json")).await).await;
        let second = body_string(auth(State(s), accept("application/json")).await).await;
        assert_ne!(extract_state(&first), extract_state(&second));
    }

    #[test]
    fn authorize_url_embeds_without_quotes() {
        let url = authorize_url("Iv1.abc123", "http://localhost:4321", "state-token");
        assert!(!url.contains('"'));
        assert!(!url.contains(' '));
    }
}
