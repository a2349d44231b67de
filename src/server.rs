// src/server.rs
//
// HTTP front end: the two form pages, a health check and the static site.

use std::path::Path;
use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use chrono::Local;
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{Result, SiteError};
use crate::handlers::{self, GuestbookView, Outcome};
use crate::i18n::Language;
use crate::models::{ContactForm, GuestbookForm};
use crate::render;
use crate::store::{FileLog, FlatLog};

/// Shared application state.
pub struct AppState {
    pub contact: Arc<dyn FlatLog>,
    pub guestbook: Arc<dyn FlatLog>,
    pub default_language: Language,
}

impl AppState {
    pub fn new(
        contact: Arc<dyn FlatLog>,
        guestbook: Arc<dyn FlatLog>,
        default_language: Language,
    ) -> Self {
        Self {
            contact,
            guestbook,
            default_language,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(FileLog::new(config.contact_path())),
            Arc::new(FileLog::new(config.guestbook_path())),
            config.default_language,
        )
    }

    fn language(&self, query: &LangQuery) -> Language {
        Language::resolve(query.lang.as_deref(), self.default_language)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

pub fn router(state: Arc<AppState>, public_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/contact", get(contact_form).post(contact_submit))
        .route("/contact.php", get(contact_form).post(contact_submit))
        .route("/guestbook", get(guestbook_list).post(guestbook_submit))
        .route("/guestbook.php", get(guestbook_list).post(guestbook_submit))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the server until Ctrl+C or SIGTERM.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.addr()?;
    let state = Arc::new(AppState::from_config(config));
    let app = router(state, &config.public_dir);

    tracing::info!(
        %addr,
        contact = %config.contact_path().display(),
        guestbook = %config.guestbook_path().display(),
        public = %config.public_dir.display(),
        "starting server"
    );
    println!("✓ Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SiteError::Server(e.to_string()))?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

/// Runs file work off the async workers, substituting `fallback` if the
/// blocking task dies.
async fn blocking<T, F>(f: F, fallback: T) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, "blocking task failed");
            fallback
        }
    }
}

fn page(outcome: &Outcome, html: String) -> Response {
    let status = match outcome {
        Outcome::Failed => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };
    (status, Html(html)).into_response()
}

/// A listing failure fails the request only when nothing was submitted.
fn guestbook_response(lang: Language, view: &GuestbookView) -> Response {
    let status = match (&view.outcome, view.list_failed) {
        (Outcome::Failed, _) | (Outcome::Shown, true) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };
    (status, Html(render::guestbook_page(lang, view))).into_response()
}

/// An unreadable body is handled like an empty form, so validation rejects
/// it and the page renders inline.
fn form_or_empty<T: Default>(form: std::result::Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::info!(error = %rejection, "unreadable form body");
            T::default()
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn contact_form(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
) -> Response {
    let lang = state.language(&query);
    page(&Outcome::Shown, render::contact_page(lang, &Outcome::Shown))
}

async fn contact_submit(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
    form: std::result::Result<Form<ContactForm>, FormRejection>,
) -> Response {
    let lang = state.language(&query);
    let form = form_or_empty(form);
    let log = Arc::clone(&state.contact);
    let now = Local::now().naive_local();

    let outcome = blocking(
        move || handlers::submit_contact(log.as_ref(), &form, now),
        Outcome::Failed,
    )
    .await;
    page(&outcome, render::contact_page(lang, &outcome))
}

async fn guestbook_list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
) -> Response {
    let lang = state.language(&query);
    let log = Arc::clone(&state.guestbook);

    let view = blocking(
        move || handlers::guestbook_view(log.as_ref(), Outcome::Shown),
        failed_view(),
    )
    .await;
    guestbook_response(lang, &view)
}

async fn guestbook_submit(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
    form: std::result::Result<Form<GuestbookForm>, FormRejection>,
) -> Response {
    let lang = state.language(&query);
    let form = form_or_empty(form);
    let log = Arc::clone(&state.guestbook);
    let now = Local::now().naive_local();

    let view = blocking(
        move || {
            let outcome = handlers::submit_guestbook(log.as_ref(), &form, now);
            handlers::guestbook_view(log.as_ref(), outcome)
        },
        failed_view(),
    )
    .await;
    guestbook_response(lang, &view)
}

fn failed_view() -> GuestbookView {
    GuestbookView {
        outcome: Outcome::Failed,
        entries: Vec::new(),
        list_failed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryLog;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    struct Harness {
        contact: Arc<MemoryLog>,
        guestbook: Arc<MemoryLog>,
        public: tempfile::TempDir,
    }

    impl Harness {
        fn new() -> Self {
            let public = tempfile::tempdir().unwrap();
            std::fs::write(public.path().join("index.html"), "<h1>INTELLIGENTSIA SA</h1>").unwrap();
            Self {
                contact: Arc::new(MemoryLog::new()),
                guestbook: Arc::new(MemoryLog::new()),
                public,
            }
        }

        fn app(&self) -> Router {
            let state = AppState::new(
                self.contact.clone(),
                self.guestbook.clone(),
                Language::Fr,
            );
            router(Arc::new(state), self.public.path())
        }
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_req(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let h = Harness::new();
        let (status, body) = send(h.app(), get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn contact_form_defaults_to_french() {
        let h = Harness::new();
        let (status, body) = send(h.app(), get_req("/contact")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Envoyez-nous un Message"));
        assert!(body.contains(r#"<div class="contact-form">"#));
    }

    #[tokio::test]
    async fn contact_submission_is_stored() {
        let h = Harness::new();
        let (status, body) = send(
            h.app(),
            post_req(
                "/contact?lang=en",
                "name=Alice&email=alice%40example.com&subject=&message=Call+me",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Thank you for your message! We will get back to you soon."));

        let stored = h.contact.read().unwrap();
        assert!(stored.starts_with(
            "Name: Alice\nEmail: alice@example.com\nSubject: \nMessage: Call me\nDate: "
        ));
        assert!(stored.ends_with("\n---\n"));
    }

    #[tokio::test]
    async fn missing_fields_render_inline_error_with_200() {
        let h = Harness::new();
        let (status, body) = send(h.app(), post_req("/contact.php?lang=en", "name=Alice")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Please fill in all required fields."));
        assert_eq!(h.contact.read().unwrap(), "");
    }

    #[tokio::test]
    async fn unreadable_form_body_renders_inline_error_with_200() {
        let h = Harness::new();
        let (status, body) = send(
            h.app(),
            post_req("/guestbook?lang=en", "name=a&name=b&message=Hi"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Please fill in all required fields."));
        assert_eq!(h.guestbook.read().unwrap(), "");

        let untyped = Request::builder()
            .method("POST")
            .uri("/contact?lang=en")
            .body(Body::from("name=Alice&email=a%40b.c&message=Hi"))
            .unwrap();
        let (status, body) = send(h.app(), untyped).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Please fill in all required fields."));
        assert_eq!(h.contact.read().unwrap(), "");
    }

    #[tokio::test]
    async fn guestbook_post_then_list() {
        let h = Harness::new();
        let (status, body) = send(
            h.app(),
            post_req("/guestbook?lang=en", "name=Alice&message=Hello"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Thank you for your message!"));
        assert!(body.contains("<strong>Alice</strong><br><p>Hello</p><small>"));
        assert_eq!(body.matches(r#"class="message-item""#).count(), 1);

        send(h.app(), post_req("/guestbook.php", "name=Bob&message=Salut")).await;
        let (_, listing) = send(h.app(), get_req("/guestbook?lang=en")).await;
        let bob = listing.find("<strong>Bob</strong>").unwrap();
        let alice = listing.find("<strong>Alice</strong>").unwrap();
        assert!(bob < alice);
    }

    #[tokio::test]
    async fn guestbook_markup_is_never_rendered_raw() {
        let h = Harness::new();
        let (_, body) = send(
            h.app(),
            post_req("/guestbook", "name=%3Cb%3EX%3C%2Fb%3E&message=hi"),
        )
        .await;
        assert!(!body.contains("<b>X</b>"));
        assert!(body.contains("&amp;lt;b&amp;gt;X"));
        assert!(h.guestbook.read().unwrap().starts_with("Name: &lt;b&gt;X&lt;/b&gt;\n"));
    }

    #[tokio::test]
    async fn empty_guestbook_message_does_not_write() {
        let h = Harness::new();
        let (status, body) = send(h.app(), post_req("/guestbook?lang=fr", "name=Alice&message=")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Veuillez remplir tous les champs obligatoires."));
        assert_eq!(h.guestbook.read().unwrap(), "");
    }

    #[tokio::test]
    async fn static_site_is_served_as_fallback() {
        let h = Harness::new();
        let (status, body) = send(h.app(), get_req("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("INTELLIGENTSIA SA"));

        let (status, _) = send(h.app(), get_req("/missing.css")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    struct WriteOnlyLog(MemoryLog);

    impl FlatLog for WriteOnlyLog {
        fn append(&self, record: &str) -> Result<()> {
            self.0.append(record)
        }

        fn read(&self) -> Result<String> {
            Err(SiteError::storage(
                "guestbook.txt",
                std::io::Error::new(std::io::ErrorKind::Other, "I/O error"),
            ))
        }

        fn describe(&self) -> String {
            "write-only".to_string()
        }
    }

    #[tokio::test]
    async fn accepted_entry_survives_an_unreadable_listing() {
        let dir = tempfile::tempdir().unwrap();
        let guestbook = Arc::new(WriteOnlyLog(MemoryLog::new()));
        let state = AppState::new(Arc::new(MemoryLog::new()), guestbook.clone(), Language::En);
        let app = router(Arc::new(state), dir.path());

        let (status, body) = send(app, post_req("/guestbook", "name=A&message=B")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Thank you for your message!"));
        assert!(body.contains("Messages could not be loaded."));
        assert!(!body.contains("could not be saved"));
        assert!(guestbook.0.read().unwrap().starts_with("Name: A\n"));
    }

    #[tokio::test]
    async fn storage_failure_is_a_generic_500() {
        let dir = tempfile::tempdir().unwrap();
        // The data "file" is a directory, so every read and append fails.
        let broken: Arc<dyn FlatLog> = Arc::new(FileLog::new(dir.path()));
        let state = AppState::new(broken.clone(), broken, Language::En);
        let app = router(Arc::new(state), dir.path());

        let (status, body) = send(app.clone(), post_req("/guestbook", "name=A&message=B")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("could not be saved"));
        assert!(!body.contains("Is a directory"));

        let (status, body) = send(app, get_req("/guestbook")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Messages could not be loaded."));
        assert!(!body.contains("could not be saved"));
    }
}
