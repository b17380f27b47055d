use actix_web::{HttpResponse, post, web};
use anyhow::Context;
use moka::future::Cache;
use once_cell::sync::Lazy;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::{env, sync::Arc, time::Duration};

#[derive(Deserialize, Serialize, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    received_at: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    message: &'a ContactMessage,
}

static HTTP: OnceCell<Arc<reqwest::Client>> = OnceCell::new();

/// one message per sender address per window
static RECENT_SENDERS: Lazy<Cache<String, ()>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(60))
        .max_capacity(1024) // safety cap
        .build()
});

fn http() -> &'static reqwest::Client {
    HTTP.get_or_init(|| Arc::new(reqwest::Client::new())).as_ref()
}

/// Same shape the client enforces; repeated here because the endpoint is
/// reachable without the client.
fn well_formed_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn reject_reason(msg: &ContactMessage) -> Option<&'static str> {
    if msg.name.trim().is_empty() {
        return Some("name is required");
    }
    if msg.email.trim().is_empty() {
        return Some("email is required");
    }
    if !well_formed_email(&msg.email) {
        return Some("email is malformed");
    }
    if msg.message.trim().is_empty() {
        return Some("message is required");
    }
    None
}

async fn relay(target: &str, msg: &ContactMessage) -> anyhow::Result<()> {
    let payload = RelayPayload {
        received_at: chrono::Utc::now(),
        message: msg,
    };
    http()
        .post(target)
        .json(&payload)
        .send()
        .await
        .context("contact relay unreachable")?
        .error_for_status()
        .context("contact relay rejected the message")?;
    Ok(())
}

#[post("/api/contact")]
pub async fn submit(body: web::Json<ContactMessage>) -> HttpResponse {
    let msg = body.into_inner();

    if let Some(reason) = reject_reason(&msg) {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": reason }));
    }

    let sender = msg.email.trim().to_lowercase();
    if RECENT_SENDERS.get(&sender).await.is_some() {
        return HttpResponse::TooManyRequests().json(serde_json::json!({
            "error": "a message from this address was just received"
        }));
    }

    match env::var("CONTACT_WEBHOOK") {
        Ok(target) => {
            if let Err(err) = relay(&target, &msg).await {
                log::error!("contact relay failed: {err:#}");
                return HttpResponse::BadGateway().json(serde_json::json!({
                    "error": "message could not be delivered"
                }));
            }
        }
        // no relay configured: accept and keep it in the server log
        Err(_) => log::info!(
            "contact message from {} <{}>: {}",
            msg.name.trim(),
            sender,
            msg.message.trim()
        ),
    }

    RECENT_SENDERS.insert(sender, ()).await;
    HttpResponse::NoContent().finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    fn msg(name: &str, email: &str, message: &str) -> ContactMessage {
        ContactMessage {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    async fn post(payload: &ContactMessage) -> StatusCode {
        let app = test::init_service(App::new().service(submit)).await;
        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(payload)
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn accepts_a_valid_message() {
        let status = post(&msg("Ada", "ada@example.com", "Hello there")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn rejects_blank_name() {
        let status = post(&msg("   ", "grace@example.com", "Hi")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn rejects_malformed_email() {
        let status = post(&msg("Grace", "not-an-email", "Hi")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn rejects_blank_message() {
        let status = post(&msg("Grace", "hopper@example.com", " ")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn throttles_repeat_senders() {
        let repeat = msg("Linus", "linus@example.com", "First of two");
        assert_eq!(post(&repeat).await, StatusCode::NO_CONTENT);
        assert_eq!(post(&repeat).await, StatusCode::TOO_MANY_REQUESTS);
    }

    #[::core::prelude::v1::test]
    fn email_shape_check() {
        assert!(well_formed_email("a@b.co"));
        assert!(well_formed_email("first.last@sub.domain.dev"));
        assert!(!well_formed_email("a@b"));
        assert!(!well_formed_email("a@.co"));
        assert!(!well_formed_email("a b@c.co"));
        assert!(!well_formed_email("@b.co"));
    }
}
