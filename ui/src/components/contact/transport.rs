//! Submission collaborator seam. The form state machine only ever sees a
//! `Result`, so swapping the transport never touches the form logic.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use super::form::ContactMessage;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Submitter {
    /// POST to the site's contact endpoint.
    Http,
    /// Fixed-delay always-succeeds stand-in for offline development.
    Stub,
}

impl Submitter {
    pub async fn send(self, message: &ContactMessage) -> Result<(), String> {
        match self {
            Submitter::Http => {
                let resp = Request::post("/api/contact")
                    .json(message)
                    .map_err(|e| e.to_string())?
                    .send()
                    .await
                    .map_err(|e| e.to_string())?;

                if resp.ok() {
                    Ok(())
                } else {
                    Err(format!("contact endpoint answered {}", resp.status()))
                }
            }
            Submitter::Stub => {
                TimeoutFuture::new(1_500).await;
                Ok(())
            }
        }
    }
}
