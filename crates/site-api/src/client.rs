//! Client for the resource API.
//!
//! The API is a single endpoint; resources are addressed by the `resource`
//! query parameter (`stream`, `schedule`, `news`), deletes by an additional
//! `id`. Reads are public; writes carry the shared admin secret in a header
//! and come back 401 when it is wrong.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::models::{
    DeleteAck, EventEnvelope, NewEvent, NewPost, NewsEnvelope, NewsPost, PostEnvelope,
    ScheduleEnvelope, ScheduleEvent, Stream, StreamEnvelope, StreamUpdate,
};

/// Deployed endpoint of the resource API.
pub const DEFAULT_API_URL: &str =
    "https://functions.poehali.dev/b726b831-4bec-45c4-86a0-702fb2ab6218";

/// Header carrying the shared admin secret. The value is opaque here; the
/// server is the only party that validates it.
pub const ADMIN_PASSWORD_HEADER: &str = "X-Admin-Password";

const RESOURCE_STREAM: &str = "stream";
const RESOURCE_SCHEDULE: &str = "schedule";
const RESOURCE_NEWS: &str = "news";

/// Typed access to the resource API, holding the admin credential for the
/// session.
///
/// The credential is explicit state: set on login, dropped on logout, and
/// dropped automatically when any authenticated call is answered with 401.
/// After that, authenticated calls fail fast with
/// [`ApiError::MissingCredential`] until a new login.
pub struct SiteClient {
    base_url: String,
    client: Client,
    credential: Option<String>,
}

impl SiteClient {
    pub fn new<S: Into<String>>(base_url: S, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
            credential: None,
        }
    }

    pub fn set_credential<S: Into<String>>(&mut self, password: S) {
        self.credential = Some(password.into());
    }

    pub fn clear_credential(&mut self) {
        self.credential = None;
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current stream record, if the site has one that is live.
    pub async fn stream(&self) -> Result<Option<Stream>, ApiError> {
        let envelope: StreamEnvelope = self.get_resource(RESOURCE_STREAM).await?;
        Ok(envelope.stream)
    }

    pub async fn schedule(&self) -> Result<Vec<ScheduleEvent>, ApiError> {
        let envelope: ScheduleEnvelope = self.get_resource(RESOURCE_SCHEDULE).await?;
        Ok(envelope.events)
    }

    pub async fn news(&self) -> Result<Vec<NewsPost>, ApiError> {
        let envelope: NewsEnvelope = self.get_resource(RESOURCE_NEWS).await?;
        Ok(envelope.news)
    }

    /// Replace the current stream. `update.url` should already be an
    /// embeddable player URL.
    pub async fn update_stream(&mut self, update: &StreamUpdate) -> Result<Stream, ApiError> {
        let response = self
            .authed_request(Method::PUT, RESOURCE_STREAM)?
            .json(update)
            .send()
            .await?;
        let envelope: StreamEnvelope = self.parse_response(response).await?;
        envelope
            .stream
            .ok_or_else(|| ApiError::InvalidResponse("stream missing from PUT response".into()))
    }

    pub async fn add_event(&mut self, event: &NewEvent) -> Result<ScheduleEvent, ApiError> {
        let response = self
            .authed_request(Method::POST, RESOURCE_SCHEDULE)?
            .json(event)
            .send()
            .await?;
        let envelope: EventEnvelope = self.parse_response(response).await?;
        envelope
            .event
            .ok_or_else(|| ApiError::InvalidResponse("event missing from POST response".into()))
    }

    pub async fn delete_event(&mut self, id: i64) -> Result<(), ApiError> {
        let response = self
            .authed_request(Method::DELETE, RESOURCE_SCHEDULE)?
            .query(&[("id", id)])
            .send()
            .await?;
        let ack: DeleteAck = self.parse_response(response).await?;
        debug!(success = ack.success, id, "schedule event delete acknowledged");
        Ok(())
    }

    pub async fn add_post(&mut self, post: &NewPost) -> Result<NewsPost, ApiError> {
        let response = self
            .authed_request(Method::POST, RESOURCE_NEWS)?
            .json(post)
            .send()
            .await?;
        let envelope: PostEnvelope = self.parse_response(response).await?;
        envelope
            .post
            .ok_or_else(|| ApiError::InvalidResponse("post missing from POST response".into()))
    }

    pub async fn delete_post(&mut self, id: i64) -> Result<(), ApiError> {
        let response = self
            .authed_request(Method::DELETE, RESOURCE_NEWS)?
            .query(&[("id", id)])
            .send()
            .await?;
        let ack: DeleteAck = self.parse_response(response).await?;
        debug!(success = ack.success, id, "news post delete acknowledged");
        Ok(())
    }

    fn request(&self, method: Method, resource: &str) -> RequestBuilder {
        self.client
            .request(method, self.base_url.as_str())
            .query(&[("resource", resource)])
    }

    fn authed_request(&self, method: Method, resource: &str) -> Result<RequestBuilder, ApiError> {
        let password = self
            .credential
            .as_deref()
            .ok_or(ApiError::MissingCredential)?;
        Ok(self
            .request(method, resource)
            .header(ADMIN_PASSWORD_HEADER, password))
    }

    async fn get_resource<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ApiError> {
        let response = self.request(Method::GET, resource).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, resource, "resource api response");
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status,
                message: body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Shared tail of every authenticated call: a 401 drops the stored
    /// credential before surfacing, any other failure keeps it.
    async fn parse_response<T: DeserializeOwned>(
        &mut self,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        self.note_status(status)?;
        let body = response.text().await?;
        debug!(%status, "resource api response");
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status,
                message: body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    fn note_status(&mut self, status: StatusCode) -> Result<(), ApiError> {
        if status == StatusCode::UNAUTHORIZED {
            self.credential = None;
            return Err(ApiError::Unauthorized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_client;

    fn client() -> SiteClient {
        SiteClient::new("https://api.test/resources", default_client())
    }

    #[test]
    fn credential_lifecycle() {
        let mut client = client();
        assert!(!client.has_credential());

        client.set_credential("hunter2");
        assert!(client.has_credential());

        client.clear_credential();
        assert!(!client.has_credential());
    }

    #[test]
    fn unauthorized_status_drops_credential() {
        let mut client = client();
        client.set_credential("hunter2");

        let err = client.note_status(StatusCode::UNAUTHORIZED).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
        assert!(!client.has_credential());

        assert!(client.note_status(StatusCode::OK).is_ok());
    }

    #[test]
    fn authed_request_without_credential_fails_fast() {
        let client = client();
        let err = client
            .authed_request(Method::PUT, RESOURCE_STREAM)
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingCredential));
    }

    #[tokio::test]
    #[ignore]
    async fn fetch_live_resources() {
        let client = SiteClient::new(DEFAULT_API_URL, default_client());
        let stream = client.stream().await.unwrap();
        println!("{stream:?}");
        let events = client.schedule().await.unwrap();
        println!("{} events", events.len());
    }
}
