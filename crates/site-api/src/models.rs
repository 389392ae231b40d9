//! Mirrors of the resource API's JSON records.
//!
//! Dates and times stay as the strings the API serves; nothing in the tooling
//! interprets them, they are display values end to end.

use serde::{Deserialize, Serialize};

/// The site's current stream record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub is_live: bool,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// PUT body for replacing the current stream. `url` is expected to already be
/// an embeddable player URL (see the `embed-resolver` crate).
#[derive(Debug, Clone, Serialize)]
pub struct StreamUpdate {
    pub url: String,
    pub title: String,
    pub sport: String,
    pub is_live: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: i64,
    pub title: String,
    pub event_date: String,
    pub event_time: String,
    pub sport: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stream_url: Option<String>,
}

/// POST body for a new schedule event.
#[derive(Debug, Clone, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub event_date: String,
    pub event_time: String,
    pub sport: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub published_at: String,
}

/// POST body for a new news post.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub image_url: String,
}

// Response envelopes. Missing or null collections deserialize to their empty
// forms, matching how the page treated partial responses.

#[derive(Debug, Deserialize)]
pub(crate) struct StreamEnvelope {
    #[serde(default)]
    pub stream: Option<Stream>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScheduleEnvelope {
    #[serde(default)]
    pub events: Vec<ScheduleEvent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewsEnvelope {
    #[serde(default)]
    pub news: Vec<NewsPost>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventEnvelope {
    #[serde(default)]
    pub event: Option<ScheduleEvent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostEnvelope {
    #[serde(default)]
    pub post: Option<NewsPost>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeleteAck {
    #[serde(default)]
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_envelope_with_record() {
        let body = r#"{"stream": {"id": 7, "title": "Биатлон: Кубок мира",
            "url": "https://www.youtube-nocookie.com/embed/abc?autoplay=1",
            "is_live": true, "sport": "Биатлон",
            "updated_at": "2026-01-30 12:00:00"}}"#;
        let envelope: StreamEnvelope = serde_json::from_str(body).unwrap();
        let stream = envelope.stream.unwrap();
        assert_eq!(stream.id, 7);
        assert!(stream.is_live);
        assert_eq!(stream.sport.as_deref(), Some("Биатлон"));
    }

    #[test]
    fn stream_envelope_with_null_stream() {
        let envelope: StreamEnvelope = serde_json::from_str(r#"{"stream": null}"#).unwrap();
        assert!(envelope.stream.is_none());
    }

    #[test]
    fn schedule_envelope_defaults_to_empty() {
        let envelope: ScheduleEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.events.is_empty());
    }

    #[test]
    fn schedule_event_without_description() {
        let body = r#"{"events": [{"id": 1, "title": "Sprint", "event_date": "2026-02-14",
            "event_time": "18:30:00", "sport": "Биатлон"}]}"#;
        let envelope: ScheduleEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.events.len(), 1);
        assert!(envelope.events[0].description.is_none());
    }

    #[test]
    fn news_post_round_trip() {
        let body = r#"{"news": [{"id": 3, "title": "t", "content": "c",
            "image_url": "https://cdn.test/img.jpg",
            "published_at": "2026-01-29 09:15:00"}]}"#;
        let envelope: NewsEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.news[0].published_at, "2026-01-29 09:15:00");
    }

    #[test]
    fn stream_update_serializes_all_fields() {
        let update = StreamUpdate {
            url: "https://player.twitch.tv/?channel=x&parent=h".to_string(),
            title: "Live".to_string(),
            sport: "Hockey".to_string(),
            is_live: true,
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["is_live"], true);
        assert_eq!(value["sport"], "Hockey");
    }
}
