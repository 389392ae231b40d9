use crate::{cli::OutputFormat, error::Result};
#[cfg(feature = "colored-output")]
use colored::*;
use embed_resolver::Provider;
use site_api::models::{NewsPost, ScheduleEvent, Stream};
#[cfg(feature = "table-output")]
use tabled::{Table, Tabled, settings::Style};

pub struct OutputManager {
    colored: bool,
}

impl OutputManager {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn format_resolved(
        &self,
        raw_url: &str,
        provider: Provider,
        embed_url: &str,
        format: &OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Pretty => {
                let mut output = String::new();
                output.push_str(&self.heading("Resolved stream link:"));
                output.push('\n');
                output.push_str(&format!(
                    "  {}: {}\n",
                    self.label("Provider"),
                    self.value(provider.as_str())
                ));
                output.push_str(&format!(
                    "  {}: {}\n",
                    self.label("Embed URL"),
                    self.url(embed_url)
                ));
                Ok(output)
            }
            OutputFormat::Json | OutputFormat::JsonCompact => {
                let data = serde_json::json!({
                    "raw_url": raw_url,
                    "provider": provider.as_str(),
                    "embed_url": embed_url,
                });
                self.to_json(&data, matches!(format, OutputFormat::Json))
            }
            #[cfg(feature = "table-output")]
            OutputFormat::Table => {
                let rows = vec![
                    PropertyRow {
                        property: "Raw URL",
                        value: raw_url,
                    },
                    PropertyRow {
                        property: "Provider",
                        value: provider.as_str(),
                    },
                    PropertyRow {
                        property: "Embed URL",
                        value: embed_url,
                    },
                ];
                Ok(Table::new(rows).with(Style::modern()).to_string())
            }
            #[cfg(not(feature = "table-output"))]
            OutputFormat::Table => {
                self.format_resolved(raw_url, provider, embed_url, &OutputFormat::Pretty)
            }
        }
    }

    pub fn format_stream(&self, stream: Option<&Stream>, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => {
                let Some(stream) = stream else {
                    return Ok("No live stream".to_string());
                };
                let mut output = String::new();
                output.push_str(&self.heading("Current stream:"));
                output.push('\n');
                output.push_str(&format!(
                    "  {}: {}\n",
                    self.label("Title"),
                    self.value(&stream.title)
                ));
                if let Some(sport) = &stream.sport {
                    output.push_str(&format!("  {}: {}\n", self.label("Sport"), self.value(sport)));
                }
                output.push_str(&format!(
                    "  {}: {}\n",
                    self.label("Live"),
                    self.value(&stream.is_live.to_string())
                ));
                output.push_str(&format!("  {}: {}\n", self.label("URL"), self.url(&stream.url)));
                if let Some(updated_at) = &stream.updated_at {
                    output.push_str(&format!(
                        "  {}: {}\n",
                        self.label("Updated"),
                        self.value(updated_at)
                    ));
                }
                Ok(output)
            }
            OutputFormat::Json | OutputFormat::JsonCompact => {
                self.to_json(&stream, matches!(format, OutputFormat::Json))
            }
            #[cfg(feature = "table-output")]
            OutputFormat::Table => {
                let Some(stream) = stream else {
                    return Ok("No live stream".to_string());
                };
                let sport = stream.sport.as_deref().unwrap_or("");
                let live = stream.is_live.to_string();
                let rows = vec![
                    PropertyRow {
                        property: "Title",
                        value: &stream.title,
                    },
                    PropertyRow {
                        property: "Sport",
                        value: sport,
                    },
                    PropertyRow {
                        property: "Live",
                        value: &live,
                    },
                    PropertyRow {
                        property: "URL",
                        value: &stream.url,
                    },
                ];
                Ok(Table::new(rows).with(Style::modern()).to_string())
            }
            #[cfg(not(feature = "table-output"))]
            OutputFormat::Table => self.format_stream(stream, &OutputFormat::Pretty),
        }
    }

    pub fn format_schedule(
        &self,
        events: &[ScheduleEvent],
        format: &OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Pretty => {
                if events.is_empty() {
                    return Ok("No events".to_string());
                }
                let mut output = String::new();
                output.push_str(&self.heading("Schedule:"));
                output.push('\n');
                for event in events {
                    output.push_str(&format!(
                        "  [{}] {} {} • {} • {}\n",
                        self.value(&event.id.to_string()),
                        event.event_date,
                        event.event_time,
                        self.value(&event.sport),
                        event.title
                    ));
                    if let Some(description) = &event.description
                        && !description.is_empty()
                    {
                        output.push_str(&format!("       {description}\n"));
                    }
                }
                Ok(output)
            }
            OutputFormat::Json | OutputFormat::JsonCompact => {
                self.to_json(&events, matches!(format, OutputFormat::Json))
            }
            #[cfg(feature = "table-output")]
            OutputFormat::Table => {
                let rows: Vec<EventRow<'_>> = events
                    .iter()
                    .map(|event| EventRow {
                        id: event.id,
                        date: &event.event_date,
                        time: &event.event_time,
                        sport: &event.sport,
                        title: &event.title,
                    })
                    .collect();
                Ok(Table::new(rows).with(Style::modern()).to_string())
            }
            #[cfg(not(feature = "table-output"))]
            OutputFormat::Table => self.format_schedule(events, &OutputFormat::Pretty),
        }
    }

    pub fn format_news(&self, posts: &[NewsPost], format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => {
                if posts.is_empty() {
                    return Ok("No news".to_string());
                }
                let mut output = String::new();
                output.push_str(&self.heading("News:"));
                output.push('\n');
                for post in posts {
                    output.push_str(&format!(
                        "  [{}] {} • {}\n",
                        self.value(&post.id.to_string()),
                        post.published_at,
                        self.value(&post.title)
                    ));
                    output.push_str(&format!("       {}\n", post.content));
                }
                Ok(output)
            }
            OutputFormat::Json | OutputFormat::JsonCompact => {
                self.to_json(&posts, matches!(format, OutputFormat::Json))
            }
            #[cfg(feature = "table-output")]
            OutputFormat::Table => {
                let rows: Vec<PostRow<'_>> = posts
                    .iter()
                    .map(|post| PostRow {
                        id: post.id,
                        published: &post.published_at,
                        title: &post.title,
                    })
                    .collect();
                Ok(Table::new(rows).with(Style::modern()).to_string())
            }
            #[cfg(not(feature = "table-output"))]
            OutputFormat::Table => self.format_news(posts, &OutputFormat::Pretty),
        }
    }

    fn to_json<T: serde::Serialize>(&self, data: &T, pretty: bool) -> Result<String> {
        if pretty {
            serde_json::to_string_pretty(data)
        } else {
            serde_json::to_string(data)
        }
        .map_err(Into::into)
    }

    #[cfg(feature = "colored-output")]
    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(not(feature = "colored-output"))]
    fn heading(&self, text: &str) -> String {
        text.to_string()
    }

    #[cfg(feature = "colored-output")]
    fn label(&self, text: &str) -> String {
        if self.colored {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(not(feature = "colored-output"))]
    fn label(&self, text: &str) -> String {
        text.to_string()
    }

    #[cfg(feature = "colored-output")]
    fn value(&self, text: &str) -> String {
        if self.colored {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(not(feature = "colored-output"))]
    fn value(&self, text: &str) -> String {
        text.to_string()
    }

    #[cfg(feature = "colored-output")]
    fn url(&self, text: &str) -> String {
        if self.colored {
            text.blue().to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(not(feature = "colored-output"))]
    fn url(&self, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(feature = "table-output")]
#[derive(Tabled)]
struct PropertyRow<'a> {
    property: &'a str,
    value: &'a str,
}

#[cfg(feature = "table-output")]
#[derive(Tabled)]
struct EventRow<'a> {
    id: i64,
    date: &'a str,
    time: &'a str,
    sport: &'a str,
    title: &'a str,
}

#[cfg(feature = "table-output")]
#[derive(Tabled)]
struct PostRow<'a> {
    id: i64,
    published: &'a str,
    title: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream() -> Stream {
        Stream {
            id: 1,
            title: "Кубок мира".to_string(),
            url: "https://player.twitch.tv/?channel=x&parent=h".to_string(),
            is_live: true,
            sport: Some("Биатлон".to_string()),
            updated_at: None,
        }
    }

    #[test]
    fn stream_json_is_valid() {
        let manager = OutputManager::new(false);
        let out = manager
            .format_stream(Some(&stream()), &OutputFormat::JsonCompact)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["is_live"], true);
    }

    #[test]
    fn missing_stream_pretty() {
        let manager = OutputManager::new(false);
        let out = manager.format_stream(None, &OutputFormat::Pretty).unwrap();
        assert_eq!(out, "No live stream");
    }

    #[test]
    fn empty_schedule_pretty() {
        let manager = OutputManager::new(false);
        let out = manager.format_schedule(&[], &OutputFormat::Pretty).unwrap();
        assert_eq!(out, "No events");
    }

    #[test]
    fn resolved_json_carries_provider_name() {
        let manager = OutputManager::new(false);
        let out = manager
            .format_resolved(
                "https://twitch.tv/x",
                Provider::Twitch,
                "https://player.twitch.tv/?channel=x&parent=h",
                &OutputFormat::JsonCompact,
            )
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["provider"], "Twitch");
    }
}
