use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use embed_resolver::EmbedContext;
use site_api::models::{NewEvent, NewPost, StreamUpdate};
use site_api::{ApiError, SiteClient, client_with_timeout};
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::output::OutputManager;

pub struct CommandExecutor {
    config: AppConfig,
    config_path: Option<PathBuf>,
    output: OutputManager,
}

impl CommandExecutor {
    pub fn new(config: AppConfig, config_path: Option<PathBuf>, colored: bool) -> Self {
        Self {
            config,
            config_path,
            output: OutputManager::new(colored),
        }
    }

    /// Normalize a link and print the result. Purely local.
    pub fn resolve(&self, url: &str, parent: Option<&str>, output: &OutputFormat) -> Result<()> {
        let ctx = self.embed_context(parent);
        let provider = embed_resolver::detect(url);
        let embed_url = embed_resolver::normalize(url, &ctx);
        println!(
            "{}",
            self.output.format_resolved(url, provider, &embed_url, output)?
        );
        Ok(())
    }

    /// The public page view: stream, then schedule, then news, loaded
    /// sequentially. Each load stands alone: a failure is logged and the
    /// rest still render, exactly like the page itself.
    pub async fn show(&self, output: &OutputFormat) -> Result<()> {
        let client = self.make_client();

        match client.stream().await {
            Ok(stream) => println!("{}", self.output.format_stream(stream.as_ref(), output)?),
            Err(e) => warn!("failed to load stream: {e}"),
        }
        match client.schedule().await {
            Ok(events) => println!("{}", self.output.format_schedule(&events, output)?),
            Err(e) => warn!("failed to load schedule: {e}"),
        }
        match client.news().await {
            Ok(posts) => println!("{}", self.output.format_news(&posts, output)?),
            Err(e) => warn!("failed to load news: {e}"),
        }
        Ok(())
    }

    pub async fn stream_show(&self, output: &OutputFormat) -> Result<()> {
        let client = self.make_client();
        let stream = client.stream().await?;
        println!("{}", self.output.format_stream(stream.as_ref(), output)?);
        Ok(())
    }

    pub async fn stream_set(
        &mut self,
        url: &str,
        title: String,
        sport: String,
        offline: bool,
        output: &OutputFormat,
    ) -> Result<()> {
        let ctx = self.embed_context(None);
        let provider = embed_resolver::detect(url);
        let embed_url = embed_resolver::normalize(url, &ctx);
        info!(provider = %provider, embed_url, "normalized stream link");

        let update = StreamUpdate {
            url: embed_url,
            title,
            sport,
            is_live: !offline,
        };
        let mut client = self.make_client();
        let result = client.update_stream(&update).await;
        let stream = self.check_unauthorized(result)?;

        println!("✓ Stream updated");
        println!("{}", self.output.format_stream(Some(&stream), output)?);
        Ok(())
    }

    pub async fn schedule_list(&self, output: &OutputFormat) -> Result<()> {
        let client = self.make_client();
        let events = client.schedule().await?;
        println!("{}", self.output.format_schedule(&events, output)?);
        Ok(())
    }

    pub async fn schedule_add(
        &mut self,
        title: String,
        date: String,
        time: String,
        sport: String,
        description: String,
    ) -> Result<()> {
        let event = NewEvent {
            title,
            event_date: date,
            event_time: time,
            sport,
            description,
        };
        let mut client = self.make_client();
        let result = client.add_event(&event).await;
        let created = self.check_unauthorized(result)?;
        println!("✓ Event added (id {})", created.id);
        Ok(())
    }

    pub async fn schedule_remove(&mut self, id: i64) -> Result<()> {
        let mut client = self.make_client();
        let result = client.delete_event(id).await;
        self.check_unauthorized(result)?;
        println!("✓ Event {id} deleted");
        Ok(())
    }

    pub async fn news_list(&self, output: &OutputFormat) -> Result<()> {
        let client = self.make_client();
        let posts = client.news().await?;
        println!("{}", self.output.format_news(&posts, output)?);
        Ok(())
    }

    pub async fn news_add(&mut self, title: String, content: String, image_url: String) -> Result<()> {
        let post = NewPost {
            title,
            content,
            image_url,
        };
        let mut client = self.make_client();
        let result = client.add_post(&post).await;
        let created = self.check_unauthorized(result)?;
        println!("✓ News post added (id {})", created.id);
        Ok(())
    }

    pub async fn news_remove(&mut self, id: i64) -> Result<()> {
        let mut client = self.make_client();
        let result = client.delete_post(id).await;
        self.check_unauthorized(result)?;
        println!("✓ News post {id} deleted");
        Ok(())
    }

    /// Store the admin password. The server only ever validates it on the
    /// next authenticated call; login itself is local.
    pub fn login(&mut self, password: Option<String>) -> Result<()> {
        let password = match password {
            Some(password) => password,
            None => {
                eprint!("Admin password: ");
                io::stderr().flush()?;
                let mut buffer = String::new();
                io::stdin().lock().read_line(&mut buffer)?;
                buffer.trim().to_string()
            }
        };
        if password.is_empty() {
            return Err(AppError::InvalidInput("password must not be empty".into()));
        }
        self.config.admin_password = Some(password);
        self.config.save(self.config_path.as_deref())?;
        println!("✓ Logged in; password stored");
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        self.config.admin_password = None;
        self.config.save(self.config_path.as_deref())?;
        println!("✓ Logged out");
        Ok(())
    }

    fn embed_context(&self, parent_override: Option<&str>) -> EmbedContext {
        EmbedContext::new(parent_override.unwrap_or(&self.config.parent_host))
            .goodgame_proxy(self.config.goodgame_proxy.clone())
    }

    fn make_client(&self) -> SiteClient {
        let timeout = Duration::from_secs(self.config.timeout_secs);
        let mut client = SiteClient::new(self.config.api_url.as_str(), client_with_timeout(timeout));
        if let Some(password) = &self.config.admin_password {
            client.set_credential(password.as_str());
        }
        client
    }

    /// A 401 also removes the persisted password, the same forced logout the
    /// admin panel performed when the server rejected its credential.
    fn check_unauthorized<T>(&mut self, result: std::result::Result<T, ApiError>) -> Result<T> {
        if let Err(ApiError::Unauthorized) = &result {
            self.config.admin_password = None;
            self.config.save(self.config_path.as_deref())?;
            warn!("admin credential rejected; stored password removed, log in again");
        }
        result.map_err(Into::into)
    }
}
