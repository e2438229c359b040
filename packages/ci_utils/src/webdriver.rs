use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use fantoccini::{elements::Element, key::Key, Client, ClientBuilder, Locator};
use serde_json::json;
use url::Url;

use crate::{Browser, E2eConfig, Query};

/// `Browser` backed by a W3C WebDriver session.
#[derive(Clone)]
pub struct WebDriverBrowser {
    client: Client,
    base_url: Url,
}

impl WebDriverBrowser {
    /// Open a session on `config.webdriver_url` pointed at `config.base_url`.
    pub async fn connect(config: &E2eConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        let mut caps = serde_json::Map::new();
        caps.insert("acceptInsecureCerts".to_string(), json!(true));
        if config.headless {
            caps.insert(
                "moz:firefoxOptions".to_string(),
                json!({ "args": ["-headless"] }),
            );
            caps.insert(
                "goog:chromeOptions".to_string(),
                json!({ "args": ["--headless=new", "--ignore-certificate-errors"] }),
            );
        }

        log::info!(
            "🌐 Connecting to WebDriver at {} (headless: {})",
            config.webdriver_url,
            config.headless
        );
        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&config.webdriver_url)
            .await
            .with_context(|| {
                format!("Failed to open WebDriver session at {}", config.webdriver_url)
            })?;

        Ok(Self { client, base_url })
    }

    /// End the WebDriver session.
    pub async fn close(self) -> Result<()> {
        self.client
            .close()
            .await
            .map_err(|err| anyhow!("Failed to close WebDriver session: {err}"))
    }

    fn route_url(&self, fragment: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_fragment(Some(fragment.trim_start_matches('#')));
        url
    }
}

#[async_trait]
impl Browser for WebDriverBrowser {
    type Element = Element;

    async fn visit(&self, fragment: &str) -> Result<()> {
        let url = self.route_url(fragment);
        log::debug!("➡️ Visiting {url}");
        self.client.goto(url.as_str()).await?;
        Ok(())
    }

    async fn location_hash(&self) -> Result<String> {
        let url = self.client.current_url().await?;
        Ok(url
            .fragment()
            .map(|fragment| format!("#{fragment}"))
            .unwrap_or_default())
    }

    async fn find_all(&self, scope: Option<&Element>, query: &Query) -> Result<Vec<Element>> {
        let locator = Locator::Css(query.css.as_str());
        let candidates = match scope {
            Some(parent) => parent.find_all(locator).await?,
            None => self.client.find_all(locator).await?,
        };
        if query.text.is_none() {
            return Ok(candidates);
        }

        let mut matched = Vec::with_capacity(candidates.len());
        for element in candidates {
            if query.accepts(&element.text().await?) {
                matched.push(element);
            }
        }
        Ok(matched)
    }

    async fn parent(&self, element: &Element) -> Result<Element> {
        Ok(element.find(Locator::XPath("..")).await?)
    }

    async fn click(&self, element: &Element) -> Result<()> {
        element.click().await?;
        Ok(())
    }

    async fn type_text(&self, element: &Element, text: &str) -> Result<()> {
        element.send_keys(text).await?;
        Ok(())
    }

    async fn press_enter(&self, element: &Element) -> Result<()> {
        let enter: char = Key::Enter.into();
        element.send_keys(&enter.to_string()).await?;
        Ok(())
    }

    async fn clear(&self, element: &Element) -> Result<()> {
        element.clear().await?;
        Ok(())
    }

    async fn text(&self, element: &Element) -> Result<String> {
        Ok(element.text().await?)
    }

    async fn classes(&self, element: &Element) -> Result<Vec<String>> {
        let class = element.attr("class").await?.unwrap_or_default();
        Ok(class.split_whitespace().map(str::to_string).collect())
    }

    async fn screenshot(&self) -> Result<Vec<u8>> {
        Ok(self.client.screenshot().await?)
    }
}
