use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::WeatherConfig;

const DEFAULT_WEATHER: &str = "Sunny";

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Invalid weather API URL: {0}")]
    InvalidUrl(String),
    #[error("Weather API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Weather API responded with status {0}")]
    Status(u16),
    #[error("No weather data for {0}")]
    MissingDate(String),
}

/// Supplies the weather tag stored on new todos
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn weather_on(&self, date: NaiveDate) -> Result<String, WeatherError>;

    async fn today(&self) -> Result<String, WeatherError> {
        self.weather_on(Utc::now().date_naive()).await
    }
}

/// Returns the same tag for every date
#[derive(Debug, Clone)]
pub struct FixedWeather(pub String);

impl Default for FixedWeather {
    fn default() -> Self {
        FixedWeather(DEFAULT_WEATHER.to_string())
    }
}

#[async_trait]
impl WeatherSource for FixedWeather {
    async fn weather_on(&self, _date: NaiveDate) -> Result<String, WeatherError> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Deserialize)]
struct WeatherEntry {
    date: String,
    weather: String,
}

/// Reads a JSON feed of `{"date": "MM-DD", "weather": "..."}` entries
pub struct HttpWeatherSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpWeatherSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, WeatherError> {
        let url = Url::parse(url).map_err(|_| WeatherError::InvalidUrl(url.to_string()))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl WeatherSource for HttpWeatherSource {
    async fn weather_on(&self, date: NaiveDate) -> Result<String, WeatherError> {
        let response = self.client.get(self.url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let entries: Vec<WeatherEntry> = response.json().await?;
        pick_weather(&entries, date)
    }
}

fn pick_weather(entries: &[WeatherEntry], date: NaiveDate) -> Result<String, WeatherError> {
    let key = date.format("%m-%d").to_string();
    entries
        .iter()
        .find(|entry| entry.date == key)
        .map(|entry| entry.weather.clone())
        .ok_or(WeatherError::MissingDate(key))
}

/// HTTP feed when a URL is configured, otherwise a fixed tag
pub fn weather_source(config: &WeatherConfig) -> Result<Arc<dyn WeatherSource>, WeatherError> {
    match &config.url {
        Some(url) => {
            let source = HttpWeatherSource::new(url, Duration::from_secs(config.timeout_secs))?;
            Ok(Arc::new(source))
        }
        None => Ok(Arc::new(FixedWeather::default())),
    }
}
