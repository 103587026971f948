//! Pure Apify REST API client.
//!
//! A minimal client for the Apify platform API. Supports starting actor runs,
//! polling for completion, and fetching dataset results.
//!
//! # Example
//!
//! ```rust,ignore
//! use apify_client::ApifyClient;
//!
//! let client = ApifyClient::new("your-api-token".into());
//!
//! let tweets = client.scrape_x_posts("E_Boeminghaus", 500).await?;
//! for tweet in &tweets {
//!     println!("{}", tweet.content().unwrap_or("(no text)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{RunData, Tweet, TweetAuthor, TweetScraperInput};

use serde::de::DeserializeOwned;
use types::ApiResponse;

const BASE_URL: &str = "https://api.apify.com/v2";

/// Actor ID for apidojo/tweet-scraper.
const TWEET_SCRAPER: &str = "61RPP7dywgiy0JPD0";

pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root (mirrors, local fakes).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Start an X/Twitter profile scrape run. Returns immediately with run metadata.
    pub async fn start_x_scrape(&self, handle: &str, limit: u32) -> Result<RunData> {
        let input = TweetScraperInput {
            twitter_handles: vec![handle.to_string()],
            max_items: limit,
            sort: "Latest".to_string(),
        };

        let url = format!("{}/acts/{}/runs", self.base_url, TWEET_SCRAPER);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&input)
            .send()
            .await?;

        let api_resp: ApiResponse<RunData> = Self::check(resp).await?.json().await?;
        Ok(api_resp.data)
    }

    /// Poll until a run completes. Uses `waitForFinish=60` for efficient long-polling.
    pub async fn wait_for_run(&self, run_id: &str) -> Result<RunData> {
        loop {
            let url = format!("{}/actor-runs/{}?waitForFinish=60", self.base_url, run_id);
            let resp = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .send()
                .await?;

            let api_resp: ApiResponse<RunData> = Self::check(resp).await?.json().await?;
            match api_resp.data.status.as_str() {
                "SUCCEEDED" => return Ok(api_resp.data),
                "FAILED" | "ABORTED" | "TIMED-OUT" => {
                    return Err(ApifyError::RunFailed(api_resp.data.status));
                }
                _ => {
                    tracing::debug!(run_id, status = %api_resp.data.status, "Run still in progress");
                    continue;
                }
            }
        }
    }

    /// Fetch dataset items from a completed run.
    pub async fn get_dataset_items<T: DeserializeOwned>(&self, dataset_id: &str) -> Result<Vec<T>> {
        let url = format!("{}/datasets/{}/items?format=json", self.base_url, dataset_id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let items: Vec<T> = Self::check(resp).await?.json().await?;
        Ok(items)
    }

    /// Scrape X/Twitter profile posts end-to-end: start run, poll, fetch results.
    pub async fn scrape_x_posts(&self, handle: &str, limit: u32) -> Result<Vec<Tweet>> {
        tracing::info!(handle, limit, "Starting X/Twitter profile scrape");

        let run = self.start_x_scrape(handle, limit).await?;
        tracing::info!(run_id = %run.id, "Apify run started, polling for completion");

        let completed = self.wait_for_run(&run.id).await?;
        tracing::info!(
            run_id = %completed.id,
            dataset_id = %completed.default_dataset_id,
            "Run completed, fetching results"
        );

        let tweets: Vec<Tweet> = self
            .get_dataset_items(&completed.default_dataset_id)
            .await?;
        tracing::info!(count = tweets.len(), "Fetched tweets");

        Ok(tweets)
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(resp)
    }
}
