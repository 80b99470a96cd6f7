/// Plain HTTP access used to invoke function urls
#[async_trait::async_trait]
pub trait HttpApi: Send + Sync {
    /// Sends a GET request to `url` and returns the complete body
    async fn get(&self, url: &str) -> anyhow::Result<String>;
}

/// [`HttpApi`] implementation based on [`reqwest`]
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Creates a client which fails every request taking longer than `timeout`
    pub fn new(timeout: std::time::Duration) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Unable to build http client")?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpApi for HttpClient {
    async fn get(&self, url: &str) -> anyhow::Result<String> {
        use anyhow::Context;

        log::info!("Sending GET to {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .with_context(|| format!("Failure during HTTP GET: {}", url))?;
        // `text` consumes the response, releasing the connection on every path
        response
            .text()
            .await
            .with_context(|| format!("Failure reading body from: {}", url))
    }
}

#[async_trait::async_trait]
impl<'a, T: HttpApi + ?Sized> HttpApi for &'a T {
    async fn get(&self, url: &str) -> anyhow::Result<String> {
        (**self).get(url).await
    }
}
