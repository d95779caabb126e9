use crate::userdeck::fetcher::{Fetcher, DEFAULT_TIMEOUT};
use anyhow::Result;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub endpoint: Url,
    pub timeout: Option<Duration>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Sets the request timeout in seconds; `0` disables it.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        self
    }

    /// Builds the HTTP fetcher for the configured endpoint.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn fetcher(&self) -> Result<Fetcher> {
        Fetcher::new(self.endpoint.clone(), self.timeout, crate::APP_USER_AGENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() -> Result<()> {
        let endpoint = Url::parse("https://jsonplaceholder.typicode.com/users")?;
        let args = GlobalArgs::new(endpoint);
        assert_eq!(
            args.endpoint.as_str(),
            "https://jsonplaceholder.typicode.com/users"
        );
        assert_eq!(args.timeout, Some(Duration::from_secs(10)));
        Ok(())
    }

    #[test]
    fn test_timeout_zero_disables() -> Result<()> {
        let args = GlobalArgs::new(Url::parse("http://localhost/users")?).with_timeout_secs(0);
        assert_eq!(args.timeout, None);

        let args = args.with_timeout_secs(3);
        assert_eq!(args.timeout, Some(Duration::from_secs(3)));
        Ok(())
    }

    #[test]
    fn test_fetcher_uses_endpoint() -> Result<()> {
        let args = GlobalArgs::new(Url::parse("http://localhost:3000/users")?);
        let fetcher = args.fetcher()?;
        assert_eq!(fetcher.endpoint().as_str(), "http://localhost:3000/users");
        Ok(())
    }
}
