//! HTTP(S) CSV 소스.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::CsvSource;
use crate::error::{DataError, Result};

/// 게시된 CSV URL에서 문서를 가져오는 소스.
#[derive(Debug, Clone)]
pub struct HttpCsvSource {
    client: Client,
    url: String,
}

impl HttpCsvSource {
    /// 요청 타임아웃을 지정해 소스를 생성합니다.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CsvSource for HttpCsvSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_text(&self) -> Result<String> {
        debug!(url = %self.url, "Requesting CSV");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "CSV request rejected");
            return Err(DataError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        Ok(response.text().await?)
    }
}
