use std::fmt::Debug;
use std::time::Duration;

use serde_json::Value;
use thirtyfour::RequestData;

use crate::error::PageResult;

#[derive(Debug, Clone)]
pub struct HttpClientCreateParams {
    pub server_url: String,
    pub timeout: Option<Duration>,
}

/// Trait for executing HTTP requests to selenium/webdriver.
/// As long as you have some struct that implements WebDriverHttpClientSync,
/// you can drive a session with it like this:
///
/// ```ignore
/// // Assuming MyHttpClient implements WebDriverHttpClientSync.
/// pub type MySession = GenericWebDriverSession<MyHttpClient>;
/// ```
pub trait WebDriverHttpClientSync: Debug + Send + Sync {
    fn create(params: HttpClientCreateParams) -> PageResult<Self>
    where
        Self: Sized;

    fn set_request_timeout(&mut self, timeout: Duration);

    /// Execute the request and return the full JSON response body.
    /// Error responses are turned into errors.
    fn execute(&self, request_data: RequestData) -> PageResult<Value>;
}
