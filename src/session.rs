use std::str::FromStr;
use std::time::Duration;

use log::debug;
use serde::Deserialize;
use serde_json::Value;
use thirtyfour::common::command::{Command, FormatRequestData};
use thirtyfour::{Capabilities, DesiredCapabilities, SessionId, TypingData};

use crate::config::WaitConfig;
use crate::driver::WebDriverCommands;
use crate::error::{PageError, PageResult};
use crate::http::connection_sync::{HttpClientCreateParams, WebDriverHttpClientSync};
use crate::http::reqwest_sync::ReqwestDriverSync;
use crate::locator::ResolvedLocator;
use crate::webelement::{convert_element, convert_elements, WebElement};

const SCROLL_TO_CENTER: &str =
    "arguments[0].scrollIntoView({block: 'center', inline: 'nearest'})";

/// Browsers a new session can be requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
    Edge,
}

impl Browser {
    pub fn capabilities(self) -> DesiredCapabilities {
        let caps = match self {
            Browser::Chrome => DesiredCapabilities::chrome().get().clone(),
            Browser::Firefox => DesiredCapabilities::firefox().get().clone(),
            Browser::Safari => DesiredCapabilities::safari().get().clone(),
            Browser::Edge => DesiredCapabilities::edge().get().clone(),
        };
        DesiredCapabilities::new(caps)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No driver found for: {0}")]
pub struct UnknownBrowser(String);

impl FromStr for Browser {
    type Err = UnknownBrowser;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" => Ok(Browser::Chrome),
            "firefox" => Ok(Browser::Firefox),
            "safari" => Ok(Browser::Safari),
            "edge" => Ok(Browser::Edge),
            _ => Err(UnknownBrowser(s.to_string())),
        }
    }
}

/// The WebDriverSession struct represents a browser session over the W3C
/// WebDriver protocol, using a blocking `reqwest` client.
pub type WebDriverSession = GenericWebDriverSession<ReqwestDriverSync>;

/// A WebDriver session, generic over the HTTP client that carries its commands.
///
/// The session is an explicitly owned handle: pass it by reference to waits and page
/// objects, and do not share one session between concurrent test flows.
#[derive(Debug)]
pub struct GenericWebDriverSession<C: WebDriverHttpClientSync> {
    session_id: SessionId,
    conn: C,
    config: WaitConfig,
}

impl<C> GenericWebDriverSession<C>
where
    C: WebDriverHttpClientSync,
{
    /// Request a new browser session from the WebDriver server at `server_url`.
    pub fn start(server_url: &str, browser: Browser) -> PageResult<Self> {
        Self::start_with_capabilities(server_url, browser.capabilities(), None)
    }

    pub fn start_with_capabilities(
        server_url: &str,
        capabilities: DesiredCapabilities,
        timeout: Option<Duration>,
    ) -> PageResult<Self> {
        let conn = C::create(HttpClientCreateParams {
            server_url: server_url.to_string(),
            timeout,
        })?;
        let caps = capabilities.get().clone();
        let v = conn.execute(Command::NewSession(caps).format_request(&SessionId::null()))?;

        // Some servers put the id at the top level, others under `value`.
        #[derive(Debug, Deserialize)]
        struct NewSessionValue {
            #[serde(default, rename(deserialize = "sessionId"))]
            session_id: String,
        }

        #[derive(Debug, Deserialize)]
        struct NewSessionResp {
            #[serde(default, rename(deserialize = "sessionId"))]
            session_id: String,
            value: NewSessionValue,
        }

        let resp: NewSessionResp = serde_json::from_value(v)?;
        let session_id = if resp.session_id.is_empty() {
            resp.value.session_id
        } else {
            resp.session_id
        };
        if session_id.is_empty() {
            return Err(PageError::UnexpectedResponse("new session response has no session id".to_string()));
        }
        debug!("Started session {}", session_id);
        Ok(Self::attach(conn, SessionId::from(session_id)))
    }

    /// Drive an existing session over `conn`.
    pub fn attach(conn: C, session_id: SessionId) -> Self {
        Self {
            session_id,
            conn,
            config: WaitConfig::new(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn config(&self) -> &WaitConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut WaitConfig {
        &mut self.config
    }

    /// Set the request timeout for the HTTP client.
    pub fn set_request_timeout(&mut self, timeout: Duration) {
        self.conn.set_request_timeout(timeout);
    }

    /// Navigate to `url`.
    pub fn get(&self, url: &str) -> PageResult<()> {
        self.cmd(Command::NavigateTo(url.to_string()))?;
        Ok(())
    }

    /// End the webdriver session.
    pub fn quit(self) -> PageResult<()> {
        self.cmd(Command::DeleteSession)?;
        Ok(())
    }

    /// Execute a command and return the `value` member of the response.
    fn cmd(&self, command: Command) -> PageResult<Value> {
        let mut v = self.conn.execute(command.format_request(&self.session_id))?;
        Ok(v.get_mut("value").map(Value::take).unwrap_or(Value::Null))
    }

    fn cmd_bool(&self, command: Command) -> PageResult<bool> {
        let v = self.cmd(command)?;
        v.as_bool().ok_or_else(|| PageError::UnexpectedResponse(format!("expected boolean: {}", v)))
    }

    pub fn execute_script(&self, script: &str, args: Vec<Value>) -> PageResult<Value> {
        self.cmd(Command::ExecuteScript(script.to_string(), args))
    }
}

impl<C> WebDriverCommands for GenericWebDriverSession<C>
where
    C: WebDriverHttpClientSync,
{
    type Element = WebElement;

    fn find_element(&self, by: &ResolvedLocator) -> PageResult<WebElement> {
        let v = self.cmd(Command::FindElement(by.to_by().get_w3c_selector()))?;
        convert_element(&v)
    }

    fn find_elements(&self, by: &ResolvedLocator) -> PageResult<Vec<WebElement>> {
        let v = self.cmd(Command::FindElements(by.to_by().get_w3c_selector()))?;
        convert_elements(&v)
    }

    fn is_displayed(&self, element: &WebElement) -> PageResult<bool> {
        self.cmd_bool(Command::IsElementDisplayed(element.element_id.clone()))
    }

    fn is_enabled(&self, element: &WebElement) -> PageResult<bool> {
        self.cmd_bool(Command::IsElementEnabled(element.element_id.clone()))
    }

    fn is_selected(&self, element: &WebElement) -> PageResult<bool> {
        self.cmd_bool(Command::IsElementSelected(element.element_id.clone()))
    }

    fn tag_name(&self, element: &WebElement) -> PageResult<String> {
        let v = self.cmd(Command::GetElementTagName(element.element_id.clone()))?;
        Ok(serde_json::from_value(v)?)
    }

    fn get_attribute(&self, element: &WebElement, name: &str) -> PageResult<Option<String>> {
        let v = self.cmd(Command::GetElementAttribute(element.element_id.clone(), name.to_string()))?;
        Ok(v.as_str().map(str::to_string))
    }

    fn text(&self, element: &WebElement) -> PageResult<String> {
        let v = self.cmd(Command::GetElementText(element.element_id.clone()))?;
        Ok(serde_json::from_value(v)?)
    }

    fn scroll_into_view_centered(&self, element: &WebElement) -> PageResult<()> {
        self.execute_script(SCROLL_TO_CENTER, vec![serde_json::to_value(element)?])?;
        Ok(())
    }

    fn click(&self, element: &WebElement) -> PageResult<()> {
        self.cmd(Command::ElementClick(element.element_id.clone()))?;
        Ok(())
    }

    fn send_keys(&self, element: &WebElement, text: &str) -> PageResult<()> {
        self.cmd(Command::ElementSendKeys(element.element_id.clone(), TypingData::from(text)))?;
        Ok(())
    }

    fn wait_config(&self) -> WaitConfig {
        self.config.clone()
    }
}
