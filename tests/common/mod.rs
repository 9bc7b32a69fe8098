#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;
use thirtyfour::RequestData;

use page_elements_sync::http::connection_sync::{HttpClientCreateParams, WebDriverHttpClientSync};
use page_elements_sync::{PageError, PageResult, ResolvedLocator, TimeoutTier, WaitConfig, WebDriverCommands};

/// A reference into a [`FakePage`]. Goes stale when the node is re-rendered or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeElement {
    pub node: usize,
    pub generation: u32,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub locator: String,
    pub attached: bool,
    pub generation: u32,
    pub displayed: bool,
    pub enabled: bool,
    pub selected: bool,
    pub class: String,
    pub text: String,
    pub typed: String,
    pub clicks: u32,
    pub broken: bool,
}

impl Node {
    pub fn new(locator: &str) -> Self {
        Node {
            locator: locator.to_string(),
            attached: true,
            generation: 0,
            displayed: true,
            enabled: true,
            selected: false,
            class: String::new(),
            text: String::new(),
            typed: String::new(),
            clicks: 0,
            broken: false,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.displayed = false;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Every state query on this node fails with a non-transient error.
    pub fn broken(mut self) -> Self {
        self.broken = true;
        self
    }

    pub fn detached(mut self) -> Self {
        self.attached = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Find(String),
    FindAll(String),
    Displayed(usize),
    Enabled(usize),
    Selected(usize),
    TagName(usize),
    Scroll(usize),
    Click(usize),
    SendKeys(usize, String),
}

type Mutation = Box<dyn FnOnce(&mut Vec<Node>)>;

/// An in-memory page whose nodes can be changed after a number of lookups.
pub struct FakePage {
    pub nodes: RefCell<Vec<Node>>,
    pub calls: RefCell<Vec<Call>>,
    lookups: Cell<usize>,
    scheduled: RefCell<Vec<(usize, Mutation)>>,
    config: WaitConfig,
}

impl FakePage {
    pub fn new(nodes: Vec<Node>) -> Self {
        FakePage {
            nodes: RefCell::new(nodes),
            calls: RefCell::new(Vec::new()),
            lookups: Cell::new(0),
            scheduled: RefCell::new(Vec::new()),
            config: WaitConfig {
                default_tier: TimeoutTier::Nominal,
                poll_interval: Duration::from_millis(10),
            },
        }
    }

    /// Apply `mutation` once `lookups` element queries have been made.
    pub fn after(self, lookups: usize, mutation: impl FnOnce(&mut Vec<Node>) + 'static) -> Self {
        self.scheduled.borrow_mut().push((lookups, Box::new(mutation)));
        self
    }

    pub fn element(&self, node: usize) -> FakeElement {
        FakeElement {
            node,
            generation: self.nodes.borrow()[node].generation,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, f: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| f(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
        let n = self.lookups.get() + 1;
        self.lookups.set(n);
        let due: Vec<Mutation> = {
            let mut scheduled = self.scheduled.borrow_mut();
            let mut due = Vec::new();
            let mut i = 0;
            while i < scheduled.len() {
                if scheduled[i].0 <= n {
                    due.push(scheduled.remove(i).1);
                } else {
                    i += 1;
                }
            }
            due
        };
        for m in due {
            m(&mut self.nodes.borrow_mut());
        }
    }

    fn matching(&self, by: &ResolvedLocator) -> Vec<FakeElement> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.attached && n.locator == by.value())
            .map(|(i, n)| FakeElement {
                node: i,
                generation: n.generation,
            })
            .collect()
    }

    fn live<T>(&self, element: &FakeElement, f: impl FnOnce(&mut Node) -> T) -> PageResult<T> {
        let mut nodes = self.nodes.borrow_mut();
        match nodes.get_mut(element.node) {
            Some(n) if n.broken => Err(PageError::WebDriver {
                status: 500,
                error: "unknown error".to_string(),
                message: "session crashed".to_string(),
            }),
            Some(n) if n.attached && n.generation == element.generation => Ok(f(n)),
            _ => Err(PageError::StaleElementReference(format!("{:?}", element))),
        }
    }
}

impl WebDriverCommands for FakePage {
    type Element = FakeElement;

    fn find_element(&self, by: &ResolvedLocator) -> PageResult<FakeElement> {
        self.record(Call::Find(by.value().to_string()));
        self.matching(by)
            .into_iter()
            .next()
            .ok_or_else(|| PageError::NoSuchElement(by.to_string()))
    }

    fn find_elements(&self, by: &ResolvedLocator) -> PageResult<Vec<FakeElement>> {
        self.record(Call::FindAll(by.value().to_string()));
        Ok(self.matching(by))
    }

    fn is_displayed(&self, element: &FakeElement) -> PageResult<bool> {
        self.record(Call::Displayed(element.node));
        self.live(element, |n| n.displayed)
    }

    fn is_enabled(&self, element: &FakeElement) -> PageResult<bool> {
        self.record(Call::Enabled(element.node));
        self.live(element, |n| n.enabled)
    }

    fn is_selected(&self, element: &FakeElement) -> PageResult<bool> {
        self.record(Call::Selected(element.node));
        self.live(element, |n| n.selected)
    }

    fn tag_name(&self, element: &FakeElement) -> PageResult<String> {
        self.record(Call::TagName(element.node));
        self.live(element, |_| "div".to_string())
    }

    fn get_attribute(&self, element: &FakeElement, name: &str) -> PageResult<Option<String>> {
        self.live(element, |n| if name == "class" { Some(n.class.clone()) } else { None })
    }

    fn text(&self, element: &FakeElement) -> PageResult<String> {
        self.live(element, |n| n.text.clone())
    }

    fn scroll_into_view_centered(&self, element: &FakeElement) -> PageResult<()> {
        self.record(Call::Scroll(element.node));
        self.live(element, |_| ())
    }

    fn click(&self, element: &FakeElement) -> PageResult<()> {
        self.record(Call::Click(element.node));
        self.live(element, |n| n.clicks += 1)
    }

    fn send_keys(&self, element: &FakeElement, text: &str) -> PageResult<()> {
        self.record(Call::SendKeys(element.node, text.to_string()));
        self.live(element, |n| n.typed.push_str(text))
    }

    fn wait_config(&self) -> WaitConfig {
        self.config.clone()
    }
}

/// An HTTP client that replays canned responses and records every request.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClient {
    pub requests: Arc<Mutex<Vec<RequestData>>>,
    pub responses: Arc<Mutex<Vec<PageResult<Value>>>>,
}

impl ScriptedClient {
    pub fn respond(&self, response: PageResult<Value>) {
        self.responses.lock().unwrap().push(response);
    }

    pub fn requests(&self) -> Vec<RequestData> {
        self.requests.lock().unwrap().clone()
    }
}

impl WebDriverHttpClientSync for ScriptedClient {
    fn create(_params: HttpClientCreateParams) -> PageResult<Self> {
        Ok(ScriptedClient::default())
    }

    fn set_request_timeout(&mut self, _timeout: Duration) {}

    fn execute(&self, request_data: RequestData) -> PageResult<Value> {
        self.requests.lock().unwrap().push(request_data);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(serde_json::json!({ "value": null }))
        } else {
            responses.remove(0)
        }
    }
}
