//! Test doubles for the call core: a scripted transport and an event recorder.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::core::transport::{RawResponse, Transport, TransportError};

/// A canned response, or the message of a canned transport failure.
type Reply = Result<RawResponse, String>;

#[derive(Default)]
struct Script {
    routes: HashMap<String, VecDeque<Reply>>,
    requests: Vec<String>,
}

/// Transport that replays canned replies per URL.
///
/// Replies queue up in order; the last one repeats. Unknown URLs get a 404.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, status: u16, body: &str) -> &Self {
        self.push(
            url,
            Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
        )
    }

    pub fn respond_json(&self, url: &str, body: serde_json::Value) -> &Self {
        self.respond(url, 200, &body.to_string())
    }

    pub fn fail(&self, url: &str, cause: &str) -> &Self {
        self.push(url, Err(cause.to_string()))
    }

    fn push(&self, url: &str, reply: Reply) -> &Self {
        let mut script = self.script.lock().unwrap();
        script
            .routes
            .entry(url.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    /// Every URL requested so far, one entry per physical attempt.
    pub fn requests(&self) -> Vec<String> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn hits(&self, url: &str) -> usize {
        self.requests().iter().filter(|u| u.as_str() == url).count()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let mut script = self.script.lock().unwrap();
        script.requests.push(url.to_string());
        let reply = match script.routes.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => Ok(RawResponse {
                status: 404,
                body: String::new(),
            }),
        };
        reply.map_err(TransportError::Unavailable)
    }
}

/// One recorded tracing event.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Shared view of events recorded from this crate.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<CapturedEvent>>>);

impl EventLog {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.0.lock().unwrap().clone()
    }

    pub fn at(&self, level: Level) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }
}

struct FieldVisitor<'a>(&'a mut BTreeMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{:?}", value));
    }
}

struct Recorder(EventLog);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if !meta.target().starts_with("sleeper_ffl") {
            return;
        }
        let mut fields = BTreeMap::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.0 .0.lock().unwrap().push(CapturedEvent {
            level: *meta.level(),
            fields,
        });
    }
}

/// Record this crate's events on the current thread until the guard drops.
pub fn capture_events() -> (EventLog, DefaultGuard) {
    let log = EventLog::default();
    let subscriber = tracing_subscriber::registry().with(Recorder(log.clone()));
    let guard = tracing::subscriber::set_default(subscriber);
    (log, guard)
}
