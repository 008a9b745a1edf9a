//! Forwarding `tracing` events into the facade.
//!
//! # Data Flow
//! ```text
//! tracing::info!(peer = %addr, "accepted")
//!     → FacadeLayer::on_event
//!     → message field → msg, other fields → attributes
//!     → file/line → source (tracing has no function name, so none is recorded)
//!     → active Logger (global handle or an injected one)
//! ```
//!
//! # Design Decisions
//! - Level filtering uses the facade's level, read per event, so `init` applies immediately
//! - TRACE maps to DEBUG
//! - Span fields are not collected

use std::fmt;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{self, Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::logging::attr::Attr;
use crate::logging::context::Context;
use crate::logging::handle::LoggerHandle;
use crate::logging::level::Level;
use crate::logging::record::Source;

/// A tracing-subscriber layer that writes events through a [`LoggerHandle`].
#[derive(Debug, Clone)]
pub struct FacadeLayer {
    handle: Option<Arc<LoggerHandle>>,
}

impl FacadeLayer {
    /// Route events through the process-wide handle.
    pub fn global() -> Self {
        Self { handle: None }
    }

    /// Route events through a specific handle.
    pub fn with_handle(handle: Arc<LoggerHandle>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    fn handle(&self) -> &LoggerHandle {
        match &self.handle {
            Some(handle) => handle.as_ref(),
            None => crate::logging::global(),
        }
    }
}

impl<S: Subscriber> Layer<S> for FacadeLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: layer::Context<'_, S>) {
        let metadata = event.metadata();
        let level = Level::from(*metadata.level());

        let logger = self.handle().current();
        if !logger.enabled(level) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let source = metadata.file().map(|file| {
            Source::new(file, metadata.line().unwrap_or(0), "")
        });

        logger.emit(
            &Context::background(),
            level,
            &visitor.message,
            &visitor.attrs,
            source,
        );
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    attrs: Vec<Attr>,
}

impl FieldVisitor {
    fn push(&mut self, field: &Field, value: impl Into<serde_json::Value>) {
        self.attrs.push(Attr::new(field.name(), value));
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push(field, value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, value);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, value);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.push(field, format!("{:?}", value));
        }
    }
}

/// Install a registry with a global [`FacadeLayer`] as the default subscriber.
pub fn install_tracing_bridge() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(FacadeLayer::global())
        .try_init()
}
