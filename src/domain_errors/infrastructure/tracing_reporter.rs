use tracing::{event, Level};

use crate::application::reporter::ErrorReporter;
use crate::domain::error::DomainError;

/// Emits one `tracing` event per reported error.
///
/// The event carries `code` and `kind` fields and uses the error message as
/// its text.
#[derive(Debug, Clone, Copy)]
pub struct TracingReporter {
    level: Level,
}

impl TracingReporter {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingReporter {
    fn default() -> Self {
        Self::new(Level::WARN)
    }
}

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &DomainError) {
        let code = error.code();
        let kind = error.name();
        let message = error.message();

        // event! needs a constant level
        if self.level == Level::ERROR {
            event!(Level::ERROR, code, kind, "{}", message);
        } else if self.level == Level::WARN {
            event!(Level::WARN, code, kind, "{}", message);
        } else if self.level == Level::INFO {
            event!(Level::INFO, code, kind, "{}", message);
        } else if self.level == Level::DEBUG {
            event!(Level::DEBUG, code, kind, "{}", message);
        } else {
            event!(Level::TRACE, code, kind, "{}", message);
        }
    }
}
