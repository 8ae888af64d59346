use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "ok",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

/// Queue of user-facing messages pushed by mutations and drained by the
/// console after each action. Tests read it instead of a screen.
#[derive(Debug, Default)]
pub struct Notifications {
    queue: Mutex<Vec<Notification>>,
}

impl Notifications {
    pub fn push(&self, level: Level, message: impl Into<String>) {
        self.queue.lock().unwrap().push(Notification {
            level,
            message: message.into(),
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Level::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(Level::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(Level::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Level::Error, message);
    }

    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut self.queue.lock().unwrap())
    }
}
