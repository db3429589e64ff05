//! Handoff of collected URLs to the tab orchestrator.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The `openTabs` message: `{"action":"openTabs","urls":[...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTabs {
    pub action: String,
    pub urls: Vec<String>,
}

impl OpenTabs {
    pub const ACTION: &'static str = "openTabs";

    #[must_use]
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            action: Self::ACTION.to_string(),
            urls,
        }
    }
}

/// Receiver of the `openTabs` message. Fire-and-forget: no reply is read.
pub trait TabSink {
    fn open_tabs(&mut self, message: &OpenTabs) -> Result<()>;
}

/// Writes each message as one JSON line.
#[derive(Debug)]
pub struct JsonLineSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TabSink for JsonLineSink<W> {
    fn open_tabs(&mut self, message: &OpenTabs) -> Result<()> {
        serde_json::to_writer(&mut self.writer, message)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub sent: Vec<OpenTabs>,
}

impl TabSink for RecordingSink {
    fn open_tabs(&mut self, message: &OpenTabs) -> Result<()> {
        self.sent.push(message.clone());
        Ok(())
    }
}
