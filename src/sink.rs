//! # Named Output Sinks
//!
//! The tide page is a set of named regions (badge, labels, chart canvas,
//! table body, ad container). Core code derives plain values and hands them
//! to an [`OutputSink`] keyed by [`Region`];
//! the sink decides what "writing to the page" means. The terminal sink
//! prints labeled sections, the in-memory sink records writes for tests.

use std::collections::HashMap;

/// The named regions of the tide page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    StatusBadge,
    Direction,
    Height,
    NextEvent,
    SafetyMessage,
    Chart,
    OutlookTable,
    AdContainer,
}

impl Region {
    /// Human-readable section title for terminal output.
    pub fn title(self) -> &'static str {
        match self {
            Region::StatusBadge => "Status",
            Region::Direction => "Tide",
            Region::Height => "Current height",
            Region::NextEvent => "Next event",
            Region::SafetyMessage => "Safety",
            Region::Chart => "Next hours",
            Region::OutlookTable => "3-day outlook",
            Region::AdContainer => "Sponsored",
        }
    }
}

/// Output contract for page rendering. One `write` per region per page view;
/// regions with nothing to show are simply never written.
pub trait OutputSink {
    fn write(&mut self, region: Region, content: &str);
}

/// Sink that prints each region as a labeled terminal section.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl TerminalSink {
    pub fn new() -> Self {
        TerminalSink
    }
}

impl OutputSink for TerminalSink {
    fn write(&mut self, region: Region, content: &str) {
        if content.contains('\n') {
            println!("── {} ──", region.title());
            println!("{content}");
        } else {
            println!("{}: {}", region.title(), content);
        }
    }
}

/// Sink that records writes, for asserting on rendered output in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    writes: HashMap<Region, String>,
    order: Vec<Region>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content last written to a region, if any.
    pub fn get(&self, region: Region) -> Option<&str> {
        self.writes.get(&region).map(String::as_str)
    }

    /// Regions in first-write order.
    pub fn regions(&self) -> &[Region] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, region: Region, content: &str) {
        if !self.writes.contains_key(&region) {
            self.order.push(region);
        }
        self.writes.insert(region, content.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_writes_in_order() {
        let mut sink = MemorySink::new();
        sink.write(Region::StatusBadge, "SAFE");
        sink.write(Region::Height, "0.5m");
        sink.write(Region::StatusBadge, "DANGER");

        assert_eq!(sink.get(Region::StatusBadge), Some("DANGER"));
        assert_eq!(sink.get(Region::Height), Some("0.5m"));
        assert_eq!(sink.get(Region::NextEvent), None);
        assert_eq!(sink.regions(), &[Region::StatusBadge, Region::Height]);
        assert_eq!(sink.len(), 2);
    }
}
