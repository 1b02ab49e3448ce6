//! Dispatcher — runs sends against a single injected output sink.

use std::io::Write;

use tracing::info;

use crate::channel::Channel;
use crate::error::Result;
use crate::message::Message;

/// One channel/message pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub channel: Channel,
    pub message: Message,
}

/// An ordered list of dispatches, sent in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scenario {
    dispatches: Vec<Dispatch>,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, channel: Channel, message: Message) {
        self.dispatches.push(Dispatch { channel, message });
    }

    /// Builder-style [`Scenario::push`].
    pub fn with(mut self, channel: Channel, message: Message) -> Self {
        self.push(channel, message);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dispatch> {
        self.dispatches.iter()
    }

    pub fn len(&self) -> usize {
        self.dispatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dispatches.is_empty()
    }
}

impl FromIterator<Dispatch> for Scenario {
    fn from_iter<I: IntoIterator<Item = Dispatch>>(iter: I) -> Self {
        Self {
            dispatches: iter.into_iter().collect(),
        }
    }
}

/// Owns the output sink and counts what went through it.
pub struct Dispatcher<W: Write> {
    out: W,
    dispatched: usize,
}

impl<W: Write> Dispatcher<W> {
    pub fn new(out: W) -> Self {
        Self { out, dispatched: 0 }
    }

    /// Send one message through one channel.
    pub fn send(&mut self, channel: &Channel, message: &Message) -> Result<()> {
        channel.send(message, &mut self.out)?;
        self.dispatched += 1;
        Ok(())
    }

    /// Send every dispatch of a scenario in order, then flush the sink.
    pub fn run(&mut self, scenario: &Scenario) -> Result<usize> {
        info!("▶ Running scenario with {} dispatches", scenario.len());
        for dispatch in scenario.iter() {
            self.send(&dispatch.channel, &dispatch.message)?;
        }
        self.out.flush()?;
        info!("✅ Scenario finished ({} sent so far)", self.dispatched);
        Ok(scenario.len())
    }

    /// Number of messages sent through this dispatcher.
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
