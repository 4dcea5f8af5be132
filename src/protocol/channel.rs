use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::graph::Weight;
use crate::protocol::message::Message;

/// Where a vertex process puts the messages it sends
pub trait Outbox<W> {
    /// Queues `message` for vertex `to`
    fn send(&mut self, to: usize, message: Message<W>);
}

/// Sending half of the link into one vertex process.
///
/// Unbounded, so a sender never waits on a receiver and cycles in the graph
/// cannot deadlock. Messages from one sender arrive in the order they were
/// sent.
#[derive(Debug, Clone)]
pub struct Channel<W> {
    to: usize,
    sender: UnboundedSender<Message<W>>,
}

/// Receiving half: the single inbox of one vertex process
#[derive(Debug)]
pub struct Inbox<W> {
    vertex: usize,
    receiver: UnboundedReceiver<Message<W>>,
}

/// Creates the link into `vertex`
pub fn channel<W>(vertex: usize) -> (Channel<W>, Inbox<W>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Channel { to: vertex, sender }, Inbox { vertex, receiver })
}

impl<W: Weight> Channel<W> {
    /// Delivers `message`, returning false if the receiver has already
    /// terminated and dropped its inbox.
    pub fn send(&self, message: Message<W>) -> bool {
        match self.sender.send(message) {
            Ok(()) => true,
            Err(mpsc::error::SendError(message)) => {
                log::trace!("vertex {} already terminated, dropping {:?}", self.to, message);
                false
            }
        }
    }
}

impl<W> Inbox<W> {
    pub fn vertex(&self) -> usize {
        self.vertex
    }

    /// Waits for the next message; `None` once every sender is gone
    pub async fn recv(&mut self) -> Option<Message<W>> {
        self.receiver.recv().await
    }
}

/// A process's view of the network: one channel per participating vertex
#[derive(Debug, Clone)]
pub struct Links<W> {
    channels: Arc<Vec<Option<Channel<W>>>>,
}

impl<W> Links<W> {
    /// `channels[v]` is `None` for vertices that take no part in the run
    pub fn new(channels: Vec<Option<Channel<W>>>) -> Self {
        Links {
            channels: Arc::new(channels),
        }
    }
}

impl<W: Weight> Outbox<W> for Links<W> {
    fn send(&mut self, to: usize, message: Message<W>) {
        match self.channels.get(to).and_then(Option::as_ref) {
            Some(channel) => {
                channel.send(message);
            }
            None => log::warn!("no link to vertex {}, dropping {:?}", to, message),
        }
    }
}

/// Outbox that keeps every message, for driving a process by hand
#[derive(Debug, Default)]
pub struct RecordingOutbox<W> {
    pub sent: Vec<(usize, Message<W>)>,
}

impl<W> RecordingOutbox<W> {
    pub fn new() -> Self {
        RecordingOutbox { sent: Vec::new() }
    }

    /// Drains everything sent so far
    pub fn take(&mut self) -> Vec<(usize, Message<W>)> {
        std::mem::take(&mut self.sent)
    }
}

impl<W> Outbox<W> for RecordingOutbox<W> {
    fn send(&mut self, to: usize, message: Message<W>) {
        self.sent.push((to, message));
    }
}
