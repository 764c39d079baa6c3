/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines progress reporting messages, sinks, and helper functions for network training.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Progress reporting primitives for network training.

use std::sync::{Arc, mpsc};
use std::thread;
use std::fmt::Debug;

/// Progress events emitted while fitting network weights.
#[derive(Debug, Clone)]
pub enum ProgressMsg {
    /// Event indicating a completed pass of the online fitter.
    EpochCompleted { epoch: usize, error: f64, delta: f64 },

    /// Event indicating the online fitter has stopped.
    TrainingFinished { epochs: usize, error: f64, converged: bool },

    /// Event indicating the outcome of a least-squares fit.
    LeastSquaresSolved { rank: usize, num_weights: usize, residual: Option<f64> },

    /// Arbitrary informational message.
    Message { message: String },
}

/// Sink that consumes progress messages.
pub trait ProgressSink: Send + Sync + Debug {
    fn emit(&self, msg: ProgressMsg);
}

/// Progress sink that forwards messages over a channel.
#[derive(Debug)]
pub struct ClosureSink {
    tx: mpsc::SyncSender<ProgressMsg>,
}

impl ProgressSink for ClosureSink {
    #[inline]
    fn emit(&self, msg: ProgressMsg) {
        let _ = self.tx.try_send(msg);
    }
}

/// Spawns a listener thread that runs a handler closure for each progress message.
///
/// Messages are dropped rather than blocking the fitter when the buffer is full.
/// The listener exits once every clone of the returned sink has been dropped.
pub fn closure_sink<F>(
    buffer: usize,
    mut handler: F,
) -> (Arc<dyn ProgressSink>, thread::JoinHandle<()>)
where
    F: FnMut(ProgressMsg) + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel::<ProgressMsg>(buffer.max(1));
    let sink: Arc<dyn ProgressSink> = Arc::new(ClosureSink { tx });

    let handle = thread::spawn(move || {
        while let Ok(msg) = rx.recv() {
            handler(msg);
        }
    });

    (sink, handle)
}

/// Emits `msg` if a sink is attached.
#[inline]
pub(crate) fn emit(sink: &Option<Arc<dyn ProgressSink>>, msg: ProgressMsg) {
    if let Some(sink) = sink {
        sink.emit(msg);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use equator::assert;
    use std::sync::Mutex;

    /// Sink that keeps every message in memory.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        pub messages: Mutex<Vec<ProgressMsg>>,
    }

    impl ProgressSink for RecordingSink {
        fn emit(&self, msg: ProgressMsg) {
            self.messages.lock().unwrap().push(msg);
        }
    }

    #[test]
    fn closure_sink_delivers_messages_in_order() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();

        let (sink, handle) = closure_sink(16, move |msg| {
            if let ProgressMsg::EpochCompleted { epoch, .. } = msg {
                received_clone.lock().unwrap().push(epoch);
            }
        });

        for epoch in 2..6 {
            sink.emit(ProgressMsg::EpochCompleted { epoch, error: 0.1, delta: 0.01 });
        }
        drop(sink);
        handle.join().unwrap();

        assert!(*received.lock().unwrap() == vec![2, 3, 4, 5]);
    }

    #[test]
    fn emit_without_sink_is_a_no_op() {
        emit(&None, ProgressMsg::Message { message: "ignored".into() });
    }
}
