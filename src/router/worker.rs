// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel-based bridge worker.
//!
//! A `lightset` dispatch blocks for at least 90ms of mandated settle time,
//! which is a latency hazard when the caller is a UI message handler. The
//! worker moves the router onto its own task and serializes all dispatches
//! (and therefore all serial writes) through one `mpsc` channel, preserving
//! the ordering and delay contract while decoupling caller latency from
//! device timing.

use tokio::sync::{mpsc, oneshot};

use crate::backend::{BrightnessBackend, KioskBackend, NetworkBackend, VolumeBackend};
use crate::error::Error;
use crate::response::Response;
use crate::router::CommandRouter;
use crate::serial::SerialTransport;

/// Commands queued ahead of the worker before senders start waiting.
const COMMAND_QUEUE_DEPTH: usize = 32;

struct Request {
    command: String,
    reply: oneshot::Sender<Option<Response>>,
}

/// Cloneable handle to a spawned bridge worker.
///
/// Dispatching through the handle behaves exactly like
/// [`CommandRouter::dispatch`], except that commands from all handles are
/// serialized through the worker task.
#[derive(Clone)]
pub struct BridgeHandle {
    requests: mpsc::Sender<Request>,
}

impl BridgeHandle {
    /// Sends one command to the worker and waits for its response.
    ///
    /// Returns `Ok(None)` when the command was silently dropped (empty
    /// input), mirroring the router.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkerClosed`] when the worker task has stopped.
    pub async fn dispatch(&self, command: impl Into<String>) -> Result<Option<Response>, Error> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(Request {
                command: command.into(),
                reply,
            })
            .await
            .map_err(|_| Error::WorkerClosed)?;

        response.await.map_err(|_| Error::WorkerClosed)
    }
}

/// Moves the router onto a dedicated task and returns a handle to it.
///
/// The worker runs until every handle is dropped.
pub fn spawn_bridge<B, V, K, N, T>(mut router: CommandRouter<B, V, K, N, T>) -> BridgeHandle
where
    B: BrightnessBackend + 'static,
    V: VolumeBackend + 'static,
    K: KioskBackend + 'static,
    N: NetworkBackend + 'static,
    T: SerialTransport + Send + 'static,
{
    let (requests, mut queue) = mpsc::channel::<Request>(COMMAND_QUEUE_DEPTH);

    tokio::spawn(async move {
        while let Some(request) = queue.recv().await {
            let response = router.dispatch(&request.command).await;
            if request.reply.send(response).is_err() {
                tracing::debug!(command = %request.command, "Caller went away before the response");
            }
        }
        tracing::debug!("All bridge handles dropped; stopping worker");
    });

    BridgeHandle { requests }
}
