// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED strip control over the serial line protocol.

use std::time::Duration;

use tokio::time::sleep;

use crate::command::{Channel, LightCommand};
use crate::error::SerialError;
use crate::serial::{SerialChannel, SerialTransport};
use crate::types::RgbTriple;

/// Pause after the RED command before GREEN may be sent.
///
/// The receiving microcontroller needs this long to process a command;
/// anything sent sooner is dropped or corrupted. The pauses are firmware
/// flow control, not incidental delays.
const RED_SETTLE: Duration = Duration::from_millis(40);

/// Pause after the GREEN command before BLUE may be sent.
const GREEN_SETTLE: Duration = Duration::from_millis(50);

/// Speaks the LED strip's line protocol over one [`SerialChannel`].
///
/// The controller owns the channel for its lifetime; nothing else touches
/// the transport handle.
pub struct LightController<T: SerialTransport> {
    channel: SerialChannel<T>,
}

impl<T: SerialTransport> LightController<T> {
    /// Creates a controller over a closed channel on the given transport.
    pub fn new(transport: T) -> Self {
        Self {
            channel: SerialChannel::new(transport),
        }
    }

    /// Opens the serial connection with the device.
    ///
    /// # Errors
    ///
    /// Forwards the channel's open failure.
    pub async fn open(&mut self) -> Result<(), SerialError> {
        self.channel.open().await
    }

    /// Closes the serial connection with the device.
    ///
    /// # Errors
    ///
    /// Forwards the channel's close failure; the channel is closed either
    /// way.
    pub async fn close(&mut self) -> Result<(), SerialError> {
        self.channel.close().await
    }

    /// Returns whether the serial connection is currently open.
    pub fn is_open(&self) -> bool {
        self.channel.is_open()
    }

    /// Writes the literal command text to the device.
    ///
    /// No grammar validation is performed here; this is the raw escape
    /// hatch behind the `light:` namespace, whose caller is the trusted UI
    /// layer.
    ///
    /// # Errors
    ///
    /// Forwards the channel's write failure.
    pub async fn send_raw(&mut self, command: &str) -> Result<(), SerialError> {
        tracing::debug!(command = %command, "Writing light command");
        self.channel.write(command.as_bytes()).await
    }

    /// Encodes a typed command and writes it to the device.
    ///
    /// # Errors
    ///
    /// Forwards the channel's write failure.
    pub async fn send(&mut self, command: &LightCommand) -> Result<(), SerialError> {
        self.send_raw(&command.to_wire()).await
    }

    /// Updates the light bar colour to the given RGB triple.
    ///
    /// Issues three permanent `KEEP` commands in the order RED, GREEN,
    /// BLUE, pausing 40ms after RED and 50ms after GREEN to respect the
    /// device firmware's processing latency. Fails fast on the first write
    /// error; channels already sent stay applied, as the device is
    /// stateful and partial application is accepted.
    ///
    /// # Errors
    ///
    /// Forwards the first write failure.
    pub async fn set_colour(&mut self, colour: RgbTriple) -> Result<(), SerialError> {
        self.send(&LightCommand::keep(Channel::Red, colour.red()))
            .await?;
        sleep(RED_SETTLE).await;

        self.send(&LightCommand::keep(Channel::Green, colour.green()))
            .await?;
        sleep(GREEN_SETTLE).await;

        self.send(&LightCommand::keep(Channel::Blue, colour.blue()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use parking_lot::Mutex;
    use tokio::time::Instant;

    use super::*;
    use crate::serial::SerialHandle;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Write {
        text: String,
        at: Instant,
    }

    /// Transport fake whose handles record every write with a timestamp
    /// and can be told to fail the nth write.
    #[derive(Clone, Default)]
    struct RecordingTransport {
        writes: Arc<Mutex<Vec<Write>>>,
        fail_at: Option<usize>,
    }

    struct RecordingHandle {
        writes: Arc<Mutex<Vec<Write>>>,
        fail_at: Option<usize>,
        seen: usize,
    }

    impl SerialTransport for RecordingTransport {
        type Handle = RecordingHandle;

        async fn open(&self) -> Result<RecordingHandle, SerialError> {
            Ok(RecordingHandle {
                writes: Arc::clone(&self.writes),
                fail_at: self.fail_at,
                seen: 0,
            })
        }
    }

    impl SerialHandle for RecordingHandle {
        async fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
            let index = self.seen;
            self.seen += 1;
            if self.fail_at == Some(index) {
                return Err(io::Error::other("injected write failure"));
            }
            self.writes.lock().push(Write {
                text: String::from_utf8_lossy(bytes).into_owned(),
                at: Instant::now(),
            });
            Ok(())
        }

        async fn shutdown(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn set_colour_writes_three_keep_commands_in_order() {
        let transport = RecordingTransport::default();
        let mut controller = LightController::new(transport.clone());
        controller.open().await.unwrap();

        controller
            .set_colour(RgbTriple::new(10, 20, 30))
            .await
            .unwrap();

        let writes = transport.writes.lock();
        let texts: Vec<&str> = writes.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, ["KEEP:RED:0:10", "KEEP:GREEN:0:20", "KEEP:BLUE:0:30"]);
    }

    #[tokio::test(start_paused = true)]
    async fn set_colour_respects_settle_times() {
        let transport = RecordingTransport::default();
        let mut controller = LightController::new(transport.clone());
        controller.open().await.unwrap();

        controller
            .set_colour(RgbTriple::new(1, 2, 3))
            .await
            .unwrap();

        let writes = transport.writes.lock();
        assert_eq!(writes.len(), 3);
        assert!(writes[1].at - writes[0].at >= Duration::from_millis(40));
        assert!(writes[2].at - writes[1].at >= Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn set_colour_fails_fast_on_second_write() {
        let transport = RecordingTransport {
            fail_at: Some(1),
            ..RecordingTransport::default()
        };
        let mut controller = LightController::new(transport.clone());
        controller.open().await.unwrap();

        let err = controller
            .set_colour(RgbTriple::new(10, 20, 30))
            .await
            .unwrap_err();
        assert!(matches!(err, SerialError::Io { operation: "write", .. }));

        // Only RED was transmitted; BLUE must not follow a failed GREEN.
        let writes = transport.writes.lock();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].text, "KEEP:RED:0:10");
    }

    #[tokio::test]
    async fn send_raw_requires_open_channel() {
        let mut controller = LightController::new(RecordingTransport::default());
        let err = controller.send_raw("FLASH:1").await.unwrap_err();
        assert!(matches!(err, SerialError::NotOpen));
    }

    #[tokio::test]
    async fn send_encodes_typed_commands() {
        let transport = RecordingTransport::default();
        let mut controller = LightController::new(transport.clone());
        controller.open().await.unwrap();

        controller
            .send(&LightCommand::Close {
                channel: Channel::Blue,
            })
            .await
            .unwrap();

        assert_eq!(transport.writes.lock()[0].text, "CLOSE:BLUE");
    }
}
