//! Transcription relay.
//!
//! Forwards each inbound [`AudioChunk`] on a live connection to the
//! transcription model and emits the transcript on the same connection.
//! A failed chunk is logged and dropped; the connection survives and
//! later chunks are unaffected.

use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::{Stream, StreamExt, future};
use tokio::sync::mpsc;

use crate::config::{DeliveryOrder, RelayConfig};
use crate::traits::{TranscriptionModel, TranscriptionRequest};
use crate::types::AudioChunk;

/// Per-connection relay between an audio stream and a transcript sink.
///
/// Holds no cross-chunk state; one instance can serve many connections
/// concurrently.
#[derive(Debug, Clone)]
pub struct TranscriptionRelay<M> {
    model: M,
    config: RelayConfig,
}

impl<M: TranscriptionModel> TranscriptionRelay<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            config: RelayConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RelayConfig) -> Self {
        self.config = config;
        self
    }

    /// Transcribe one chunk.
    ///
    /// Any model error is contained here: logged, swallowed, `None`
    /// returned. Nothing propagates to the connection peer.
    pub async fn handle_chunk(&self, chunk: AudioChunk) -> Option<String> {
        let size = chunk.len();
        let request = TranscriptionRequest {
            audio: chunk,
            language: self.config.language_hint.clone(),
        };
        match self.model.transcribe(request).await {
            Ok(text) => {
                tracing::debug!(
                    target: "caseforge::relay",
                    bytes = size,
                    chars = text.len(),
                    "chunk transcribed"
                );
                Some(text)
            }
            Err(error) => {
                tracing::warn!(
                    target: "caseforge::relay",
                    bytes = size,
                    error = %error,
                    "transcription failed, dropping chunk"
                );
                None
            }
        }
    }

    /// Drive one connection: consume chunks from `inbound`, deliver
    /// transcripts to `outbound`.
    ///
    /// Returns when the inbound stream ends or the outbound receiver is
    /// dropped (under `Completion` order, after in-flight chunks
    /// finish). `Arrival` order awaits each chunk before the next;
    /// `Completion` dispatches up to `max_in_flight` chunks at once, so
    /// transcripts may arrive out of order.
    pub async fn run<S>(&self, inbound: S, outbound: mpsc::Sender<String>)
    where
        S: Stream<Item = AudioChunk>,
    {
        match self.config.delivery_order {
            DeliveryOrder::Arrival => {
                let mut inbound = std::pin::pin!(inbound);
                while let Some(chunk) = inbound.next().await {
                    if let Some(text) = self.handle_chunk(chunk).await
                        && outbound.send(text).await.is_err()
                    {
                        // Peer gone; stop consuming.
                        break;
                    }
                }
            }
            DeliveryOrder::Completion => {
                let peer_open = AtomicBool::new(true);
                inbound
                    .take_while(|_| future::ready(peer_open.load(Ordering::Relaxed)))
                    .for_each_concurrent(self.config.max_in_flight, |chunk| {
                        let outbound = outbound.clone();
                        let peer_open = &peer_open;
                        async move {
                            if let Some(text) = self.handle_chunk(chunk).await
                                && outbound.send(text).await.is_err()
                            {
                                peer_open.store(false, Ordering::Relaxed);
                            }
                        }
                    })
                    .await;
            }
        }
        tracing::debug!(target: "caseforge::relay", "connection stream ended");
    }
}
