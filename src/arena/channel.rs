#![cfg(feature = "std")]

use tokio::sync::mpsc;

use super::{ArenaError, TurnLink};
use crate::protocol::TurnMessage;

/// At most one hand-off is ever in flight per direction.
const SLOT_CAPACITY: usize = 1;

/// One end of an in-process link: a single-slot channel per direction.
pub struct ChannelLink {
    tx: mpsc::Sender<TurnMessage>,
    rx: mpsc::Receiver<TurnMessage>,
}

impl ChannelLink {
    /// Two connected ends; whatever one sends, the other receives.
    pub fn pair() -> (Self, Self) {
        let (tx_a, rx_b) = mpsc::channel(SLOT_CAPACITY);
        let (tx_b, rx_a) = mpsc::channel(SLOT_CAPACITY);
        (
            Self { tx: tx_a, rx: rx_a },
            Self { tx: tx_b, rx: rx_b },
        )
    }
}

#[async_trait::async_trait]
impl TurnLink for ChannelLink {
    async fn send(&mut self, msg: TurnMessage) -> anyhow::Result<()> {
        self.tx
            .send(msg)
            .await
            .map_err(|_| anyhow::anyhow!(ArenaError::PeerClosed))
    }

    async fn recv(&mut self) -> anyhow::Result<TurnMessage> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!(ArenaError::PeerClosed))
    }
}
