// src/platform/mod.rs

//! OS notification source.
//!
//! On macOS the screen lock/unlock notifications come from the distributed
//! notification center and are delivered on the main thread's run loop.
//! Each delivery is forwarded into the runtime's event channel.

#[cfg(target_os = "macos")]
mod macos;

use tokio::sync::mpsc;
use tracing::warn;

use crate::engine::RuntimeEvent;
use crate::errors::Result;
use crate::types::ScreenEvent;

/// Subscribe to screen lock/unlock notifications and park the calling
/// thread in the platform event loop.
///
/// Must be called from the main thread and outside of any Tokio runtime
/// context. Only returns if the event loop stops or the platform is not
/// supported.
pub fn run_event_loop(tx: mpsc::Sender<RuntimeEvent>) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        macos::run_event_loop(tx)
    }

    #[cfg(not(target_os = "macos"))]
    {
        drop(tx);
        Err(crate::errors::ScreenwatchError::UnsupportedPlatform(
            std::env::consts::OS,
        ))
    }
}

/// Forward one notification into the runtime, blocking while the channel
/// is full. Returns `false` once the runtime has gone away.
pub fn forward_event(tx: &mpsc::Sender<RuntimeEvent>, event: ScreenEvent) -> bool {
    match tx.blocking_send(RuntimeEvent::Screen(event)) {
        Ok(()) => true,
        Err(_) => {
            warn!(%event, "dispatcher is gone; dropping notification");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_events_in_delivery_order() {
        let (tx, mut rx) = mpsc::channel(4);

        assert!(forward_event(&tx, ScreenEvent::Locked));
        assert!(forward_event(&tx, ScreenEvent::Unlocked));
        assert!(forward_event(&tx, ScreenEvent::Locked));

        assert_eq!(rx.try_recv().ok(), Some(RuntimeEvent::Screen(ScreenEvent::Locked)));
        assert_eq!(rx.try_recv().ok(), Some(RuntimeEvent::Screen(ScreenEvent::Unlocked)));
        assert_eq!(rx.try_recv().ok(), Some(RuntimeEvent::Screen(ScreenEvent::Locked)));
    }

    #[test]
    fn closed_channel_is_reported() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        assert!(!forward_event(&tx, ScreenEvent::Unlocked));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn other_platforms_are_rejected() {
        let (tx, _rx) = mpsc::channel(1);
        match run_event_loop(tx) {
            Err(crate::errors::ScreenwatchError::UnsupportedPlatform(os)) => {
                assert_eq!(os, std::env::consts::OS)
            }
            other => panic!("expected UnsupportedPlatform, got {other:?}"),
        }
    }
}
