//! Change-notification channel between a domain block and its layout.
//!
//! A one-way, single-slot observer contract: the domain side notifies
//! synchronously, exactly once per logical change, before the mutating call
//! returns. The layout side only acknowledges receipt for now; reacting to
//! changes (dirty marking, forwarding view events) is a reserved extension
//! point.
//!
//! The channel is created by the layout and handed to the block explicitly
//! at construction time; there is no ambient "current observer" state.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use log::trace;

/// Create a connected sender/receiver pair.
///
/// The sender half is installed on the domain block via
/// [`BlockModel::subscribe_layout`](crate::BlockModel::subscribe_layout);
/// the receiver half stays with the block's layout. The sender holds only a
/// weak reference, so dropping the receiving layout implicitly disconnects
/// the subscription.
pub fn change_channel() -> (ChangeSender, ChangeReceiver) {
    let pending = Rc::new(Cell::new(0));
    (
        ChangeSender {
            pending: Rc::downgrade(&pending),
        },
        ChangeReceiver { pending },
    )
}

/// Domain-side half of the channel.
#[derive(Debug)]
pub struct ChangeSender {
    pending: Weak<Cell<u64>>,
}

impl ChangeSender {
    /// Notify the subscribed layout that the block changed.
    ///
    /// Non-reentrant by construction: this records the change and returns,
    /// it never calls back into the layout tree.
    pub fn block_did_change(&self) {
        if let Some(pending) = self.pending.upgrade() {
            pending.set(pending.get() + 1);
            trace!("block change recorded ({} pending)", pending.get());
        }
    }

    /// Whether the receiving layout is still alive.
    pub fn is_connected(&self) -> bool {
        self.pending.strong_count() > 0
    }
}

/// Layout-side half of the channel.
#[derive(Debug)]
pub struct ChangeReceiver {
    pending: Rc<Cell<u64>>,
}

impl ChangeReceiver {
    /// Whether unacknowledged change notifications are pending.
    pub fn has_pending(&self) -> bool {
        self.pending.get() > 0
    }

    /// Acknowledge all pending notifications, returning how many had
    /// arrived since the last call.
    pub fn take_pending(&self) -> u64 {
        self.pending.replace(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_notification_is_counted_once() {
        let (sender, receiver) = change_channel();
        assert!(!receiver.has_pending());

        sender.block_did_change();
        sender.block_did_change();

        assert!(receiver.has_pending());
        assert_eq!(receiver.take_pending(), 2);
        assert!(!receiver.has_pending());
        assert_eq!(receiver.take_pending(), 0);
    }

    #[test]
    fn test_dropping_receiver_disconnects_sender() {
        let (sender, receiver) = change_channel();
        assert!(sender.is_connected());

        drop(receiver);
        assert!(!sender.is_connected());

        // Notifying a disconnected channel is a no-op, not an error
        sender.block_did_change();
    }
}
