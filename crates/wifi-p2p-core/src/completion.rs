//! Callback-to-future conversion for one-shot native completions.
//!
//! [`channel`] hands out a [`Completion`] for the native side and a [`Pending`]
//! future for the caller. The completion is cloneable and may be invoked any
//! number of times, but only the first invocation settles the future; later
//! ones are logged and ignored. If every clone of the completion is dropped
//! without firing, the future settles with [`BridgeError::CompletionDropped`].

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::errors::{BridgeError, BridgeResult};

/// Completion for native actions that report `None` on success or a reason code.
pub type ReasonCallback = Completion<Option<i32>>;

/// Native-side half of a pending operation.
pub struct Completion<T> {
    slot: Arc<Mutex<Option<oneshot::Sender<T>>>>,
    operation: &'static str,
}

impl<T> Clone for Completion<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            operation: self.operation,
        }
    }
}

impl<T> Completion<T> {
    /// Settle the pending operation. Returns false if it was already settled.
    pub fn complete(&self, value: T) -> bool {
        let sender = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match sender {
            Some(sender) => {
                if sender.send(value).is_err() {
                    debug!(
                        operation = self.operation,
                        "Completion fired after the caller stopped waiting"
                    );
                }
                true
            }
            None => {
                warn!(
                    operation = self.operation,
                    "Duplicate native completion ignored"
                );
                false
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl<T> std::fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("operation", &self.operation)
            .field("settled", &self.is_settled())
            .finish()
    }
}

/// Caller-side half of a pending operation.
#[must_use = "a pending operation does nothing unless awaited"]
pub struct Pending<T> {
    receiver: oneshot::Receiver<T>,
    operation: &'static str,
}

impl<T> Pending<T> {
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl<T> Future for Pending<T> {
    type Output = BridgeResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        Pin::new(&mut this.receiver).poll(cx).map(|result| {
            result.map_err(|_| {
                warn!(
                    operation = this.operation,
                    "Native layer dropped the completion without invoking it"
                );
                BridgeError::CompletionDropped {
                    operation: this.operation,
                }
            })
        })
    }
}

/// Create a linked completion/pending pair for `operation`.
pub fn channel<T>(operation: &'static str) -> (Completion<T>, Pending<T>) {
    let (sender, receiver) = oneshot::channel();
    (
        Completion {
            slot: Arc::new(Mutex::new(Some(sender))),
            operation,
        },
        Pending {
            receiver,
            operation,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_completion_settles() {
        let (completion, pending) = channel::<Option<i32>>("discover_peers");
        assert!(completion.complete(None));
        assert_eq!(pending.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_second_completion_is_ignored() {
        let (completion, pending) = channel::<Option<i32>>("create_group");
        assert!(completion.complete(Some(2)));
        assert!(!completion.complete(None));
        assert_eq!(pending.await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_clones_share_settlement() {
        let (completion, pending) = channel::<String>("receive_file");
        let other = completion.clone();
        assert!(other.complete("/sdcard/a.jpg".to_string()));
        assert!(completion.is_settled());
        assert!(!completion.complete("/sdcard/b.jpg".to_string()));
        assert_eq!(pending.await.unwrap(), "/sdcard/a.jpg");
    }

    #[tokio::test]
    async fn test_dropped_completion_settles_with_error() {
        let (completion, pending) = channel::<Option<i32>>("remove_group");
        drop(completion);
        let err = pending.await.unwrap_err();
        assert!(matches!(
            err,
            BridgeError::CompletionDropped {
                operation: "remove_group"
            }
        ));
    }

    #[test]
    fn test_complete_after_caller_gave_up() {
        let (completion, pending) = channel::<Option<i32>>("cancel_connect");
        drop(pending);
        // Still counts as the one settlement; nothing panics.
        assert!(completion.complete(None));
        assert!(!completion.complete(None));
    }
}
