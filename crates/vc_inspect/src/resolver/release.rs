use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::AttachError;

#[derive(Debug, Default)]
struct SignalState {
    epoch: AtomicUsize,
    attached: AtomicBool,
}

/// The host's reload hook.
///
/// The host keeps one signal per session and fires it when every cached
/// handler must be dropped. An attached [`TypeEditor`](crate::TypeEditor)
/// notices at the start of its next operation and releases its cache.
///
/// The signal may be fired from any thread. Dropping the editor frees the
/// signal for another one.
///
/// # Examples
///
/// ```
/// use vc_inspect::{AttachError, ReleaseSignal, TypeEditor};
/// use vc_reflect::registry::TypeRegistry;
///
/// let signal = ReleaseSignal::new();
/// let mut editor = TypeEditor::new(TypeRegistry::new());
/// editor.attach(&signal).unwrap();
///
/// let mut other = TypeEditor::new(TypeRegistry::new());
/// assert_eq!(other.attach(&signal), Err(AttachError::AlreadyAttached));
///
/// signal.request_release();
/// editor.poll_release();
/// assert_eq!(editor.generation(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReleaseSignal {
    state: Arc<SignalState>,
}

impl ReleaseSignal {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the attached editor to release its cache.
    #[inline]
    pub fn request_release(&self) {
        self.state.epoch.fetch_add(1, Ordering::Release);
    }

    /// Number of releases requested so far.
    #[inline]
    pub fn epoch(&self) -> usize {
        self.state.epoch.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.state.attached.load(Ordering::Acquire)
    }

    pub(crate) fn subscribe(&self) -> Result<ReleaseListener, AttachError> {
        if self.state.attached.swap(true, Ordering::AcqRel) {
            return Err(AttachError::AlreadyAttached);
        }
        Ok(ReleaseListener {
            seen: self.epoch(),
            signal: self.clone(),
        })
    }
}

/// The editor's side of a [`ReleaseSignal`].
#[derive(Debug)]
pub(crate) struct ReleaseListener {
    signal: ReleaseSignal,
    seen: usize,
}

impl ReleaseListener {
    /// Returns `true` once for every batch of requests since the last poll.
    pub(crate) fn poll(&mut self) -> bool {
        let epoch = self.signal.epoch();
        if epoch == self.seen {
            return false;
        }
        self.seen = epoch;
        true
    }
}

impl Drop for ReleaseListener {
    fn drop(&mut self) {
        self.signal.state.attached.store(false, Ordering::Release);
    }
}
