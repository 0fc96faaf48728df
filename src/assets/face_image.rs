use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use crate::assets::decode::{DecodedImage, decode_image};

#[derive(Debug)]
enum Slot {
    Pending,
    Ready(Arc<DecodedImage>),
    Failed(String),
}

#[derive(Debug)]
struct Shared {
    slot: Mutex<Slot>,
    settled: Condvar,
}

/// Handle to an optional face illustration whose pixels may still be decoding.
///
/// The slot settles at most once. Face passes draw the image only when it is already ready and
/// never block on it; callers re-render once [`FaceImage::get`] starts returning pixels.
#[derive(Clone, Debug)]
pub struct FaceImage {
    shared: Arc<Shared>,
}

impl FaceImage {
    fn with_slot(slot: Slot) -> Self {
        Self {
            shared: Arc::new(Shared {
                slot: Mutex::new(slot),
                settled: Condvar::new(),
            }),
        }
    }

    /// Handle that is ready immediately.
    pub fn ready(image: DecodedImage) -> Self {
        Self::with_slot(Slot::Ready(Arc::new(image)))
    }

    /// Start decoding `bytes` on a background thread.
    pub fn decode_in_background(bytes: Vec<u8>) -> Self {
        let handle = Self::with_slot(Slot::Pending);
        let shared = Arc::clone(&handle.shared);
        std::thread::spawn(move || {
            let settled = match decode_image(&bytes) {
                Ok(img) => Slot::Ready(Arc::new(img)),
                Err(e) => {
                    tracing::warn!(error = %e, "face image decode failed");
                    Slot::Failed(e.to_string())
                }
            };
            settle(&shared, settled);
        });
        handle
    }

    /// Decoded pixels if the decode already finished successfully.
    pub fn get(&self) -> Option<Arc<DecodedImage>> {
        match &*lock(&self.shared) {
            Slot::Ready(img) => Some(Arc::clone(img)),
            Slot::Pending | Slot::Failed(_) => None,
        }
    }

    /// Whether the decode finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        !matches!(&*lock(&self.shared), Slot::Pending)
    }

    /// Decode failure message, if the decode failed.
    pub fn failure(&self) -> Option<String> {
        match &*lock(&self.shared) {
            Slot::Failed(msg) => Some(msg.clone()),
            Slot::Pending | Slot::Ready(_) => None,
        }
    }

    /// Block for at most `timeout` waiting for the decode to settle.
    pub fn wait(&self, timeout: Duration) -> Option<Arc<DecodedImage>> {
        let guard = lock(&self.shared);
        let guard = match self
            .shared
            .settled
            .wait_timeout_while(guard, timeout, |slot| matches!(slot, Slot::Pending))
        {
            Ok((guard, _)) => guard,
            Err(poisoned) => poisoned.into_inner().0,
        };
        match &*guard {
            Slot::Ready(img) => Some(Arc::clone(img)),
            Slot::Pending | Slot::Failed(_) => None,
        }
    }
}

fn lock(shared: &Shared) -> std::sync::MutexGuard<'_, Slot> {
    shared
        .slot
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn settle(shared: &Shared, value: Slot) {
    let mut slot = lock(shared);
    if matches!(*slot, Slot::Pending) {
        *slot = value;
    }
    shared.settled.notify_all();
}

#[cfg(test)]
#[path = "../../tests/unit/assets/face_image.rs"]
mod tests;
