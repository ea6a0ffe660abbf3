//! Per-session cache of the last detected hand.
//!
//! The vision model is the expensive, nondeterministic step, so one session
//! remembers the hand detected for the last submitted image and only
//! re-invokes the detector when the image actually changes. Identity is a
//! content fingerprint of the image bytes, so reloading the same file (or an
//! identical copy) is still a cache hit.

use xxhash_rust::xxh3::xxh3_64;

use crate::cards::Hand;
use crate::detect::DetectError;

/// One user session: the fingerprint of the last submitted image and the
/// hand detected for it. Single reader, single writer, no locking needed.
#[derive(Debug, Default)]
pub struct Session {
    fingerprint: Option<u64>,
    hand: Option<Hand>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the hand for `image_bytes`, invoking `detect` only when the
    /// fingerprint differs from the cached submission.
    ///
    /// A failed detection clears the cache and never stores partial data, so
    /// the next call with the same bytes retries the detector.
    pub fn hand_for(
        &mut self,
        image_bytes: &[u8],
        detect: impl FnOnce() -> Result<Hand, DetectError>,
    ) -> Result<&Hand, DetectError> {
        let fingerprint = xxh3_64(image_bytes);

        if self.fingerprint != Some(fingerprint) || self.hand.is_none() {
            // New image: drop the stale hand before detecting, so a failure
            // leaves no cache entry behind.
            self.fingerprint = None;
            self.hand = None;

            let hand = detect()?;
            self.fingerprint = Some(fingerprint);
            self.hand = Some(hand);
        }

        Ok(self.hand.as_ref().expect("hand cached just above"))
    }

    /// The cached hand, if any. Used by renders that must not trigger a
    /// detection.
    pub fn cached_hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Forgets the cached hand, forcing the next submission to re-detect.
    pub fn clear(&mut self) {
        self.fingerprint = None;
        self.hand = None;
    }
}
