//! Image backend trait and shared types.
//!
//! The manifest only ever needs one thing from an image: its pixel size. The
//! [`ImageBackend`] trait captures that single operation over an in-memory
//! buffer, so the extractor can be tested against a mock without encoding
//! real images.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Unrecognized image format")]
    UnknownFormat,
    #[error("Failed to read dimensions: {0}")]
    DecodeFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Placeholder used for entries that are not images.
    pub const ZERO: Dimensions = Dimensions {
        width: 0,
        height: 0,
    };
}

/// Trait for image header decoders.
///
/// `Sync` so a single backend can be shared across rayon workers.
pub trait ImageBackend: Sync {
    /// Get image dimensions from the full file contents.
    fn identify(&self, data: &[u8]) -> Result<Dimensions, BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock backend that records identify calls and answers with a canned result.
    /// Uses Mutex (not RefCell) so it is Sync and works with rayon's par_iter.
    pub struct MockBackend {
        result: Option<Dimensions>,
        pub calls: Mutex<Vec<usize>>,
    }

    impl MockBackend {
        /// Every identify call succeeds with `dims`.
        pub fn with_dimensions(dims: Dimensions) -> Self {
            Self {
                result: Some(dims),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Every identify call fails as if the header were corrupt.
        pub fn failing() -> Self {
            Self {
                result: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Byte lengths of the buffers passed to identify, in call order.
        pub fn call_lengths(&self) -> Vec<usize> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, data: &[u8]) -> Result<Dimensions, BackendError> {
            self.calls.lock().unwrap().push(data.len());
            self.result
                .ok_or_else(|| BackendError::DecodeFailed("mock decode failure".to_string()))
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(Dimensions {
            width: 800,
            height: 600,
        });

        let result = backend.identify(b"0123456789").unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);
        assert_eq!(backend.call_lengths(), vec![10]);
    }

    #[test]
    fn failing_mock_still_records() {
        let backend = MockBackend::failing();

        assert!(backend.identify(b"abc").is_err());
        assert_eq!(backend.call_lengths(), vec![3]);
    }

    #[test]
    fn zero_dimensions_are_default() {
        assert_eq!(Dimensions::ZERO, Dimensions::default());
    }
}
