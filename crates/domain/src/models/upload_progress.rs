//! Progress of a chunked file upload.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadProgress {
    pub bytes_received: u64,
    pub total_bytes: u64,
}

impl UploadProgress {
    pub fn new(bytes_received: u64, total_bytes: u64) -> Self {
        Self {
            bytes_received,
            total_bytes,
        }
    }

    /// Completed share in whole percent, clamped to 0..=100.
    ///
    /// An upload of unknown size always reports 0.
    pub fn percentage(&self) -> u8 {
        if self.total_bytes == 0 {
            return 0;
        }
        let received = self.bytes_received.min(self.total_bytes) as u128;
        ((received * 100) / self.total_bytes as u128) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.total_bytes > 0 && self.bytes_received >= self.total_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(UploadProgress::new(0, 200).percentage(), 0);
        assert_eq!(UploadProgress::new(50, 200).percentage(), 25);
        assert_eq!(UploadProgress::new(199, 200).percentage(), 99);
        assert_eq!(UploadProgress::new(200, 200).percentage(), 100);
    }

    #[test]
    fn test_percentage_is_clamped() {
        assert_eq!(UploadProgress::new(500, 200).percentage(), 100);
        assert_eq!(UploadProgress::new(10, 0).percentage(), 0);
        assert_eq!(UploadProgress::new(u64::MAX, u64::MAX).percentage(), 100);
    }

    #[test]
    fn test_is_complete() {
        assert!(UploadProgress::new(200, 200).is_complete());
        assert!(!UploadProgress::new(199, 200).is_complete());
        assert!(!UploadProgress::new(0, 0).is_complete());
    }
}
