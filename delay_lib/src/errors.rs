/** ------------------------------------------------------------
 * Error types raised by this lib.
 * ------------------------------------------------------------- */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelayExtractionError {
    #[error("Payload of insufficient byte number: {available} (required: {required})")]
    MalformedPayload { required: usize, available: usize },
    #[error("Failed to decode capture: {0}")]
    Capture(#[from] pcap::Error),
}
