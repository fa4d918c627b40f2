mod arrival_delays;
mod capture;
mod delay_data;
mod errors;
mod persistence;
mod sequence_delays;

pub use arrival_delays::{arrival_delays, ArrivalDelays};
pub use capture::{read_capture, DecodedPacket};
pub use delay_data::DelaySeries;
pub use errors::DelayExtractionError;
pub use sequence_delays::{sequence_delays, SequenceConfig, SequenceDelays, SEQ_FIELD_LEN};

use std::path::PathBuf;

/**
 * Per-packet inter-arrival delays of a pcap file, in capture order
 *
 * \param capture_path Path to pcap capture file
 */
pub fn arrival_delays_from_capture(
    capture_path: PathBuf,
) -> Result<DelaySeries, DelayExtractionError> {
    let packets = read_capture(capture_path)?;

    Ok(arrival_delays(&packets).collect())
}

/**
 * Inter-arrival delays of a pcap file, walked in sequence-number order
 *
 * Every payload must carry the 4-byte sequence field at the configured
 * offset; a capture mixing in shorter records fails as a whole.
 *
 * \param capture_path Path to pcap capture file
 * \param config       Extraction parameters (payload offset)
 */
pub fn sequence_delays_from_capture(
    capture_path: PathBuf,
    config: SequenceConfig,
) -> Result<DelaySeries, DelayExtractionError> {
    let packets = read_capture(capture_path)?;

    Ok(sequence_delays(&packets, config)?.collect())
}
