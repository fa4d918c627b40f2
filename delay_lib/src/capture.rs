/** ------------------------------------------------------------
 * Capture decoding (pcap file -> timestamped payload records)
 * ------------------------------------------------------------- */
use crate::errors::DelayExtractionError;
use pcap::Capture;
use std::path::PathBuf;

/**
 * A single packet decoded from a capture
 *
 * The payload holds the captured bytes exactly as the capture hands them
 * over; no link-layer or transport framing is stripped here.
 */
#[derive(Debug, Clone)]
pub struct DecodedPacket {
    pub timestamp: f64,
    pub payload: Vec<u8>,
}

/**
 * Decode a pcap file into timestamped payload records
 *
 * The whole capture is decoded into memory before any analysis runs.
 * End of file ends the loop; every other capture error is propagated.
 *
 * \param capture_path Path to pcap capture file
 */
pub fn read_capture(capture_path: PathBuf) -> Result<Vec<DecodedPacket>, DelayExtractionError> {
    let mut capture = Capture::from_file(capture_path)?;
    let mut packets = Vec::new();

    loop {
        match capture.next_packet() {
            Ok(packet) => {
                // Extract the timestamp from the pcap packet
                let timestamp = packet.header.ts;
                let timestamp_secs = timestamp.tv_sec as f64 + timestamp.tv_usec as f64 * 1e-6;

                packets.push(DecodedPacket {
                    timestamp: timestamp_secs,
                    payload: packet.data.to_vec(),
                });
            }
            Err(pcap::Error::NoMorePackets) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(packets)
}
