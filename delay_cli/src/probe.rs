use delay_lib::SEQ_FIELD_LEN;
use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::thread;
use std::time::Duration;

/**
 * Send sequence-numbered probe datagrams
 *
 * Each datagram carries its sequence number as a big-endian 32-bit field
 * in the first four payload bytes, zero-filled up to payload_size. That
 * is the layout the sequence analysis reads back at offset 0 once the
 * traffic has been captured. Returns the number of datagrams sent.
 */
pub fn send_probes(
    target: SocketAddr,
    count: u32,
    interval_ms: u64,
    payload_size: usize,
) -> io::Result<u32> {
    let bind_addr = if target.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
    let socket = UdpSocket::bind(bind_addr)?;

    let payload_size = payload_size.max(SEQ_FIELD_LEN);
    let mut payload = vec![0u8; payload_size];

    for seq in 0..count {
        payload[..SEQ_FIELD_LEN].copy_from_slice(&(seq as i32).to_be_bytes());
        socket.send_to(&payload, target)?;

        if interval_ms > 0 && seq + 1 < count {
            thread::sleep(Duration::from_millis(interval_ms));
        }
    }

    Ok(count)
}
