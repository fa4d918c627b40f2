/** ------------------------------------------------------------
 * Inter-arrival delays in capture order
 * ------------------------------------------------------------- */
use crate::capture::DecodedPacket;

/**
 * Lazy per-packet delta walk in capture order
 *
 * Packets are numbered from 0 as they appear in the capture. The first
 * packet seeds prev_time with its own timestamp, so the first delta is
 * always 0.0. Payload content plays no role in this variant.
 */
#[derive(Debug)]
pub struct ArrivalDelays<'a> {
    packets: std::slice::Iter<'a, DecodedPacket>,
    packet_number: u32,
    prev_time: Option<f64>,
}

impl Iterator for ArrivalDelays<'_> {
    type Item = (u32, f64);

    fn next(&mut self) -> Option<(u32, f64)> {
        let packet = self.packets.next()?;
        let prev_time = self.prev_time.unwrap_or(packet.timestamp);
        self.prev_time = Some(packet.timestamp);

        let number = self.packet_number;
        self.packet_number += 1;

        Some((number, packet.timestamp - prev_time))
    }
}

/**
 * Walk per-packet inter-arrival deltas in capture order
 */
pub fn arrival_delays(packets: &[DecodedPacket]) -> ArrivalDelays<'_> {
    ArrivalDelays {
        packets: packets.iter(),
        packet_number: 0,
        prev_time: None,
    }
}
