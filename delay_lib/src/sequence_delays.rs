/** ------------------------------------------------------------
 * Delay reconstruction in sequence-number order
 * ------------------------------------------------------------- */
use crate::capture::DecodedPacket;
use crate::errors::DelayExtractionError;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Width of the big-endian sequence field leading each probe payload.
pub const SEQ_FIELD_LEN: usize = 4;

/**
 * Extraction parameters for the sequence variant
 *
 * The payload offset skips framing bytes (e.g. a UDP header left in the
 * capture) in front of the sequence field. The default of 0 reads the
 * field from the first four payload bytes.
 */
#[derive(Debug, Copy, Clone, Default)]
pub struct SequenceConfig {
    pub payload_offset: usize,
}

/**
 * Read the sequence field out of one payload
 *
 * The field is a big-endian two's-complement 32-bit integer starting at
 * the configured offset. The length is checked up front; a payload too
 * short for the field is a caller error, never an out-of-bounds read.
 */
fn read_sequence_field(payload: &[u8], offset: usize) -> Result<i32, DelayExtractionError> {
    let end = offset + SEQ_FIELD_LEN;
    if payload.len() < end {
        return Err(DelayExtractionError::MalformedPayload {
            required: end,
            available: payload.len(),
        });
    }

    let field = i32::from_be_bytes(payload[offset..end].try_into().unwrap());
    Ok(field)
}

/**
 * Lazy walk over the filled sequence slots in ascending order
 *
 * The first occupied slot seeds prev_time with its own timestamp, so the
 * first emitted delay is always 0.0 even when sequence number 0 was never
 * observed. Absent sequence numbers are skipped without touching
 * prev_time: the delay across a loss gap spans the gap.
 */
#[derive(Debug)]
pub struct SequenceDelays {
    slots: btree_map::IntoIter<u32, f64>,
    prev_time: Option<f64>,
}

impl Iterator for SequenceDelays {
    type Item = (u32, f64);

    fn next(&mut self) -> Option<(u32, f64)> {
        let (seq, timestamp) = self.slots.next()?;
        let prev_time = self.prev_time.unwrap_or(timestamp);
        self.prev_time = Some(timestamp);

        Some((seq, timestamp - prev_time))
    }
}

/**
 * Reconstruct inter-arrival delays in sequence-number order
 *
 * ## Description
 *
 * One pass over the packets files each arrival timestamp under the
 * sequence number carried in the packet's own payload, then the returned
 * iterator walks the slots in ascending sequence order and emits
 * (sequence number, delay against the previously emitted slot).
 *
 * Slots live in an ordered map keyed by sequence number, so sequence
 * numbers far beyond the packet count allocate nothing and cannot fault.
 * A packet whose field decodes negative is treated as a non-data record
 * and skipped; when several packets carry the same sequence number the
 * last one in capture order wins.
 */
pub fn sequence_delays(
    packets: &[DecodedPacket],
    config: SequenceConfig,
) -> Result<SequenceDelays, DelayExtractionError> {
    let mut slots: BTreeMap<u32, f64> = BTreeMap::new();

    for packet in packets {
        let seq = read_sequence_field(&packet.payload, config.payload_offset)?;
        if seq < 0 {
            continue;
        }

        slots.insert(seq as u32, packet.timestamp);
    }

    Ok(SequenceDelays {
        slots: slots.into_iter(),
        prev_time: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Probe payload: big-endian sequence field plus four filler bytes.
    fn probe(seq: i32, timestamp: f64) -> DecodedPacket {
        let mut payload = seq.to_be_bytes().to_vec();
        payload.extend_from_slice(&[0u8; 4]);

        DecodedPacket { timestamp, payload }
    }

    fn reconstruct(packets: &[DecodedPacket]) -> Vec<(u32, f64)> {
        sequence_delays(packets, SequenceConfig::default())
            .unwrap()
            .collect()
    }

    #[test]
    fn contiguous_sequence_numbers() {
        let packets = vec![probe(0, 10.0), probe(1, 10.5), probe(2, 11.2)];

        let result = reconstruct(&packets);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0], (0, 0.0));
        assert_eq!(result[1], (1, 0.5));
        assert_eq!(result[2].0, 2);
        assert!((result[2].1 - 0.7).abs() < 1e-9);
    }

    #[test]
    fn lost_sequence_number_leaves_a_gap() {
        let packets = vec![probe(0, 10.0), probe(2, 11.0)];

        let result = reconstruct(&packets);

        assert_eq!(result, vec![(0, 0.0), (2, 1.0)]);
    }

    #[test]
    fn gap_delay_spans_the_missing_slot() {
        // {0, 1, 3} observed, 2 lost: no entry for 2, and the delay of 3
        // is measured against 1.
        let packets = vec![probe(0, 1.0), probe(1, 1.25), probe(3, 2.0)];

        let result = reconstruct(&packets);

        assert_eq!(result, vec![(0, 0.0), (1, 0.25), (3, 0.75)]);
    }

    #[test]
    fn reordered_capture_is_walked_in_sequence_order() {
        let packets = vec![
            probe(2, 11.0),
            probe(0, 10.0),
            probe(3, 11.5),
            probe(1, 10.25),
        ];

        let result = reconstruct(&packets);

        assert_eq!(result, vec![(0, 0.0), (1, 0.25), (2, 0.75), (3, 0.5)]);
    }

    #[test]
    fn duplicate_sequence_number_keeps_last_timestamp() {
        let packets = vec![probe(4, 0.5), probe(5, 1.0), probe(5, 2.0)];

        let result = reconstruct(&packets);

        assert_eq!(result, vec![(4, 0.0), (5, 1.5)]);
    }

    #[test]
    fn negative_sequence_field_is_skipped() {
        // 0xffffffff decodes to -1; the record must neither emit nor
        // disturb the delay of its neighbors.
        let packets = vec![probe(0, 10.0), probe(-1, 99.0), probe(1, 10.5)];

        let result = reconstruct(&packets);

        assert_eq!(result, vec![(0, 0.0), (1, 0.5)]);
    }

    #[test]
    fn first_observed_slot_seeds_the_walk() {
        // Sequence number 0 lost: the walk starts at 3 with delay 0.0
        // instead of reading an unwritten slot.
        let packets = vec![probe(3, 5.0), probe(4, 5.25)];

        let result = reconstruct(&packets);

        assert_eq!(result, vec![(3, 0.0), (4, 0.25)]);
    }

    #[test]
    fn single_packet_emits_zero_delay() {
        let packets = vec![probe(0, 42.0)];

        let result = reconstruct(&packets);

        assert_eq!(result, vec![(0, 0.0)]);
    }

    #[test]
    fn no_packets_no_output() {
        let packets: Vec<DecodedPacket> = Vec::new();

        let mut result = sequence_delays(&packets, SequenceConfig::default()).unwrap();

        assert!(result.next().is_none());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let packets = vec![probe(1, 3.0), probe(0, 2.5), probe(4, 4.0)];

        let first = reconstruct(&packets);
        let second = reconstruct(&packets);

        assert_eq!(first, second);
    }

    #[test]
    fn short_payload_is_rejected() {
        let packets = vec![DecodedPacket {
            timestamp: 1.0,
            payload: vec![0, 1, 2],
        }];

        let result = sequence_delays(&packets, SequenceConfig::default());
        if let Err(DelayExtractionError::MalformedPayload {
            required,
            available,
        }) = result
        {
            assert_eq!(required, 4);
            assert_eq!(available, 3);
        } else {
            assert!(false, "Expected MalformedPayload error");
        }
    }

    #[test]
    fn sequence_field_read_at_configured_offset() {
        // Two framing bytes ahead of the field
        let mut first = vec![0xde, 0xad];
        first.extend_from_slice(&7i32.to_be_bytes());
        let mut second = vec![0xbe, 0xef];
        second.extend_from_slice(&8i32.to_be_bytes());

        let packets = vec![
            DecodedPacket {
                timestamp: 1.0,
                payload: first,
            },
            DecodedPacket {
                timestamp: 1.5,
                payload: second,
            },
        ];
        let config = SequenceConfig { payload_offset: 2 };

        let result: Vec<(u32, f64)> = sequence_delays(&packets, config).unwrap().collect();

        assert_eq!(result, vec![(7, 0.0), (8, 0.5)]);
    }

    #[test]
    fn offset_beyond_payload_is_rejected() {
        let packets = vec![DecodedPacket {
            timestamp: 1.0,
            payload: vec![0; 5],
        }];
        let config = SequenceConfig { payload_offset: 2 };

        let result = sequence_delays(&packets, config);
        if let Err(DelayExtractionError::MalformedPayload {
            required,
            available,
        }) = result
        {
            assert_eq!(required, 6);
            assert_eq!(available, 5);
        } else {
            assert!(false, "Expected MalformedPayload error");
        }
    }
}
