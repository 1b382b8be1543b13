//! Packet framing for the host protocol.
//!
//! Packet format:
//! - ID (1 byte): command identifier, echoed in the response
//! - PAYLOAD (6 bytes): command-specific data, zero-filled when unused
//! - SYNC (1 byte): correlation byte, copied back when the revision has one

/// Size of every request and response packet
pub const PACKET_SIZE: usize = 8;

/// Number of payload bytes between the id and the sync byte
pub const PAYLOAD_SIZE: usize = 6;

/// Index of the sync byte
pub const SYNC_INDEX: usize = PACKET_SIZE - 1;

/// A raw request or response packet
pub type Packet = [u8; PACKET_SIZE];

/// Protocol revision spoken by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Revision {
    /// No sync byte; replies are matched by delivery order only
    Unsynced,
    /// Byte 7 is copied from request to response
    #[default]
    Synced,
}

impl Revision {
    /// Sync byte to put into the response for `request`, if any
    pub fn sync_of(self, request: &Packet) -> Option<u8> {
        match self {
            Revision::Unsynced => None,
            Revision::Synced => Some(request[SYNC_INDEX]),
        }
    }
}

/// Response to a recognized command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Response {
    /// Echoed command id
    pub id: u8,
    /// Command-specific data
    pub payload: [u8; PAYLOAD_SIZE],
}

impl Response {
    /// Response that only echoes the command id
    pub const fn echo(id: u8) -> Self {
        Self {
            id,
            payload: [0; PAYLOAD_SIZE],
        }
    }

    /// Response carrying data
    ///
    /// `data` longer than the payload is truncated; shorter data is
    /// zero-padded.
    pub fn with_data(id: u8, data: &[u8]) -> Self {
        let mut payload = [0; PAYLOAD_SIZE];
        let len = data.len().min(PAYLOAD_SIZE);
        payload[..len].copy_from_slice(&data[..len]);
        Self { id, payload }
    }

    /// Write this response into `out`
    ///
    /// Every byte is overwritten. Byte 7 carries the sync byte when given
    /// and is zero otherwise.
    pub fn encode(&self, out: &mut Packet, sync: Option<u8>) {
        out[0] = self.id;
        out[1..SYNC_INDEX].copy_from_slice(&self.payload);
        out[SYNC_INDEX] = sync.unwrap_or(0);
    }

    /// Parse a response packet (host side)
    pub fn decode(packet: &Packet) -> Self {
        let mut payload = [0; PAYLOAD_SIZE];
        payload.copy_from_slice(&packet[1..SYNC_INDEX]);
        Self {
            id: packet[0],
            payload,
        }
    }
}

/// Host-side sync byte generator
///
/// Each call yields a value different from the previous one, so a stale
/// reply can never be mistaken for the current one.
#[derive(Debug, Clone, Default)]
pub struct SyncCounter {
    last: u8,
}

impl SyncCounter {
    /// Create a new counter
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Next sync byte
    pub fn next_sync(&mut self) -> u8 {
        self.last = self.last.wrapping_add(1);
        self.last
    }

    /// Sync byte handed out last
    pub fn last(&self) -> u8 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_overwrites_stale_payload() {
        let mut out = [0xEE; PACKET_SIZE];
        Response::echo(4).encode(&mut out, Some(0x5A));
        assert_eq!(out, [4, 0, 0, 0, 0, 0, 0, 0x5A]);
    }

    #[test]
    fn test_encode_without_sync_zeroes_byte_7() {
        let mut out = [0xEE; PACKET_SIZE];
        Response::with_data(3, &[1, 2, 3]).encode(&mut out, None);
        assert_eq!(out, [3, 1, 2, 3, 0, 0, 0, 0]);
    }

    #[test]
    fn test_decode_reads_device_reply() {
        let mut out = [0; PACKET_SIZE];
        Response::with_data(8, &[0b0101, 2]).encode(&mut out, Some(0x30));

        let reply = Response::decode(&out);
        assert_eq!(reply.id, 8);
        assert_eq!(reply.payload, [0b0101, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_with_data_truncates() {
        let response = Response::with_data(8, &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(response.payload, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_revision_sync() {
        let request = [1, 0, 0, 0, 0, 0, 0, 0x77];
        assert_eq!(Revision::Synced.sync_of(&request), Some(0x77));
        assert_eq!(Revision::Unsynced.sync_of(&request), None);
    }

    #[test]
    fn test_sync_counter_never_repeats_last() {
        let mut counter = SyncCounter::new();
        let mut prev = counter.last();
        for _ in 0..600 {
            let next = counter.next_sync();
            assert_ne!(next, prev);
            prev = next;
        }
    }
}
