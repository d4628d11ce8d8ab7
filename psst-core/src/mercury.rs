use crate::{
    connection::shannon_codec::ShannonMsg,
    protocol::mercury::Header,
    util::{deserialize_protobuf, serialize_protobuf, Sequence},
};
use byteorder::{ReadBytesExt, BE};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::{
    collections::HashMap,
    io::{Cursor, Read},
};

/// Minimal request/response multiplexer for the mercury message bus frames
/// that arrive on the AP connection.  Full subscription bookkeeping (server
/// push, unsubscribe) is handled by an external collaborator; this type only
/// needs to demultiplex `0xB2`-`0xB6` frames back to their caller.
#[derive(Default)]
pub struct MercuryDispatcher {
    sequence: Sequence<u64>,
    pending: HashMap<u64, Pending>,
}

impl MercuryDispatcher {
    pub fn new() -> Self {
        Self {
            sequence: Sequence::new(0),
            pending: HashMap::new(),
        }
    }

    /// Register a new pending request against `callback` and return the
    /// `ShannonMsg` the caller should hand to the single encode thread.
    pub fn enqueue_request(
        &mut self,
        req: MercuryRequest,
        callback: Sender<MercuryResponse>,
    ) -> ShannonMsg {
        let seq = self.sequence.advance();
        self.pending.insert(
            seq,
            Pending {
                messages: Vec::new(),
                callback: Some(callback),
            },
        );
        ShannonMsg::new(ShannonMsg::MERCURY_REQ, req.encode_to_mercury_message(seq))
    }

    /// Handle an incoming `0xB2`-`0xB6` frame, reassembling partial messages
    /// and delivering the final response on its caller's channel.
    pub fn handle(&mut self, shannon_msg: ShannonMsg) {
        let msg = MercuryMessage::decode(shannon_msg.payload);
        let msg_flags = msg.flags;
        let msg_seq = msg.seq;
        let mut pending = self.pending.remove(&msg_seq).unwrap_or_default();

        pending.messages.push(msg);

        if msg_flags == MercuryMessage::FINAL {
            let parts = MercuryMessage::collect(pending.messages);
            let response = MercuryResponse::decode_from_parts(parts);
            if let Some(callback) = pending.callback {
                let _ = callback.send(response);
            }
        } else {
            self.pending.insert(msg_seq, pending);
        }
    }
}

#[derive(Debug)]
pub struct MercuryRequest {
    pub uri: String,
    pub method: String,
    pub payload: Vec<Vec<u8>>,
}

impl MercuryRequest {
    pub fn get(uri: String) -> Self {
        Self {
            uri,
            method: "GET".to_string(),
            payload: Vec::new(),
        }
    }

    pub fn send(uri: String, data: Vec<u8>) -> Self {
        Self {
            uri,
            method: "SEND".to_string(),
            payload: vec![data],
        }
    }

    fn encode_to_mercury_message(self, seq: u64) -> Vec<u8> {
        let msg = MercuryMessage::new(seq, MercuryMessage::FINAL, self.encode_to_parts());
        msg.encode()
    }

    fn encode_to_parts(self) -> Vec<Vec<u8>> {
        let header = Header {
            uri: Some(self.uri),
            method: Some(self.method),
            ..Header::default()
        };
        let header_part = serialize_protobuf(&header).expect("Failed to serialize message header");
        let mut payload = self.payload;
        payload.insert(0, header_part);
        payload
    }
}

#[derive(Debug, Clone)]
pub struct MercuryResponse {
    pub uri: String,
    pub status_code: i32,
    pub payload: Vec<Vec<u8>>,
}

impl MercuryResponse {
    fn decode_from_parts(mut parts: Vec<Vec<u8>>) -> Self {
        let header_part = parts.remove(0);
        let header: Header =
            deserialize_protobuf(&header_part).expect("Failed to deserialize message header");
        Self {
            uri: header.uri.unwrap_or_default(),
            status_code: header.status_code.unwrap_or_default(),
            payload: parts,
        }
    }
}

#[derive(Debug, Default)]
struct Pending {
    messages: Vec<MercuryMessage>,
    callback: Option<Sender<MercuryResponse>>,
}

#[derive(Debug, Default)]
struct MercuryMessage {
    seq: u64,
    flags: u8,
    count: u16,
    parts: Vec<Vec<u8>>,
}

impl MercuryMessage {
    const FINAL: u8 = 0x01;
    const PARTIAL: u8 = 0x02;

    fn new(seq: u64, flags: u8, parts: Vec<Vec<u8>>) -> Self {
        let count = parts.len() as u16;
        Self {
            seq,
            flags,
            count,
            parts,
        }
    }

    fn decode(buf: Vec<u8>) -> Self {
        let mut buf = Cursor::new(buf);
        let seq_len = buf.read_u16::<BE>().unwrap();
        let seq = buf.read_uint::<BE>(seq_len.into()).unwrap();
        let flags = buf.read_u8().unwrap();
        let count = buf.read_u16::<BE>().unwrap();
        let mut parts = Vec::with_capacity(count.into());
        for _ in 0..count {
            let part_len = buf.read_u16::<BE>().unwrap();
            let mut part = vec![0_u8; part_len.into()];
            buf.read_exact(&mut part).unwrap();
            parts.push(part);
        }
        Self {
            seq,
            flags,
            count,
            parts,
        }
    }

    fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend(8_u16.to_be_bytes()); // Sequence length.
        buf.extend(self.seq.to_be_bytes());
        buf.push(self.flags);
        buf.extend(self.count.to_be_bytes());
        for part in &self.parts {
            let len = part.len() as u16;
            buf.extend(len.to_be_bytes());
            buf.extend(part);
        }
        buf
    }

    fn collect(msgs: impl IntoIterator<Item = Self>) -> Vec<Vec<u8>> {
        let mut results = Vec::new();
        let mut partial: Option<Vec<u8>> = None;

        for msg in msgs {
            for (i, mut part) in msg.parts.into_iter().enumerate() {
                if let Some(mut partial) = partial.take() {
                    partial.extend(part);
                    part = partial;
                }

                let is_last_part = i as u16 == msg.count - 1;
                if msg.flags == Self::PARTIAL && is_last_part {
                    partial = Some(part);
                } else {
                    results.push(part);
                }
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_response_roundtrip() {
        let mut dispatcher = MercuryDispatcher::new();
        let (callback, receiver) = unbounded();
        let req_msg =
            dispatcher.enqueue_request(MercuryRequest::get("hm://test/uri".to_string()), callback);
        assert_eq!(req_msg.cmd, ShannonMsg::MERCURY_REQ);

        // Simulate the AP replying to sequence 0 with a single FINAL message.
        let header = Header {
            uri: Some("hm://test/uri".to_string()),
            status_code: Some(200),
            ..Header::default()
        };
        let header_bytes = serialize_protobuf(&header).unwrap();
        let reply = MercuryMessage::new(0, MercuryMessage::FINAL, vec![header_bytes, b"body".to_vec()]);
        dispatcher.handle(ShannonMsg::new(ShannonMsg::MERCURY_REQ, reply.encode()));

        let response = receiver.try_recv().unwrap();
        assert_eq!(response.uri, "hm://test/uri");
        assert_eq!(response.status_code, 200);
        assert_eq!(response.payload, vec![b"body".to_vec()]);
    }

    #[test]
    fn partial_then_final_message_reassembles() {
        let mut dispatcher = MercuryDispatcher::new();
        let (callback, receiver) = unbounded();
        dispatcher.enqueue_request(MercuryRequest::get("hm://test/stream".to_string()), callback);

        let header = Header {
            uri: Some("hm://test/stream".to_string()),
            status_code: Some(200),
            ..Header::default()
        };
        let header_bytes = serialize_protobuf(&header).unwrap();

        let partial = MercuryMessage::new(
            0,
            MercuryMessage::PARTIAL,
            vec![header_bytes, b"hel".to_vec()],
        );
        dispatcher.handle(ShannonMsg::new(ShannonMsg::MERCURY_REQ, partial.encode()));

        let rest = MercuryMessage::new(0, MercuryMessage::FINAL, vec![b"lo".to_vec()]);
        dispatcher.handle(ShannonMsg::new(ShannonMsg::MERCURY_REQ, rest.encode()));

        let response = receiver.try_recv().unwrap();
        assert_eq!(response.payload, vec![b"hello".to_vec()]);
    }
}
