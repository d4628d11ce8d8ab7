//! Decoding of the base64 credential blob handed over by the Spotify Connect
//! mDNS discovery front end.  The front end itself (advertising the device,
//! accepting the `POST /login` from a controller) is out of scope here; this
//! module only turns the blob it produces into `Credentials`.

use crate::{error::Error, protocol::authentication::AuthenticationType};
use base64::{engine::general_purpose::STANDARD, Engine as _};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobInfo {
    pub username: String,
    pub auth_type: AuthenticationType,
    pub auth_data: Vec<u8>,
}

impl BlobInfo {
    pub fn from_base64(username: &str, blob_base64: &str) -> Result<Self, Error> {
        let blob = STANDARD
            .decode(blob_base64)
            .map_err(|err| Error::ProtocolError(format!("invalid discovery blob: {err}")))?;
        Self::decode(username, &blob)
    }

    fn decode(username: &str, blob: &[u8]) -> Result<Self, Error> {
        let mut pos = 0;

        // Skip one byte, then a length-prefixed slice we don't need.
        pos = skip(&blob, pos, 1)?;
        let (_, new_pos) = read_bytes(blob, pos)?;
        pos = new_pos;

        // Skip one byte, then a varint holding the numeric auth type.
        pos = skip(&blob, pos, 1)?;
        let (auth_type_value, new_pos) = read_varint(blob, pos)?;
        pos = new_pos;

        // Skip one byte, then a length-prefixed slice holding auth_data.
        pos = skip(&blob, pos, 1)?;
        let (auth_data, _) = read_bytes(blob, pos)?;

        Ok(Self {
            username: username.to_string(),
            auth_type: AuthenticationType::from(auth_type_value as i32),
            auth_data,
        })
    }
}

fn skip(blob: &[u8], pos: usize, n: usize) -> Result<usize, Error> {
    if pos + n > blob.len() {
        return Err(Error::ProtocolError("discovery blob truncated".into()));
    }
    Ok(pos + n)
}

/// Little-endian base-128 varint, clamped to the at-most-two-byte range the
/// discovery blob is known to use.  A third continuation byte is a protocol
/// violation, not a value we silently misparse.
fn read_varint(blob: &[u8], pos: usize) -> Result<(u32, usize), Error> {
    let first = *blob
        .get(pos)
        .ok_or_else(|| Error::ProtocolError("discovery blob truncated".into()))?;
    if first & 0x80 == 0 {
        return Ok((first as u32, pos + 1));
    }
    let second = *blob
        .get(pos + 1)
        .ok_or_else(|| Error::ProtocolError("discovery blob truncated".into()))?;
    if second & 0x80 != 0 {
        return Err(Error::ProtocolError(
            "discovery blob varint longer than two bytes".into(),
        ));
    }
    let value = ((first & 0x7f) as u32) | ((second as u32) << 7);
    Ok((value, pos + 2))
}

fn read_bytes(blob: &[u8], pos: usize) -> Result<(Vec<u8>, usize), Error> {
    let (len, pos) = read_varint(blob, pos)?;
    let len = len as usize;
    let end = pos
        .checked_add(len)
        .filter(|&end| end <= blob.len())
        .ok_or_else(|| Error::ProtocolError("discovery blob truncated".into()))?;
    Ok((blob[pos..end].to_vec(), end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_varint(value: u32, out: &mut Vec<u8>) {
        assert!(value < (1 << 14), "only 1- or 2-byte varints are supported");
        if value < 0x80 {
            out.push(value as u8);
        } else {
            out.push((value & 0x7f) as u8 | 0x80);
            out.push((value >> 7) as u8);
        }
    }

    fn write_bytes(data: &[u8], out: &mut Vec<u8>) {
        write_varint(data.len() as u32, out);
        out.extend_from_slice(data);
    }

    fn assemble_blob(skip1: &[u8], auth_type: u32, auth_data: &[u8]) -> Vec<u8> {
        let mut blob = Vec::new();
        blob.push(0); // skipped byte
        write_bytes(skip1, &mut blob);
        blob.push(0); // skipped byte
        write_varint(auth_type, &mut blob);
        blob.push(0); // skipped byte
        write_bytes(auth_data, &mut blob);
        blob
    }

    #[test]
    fn varint_roundtrip() {
        for n in 0..16384u32 {
            let mut buf = Vec::new();
            write_varint(n, &mut buf);
            let (decoded, consumed) = read_varint(&buf, 0).unwrap();
            assert_eq!(decoded, n);
            assert_eq!(consumed, buf.len());
        }
    }

    #[test]
    fn length_prefixed_slice_roundtrip() {
        for len in [0usize, 1, 2, 127, 128, 16383] {
            let data: Vec<u8> = (0..len).map(|i| (i % 256) as u8).collect();
            let mut buf = Vec::new();
            write_bytes(&data, &mut buf);
            let (decoded, consumed) = read_bytes(&buf, 0).unwrap();
            assert_eq!(decoded, data);
            assert_eq!(consumed, buf.len());
        }
    }

    #[test]
    fn decodes_assembled_blob() {
        let blob = assemble_blob(
            &[0xaa, 0xbb],
            AuthenticationType::AUTHENTICATION_STORED_SPOTIFY_CREDENTIALS as u32,
            &[0x01, 0x02, 0x03],
        );
        let info = BlobInfo::decode("bob", &blob).unwrap();
        assert_eq!(info.username, "bob");
        assert_eq!(
            info.auth_type,
            AuthenticationType::AUTHENTICATION_STORED_SPOTIFY_CREDENTIALS
        );
        assert_eq!(info.auth_data, vec![0x01, 0x02, 0x03]);
    }

    #[test]
    fn from_base64_decodes_and_stores_username() {
        let blob = assemble_blob(&[], AuthenticationType::AUTHENTICATION_USER_PASS as u32, b"hi");
        let encoded = STANDARD.encode(&blob);
        let info = BlobInfo::from_base64("carol", &encoded).unwrap();
        assert_eq!(info.username, "carol");
        assert_eq!(info.auth_data, b"hi");
    }
}
