pub mod diffie_hellman;
pub mod shannon_codec;

use std::{
    io,
    io::{Read, Write},
    net::TcpStream,
};

use byteorder::{ReadBytesExt, BE};
use serde::Deserialize;

use crate::{
    connection::{
        diffie_hellman::{compute_keys, DHLocalKeys},
        shannon_codec::{ShannonDecoder, ShannonEncoder, ShannonMsg},
    },
    error::Error,
    protocol::authentication::AuthenticationType,
    system_info::{SYSTEM_INFORMATION_STRING, VERSION_STRING},
    util::{default_ureq_agent_builder, deserialize_protobuf, serialize_protobuf},
};

// Access-point resolve endpoint.
const AP_RESOLVE_ENDPOINT: &str = "http://apresolve.spotify.com";

// Access-point used in case resolving fails.
const AP_FALLBACK: &str = "ap.spotify.com:443";

// Largest length prefix PlainConnection will accept before declaring the
// connection dead: a legitimate hello/response never gets close to this.
const MAX_PLAIN_PACKET_SIZE: u32 = 1024 * 1024;

/// Credentials usable for a login attempt, and also the shape of the
/// reusable credentials returned by a successful one.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub auth_data: Vec<u8>,
    pub auth_type: AuthenticationType,
}

impl Credentials {
    pub fn from_username_and_password(username: String, password: String) -> Self {
        Self {
            username,
            auth_type: AuthenticationType::AUTHENTICATION_USER_PASS,
            auth_data: password.into_bytes(),
        }
    }

    pub fn from_reusable_credentials(username: String, auth_data: Vec<u8>) -> Self {
        Self {
            username,
            auth_type: AuthenticationType::AUTHENTICATION_STORED_SPOTIFY_CREDENTIALS,
            auth_data,
        }
    }

    /// OAuth logins intentionally carry an empty username: the AP derives
    /// the canonical username server-side from the token.
    pub fn from_access_token(access_token: String) -> Self {
        Self {
            username: String::new(),
            auth_type: AuthenticationType::AUTHENTICATION_SPOTIFY_TOKEN,
            auth_data: access_token.into_bytes(),
        }
    }

    pub fn from_discovery_blob(blob: crate::discovery::BlobInfo) -> Self {
        Self {
            username: blob.username,
            auth_type: blob.auth_type,
            auth_data: blob.auth_data,
        }
    }
}

/// A length-prefixed framer used only for the three pre-encryption handshake
/// messages.  Every call returns the exact bytes that crossed the wire, so
/// the handshake can fold them into the transcript it hashes.
pub struct PlainConnection {
    stream: TcpStream,
}

impl PlainConnection {
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Write `prefix || be_u32(len(prefix) + 4 + len(payload)) || payload`
    /// and return those exact bytes.
    pub fn send_prefix_packet(&mut self, prefix: &[u8], payload: &[u8]) -> io::Result<Vec<u8>> {
        let total_len = prefix.len() + 4 + payload.len();
        let mut buf = Vec::with_capacity(total_len);
        buf.extend_from_slice(prefix);
        buf.extend_from_slice(&(total_len as u32).to_be_bytes());
        buf.extend_from_slice(payload);
        self.stream.write_all(&buf)?;
        Ok(buf)
    }

    /// Read a big-endian `u32` length `L`, then `L - 4` more bytes, and
    /// return the whole `L`-byte block including the length prefix.
    pub fn recv_packet(&mut self) -> io::Result<Vec<u8>> {
        let size = self.stream.read_u32::<BE>()?;
        if size < 4 || size > MAX_PLAIN_PACKET_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("implausible handshake packet size: {size}"),
            ));
        }
        let mut buf = vec![0_u8; size as usize];
        buf[..4].copy_from_slice(&size.to_be_bytes());
        self.stream.read_exact(&mut buf[4..])?;
        Ok(buf)
    }
}

/// A fully set up, post-handshake connection: an encrypted/authenticated
/// sender and receiver pair wrapping the same underlying TCP stream.
pub struct Transport {
    pub stream: TcpStream,
    pub encoder: ShannonEncoder<TcpStream>,
    pub decoder: ShannonDecoder<TcpStream>,
}

impl Transport {
    pub fn resolve_ap_with_fallback(proxy_url: Option<&str>) -> String {
        match Self::resolve_ap(proxy_url) {
            Ok(ap) => ap,
            Err(err) => {
                log::error!("using AP fallback, error while resolving: {:?}", err);
                AP_FALLBACK.into()
            }
        }
    }

    pub fn resolve_ap(proxy_url: Option<&str>) -> Result<String, Error> {
        #[derive(Clone, Debug, Deserialize)]
        struct ApResolveData {
            ap_list: Vec<String>,
        }

        let agent: ureq::Agent = default_ureq_agent_builder(proxy_url).build().into();
        let mut response = agent.get(AP_RESOLVE_ENDPOINT).call()?;
        let data: ApResolveData = response.body_mut().read_json()?;
        data.ap_list
            .into_iter()
            .next()
            .ok_or(Error::UnexpectedResponse)
    }

    pub fn connect(ap: &str, proxy_url: Option<&str>) -> Result<Self, Error> {
        log::trace!("connecting to {}", ap);
        let stream = match proxy_url {
            Some(proxy) => connect_through_proxy(ap, proxy)?,
            None => TcpStream::connect(ap)?,
        };
        log::trace!("connected");
        Self::exchange_keys(stream)
    }

    pub fn exchange_keys(stream: TcpStream) -> Result<Self, Error> {
        use crate::protocol::keyexchange::APResponseMessage;

        let mut plain = PlainConnection::new(stream.try_clone()?);
        let local_keys = DHLocalKeys::random();

        log::trace!("sending client hello");
        let client_nonce: [u8; 16] = rand::random();
        let hello = client_hello(local_keys.public_key(), client_nonce.to_vec());
        let hello_bytes = plain.send_prefix_packet(&[0, 4], &hello)?;
        log::trace!("sent client hello");

        log::trace!("waiting for AP response");
        let apresp_bytes = plain.recv_packet()?;
        let apresp: APResponseMessage = deserialize_protobuf(&apresp_bytes[4..])?;
        log::trace!("received AP response");

        if let Some(login_failed) = apresp.login_failed {
            return Err(Error::AuthFailed {
                code: login_failed.error_code as i32,
            });
        }
        let remote_key = &apresp
            .challenge
            .ok_or_else(|| Error::ProtocolError("missing AP challenge".into()))?
            .login_crypto_challenge
            .diffie_hellman
            .ok_or_else(|| Error::ProtocolError("missing DH challenge".into()))?
            .gs;

        let (challenge, send_key, recv_key) = compute_keys(
            &local_keys.shared_secret(remote_key),
            &hello_bytes,
            &apresp_bytes,
        );

        log::trace!("sending client response");
        let response = client_response_plaintext(challenge);
        plain.send_prefix_packet(&[], &response)?;
        log::trace!("sent client response");

        let encoder = ShannonEncoder::new(stream.try_clone()?, &send_key);
        let decoder = ShannonDecoder::new(stream.try_clone()?, &recv_key);

        Ok(Self {
            stream,
            encoder,
            decoder,
        })
    }

    /// Send the login packet and synchronously await exactly one encrypted
    /// reply, then read one further packet without handling it.  This is the
    /// one place the login path reads from the PacketStream directly, before
    /// the dispatcher thread takes over, so that the cipher is known to be
    /// primed in both directions first.  The extra packet is handed back to
    /// the caller to run through the same cmd-table dispatch the background
    /// thread will use for everything after it, rather than being decoded
    /// and discarded here.
    pub fn authenticate(
        &mut self,
        credentials: Credentials,
        device_id: &str,
    ) -> Result<(Credentials, ShannonMsg), Error> {
        use crate::protocol::authentication::APWelcome;
        use crate::protocol::keyexchange::APLoginFailed;

        let request = login_packet(credentials.clone(), device_id);
        self.encoder.encode(request)?;

        let response = self.decoder.decode()?;
        match response.cmd {
            ShannonMsg::AP_WELCOME => {
                let mut welcome: APWelcome = deserialize_protobuf(&response.payload)?;
                if welcome.canonical_username.is_empty() {
                    welcome.canonical_username = credentials.username;
                }
                let primed_msg = self.decoder.decode()?;
                Ok((
                    Credentials {
                        username: welcome.canonical_username,
                        auth_data: welcome.reusable_auth_credentials,
                        auth_type: welcome.reusable_auth_credentials_type,
                    },
                    primed_msg,
                ))
            }
            ShannonMsg::AUTH_FAILURE => {
                let failure: APLoginFailed = deserialize_protobuf(&response.payload)?;
                Err(Error::AuthFailed {
                    code: failure.error_code as i32,
                })
            }
            cmd => Err(Error::ProtocolError(format!(
                "unexpected login reply command: {cmd:#x}"
            ))),
        }
    }
}

fn connect_through_proxy(ap: &str, proxy_url: &str) -> Result<TcpStream, Error> {
    let proxy = socks::Socks5Stream::connect(proxy_url, ap)
        .map_err(|err| Error::ProtocolError(format!("proxy connect failed: {err}")))?;
    Ok(proxy.into_inner())
}

fn client_hello(public_key: Vec<u8>, nonce: Vec<u8>) -> Vec<u8> {
    use crate::protocol::keyexchange::*;

    let hello = ClientHello {
        build_info: BuildInfo {
            platform: Platform::PLATFORM_LINUX_X86,
            product: Product::PRODUCT_PARTNER,
            product_flags: vec![],
            version: 0x1_0800_0000_00,
        },
        cryptosuites_supported: vec![Cryptosuite::CRYPTO_SUITE_SHANNON],
        fingerprints_supported: vec![],
        powschemes_supported: vec![],
        login_crypto_hello: LoginCryptoHelloUnion {
            diffie_hellman: Some(LoginCryptoDiffieHellmanHello {
                gc: public_key,
                server_keys_known: 1,
            }),
        },
        client_nonce: nonce,
        padding: None,
        feature_set: Some(FeatureSet {
            autoupdate2: Some(true),
            current_location: None,
        }),
    };

    serialize_protobuf(&hello).expect("Failed to serialize client hello")
}

fn client_response_plaintext(challenge: Vec<u8>) -> Vec<u8> {
    use crate::protocol::keyexchange::*;

    let response = ClientResponsePlaintext {
        login_crypto_response: LoginCryptoResponseUnion {
            diffie_hellman: Some(LoginCryptoDiffieHellmanResponse { hmac: challenge }),
        },
        pow_response: PoWResponseUnion::default(),
        crypto_response: CryptoResponseUnion::default(),
    };

    serialize_protobuf(&response).expect("Failed to serialize client response")
}

fn login_packet(credentials: Credentials, device_id: &str) -> ShannonMsg {
    use crate::protocol::authentication::{
        ClientResponseEncrypted, CpuFamily, LoginCredentials, Os, SystemInfo,
    };

    let request = ClientResponseEncrypted {
        login_credentials: LoginCredentials {
            username: Some(credentials.username),
            typ: credentials.auth_type,
            auth_data: Some(credentials.auth_data),
        },
        system_info: SystemInfo {
            cpu_family: CpuFamily::CPU_UNKNOWN,
            os: Os::OS_UNKNOWN,
            system_information_string: Some(SYSTEM_INFORMATION_STRING.to_string()),
            device_id: Some(device_id.to_string()),
            ..SystemInfo::default()
        },
        version_string: Some(VERSION_STRING.to_string()),
        ..ClientResponseEncrypted::default()
    };

    let buf = serialize_protobuf(&request).expect("Failed to serialize login packet");
    ShannonMsg::new(ShannonMsg::LOGIN, buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_prefix_packet_writes_length_prefixed_frame() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let client = std::thread::spawn(move || {
            let stream = TcpStream::connect(addr).unwrap();
            let mut conn = PlainConnection::new(stream);
            conn.send_prefix_packet(&[0, 4], b"hello").unwrap()
        });

        let (mut server_stream, _) = listener.accept().unwrap();
        let mut received = vec![0u8; 2 + 4 + 5];
        server_stream.read_exact(&mut received).unwrap();

        let sent = client.join().unwrap();
        assert_eq!(received, sent);
        assert_eq!(&received[..2], &[0, 4]);
        assert_eq!(
            u32::from_be_bytes(received[2..6].try_into().unwrap()),
            11
        );
        assert_eq!(&received[6..], b"hello");
    }

    #[test]
    fn login_flavors_carry_fixed_wire_constants() {
        for credentials in [
            Credentials::from_username_and_password("alice".into(), "s3cr3t".into()),
            Credentials::from_reusable_credentials("alice".into(), vec![1, 2, 3]),
            Credentials::from_access_token("token".into()),
        ] {
            let msg = login_packet(credentials, "testdev");
            assert_eq!(msg.cmd, ShannonMsg::LOGIN);

            let parsed: crate::protocol::authentication::ClientResponseEncrypted =
                deserialize_protobuf(&msg.payload).unwrap();
            assert_eq!(parsed.version_string.as_deref(), Some(VERSION_STRING));
            assert_eq!(
                parsed.system_info.system_information_string.as_deref(),
                Some(SYSTEM_INFORMATION_STRING)
            );
        }
    }

    #[test]
    fn oauth_login_has_empty_username() {
        let msg = login_packet(Credentials::from_access_token("tok".into()), "testdev");
        let parsed: crate::protocol::authentication::ClientResponseEncrypted =
            deserialize_protobuf(&msg.payload).unwrap();
        assert_eq!(parsed.login_credentials.username.as_deref(), Some(""));
    }
}
