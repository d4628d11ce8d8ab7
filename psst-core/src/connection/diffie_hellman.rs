use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use sha1::Sha1;

// The classic 768-bit MODP group (RFC 2409, group 1), reused by the AP for its
// plaintext Diffie-Hellman hello.  Generator is 2.
const DH_GENERATOR: u8 = 2;
const DH_PRIME: [u8; 96] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc9, 0x0f, 0xda, 0xa2, 0x21, 0x68, 0xc2, 0x34,
    0xc4, 0xc6, 0x62, 0x8b, 0x80, 0xdc, 0x1c, 0xd1, 0x29, 0x02, 0x4e, 0x08, 0x8a, 0x67, 0xcc, 0x74,
    0x02, 0x0b, 0xbe, 0xa6, 0x3b, 0x13, 0x9b, 0x22, 0x51, 0x4a, 0x08, 0x79, 0x8e, 0x34, 0x04, 0xdd,
    0xef, 0x95, 0x19, 0xb3, 0xcd, 0x3a, 0x43, 0x1b, 0x30, 0x2b, 0x0a, 0x6d, 0xf2, 0x5f, 0x14, 0x37,
    0x4f, 0xe1, 0x35, 0x6d, 0x6d, 0x51, 0xc2, 0x45, 0xe4, 0x85, 0xb5, 0x76, 0x62, 0x5e, 0x7e, 0xc6,
    0xf4, 0x4c, 0x42, 0xe9, 0xa6, 0x3a, 0x36, 0x20, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

/// This client's local half of the Diffie-Hellman key agreement: a random
/// private scalar and the public element derived from it.  The scalar never
/// leaves this type; only `public_key()` is handed to the wire.
pub struct DHLocalKeys {
    private_key: BigUint,
    public_key: BigUint,
}

impl DHLocalKeys {
    /// Generate a fresh, random private scalar and its corresponding public
    /// element `g^private mod p`.
    pub fn random() -> Self {
        let mut key_data = [0u8; 95];
        rand::fill(&mut key_data);

        let private_key = BigUint::from_bytes_be(&key_data);
        let generator = BigUint::from(DH_GENERATOR);
        let prime = BigUint::from_bytes_be(&DH_PRIME);
        let public_key = generator.modpow(&private_key, &prime);

        Self {
            private_key,
            public_key,
        }
    }

    pub fn public_key(&self) -> Vec<u8> {
        self.public_key.to_bytes_be()
    }

    /// Combine the server's public element with our private scalar to obtain
    /// the raw shared secret `remote^private mod p`.
    pub fn shared_secret(&self, remote_key: &[u8]) -> Vec<u8> {
        let remote = BigUint::from_bytes_be(remote_key);
        let prime = BigUint::from_bytes_be(&DH_PRIME);
        let shared_secret = remote.modpow(&self.private_key, &prime);
        shared_secret.to_bytes_be()
    }
}

/// Derive the challenge HMAC and the send/recv Shannon keys from the raw
/// shared secret and the exact transcript bytes (client hello followed by
/// server hello) exchanged during the handshake.  Mirrors the key schedule
/// used by the AP: five HMAC-SHA1 blocks keyed by the shared secret are
/// concatenated, the first twenty bytes become a second HMAC key whose
/// digest over the same transcript is the challenge, and the remaining
/// bytes split into the send and recv keys.
pub fn compute_keys(
    shared_secret: &[u8],
    client_hello_bytes: &[u8],
    server_hello_bytes: &[u8],
) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut data = Vec::with_capacity(0x64);
    for i in 1..6 {
        let mut mac: Hmac<Sha1> =
            Hmac::new_from_slice(shared_secret).expect("HMAC can take key of any size");
        mac.update(client_hello_bytes);
        mac.update(server_hello_bytes);
        mac.update(&[i]);
        data.extend_from_slice(&mac.finalize().into_bytes());
    }

    let mut challenge_mac: Hmac<Sha1> =
        Hmac::new_from_slice(&data[..0x14]).expect("HMAC can take key of any size");
    challenge_mac.update(client_hello_bytes);
    challenge_mac.update(server_hello_bytes);
    let challenge = challenge_mac.finalize().into_bytes();

    (
        challenge.to_vec(),
        data[0x14..0x34].to_vec(),
        data[0x34..0x54].to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_secret_is_symmetric() {
        let alice = DHLocalKeys::random();
        let bob = DHLocalKeys::random();

        let alice_shared = alice.shared_secret(&bob.public_key());
        let bob_shared = bob.shared_secret(&alice.public_key());

        assert_eq!(alice_shared, bob_shared);
    }

    #[test]
    fn compute_keys_is_deterministic() {
        let shared = vec![1, 2, 3, 4];
        let hello = b"client-hello".to_vec();
        let response = b"server-hello".to_vec();

        let a = compute_keys(&shared, &hello, &response);
        let b = compute_keys(&shared, &hello, &response);

        assert_eq!(a, b);
        assert_eq!(a.0.len(), 20);
        assert_eq!(a.1.len(), 32);
        assert_eq!(a.2.len(), 32);
    }
}
