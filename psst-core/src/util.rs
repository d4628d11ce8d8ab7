use crate::error::Error;
use num_traits::{One, WrappingAdd};
use quick_protobuf::{BytesReader, MessageRead, MessageWrite, Writer};
use std::{mem, time::Duration};

pub const NET_CONNECT_TIMEOUT: Duration = Duration::from_millis(8 * 1000);

pub const NET_IO_TIMEOUT: Duration = Duration::from_millis(16 * 1000);

pub fn default_ureq_agent_builder(
    proxy_url: Option<&str>,
) -> ureq::config::ConfigBuilder<ureq::typestate::AgentScope> {
    let mut agent = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(5)))
        .timeout_connect(Some(NET_CONNECT_TIMEOUT))
        .timeout_recv_response(Some(NET_IO_TIMEOUT))
        .timeout_send_request(Some(NET_IO_TIMEOUT));

    if let Some(proxy_url) = proxy_url {
        let proxy = ureq::Proxy::new(proxy_url).ok();
        agent = agent.proxy(proxy);
    }

    agent
}

/// A monotonically advancing counter, used for the mercury request sequence
/// number and the per-packet cipher nonce.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Sequence<T>(T);

impl<T: One + WrappingAdd> Sequence<T> {
    pub fn new(value: T) -> Self {
        Sequence(value)
    }

    pub fn advance(&mut self) -> T {
        let next = self.0.wrapping_add(&T::one());
        mem::replace(&mut self.0, next)
    }
}

pub fn serialize_protobuf<T>(msg: &T) -> Result<Vec<u8>, Error>
where
    T: MessageWrite,
{
    let mut buf = Vec::with_capacity(msg.get_size());
    let mut writer = Writer::new(&mut buf);
    msg.write_message(&mut writer)?;
    Ok(buf)
}

pub fn deserialize_protobuf<T>(buf: &[u8]) -> Result<T, Error>
where
    T: MessageRead<'static>,
{
    let mut reader = BytesReader::from_bytes(buf);
    let msg = {
        let static_buf: &'static [u8] = unsafe {
            // Sigh.  While `quick-protobuf` supports `--owned` variations of messages, they
            // are not compatible with `--dont_use_cow` flag, which, by itself, is already
            // producing messages that fully own their fields.  Therefore, we can pretend
            // the byte slice is static, because `msg` does not retain it.
            std::mem::transmute(buf)
        };
        T::from_reader(&mut reader, static_buf)?
    };
    Ok(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps_and_advances() {
        let mut seq: Sequence<u8> = Sequence::new(254);
        assert_eq!(seq.advance(), 254);
        assert_eq!(seq.advance(), 255);
        assert_eq!(seq.advance(), 0);
    }
}
