use std::{
    io,
    net::{Shutdown, TcpStream},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
};

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use quick_protobuf::MessageRead;
use serde::de::DeserializeOwned;

use crate::{
    connection::{
        shannon_codec::{ShannonDecoder, ShannonEncoder, ShannonMsg},
        Credentials, Transport,
    },
    error::Error,
    mercury::{MercuryDispatcher, MercuryRequest, MercuryResponse},
    util::deserialize_protobuf,
};

/// Configuration values needed to open the session connection.
#[derive(Clone)]
pub struct SessionConfig {
    pub login_creds: Credentials,
    pub device_id: String,
    pub device_name: String,
    pub proxy_url: Option<String>,
}

/// Cheap to clone, shareable service handle that holds the active session
/// worker.  Session connection is lazily opened in `connected()`, using config
/// values set in `update_config()`.  In case the session dies or is explicitly
/// shut down, worker is disposed of, and a new session is opened on the next
/// request.
#[derive(Clone)]
pub struct SessionService {
    connected: Arc<Mutex<Option<SessionWorker>>>,
    config: Arc<Mutex<Option<SessionConfig>>>,
}

impl SessionService {
    /// Create a new session service without any configuration.  To open a
    /// session, a config needs to be set up first using `update_config`.
    pub fn empty() -> Self {
        Self {
            connected: Arc::default(),
            config: Arc::default(),
        }
    }

    /// Create a new session service with pre-set configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            connected: Arc::default(),
            config: Arc::new(Mutex::new(Some(config))),
        }
    }

    /// Replace the active session config.  If a session is already connected,
    /// shut it down and wait until it's terminated.
    pub fn update_config(&self, config: SessionConfig) {
        self.config.lock().replace(config);
        self.shutdown();
    }

    /// Returns true if a session worker is actively servicing the connected
    /// session.  We return false here after any case of I/O errors or an
    /// explicit session shutdown.
    pub fn is_connected(&self) -> bool {
        matches!(self.connected.lock().as_ref(), Some(worker) if !worker.has_terminated())
    }

    /// Return a handle for the connected session.  In case no connection is
    /// open, *synchronously* connect, start the worker and keep it as active.
    /// Although a lock is held for the whole duration of connection setup,
    /// `SessionConnection::open` has an internal timeout, and should give up in
    /// a timely manner.
    pub fn connected(&self) -> Result<SessionHandle, Error> {
        let mut connected = self.connected.lock();
        let is_connected_and_not_terminated =
            matches!(connected.as_ref(), Some(worker) if !worker.has_terminated());
        if !is_connected_and_not_terminated {
            let connection = SessionConnection::open(
                self.config
                    .lock()
                    .as_ref()
                    .ok_or(Error::SessionDisconnected)?
                    .clone(),
            )?;
            let worker = SessionWorker::run(connection);
            connected.replace(worker);
        }
        connected
            .as_ref()
            .map(SessionWorker::handle)
            .ok_or(Error::SessionDisconnected)
    }

    /// Signal a shutdown to the active worker and wait until it terminates.
    pub fn shutdown(&self) {
        if let Some(worker) = self.connected.lock().take() {
            worker.handle().request_shutdown();
            worker.join();
        }
    }
}

/// Successful connection through the Spotify Shannon-encrypted TCP channel.
pub struct SessionConnection {
    /// Credentials re-usable in the next authentication (i.e. username and
    /// password are not required anymore).
    pub credentials: Credentials,
    /// I/O codec for the Shannon messages.
    pub transport: Transport,
    /// The one packet the AP sent right after `AP_WELCOME`, not yet run
    /// through cmd-table dispatch.
    primed_msg: ShannonMsg,
}

impl SessionConnection {
    /// Synchronously connect to the Spotify servers and authenticate with
    /// credentials provided in `config`.
    pub fn open(config: SessionConfig) -> Result<Self, Error> {
        // Connect to the server and exchange keys.
        let proxy_url = config.proxy_url.as_deref();
        let ap_url = Transport::resolve_ap_with_fallback(proxy_url);
        let mut transport = Transport::connect(&ap_url, proxy_url)?;
        // Authenticate with provided credentials (either username/password, or saved,
        // reusable credential blob from an earlier run).
        let (credentials, primed_msg) =
            transport.authenticate(config.login_creds, &config.device_id)?;
        Ok(Self {
            credentials,
            transport,
            primed_msg,
        })
    }
}

pub struct SessionWorker {
    sender: Sender<DispatchCmd>,
    decoding_thread: JoinHandle<()>,
    encoding_thread: JoinHandle<()>,
    dispatching_thread: JoinHandle<()>,
    terminated: Arc<AtomicBool>,
}

impl SessionWorker {
    pub fn run(connection: SessionConnection) -> Self {
        let SessionConnection {
            transport,
            primed_msg,
            ..
        } = connection;
        let mut encoder = transport.encoder;

        // Run the priming packet through the same cmd-table dispatch logic
        // used once the background threads are live, replying synchronously
        // over `encoder` so the cipher is exercised in both directions
        // before concurrent access to it begins.
        let mut dispatch_state = DispatchState::new();
        if let Some(reply) = dispatch_state.handle_decoded(primed_msg) {
            if let Err(err) = encoder.encode(reply) {
                log::error!("failed to reply to priming message: {:?}", err);
            }
        }

        let (disp_send, disp_recv) = unbounded();
        let (msg_send, msg_recv) = unbounded();
        let terminated = Arc::new(AtomicBool::new(false));
        Self {
            decoding_thread: {
                let decoder = transport.decoder;
                let disp_send = disp_send.clone();
                thread::spawn(move || decode_shannon_messages(decoder, disp_send))
            },
            encoding_thread: {
                let disp_send = disp_send.clone();
                thread::spawn(move || encode_shannon_messages(encoder, msg_recv, disp_send))
            },
            dispatching_thread: {
                let stream = transport.stream;
                let terminated = terminated.clone();
                thread::spawn(move || {
                    dispatch_messages(disp_recv, msg_send, stream, dispatch_state);
                    terminated.store(true, Ordering::SeqCst);
                })
            },
            sender: disp_send,
            terminated,
        }
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            sender: self.sender.clone(),
        }
    }

    pub fn join(self) {
        if let Err(err) = self.dispatching_thread.join() {
            log::error!("session dispatching thread panicked: {:?}", err);
        }
        if let Err(err) = self.encoding_thread.join() {
            log::error!("session encoding thread panicked: {:?}", err);
        }
        if let Err(err) = self.decoding_thread.join() {
            log::error!("session decoding thread panicked: {:?}", err);
        }
    }

    pub fn has_terminated(&self) -> bool {
        self.terminated.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
pub struct SessionHandle {
    sender: Sender<DispatchCmd>,
}

impl SessionHandle {
    pub fn get_mercury_protobuf<T>(&self, uri: String) -> Result<T, Error>
    where
        T: MessageRead<'static>,
    {
        let payload = self.get_mercury_bytes(uri)?;
        let message = deserialize_protobuf(&payload)?;
        Ok(message)
    }

    pub fn get_mercury_json<T>(&self, uri: String) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let payload = self.get_mercury_bytes(uri)?;
        let message = serde_json::from_slice(&payload)?;
        Ok(message)
    }

    pub fn get_mercury_bytes(&self, uri: String) -> Result<Vec<u8>, Error> {
        let (callback, receiver) = unbounded();
        let request = MercuryRequest::get(uri);
        self.sender
            .send(DispatchCmd::MercuryReq { callback, request })
            .ok()
            .ok_or(Error::SessionDisconnected)?;
        let response = receiver.recv().ok().ok_or(Error::SessionDisconnected)?;
        let first_part = response
            .payload
            .into_iter()
            .next()
            .ok_or(Error::UnexpectedResponse)?;
        Ok(first_part)
    }

    pub fn get_country_code(&self) -> Option<String> {
        let (callback, receiver) = unbounded();
        self.sender
            .send(DispatchCmd::CountryCodeReq { callback })
            .ok()?;
        receiver.recv().ok()?
    }

    pub fn request_shutdown(&self) {
        let _ = self.sender.send(DispatchCmd::Shutdown);
    }
}

/// Read Shannon messages from the TCP stream one by one and send them to
/// dispatcher for further processing.  In case the decoding fails with an error
/// (this happens also in case we explicitly shutdown the connection), report
/// the error to the dispatcher and quit.  If the dispatcher has already dropped
/// its receiving part, quit silently as well.
fn decode_shannon_messages(mut decoder: ShannonDecoder<TcpStream>, dispatch: Sender<DispatchCmd>) {
    loop {
        match decoder.decode() {
            Ok(msg) => {
                if dispatch.send(DispatchCmd::DecodedMsg(msg)).is_err() {
                    break;
                }
            }
            Err(err) => {
                let _ = dispatch.send(DispatchCmd::DecoderError(err));
                break;
            }
        };
    }
}

/// Receive Shannon messages from `messages` and encode them into the TCP stream
/// through `encoder`.  In case the encoding fails with an error (this happens
/// also in case we explicitly shutdown the connection), report the error to the
/// dispatcher and quit.  If the dispatcher has already dropped the
/// corresponding sender of `messages`, quit as well.
fn encode_shannon_messages(
    mut encoder: ShannonEncoder<TcpStream>,
    messages: Receiver<ShannonMsg>,
    dispatch: Sender<DispatchCmd>,
) {
    for msg in messages {
        match encoder.encode(msg) {
            Ok(_) => {
                // Message encoded, continue.
            }
            Err(err) => {
                let _ = dispatch.send(DispatchCmd::EncoderError(err));
                break;
            }
        }
    }
}

enum DispatchCmd {
    MercuryReq {
        request: MercuryRequest,
        callback: Sender<MercuryResponse>,
    },
    CountryCodeReq {
        callback: Sender<Option<String>>,
    },
    DecodedMsg(ShannonMsg),
    DecoderError(io::Error),
    EncoderError(io::Error),
    Shutdown,
}

/// The cmd-table dispatch state shared between the priming read in
/// `SessionWorker::run` and the steady-state dispatching thread: the mercury
/// multiplexer and the last country code seen on the wire.
struct DispatchState {
    mercury: MercuryDispatcher,
    country_code: Option<String>,
}

impl DispatchState {
    fn new() -> Self {
        Self {
            mercury: MercuryDispatcher::new(),
            country_code: None,
        }
    }

    /// Handle one decoded message per the cmd table, returning a reply to
    /// write back over the wire, if the cmd calls for one.
    fn handle_decoded(&mut self, msg: ShannonMsg) -> Option<ShannonMsg> {
        match msg.cmd {
            ShannonMsg::PING => Some(ShannonMsg::new(ShannonMsg::PONG, msg.payload)),
            ShannonMsg::COUNTRY_CODE => {
                match parse_country_code(msg) {
                    Ok(code) => self.country_code = Some(code),
                    Err(err) => log::warn!("invalid country code message: {:?}", err),
                }
                None
            }
            cmd if (0xb2..=0xb6).contains(&cmd) => {
                self.mercury.handle(msg);
                None
            }
            cmd => {
                log::debug!("ignored message: {:#x}", cmd);
                None
            }
        }
    }
}

fn dispatch_messages(
    dispatch: Receiver<DispatchCmd>,
    messages: Sender<ShannonMsg>,
    stream: TcpStream,
    mut state: DispatchState,
) {
    for disp in dispatch {
        match disp {
            DispatchCmd::MercuryReq { request, callback } => {
                let msg = state.mercury.enqueue_request(request, callback);
                let _ = messages.send(msg);
            }
            DispatchCmd::CountryCodeReq { callback } => {
                let _ = callback.send(state.country_code.clone());
            }
            DispatchCmd::DecodedMsg(msg) => {
                if let Some(reply) = state.handle_decoded(msg) {
                    let _ = messages.send(reply);
                }
            }
            DispatchCmd::DecoderError(err) => {
                log::error!("connection error: {:?}", err);
                let _ = stream.shutdown(Shutdown::Write);
                break;
            }
            DispatchCmd::EncoderError(err) => {
                log::error!("connection error: {:?}", err);
                let _ = stream.shutdown(Shutdown::Read);
                break;
            }
            DispatchCmd::Shutdown => {
                log::info!("connection shutdown");
                let _ = stream.shutdown(Shutdown::Both);
                break;
            }
        }
    }
}

fn parse_country_code(msg: ShannonMsg) -> Result<String, Error> {
    String::from_utf8(msg.payload)
        .ok()
        .ok_or(Error::UnexpectedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_dispatch_echoes_payload() {
        let mut state = DispatchState::new();
        let ping = ShannonMsg::new(ShannonMsg::PING, vec![0xde, 0xad, 0xbe, 0xef]);
        let reply = state.handle_decoded(ping).expect("ping should get a reply");
        assert_eq!(reply.cmd, ShannonMsg::PONG);
        assert_eq!(reply.payload, vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn country_code_parses_ascii_payload() {
        let msg = ShannonMsg::new(ShannonMsg::COUNTRY_CODE, b"US".to_vec());
        assert_eq!(parse_country_code(msg).unwrap(), "US");
    }

    #[test]
    fn country_code_dispatch_updates_state() {
        let mut state = DispatchState::new();
        let msg = ShannonMsg::new(ShannonMsg::COUNTRY_CODE, b"US".to_vec());
        assert!(state.handle_decoded(msg).is_none());
        assert_eq!(state.country_code.as_deref(), Some("US"));
    }
}
