use psst_core::{
    connection::Credentials,
    error::Error,
    session::{SessionConfig, SessionService},
    system_info::DEVICE_ID,
};
use std::env;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("login failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let login_creds = Credentials::from_username_and_password(
        env::var("SPOTIFY_USERNAME").expect("SPOTIFY_USERNAME not set"),
        env::var("SPOTIFY_PASSWORD").expect("SPOTIFY_PASSWORD not set"),
    );

    let session = SessionService::with_config(SessionConfig {
        login_creds,
        device_id: DEVICE_ID.to_string(),
        device_name: "psst-cli".to_string(),
        proxy_url: env::var("SPOTIFY_PROXY").ok(),
    });

    let handle = session.connected()?;
    println!("connected, country code: {:?}", handle.get_country_code());

    let bytes = handle.get_mercury_bytes("hm://remote/profile".to_string())?;
    println!("fetched {} bytes from the mercury profile endpoint", bytes.len());

    session.shutdown();
    Ok(())
}
