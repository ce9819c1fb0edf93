use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Midtrans server key is required to build a client")]
    MissingServerKey,
    #[error("Midtrans Snap API responded with status {status}: {}", messages.join(", "))]
    Api { status: u16, messages: Vec<String> },
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}
