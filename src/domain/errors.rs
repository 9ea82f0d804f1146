#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("input stream closed while reading {0}")]
    InputClosed(&'static str),
}
