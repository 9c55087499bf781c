use std::fmt;

pub mod packet;
pub mod parser;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Parse(nom::error::Error<String>),
    UnpairedPacket(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "failed to read input: {}", e),
            Error::Parse(e) => write!(f, "malformed packet input: {}", e),
            Error::UnpairedPacket(count) => {
                write!(f, "odd number of packets ({}), cannot group into pairs", count)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::UnpairedPacket(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}
