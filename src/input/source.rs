use std::io::{BufReader, Cursor, ErrorKind, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::input::InputError;

pub fn read_local(path: &Path) -> Result<Vec<u8>, InputError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::MissingInput(format!(
            "dataset file not found: {}",
            path.display()
        ))),
        Err(e) => Err(InputError::Io(e)),
    }
}

pub fn gunzip_reader(bytes: Vec<u8>) -> impl Read {
    BufReader::new(GzDecoder::new(Cursor::new(bytes)))
}
