/// Error type for MlpNN
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Indicates some dimension is incorrect in a Matrix operation.
    DimensionErr,
    /// Reading or writing a model file failed.
    IoErr(std::io::ErrorKind),
    /// The file being loaded does not start with the model magic bytes.
    BadMagic,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoErr(err.kind())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
