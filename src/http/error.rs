use std::fmt;
use std::convert::From;

#[derive(Debug)]
pub struct MessageError(String);

impl std::error::Error for MessageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

type BoxDynError = Box<dyn std::error::Error + Send + Sync>;

/// a request level error. carries the status and name that will be sent
/// back to the client along with an optional internal source.
#[derive(Debug)]
pub struct Error {
    status: u16,
    name: String,
    message: String,
    source: Option<BoxDynError>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn new<N,M>(status: u16, name: N, msg: M) -> Error
    where
        N: Into<String>,
        M: Into<String>
    {
        Error { status, name: name.into(), message: msg.into(), source: None }
    }

    pub fn with_source<T>(source: T) -> Error
    where
        T: Into<BoxDynError>
    {
        let mut rtn = Self::default();
        rtn.source = Some(source.into());
        rtn
    }

    pub fn status_ref(&self) -> &u16 {
        &self.status
    }

    pub fn name_str(&self) -> &str {
        &self.name
    }

    pub fn message_str(&self) -> &str {
        &self.message
    }
}

impl Default for Error {
    fn default() -> Error {
        Error {
            status: 500,
            name: "InternalServerError".to_owned(),
            message: "server error when responding to request".to_owned(),
            source: None
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)?;

        if let Some(err) = &self.source {
            write!(f, "\n{}", err)?;
        }

        Ok(())
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Self::with_source(MessageError(msg.to_owned()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::with_source(error)
    }
}

impl From<hyper::http::Error> for Error {
    fn from(error: hyper::http::Error) -> Self {
        Self::with_source(error)
    }
}
