
#[derive(Debug, Clone)]
pub enum Error {
    ArgumentError(String),
    Solver(String),
    Plot(String),
    IO(String)
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::IO(format!("{}", e))
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(e: std::num::ParseFloatError) -> Error {
        Error::ArgumentError(format!("{}", e))
    }
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for Error
    where E: std::error::Error + Send + Sync
{
    fn from(e: plotters::drawing::DrawingAreaErrorKind<E>) -> Error {
        Error::Plot(format!("{}", e))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::ArgumentError(msg) => write!(f, "invalid argument: {}", msg),
            Error::Solver(msg) => write!(f, "solver failed: {}", msg),
            Error::Plot(msg) => write!(f, "plotting failed: {}", msg),
            Error::IO(msg) => write!(f, "io error: {}", msg)
        }
    }
}

impl std::error::Error for Error {}
