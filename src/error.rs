use crate::crs::Crs;
use crate::point::Axis;

/// Alias for a `Result<T, geofmt::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by this crate.
#[derive(Debug)]
pub struct Error {
    pub err: Box<ErrorKind>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Error {
    /// Returns a error kind.
    pub fn kind(&self) -> &ErrorKind {
        &self.err
    }
}

impl Error {
    pub(crate) fn new_projection(src: Crs, dst: Crs) -> Self {
        Self {
            err: Box::new(ErrorKind::Projection { src, dst }),
        }
    }

    pub(crate) fn new_nan_position(axis: Axis) -> Self {
        Self {
            err: Box::new(ErrorKind::NanPosition { axis }),
        }
    }

    pub(crate) fn new_out_of_range_position(axis: Axis, low: f64, high: f64) -> Self {
        Self {
            err: Box::new(ErrorKind::OutOfRangePosition { axis, low, high }),
        }
    }
}

#[derive(Debug)]
pub enum ErrorKind {
    /// The external projection engine rejected a transformation.
    Projection {
        /// Source coordinate reference system
        src: Crs,
        /// Target coordinate reference system
        dst: Crs,
    },
    /// NAN latitude or longitude.
    NanPosition {
        /// The offending axis
        axis: Axis,
    },
    /// Latitude or longitude outside its legal range.
    OutOfRangePosition {
        /// The offending axis
        axis: Axis,
        /// Lower bound of the legal range
        low: f64,
        /// Upper bound of the legal range
        high: f64,
    },
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ErrorKind::Projection { src, dst } => {
                write!(f, "projection failed: {src:?} to {dst:?}")
            }
            ErrorKind::NanPosition { axis } => write!(f, "invalid {axis}: NAN"),
            ErrorKind::OutOfRangePosition { axis, low, high } => {
                write!(f, "invalid {axis}: must satisfy {low:?} <= and <= {high:?}")
            }
        }
    }
}
