use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("expected at least {expected} facial landmarks, got {got}")]
    FaceLandmarkCount { expected: usize, got: usize },

    #[error("expected exactly {expected} hand landmarks, got {got}")]
    HandLandmarkCount { expected: usize, got: usize },

    #[error("frame buffer holds {got} pixels but {width}x{height} needs {expected}")]
    FrameSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        got: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
