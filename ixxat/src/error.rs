use rs_can::CanError;

#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClassifyError {
    #[error("IXXAT - invalid frame: message type {message_type} carries unknown code {code}")]
    InvalidFrame { message_type: u8, code: u8 },
    #[error("IXXAT - unknown message type: {0}")]
    UnknownMessageType(u8),
}

impl From<ClassifyError> for CanError {
    fn from(e: ClassifyError) -> Self {
        CanError::FrameConvertFailed(e.to_string())
    }
}
