#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum CanError {
    #[error("RUST-CAN - device configuration error {0}")]
    DeviceConfigError(String),

    #[error("RUST-CAN - data length: {0} is too large")]
    DataOutOfRange(usize),

    #[error("RUST-CAN - operation error: {0}")]
    OperationError(String),

    #[error("RUST-CAN - frame convert failed, reason: {0}")]
    FrameConvertFailed(String),

    #[error("RUST-CAN - other error: {0}")]
    OtherError(String),
}

impl CanError {
    #[inline]
    pub fn other_error<T: Into<String>>(msg: T) -> Self {
        Self::OtherError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::CanError;

    #[test]
    fn test_display() {
        assert_eq!(
            CanError::DataOutOfRange(9).to_string(),
            "RUST-CAN - data length: 9 is too large"
        );
        assert_eq!(
            CanError::other_error("type mismatched"),
            CanError::OtherError("type mismatched".into())
        );
    }
}
