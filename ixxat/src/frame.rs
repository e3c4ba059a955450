use std::fmt::{Display, Formatter};
use rs_can::{CanError, CAN_FRAME_MAX_SIZE, ZERO_PADDING};
use crate::bus::BusState;
use crate::constant::*;
use crate::error::ClassifyError;

#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MessageType {
    Data = CAN_MSGTYPE_DATA,
    Info = CAN_MSGTYPE_INFO,
    Error = CAN_MSGTYPE_ERROR,
    Status = CAN_MSGTYPE_STATUS,
    Wakeup = CAN_MSGTYPE_WAKEUP,
    TimeOverrun = CAN_MSGTYPE_TIMEOVR,
    TimerReset = CAN_MSGTYPE_TIMERST,
}

impl TryFrom<u8> for MessageType {
    type Error = ClassifyError;
    fn try_from(value: u8) -> Result<Self, ClassifyError> {
        match value {
            CAN_MSGTYPE_DATA => Ok(MessageType::Data),
            CAN_MSGTYPE_INFO => Ok(MessageType::Info),
            CAN_MSGTYPE_ERROR => Ok(MessageType::Error),
            CAN_MSGTYPE_STATUS => Ok(MessageType::Status),
            CAN_MSGTYPE_WAKEUP => Ok(MessageType::Wakeup),
            CAN_MSGTYPE_TIMEOVR => Ok(MessageType::TimeOverrun),
            CAN_MSGTYPE_TIMERST => Ok(MessageType::TimerReset),
            v => Err(ClassifyError::UnknownMessageType(v)),
        }
    }
}

/// Sub-reason of an info frame, a closed set defined by the driver.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InfoReason {
    Start = CAN_INFO_START,
    Stop = CAN_INFO_STOP,
    Reset = CAN_INFO_RESET,
}

impl TryFrom<u8> for InfoReason {
    type Error = ClassifyError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            CAN_INFO_START => Ok(Self::Start),
            CAN_INFO_STOP => Ok(Self::Stop),
            CAN_INFO_RESET => Ok(Self::Reset),
            code => Err(ClassifyError::InvalidFrame { message_type: CAN_MSGTYPE_INFO, code }),
        }
    }
}

/// Sub-reason of an error frame.
///
/// Code 5 is not assigned by the driver. It decodes as [`ErrorReason::Other`]
/// like every other unrecognised code, with the raw value kept.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorReason {
    Stuff,
    Form,
    Ack,
    Bit,
    Crc,
    Other(u8),
}

impl ErrorReason {
    #[inline]
    pub fn code(&self) -> u8 {
        match self {
            Self::Stuff => CAN_ERROR_STUFF,
            Self::Form => CAN_ERROR_FORM,
            Self::Ack => CAN_ERROR_ACK,
            Self::Bit => CAN_ERROR_BIT,
            Self::Crc => CAN_ERROR_CRC,
            Self::Other(v) => *v,
        }
    }
}

impl From<u8> for ErrorReason {
    fn from(value: u8) -> Self {
        match value {
            CAN_ERROR_STUFF => Self::Stuff,
            CAN_ERROR_FORM => Self::Form,
            CAN_ERROR_ACK => Self::Ack,
            CAN_ERROR_BIT => Self::Bit,
            CAN_ERROR_CRC => Self::Crc,
            v => Self::Other(v),
        }
    }
}

impl Display for ErrorReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stuff => f.write_str("stuff error"),
            Self::Form => f.write_str("form error"),
            Self::Ack => f.write_str("acknowledgment error"),
            Self::Bit => f.write_str("bit error"),
            Self::Crc => f.write_str("CRC error"),
            Self::Other(v) => write!(f, "other error ({})", v),
        }
    }
}

/// A message record as the driver delivers it.
///
/// The tag is kept raw so an unknown one can still be reported by [`classify`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FrameRecord {
    message_type: u8,
    payload: [u8; CAN_FRAME_MAX_SIZE],
}

impl FrameRecord {
    /// `data` shorter than the payload buffer is padded with zeros.
    pub fn new(message_type: u8, data: &[u8]) -> Result<Self, CanError> {
        let length = data.len();
        if length > CAN_FRAME_MAX_SIZE {
            return Err(CanError::DataOutOfRange(length));
        }

        let mut payload = [ZERO_PADDING; CAN_FRAME_MAX_SIZE];
        payload[..length].copy_from_slice(data);
        Ok(Self { message_type, payload })
    }

    #[inline]
    pub fn from_raw(message_type: u8, payload: [u8; CAN_FRAME_MAX_SIZE]) -> Self {
        Self { message_type, payload }
    }

    #[inline]
    pub fn message_type(&self) -> u8 {
        self.message_type
    }

    #[inline]
    pub fn payload(&self) -> &[u8; CAN_FRAME_MAX_SIZE] {
        &self.payload
    }

    #[inline]
    pub fn classify(&self) -> Result<Classification, ClassifyError> {
        classify(self)
    }
}

/// What a [`FrameRecord`] means.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Classification {
    Data([u8; CAN_FRAME_MAX_SIZE]),
    Info(InfoReason),
    Error(ErrorReason),
    Status(BusState),
    Wakeup,
    TimeOverrun,
    TimerReset,
}

impl Classification {
    pub fn message_type(&self) -> MessageType {
        match self {
            Self::Data(_) => MessageType::Data,
            Self::Info(_) => MessageType::Info,
            Self::Error(_) => MessageType::Error,
            Self::Status(_) => MessageType::Status,
            Self::Wakeup => MessageType::Wakeup,
            Self::TimeOverrun => MessageType::TimeOverrun,
            Self::TimerReset => MessageType::TimerReset,
        }
    }
}

/// Info codes and message types are closed sets, an unknown value fails.
/// Error sub-codes and status bits decode leniently.
pub fn classify(record: &FrameRecord) -> Result<Classification, ClassifyError> {
    let code = record.payload[0];
    match MessageType::try_from(record.message_type)? {
        MessageType::Data => Ok(Classification::Data(record.payload)),
        MessageType::Info => Ok(Classification::Info(InfoReason::try_from(code)?)),
        MessageType::Error => Ok(Classification::Error(ErrorReason::from(code))),
        MessageType::Status => Ok(Classification::Status(BusState::decode(code))),
        MessageType::Wakeup => Ok(Classification::Wakeup),
        MessageType::TimeOverrun => Ok(Classification::TimeOverrun),
        MessageType::TimerReset => Ok(Classification::TimerReset),
    }
}

/// Classifies a batch, dropping the records that fail.
pub fn classify_all<'a, I>(records: I) -> Vec<Classification>
where
    I: IntoIterator<Item = &'a FrameRecord>,
{
    records.into_iter()
        .filter_map(|r| match classify(r) {
            Ok(v) => Some(v),
            Err(e) => {
                log::debug!("{} - frame dropped", e);
                None
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info() {
        let record = FrameRecord::new(CAN_MSGTYPE_INFO, &[CAN_INFO_START]).unwrap();
        assert_eq!(record.classify(), Ok(Classification::Info(InfoReason::Start)));

        let record = FrameRecord::new(CAN_MSGTYPE_INFO, &[9]).unwrap();
        assert_eq!(
            record.classify(),
            Err(ClassifyError::InvalidFrame { message_type: CAN_MSGTYPE_INFO, code: 9 })
        );
    }

    #[test]
    fn test_error_gap_code() {
        let record = FrameRecord::new(CAN_MSGTYPE_ERROR, &[5]).unwrap();
        assert_eq!(record.classify(), Ok(Classification::Error(ErrorReason::Other(5))));

        let record = FrameRecord::new(CAN_MSGTYPE_ERROR, &[CAN_ERROR_OTHER]).unwrap();
        assert_eq!(record.classify(), Ok(Classification::Error(ErrorReason::Other(7))));

        let record = FrameRecord::new(CAN_MSGTYPE_ERROR, &[CAN_ERROR_CRC]).unwrap();
        assert_eq!(record.classify(), Ok(Classification::Error(ErrorReason::Crc)));
    }

    #[test]
    fn test_unknown_type() {
        let record = FrameRecord::new(99, &[]).unwrap();
        assert_eq!(record.classify(), Err(ClassifyError::UnknownMessageType(99)));

        let err: CanError = ClassifyError::UnknownMessageType(99).into();
        assert_eq!(
            err,
            CanError::FrameConvertFailed("IXXAT - unknown message type: 99".into())
        );
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(FrameRecord::new(CAN_MSGTYPE_DATA, &[0; 9]), Err(CanError::DataOutOfRange(9)));
        let record = FrameRecord::new(CAN_MSGTYPE_DATA, &[0x11, 0x22]).unwrap();
        assert_eq!(record.payload(), &[0x11, 0x22, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_signal_only_types() {
        for (tag, expect) in [
            (CAN_MSGTYPE_WAKEUP, Classification::Wakeup),
            (CAN_MSGTYPE_TIMEOVR, Classification::TimeOverrun),
            (CAN_MSGTYPE_TIMERST, Classification::TimerReset),
        ] {
            let record = FrameRecord::from_raw(tag, [0xFF; CAN_FRAME_MAX_SIZE]);
            assert_eq!(record.classify(), Ok(expect));
            assert_eq!(expect.message_type() as u8, tag);
        }
    }
}
