use std::fmt::{Display, Formatter};
use rs_can::CanError;
use crate::constant::{
    CUSTOMER_FLAG, FACILITY_MASK, FACILITY_SHIFT, RESERVED_FLAG, SEV_ERROR, SEV_INFO, SEV_MASK,
    SEV_SUCCESS, SEV_VCI_ERROR, SEV_WARN, STATUS_MASK,
};

/// Coarse outcome of a driver call, the top two bits of a return word.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    #[inline]
    pub fn from_bits(raw: u32) -> Self {
        match raw & SEV_MASK {
            SEV_SUCCESS => Self::Success,
            SEV_INFO => Self::Info,
            SEV_WARN => Self::Warning,
            _ => Self::Error,
        }
    }

    #[inline]
    pub fn bits(&self) -> u32 {
        match self {
            Self::Success => SEV_SUCCESS,
            Self::Info => SEV_INFO,
            Self::Warning => SEV_WARN,
            Self::Error => SEV_ERROR,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Info => f.write_str("info"),
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Driver layer that produced a return word.
///
/// New facilities may appear in later driver releases, so an unknown id is
/// kept as [`Facility::Unknown`] instead of being rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Facility {
    Std,
    Vci,
    Dal,
    Ccl,
    Bal,
    Unknown(u16),
}

impl Facility {
    #[inline]
    pub fn from_bits(raw: u32) -> Self {
        match ((raw & FACILITY_MASK) >> FACILITY_SHIFT) as u16 {
            0x0000 => Self::Std,
            0x0001 => Self::Vci,
            0x0002 => Self::Dal,
            0x0003 => Self::Ccl,
            0x0004 => Self::Bal,
            v => Self::Unknown(v),
        }
    }

    /// The 12-bit facility id.
    #[inline]
    pub fn id(&self) -> u16 {
        match self {
            Self::Std => 0x0000,
            Self::Vci => 0x0001,
            Self::Dal => 0x0002,
            Self::Ccl => 0x0003,
            Self::Bal => 0x0004,
            Self::Unknown(v) => *v,
        }
    }

    #[inline]
    pub fn bits(&self) -> u32 {
        ((self.id() as u32) << FACILITY_SHIFT) & FACILITY_MASK
    }
}

impl Display for Facility {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Std => f.write_str("STD"),
            Self::Vci => f.write_str("VCI"),
            Self::Dal => f.write_str("DAL"),
            Self::Ccl => f.write_str("CCL"),
            Self::Bal => f.write_str("BAL"),
            Self::Unknown(v) => write!(f, "facility 0x{:03X}", v),
        }
    }
}

/// Named error codes of the VCI facility.
#[repr(u16)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VciError {
    Unexpected = 0x0001,
    NotImplemented = 0x0002,
    OutOfMemory = 0x0003,
    InvalidArg = 0x0004,
    NoInterface = 0x0005,
    InvalidPointer = 0x0006,
    InvalidHandle = 0x0007,
    Abort = 0x0008,
    Fail = 0x0009,
    AccessDenied = 0x000A,
    Timeout = 0x000B,
    Busy = 0x000C,
    Pending = 0x000D,
    NoData = 0x000E,
    NoMoreItems = 0x000F,
    NotInitialized = 0x0010,
    AlreadyInitialized = 0x0011,
    RxQueueEmpty = 0x0012,
    TxQueueFull = 0x0013,
    BufferOverflow = 0x0014,
    InvalidState = 0x0015,
    ObjectAlreadyExists = 0x0016,
    InvalidIndex = 0x0017,
    EndOfFile = 0x0018,
    Disconnected = 0x0019,
    WrongFlashFwVersion = 0x001A,
}

impl VciError {
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            0x0001 => Some(Self::Unexpected),
            0x0002 => Some(Self::NotImplemented),
            0x0003 => Some(Self::OutOfMemory),
            0x0004 => Some(Self::InvalidArg),
            0x0005 => Some(Self::NoInterface),
            0x0006 => Some(Self::InvalidPointer),
            0x0007 => Some(Self::InvalidHandle),
            0x0008 => Some(Self::Abort),
            0x0009 => Some(Self::Fail),
            0x000A => Some(Self::AccessDenied),
            0x000B => Some(Self::Timeout),
            0x000C => Some(Self::Busy),
            0x000D => Some(Self::Pending),
            0x000E => Some(Self::NoData),
            0x000F => Some(Self::NoMoreItems),
            0x0010 => Some(Self::NotInitialized),
            0x0011 => Some(Self::AlreadyInitialized),
            0x0012 => Some(Self::RxQueueEmpty),
            0x0013 => Some(Self::TxQueueFull),
            0x0014 => Some(Self::BufferOverflow),
            0x0015 => Some(Self::InvalidState),
            0x0016 => Some(Self::ObjectAlreadyExists),
            0x0017 => Some(Self::InvalidIndex),
            0x0018 => Some(Self::EndOfFile),
            0x0019 => Some(Self::Disconnected),
            0x001A => Some(Self::WrongFlashFwVersion),
            _ => None,
        }
    }

    /// The full return word, as the driver reports it.
    #[inline]
    pub fn code(&self) -> u32 {
        SEV_VCI_ERROR | (*self as u16 as u32)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Unexpected => "unexpected failure",
            Self::NotImplemented => "not implemented",
            Self::OutOfMemory => "out of memory",
            Self::InvalidArg => "invalid argument",
            Self::NoInterface => "interface not supported",
            Self::InvalidPointer => "invalid pointer",
            Self::InvalidHandle => "invalid handle",
            Self::Abort => "operation aborted",
            Self::Fail => "unspecified failure",
            Self::AccessDenied => "access denied",
            Self::Timeout => "timeout",
            Self::Busy => "resource busy",
            Self::Pending => "operation pending",
            Self::NoData => "no data available",
            Self::NoMoreItems => "no more items",
            Self::NotInitialized => "not initialized",
            Self::AlreadyInitialized => "already initialized",
            Self::RxQueueEmpty => "receive queue empty",
            Self::TxQueueFull => "transmit queue full",
            Self::BufferOverflow => "buffer overflow",
            Self::InvalidState => "invalid state",
            Self::ObjectAlreadyExists => "object already exists",
            Self::InvalidIndex => "invalid index",
            Self::EndOfFile => "end of file",
            Self::Disconnected => "device disconnected",
            Self::WrongFlashFwVersion => "wrong flash firmware version",
        }
    }
}

impl Display for VciError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A decoded driver return word.
///
/// ```text
///  31 30 | 29 | 28 | 27 .. 16  | 15 .. 0
///  sev   | C  | R  | facility  | status
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct StatusCode {
    raw: u32,
    severity: Severity,
    facility: Facility,
    status: u16,
    customer: bool,
    reserved: bool,
}

impl StatusCode {
    pub fn decode(raw: u32) -> Self {
        Self {
            raw,
            severity: Severity::from_bits(raw),
            facility: Facility::from_bits(raw),
            status: (raw & STATUS_MASK) as u16,
            customer: raw & CUSTOMER_FLAG != 0,
            reserved: raw & RESERVED_FLAG != 0,
        }
    }

    #[inline]
    pub fn raw(&self) -> u32 {
        self.raw
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[inline]
    pub fn facility(&self) -> Facility {
        self.facility
    }

    #[inline]
    pub fn status(&self) -> u16 {
        self.status
    }

    #[inline]
    pub fn is_customer(&self) -> bool {
        self.customer
    }

    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.reserved
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.severity == Severity::Success
    }

    #[inline]
    pub fn is_info(&self) -> bool {
        self.severity == Severity::Info
    }

    #[inline]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// The named VCI error, only for error-severity words of the VCI facility.
    pub fn vci_error(&self) -> Option<VciError> {
        match (self.severity, self.facility) {
            (Severity::Error, Facility::Vci) => VciError::from_status(self.status),
            _ => None,
        }
    }

    /// Packs the decoded fields back into a return word.
    pub fn to_bits(&self) -> u32 {
        let mut bits = self.severity.bits() | self.facility.bits() | self.status as u32;
        if self.customer {
            bits |= CUSTOMER_FLAG;
        }
        if self.reserved {
            bits |= RESERVED_FLAG;
        }
        bits
    }
}

impl From<u32> for StatusCode {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::decode(raw)
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} 0x{:04X}", self.facility, self.severity, self.status)?;
        if let Some(e) = self.vci_error() {
            write!(f, " ({})", e)?;
        }
        Ok(())
    }
}

/// Folds a driver return word into a `Result`.
///
/// Warnings are logged and passed through, error severity is returned as
/// [`CanError::OperationError`].
pub fn check_status(raw: u32) -> Result<StatusCode, CanError> {
    let code = StatusCode::decode(raw);
    match code.severity {
        Severity::Success | Severity::Info => Ok(code),
        Severity::Warning => {
            log::warn!("IXXAT - driver returned {}", code);
            Ok(code)
        },
        Severity::Error => Err(CanError::OperationError(code.to_string())),
    }
}
