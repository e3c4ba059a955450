//! Raw integers of the VCI driver header, for code that talks to the native binding.
#![allow(unused)]

pub const INFINITE: u32 = 0xFFFF_FFFF;
pub const VCI_MAX_ERRSTRLEN: usize = 256;

/* bitrate timing registers */
pub const CAN_BT0_10KB: u8 = 0x31;
pub const CAN_BT1_10KB: u8 = 0x1C;
pub const CAN_BT0_20KB: u8 = 0x18;
pub const CAN_BT1_20KB: u8 = 0x1C;
pub const CAN_BT0_50KB: u8 = 0x09;
pub const CAN_BT1_50KB: u8 = 0x1C;
pub const CAN_BT0_100KB: u8 = 0x04;
pub const CAN_BT1_100KB: u8 = 0x1C;
pub const CAN_BT0_125KB: u8 = 0x03;
pub const CAN_BT1_125KB: u8 = 0x1C;
pub const CAN_BT0_250KB: u8 = 0x01;
pub const CAN_BT1_250KB: u8 = 0x1C;
pub const CAN_BT0_500KB: u8 = 0x00;
pub const CAN_BT1_500KB: u8 = 0x1C;
pub const CAN_BT0_800KB: u8 = 0x00;
pub const CAN_BT1_800KB: u8 = 0x16;
pub const CAN_BT0_1000KB: u8 = 0x00;
pub const CAN_BT1_1000KB: u8 = 0x14;

/* severities and flags */
pub const SEV_SUCCESS: u32 = 0x0000_0000;
pub const SEV_INFO: u32 = 0x4000_0000;
pub const SEV_WARN: u32 = 0x8000_0000;
pub const SEV_ERROR: u32 = 0xC000_0000;
pub const SEV_MASK: u32 = 0xC000_0000;

pub const RESERVED_FLAG: u32 = 0x1000_0000;
pub const CUSTOMER_FLAG: u32 = 0x2000_0000;

pub const STATUS_MASK: u32 = 0x0000_FFFF;
pub const FACILITY_MASK: u32 = 0x0FFF_0000;
pub const FACILITY_SHIFT: u32 = 16;

/* facilities */
pub const FACILITY_STD: u32 = 0x0000_0000;
pub const FACILITY_VCI: u32 = 0x0001_0000;
pub const FACILITY_DAL: u32 = 0x0002_0000;
pub const FACILITY_CCL: u32 = 0x0003_0000;
pub const FACILITY_BAL: u32 = 0x0004_0000;

pub const SEV_STD_INFO: u32 = SEV_INFO | CUSTOMER_FLAG | FACILITY_STD;
pub const SEV_STD_WARN: u32 = SEV_WARN | CUSTOMER_FLAG | FACILITY_STD;
pub const SEV_STD_ERROR: u32 = SEV_ERROR | CUSTOMER_FLAG | FACILITY_STD;
pub const SEV_VCI_INFO: u32 = SEV_INFO | CUSTOMER_FLAG | FACILITY_VCI;
pub const SEV_VCI_WARN: u32 = SEV_WARN | CUSTOMER_FLAG | FACILITY_VCI;
pub const SEV_VCI_ERROR: u32 = SEV_ERROR | CUSTOMER_FLAG | FACILITY_VCI;
pub const SEV_DAL_INFO: u32 = SEV_INFO | CUSTOMER_FLAG | FACILITY_DAL;
pub const SEV_DAL_WARN: u32 = SEV_WARN | CUSTOMER_FLAG | FACILITY_DAL;
pub const SEV_DAL_ERROR: u32 = SEV_ERROR | CUSTOMER_FLAG | FACILITY_DAL;
pub const SEV_CCL_INFO: u32 = SEV_INFO | CUSTOMER_FLAG | FACILITY_CCL;
pub const SEV_CCL_WARN: u32 = SEV_WARN | CUSTOMER_FLAG | FACILITY_CCL;
pub const SEV_CCL_ERROR: u32 = SEV_ERROR | CUSTOMER_FLAG | FACILITY_CCL;
pub const SEV_BAL_INFO: u32 = SEV_INFO | CUSTOMER_FLAG | FACILITY_BAL;
pub const SEV_BAL_WARN: u32 = SEV_WARN | CUSTOMER_FLAG | FACILITY_BAL;
pub const SEV_BAL_ERROR: u32 = SEV_ERROR | CUSTOMER_FLAG | FACILITY_BAL;

/* return codes */
pub const VCI_SUCCESS: u32 = 0x00;
pub const VCI_OK: u32 = 0x00;
pub const VCI_E_UNEXPECTED: u32 = SEV_VCI_ERROR | 0x0001;
pub const VCI_E_NOT_IMPLEMENTED: u32 = SEV_VCI_ERROR | 0x0002;
pub const VCI_E_OUTOFMEMORY: u32 = SEV_VCI_ERROR | 0x0003;
pub const VCI_E_INVALIDARG: u32 = SEV_VCI_ERROR | 0x0004;
pub const VCI_E_NOINTERFACE: u32 = SEV_VCI_ERROR | 0x0005;
pub const VCI_E_INVPOINTER: u32 = SEV_VCI_ERROR | 0x0006;
pub const VCI_E_INVHANDLE: u32 = SEV_VCI_ERROR | 0x0007;
pub const VCI_E_ABORT: u32 = SEV_VCI_ERROR | 0x0008;
pub const VCI_E_FAIL: u32 = SEV_VCI_ERROR | 0x0009;
pub const VCI_E_ACCESSDENIED: u32 = SEV_VCI_ERROR | 0x000A;
pub const VCI_E_TIMEOUT: u32 = SEV_VCI_ERROR | 0x000B;
pub const VCI_E_BUSY: u32 = SEV_VCI_ERROR | 0x000C;
pub const VCI_E_PENDING: u32 = SEV_VCI_ERROR | 0x000D;
pub const VCI_E_NO_DATA: u32 = SEV_VCI_ERROR | 0x000E;
pub const VCI_E_NO_MORE_ITEMS: u32 = SEV_VCI_ERROR | 0x000F;
pub const VCI_E_NOT_INITIALIZED: u32 = SEV_VCI_ERROR | 0x0010;
pub const VCI_E_ALREADY_INITIALIZED: u32 = SEV_VCI_ERROR | 0x00011;   // vendor spelling, still 0x11
pub const VCI_E_RXQUEUE_EMPTY: u32 = SEV_VCI_ERROR | 0x00012;
pub const VCI_E_TXQUEUE_FULL: u32 = SEV_VCI_ERROR | 0x0013;
pub const VCI_E_BUFFER_OVERFLOW: u32 = SEV_VCI_ERROR | 0x0014;
pub const VCI_E_INVALID_STATE: u32 = SEV_VCI_ERROR | 0x0015;
pub const VCI_E_OBJECT_ALREADY_EXISTS: u32 = SEV_VCI_ERROR | 0x0016;
pub const VCI_E_INVALID_INDEX: u32 = SEV_VCI_ERROR | 0x0017;
pub const VCI_E_END_OF_FILE: u32 = SEV_VCI_ERROR | 0x0018;
pub const VCI_E_DISCONNECTED: u32 = SEV_VCI_ERROR | 0x0019;
pub const VCI_E_WRONG_FLASHFWVERSION: u32 = SEV_VCI_ERROR | 0x001A;

/* controller status */
pub const CAN_STATUS_TXPEND: u8 = 0x01;
pub const CAN_STATUS_OVRRUN: u8 = 0x02;
pub const CAN_STATUS_ERRLIM: u8 = 0x04;
pub const CAN_STATUS_BUSOFF: u8 = 0x08;
pub const CAN_STATUS_ININIT: u8 = 0x10;
pub const CAN_STATUS_BUSCERR: u8 = 0x20;

/* controller operating modes */
pub const CAN_OPMODE_UNDEFINED: u8 = 0x00;
pub const CAN_OPMODE_STANDARD: u8 = 0x01;
pub const CAN_OPMODE_EXTENDED: u8 = 0x02;
pub const CAN_OPMODE_ERRFRAME: u8 = 0x04;
pub const CAN_OPMODE_LISTONLY: u8 = 0x08;
pub const CAN_OPMODE_LOWSPEED: u8 = 0x10;

/* message types */
pub const CAN_MSGTYPE_DATA: u8 = 0;
pub const CAN_MSGTYPE_INFO: u8 = 1;
pub const CAN_MSGTYPE_ERROR: u8 = 2;
pub const CAN_MSGTYPE_STATUS: u8 = 3;
pub const CAN_MSGTYPE_WAKEUP: u8 = 4;
pub const CAN_MSGTYPE_TIMEOVR: u8 = 5;
pub const CAN_MSGTYPE_TIMERST: u8 = 6;

/* abData[0] of info frames */
pub const CAN_INFO_START: u8 = 1;
pub const CAN_INFO_STOP: u8 = 2;
pub const CAN_INFO_RESET: u8 = 3;

/* abData[0] of error frames, 5 is not assigned */
pub const CAN_ERROR_STUFF: u8 = 1;
pub const CAN_ERROR_FORM: u8 = 2;
pub const CAN_ERROR_ACK: u8 = 3;
pub const CAN_ERROR_BIT: u8 = 4;
pub const CAN_ERROR_CRC: u8 = 6;
pub const CAN_ERROR_OTHER: u8 = 7;

/* acceptance code and mask that reject all CAN IDs */
pub const CAN_ACC_MASK_NONE: u32 = 0xFFFF_FFFF;
pub const CAN_ACC_CODE_NONE: u32 = 0x8000_0000;
