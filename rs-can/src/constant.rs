/// The max sizeof can-frame's data.
pub const CAN_FRAME_MAX_SIZE: usize = 8;
/// Padding value used when a driver record is shorter than its fixed buffer.
pub const ZERO_PADDING: u8 = 0x00;
