/// 每个颜色通道中用于隐写的位数。
/// 固定为 2：改写最低两位在视觉上几乎不可察觉。
pub const BITS_PER_CHANNEL: u32 = 2;

/// 每个像素参与隐写的通道数。
/// 只使用红、绿、蓝三个颜色通道；透明通道 (alpha) 永不修改。
pub const DATA_CHANNELS: usize = 3;

/// 读取单个位组时使用的掩码 (通道的最低 2 位)。
pub const GROUP_MASK: u8 = 0b0000_0011;

/// 清除通道最低 2 位时使用的掩码，保留其余 6 位。
pub const CHANNEL_CLEAR_MASK: u8 = 0xFC;
