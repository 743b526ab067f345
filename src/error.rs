//! # 错误类型模块
//!
//! 定义隐写核心算法的结构化错误类型。
//! 容量不足使用显式的错误变体表达，而不是作为控制流的例外情况处理。

use thiserror::Error;

/// 隐写核心操作可能产生的错误。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 载荷所需的位数超过了载体图像的最大容量。
    /// 嵌入在产生任何输出之前中止。
    #[error("Not enough space in the carrier image to embed the payload. Capacity: {capacity_bytes} bytes")]
    CapacityExceeded {
        /// 载体在 2 位/通道方案下能容纳的最大载荷字节数。
        capacity_bytes: u64,
    },

    /// 读取载荷字节流时发生的 I/O 错误。
    #[error("Payload stream I/O error: {0}")]
    Io(#[from] std::io::Error),
}
