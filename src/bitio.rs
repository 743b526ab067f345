//! # 位流编解码模块
//!
//! 提供 [`BitReader`] 和 [`BitWriter`]，在字节流与任意宽度的位组序列之间转换。
//! 两者都以 MSB 优先 (最高有效位在前) 的顺序处理位，字节边界对调用方透明。
//!
//! 内部的位累加器在两次调用之间最多保留 7 个待处理位，
//! 因此位组宽度不必整除 8。

use std::io::{self, ErrorKind, Read, Write};

/// 单次读写允许的最大位组宽度。
const MAX_GROUP_WIDTH: u32 = 32;

/// 将有序字节源适配为位组序列的读取器。
///
/// 源被视为一条连续的位序列。当源中剩余的位数不足一个完整位组时，
/// [`read_bits`](BitReader::read_bits) 返回 `Ok(None)` 表示耗尽，
/// 末尾不足一字节的残余位被丢弃，不会补零凑成短位组。
pub struct BitReader<R: Read> {
    src: R,
    acc: u64,
    pending: u32,
}

impl<R: Read> BitReader<R> {
    pub fn new(src: R) -> Self {
        Self {
            src,
            acc: 0,
            pending: 0,
        }
    }

    /// 从源中读取接下来的 `count` 位，按 MSB 优先顺序返回。
    ///
    /// 源耗尽且缓冲位数不足 `count` 时返回 `Ok(None)`；
    /// 底层 I/O 失败时立即传播错误。
    pub fn read_bits(&mut self, count: u32) -> io::Result<Option<u64>> {
        if count > MAX_GROUP_WIDTH {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                "Attempted to read more than 32 bits in a single group.",
            ));
        }

        if count == 0 {
            return Ok(Some(0));
        }

        while self.pending < count {
            match self.next_byte()? {
                Some(byte) => {
                    self.acc = (self.acc << 8) | u64::from(byte);
                    self.pending += 8;
                }
                None => {
                    // 源已结束：残余的不足位直接丢弃。
                    self.acc = 0;
                    self.pending = 0;
                    return Ok(None);
                }
            }
        }

        self.pending -= count;
        let value = (self.acc >> self.pending) & ((1u64 << count) - 1);
        self.acc &= (1u64 << self.pending) - 1;

        Ok(Some(value))
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.src.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// 将位组序列适配为有序字节汇的写入器。
///
/// 每当累加器凑满 8 位就向汇写出一个完整字节。
/// [`close`](BitWriter::close) 时若累加器中仍有不足 8 位的残余，
/// 这些位被静默丢弃而不是补零写出：汇只接收完整字节，
/// 输出长度始终是写入总位数除以 8 向下取整。
pub struct BitWriter<W: Write> {
    sink: W,
    acc: u64,
    pending: u32,
}

impl<W: Write> BitWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            acc: 0,
            pending: 0,
        }
    }

    /// 将 `value` 的低 `count` 位按 MSB 优先顺序追加到输出。
    pub fn write_bits(&mut self, value: u64, count: u32) -> io::Result<()> {
        if count > MAX_GROUP_WIDTH {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                "Attempted to write more than 32 bits in a single group.",
            ));
        }

        if count == 0 {
            return Ok(());
        }

        self.acc = (self.acc << count) | (value & ((1u64 << count) - 1));
        self.pending += count;

        while self.pending >= 8 {
            let byte = (self.acc >> (self.pending - 8)) as u8;
            self.sink.write_all(&[byte])?;
            self.pending -= 8;
            self.acc &= (1u64 << self.pending) - 1;
        }

        Ok(())
    }

    /// 释放字节汇并返回它。累加器中不足一字节的残余位被丢弃。
    pub fn close(mut self) -> io::Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
