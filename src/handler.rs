//! # 命令处理逻辑模块
//!
//! 包含处理嵌入和提取两种模式的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法、统计耗时以及向用户报告结果。

use crate::bitio::{BitReader, BitWriter};
use crate::steganography::{embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Instant;

/// 处理嵌入模式的执行逻辑。
///
/// 负责读取载体图像与载荷文件、将载荷的位组逐一写入像素通道的最低两位，
/// 并在嵌入完整完成后才把结果图像写入目标路径。
/// 容量不足时不产生任何输出文件。
///
/// # Arguments
///
/// * `image` - 载体图像文件路径。
/// * `dest` - 结果图像的输出路径 (必须是无损格式，如 PNG, BMP)。
/// * `payload` - 要隐藏的载荷文件路径。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取载体图像或载荷文件。
/// * 载体图像没有足够的容量容纳整个载荷。
/// * 无法写入到目标图像文件。
pub fn handle_encode(image: &Path, dest: &Path, payload: &Path) -> Result<()> {
    let started = Instant::now();

    let carrier = image::open(image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                image.to_string_lossy().red().bold()
            )
        })?
        .into_rgba8();

    let source = File::open(payload).with_context(|| {
        format!(
            "Unable to read payload file: {}",
            payload.to_string_lossy().red().bold()
        )
    })?;
    let mut bits = BitReader::new(BufReader::new(source));

    let doctored = embed(carrier, &mut bits).with_context(|| {
        format!(
            "Failed to embed the payload {} into image {}.",
            payload.to_string_lossy().red().bold(),
            image.to_string_lossy().red().bold()
        )
    })?;

    doctored.save(dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload has been successfully embedded and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    println!(
        "Elapsed: {} ms",
        started.elapsed().as_millis().to_string().green().bold()
    );

    Ok(())
}

/// 处理提取模式的执行逻辑。
///
/// 按固定的扫描顺序读出每个像素 R/G/B 通道的最低两位，
/// 将载体的全部嵌入容量作为原始字节流写入目标文件。
/// 载荷的真实长度没有内嵌记录，由调用方自行掌握；
/// 超出真实载荷的尾部字节是载体残余位的产物。
///
/// # Arguments
///
/// * `image` - 载体图像文件路径。
/// * `dest` - 恢复出的字节流的输出路径。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取载体图像文件。
/// * 无法写入到目标载荷文件。
pub fn handle_decode(image: &Path, dest: &Path) -> Result<()> {
    let started = Instant::now();

    let carrier = image::open(image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                image.to_string_lossy().red().bold()
            )
        })?
        .into_rgba8();

    let sink = File::create(dest).with_context(|| {
        format!(
            "Unable to write to target payload file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    extract(&carrier, BitWriter::new(BufWriter::new(sink))).with_context(|| {
        format!(
            "Failed to extract the payload from image: {}",
            image.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload has been successfully extracted and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    println!(
        "Elapsed: {} ms",
        started.elapsed().as_millis().to_string().green().bold()
    );

    Ok(())
}
