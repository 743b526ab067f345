//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。
//!
//! 命令形式是位置参数：提供两个参数时执行提取，提供三个参数时执行嵌入，
//! 其余参数个数由 `clap` 打印用法说明。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或提取任意字节载荷。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，通过改写每个像素 R/G/B 通道的最低两位，在无损格式图像 (如 PNG, BMP) 中隐藏或提取任意字节载荷。"
)]
pub struct Cli {
    /// 载体图像文件路径 (如 PNG, BMP)。
    pub image: PathBuf,

    /// 输出文件路径：嵌入模式下保存结果图像，提取模式下保存恢复出的原始字节流。
    pub output: PathBuf,

    /// 要隐藏的载荷文件路径。提供该参数时执行嵌入；省略时从图像中提取全部容量的载荷。
    pub payload: Option<PathBuf>,
}
