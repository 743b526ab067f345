use clap::Parser;

use lsb_stash::{
    cli::Cli,
    handler::{handle_decode, handle_encode},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据是否提供载荷文件
/// 将执行分派到嵌入或提取处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 提供载荷文件时执行嵌入，否则执行提取
    match cli.payload {
        Some(payload) => handle_encode(&cli.image, &cli.output, &payload),
        None => handle_decode(&cli.image, &cli.output),
    }
}
