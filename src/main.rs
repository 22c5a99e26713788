//! hwpal - 硬件调色板颜色查询工具
//!
//! 用法:
//! - `hwpal 0F 20 16`      查询索引对应的颜色和前景文字色
//! - `hwpal --list`        列出整个调色板
//! - `hwpal -v --log-dir ./logs 2A`

use anyhow::{Context, Result, bail};
use hwpal::{DEFAULT_PALETTE, HardwareColorList, HardwarePalette, PaletteError};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;

/// 应用程序名称
pub const APP_NAME: &str = "hwpal";

/// 应用程序版本（从 Cargo.toml 读取）
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 命令行选项
#[derive(Debug, Default, PartialEq)]
struct Options {
    verbose: bool,
    list: bool,
    help: bool,
    log_dir: Option<PathBuf>,
    indices: Vec<String>,
}

impl Options {
    fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--verbose" | "-v" => options.verbose = true,
                "--list" | "-l" => options.list = true,
                "--help" | "-h" => options.help = true,
                "--log-dir" => {
                    let dir = args.next().context("--log-dir 需要一个目录参数")?;
                    options.log_dir = Some(PathBuf::from(dir));
                }
                // 负数索引 (如 -1) 也当作索引处理
                s if s.starts_with("--") => bail!("未知选项: {}", s),
                _ => options.indices.push(arg),
            }
        }

        Ok(options)
    }
}

/// 初始化日志 - 输出到控制台, 指定目录时同时写入文件
fn init_logging(options: &Options) -> Option<WorkerGuard> {
    use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

    let default_level = if options.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_level(true)
        .with_target(false);

    let (file_layer, guard) = match &options.log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "hwpal.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_level(true)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    Registry::default()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

fn print_usage() {
    println!("{} {}", APP_NAME, APP_VERSION);
    println!();
    println!("使用方法:");
    println!("  hwpal [选项] <十六进制索引>...");
    println!();
    println!("选项:");
    println!("  --list, -l          列出整个调色板");
    println!("  --verbose, -v       输出调试日志");
    println!("  --log-dir <目录>    同时把日志写入该目录");
    println!("  --help, -h          显示帮助信息");
    println!();
    println!("环境变量 RUST_LOG 可覆盖日志级别");
}

/// 格式化一行查询结果
fn format_line(text: &str, palette: &HardwarePalette) -> hwpal::Result<String> {
    let index = hwpal::parse_index_text(text)?;
    let background = palette.entry(index);
    let foreground = hwpal::select_foreground_color(index, palette).to_rgb8();
    Ok(format!(
        "{}  {}  fg={}",
        hwpal::format_index_text(index),
        background.to_hex_string(),
        foreground.to_hex_string()
    ))
}

fn run(options: &Options, out: &mut impl Write) -> Result<usize> {
    let palette = DEFAULT_PALETTE;

    if options.list {
        let mut list = HardwareColorList::new(palette);
        list.set_colors(0..hwpal::HARDWARE_PALETTE_SIZE as u8);
        for swatch in list.iter() {
            writeln!(
                out,
                "{}  {}  fg={}",
                swatch.label,
                swatch.background.to_hex_string(),
                swatch.foreground.to_hex_string()
            )
            .context("写入输出失败")?;
        }
    }

    let mut failures = 0;
    for text in &options.indices {
        match format_line(text, &palette) {
            Ok(line) => writeln!(out, "{}", line).context("写入输出失败")?,
            Err(e @ (PaletteError::InvalidHexText(_) | PaletteError::HexTextOverflow(_))) => {
                error!("{}", e);
                failures += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(failures)
}

fn main() -> Result<()> {
    let options = Options::parse(std::env::args().skip(1))?;

    if options.help || (options.indices.is_empty() && !options.list) {
        print_usage();
        return Ok(());
    }

    let _guard = init_logging(&options);
    info!("{} {} 启动", APP_NAME, APP_VERSION);
    debug!("命令行选项: {:?}", options);

    let stdout = std::io::stdout();
    let failures = run(&options, &mut stdout.lock())?;

    if failures > 0 {
        bail!("{} 个索引解析失败", failures);
    }
    Ok(())
}
