mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "classtable")]
#[command(about = "课程表日历事件导出工具")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 启用详细日志
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 匹配某一天的课程并导出日历事件记录
    Events {
        /// 课表定义文件路径（JSON）
        #[arg(short, long)]
        schedule: String,

        /// 目标日期（格式：YYYY-MM-DD，如 2024-03-04）
        #[arg(short, long)]
        date: String,

        /// 输出文件路径，缺省输出到标准输出
        #[arg(short, long)]
        output: Option<String>,
    },

    /// 校验课表定义文件
    Check {
        /// 课表定义文件路径（JSON）
        #[arg(short, long)]
        schedule: String,
    },

    /// 打印作息时间表
    Periods,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 设置日志级别
    let log_level = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("classtable_cli={log_level},classtable_core={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Events {
            schedule,
            date,
            output,
        } => commands::events_command(schedule, date, output),

        Commands::Check { schedule } => commands::check_command(schedule),

        Commands::Periods => commands::periods_command(),
    }
}
