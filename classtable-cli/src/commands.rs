use std::fs;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use classtable_core::prelude::*;

fn load_schedule(path: &str) -> Result<Schedule> {
    let content =
        fs::read_to_string(path).with_context(|| format!("无法读取课表定义文件: {}", path))?;
    let schedule = Schedule::from_json(&content)
        .with_context(|| format!("课表定义文件 {} 无效", path))?;
    Ok(schedule)
}

/// 导出事件记录命令
pub fn events_command(schedule_path: String, date: String, output: Option<String>) -> Result<()> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .with_context(|| format!("无法解析日期 {:?}，期望格式 YYYY-MM-DD", date))?;

    let schedule = load_schedule(&schedule_path)?;
    tracing::info!("开始匹配课程: 日期={}, 课程数={}", date, schedule.courses.len());

    let events = schedule.events_for(date)?;
    if events.is_empty() {
        // 没有匹配的模板不是错误，当天只是没课
        println!("{} 当天没有课程", date);
        return Ok(());
    }

    println!("✓ 匹配到 {} 节课", events.len());

    let json = serde_json::to_string_pretty(&events)?;
    match output {
        Some(path) => {
            fs::write(&path, json)?;
            println!("✓ 事件记录已保存到: {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// 校验课表定义命令
pub fn check_command(schedule_path: String) -> Result<()> {
    let schedule = load_schedule(&schedule_path)?;

    let session_count: usize = schedule
        .courses
        .iter()
        .map(|course| course.templates.len())
        .sum();

    println!(
        "✓ 课表定义有效: {} 门课程, {} 条时间安排",
        schedule.courses.len(),
        session_count
    );

    Ok(())
}

/// 打印作息时间表命令
pub fn periods_command() -> Result<()> {
    println!("作息时间表 (UTC+8):");

    for period in 1..=PERIOD_COUNT {
        let slot = period_slot(period)?;
        println!(
            "  第{:2}节  {} - {}",
            period,
            slot.start.format("%H:%M"),
            slot.end.format("%H:%M")
        );
    }

    Ok(())
}
