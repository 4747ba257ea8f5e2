use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};

use crate::{Error, Result, types::PeriodRange};

/// 每天的节次数
pub const PERIOD_COUNT: u8 = 12;

/// 作息时间表：第 N 节课对应的上下课时间 ((时, 分), (时, 分))
///
/// 12:30-13:30 为午休，17:05-18:30 为晚饭时间，期间没有节次
const TIMETABLE: [((u32, u32), (u32, u32)); PERIOD_COUNT as usize] = [
    ((8, 0), (8, 45)),
    ((8, 55), (9, 40)),
    ((9, 55), (10, 40)),
    ((10, 50), (11, 35)),
    ((11, 45), (12, 30)),
    ((13, 30), (14, 15)),
    ((14, 25), (15, 10)),
    ((15, 25), (16, 10)),
    ((16, 20), (17, 5)),
    ((18, 30), (19, 15)),
    ((19, 25), (20, 10)),
    ((20, 20), (21, 5)),
];

/// 单个节次的上下课时间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSlot {
    /// 上课时间
    pub start: NaiveTime,
    /// 下课时间
    pub end: NaiveTime,
}

/// 课表使用的固定时区
pub fn class_tz() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).unwrap() // UTC+8
}

/// 查询某一节次的上下课时间
///
/// 节次不在作息时间表中时返回 [`Error::PeriodNotInTable`]
pub fn period_slot(period: u8) -> Result<PeriodSlot> {
    let index = usize::from(period)
        .checked_sub(1)
        .filter(|i| *i < TIMETABLE.len())
        .ok_or(Error::PeriodNotInTable(period))?;

    let ((start_h, start_m), (end_h, end_m)) = TIMETABLE[index];
    Ok(PeriodSlot {
        start: NaiveTime::from_hms_opt(start_h, start_m, 0).unwrap(),
        end: NaiveTime::from_hms_opt(end_h, end_m, 0).unwrap(),
    })
}

/// 将 (日期, 节次范围) 解析为带时区的绝对起止时间
///
/// 开始时间取起始节次的上课时间，结束时间取结束节次的下课时间。
/// 只校验范围的两个端点。
pub fn resolve(
    date: NaiveDate,
    periods: PeriodRange,
) -> Result<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let first = period_slot(periods.start)?;
    let last = period_slot(periods.end)?;

    let tz = class_tz();
    // 固定时区下本地时间不存在歧义
    let start = date.and_time(first.start).and_local_timezone(tz).unwrap();
    let end = date.and_time(last.end).and_local_timezone(tz).unwrap();

    Ok((start, end))
}
