use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, timetable};

/// 节次范围（起始节次, 结束节次）
///
/// 一般应满足 start <= end，但并不强制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    /// 起始节次
    pub start: u8,
    /// 结束节次
    pub end: u8,
}

impl PeriodRange {
    /// 创建节次范围
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }
}

/// 具体在某一天某一时段的某一节课，可以转换成日历事件记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassInstance {
    /// 课程名称
    pub name: String,
    /// 上课日期
    pub date: NaiveDate,
    /// 节次范围
    pub periods: PeriodRange,
    /// 上课地点
    pub location: Option<String>,
    /// 任课教师
    pub instructor: Option<String>,
}

impl ClassInstance {
    /// 创建一节课，构造时校验课程名称与节次端点
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        periods: PeriodRange,
        location: Option<String>,
        instructor: Option<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyCourseName);
        }
        timetable::period_slot(periods.start)?;
        timetable::period_slot(periods.end)?;

        Ok(Self {
            name,
            date,
            periods,
            location,
            instructor,
        })
    }
}
