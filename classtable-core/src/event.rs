use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{Result, timetable, types::ClassInstance};

/// 组织者联系方式占位符，导出时附加在教师姓名上
pub const ORGANIZER_CONTACT: &str = "teacher@example.com";

/// 日历事件的组织者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    /// 显示名称
    pub display_name: String,
    /// 联系方式
    pub contact: String,
}

/// 导出给外部日历工具的事件记录
///
/// 事件记录是本库的输出边界，渲染成具体的日历交换格式由外部组件负责
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// 事件标题
    pub title: String,
    /// 开始时间
    pub start: DateTime<FixedOffset>,
    /// 结束时间
    pub end: DateTime<FixedOffset>,
    /// 地点，为空时不导出
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// 组织者，没有教师信息时不导出
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<Organizer>,
}

impl ClassInstance {
    /// 将一节课转换成日历事件记录
    ///
    /// 节次范围无法在作息时间表中解析时返回错误
    pub fn to_event_record(&self) -> Result<EventRecord> {
        let (start, end) = timetable::resolve(self.date, self.periods)?;

        let location = self
            .location
            .clone()
            .filter(|location| !location.is_empty());
        let organizer = self
            .instructor
            .as_deref()
            .filter(|instructor| !instructor.is_empty())
            .map(|instructor| Organizer {
                display_name: instructor.to_string(),
                contact: ORGANIZER_CONTACT.to_string(),
            });

        Ok(EventRecord {
            title: self.name.clone(),
            start,
            end,
            location,
            organizer,
        })
    }
}
