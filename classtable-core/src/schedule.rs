use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    course::Course,
    event::EventRecord,
    types::{ClassInstance, PeriodRange},
};

/// 课表定义文件的文档结构
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScheduleDoc {
    courses: Vec<CourseDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CourseDef {
    name: String,
    #[serde(default)]
    instructor: Option<String>,
    sessions: Vec<SessionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionDef {
    day_of_week: u8,
    periods: PeriodRange,
    #[serde(default)]
    location: Option<String>,
}

/// 一份完整的课表：多门课程的每周时间安排
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    /// 课程列表，保持定义顺序
    pub courses: Vec<Course>,
}

impl Schedule {
    /// 从 JSON 课表定义构建课表
    ///
    /// 定义中的每门课程与每条时间安排都走构造校验，
    /// 非法的星期、节次或空课程名会在这里直接报错
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: ScheduleDoc = serde_json::from_str(json)?;

        let mut courses = Vec::with_capacity(doc.courses.len());
        for def in doc.courses {
            let mut course = Course::new(&def.name, def.instructor)
                .map_err(|e| Error::Schedule(format!("课程 {:?} 无效: {}", def.name, e)))?;

            for session in def.sessions {
                course
                    .add_session(session.day_of_week, session.periods, session.location)
                    .map_err(|e| {
                        Error::Schedule(format!("课程 {:?} 的时间安排无效: {}", def.name, e))
                    })?;
            }

            courses.push(course);
        }

        Ok(Self { courses })
    }

    /// 匹配某一天的全部课程，每门课程至多产生一节课，按课程定义顺序返回
    pub fn resolve_date(&self, date: NaiveDate) -> Vec<ClassInstance> {
        let instances: Vec<ClassInstance> = self
            .courses
            .iter()
            .filter_map(|course| course.resolve(date))
            .collect();

        tracing::debug!(%date, count = instances.len(), "resolved schedule for date");
        instances
    }

    /// 匹配某一天的全部课程并转换成事件记录
    pub fn events_for(&self, date: NaiveDate) -> Result<Vec<EventRecord>> {
        self.resolve_date(date)
            .iter()
            .map(ClassInstance::to_event_record)
            .collect()
    }
}
