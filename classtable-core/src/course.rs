use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result, timetable,
    types::{ClassInstance, PeriodRange},
};

fn validate_weekday(day_of_week: u8) -> Result<()> {
    if !(1..=7).contains(&day_of_week) {
        return Err(Error::WeekdayOutOfRange(day_of_week));
    }
    Ok(())
}

/// 某一门课程在周几上第几节课的模板，通过具体日期匹配出实际课程
///
/// 一个模板只描述一周内的一次课。同一门课一周上多次时应当创建多个模板。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseTemplate {
    /// 课程名称
    pub course_name: String,
    /// 周几上课，1=周一 .. 7=周日
    pub day_of_week: u8,
    /// 节次范围
    pub periods: PeriodRange,
    /// 上课地点
    pub location: Option<String>,
    /// 任课教师
    pub instructor: Option<String>,
}

impl CourseTemplate {
    /// 创建课程模板，构造时校验课程名称、星期与节次端点
    pub fn new(
        course_name: impl Into<String>,
        day_of_week: u8,
        periods: PeriodRange,
        location: Option<String>,
        instructor: Option<String>,
    ) -> Result<Self> {
        let course_name = course_name.into();
        if course_name.trim().is_empty() {
            return Err(Error::EmptyCourseName);
        }
        validate_weekday(day_of_week)?;
        timetable::period_slot(periods.start)?;
        timetable::period_slot(periods.end)?;

        Ok(Self {
            course_name,
            day_of_week,
            periods,
            location,
            instructor,
        })
    }

    /// 判断某一天是否有这次课
    pub fn matches_date(&self, date: NaiveDate) -> bool {
        u32::from(self.day_of_week) == date.weekday().number_from_monday()
    }

    /// 在匹配的日期上生成一节具体的课，不匹配时返回 `None`（当天没课，不是错误）
    pub fn materialize(&self, date: NaiveDate) -> Option<ClassInstance> {
        if !self.matches_date(date) {
            return None;
        }

        // 模板构造时已完成校验，直接组装实例
        Some(ClassInstance {
            name: self.course_name.clone(),
            date,
            periods: self.periods,
            location: self.location.clone(),
            instructor: self.instructor.clone(),
        })
    }
}

/// 一门课程在一周内的全部时间安排
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// 课程名称
    pub name: String,
    /// 任课教师，作为该课程所有模板的默认值
    pub instructor: Option<String>,
    /// 时间安排模板，按添加顺序保存
    pub templates: Vec<CourseTemplate>,
}

impl Course {
    /// 创建一门课程
    pub fn new(name: impl Into<String>, instructor: Option<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyCourseName);
        }

        Ok(Self {
            name,
            instructor,
            templates: Vec::new(),
        })
    }

    /// 追加一次每周时间安排，课程名称与教师作为模板默认值
    pub fn add_session(
        &mut self,
        day_of_week: u8,
        periods: PeriodRange,
        location: Option<String>,
    ) -> Result<()> {
        if self
            .templates
            .iter()
            .any(|template| template.day_of_week == day_of_week)
        {
            tracing::warn!(
                course = %self.name,
                day_of_week,
                "课程在同一天有多条时间安排，解析时先添加的生效"
            );
        }

        let template = CourseTemplate::new(
            self.name.clone(),
            day_of_week,
            periods,
            location,
            self.instructor.clone(),
        )?;
        self.templates.push(template);

        Ok(())
    }

    /// 将课程匹配到某一天，返回第一条匹配模板生成的课
    ///
    /// 当天没有任何模板匹配时返回 `None`
    pub fn resolve(&self, date: NaiveDate) -> Option<ClassInstance> {
        self.templates
            .iter()
            .find_map(|template| template.materialize(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-01 是周一
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_template_matches_only_its_weekday() {
        let template =
            CourseTemplate::new("高等数学", 1, PeriodRange::new(1, 2), None, None).unwrap();

        assert!(template.matches_date(monday()));
        for offset in 1..7 {
            let date = monday() + chrono::Duration::days(offset);
            assert!(!template.matches_date(date), "unexpected match on {}", date);
        }
    }

    #[test]
    fn test_template_materialize() {
        let template = CourseTemplate::new(
            "高等数学",
            1,
            PeriodRange::new(1, 2),
            Some("2108".to_string()),
            Some("李老师".to_string()),
        )
        .unwrap();

        let instance = template.materialize(monday()).expect("monday should match");
        assert_eq!(instance.name, "高等数学");
        assert_eq!(instance.date, monday());
        assert_eq!(instance.location.as_deref(), Some("2108"));
        assert_eq!(instance.instructor.as_deref(), Some("李老师"));

        // 次日周二没课
        let tuesday = monday() + chrono::Duration::days(1);
        assert!(template.materialize(tuesday).is_none());
    }

    #[test]
    fn test_template_validation() {
        let result = CourseTemplate::new("高等数学", 0, PeriodRange::new(1, 2), None, None);
        assert!(matches!(result, Err(Error::WeekdayOutOfRange(0))));

        let result = CourseTemplate::new("高等数学", 8, PeriodRange::new(1, 2), None, None);
        assert!(matches!(result, Err(Error::WeekdayOutOfRange(8))));

        let result = CourseTemplate::new("", 1, PeriodRange::new(1, 2), None, None);
        assert!(matches!(result, Err(Error::EmptyCourseName)));

        let result = CourseTemplate::new("高等数学", 1, PeriodRange::new(0, 2), None, None);
        assert!(matches!(result, Err(Error::PeriodNotInTable(0))));
    }

    #[test]
    fn test_course_resolves_each_session_weekday() {
        let mut course = Course::new("大学英语", Some("张老师".to_string())).unwrap();
        course
            .add_session(1, PeriodRange::new(1, 2), Some("2108".to_string()))
            .unwrap();
        course
            .add_session(3, PeriodRange::new(6, 7), Some("3110".to_string()))
            .unwrap();

        for offset in 0..7 {
            let date = monday() + chrono::Duration::days(offset);
            let resolved = course.resolve(date);
            match offset {
                0 => {
                    let instance = resolved.expect("monday session missing");
                    assert_eq!(instance.periods, PeriodRange::new(1, 2));
                    assert_eq!(instance.location.as_deref(), Some("2108"));
                    assert_eq!(instance.instructor.as_deref(), Some("张老师"));
                }
                2 => {
                    let instance = resolved.expect("wednesday session missing");
                    assert_eq!(instance.periods, PeriodRange::new(6, 7));
                    assert_eq!(instance.location.as_deref(), Some("3110"));
                }
                _ => assert!(resolved.is_none(), "unexpected class on offset {}", offset),
            }
        }
    }

    #[test]
    fn test_first_added_template_wins() {
        let mut course = Course::new("形势与政策", None).unwrap();
        course.add_session(5, PeriodRange::new(1, 2), None).unwrap();
        course
            .add_session(5, PeriodRange::new(3, 4), Some("8301".to_string()))
            .unwrap();

        // 2024-01-05 是周五
        let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let instance = course.resolve(friday).expect("friday session missing");
        assert_eq!(instance.periods, PeriodRange::new(1, 2));
        assert!(instance.location.is_none());
    }

    #[test]
    fn test_course_validation() {
        assert!(matches!(Course::new("", None), Err(Error::EmptyCourseName)));

        let mut course = Course::new("大学物理", None).unwrap();
        let result = course.add_session(9, PeriodRange::new(1, 2), None);
        assert!(matches!(result, Err(Error::WeekdayOutOfRange(9))));
        assert!(course.templates.is_empty());
    }
}
