use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// # Summary
/// 处理计划实体：按唯一编码标识的周期分组。
///
/// # Invariants
/// - `code` 全局唯一，计划 DTO 的相等性仅由 code 定义。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingSchedule {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

pub trait ProcessingScheduleImporter {
    fn id(&self) -> Option<Uuid>;
    fn code(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
}

pub trait ProcessingScheduleExporter {
    fn set_id(&mut self, id: Uuid);
    fn set_code(&mut self, code: &str);
    fn set_name(&mut self, name: &str);
    fn set_description(&mut self, description: Option<&str>);
}

impl ProcessingSchedule {
    pub fn new_instance(importer: &dyn ProcessingScheduleImporter) -> Self {
        Self {
            id: importer.id().unwrap_or_else(Uuid::new_v4),
            code: importer.code().to_string(),
            name: importer.name().to_string(),
            description: importer.description().map(str::to_string),
        }
    }

    pub fn export(&self, exporter: &mut dyn ProcessingScheduleExporter) {
        exporter.set_id(self.id);
        exporter.set_code(&self.code);
        exporter.set_name(&self.name);
        exporter.set_description(self.description.as_deref());
    }
}

/// # Summary
/// 处理周期实体：归属某一处理计划的命名时间桶。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingPeriod {
    pub id: Uuid,
    pub name: String,
    // 周期起止日期
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    // 所属处理计划
    pub processing_schedule: ProcessingSchedule,
}

/// 处理周期的外部数据源视图。所属计划以 Importer 能力暴露。
pub trait ProcessingPeriodImporter {
    fn id(&self) -> Option<Uuid>;
    fn name(&self) -> &str;
    fn start_date(&self) -> NaiveDate;
    fn end_date(&self) -> NaiveDate;
    fn processing_schedule(&self) -> &dyn ProcessingScheduleImporter;
}

pub trait ProcessingPeriodExporter {
    fn set_id(&mut self, id: Uuid);
    fn set_name(&mut self, name: &str);
    fn set_start_date(&mut self, date: NaiveDate);
    fn set_end_date(&mut self, date: NaiveDate);
    fn set_processing_schedule(&mut self, schedule: &ProcessingSchedule);
}

impl ProcessingPeriod {
    pub fn new_instance(importer: &dyn ProcessingPeriodImporter) -> Self {
        Self {
            id: importer.id().unwrap_or_else(Uuid::new_v4),
            name: importer.name().to_string(),
            start_date: importer.start_date(),
            end_date: importer.end_date(),
            processing_schedule: ProcessingSchedule::new_instance(importer.processing_schedule()),
        }
    }

    pub fn export(&self, exporter: &mut dyn ProcessingPeriodExporter) {
        exporter.set_id(self.id);
        exporter.set_name(&self.name);
        exporter.set_start_date(self.start_date);
        exporter.set_end_date(self.end_date);
        exporter.set_processing_schedule(&self.processing_schedule);
    }
}
