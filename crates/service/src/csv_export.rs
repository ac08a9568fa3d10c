use thiserror::Error;

use refdata_core::stock::entity::IdealStockAmount;

/// # Summary
/// CSV 导出的格式化错误：处理周期单元格缺少必要成分。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CsvFormatError {
    #[error("Cannot format '{0}' name or processing schedule.")]
    IncompletePeriod(String),
    #[error("CSV write failed: {0}")]
    Write(String),
}

/// 处理周期单元格的两个成分：周期名称与所属计划编码。
/// 任一缺失时整个单元格无法格式化。
#[derive(Debug)]
pub struct PeriodCell<'a> {
    pub name: Option<&'a str>,
    pub schedule_code: Option<&'a str>,
}

/// # Summary
/// 把处理周期格式化为 "计划编码{分隔符}周期名称" 单元格。
///
/// # Arguments
/// * `cell` - 周期名称与计划编码的成对输入
/// * `separator` - 两段之间的分隔符
///
/// # Returns
/// 格式化后的单元格文本；任一成分缺失时返回携带原始输入的错误。
pub fn format_processing_period(
    cell: &PeriodCell<'_>,
    separator: &str,
) -> Result<String, CsvFormatError> {
    match (cell.schedule_code, cell.name) {
        (Some(code), Some(name)) => Ok(format!("{code}{separator}{name}")),
        _ => Err(CsvFormatError::IncompletePeriod(format!("{cell:?}"))),
    }
}

/// CSV 表头，列顺序固定。
const ISA_CSV_HEADERS: [&str; 5] = [
    "Facility Code",
    "Program Code",
    "Product Code",
    "Period",
    "Ideal Stock Amount",
];

/// # Summary
/// 把理想库存量清单写成 CSV 文本。
///
/// # Logic
/// 每条记录展开为设施编码/项目编码/产品编码/周期单元格/数量五列，
/// 周期单元格经 [`format_processing_period`] 组装。
pub fn write_isa_csv(
    amounts: &[IdealStockAmount],
    separator: &str,
) -> Result<String, CsvFormatError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(ISA_CSV_HEADERS)
        .map_err(|e| CsvFormatError::Write(e.to_string()))?;

    for isa in amounts {
        let cell = PeriodCell {
            name: Some(&isa.processing_period.name),
            schedule_code: Some(&isa.processing_period.processing_schedule.code),
        };
        let period = format_processing_period(&cell, separator)?;
        writer
            .write_record([
                isa.facility.code.as_str(),
                isa.program.code.as_str(),
                isa.orderable.product_code.as_str(),
                period.as_str(),
                isa.amount.to_string().as_str(),
            ])
            .map_err(|e| CsvFormatError::Write(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CsvFormatError::Write(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use refdata_core::catalog::entity::Orderable;
    use refdata_core::schedule::entity::{ProcessingPeriod, ProcessingSchedule};
    use refdata_core::supply::entity::{Facility, Program};
    use uuid::Uuid;

    #[test]
    fn formats_schedule_code_and_period_name() {
        let cell = PeriodCell {
            name: Some("Jan2026"),
            schedule_code: Some("monthly"),
        };
        assert_eq!(
            format_processing_period(&cell, "|").unwrap(),
            "monthly|Jan2026"
        );
    }

    #[test]
    fn respects_configured_separator() {
        let cell = PeriodCell {
            name: Some("Q1"),
            schedule_code: Some("quarterly"),
        };
        assert_eq!(
            format_processing_period(&cell, " / ").unwrap(),
            "quarterly / Q1"
        );
    }

    #[test]
    fn rejects_missing_name_with_input_in_message() {
        let cell = PeriodCell {
            name: None,
            schedule_code: Some("monthly"),
        };
        let err = format_processing_period(&cell, "|").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Cannot format '"));
        assert!(message.contains("monthly"));
        assert!(message.ends_with("' name or processing schedule."));
    }

    #[test]
    fn rejects_missing_schedule_code() {
        let cell = PeriodCell {
            name: Some("Jan2026"),
            schedule_code: None,
        };
        assert!(format_processing_period(&cell, "|").is_err());
    }

    fn sample_isa() -> IdealStockAmount {
        let schedule = ProcessingSchedule {
            id: Uuid::new_v4(),
            code: "monthly".to_string(),
            name: "Monthly".to_string(),
            description: None,
        };
        IdealStockAmount {
            id: Uuid::new_v4(),
            facility: Facility {
                id: Uuid::new_v4(),
                code: "HC01".to_string(),
                name: "Health Center 1".to_string(),
            },
            program: Program {
                id: Uuid::new_v4(),
                code: "EPI".to_string(),
                name: "Immunization".to_string(),
            },
            orderable: Orderable {
                id: Uuid::new_v4(),
                product_code: "C100".to_string(),
                full_product_name: "Vaccine".to_string(),
            },
            processing_period: ProcessingPeriod {
                id: Uuid::new_v4(),
                name: "Jan2026".to_string(),
                start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
                processing_schedule: schedule,
            },
            amount: 120,
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let csv = write_isa_csv(&[sample_isa()], "|").unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Facility Code,Program Code,Product Code,Period,Ideal Stock Amount"
        );
        assert_eq!(lines.next().unwrap(), "HC01,EPI,C100,monthly|Jan2026,120");
        assert!(lines.next().is_none());
    }

    #[test]
    fn empty_input_yields_header_only() {
        let csv = write_isa_csv(&[], "|").unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
