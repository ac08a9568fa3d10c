use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::entity::{Orderable, OrderableImporter};
use crate::schedule::entity::{ProcessingPeriod, ProcessingPeriodImporter};
use crate::supply::entity::{Facility, FacilityImporter, Program, ProgramImporter};

/// # Summary
/// 理想库存量实体：设施/项目/品目/处理周期组合下的目标库存数量。
///
/// # Invariants
/// - 四个引用与数量均必填，缺一即非法记录。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdealStockAmount {
    pub id: Uuid,
    pub facility: Facility,
    pub program: Program,
    pub orderable: Orderable,
    pub processing_period: ProcessingPeriod,
    pub amount: i32,
}

/// 理想库存量的外部数据源视图。
/// 四个嵌套实体均以各自的 Importer 能力暴露，工厂据此递归重建对象图，
/// 不依赖持久化标识。
pub trait IdealStockAmountImporter {
    fn id(&self) -> Option<Uuid>;
    fn facility(&self) -> &dyn FacilityImporter;
    fn program(&self) -> &dyn ProgramImporter;
    fn orderable(&self) -> &dyn OrderableImporter;
    fn processing_period(&self) -> &dyn ProcessingPeriodImporter;
    fn amount(&self) -> i32;
}

/// 理想库存量的外部数据汇视图
pub trait IdealStockAmountExporter {
    fn set_id(&mut self, id: Uuid);
    fn set_facility(&mut self, facility: &Facility);
    fn set_program(&mut self, program: &Program);
    fn set_orderable(&mut self, orderable: &Orderable);
    fn set_processing_period(&mut self, period: &ProcessingPeriod);
    fn set_amount(&mut self, amount: i32);
}

impl IdealStockAmount {
    /// # Summary
    /// 从 Importer 视图逐字段构造理想库存量。
    ///
    /// # Logic
    /// 递归用嵌套实体各自的工厂重建引用；保留外部 id（存在则幂等更新）。
    pub fn new_instance(importer: &dyn IdealStockAmountImporter) -> Self {
        Self {
            id: importer.id().unwrap_or_else(Uuid::new_v4),
            facility: Facility::new_instance(importer.facility()),
            program: Program::new_instance(importer.program()),
            orderable: Orderable::new_instance(importer.orderable()),
            processing_period: ProcessingPeriod::new_instance(importer.processing_period()),
            amount: importer.amount(),
        }
    }

    /// 无条件写出全部属性，导出不会失败也不会遗漏字段。
    pub fn export(&self, exporter: &mut dyn IdealStockAmountExporter) {
        exporter.set_id(self.id);
        exporter.set_facility(&self.facility);
        exporter.set_program(&self.program);
        exporter.set_orderable(&self.orderable);
        exporter.set_processing_period(&self.processing_period);
        exporter.set_amount(self.amount);
    }
}
