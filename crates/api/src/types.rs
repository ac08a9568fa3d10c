//! # DTO (Data Transfer Object) 层
//!
//! 面向 JSON 线格式的轻量结构体。每个 DTO 同时实现对应实体的
//! Importer 与 Exporter 能力：入站请求经 Importer 进入实体工厂，
//! 出站响应经 Exporter 从实体逐字段写出。
//! 所有 DTO 必须派生 `utoipa::ToSchema` 以自动进入 Swagger 文档。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use refdata_core::catalog::entity::{
    Orderable, OrderableExporter, OrderableImporter, TradeItem, TradeItemClassification,
    TradeItemExporter, TradeItemImporter,
};
use refdata_core::common::Page;
use refdata_core::rights::entity::{
    Right, RightExporter, RightImporter, Role, RoleExporter, RoleImporter,
};
use refdata_core::schedule::entity::{
    ProcessingPeriod, ProcessingPeriodExporter, ProcessingPeriodImporter, ProcessingSchedule,
    ProcessingScheduleExporter, ProcessingScheduleImporter,
};
use refdata_core::stock::entity::{
    IdealStockAmount, IdealStockAmountExporter, IdealStockAmountImporter,
};
use refdata_core::supply::entity::{
    Facility, FacilityExporter, FacilityImporter, Program, ProgramExporter, ProgramImporter,
    SupervisoryNode, SupervisoryNodeExporter, SupervisoryNodeImporter, SupplyLine,
    SupplyLineExporter, SupplyLineImporter,
};

// ============================================================
//  目录 (Catalog) DTO
// ============================================================

/// 可订购品目 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderableDto {
    pub id: Option<Uuid>,
    /// 产品编码
    #[schema(example = "C100")]
    pub product_code: String,
    /// 产品全称
    #[schema(example = "Paracetamol 500mg")]
    pub full_product_name: String,
}

impl OrderableImporter for OrderableDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
    fn product_code(&self) -> &str {
        &self.product_code
    }
    fn full_product_name(&self) -> &str {
        &self.full_product_name
    }
}

impl OrderableExporter for OrderableDto {
    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
    fn set_product_code(&mut self, code: &str) {
        self.product_code = code.to_string();
    }
    fn set_full_product_name(&mut self, name: &str) {
        self.full_product_name = name.to_string();
    }
}

impl OrderableDto {
    pub fn from_entity(entity: &Orderable) -> Self {
        let mut dto = Self::default();
        entity.export(&mut dto);
        dto
    }
}

/// 商品类型指派 DTO：(分类体系, 体系内编号) 二元组
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommodityTypeDto {
    /// 分类体系名称
    #[schema(example = "GS1")]
    pub classification_system: String,
    /// 体系内的分类编号
    #[schema(example = "0001")]
    pub classification_id: String,
}

impl From<&TradeItemClassification> for CommodityTypeDto {
    fn from(c: &TradeItemClassification) -> Self {
        Self {
            classification_system: c.classification_system.clone(),
            classification_id: c.classification_id.clone(),
        }
    }
}

impl From<&CommodityTypeDto> for TradeItemClassification {
    fn from(dto: &CommodityTypeDto) -> Self {
        Self {
            classification_system: dto.classification_system.clone(),
            classification_id: dto.classification_id.clone(),
        }
    }
}

/// 贸易品 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemDto {
    pub id: Option<Uuid>,
    /// 贸易品制造商
    #[schema(example = "ACME Pharma")]
    pub manufacturer_of_trade_item: String,
    /// 关联的可订购品目（非空）
    pub orderables: Vec<OrderableDto>,
    /// 商品类型指派
    #[serde(default)]
    pub classifications: Vec<CommodityTypeDto>,
}

impl TradeItemImporter for TradeItemDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
    fn manufacturer_of_trade_item(&self) -> &str {
        &self.manufacturer_of_trade_item
    }
    fn orderables(&self) -> Vec<&dyn OrderableImporter> {
        self.orderables
            .iter()
            .map(|o| o as &dyn OrderableImporter)
            .collect()
    }
    fn classifications(&self) -> Vec<TradeItemClassification> {
        self.classifications.iter().map(Into::into).collect()
    }
}

impl TradeItemExporter for TradeItemDto {
    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
    fn set_manufacturer_of_trade_item(&mut self, name: &str) {
        self.manufacturer_of_trade_item = name.to_string();
    }
    fn set_orderables(&mut self, orderables: &[Orderable]) {
        self.orderables = orderables.iter().map(OrderableDto::from_entity).collect();
    }
    fn set_classifications(&mut self, classifications: &[TradeItemClassification]) {
        self.classifications = classifications.iter().map(Into::into).collect();
    }
}

impl TradeItemDto {
    pub fn from_entity(entity: &TradeItem) -> Self {
        let mut dto = Self::default();
        entity.export(&mut dto);
        dto
    }
}

// ============================================================
//  权限/角色 DTO
// ============================================================

/// 权限 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RightDto {
    pub id: Option<Uuid>,
    /// 权限名
    #[schema(example = "ORDERABLES_MANAGE")]
    pub name: String,
}

impl RightImporter for RightDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl RightExporter for RightDto {
    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl RightDto {
    pub fn from_entity(entity: &Right) -> Self {
        let mut dto = Self::default();
        entity.export(&mut dto);
        dto
    }
}

/// 角色 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub id: Option<Uuid>,
    /// 角色名
    #[schema(example = "Storeroom Clerk")]
    pub name: String,
    pub description: Option<String>,
    /// 权限集（入站时仅名称有意义，出站时携带目录 id）
    pub rights: Vec<RightDto>,
}

impl RoleImporter for RoleDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn rights(&self) -> Vec<&dyn RightImporter> {
        self.rights.iter().map(|r| r as &dyn RightImporter).collect()
    }
}

impl RoleExporter for RoleDto {
    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
    fn set_description(&mut self, description: Option<&str>) {
        self.description = description.map(str::to_string);
    }
    fn set_rights(&mut self, rights: &[Right]) {
        self.rights = rights.iter().map(RightDto::from_entity).collect();
    }
}

impl RoleDto {
    pub fn from_entity(entity: &Role) -> Self {
        let mut dto = Self::default();
        entity.export(&mut dto);
        dto
    }
}

// ============================================================
//  设施/项目/监管节点 DTO
// ============================================================

/// 设施 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDto {
    pub id: Option<Uuid>,
    #[schema(example = "HC01")]
    pub code: String,
    #[schema(example = "Comfort Health Clinic")]
    pub name: String,
}

impl FacilityImporter for FacilityDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
    fn code(&self) -> &str {
        &self.code
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl FacilityExporter for FacilityDto {
    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
    fn set_code(&mut self, code: &str) {
        self.code = code.to_string();
    }
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl FacilityDto {
    pub fn from_entity(entity: &Facility) -> Self {
        let mut dto = Self::default();
        entity.export(&mut dto);
        dto
    }
}

/// 项目 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDto {
    pub id: Option<Uuid>,
    #[schema(example = "EPI")]
    pub code: String,
    #[schema(example = "Immunization")]
    pub name: String,
}

impl ProgramImporter for ProgramDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
    fn code(&self) -> &str {
        &self.code
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl ProgramExporter for ProgramDto {
    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
    fn set_code(&mut self, code: &str) {
        self.code = code.to_string();
    }
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl ProgramDto {
    pub fn from_entity(entity: &Program) -> Self {
        let mut dto = Self::default();
        entity.export(&mut dto);
        dto
    }
}

/// 监管节点 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupervisoryNodeDto {
    pub id: Option<Uuid>,
    #[schema(example = "SN1")]
    pub code: String,
    #[schema(example = "Central Supervisory Node")]
    pub name: String,
}

impl SupervisoryNodeImporter for SupervisoryNodeDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
    fn code(&self) -> &str {
        &self.code
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl SupervisoryNodeExporter for SupervisoryNodeDto {
    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
    fn set_code(&mut self, code: &str) {
        self.code = code.to_string();
    }
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl SupervisoryNodeDto {
    pub fn from_entity(entity: &SupervisoryNode) -> Self {
        let mut dto = Self::default();
        entity.export(&mut dto);
        dto
    }
}

// ============================================================
//  处理计划/周期 DTO
// ============================================================

/// 处理计划 DTO
///
/// 相等性仅由 `code` 定义：同一计划的两次导出（id 不同步时）仍视为相等。
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingScheduleDto {
    pub id: Option<Uuid>,
    /// 计划编码（唯一）
    #[schema(example = "monthly")]
    pub code: String,
    #[schema(example = "Monthly")]
    pub name: String,
    pub description: Option<String>,
}

impl PartialEq for ProcessingScheduleDto {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for ProcessingScheduleDto {}

impl ProcessingScheduleImporter for ProcessingScheduleDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
    fn code(&self) -> &str {
        &self.code
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl ProcessingScheduleExporter for ProcessingScheduleDto {
    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
    fn set_code(&mut self, code: &str) {
        self.code = code.to_string();
    }
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
    fn set_description(&mut self, description: Option<&str>) {
        self.description = description.map(str::to_string);
    }
}

impl ProcessingScheduleDto {
    pub fn from_entity(entity: &ProcessingSchedule) -> Self {
        let mut dto = Self::default();
        entity.export(&mut dto);
        dto
    }
}

/// 处理周期 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingPeriodDto {
    pub id: Option<Uuid>,
    #[schema(example = "Jan2026")]
    pub name: String,
    /// 周期起始日
    pub start_date: NaiveDate,
    /// 周期结束日
    pub end_date: NaiveDate,
    /// 所属处理计划
    pub processing_schedule: ProcessingScheduleDto,
}

impl ProcessingPeriodImporter for ProcessingPeriodDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }
    fn end_date(&self) -> NaiveDate {
        self.end_date
    }
    fn processing_schedule(&self) -> &dyn ProcessingScheduleImporter {
        &self.processing_schedule
    }
}

impl ProcessingPeriodExporter for ProcessingPeriodDto {
    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
    fn set_start_date(&mut self, date: NaiveDate) {
        self.start_date = date;
    }
    fn set_end_date(&mut self, date: NaiveDate) {
        self.end_date = date;
    }
    fn set_processing_schedule(&mut self, schedule: &ProcessingSchedule) {
        self.processing_schedule = ProcessingScheduleDto::from_entity(schedule);
    }
}

impl ProcessingPeriodDto {
    pub fn from_entity(entity: &ProcessingPeriod) -> Self {
        let mut dto = Self::default();
        entity.export(&mut dto);
        dto
    }
}

// ============================================================
//  供应线 DTO
// ============================================================

/// 供应线 DTO
///
/// 相等性由 id 与三个嵌套 DTO 定义，描述不参与比较。
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplyLineDto {
    pub id: Option<Uuid>,
    pub supervisory_node: SupervisoryNodeDto,
    pub program: ProgramDto,
    pub supplying_facility: FacilityDto,
    pub description: Option<String>,
}

impl PartialEq for SupplyLineDto {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.supervisory_node == other.supervisory_node
            && self.program == other.program
            && self.supplying_facility == other.supplying_facility
    }
}

impl Eq for SupplyLineDto {}

impl SupplyLineImporter for SupplyLineDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
    fn supervisory_node(&self) -> &dyn SupervisoryNodeImporter {
        &self.supervisory_node
    }
    fn program(&self) -> &dyn ProgramImporter {
        &self.program
    }
    fn supplying_facility(&self) -> &dyn FacilityImporter {
        &self.supplying_facility
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl SupplyLineExporter for SupplyLineDto {
    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
    fn set_supervisory_node(&mut self, node: &SupervisoryNode) {
        self.supervisory_node = SupervisoryNodeDto::from_entity(node);
    }
    fn set_program(&mut self, program: &Program) {
        self.program = ProgramDto::from_entity(program);
    }
    fn set_supplying_facility(&mut self, facility: &Facility) {
        self.supplying_facility = FacilityDto::from_entity(facility);
    }
    fn set_description(&mut self, description: Option<&str>) {
        self.description = description.map(str::to_string);
    }
}

impl SupplyLineDto {
    pub fn from_entity(entity: &SupplyLine) -> Self {
        let mut dto = Self::default();
        entity.export(&mut dto);
        dto
    }
}

// ============================================================
//  理想库存量 DTO
// ============================================================

/// 理想库存量 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdealStockAmountDto {
    pub id: Option<Uuid>,
    pub facility: FacilityDto,
    pub program: ProgramDto,
    pub orderable: OrderableDto,
    pub processing_period: ProcessingPeriodDto,
    /// 目标库存数量
    #[schema(example = 1000)]
    pub amount: i32,
}

impl IdealStockAmountImporter for IdealStockAmountDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
    fn facility(&self) -> &dyn FacilityImporter {
        &self.facility
    }
    fn program(&self) -> &dyn ProgramImporter {
        &self.program
    }
    fn orderable(&self) -> &dyn OrderableImporter {
        &self.orderable
    }
    fn processing_period(&self) -> &dyn ProcessingPeriodImporter {
        &self.processing_period
    }
    fn amount(&self) -> i32 {
        self.amount
    }
}

impl IdealStockAmountExporter for IdealStockAmountDto {
    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
    fn set_facility(&mut self, facility: &Facility) {
        self.facility = FacilityDto::from_entity(facility);
    }
    fn set_program(&mut self, program: &Program) {
        self.program = ProgramDto::from_entity(program);
    }
    fn set_orderable(&mut self, orderable: &Orderable) {
        self.orderable = OrderableDto::from_entity(orderable);
    }
    fn set_processing_period(&mut self, period: &ProcessingPeriod) {
        self.processing_period = ProcessingPeriodDto::from_entity(period);
    }
    fn set_amount(&mut self, amount: i32) {
        self.amount = amount;
    }
}

impl IdealStockAmountDto {
    pub fn from_entity(entity: &IdealStockAmount) -> Self {
        let mut dto = Self::default();
        entity.export(&mut dto);
        dto
    }
}

// ============================================================
//  分页与通用响应 DTO
// ============================================================

/// 分页响应 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T: Serialize + ToSchema> {
    /// 当前页内容
    pub content: Vec<T>,
    /// 页号（从 0 开始）
    pub number: u32,
    /// 页大小
    pub size: u32,
    /// 满足条件的记录总数
    pub total_elements: u64,
    /// 总页数
    pub total_pages: u64,
}

impl<T: Serialize + ToSchema> PageDto<T> {
    /// 从领域分页结果构建，元素经 `map` 转为 DTO。
    pub fn from_page<E>(page: &Page<E>, map: impl Fn(&E) -> T) -> Self {
        Self {
            content: page.content.iter().map(map).collect(),
            number: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
        }
    }
}

/// 构建失败响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 错误描述信息
    pub error: String,
}

impl ApiErrorResponse {
    /// 从错误信息构建
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

// ============================================================
//  鉴权 DTO
// ============================================================

/// JWT Claims 内容 (内部使用，不暴露到 Swagger)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 主体标识 (外部鉴权服务的用户/客户端 id)
    pub sub: String,
    /// 主体被授予的权限名集合
    #[serde(default)]
    pub rights: Vec<String>,
    /// Token 过期时间 (Unix 时间戳)
    pub exp: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_dto(id: Option<Uuid>, code: &str) -> ProcessingScheduleDto {
        ProcessingScheduleDto {
            id,
            code: code.to_string(),
            name: "Monthly".to_string(),
            description: None,
        }
    }

    #[test]
    fn schedule_dto_equality_is_by_code_alone() {
        let a = schedule_dto(Some(Uuid::new_v4()), "monthly");
        let b = schedule_dto(Some(Uuid::new_v4()), "monthly");
        let c = schedule_dto(a.id, "quarterly");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn supply_line_dto_equality_ignores_description() {
        let id = Some(Uuid::new_v4());
        let node_id = Some(Uuid::new_v4());
        let make = |desc: Option<&str>| SupplyLineDto {
            id,
            supervisory_node: SupervisoryNodeDto {
                id: node_id,
                code: "SN1".to_string(),
                name: "Central".to_string(),
            },
            program: ProgramDto::default(),
            supplying_facility: FacilityDto::default(),
            description: desc.map(str::to_string),
        };

        assert_eq!(make(None), make(Some("warehouse to clinic")));

        let mut other = make(None);
        other.id = Some(Uuid::new_v4());
        assert_ne!(make(None), other);
    }

    #[test]
    fn trade_item_round_trips_through_importer_and_exporter() {
        let dto = TradeItemDto {
            id: Some(Uuid::new_v4()),
            manufacturer_of_trade_item: "ACME Pharma".to_string(),
            orderables: vec![OrderableDto {
                id: Some(Uuid::new_v4()),
                product_code: "C100".to_string(),
                full_product_name: "Paracetamol 500mg".to_string(),
            }],
            classifications: vec![CommodityTypeDto {
                classification_system: "GS1".to_string(),
                classification_id: "0001".to_string(),
            }],
        };

        let entity = TradeItem::new_instance(&dto).unwrap();
        let round_tripped = TradeItemDto::from_entity(&entity);

        assert_eq!(dto, round_tripped);
    }

    #[test]
    fn supply_line_round_trips_to_equal_dto() {
        let dto = SupplyLineDto {
            id: Some(Uuid::new_v4()),
            supervisory_node: SupervisoryNodeDto {
                id: Some(Uuid::new_v4()),
                code: "SN1".to_string(),
                name: "Central".to_string(),
            },
            program: ProgramDto {
                id: Some(Uuid::new_v4()),
                code: "EPI".to_string(),
                name: "Immunization".to_string(),
            },
            supplying_facility: FacilityDto {
                id: Some(Uuid::new_v4()),
                code: "WH01".to_string(),
                name: "Central Warehouse".to_string(),
            },
            description: Some("main line".to_string()),
        };

        let entity = SupplyLine::new_instance(&dto);
        assert_eq!(dto, SupplyLineDto::from_entity(&entity));
    }

    #[test]
    fn ideal_stock_amount_round_trips_to_equal_dto() {
        let dto = IdealStockAmountDto {
            id: Some(Uuid::new_v4()),
            facility: FacilityDto {
                id: Some(Uuid::new_v4()),
                code: "HC01".to_string(),
                name: "Clinic".to_string(),
            },
            program: ProgramDto {
                id: Some(Uuid::new_v4()),
                code: "EPI".to_string(),
                name: "Immunization".to_string(),
            },
            orderable: OrderableDto {
                id: Some(Uuid::new_v4()),
                product_code: "C100".to_string(),
                full_product_name: "Vaccine".to_string(),
            },
            processing_period: ProcessingPeriodDto {
                id: Some(Uuid::new_v4()),
                name: "Jan2026".to_string(),
                start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
                processing_schedule: schedule_dto(Some(Uuid::new_v4()), "monthly"),
            },
            amount: 1000,
        };

        let entity = IdealStockAmount::new_instance(&dto);
        assert_eq!(dto, IdealStockAmountDto::from_entity(&entity));
    }

    #[test]
    fn page_dto_carries_pagination_metadata() {
        let page = Page {
            content: vec![1, 2, 3],
            page: 0,
            size: 3,
            total_elements: 7,
        };

        let dto = PageDto::from_page(&page, |v| RightDto {
            id: None,
            name: v.to_string(),
        });

        assert_eq!(dto.content.len(), 3);
        assert_eq!(dto.total_elements, 7);
        assert_eq!(dto.total_pages, 3);
    }
}
