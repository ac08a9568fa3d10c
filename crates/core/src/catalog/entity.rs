use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::CatalogError;

/// # Summary
/// 可订购品目实体，目录中可被订购/发放的基础条目。
///
/// # Invariants
/// - `product_code` 在目录内唯一。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orderable {
    // 全局唯一标识
    pub id: Uuid,
    // 产品编码
    pub product_code: String,
    // 产品全称
    pub full_product_name: String,
}

/// 可订购品目的外部数据源视图
pub trait OrderableImporter {
    fn id(&self) -> Option<Uuid>;
    fn product_code(&self) -> &str;
    fn full_product_name(&self) -> &str;
}

/// 可订购品目的外部数据汇视图
pub trait OrderableExporter {
    fn set_id(&mut self, id: Uuid);
    fn set_product_code(&mut self, code: &str);
    fn set_full_product_name(&mut self, name: &str);
}

impl Orderable {
    /// # Summary
    /// 从 Importer 视图逐字段构造新实体。
    ///
    /// # Logic
    /// 保留外部提供的 id（幂等更新），缺失时生成新 id（创建）。
    pub fn new_instance(importer: &dyn OrderableImporter) -> Self {
        Self {
            id: importer.id().unwrap_or_else(Uuid::new_v4),
            product_code: importer.product_code().to_string(),
            full_product_name: importer.full_product_name().to_string(),
        }
    }

    /// 无条件写出全部属性，导出不会失败也不会遗漏字段。
    pub fn export(&self, exporter: &mut dyn OrderableExporter) {
        exporter.set_id(self.id);
        exporter.set_product_code(&self.product_code);
        exporter.set_full_product_name(&self.full_product_name);
    }
}

/// # Summary
/// 贸易品的外部分类标识：(分类体系, 体系内编号) 二元组。
///
/// # Invariants
/// - 同一贸易品内每个 `classification_system` 至多出现一次。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeItemClassification {
    // 分类体系名称 (如 GS1)
    pub classification_system: String,
    // 体系内的分类编号
    pub classification_id: String,
}

/// # Summary
/// 贸易品实体：具体可交易的产品实例。
///
/// # Invariants
/// - 必须关联至少一个可订购品目。
/// - 分类列表按体系名去重，见 [`TradeItem::assign_commodity_type`]。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeItem {
    pub id: Uuid,
    // 贸易品制造商
    pub manufacturer_of_trade_item: String,
    // 关联的可订购品目（非空）
    pub orderables: Vec<Orderable>,
    // 外部分类（"商品类型"）指派
    pub classifications: Vec<TradeItemClassification>,
}

/// 贸易品的外部数据源视图。
/// 嵌套实体以各自的 Importer 能力暴露，工厂据此递归重建对象图。
pub trait TradeItemImporter {
    fn id(&self) -> Option<Uuid>;
    fn manufacturer_of_trade_item(&self) -> &str;
    fn orderables(&self) -> Vec<&dyn OrderableImporter>;
    fn classifications(&self) -> Vec<TradeItemClassification>;
}

/// 贸易品的外部数据汇视图
pub trait TradeItemExporter {
    fn set_id(&mut self, id: Uuid);
    fn set_manufacturer_of_trade_item(&mut self, name: &str);
    fn set_orderables(&mut self, orderables: &[Orderable]);
    fn set_classifications(&mut self, classifications: &[TradeItemClassification]);
}

impl TradeItem {
    /// # Summary
    /// 从 Importer 视图构造贸易品，校验领域不变量。
    ///
    /// # Logic
    /// 1. 校验制造商非空、品目集非空。
    /// 2. 递归用各品目的 Importer 能力重建 `Orderable`。
    /// 3. 保留外部 id（存在则幂等更新，否则创建）。
    ///
    /// # Returns
    /// 校验失败返回 `CatalogError`，不产生部分构造的实体。
    pub fn new_instance(importer: &dyn TradeItemImporter) -> Result<Self, CatalogError> {
        let manufacturer = importer.manufacturer_of_trade_item().trim();
        if manufacturer.is_empty() {
            return Err(CatalogError::MissingManufacturer);
        }

        let orderables: Vec<Orderable> = importer
            .orderables()
            .into_iter()
            .map(Orderable::new_instance)
            .collect();
        if orderables.is_empty() {
            return Err(CatalogError::NoOrderables);
        }

        Ok(Self {
            id: importer.id().unwrap_or_else(Uuid::new_v4),
            manufacturer_of_trade_item: manufacturer.to_string(),
            orderables,
            classifications: importer.classifications(),
        })
    }

    /// 无条件写出全部属性。
    pub fn export(&self, exporter: &mut dyn TradeItemExporter) {
        exporter.set_id(self.id);
        exporter.set_manufacturer_of_trade_item(&self.manufacturer_of_trade_item);
        exporter.set_orderables(&self.orderables);
        exporter.set_classifications(&self.classifications);
    }

    /// # Summary
    /// 指派商品类型：同一分类体系至多保留一个编号。
    ///
    /// # Logic
    /// 体系已存在则就地替换编号，否则追加新指派。
    pub fn assign_commodity_type(&mut self, system: &str, classification_id: &str) {
        match self
            .classifications
            .iter_mut()
            .find(|c| c.classification_system == system)
        {
            Some(existing) => existing.classification_id = classification_id.to_string(),
            None => self.classifications.push(TradeItemClassification {
                classification_system: system.to_string(),
                classification_id: classification_id.to_string(),
            }),
        }
    }
}
