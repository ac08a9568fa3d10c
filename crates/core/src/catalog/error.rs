use thiserror::Error;

/// 商品目录领域校验错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// 贸易品至少要关联一个可订购品目
    #[error("Trade item must be associated with at least one orderable")]
    NoOrderables,
    /// 制造商名称缺失
    #[error("Trade item manufacturer is required")]
    MissingManufacturer,
}
