use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::RightsError;

/// 系统内置权限名
pub mod right_name {
    pub const ORDERABLES_MANAGE: &str = "ORDERABLES_MANAGE";
    pub const ROLES_MANAGE: &str = "ROLES_MANAGE";
    pub const PROCESSING_SCHEDULES_MANAGE: &str = "PROCESSING_SCHEDULES_MANAGE";
    pub const SUPPLY_LINES_MANAGE: &str = "SUPPLY_LINES_MANAGE";
    pub const SERVICE_ACCOUNTS_MANAGE: &str = "SERVICE_ACCOUNTS_MANAGE";
}

/// # Summary
/// 权限实体：用户可持有的具名能力，控制器在执行变更操作前检查。
///
/// # Invariants
/// - `name` 在权限目录中唯一。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Right {
    pub id: Uuid,
    pub name: String,
}

/// 权限的外部数据源视图
pub trait RightImporter {
    fn id(&self) -> Option<Uuid>;
    fn name(&self) -> &str;
}

/// 权限的外部数据汇视图
pub trait RightExporter {
    fn set_id(&mut self, id: Uuid);
    fn set_name(&mut self, name: &str);
}

impl Right {
    pub fn new_instance(importer: &dyn RightImporter) -> Self {
        Self {
            id: importer.id().unwrap_or_else(Uuid::new_v4),
            name: importer.name().to_string(),
        }
    }

    pub fn export(&self, exporter: &mut dyn RightExporter) {
        exporter.set_id(self.id);
        exporter.set_name(&self.name);
    }
}

/// # Summary
/// 角色实体：一组互不重复权限的具名捆绑。
///
/// # Invariants
/// - 权限集非空且按名称互不重复。
/// - 由外部输入构造时，权限此刻仅是具名引用，须经
///   `RoleService` 解析为权限目录中的规范记录后方可持久化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub rights: Vec<Right>,
}

/// 角色的外部数据源视图。权限以 Importer 能力暴露。
pub trait RoleImporter {
    fn id(&self) -> Option<Uuid>;
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn rights(&self) -> Vec<&dyn RightImporter>;
}

/// 角色的外部数据汇视图
pub trait RoleExporter {
    fn set_id(&mut self, id: Uuid);
    fn set_name(&mut self, name: &str);
    fn set_description(&mut self, description: Option<&str>);
    fn set_rights(&mut self, rights: &[Right]);
}

impl Role {
    /// # Summary
    /// 从 Importer 视图构造角色并做结构校验。
    ///
    /// # Logic
    /// 1. 角色名非空。
    /// 2. 权限集非空。
    /// 3. 权限名互不重复，重复即整体拒绝（既定策略：报错而非静默合并）。
    ///
    /// # Returns
    /// 校验失败返回 `RightsError`，不产生部分构造的角色。
    pub fn new_instance(importer: &dyn RoleImporter) -> Result<Self, RightsError> {
        let name = importer.name().trim();
        if name.is_empty() {
            return Err(RightsError::MissingName);
        }

        let right_importers = importer.rights();
        if right_importers.is_empty() {
            return Err(RightsError::NoRights);
        }

        let mut seen = HashSet::new();
        let mut rights = Vec::with_capacity(right_importers.len());
        for right in right_importers {
            if !seen.insert(right.name().to_string()) {
                return Err(RightsError::DuplicateRight(right.name().to_string()));
            }
            rights.push(Right::new_instance(right));
        }

        Ok(Self {
            id: importer.id().unwrap_or_else(Uuid::new_v4),
            name: name.to_string(),
            description: importer.description().map(str::to_string),
            rights,
        })
    }

    /// 无条件写出全部属性。
    pub fn export(&self, exporter: &mut dyn RoleExporter) {
        exporter.set_id(self.id);
        exporter.set_name(&self.name);
        exporter.set_description(self.description.as_deref());
        exporter.set_rights(&self.rights);
    }

    /// 角色是否持有指定权限
    pub fn has_right(&self, name: &str) -> bool {
        self.rights.iter().any(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeRight {
        name: String,
    }

    impl RightImporter for FakeRight {
        fn id(&self) -> Option<Uuid> {
            None
        }
        fn name(&self) -> &str {
            &self.name
        }
    }

    struct FakeRole {
        name: String,
        rights: Vec<FakeRight>,
    }

    impl RoleImporter for FakeRole {
        fn id(&self) -> Option<Uuid> {
            None
        }
        fn name(&self) -> &str {
            &self.name
        }
        fn description(&self) -> Option<&str> {
            None
        }
        fn rights(&self) -> Vec<&dyn RightImporter> {
            self.rights.iter().map(|r| r as &dyn RightImporter).collect()
        }
    }

    fn role_with(rights: &[&str]) -> FakeRole {
        FakeRole {
            name: "storeroom clerk".to_string(),
            rights: rights
                .iter()
                .map(|n| FakeRight {
                    name: (*n).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn new_instance_collects_distinct_rights() {
        let role = Role::new_instance(&role_with(&["A", "B", "C"])).unwrap();
        assert_eq!(role.rights.len(), 3);
        assert!(role.has_right("B"));
    }

    #[test]
    fn new_instance_rejects_duplicate_rights() {
        let result = Role::new_instance(&role_with(&["A", "B", "A"]));
        assert_eq!(result.unwrap_err(), RightsError::DuplicateRight("A".to_string()));
    }

    #[test]
    fn new_instance_rejects_empty_rights() {
        let result = Role::new_instance(&role_with(&[]));
        assert_eq!(result.unwrap_err(), RightsError::NoRights);
    }

    #[test]
    fn new_instance_rejects_blank_name() {
        let mut importer = role_with(&["A"]);
        importer.name = "  ".to_string();
        assert_eq!(Role::new_instance(&importer).unwrap_err(), RightsError::MissingName);
    }
}
