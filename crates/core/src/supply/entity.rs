use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 设施实体：存有库存并接收供应的物理地点。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

pub trait FacilityImporter {
    fn id(&self) -> Option<Uuid>;
    fn code(&self) -> &str;
    fn name(&self) -> &str;
}

pub trait FacilityExporter {
    fn set_id(&mut self, id: Uuid);
    fn set_code(&mut self, code: &str);
    fn set_name(&mut self, name: &str);
}

impl Facility {
    pub fn new_instance(importer: &dyn FacilityImporter) -> Self {
        Self {
            id: importer.id().unwrap_or_else(Uuid::new_v4),
            code: importer.code().to_string(),
            name: importer.name().to_string(),
        }
    }

    pub fn export(&self, exporter: &mut dyn FacilityExporter) {
        exporter.set_id(self.id);
        exporter.set_code(&self.code);
        exporter.set_name(&self.name);
    }
}

/// 项目实体：一条供应业务线（如基本药物、疫苗）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

pub trait ProgramImporter {
    fn id(&self) -> Option<Uuid>;
    fn code(&self) -> &str;
    fn name(&self) -> &str;
}

pub trait ProgramExporter {
    fn set_id(&mut self, id: Uuid);
    fn set_code(&mut self, code: &str);
    fn set_name(&mut self, name: &str);
}

impl Program {
    pub fn new_instance(importer: &dyn ProgramImporter) -> Self {
        Self {
            id: importer.id().unwrap_or_else(Uuid::new_v4),
            code: importer.code().to_string(),
            name: importer.name().to_string(),
        }
    }

    pub fn export(&self, exporter: &mut dyn ProgramExporter) {
        exporter.set_id(self.id);
        exporter.set_code(&self.code);
        exporter.set_name(&self.name);
    }
}

/// 监管节点实体：供应层级中的一级管理节点。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisoryNode {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

pub trait SupervisoryNodeImporter {
    fn id(&self) -> Option<Uuid>;
    fn code(&self) -> &str;
    fn name(&self) -> &str;
}

pub trait SupervisoryNodeExporter {
    fn set_id(&mut self, id: Uuid);
    fn set_code(&mut self, code: &str);
    fn set_name(&mut self, name: &str);
}

impl SupervisoryNode {
    pub fn new_instance(importer: &dyn SupervisoryNodeImporter) -> Self {
        Self {
            id: importer.id().unwrap_or_else(Uuid::new_v4),
            code: importer.code().to_string(),
            name: importer.name().to_string(),
        }
    }

    pub fn export(&self, exporter: &mut dyn SupervisoryNodeExporter) {
        exporter.set_id(self.id);
        exporter.set_code(&self.code);
        exporter.set_name(&self.name);
    }
}

/// # Summary
/// 供应线实体：监管节点在某项目下由哪个设施供货。
///
/// # Invariants
/// - 三个引用均必填。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyLine {
    pub id: Uuid,
    pub supervisory_node: SupervisoryNode,
    pub program: Program,
    pub supplying_facility: Facility,
    pub description: Option<String>,
}

/// 供应线的外部数据源视图。嵌套实体以各自的 Importer 能力暴露。
pub trait SupplyLineImporter {
    fn id(&self) -> Option<Uuid>;
    fn supervisory_node(&self) -> &dyn SupervisoryNodeImporter;
    fn program(&self) -> &dyn ProgramImporter;
    fn supplying_facility(&self) -> &dyn FacilityImporter;
    fn description(&self) -> Option<&str>;
}

pub trait SupplyLineExporter {
    fn set_id(&mut self, id: Uuid);
    fn set_supervisory_node(&mut self, node: &SupervisoryNode);
    fn set_program(&mut self, program: &Program);
    fn set_supplying_facility(&mut self, facility: &Facility);
    fn set_description(&mut self, description: Option<&str>);
}

impl SupplyLine {
    pub fn new_instance(importer: &dyn SupplyLineImporter) -> Self {
        Self {
            id: importer.id().unwrap_or_else(Uuid::new_v4),
            supervisory_node: SupervisoryNode::new_instance(importer.supervisory_node()),
            program: Program::new_instance(importer.program()),
            supplying_facility: Facility::new_instance(importer.supplying_facility()),
            description: importer.description().map(str::to_string),
        }
    }

    /// 无条件写出全部属性。
    pub fn export(&self, exporter: &mut dyn SupplyLineExporter) {
        exporter.set_id(self.id);
        exporter.set_supervisory_node(&self.supervisory_node);
        exporter.set_program(&self.program);
        exporter.set_supplying_facility(&self.supplying_facility);
        exporter.set_description(self.description.as_deref());
    }
}
