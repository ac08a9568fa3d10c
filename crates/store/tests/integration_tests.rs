use chrono::NaiveDate;
use tempfile::tempdir;
use uuid::Uuid;

use refdata_core::catalog::entity::{Orderable, TradeItem, TradeItemClassification};
use refdata_core::catalog::port::TradeItemStore;
use refdata_core::rights::entity::{Right, Role};
use refdata_core::rights::port::{RightStore, RoleStore};
use refdata_core::schedule::entity::{ProcessingPeriod, ProcessingSchedule};
use refdata_core::schedule::port::ScheduleStore;
use refdata_core::store::error::StoreError;
use refdata_core::supply::entity::{Facility, Program, SupervisoryNode, SupplyLine};
use refdata_core::supply::port::SupplyStore;
use refdata_store::catalog::SqliteTradeItemStore;
use refdata_store::config::set_root_dir;
use refdata_store::rights::SqliteRightsStore;
use refdata_store::schedule::SqliteScheduleStore;
use refdata_store::supply::SqliteSupplyStore;

fn orderable(code: &str) -> Orderable {
    Orderable {
        id: Uuid::new_v4(),
        product_code: code.to_string(),
        full_product_name: format!("Product {code}"),
    }
}

fn trade_item(manufacturer: &str, classification_id: &str) -> TradeItem {
    TradeItem {
        id: Uuid::new_v4(),
        manufacturer_of_trade_item: manufacturer.to_string(),
        orderables: vec![orderable(&format!("C-{manufacturer}"))],
        classifications: vec![TradeItemClassification {
            classification_system: "GS1".to_string(),
            classification_id: classification_id.to_string(),
        }],
    }
}

#[tokio::test]
async fn test_store_full_integration() {
    // 1. 初始化临时测试环境
    let tmp_dir = tempdir().expect("Failed to create temp dir");
    set_root_dir(tmp_dir.path().to_path_buf());

    // 2. 贸易品存取
    let item_store = SqliteTradeItemStore::new()
        .await
        .expect("Failed to create trade item store");

    let mut item = trade_item("ACME", "gtin-0001");
    item_store.save(&item).await.unwrap();

    let all = item_store.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], item);

    // 整体替换：新的品目集与分类覆盖旧的
    item.orderables = vec![orderable("C-NEW")];
    item.classifications[0].classification_id = "gtin-0002".to_string();
    item_store.save(&item).await.unwrap();

    let replaced = item_store.find_all().await.unwrap();
    assert_eq!(replaced[0].orderables.len(), 1);
    assert_eq!(replaced[0].orderables[0].product_code, "C-NEW");
    assert_eq!(replaced[0].classifications[0].classification_id, "gtin-0002");
    assert_eq!(item_store.count().await.unwrap(), 1);

    // 3. 权限目录与角色
    let rights_store = SqliteRightsStore::new()
        .await
        .expect("Failed to create rights store");

    let right = Right {
        id: Uuid::new_v4(),
        name: "ORDERABLES_MANAGE".to_string(),
    };
    RightStore::save(&rights_store, &right).await.unwrap();
    let found = rights_store.find_by_name("ORDERABLES_MANAGE").await.unwrap();
    assert_eq!(found, Some(right.clone()));
    assert!(rights_store.find_by_name("NO_SUCH_RIGHT").await.unwrap().is_none());

    let role = Role {
        id: Uuid::new_v4(),
        name: "storeroom clerk".to_string(),
        description: Some("warehouse staff".to_string()),
        rights: vec![right.clone()],
    };
    RoleStore::save(&rights_store, &role).await.unwrap();

    let loaded = rights_store.find_by_id(role.id).await.unwrap().unwrap();
    assert_eq!(loaded, role);
    assert_eq!(RoleStore::count(&rights_store).await.unwrap(), 1);

    // 同名角色违反唯一约束，应归类为完整性冲突
    let duplicate = Role {
        id: Uuid::new_v4(),
        name: "storeroom clerk".to_string(),
        description: None,
        rights: vec![right.clone()],
    };
    let err = RoleStore::save(&rights_store, &duplicate).await.unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));
    assert_eq!(RoleStore::count(&rights_store).await.unwrap(), 1);

    // 删除角色
    rights_store.delete(role.id).await.unwrap();
    assert_eq!(RoleStore::count(&rights_store).await.unwrap(), 0);
    assert!(matches!(
        rights_store.delete(role.id).await.unwrap_err(),
        StoreError::NotFound
    ));

    // 4. 处理计划与周期
    let schedule_store = SqliteScheduleStore::new()
        .await
        .expect("Failed to create schedule store");

    let schedule = ProcessingSchedule {
        id: Uuid::new_v4(),
        code: "M-2026".to_string(),
        name: "Monthly 2026".to_string(),
        description: None,
    };
    schedule_store.save_schedule(&schedule).await.unwrap();

    let period = ProcessingPeriod {
        id: Uuid::new_v4(),
        name: "Jan2026".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        processing_schedule: schedule.clone(),
    };
    schedule_store.save_period(&period).await.unwrap();

    let periods = schedule_store
        .find_periods_by_schedule(schedule.id)
        .await
        .unwrap();
    assert_eq!(periods, vec![period.clone()]);

    // 计划编码唯一
    let clashing = ProcessingSchedule {
        id: Uuid::new_v4(),
        code: "M-2026".to_string(),
        name: "Other".to_string(),
        description: None,
    };
    assert!(matches!(
        schedule_store.save_schedule(&clashing).await.unwrap_err(),
        StoreError::Conflict(_)
    ));

    // 5. 供应线检索
    let supply_store = SqliteSupplyStore::new()
        .await
        .expect("Failed to create supply store");

    let line = SupplyLine {
        id: Uuid::new_v4(),
        supervisory_node: SupervisoryNode {
            id: Uuid::new_v4(),
            code: "SN1".to_string(),
            name: "Central node".to_string(),
        },
        program: Program {
            id: Uuid::new_v4(),
            code: "EM".to_string(),
            name: "Essential Meds".to_string(),
        },
        supplying_facility: Facility {
            id: Uuid::new_v4(),
            code: "W05".to_string(),
            name: "Central Warehouse".to_string(),
        },
        description: None,
    };
    supply_store.save_supply_line(&line).await.unwrap();

    let hits = supply_store
        .search_supply_lines(Some(line.program.id), None)
        .await
        .unwrap();
    assert_eq!(hits, vec![line.clone()]);

    let misses = supply_store
        .search_supply_lines(Some(Uuid::new_v4()), None)
        .await
        .unwrap();
    assert!(misses.is_empty());

    let everything = supply_store.search_supply_lines(None, None).await.unwrap();
    assert_eq!(everything.len(), 1);
}
