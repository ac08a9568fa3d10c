//! 理想库存量分页检索与分类匹配的集成测试。

use chrono::NaiveDate;
use tempfile::tempdir;
use uuid::Uuid;

use refdata_core::catalog::entity::{Orderable, TradeItem, TradeItemClassification};
use refdata_core::catalog::port::TradeItemStore;
use refdata_core::common::PageRequest;
use refdata_core::schedule::entity::{ProcessingPeriod, ProcessingSchedule};
use refdata_core::schedule::port::ScheduleStore;
use refdata_core::stock::entity::IdealStockAmount;
use refdata_core::stock::port::{IdealStockAmountStore, IsaSearchParams};
use refdata_core::supply::entity::{Facility, Program};
use refdata_core::supply::port::SupplyStore;
use refdata_store::catalog::SqliteTradeItemStore;
use refdata_store::config::set_root_dir;
use refdata_store::schedule::SqliteScheduleStore;
use refdata_store::stock::SqliteIdealStockAmountStore;
use refdata_store::supply::SqliteSupplyStore;

struct Fixture {
    item_store: SqliteTradeItemStore,
    schedule_store: SqliteScheduleStore,
    supply_store: SqliteSupplyStore,
    isa_store: SqliteIdealStockAmountStore,
}

async fn fixture() -> Fixture {
    Fixture {
        item_store: SqliteTradeItemStore::new().await.unwrap(),
        schedule_store: SqliteScheduleStore::new().await.unwrap(),
        supply_store: SqliteSupplyStore::new().await.unwrap(),
        isa_store: SqliteIdealStockAmountStore::new().await.unwrap(),
    }
}

fn facility(code: &str) -> Facility {
    Facility {
        id: Uuid::new_v4(),
        code: code.to_string(),
        name: format!("Facility {code}"),
    }
}

fn period(schedule: &ProcessingSchedule, name: &str, month: u32) -> ProcessingPeriod {
    ProcessingPeriod {
        id: Uuid::new_v4(),
        name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, month, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, month, 28).unwrap(),
        processing_schedule: schedule.clone(),
    }
}

#[tokio::test]
async fn isa_search_filters_and_pages() {
    // 两个测试共享进程级 root dir，目录保留到进程结束
    let root = tempdir().expect("Failed to create temp dir").keep();
    set_root_dir(root);
    let f = fixture().await;

    // 组织结构与周期
    let facility_a = facility("F-A");
    let facility_b = facility("F-B");
    f.supply_store.save_facility(&facility_a).await.unwrap();
    f.supply_store.save_facility(&facility_b).await.unwrap();

    let program = Program {
        id: Uuid::new_v4(),
        code: "EM".to_string(),
        name: "Essential Meds".to_string(),
    };
    f.supply_store.save_program(&program).await.unwrap();

    let schedule = ProcessingSchedule {
        id: Uuid::new_v4(),
        code: "M-2026".to_string(),
        name: "Monthly".to_string(),
        description: None,
    };
    f.schedule_store.save_schedule(&schedule).await.unwrap();
    let jan = period(&schedule, "Jan2026", 1);
    let feb = period(&schedule, "Feb2026", 2);
    f.schedule_store.save_period(&jan).await.unwrap();
    f.schedule_store.save_period(&feb).await.unwrap();

    // 带分类指派的贸易品与品目
    let classified = Orderable {
        id: Uuid::new_v4(),
        product_code: "C100".to_string(),
        full_product_name: "Paracetamol".to_string(),
    };
    let plain = Orderable {
        id: Uuid::new_v4(),
        product_code: "C200".to_string(),
        full_product_name: "Gauze".to_string(),
    };
    let item = TradeItem {
        id: Uuid::new_v4(),
        manufacturer_of_trade_item: "ACME".to_string(),
        orderables: vec![classified.clone()],
        classifications: vec![TradeItemClassification {
            classification_system: "GS1".to_string(),
            classification_id: "cid-7".to_string(),
        }],
    };
    f.item_store.save(&item).await.unwrap();
    let other_item = TradeItem {
        id: Uuid::new_v4(),
        manufacturer_of_trade_item: "Globex".to_string(),
        orderables: vec![plain.clone()],
        classifications: vec![],
    };
    f.item_store.save(&other_item).await.unwrap();

    // 三条理想库存量记录
    let isa = |fac: &Facility, ord: &Orderable, per: &ProcessingPeriod, amount: i32| {
        IdealStockAmount {
            id: Uuid::new_v4(),
            facility: fac.clone(),
            program: program.clone(),
            orderable: ord.clone(),
            processing_period: per.clone(),
            amount,
        }
    };
    f.isa_store.save(&isa(&facility_a, &classified, &jan, 100)).await.unwrap();
    f.isa_store.save(&isa(&facility_a, &plain, &feb, 50)).await.unwrap();
    f.isa_store.save(&isa(&facility_b, &classified, &feb, 75)).await.unwrap();

    let page = PageRequest::new(0, 10);

    // 无条件 = 全量（分页）
    let all = f
        .isa_store
        .search(IsaSearchParams::default(), page)
        .await
        .unwrap();
    assert_eq!(all.total_elements, 3);
    assert_eq!(all.content.len(), 3);
    // 读取端水化出完整对象图
    assert_eq!(all.content[0].processing_period.processing_schedule.code, "M-2026");

    // 设施过滤
    let by_facility = f
        .isa_store
        .search(
            IsaSearchParams {
                facility_id: Some(facility_a.id),
                ..Default::default()
            },
            page,
        )
        .await
        .unwrap();
    assert_eq!(by_facility.total_elements, 2);

    // 周期过滤与 AND 组合
    let combined = f
        .isa_store
        .search(
            IsaSearchParams {
                facility_id: Some(facility_a.id),
                processing_period_id: Some(feb.id),
                ..Default::default()
            },
            page,
        )
        .await
        .unwrap();
    assert_eq!(combined.total_elements, 1);
    assert_eq!(combined.content[0].amount, 50);

    // 商品类型经 品目 → 贸易品 → 分类 链路过滤
    let by_commodity = f
        .isa_store
        .search(
            IsaSearchParams {
                commodity_type_id: Some("cid-7".to_string()),
                ..Default::default()
            },
            page,
        )
        .await
        .unwrap();
    assert_eq!(by_commodity.total_elements, 2);
    assert!(by_commodity
        .content
        .iter()
        .all(|i| i.orderable.id == classified.id));

    // 分页：页大小 2，第二页只剩 1 条，总数不变
    let first = f
        .isa_store
        .search(IsaSearchParams::default(), PageRequest::new(0, 2))
        .await
        .unwrap();
    assert_eq!(first.content.len(), 2);
    assert_eq!(first.total_elements, 3);
    assert_eq!(first.total_pages(), 2);

    let second = f
        .isa_store
        .search(IsaSearchParams::default(), PageRequest::new(1, 2))
        .await
        .unwrap();
    assert_eq!(second.content.len(), 1);
}

#[tokio::test]
async fn classification_lookup_exact_and_partial() {
    // 与上个测试同进程共享 root dir，数据隔离靠独立的分类编号
    let root = tempdir().expect("Failed to create temp dir").keep();
    set_root_dir(root);
    let f = fixture().await;

    let make = |manufacturer: &str, cid: &str| TradeItem {
        id: Uuid::new_v4(),
        manufacturer_of_trade_item: manufacturer.to_string(),
        orderables: vec![Orderable {
            id: Uuid::new_v4(),
            product_code: format!("P-{manufacturer}"),
            full_product_name: manufacturer.to_string(),
        }],
        classifications: vec![TradeItemClassification {
            classification_system: "GS1".to_string(),
            classification_id: cid.to_string(),
        }],
    };

    let exact = make("Exact", "lookup-cid");
    let superset = make("Superset", "XX-LOOKUP-CID-99");
    let unrelated = make("Unrelated", "other");
    f.item_store.save(&exact).await.unwrap();
    f.item_store.save(&superset).await.unwrap();
    f.item_store.save(&unrelated).await.unwrap();

    // 等值匹配只命中完全一致的编号
    let hits = f
        .item_store
        .find_by_classification_id("lookup-cid")
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].manufacturer_of_trade_item, "Exact");

    // 模糊匹配大小写不敏感地命中子串
    let partial = f
        .item_store
        .find_by_classification_id_like("lookup-cid")
        .await
        .unwrap();
    assert_eq!(partial.len(), 2);

    let none = f
        .item_store
        .find_by_classification_id("nothing")
        .await
        .unwrap();
    assert!(none.is_empty());
}
