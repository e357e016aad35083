// ==========================================
// 施工安全合规评分系统 - 演示主入口
// ==========================================
// 依据: Safety_DSS_Master_Spec.md
// 系统定位: 决策支持系统
// 用途: 以内置玻璃幕墙主检查表跑一轮完整评估并输出 JSON
// ==========================================

use anyhow::Result;
use site_safety_scoring::catalog;
use site_safety_scoring::domain::hazard::{TaskDescriptor, WeatherReading};
use site_safety_scoring::domain::response::ItemResponse;
use site_safety_scoring::{i18n, logging, SafetyApi};

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("施工安全合规评分系统 - 决策支持系统");
    tracing::info!("系统版本: {}", site_safety_scoring::VERSION);
    tracing::info!("==================================================");

    let api = SafetyApi::new();
    let definition = catalog::glass_work_checklist();

    // 示例提交: 坠落防护一项失败,其余合格
    let responses = vec![
        ItemResponse::new("fp_001", false),
        ItemResponse::new("fp_002", true),
        ItemResponse::new("fp_003", true),
        ItemResponse::new("gh_001", true),
        ItemResponse::new("gh_003", true),
        ItemResponse::new("eq_001", true),
        ItemResponse::new("sc_001", true),
    ];

    let record = api.evaluate_checklist(&definition, &responses)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    println!(
        "建议处置: {}",
        i18n::action_label(&record.result.recommended_action.to_string())
    );

    // 示例任务风险评估
    let task = TaskDescriptor {
        task_type: "height work on scaffold".to_string(),
        equipment: vec!["mobile crane".to_string()],
        materials: Vec::new(),
        height_m: 12.0,
    };
    if let Some(assessment) = api.assess_task_risk(&task)? {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    }

    // 示例气象评估
    let weather = api.assess_weather(&WeatherReading {
        temperature_c: 38.0,
        humidity_pct: 75.0,
        wind_speed_kph: 18.0,
    });
    println!("{}", serde_json::to_string_pretty(&weather)?);

    Ok(())
}
