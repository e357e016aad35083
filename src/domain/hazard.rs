// ==========================================
// 施工安全合规评分系统 - 风险信号领域模型
// ==========================================
// 依据: Scoring_Engine_Specs_v1.0.md - 1/2. 风险信号与组合
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// HazardFactor - 风险因子
// ==========================================
// 单项风险贡献: 后果严重度 × 发生可能性
// 按次查询生成的瞬态对象,不落库
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardFactor {
    pub severity: i32,       // 严重度 [1,10]
    pub probability: i32,    // 可能性 [1,10]
    pub description: String, // 风险描述
}

impl HazardFactor {
    pub fn new(severity: i32, probability: i32, description: impl Into<String>) -> Self {
        Self {
            severity,
            probability,
            description: description.into(),
        }
    }
}

// ==========================================
// TaskDescriptor - 任务描述
// ==========================================
// 由调用方(UI/API层)采集的作业任务画像
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub task_type: String, // 任务类型 (如 "height work on scaffold")

    /// 投入设备清单
    #[serde(default)]
    pub equipment: Vec<String>,

    /// 涉及材料清单
    #[serde(default)]
    pub materials: Vec<String>,

    /// 作业高度 (米)
    #[serde(default)]
    pub height_m: f64,
}

// ==========================================
// WeatherReading - 气象读数
// ==========================================
// 已解析的标量读数,不处理遥测流
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,  // 气温 (摄氏度)
    pub humidity_pct: f64,   // 相对湿度 (%)
    pub wind_speed_kph: f64, // 风速 (公里/小时)
}
