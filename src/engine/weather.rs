// ==========================================
// 施工安全合规评分系统 - 气象风险引擎
// ==========================================
// 依据: Scoring_Engine_Specs_v1.0.md - 1. Weather Engine
// ==========================================
// 职责: 原始气象标量 -> 派生体感指标 -> 天气风险等级
// 输入: 气温/湿度/风速 (已解析标量,不含遥测流)
// 输出: 热指数 / 风寒指数 / 天气风险等级 (含原因)
// ==========================================

use crate::domain::hazard::WeatherReading;
use crate::domain::types::WeatherRiskLevel;
use serde::{Deserialize, Serialize};
use serde_json::json;

// ==========================================
// WeatherAssessment - 气象评估结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAssessment {
    pub heat_index: f64,              // 热指数 (摄氏度)
    pub wind_chill: f64,              // 风寒指数 (摄氏度)
    pub risk_level: WeatherRiskLevel, // 天气风险等级
    pub reason: String,               // 定级原因 (JSON)
}

// ==========================================
// WeatherEngine - 气象风险引擎
// ==========================================
pub struct WeatherEngine {
    // 无状态引擎,纯函数计算
}

impl WeatherEngine {
    /// 创建新的气象风险引擎
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 派生指标计算
    // ==========================================

    /// 计算热指数 (Rothfusz 回归)
    ///
    /// 公式仅在 27°C 以上有意义,低于阈值时原样返回气温
    ///
    /// # 参数
    /// - `temperature_c`: 气温 (摄氏度)
    /// - `humidity_pct`: 相对湿度 (%)
    ///
    /// # 返回
    /// 热指数 (摄氏度,四舍五入到整数)
    pub fn heat_index(&self, temperature_c: f64, humidity_pct: f64) -> f64 {
        if temperature_c < 27.0 {
            return temperature_c;
        }

        let t = temperature_c;
        let h = humidity_pct;

        let index = -8.784695
            + 1.61139411 * t
            + 2.338549 * h
            - 0.14611605 * t * h
            - 0.012308094 * t * t
            - 0.016424828 * h * h
            + 0.002211732 * t * t * h
            + 0.00072546 * t * h * h
            - 0.000003582 * t * t * h * h;

        index.round()
    }

    /// 计算风寒指数
    ///
    /// 公式仅在气温 ≤ 10°C 且风速 ≥ 4.8 km/h 时有效,
    /// 超出定义域时原样返回气温
    ///
    /// # 参数
    /// - `temperature_c`: 气温 (摄氏度)
    /// - `wind_speed_kph`: 风速 (公里/小时)
    ///
    /// # 返回
    /// 风寒指数 (摄氏度,四舍五入到整数)
    pub fn wind_chill(&self, temperature_c: f64, wind_speed_kph: f64) -> f64 {
        if temperature_c > 10.0 || wind_speed_kph < 4.8 {
            return temperature_c;
        }

        let t = temperature_c;
        let v_exp = wind_speed_kph.powf(0.16);

        let wind_chill = 13.12 + 0.6215 * t - 11.37 * v_exp + 0.3965 * t * v_exp;

        wind_chill.round()
    }

    // ==========================================
    // 风险定级 (依据 Scoring_Engine_Specs 1.3)
    // ==========================================

    /// 评估天气风险等级
    ///
    /// 三项指标对照四档阈值,自上而下逐档检查,首个命中档位生效:
    /// - EXTREME: 热指数>40 或 风寒<-15 或 风速>50
    /// - HIGH:    热指数>35 或 风寒<-10 或 风速>30
    /// - MEDIUM:  热指数>30 或 风寒<-5  或 风速>20
    /// - LOW:     其他
    pub fn weather_risk_level(
        &self,
        temperature_c: f64,
        humidity_pct: f64,
        wind_speed_kph: f64,
    ) -> WeatherRiskLevel {
        let heat_index = self.heat_index(temperature_c, humidity_pct);
        let wind_chill = self.wind_chill(temperature_c, wind_speed_kph);

        if heat_index > 40.0 || wind_chill < -15.0 || wind_speed_kph > 50.0 {
            return WeatherRiskLevel::Extreme;
        }

        if heat_index > 35.0 || wind_chill < -10.0 || wind_speed_kph > 30.0 {
            return WeatherRiskLevel::High;
        }

        if heat_index > 30.0 || wind_chill < -5.0 || wind_speed_kph > 20.0 {
            return WeatherRiskLevel::Medium;
        }

        WeatherRiskLevel::Low
    }

    /// 生成气象评估结果 (含可解释原因)
    ///
    /// # 参数
    /// - `reading`: 气象读数
    ///
    /// # 返回
    /// WeatherAssessment (热指数 + 风寒指数 + 风险等级 + 原因)
    pub fn assess(&self, reading: &WeatherReading) -> WeatherAssessment {
        let heat_index = self.heat_index(reading.temperature_c, reading.humidity_pct);
        let wind_chill = self.wind_chill(reading.temperature_c, reading.wind_speed_kph);
        let risk_level = self.weather_risk_level(
            reading.temperature_c,
            reading.humidity_pct,
            reading.wind_speed_kph,
        );

        let mut reasons = Vec::new();
        match risk_level {
            WeatherRiskLevel::Extreme => {
                if heat_index > 40.0 {
                    reasons.push("热指数超过40°C");
                }
                if wind_chill < -15.0 {
                    reasons.push("风寒低于-15°C");
                }
                if reading.wind_speed_kph > 50.0 {
                    reasons.push("风速超过50km/h");
                }
            }
            WeatherRiskLevel::High => {
                if heat_index > 35.0 {
                    reasons.push("热指数超过35°C");
                }
                if wind_chill < -10.0 {
                    reasons.push("风寒低于-10°C");
                }
                if reading.wind_speed_kph > 30.0 {
                    reasons.push("风速超过30km/h");
                }
            }
            WeatherRiskLevel::Medium => {
                if heat_index > 30.0 {
                    reasons.push("热指数超过30°C");
                }
                if wind_chill < -5.0 {
                    reasons.push("风寒低于-5°C");
                }
                if reading.wind_speed_kph > 20.0 {
                    reasons.push("风速超过20km/h");
                }
            }
            WeatherRiskLevel::Low => {
                reasons.push("各项指标均在正常作业范围内");
            }
        }

        let reason = json!({
            "level": risk_level.to_string(),
            "reasons": reasons,
            "heat_index": heat_index,
            "wind_chill": wind_chill,
            "wind_speed_kph": reading.wind_speed_kph,
        })
        .to_string();

        WeatherAssessment {
            heat_index,
            wind_chill,
            risk_level,
            reason,
        }
    }
}

impl Default for WeatherEngine {
    fn default() -> Self {
        Self::new()
    }
}
