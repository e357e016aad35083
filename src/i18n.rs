// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use site_safety_scoring::i18n::t;
/// let msg = t("common.passed");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 建议处置动作的本地化显示名
///
/// # 参数
/// - action_code: 动作代码（如 "IMMEDIATE_WORK_STOPPAGE"）
pub fn action_label(action_code: &str) -> String {
    t(&format!("recommended_action.{}", action_code))
}

/// 天气风险等级的本地化显示名
pub fn weather_level_label(level_code: &str) -> String {
    t(&format!("weather_risk_level.{}", level_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");
    }

    #[test]
    fn test_action_label_translation() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert_eq!(action_label("IMMEDIATE_WORK_STOPPAGE"), "立即停工");

        set_locale("en");
        assert_eq!(
            action_label("IMMEDIATE_WORK_STOPPAGE"),
            "Immediate work stoppage"
        );
        set_locale("zh-CN");
    }
}
