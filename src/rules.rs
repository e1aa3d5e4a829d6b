const QUICK_RULES: &[&str] = &[
    "新食材采用“连续 3 天观察法”，确认不过敏再加新食物。",
    "辅食形态按月龄逐步过渡：稀糊 → 小颗粒 → 块状 → 软饭。",
    "奶仍是重要营养来源，随月龄逐步减奶增饭。",
    "坚持少盐少糖，1岁内尽量不额外调味。",
    "通过手指食物和勺子练习，逐步培养宝宝自主进食。",
];

/// General feeding guidance shown alongside the monthly plans.
pub fn quick_rules() -> &'static [&'static str] {
    QUICK_RULES
}
