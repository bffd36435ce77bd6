#[derive(Debug, Clone, Copy)]
pub struct BuiltinScoreDef {
    pub id: &'static str,
    pub name: &'static str,
    pub items: &'static [&'static str],
}

const SCARCITY_ITEMS: &[&str] = &[
    "scarcity_limited_time",
    "scarcity_limited_quantity",
    "scarcity_flash_sale",
    "scarcity_countdown",
];
const SERENDIPITY_ITEMS: &[&str] = &[
    "serendipity_unexpected_find",
    "serendipity_surprise",
    "serendipity_recommendation",
    "serendipity_new_product",
    "serendipity_pleasant_discovery",
];

const BUILTIN_SCORES: &[BuiltinScoreDef] = &[
    BuiltinScoreDef {
        id: "scarcity",
        name: "Scarcity",
        items: SCARCITY_ITEMS,
    },
    BuiltinScoreDef {
        id: "serendipity",
        name: "Serendipity",
        items: SERENDIPITY_ITEMS,
    },
];

pub const GENDER_COLUMN: &str = "gender";
pub const INCOME_COLUMN: &str = "monthly_income";

/// Income brackets in display order.
pub const INCOME_LEVELS: &[&str] = &["Under RM100", "RM100 - RM300", "Over RM300"];

pub fn builtin_scores() -> &'static [BuiltinScoreDef] {
    BUILTIN_SCORES
}
