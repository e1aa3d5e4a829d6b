use tracing::debug;

use crate::model::MonthRecord;

pub const PATCH_MONTH: u32 = 7;
pub const PATCH_TIME_SLOT: &str = "17:30";

/// Month 7 tables carry five columns when the 17:30 meal is missing.
const PATCH_HEADER_THRESHOLD: usize = 6;

// The source document drops the 17:30 meal for the month 7 table. Keep this
// limited to month 7 until other months are confirmed to need it.
const MONTH_SEVEN_EVENING_MEALS: &[(&str, &str)] = &[
    ("7+1", "米粉"),
    ("7+2", "米粉"),
    ("7+3", "米粉"),
    ("7+4", "米粉+南瓜泥"),
    ("7+5", "米粉+南瓜泥"),
    ("7+6", "米粉+南瓜泥"),
    ("7+7", "米粉+胡萝卜泥"),
    ("7+8", "米粉+胡萝卜泥"),
    ("7+9", "米粉+胡萝卜泥"),
    ("7+10", "米粉+西兰花泥"),
    ("7+11", "米粉+西兰花泥"),
    ("7+12", "米粉+西兰花泥"),
    ("7+13", "米粉+土豆泥"),
    ("7+14", "米粉+土豆泥"),
    ("7+15", "米粉+土豆泥"),
    ("7+16", "米粉+蔬菜泥"),
    ("7+17", "米粉+蔬菜泥"),
    ("7+18", "米粉+蔬菜泥"),
    ("7+19", "米粉+蛋黄泥"),
    ("7+20", "米粉+蛋黄泥"),
    ("7+21", "米粉+蛋黄泥"),
    ("7+22", "米粉+山药泥"),
    ("7+23", "米粉+山药泥"),
    ("7+24", "米粉+山药泥"),
    ("7+25", "米粉+猪肝泥"),
    ("7+26", "米粉+猪肝泥"),
    ("7+27", "米粉+猪肝泥"),
    ("7+28", "米粉+红薯泥"),
    ("7+29", "米粉+红薯泥"),
    ("7+30", "米粉+红薯泥"),
];

pub fn patch_meal_for(day_label: &str) -> Option<&'static str> {
    MONTH_SEVEN_EVENING_MEALS
        .iter()
        .find(|(label, _)| *label == day_label)
        .map(|(_, meal)| *meal)
}

/// Ensures the month 7 record has a 17:30 column and fills it from the
/// evening meal table. Every other month passes through unchanged.
pub fn patch(records: Vec<MonthRecord>) -> Vec<MonthRecord> {
    patch_counted(records).0
}

/// Same as [`patch`], also returning how many slots were filled from the table.
pub fn patch_counted(mut records: Vec<MonthRecord>) -> (Vec<MonthRecord>, usize) {
    let mut filled = 0usize;

    for record in records
        .iter_mut()
        .filter(|record| record.month == PATCH_MONTH)
    {
        filled += patch_month(record);
    }

    (records, filled)
}

fn patch_month(record: &mut MonthRecord) -> usize {
    let has_slot = record
        .time_headers
        .iter()
        .any(|header| header == PATCH_TIME_SLOT);
    if !has_slot && record.time_headers.len() < PATCH_HEADER_THRESHOLD {
        record.time_headers.push(PATCH_TIME_SLOT.to_string());
    }

    let header_length = record.time_headers.len();
    let target_index = record
        .time_headers
        .iter()
        .position(|header| header == PATCH_TIME_SLOT);

    let mut filled = 0usize;
    for plan in &mut record.plans {
        if plan.slots.len() < header_length {
            plan.slots.resize(header_length, String::new());
        }

        let Some(index) = target_index else {
            continue;
        };
        if let Some(meal) = patch_meal_for(&plan.day_label)
            && let Some(slot) = plan.slots.get_mut(index)
        {
            *slot = meal.to_string();
            filled += 1;
        }
    }

    debug!(
        month = record.month,
        headers = header_length,
        target_index = ?target_index,
        filled,
        "patched month time slots"
    );

    filled
}
