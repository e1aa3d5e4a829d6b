//! Property-based tests for day row reconciliation and the document pipeline.

use feeding_plan::parser::{PATCH_MONTH, patch};
use feeding_plan::{FeedingPlanParser, MonthRecord};
use proptest::prelude::*;

fn parser() -> FeedingPlanParser {
    FeedingPlanParser::new().expect("feeding plan patterns compile")
}

/// Generate a single cell with no whitespace
fn cell_strategy() -> impl Strategy<Value = String> {
    "[a-z米粉奶粥泥]{1,4}"
}

fn time_header_strategy() -> impl Strategy<Value = String> {
    "[0-2][0-9]:[0-5][0-9]"
}

#[derive(Debug, Clone)]
struct MonthSpec {
    month: u32,
    headers: Vec<String>,
    rows: Vec<(u32, Vec<String>)>,
}

fn month_strategy() -> impl Strategy<Value = MonthSpec> {
    (
        1u32..=12,
        prop::collection::vec(time_header_strategy(), 1..=6),
        prop::collection::vec(
            (1u32..=30, prop::collection::vec(cell_strategy(), 1..=8)),
            0..=5,
        ),
    )
        .prop_map(|(month, headers, rows)| MonthSpec {
            month,
            headers,
            rows,
        })
}

fn render_document(months: &[MonthSpec]) -> String {
    let mut lines = vec!["以下是辅食计划".to_string()];
    for (index, spec) in months.iter().enumerate() {
        lines.push(format!("{}月龄宝宝辅食：第{}段", spec.month, index + 1));
        lines.push(format!("月份 {}", spec.headers.join(" ")));
        for (day, cells) in &spec.rows {
            lines.push(format!("{}+{} {}", spec.month, day, cells.join(" ")));
        }
        lines.push("目标：练习进食".to_string());
        lines.push(format!("===== Page {} =====", index + 1));
    }
    lines.join("\n")
}

proptest! {
    #[test]
    fn short_rows_are_right_padded(
        cells in prop::collection::vec(cell_strategy(), 1..6),
        extra in 0usize..4,
    ) {
        let header_length = cells.len() + extra;
        let line = format!("6+1 {}", cells.join(" "));

        let plan = parser().parse_day_row(&line, header_length).expect("row parses");

        prop_assert_eq!(plan.slots.len(), header_length);
        prop_assert_eq!(&plan.slots[..cells.len()], &cells[..]);
        prop_assert!(plan.slots[cells.len()..].iter().all(String::is_empty));
    }

    #[test]
    fn long_rows_merge_overflow_into_last_slot(
        cells in prop::collection::vec(cell_strategy(), 2..10),
        header_length in 1usize..6,
    ) {
        prop_assume!(cells.len() > header_length);
        let line = format!("8+2 {}", cells.join("  "));

        let plan = parser().parse_day_row(&line, header_length).expect("row parses");

        prop_assert_eq!(plan.slots.len(), header_length);
        prop_assert_eq!(&plan.slots[..header_length - 1], &cells[..header_length - 1]);
        prop_assert_eq!(&plan.slots[header_length - 1], &cells[header_length - 1..].join(" "));
    }

    #[test]
    fn parsed_documents_are_sorted_and_aligned(
        months in prop::collection::vec(month_strategy(), 0..6),
    ) {
        let outcome = parser().parse_document(&render_document(&months));

        prop_assert_eq!(outcome.months.len(), months.len());
        prop_assert!(outcome.months.windows(2).all(|pair| pair[0].month <= pair[1].month));
        for record in &outcome.months {
            for plan in &record.plans {
                prop_assert_eq!(plan.slots.len(), record.time_headers.len());
            }
        }
    }

    #[test]
    fn patch_is_idempotent(months in prop::collection::vec(month_strategy(), 0..6)) {
        let outcome = parser().parse_document(&render_document(&months));

        let again = patch(outcome.months.clone());

        prop_assert_eq!(again, outcome.months);
    }

    #[test]
    fn patch_leaves_other_months_unchanged(
        months in prop::collection::vec(month_strategy(), 0..6),
    ) {
        let parsed = parser().parse_document(&render_document(&months)).months;
        let unpatched = parsed
            .iter()
            .filter(|record| record.month != PATCH_MONTH)
            .cloned()
            .collect::<Vec<MonthRecord>>();

        let patched = patch(unpatched.clone());

        prop_assert_eq!(patched, unpatched);
    }
}
