//! Data Grid Helpers
//!
//! Sorting and pagination for the Tables view.

use std::cmp::Ordering;

use serde_json::Value;

use crate::models::GridRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortModel {
    pub field: String,
    pub direction: SortDirection,
}

/// Next sort state after clicking a header: asc -> desc -> unsorted.
/// Clicking a different column starts over at ascending.
pub fn cycle_sort(current: Option<&SortModel>, field: &str) -> Option<SortModel> {
    match current {
        Some(sort) if sort.field == field => match sort.direction {
            SortDirection::Asc => Some(SortModel { field: field.to_string(), direction: SortDirection::Desc }),
            SortDirection::Desc => None,
        },
        _ => Some(SortModel { field: field.to_string(), direction: SortDirection::Asc }),
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.to_lowercase().cmp(&y.to_lowercase()),
        // Missing values sort first
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

/// Rows in display order. Sorting is stable, so ties keep their original order.
pub fn sorted_rows<'a>(rows: &'a [GridRow], sort: Option<&SortModel>) -> Vec<&'a GridRow> {
    let mut out: Vec<&GridRow> = rows.iter().collect();
    if let Some(sort) = sort {
        out.sort_by(|a, b| {
            let ord = compare_values(a.value(&sort.field), b.value(&sort.field));
            match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
    out
}

/// Number of pages (at least one, so an empty grid still shows page 1)
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Index range of rows shown on `page` (zero-based)
pub fn page_range(total: usize, page_size: usize, page: usize) -> std::ops::Range<usize> {
    let start = page.saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// Footer label in the usual "1–5 of 12" form
pub fn page_label(total: usize, page_size: usize, page: usize) -> String {
    let range = page_range(total, page_size, page);
    if range.is_empty() {
        return format!("0–0 of {}", total);
    }
    format!("{}–{} of {}", range.start + 1, range.end, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<GridRow> {
        serde_json::from_value(json!([
            {"id": 1, "col1": "Hello", "col2": "World"},
            {"id": 2, "col1": "DataGrid", "col2": "is Awesome"},
            {"id": 3, "col1": "Material-UI", "col2": "is Great"},
        ]))
        .unwrap()
    }

    fn col(rows: &[&GridRow], field: &str) -> Vec<String> {
        rows.iter().map(|r| r.cell_text(field)).collect()
    }

    #[test]
    fn test_sort_cycle() {
        let asc = cycle_sort(None, "col1").unwrap();
        assert_eq!(asc.direction, SortDirection::Asc);
        let desc = cycle_sort(Some(&asc), "col1").unwrap();
        assert_eq!(desc.direction, SortDirection::Desc);
        assert_eq!(cycle_sort(Some(&desc), "col1"), None);

        let other = cycle_sort(Some(&desc), "col2").unwrap();
        assert_eq!(other.field, "col2");
        assert_eq!(other.direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_text_and_numbers() {
        let rows = rows();
        let sort = SortModel { field: "col1".into(), direction: SortDirection::Asc };
        assert_eq!(col(&sorted_rows(&rows, Some(&sort)), "col1"), vec!["DataGrid", "Hello", "Material-UI"]);

        let sort = SortModel { field: "id".into(), direction: SortDirection::Desc };
        assert_eq!(col(&sorted_rows(&rows, Some(&sort)), "id"), vec!["3", "2", "1"]);

        assert_eq!(col(&sorted_rows(&rows, None), "id"), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_numbers_compare_numerically() {
        let rows: Vec<GridRow> = serde_json::from_value(json!([{"id": 10}, {"id": 9}, {"id": 100}])).unwrap();
        let sort = SortModel { field: "id".into(), direction: SortDirection::Asc };
        assert_eq!(col(&sorted_rows(&rows, Some(&sort)), "id"), vec!["9", "10", "100"]);
    }

    #[test]
    fn test_pagination() {
        assert_eq!(page_count(3, 5), 1);
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(12, 5), 3);
        assert_eq!(page_range(12, 5, 2), 10..12);
        assert_eq!(page_range(12, 5, 7), 12..12);
        assert_eq!(page_label(3, 5, 0), "1–3 of 3");
        assert_eq!(page_label(12, 5, 1), "6–10 of 12");
        assert_eq!(page_label(0, 5, 0), "0–0 of 0");
    }
}
