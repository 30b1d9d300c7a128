//! Frontend Models
//!
//! Data structures shared by the session store and the widget views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Prefix used when rendering a task id
const TASK_ID_PREFIX: &str = "item-";

/// Session-unique task identifier, rendered as `item-N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", TASK_ID_PREFIX, self.0)
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(TASK_ID_PREFIX)
            .and_then(|n| n.parse::<u64>().ok())
            .map(TaskId)
            .ok_or_else(|| format!("not a task id: {}", s))
    }
}

/// One kanban card
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
}

/// Data grid column definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridColumn {
    pub field: String,
    pub header_name: String,
    #[serde(default = "default_column_width")]
    pub width: u32,
}

fn default_column_width() -> u32 {
    100
}

/// Data grid row, keyed by column field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridRow(pub Map<String, Value>);

impl GridRow {
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Display text for a cell (empty when the field is missing)
    pub fn cell_text(&self, field: &str) -> String {
        match self.value(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

/// One line series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default)]
    pub fill: bool,
    pub background_color: String,
    pub border_color: String,
}
