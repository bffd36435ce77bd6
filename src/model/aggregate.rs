#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupOrder {
    Alphabetical,
    /// Listed levels first in this order; unlisted levels are appended
    /// alphabetically.
    Fixed(Vec<String>),
}

impl GroupOrder {
    pub fn fixed(levels: &[&str]) -> Self {
        GroupOrder::Fixed(levels.iter().map(|s| s.to_string()).collect())
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupOrder::Alphabetical => "alphabetical",
            GroupOrder::Fixed(_) => "fixed",
        }
    }
}

/// Long-form row: one per (group, score).
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMeanRow {
    pub group: String,
    pub score_id: String,
    pub score_name: String,
    pub mean: f64,
    pub n: usize,
}

#[derive(Debug, Clone)]
pub struct GroupedMeans {
    pub column: String,
    pub order: GroupOrder,
    pub groups: Vec<String>,
    pub rows: Vec<GroupMeanRow>,
}

impl GroupedMeans {
    pub fn mean_of(&self, group: &str, score_id: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.group == group && r.score_id == score_id)
            .map(|r| r.mean)
    }
}

#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}
