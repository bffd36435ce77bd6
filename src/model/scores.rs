/// One composite score evaluated for every respondent, NaN where all of its
/// items were missing.
#[derive(Debug, Clone)]
pub struct ScoreSeries {
    pub id: String,
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct CompositeScores {
    pub n_rows: usize,
    pub series: Vec<ScoreSeries>,
}

impl CompositeScores {
    pub fn names(&self) -> Vec<String> {
        self.series.iter().map(|s| s.name.clone()).collect()
    }
}
