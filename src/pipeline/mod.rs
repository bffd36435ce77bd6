pub mod stage1_load;
pub mod stage2_scores;
pub mod stage3_aggregate;
pub mod stage4_charts;
pub mod stage5_report;
