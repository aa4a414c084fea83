pub mod stage1_filter;
pub mod stage2_aggregate;
pub mod stage3_derived;
pub mod stage4_outliers;
