pub mod achievements;
pub mod animated_value;
pub mod day_controls;
pub mod day_summary;
pub mod departments;
pub mod employees;
pub mod header;
pub mod hire_form;
pub mod history;
pub mod insights;
pub mod modal;
pub mod stats_bar;
pub mod summary_tree;
pub mod tasks;
pub mod toast;
