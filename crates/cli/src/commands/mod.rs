mod matches;
mod relation;
mod report;
mod verdicts;

pub use matches::show_match_command;
pub use relation::{accept_command, judge_command, reject_command};
pub use report::{pairs_command, report_info_command};
pub use verdicts::{get_verdict_command, set_verdict_command};
