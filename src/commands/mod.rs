//! Command implementations

pub mod compare;
pub mod daily;
pub mod players;
pub mod simple;
pub mod test_all;

pub use compare::{ComparisonResult, compare_players};
pub use daily::{ScheduleEntry, TodayInfo, today_info, upcoming_schedule};
pub use players::list_players;
pub use simple::run_simple;
pub use test_all::{
    SecretTestResult, TestAllStatistics, print_test_all_statistics, run_test_all, solve_secret,
};
