mod loan_list;
mod loan_row;
mod stats_section;

pub use loan_list::LoanList;
pub use loan_row::LoanRow;
pub use stats_section::StatsSection;
