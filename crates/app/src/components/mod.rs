mod advocates_table;
mod firms_table;

pub use advocates_table::AdvocatesTable;
pub use firms_table::FirmsTable;
