mod dashboard;

pub use dashboard::SalesReport;
