pub mod dto;

pub use dto::{
    bar_width_percent, CategorySales, DailySales, ProductSales, SalesReport, SalesReportRequest,
};

/// Идентификация дашборда в навигации
pub struct SalesReportDashboard;

impl SalesReportDashboard {
    pub const KEY: &'static str = "d400_sales_report";
    pub const TITLE: &'static str = "Reporte de ventas";
}
