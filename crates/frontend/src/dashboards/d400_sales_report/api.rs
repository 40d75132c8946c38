use crate::shared::http;
use contracts::dashboards::d400_sales_report::{SalesReport, SalesReportRequest};
use contracts::shared::api_envelope::ApiError;

const REPORT_PATH: &str = "/reportes/ventas";

/// Агрегаты продаж за период; границы нормализуются перед запросом
pub async fn get_sales_report(request: SalesReportRequest) -> Result<SalesReport, ApiError> {
    let path = http::with_query(REPORT_PATH, &request.normalized())?;
    http::get_json(&path).await
}
