pub mod breakdown;
pub mod forecast_chart;
pub mod kpi_card;
pub mod market_table;
pub mod signal_banner;
pub mod toast;
