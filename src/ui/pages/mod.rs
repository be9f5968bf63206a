pub mod calculator;
pub mod dashboard;
pub mod login;
pub mod logistics;
pub mod market;
pub mod weather;

pub use calculator::CalculatorPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use logistics::LogisticsPage;
pub use market::MarketPage;
pub use weather::WeatherPage;
