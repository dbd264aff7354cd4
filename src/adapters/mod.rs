pub mod api_handler;
pub mod calculator;
pub mod endpoint;
pub mod health_handler;
pub mod openweather;
pub mod serpapi;
pub mod tool_handler;
pub mod web_search;
