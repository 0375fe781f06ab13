pub mod http_holiday_feed;
