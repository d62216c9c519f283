pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";
pub const DEFAULT_LOG_DIRECTIVE: &str = "global_race_server=info";
pub const QUICKWIT_LOGGING_CHANNEL_CAPACITY: usize = 10_000;
pub const QUICKWIT_FLUSH_INTERVAL_SECS: u64 = 5;
