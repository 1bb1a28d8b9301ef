use env_logger::{Builder, Env};

/// Installs the process-wide logger. Defaults to `info` unless `RUST_LOG`
/// says otherwise; safe to call more than once.
pub fn init() {
	let _ = Builder::from_env(Env::default().default_filter_or("info"))
		.format_timestamp_millis()
		.format_module_path(true)
		.try_init();
}
