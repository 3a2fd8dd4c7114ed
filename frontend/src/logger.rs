use log::{Level, LevelFilter, Log, Metadata, Record};

// Sends `log` records to the browser console
struct ConsoleLogger;

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}

		let msg = format!("[{}] {}", record.target(), record.args());
		match record.level() {
			Level::Error => gloo_console::error!(msg),
			Level::Warn => gloo_console::warn!(msg),
			Level::Info => gloo_console::info!(msg),
			Level::Debug | Level::Trace => gloo_console::debug!(msg),
		}
	}

	fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

pub fn init() {
	// only fails if something already set a logger, and then that one can have it
	if log::set_logger(&LOGGER).is_ok() {
		log::set_max_level(if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info });
	}
}
