//! Usage scenarios: per-component loggers, the default logger and the
//! convenience functions, as an application would wire them up.

use std::sync::Arc;

use clientlog_core::{
    get_logger, log_error, log_info, Channel, FileSink, FixedClock, ForwardConfig, LogEntry,
    LogLevel, Logger, MemorySink,
};

fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::parse("2024-01-01T00:00:00.000Z").unwrap())
}

struct UserService {
    logger: Logger,
}

impl UserService {
    fn new(logger: Logger) -> Self {
        Self { logger }
    }

    fn get_user(&self, id: &str, found: bool) {
        log_info!(self.logger, "Fetching user {}", id);
        if found {
            log_info!(self.logger, "User {} loaded successfully", id);
        } else {
            log_error!(self.logger, "Failed to load user {}: not found", id);
        }
    }
}

#[test]
fn component_loggers_share_a_sink() {
    let sink = Arc::new(MemorySink::new());
    let auth = Logger::new(Some("auth")).with_sink(sink.clone()).with_clock(fixed_clock());
    let api = Logger::new(Some("api-client")).with_sink(sink.clone()).with_clock(fixed_clock());

    auth.info("User logged in successfully");
    api.info("API request completed in 250ms");

    assert_eq!(
        sink.lines_on(Channel::Log),
        vec![
            "[2024-01-01T00:00:00.000Z] [INFO] [auth] User logged in successfully".to_string(),
            "[2024-01-01T00:00:00.000Z] [INFO] [api-client] API request completed in 250ms".to_string(),
        ]
    );
}

#[test]
fn service_logs_through_its_own_logger() {
    let sink = Arc::new(MemorySink::new());
    let service = UserService::new(Logger::new(Some("UserService")).with_sink(sink.clone()));

    service.get_user("42", true);
    service.get_user("7", false);

    assert_eq!(sink.lines_on(Channel::Log).len(), 3);
    let errors = sink.lines_on(Channel::Error);
    assert_eq!(errors.len(), 1);

    let entry = LogEntry::parse(&errors[0]).unwrap();
    assert_eq!(entry.level, LogLevel::Error);
    assert_eq!(entry.name, "UserService");
    assert_eq!(entry.message, "Failed to load user 7: not found");
}

#[test]
fn default_logger_is_named_after_calling_file() {
    let logger = get_logger(None);
    assert_eq!(logger.name(), "usage");
    assert!(Arc::ptr_eq(&logger, &get_logger(None)));

    clientlog_core::info("App started");
    clientlog_core::warning("Browser localStorage not available");
    clientlog_core::error("Network request failed");
}

#[test]
fn unnamed_logger_infers_name() {
    assert_eq!(Logger::new(None).name(), "usage");
}

#[test]
fn backend_logs_land_in_per_name_files() {
    let dir = tempfile::tempdir().unwrap();
    let sink = Arc::new(FileSink::new(dir.path().join("logs").join("backend")).unwrap());

    let db = Logger::new(Some("database")).with_sink(sink.clone());
    db.info("Connection established");
    db.warning("Slow query");

    let content = std::fs::read_to_string(sink.path_for("database")).unwrap();
    let levels: Vec<_> = content
        .lines()
        .map(|line| LogEntry::parse(line).unwrap().level)
        .collect();
    assert_eq!(levels, vec![LogLevel::Info, LogLevel::Warning]);
}

#[test]
fn forwarding_covers_every_logger_channel_in_development() {
    let config = ForwardConfig::for_environment("development");
    for level in LogLevel::ALL {
        assert!(config.forwards(level.channel()));
    }

    let production = ForwardConfig::for_environment("production");
    assert!(LogLevel::ALL.iter().all(|l| !production.forwards(l.channel())));
}
