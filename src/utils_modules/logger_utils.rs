use crate::common::*;

#[doc = "Log line format: [timestamp] [level] message"]
fn custom_log_format(
    w: &mut dyn Write,
    now: &mut flexi_logger::DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

#[doc = r#"
    Initialize the global logger: daily-rotated files under `logs/`,
    duplicated to stdout so the interactive session still sees them.
"#]
pub fn set_global_logger() {
    Logger::try_with_str("info")
        .expect("[logger_utils->set_global_logger] Invalid log level")
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .duplicate_to_stdout(Duplicate::Warn)
        .format(custom_log_format)
        .start()
        .expect("[logger_utils->set_global_logger] Failed to start logger");
}
