use super::*;
use log::{Level, Metadata, Record};
use serial_test::serial;

#[test]
#[serial]
fn level_from_env_parses_known_spellings() {
    let cases: &[(&str, Level)] = &[
        ("debug", Level::Debug),
        ("DEBUG", Level::Debug),
        ("info", Level::Info),
        ("INFO", Level::Info),
        ("warn", Level::Warn),
        ("WARN", Level::Warn),
        ("error", Level::Error),
        ("ERROR", Level::Error),
        ("trace", Level::Trace),
        ("TRACE", Level::Trace),
    ];

    for (value, expected) in cases {
        unsafe { std::env::set_var(PROGRAM_LOG_LEVEL, value) };

        let lvl = level_from_env();
        assert_eq!(
            lvl, *expected,
            "env {value:?} should yield level {expected:?}, got {lvl:?}"
        );
    }

    unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) };
}

#[test]
#[serial]
fn level_from_env_falls_back_to_warn() {
    for value in [None, Some("garbage"), Some("off"), Some("")] {
        match value {
            Some(v) => unsafe { std::env::set_var(PROGRAM_LOG_LEVEL, v) },
            None => unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) },
        }

        assert_eq!(
            level_from_env(),
            Level::Warn,
            "env {value:?} should fall back to the default level"
        );
    }

    unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) };
}

#[test]
fn enabled_respects_the_level_threshold() {
    let levels = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    for logger_level in levels {
        let logger = Logger {
            level: logger_level,
        };

        for record_level in levels {
            let meta = Metadata::builder()
                .level(record_level)
                .target("test_target")
                .build();

            let expected = record_level <= logger_level;
            assert_eq!(
                logger.enabled(&meta),
                expected,
                "logger level {logger_level:?}, record level {record_level:?}"
            );
        }
    }
}

#[test]
fn logging_a_record_does_not_panic() {
    let logger = Logger { level: Level::Info };

    let cases = [
        (Level::Debug, "debug"),
        (Level::Info, "info"),
        (Level::Error, "error"),
    ];

    for (lvl, msg) in &cases {
        let args = format_args!("{msg}");
        let record = Record::builder().level(*lvl).target("t").args(args).build();
        logger.log(&record);
    }

    logger.flush();
}
