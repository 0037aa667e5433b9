use std::fmt::Arguments;
use chrono::Utc;

pub struct Logger;

impl Logger {
    fn emit(level: &'static str, to_stderr: bool, args: Arguments) {
        let stamp = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
        if to_stderr {
            eprintln!("[{level}] [{stamp}] {args}");
        } else {
            println!("[{level}] [{stamp}] {args}");
        }
    }

    pub fn info(args: Arguments) {
        Logger::emit("INFO ", false, args);
    }

    pub fn debug(args: Arguments) {
        Logger::emit("DEBUG", false, args);
    }

    pub fn warn(args: Arguments) {
        Logger::emit("WARN ", true, args);
    }

    pub fn error(args: Arguments) {
        Logger::emit("ERROR", true, args);
    }
}

#[macro_export]
macro_rules! logger {
    (INFO, $($arg:tt)*) => {
        Logger::info(format_args!($($arg)*))
    };
    (DEBUG, $($arg:tt)*) => {
        Logger::debug(format_args!($($arg)*))
    };
    (WARN, $($arg:tt)*) => {
        Logger::warn(format_args!($($arg)*))
    };
    (ERROR, $($arg:tt)*) => {
        Logger::error(format_args!($($arg)*))
    };
}
