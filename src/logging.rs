// Copyright (c) 2025 Syswonder
// hugetlb-encode is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//     http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR
// FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.
//
// Syswonder Website:
//      https://www.syswonder.org
//
// Authors:
//
//! Logger used by the unit tests. The library itself only emits records
//! through the `log` facade and never installs a logger.

use std::sync::Once;

use log::{self, Level, LevelFilter, Log, Metadata, Record};

#[repr(u8)]
#[allow(dead_code)]
enum ColorCode {
    Red = 31,
    Green = 32,
    Yellow = 33,
    Cyan = 36,
    BrightBlack = 90,
}

pub fn init() {
    static LOGGER: SimpleLogger = SimpleLogger;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level_filter(option_env!("LOG")));
        }
    });
}

fn level_filter(level: Option<&str>) -> LevelFilter {
    match level {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = record.level();
        let line = record.line().unwrap_or(0);
        let target = record.target();
        let level_color = match level {
            Level::Error => ColorCode::Red,
            Level::Warn => ColorCode::Yellow,
            Level::Info => ColorCode::Green,
            Level::Debug => ColorCode::Cyan,
            Level::Trace => ColorCode::BrightBlack,
        };
        eprintln!(
            "\u{1B}[{}m{:<5}\u{1B}[m ({}:{}) {}",
            level_color as u8,
            level,
            target,
            line,
            record.args()
        );
    }

    fn flush(&self) {}
}

#[test]
fn level_filter_follows_log_variable() {
    assert_eq!(level_filter(Some("warn")), LevelFilter::Warn);
    assert_eq!(level_filter(Some("trace")), LevelFilter::Trace);
    assert_eq!(level_filter(Some("verbose")), LevelFilter::Off);
    assert_eq!(level_filter(None), LevelFilter::Off);
}
