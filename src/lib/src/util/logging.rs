use env_logger::Env;
use std::io::Write;

const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the env_logger backend. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    match env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format(|buf, record| {
            // Split string on a character and take the last part
            fn take_last(s: &str, c: char) -> &str {
                s.split(c).last().unwrap_or("")
            }

            let formatted_target = format_target(record.target());
            let file_name = take_last(record.file().unwrap_or("unknown"), '/');
            let line_number = record.line().unwrap_or(0);

            writeln!(
                buf,
                "[{}] {} - {}/{}:{} {}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                formatted_target,
                file_name,
                line_number,
                record.args()
            )
        })
        .try_init()
    {
        Ok(_) => (),
        Err(_) => {
            // We already initialized the logger in tests
        }
    }
}

/// Drops the "libtabcompare::" prefix and the last module segment, joining the rest with "/"
pub fn format_target(target: &str) -> String {
    target
        .strip_prefix("libtabcompare::")
        .unwrap_or(target)
        .rsplit_once("::")
        .map(|(path, _)| path.replace("::", "/"))
        .unwrap_or_else(|| target.replace("::", "/"))
}

#[cfg(test)]
mod tests {
    use crate::util::logging::format_target;

    #[test]
    fn test_format_target() {
        assert_eq!(
            format_target("libtabcompare::core::report::xlsx"),
            "core/report"
        );
        assert_eq!(format_target("tabcompare"), "tabcompare");
    }
}
