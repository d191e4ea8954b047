use crate::greetings::{Greeter, GreetingTable, DEFAULT_LANGUAGE};
use crate::types::{DemoConfig, GreetingLine, OutputFormat};
use std::io::{self, Write};
use tracing::debug;

/// Builds the demonstration sequence: the greeter's fixed greeting first,
/// then one table lookup per configured code.
///
/// # Examples
///
/// ```
/// use greeter_core::demo::greeting_lines;
/// use greeter_core::greetings::{Greeter, GreetingTable};
/// use greeter_core::types::DemoConfig;
///
/// let lines = greeting_lines(&Greeter, &GreetingTable::new(), &DemoConfig::default());
/// assert_eq!(lines.len(), 5);
/// assert_eq!(lines[1].greeting, "¡Hola mundo!");
/// assert!(lines[4].fallback);
/// ```
pub fn greeting_lines(
    greeter: &Greeter,
    table: &GreetingTable,
    config: &DemoConfig,
) -> Vec<GreetingLine> {
    let mut lines = Vec::with_capacity(config.codes.len() + 1);
    lines.push(GreetingLine {
        code: DEFAULT_LANGUAGE.to_string(),
        greeting: greeter.say_hello().to_string(),
        fallback: false,
    });
    for code in &config.codes {
        let resolved = table.resolve(code);
        lines.push(GreetingLine {
            code: code.clone(),
            greeting: resolved.greeting.to_string(),
            fallback: resolved.fallback,
        });
    }
    lines
}

/// Writes one greeting per line.
pub fn write_plain<W: Write>(out: &mut W, lines: &[GreetingLine]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.greeting)?;
    }
    out.flush()
}

/// Writes one JSON object per line.
pub fn write_json<W: Write>(out: &mut W, lines: &[GreetingLine]) -> anyhow::Result<()> {
    for line in lines {
        serde_json::to_writer(&mut *out, line)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Runs the demonstration with a fresh built-in table.
pub fn run<W: Write>(
    out: &mut W,
    config: &DemoConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let table = GreetingTable::new();
    let lines = greeting_lines(&Greeter, &table, config);
    debug!(lines = lines.len(), ?format, "writing greetings");
    match format {
        OutputFormat::Plain => write_plain(out, &lines)?,
        OutputFormat::JsonLines => write_json(out, &lines)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str =
        "Hello world!\n¡Hola mundo!\nBonjour le monde!\nHallo Welt!\nHello world!\n";

    fn render(config: &DemoConfig, format: OutputFormat) -> String {
        let mut out = Vec::new();
        run(&mut out, config, format).expect("demo run");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn default_run_prints_five_lines() {
        assert_eq!(render(&DemoConfig::default(), OutputFormat::Plain), EXPECTED);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let cfg = DemoConfig::default();
        assert_eq!(
            render(&cfg, OutputFormat::Plain),
            render(&cfg, OutputFormat::Plain)
        );
    }

    #[test]
    fn first_line_does_not_come_from_table() {
        let table = GreetingTable::from_entries([("en", "Hi there")]).expect("valid table");
        let lines = greeting_lines(&Greeter, &table, &DemoConfig::default());
        assert_eq!(lines[0].greeting, "Hello world!");
        assert!(lines[1..].iter().all(|l| l.greeting == "Hi there" && l.fallback));
    }

    #[test]
    fn empty_config_prints_only_default() {
        let cfg = DemoConfig { codes: Vec::new() };
        assert_eq!(render(&cfg, OutputFormat::Plain), "Hello world!\n");
    }

    #[test]
    fn json_lines_carry_code_and_fallback() {
        let out = render(&DemoConfig::default(), OutputFormat::JsonLines);
        let lines = out
            .lines()
            .map(|l| serde_json::from_str::<GreetingLine>(l).expect("json line"))
            .collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].code, "en");
        assert_eq!(lines[3].greeting, "Hallo Welt!");
        assert_eq!(lines[4].code, "it");
        assert!(lines[4].fallback);
        assert!(!lines[1].fallback);
    }
}
