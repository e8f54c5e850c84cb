//! Console input/output helpers.
use crossterm::{style, ExecutableCommand};
use std::io::{self, BufRead, Write};

pub fn echo(s: String) {
    let _ = io::stdout().execute(style::Print(s));
    let _ = io::stdout().flush();
}

pub fn error(s: String) {
    let _ = io::stdout().execute(style::SetForegroundColor(style::Color::Red));
    let _ = io::stdout().execute(style::Print(s));
    let _ = io::stdout().execute(style::ResetColor);
    let _ = io::stdout().flush();
}

pub fn echo_lines(s: String) {
    for l in s.lines() {
        echo(format!("{}\n", l));
    }
}

/// Print a bold prompt and read one line of input. The trailing line
/// break is stripped.
pub fn read_input(text: &str) -> io::Result<String> {
    io::stdout()
        .execute(style::SetAttribute(style::Attribute::Bold))?
        .execute(style::Print(text.to_string()))?
        .execute(style::SetAttribute(style::Attribute::Reset))?;
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Render rows as an ASCII box table.
pub fn echo_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, col) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(col.len());
            }
        }
    }

    let border = {
        let mut b = String::from("+");
        for width in &widths {
            b.push_str(&"-".repeat(*width));
            b.push('+');
        }
        b.push('\n');
        b
    };

    let mut result = String::new();
    result.push_str(&border);

    if !headers.is_empty() {
        result.push('|');
        for (i, header) in headers.iter().enumerate() {
            result.push_str(&format!("{:<width$}|", header, width = widths[i]));
        }
        result.push('\n');
        result.push_str(&border);
    }

    for row in rows {
        result.push('|');
        for (i, col) in row.iter().enumerate() {
            result.push_str(&format!("{:<width$}|", col, width = widths[i]));
        }
        result.push('\n');
    }

    result.push_str(&border);
    result
}

#[macro_export]
macro_rules! echo {
    ($($arg:tt)*) => {
        $crate::console::echo(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::console::error(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! echo_lines {
    ($($arg:tt)*) => {
        $crate::console::echo_lines(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_table_pads_to_the_widest_cell() {
        let headers = vec!["id".to_string(), "name".to_string()];
        let rows = vec![
            vec!["1".to_string(), "long name".to_string()],
            vec!["12".to_string(), "x".to_string()],
        ];

        let table = echo_table(&headers, &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "+--+---------+");
        assert_eq!(lines[1], "|id|name     |");
        assert_eq!(lines[3], "|1 |long name|");
        assert_eq!(lines[4], "|12|x        |");
    }

    #[test]
    fn test_echo_table_without_rows_is_header_only() {
        let headers = vec!["a".to_string()];
        let table = echo_table(&headers, &[]);
        assert_eq!(table, "+-+\n|a|\n+-+\n+-+\n");
    }
}
