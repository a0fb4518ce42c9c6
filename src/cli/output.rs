//! Output formatting utilities

/// Format a list of values one per line, ready for printing.
/// An empty list formats to the empty string (no trailing newline noise).
pub fn format_lines(values: &[String]) -> String {
    let mut output = String::new();
    for value in values {
        output.push_str(value);
        output.push('\n');
    }
    output
}
