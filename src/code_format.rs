/// Formats a code listing the way posts embed it: one `<li><pre>` per line
/// inside a `ccode` list, with markup characters escaped.
pub fn format_code_html(code: &str) -> String {
    let lines: Vec<String> = code.lines()
        .map(|line| format!("<li><pre>{}</pre></li>", escape_code(line)))
        .collect();

    format!("<ul class='ccode'>\n{}</ul>", lines.join("\n"))
}

fn escape_code(line: &str) -> String {
    line.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
