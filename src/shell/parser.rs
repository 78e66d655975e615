/// Splits one input line into argument tokens.
///
/// Only the space character separates tokens. Quoting follows a reduced POSIX model:
/// single quotes copy everything literally, double quotes copy literally except for
/// `\\` and `\"`, and an unquoted backslash escapes the next character (a space included).
/// Adjacent quoted and unquoted fragments glue into one token, and an unterminated quote
/// runs to the end of the line.
pub fn parse_command(cmd_str: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current_token = String::new();

    // Distinguishes an explicitly empty token ('' or "") from no token at all.
    let mut token_started = false;

    let mut chars = cmd_str.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ' ' => {
                if token_started {
                    args.push(std::mem::take(&mut current_token));
                    token_started = false;
                }
            }
            '\'' => {
                token_started = true;
                for qc in chars.by_ref() {
                    if qc == '\'' {
                        break;
                    }
                    current_token.push(qc);
                }
            }
            '"' => {
                token_started = true;
                while let Some(qc) = chars.next() {
                    match qc {
                        '"' => break,
                        '\\' if matches!(chars.peek(), Some('\\' | '"')) => {
                            if let Some(escaped) = chars.next() {
                                current_token.push(escaped);
                            }
                        }
                        _ => current_token.push(qc),
                    }
                }
            }
            '\\' => {
                // A trailing backslash still opens a (possibly empty) token.
                token_started = true;
                if let Some(escaped) = chars.next() {
                    current_token.push(escaped);
                }
            }
            _ => {
                current_token.push(c);
                token_started = true;
            }
        }
    }

    if token_started {
        args.push(current_token);
    }

    args
}
