/// Characters a backslash escapes inside double quotes.
const DOUBLE_QUOTE_ESCAPES: &[char] = &['$', '`', '"', '\\', '\n'];

/// Tokenizes one input line into an argument vector.
/// Handles single quotes, double quotes and backslash escapes; an unterminated
/// quote is closed implicitly at end of input.
pub fn tokenize(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;

        match c {
            '\'' if !in_double_quote => in_single_quote = !in_single_quote,
            '"' if !in_single_quote => in_double_quote = !in_double_quote,
            '\\' if in_single_quote => current.push(c),
            // A trailing backslash has nothing to escape and is kept.
            '\\' if i < chars.len() => {
                let next = chars[i];
                if !in_double_quote || DOUBLE_QUOTE_ESCAPES.contains(&next) {
                    current.push(next);
                    i += 1;
                } else {
                    current.push(c);
                }
            }
            ' ' | '\n' if !in_single_quote && !in_double_quote => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            '\n' => {}
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_command() {
        assert_eq!(tokenize("echo hello\n"), vec!["echo", "hello"]);
    }

    #[test]
    fn test_collapses_repeated_spaces() {
        assert_eq!(tokenize("  echo   a  b   \n"), vec!["echo", "a", "b"]);
        assert!(tokenize("    \n").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_single_quotes_preserve_spaces() {
        assert_eq!(tokenize("echo 'a b' c"), vec!["echo", "a b", "c"]);
    }

    #[test]
    fn test_backslash_is_literal_in_single_quotes() {
        assert_eq!(tokenize(r"echo 'a\nb\\'"), vec!["echo", r"a\nb\\"]);
    }

    #[test]
    fn test_double_quote_escapes() {
        assert_eq!(tokenize("echo \"a\\\"b\""), vec!["echo", "a\"b"]);
        assert_eq!(tokenize(r#"echo "x\\y\$z\`""#), vec!["echo", r"x\y$z`"]);
    }

    #[test]
    fn test_double_quote_keeps_other_backslashes() {
        // `\n` is not in the escape set, so the backslash stays and `n` is read normally.
        assert_eq!(tokenize(r#"echo "a\nb""#), vec!["echo", r"a\nb"]);
        assert_eq!(tokenize(r#"echo "a\'b""#), vec!["echo", r"a\'b"]);
    }

    #[test]
    fn test_quotes_nest_literally() {
        assert_eq!(tokenize(r#"echo "it's" 'say "hi"'"#), vec!["echo", "it's", "say \"hi\""]);
    }

    #[test]
    fn test_unquoted_backslash_escapes_anything() {
        assert_eq!(tokenize("echo a\\ b"), vec!["echo", "a b"]);
        assert_eq!(tokenize(r"echo \'x\' \\"), vec!["echo", "'x'", r"\"]);
    }

    #[test]
    fn test_trailing_backslash_is_kept() {
        assert_eq!(tokenize(r"echo a\"), vec!["echo", r"a\"]);
    }

    #[test]
    fn test_mixed_segments_concatenate() {
        assert_eq!(tokenize("a'b'\"c\"d"), vec!["abcd"]);
    }

    #[test]
    fn test_unterminated_quote_flushes() {
        assert_eq!(tokenize("echo 'abc\n"), vec!["echo", "abc"]);
        assert_eq!(tokenize("echo \"a b"), vec!["echo", "a b"]);
    }

    #[test]
    fn test_empty_quotes_produce_no_token() {
        assert_eq!(tokenize("echo '' \"\" x"), vec!["echo", "x"]);
    }

    #[test]
    fn test_redirection_operators_stay_separate_words() {
        assert_eq!(tokenize("echo hi > file.txt\n"), vec!["echo", "hi", ">", "file.txt"]);
        assert_eq!(tokenize("echo hi>file.txt"), vec!["echo", "hi>file.txt"]);
    }

    #[test]
    fn test_only_spaces_separate() {
        let line = "ls\t-l";
        assert_eq!(tokenize(line), vec!["ls\t-l"]);
    }
}
