//! Argument helpers shared by the `preview` and `rain` binaries.

/// Value of `--name value` or `--name=value`.
pub fn arg_value(args: &[String], name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    args.iter().enumerate().find_map(|(i, arg)| {
        if arg == name {
            args.get(i + 1).cloned()
        } else {
            arg.strip_prefix(&prefix).map(str::to_string)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_separate_value() {
        let args = args(&["preview", "--lang", "ru", "--theme", "light"]);
        assert_eq!(arg_value(&args, "--lang").as_deref(), Some("ru"));
        assert_eq!(arg_value(&args, "--theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_inline_value() {
        let args = args(&["rain", "--lang=ru"]);
        assert_eq!(arg_value(&args, "--lang").as_deref(), Some("ru"));
    }

    #[test]
    fn test_missing_or_dangling() {
        assert_eq!(arg_value(&args(&["rain", "--reduced-motion"]), "--lang"), None);
        assert_eq!(arg_value(&args(&["preview", "--lang"]), "--lang"), None);
        // Prefix of a longer flag is not a match
        assert_eq!(arg_value(&args(&["preview", "--language=ru"]), "--lang"), None);
    }
}
