//! Default and option-set rules for a single answer

/// Outcome of resolving one raw answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The accepted value, if any
    pub value: Option<String>,
    /// Set when a non-blank answer was outside the allowed options and was
    /// replaced by the default
    pub rejected: Option<String>,
}

/// Resolve a raw answer against an optional default and option set
///
/// - Surrounding whitespace is ignored.
/// - A blank answer yields `default`, or nothing if there is none.
/// - An answer outside `allowed` yields `default` and records the rejected
///   text. There is no retry.
/// - An empty default counts as no default.
#[must_use]
pub fn resolve(raw: &str, default: Option<&str>, allowed: Option<&[&str]>) -> Resolution {
    let answer = raw.trim();
    let default = default.filter(|value| !value.is_empty()).map(str::to_owned);

    if answer.is_empty() {
        return Resolution {
            value: default,
            rejected: None,
        };
    }

    if let Some(options) = allowed
        && !options.contains(&answer)
    {
        return Resolution {
            value: default,
            rejected: Some(answer.to_owned()),
        };
    }

    Resolution {
        value: Some(answer.to_owned()),
        rejected: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: &[&str] = &["blue", "green"];

    #[test]
    fn test_blank_uses_default() {
        let resolved = resolve("   ", Some("blue"), None);
        assert_eq!(resolved.value.as_deref(), Some("blue"));
        assert_eq!(resolved.rejected, None);
    }

    #[test]
    fn test_blank_without_default_is_none() {
        assert_eq!(resolve("", None, None).value, None);
        assert_eq!(resolve("\n", Some(""), None).value, None);
    }

    #[test]
    fn test_answer_is_trimmed() {
        assert_eq!(resolve("  hello \n", None, None).value.as_deref(), Some("hello"));
    }

    #[test]
    fn test_invalid_option_falls_back_to_default() {
        let resolved = resolve("red", Some("green"), Some(COLORS));
        assert_eq!(resolved.value.as_deref(), Some("green"));
        assert_eq!(resolved.rejected.as_deref(), Some("red"));
    }

    #[test]
    fn test_invalid_option_without_default_is_none() {
        let resolved = resolve("red", None, Some(COLORS));
        assert_eq!(resolved.value, None);
        assert_eq!(resolved.rejected.as_deref(), Some("red"));
    }

    #[test]
    fn test_valid_option_is_kept() {
        let resolved = resolve("blue", Some("green"), Some(COLORS));
        assert_eq!(resolved.value.as_deref(), Some("blue"));
    }

    #[test]
    fn test_options_are_case_sensitive() {
        let resolved = resolve("Blue", Some("green"), Some(COLORS));
        assert_eq!(resolved.value.as_deref(), Some("green"));
    }
}
