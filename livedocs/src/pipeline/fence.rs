//! Fence info-string parsing.
//!
//! A fenced block becomes a code region when its info string carries at
//! least one `--option` after the language:
//!
//! ````text
//! ```rust --session intro --run-args "--release --quiet"
//! ````
//!
//! The info string is split with shell quoting rules, so arguments may be
//! quoted. `--session` and `--run-args` are recognized (in both `--name value`
//! and `--name=value` forms); everything else is kept in order as the
//! fallback run arguments.

use livedocs_core::CodeRegion;

/// Options parsed from a region's info string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FenceOptions {
    /// Language token, empty when the info string starts with an option.
    pub language: String,
    /// Explicit `--session` value.
    pub session: Option<String>,
    /// Explicit `--run-args` value.
    pub run_args: Option<String>,
    /// Remaining option tokens, in order.
    pub rest: Vec<String>,
}

impl FenceOptions {
    /// Parses `info`, returning `None` for plain code blocks.
    ///
    /// A block is plain when it has no `--` tokens or when its quoting is
    /// unbalanced.
    #[must_use]
    pub fn parse(info: &str) -> Option<Self> {
        let tokens = shlex::split(info)?;
        if !tokens.iter().any(|t| t.starts_with("--")) {
            return None;
        }

        let mut tokens = tokens.into_iter().peekable();
        let mut options = Self::default();
        if tokens.peek().is_some_and(|t| !t.starts_with("--")) {
            options.language = tokens.next().unwrap_or_default();
        }

        while let Some(token) = tokens.next() {
            if let Some(value) = token.strip_prefix("--session=") {
                options.session = Some(value.to_string());
            } else if let Some(value) = token.strip_prefix("--run-args=") {
                options.run_args = Some(value.to_string());
            } else if token == "--run-args" {
                // The value is itself usually a list of options.
                match tokens.next() {
                    Some(value) => options.run_args = Some(value),
                    None => options.rest.push(token),
                }
            } else if token == "--session" {
                match tokens.next_if(|next| !next.starts_with("--")) {
                    Some(value) => options.session = Some(value),
                    None => options.rest.push(token),
                }
            } else {
                options.rest.push(token);
            }
        }

        Some(options)
    }

    /// Builds the region for the `ordinal`-th (1-based) region of a document.
    ///
    /// Regions without `--session` get their own `Run<ordinal>` session.
    #[must_use]
    pub fn into_region(self, ordinal: usize, source: &str) -> CodeRegion {
        let run_args = self.run_args.unwrap_or_else(|| {
            shlex::try_join(self.rest.iter().map(String::as_str))
                .unwrap_or_else(|_| self.rest.join(" "))
        });
        CodeRegion {
            session: self
                .session
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| format!("Run{ordinal}")),
            run_args,
            language: self.language,
            source: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fences_are_not_regions() {
        assert_eq!(FenceOptions::parse("rust"), None);
        assert_eq!(FenceOptions::parse(""), None);
        assert_eq!(FenceOptions::parse("cs title=x"), None);
    }

    #[test]
    fn test_unbalanced_quotes_are_not_regions() {
        assert_eq!(FenceOptions::parse(r#"cs --session "one"#), None);
    }

    #[test]
    fn test_session_and_run_args() {
        let options =
            FenceOptions::parse(r#"rust --session intro --run-args "--release --quiet""#).unwrap();
        assert_eq!(options.language, "rust");
        assert_eq!(options.session.as_deref(), Some("intro"));
        assert_eq!(options.run_args.as_deref(), Some("--release --quiet"));
        assert!(options.rest.is_empty());
    }

    #[test]
    fn test_equals_form() {
        let options = FenceOptions::parse("cs --session=a --run-args=b").unwrap();
        assert_eq!(options.session.as_deref(), Some("a"));
        assert_eq!(options.run_args.as_deref(), Some("b"));
    }

    #[test]
    fn test_other_options_become_fallback_run_args() {
        let options =
            FenceOptions::parse("cs --source-file ./Program.cs --session s --project ./a.csproj")
                .unwrap();
        let region = options.into_region(1, "Console.WriteLine();");
        assert_eq!(region.session, "s");
        assert_eq!(
            shlex::split(&region.run_args).unwrap(),
            ["--source-file", "./Program.cs", "--project", "./a.csproj"]
        );
        assert_eq!(region.language, "cs");
        assert_eq!(region.source, "Console.WriteLine();");
    }

    #[test]
    fn test_fallback_run_args_keep_quoting() {
        let region = FenceOptions::parse(r#"cs --title "Hello world""#)
            .unwrap()
            .into_region(1, "");
        assert_eq!(
            shlex::split(&region.run_args).unwrap(),
            ["--title", "Hello world"]
        );
    }

    #[test]
    fn test_default_session_uses_ordinal() {
        let region = FenceOptions::parse("cs --editable").unwrap().into_region(3, "");
        assert_eq!(region.session, "Run3");
        assert_eq!(shlex::split(&region.run_args).unwrap(), ["--editable"]);
    }

    #[test]
    fn test_session_without_value_is_kept_as_option() {
        let options = FenceOptions::parse("cs --session --editable").unwrap();
        assert_eq!(options.session, None);
        assert_eq!(options.rest, ["--session", "--editable"]);
    }

    #[test]
    fn test_missing_language() {
        let options = FenceOptions::parse("--session a").unwrap();
        assert_eq!(options.language, "");
        assert_eq!(options.session.as_deref(), Some("a"));
    }
}
