//! Captured process arguments.

/// The argument vector captured once at startup.
///
/// The context never mutates the arguments; the overlay only scans them.
/// Index 0 is the program name slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliContext {
    args: Vec<String>,
}

impl CliContext {
    /// Captures an explicit argument vector (tests, embedding).
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Captures the arguments of the running process.
    pub fn from_env() -> Self {
        Self::new(std::env::args())
    }

    /// The captured arguments, program name included.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the argument at `index`, if any.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Finds the index of the first argument equal to `key`.
    ///
    /// `key` may hold two spellings separated by `/` (`"-f/--foo"`).  The
    /// first spelling is searched across the whole vector before the second
    /// one is tried.
    pub fn find_option(&self, key: &str) -> Option<usize> {
        let (first, second) = match key.split_once('/') {
            Some((first, second)) => (first, Some(second)),
            None => (key, None),
        };

        self.position(first)
            .or_else(|| second.and_then(|alt| self.position(alt)))
    }

    fn position(&self, spelling: &str) -> Option<usize> {
        self.args.iter().position(|arg| arg == spelling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_option_exact_match_only() {
        let ctx = CliContext::new(["prog", "--foo", "5"]);
        assert_eq!(ctx.find_option("--foo"), Some(1));
        assert_eq!(ctx.find_option("--fo"), None);
        assert_eq!(ctx.find_option("5"), Some(2));
    }

    #[test]
    fn test_find_option_prefers_first_alias_across_whole_vector() {
        // Arrange: the second spelling appears earlier than the first.
        let ctx = CliContext::new(["prog", "-f", "1", "--foo", "2"]);

        // Act
        let idx = ctx.find_option("--foo/-f");

        // Assert
        assert_eq!(idx, Some(3));
    }

    #[test]
    fn test_find_option_falls_back_to_second_alias() {
        let ctx = CliContext::new(["prog", "-f", "5"]);
        assert_eq!(ctx.find_option("--foo/-f"), Some(1));
        assert_eq!(ctx.find_option("--bar/-b"), None);
    }

    #[test]
    fn test_find_option_can_match_program_slot() {
        let ctx = CliContext::new(["--odd"]);
        assert_eq!(ctx.find_option("--odd"), Some(0));
    }
}
