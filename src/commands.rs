//! Command list handling
//!
//! A batch is an ordered list of shell command strings. A bare string is
//! accepted everywhere a list is, and behaves as a one-element list.

/// Ordered sequence of shell command strings
///
/// Commands are passed to a shell verbatim; metacharacters are not escaped
/// or sandboxed, so callers are responsible for command safety.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandList(Vec<String>);

impl CommandList {
    /// Create an empty command list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of commands in the batch
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the batch holds no commands
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the commands in list order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// View the commands as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for CommandList {
    fn from(command: &str) -> Self {
        Self(vec![command.to_string()])
    }
}

impl From<String> for CommandList {
    fn from(command: String) -> Self {
        Self(vec![command])
    }
}

impl From<Vec<String>> for CommandList {
    fn from(commands: Vec<String>) -> Self {
        Self(commands)
    }
}

impl From<&[&str]> for CommandList {
    fn from(commands: &[&str]) -> Self {
        Self(commands.iter().map(|c| c.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CommandList {
    fn from(commands: [&str; N]) -> Self {
        Self(commands.iter().map(|c| c.to_string()).collect())
    }
}

impl FromIterator<String> for CommandList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
