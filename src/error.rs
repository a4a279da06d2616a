/// Error type for page wiring.
///
/// Everything here is fatal: the shell does not try to recover from a page
/// that is missing its contract elements.
#[derive(Debug)]
pub enum ShellError {
    /// The script is running without a window/document to wire.
    NoDocument,
    /// A required page element is missing from the document.
    ElementNotFound { id: &'static str },
    /// A required page element exists but is the wrong kind of node.
    WrongElementKind {
        id: &'static str,
        expected: &'static str,
    },
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::NoDocument => write!(f, "no window/document available"),
            ShellError::ElementNotFound { id } => {
                write!(f, "page element #{id} not found")
            }
            ShellError::WrongElementKind { id, expected } => {
                write!(f, "page element #{id} is not {expected}")
            }
        }
    }
}

impl std::error::Error for ShellError {}
