// Parsed method definitions

/// A `def` block as it appears in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    pub name: String,
    /// Body lines in source order
    pub lines: Vec<String>,
    /// 1-based line of the `def` header
    pub header_line: usize,
    /// 1-based source line of the first body line. Body lines are contiguous from here.
    pub origin: usize,
}

impl MethodDef {
    pub fn new(name: impl Into<String>, header_line: usize) -> Self {
        MethodDef {
            name: name.into(),
            lines: Vec::new(),
            header_line,
            origin: header_line + 1,
        }
    }
}
