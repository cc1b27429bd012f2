/// Per-depth "was the last child of its parent" flags for the directories
/// enclosing the entry currently being drawn.
///
/// `flags[d]` belongs to the ancestor at depth `d`; the stack is pushed before
/// descending into a directory and popped on the way back out, so it never
/// holds a flag from a sibling subtree.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AncestorFlags {
    flags: Vec<bool>,
}

impl AncestorFlags {
    pub fn push(&mut self, is_last: bool) {
        self.flags.push(is_last);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.flags.pop()
    }

    pub fn depth(&self) -> usize {
        self.flags.len()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}
