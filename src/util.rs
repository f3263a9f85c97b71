/// What happened when a key was pushed down a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Insertion {
    /// The key wasn't present so a new leaf now holds it.
    Added,
    /// A node already holds an equal key at this depth. Nothing was allocated or moved.
    AlreadyPresent(usize),
}

impl Insertion {
    /// Logs a discarded duplicate and reports whether the tree grew.
    pub(crate) fn grew(self) -> bool {
        match self {
            Self::Added => true,
            Self::AlreadyPresent(depth) => {
                log::trace!("ignoring duplicate key found at depth {}", depth);
                false
            }
        }
    }
}
