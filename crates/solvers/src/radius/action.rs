/// Actions an observer can take during the radius search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the radius found so far.
    ///
    /// The reported radius is a lower bound on the true minimum, since the
    /// remaining houses were not located.
    StopEarly,
}
