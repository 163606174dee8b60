//! Change notification for registry observers.

/// What kind of mutation a [`ChangeEvent`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    Moved,
    Changed,
}

/// Emitted by the registry after every successful mutation.
///
/// `target` is the index most relevant to the mutation: the last inserted
/// index for `Added`, the index preceding the removed one for `Removed`
/// (`None` when nothing precedes it), the destination for `Moved`, and the
/// modified index for `Changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub target: Option<usize>,
}

/// Observer of registry mutations.
///
/// `on_change` fires for every event, before the kind-specific method; a
/// presentation layer that refreshes wholesale only needs to override it.
/// All methods default to no-ops.
#[allow(unused_variables)]
pub trait ShipmentListener: Send {
    /// Called first for every mutation, regardless of kind.
    fn on_change(&mut self, event: &ChangeEvent) {}

    fn on_added(&mut self, event: &ChangeEvent) {}

    fn on_removed(&mut self, event: &ChangeEvent) {}

    fn on_moved(&mut self, event: &ChangeEvent) {}

    fn on_changed(&mut self, event: &ChangeEvent) {}
}
