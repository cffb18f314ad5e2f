use tracing::trace;

use super::{Axis, AxisChange, AxisKind};

impl<K: AxisKind> Axis<K> {
    /// Delivers `change` to every observer in registration order.
    pub(super) fn emit_axis_change(&mut self, change: AxisChange) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        trace!(
            axis = self.kind.name(),
            kind = ?change.kind,
            observers = self.observers.len(),
            "dispatching axis change"
        );
        for observer in self.observers.values_mut() {
            observer.on_axis_changed(change, &snapshot);
        }
    }
}
