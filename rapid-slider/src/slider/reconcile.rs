//! Turns configuration changes into effects.
//!
//! [`reconcile`] compares the previous and the next [`SliderConfig`] field by
//! field and returns what the slider has to do about it. It never touches the
//! slider itself, which keeps the echo rules easy to test: only `ticks` and
//! `snap` changes schedule a value emission, a `value` change never does.

use smallvec::SmallVec;

use super::SliderConfig;

/// A single thing the slider must do after a configuration change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileEffect {
    /// Replace the tick set with `n` evenly spaced ticks.
    RebuildTicks(u32),
    /// Recompute the handle geometry from the configured value.
    RecomputeGeometry,
    /// Queue a value notification for the host's next turn.
    EmitDeferred,
}

/// Effects of one reconciliation pass, in the order they must be applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    effects: SmallVec<[ReconcileEffect; 6]>,
}

impl Reconciliation {
    /// The effects, in application order.
    pub fn effects(&self) -> &[ReconcileEffect] {
        &self.effects
    }

    /// Returns `true` if nothing needs to happen.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Number of deferred emissions this pass schedules.
    pub fn deferred_emissions(&self) -> usize {
        self.effects
            .iter()
            .filter(|effect| matches!(effect, ReconcileEffect::EmitDeferred))
            .count()
    }

    fn push(&mut self, effect: ReconcileEffect) {
        self.effects.push(effect);
    }
}

/// Diffs two configurations.
///
/// `old` is `None` on first initialization, which builds ticks and geometry
/// without emitting anything. Otherwise the watched fields are handled
/// independently, in the order ticks, snap, value; several may change in
/// one pass. Name changes only affect hit-testing and produce no effect.
pub fn reconcile(old: Option<&SliderConfig>, new: &SliderConfig) -> Reconciliation {
    let mut out = Reconciliation::default();

    let Some(old) = old else {
        out.push(ReconcileEffect::RebuildTicks(new.ticks));
        out.push(ReconcileEffect::RecomputeGeometry);
        return out;
    };

    if old.ticks != new.ticks {
        out.push(ReconcileEffect::RebuildTicks(new.ticks));
        out.push(ReconcileEffect::RecomputeGeometry);
        out.push(ReconcileEffect::EmitDeferred);
    }

    if old.snap != new.snap {
        out.push(ReconcileEffect::RecomputeGeometry);
        out.push(ReconcileEffect::EmitDeferred);
    }

    if old.value != new.value {
        out.push(ReconcileEffect::RecomputeGeometry);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ReconcileEffect::*;

    fn config() -> SliderConfig {
        SliderConfig::default().name("s").value(0.3).ticks(6)
    }

    #[test]
    fn test_first_pass_builds_without_emitting() {
        let r = reconcile(None, &config());
        assert_eq!(r.effects(), &[RebuildTicks(6), RecomputeGeometry]);
        assert_eq!(r.deferred_emissions(), 0);
    }

    #[test]
    fn test_unchanged_config_is_empty() {
        let c = config();
        assert!(reconcile(Some(&c), &c.clone()).is_empty());
    }

    #[test]
    fn test_value_change_never_emits() {
        let old = config();
        let new = old.clone().value(0.8);
        let r = reconcile(Some(&old), &new);
        assert_eq!(r.effects(), &[RecomputeGeometry]);
        assert_eq!(r.deferred_emissions(), 0);
    }

    #[test]
    fn test_ticks_change_emits_once() {
        let old = config();
        let new = old.clone().ticks(11);
        let r = reconcile(Some(&old), &new);
        assert_eq!(
            r.effects(),
            &[RebuildTicks(11), RecomputeGeometry, EmitDeferred]
        );
    }

    #[test]
    fn test_snap_change_emits_once() {
        let old = config();
        let new = old.clone().snap(true);
        let r = reconcile(Some(&old), &new);
        assert_eq!(r.effects(), &[RecomputeGeometry, EmitDeferred]);
    }

    #[test]
    fn test_combined_change_keeps_branch_order() {
        let old = config();
        let new = old.clone().ticks(3).snap(true).value(0.9).name("renamed");
        let r = reconcile(Some(&old), &new);
        assert_eq!(
            r.effects(),
            &[
                RebuildTicks(3),
                RecomputeGeometry,
                EmitDeferred,
                RecomputeGeometry,
                EmitDeferred,
                RecomputeGeometry,
            ]
        );
        assert_eq!(r.deferred_emissions(), 2);
    }

    #[test]
    fn test_name_change_alone_is_empty() {
        let old = config();
        let new = old.clone().name("other");
        assert!(reconcile(Some(&old), &new).is_empty());
    }
}
