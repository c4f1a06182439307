use std::collections::VecDeque;

/// A value notification waiting for the host's next turn.
///
/// Only the pixel position is captured; it is turned into a value when the
/// queue is flushed, against whatever ticks and snap flag are current then.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DeferredEmit {
    pub position_px: f32,
}

/// FIFO of pending notifications.
#[derive(Debug, Default)]
pub(super) struct DeferredQueue {
    pending: VecDeque<DeferredEmit>,
}

impl DeferredQueue {
    pub fn push(&mut self, emit: DeferredEmit) {
        self.pending.push_back(emit);
    }

    /// Takes everything queued so far. Emissions queued while the batch is
    /// delivered wait for the next flush.
    pub fn take(&mut self) -> VecDeque<DeferredEmit> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_preserves_insertion_order() {
        let mut queue = DeferredQueue::default();
        queue.push(DeferredEmit { position_px: 1.0 });
        queue.push(DeferredEmit { position_px: 2.0 });
        assert_eq!(queue.len(), 2);

        let batch: Vec<f32> = queue.take().into_iter().map(|e| e.position_px).collect();
        assert_eq!(batch, vec![1.0, 2.0]);
        assert_eq!(queue.len(), 0);
    }
}
