/// Collapses bursts of scroll events into at most one recomputation per animation frame.
///
/// Every event calls [`request`](Self::request); only the first one since the last
/// frame asks the caller to schedule a frame. When the frame fires,
/// [`begin_frame`](Self::begin_frame) tells the caller whether to recompute.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
    frames: u64,
}

impl FrameGate {
    /// Returns `true` if a frame must be scheduled for this request.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Returns `true` if this frame should run a recomputation.
    pub fn begin_frame(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.frames += 1;
        true
    }

    /// Drops a scheduled frame, e.g. when it could not be requested or was cancelled.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Recomputations run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_inside_one_frame_schedules_once() {
        let mut gate = FrameGate::default();
        let scheduled = (0..100).filter(|_| gate.request()).count();
        assert_eq!(scheduled, 1);

        assert!(gate.begin_frame());
        assert!(!gate.begin_frame());
        assert_eq!(gate.frames(), 1);
    }

    #[test]
    fn each_frame_gets_its_own_recomputation() {
        let mut gate = FrameGate::default();
        for _ in 0..3 {
            for _ in 0..20 {
                gate.request();
            }
            assert!(gate.begin_frame());
        }
        assert_eq!(gate.frames(), 3);
    }

    #[test]
    fn idle_frame_does_nothing() {
        let mut gate = FrameGate::default();
        assert!(!gate.begin_frame());
        assert_eq!(gate.frames(), 0);
    }

    #[test]
    fn cancel_allows_rescheduling() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        gate.cancel();
        assert!(gate.request());
        assert!(!gate.request());
    }
}
