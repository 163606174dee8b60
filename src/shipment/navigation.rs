//! Next-sample navigation over the packing order.

use crate::domain::Sample;

/// Traversal policy for [`next_index`]. The flags combine independently;
/// the default is forward, wrapping, skipping packed samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Search backward instead of forward.
    pub reversed: bool,
    /// Do not wrap past the first/last index; give up instead.
    pub stop_at_boundary: bool,
    /// Accept samples already marked packed.
    pub every_item: bool,
}

impl NavOptions {
    pub const DEFAULT: NavOptions = NavOptions {
        reversed: false,
        stop_at_boundary: false,
        every_item: false,
    };

    pub const fn reversed() -> Self {
        NavOptions {
            reversed: true,
            stop_at_boundary: false,
            every_item: false,
        }
    }

    pub const fn stop_at_boundary(mut self) -> Self {
        self.stop_at_boundary = true;
        self
    }

    pub const fn every_item(mut self) -> Self {
        self.every_item = true;
        self
    }
}

/// Find the next index to visit relative to `from`, without mutating
/// anything.
///
/// Steps once per iteration in the configured direction; an exit from
/// `[0, len)` either ends the search (`stop_at_boundary`) or wraps to the
/// opposite end. A landing index is accepted when `every_item` is set or the
/// sample there is unpacked. The search is bounded by one full cycle, so it
/// terminates with `None` even when every sample is packed. `from = None`
/// means "no current selection" and steps from before the start.
pub fn next_index(samples: &[Sample], from: Option<usize>, options: NavOptions) -> Option<usize> {
    if samples.is_empty() {
        return None;
    }
    let len = samples.len() as i64;
    let step: i64 = if options.reversed { -1 } else { 1 };
    let mut cursor = from.map(|i| i as i64).unwrap_or(-1);

    for _ in 0..samples.len() {
        cursor += step;
        if cursor >= len {
            if options.stop_at_boundary {
                return None;
            }
            cursor = 0;
        } else if cursor < 0 {
            if options.stop_at_boundary {
                return None;
            }
            cursor = len - 1;
        }
        let index = cursor as usize;
        if options.every_item || !samples[index].packed() {
            return Some(index);
        }
    }
    None
}
