//! Reference region allocator
//!
//! `RegionHeap` keeps every region in a generational slot arena behind a
//! spin lock. Clones share the same arena, so the Window Manager and any
//! painter or test can look at the same regions. An optional capacity limit
//! makes `new_region` fail once that many regions are live, which is how
//! allocation failure is exercised.

use alloc::sync::Arc;
use alloc::vec::Vec;

use spin::Mutex;
use tracing::{trace, warn};

use crate::geometry::{Point, Rect};
use crate::ops::{RegionOps, RgnHandle};
use crate::region::Region;

/// Allocation counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeapStats {
    pub allocated: u64,
    pub disposed: u64,
    pub failed_allocations: u64,
    /// Operations that named a disposed or unknown handle.
    pub stale_uses: u64,
}

struct Slot {
    generation: u32,
    shape: Option<Region>,
}

#[derive(Default)]
struct HeapInner {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    limit: Option<usize>,
    stats: HeapStats,
}

impl HeapInner {
    fn get(&mut self, rgn: RgnHandle, op: &'static str) -> Option<&Region> {
        match self.slots.get(rgn.index() as usize) {
            Some(slot) if slot.generation == rgn.generation() && slot.shape.is_some() => {
                slot.shape.as_ref()
            }
            _ => {
                self.stats.stale_uses += 1;
                warn!(%rgn, op, "stale region handle");
                None
            }
        }
    }

    fn get_mut(&mut self, rgn: RgnHandle, op: &'static str) -> Option<&mut Region> {
        let live = matches!(
            self.slots.get(rgn.index() as usize),
            Some(slot) if slot.generation == rgn.generation() && slot.shape.is_some()
        );
        if !live {
            self.stats.stale_uses += 1;
            warn!(%rgn, op, "stale region handle");
            return None;
        }
        self.slots
            .get_mut(rgn.index() as usize)
            .and_then(|slot| slot.shape.as_mut())
    }

    fn shape(&mut self, rgn: RgnHandle, op: &'static str) -> Region {
        self.get(rgn, op).cloned().unwrap_or_default()
    }

    fn store(&mut self, rgn: RgnHandle, shape: Region, op: &'static str) {
        if let Some(dst) = self.get_mut(rgn, op) {
            *dst = shape;
        }
    }
}

/// Shared, lock-protected region arena.
#[derive(Clone, Default)]
pub struct RegionHeap {
    inner: Arc<Mutex<HeapInner>>,
}

impl RegionHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A heap that refuses to hold more than `limit` live regions.
    pub fn with_capacity_limit(limit: usize) -> Self {
        let heap = Self::new();
        heap.set_capacity_limit(Some(limit));
        heap
    }

    pub fn set_capacity_limit(&self, limit: Option<usize>) {
        self.inner.lock().limit = limit;
    }

    /// Number of regions allocated and not yet disposed.
    pub fn live_count(&self) -> usize {
        self.inner.lock().live
    }

    pub fn stats(&self) -> HeapStats {
        self.inner.lock().stats
    }

    /// A copy of the shape behind `rgn`, `None` if the handle is stale.
    pub fn region(&self, rgn: RgnHandle) -> Option<Region> {
        self.inner.lock().get(rgn, "region").cloned()
    }

    /// Whether `rgn` still names a live region.
    pub fn is_live(&self, rgn: RgnHandle) -> bool {
        let inner = self.inner.lock();
        matches!(
            inner.slots.get(rgn.index() as usize),
            Some(slot) if slot.generation == rgn.generation() && slot.shape.is_some()
        )
    }

    fn binary(
        &self,
        a: RgnHandle,
        b: RgnHandle,
        dst: RgnHandle,
        op: &'static str,
        combine: fn(&Region, &Region) -> Region,
    ) {
        let mut inner = self.inner.lock();
        let lhs = inner.shape(a, op);
        let rhs = inner.shape(b, op);
        inner.store(dst, combine(&lhs, &rhs), op);
    }
}

impl RegionOps for RegionHeap {
    fn new_region(&self) -> Option<RgnHandle> {
        let mut inner = self.inner.lock();
        if inner.limit.is_some_and(|limit| inner.live >= limit) {
            inner.stats.failed_allocations += 1;
            trace!(live = inner.live, "region allocation refused");
            return None;
        }

        let handle = match inner.free.pop() {
            Some(index) => {
                let slot = &mut inner.slots[index as usize];
                slot.shape = Some(Region::new());
                RgnHandle::new(index, slot.generation)
            }
            None => {
                let index = inner.slots.len() as u32;
                inner.slots.push(Slot {
                    generation: 0,
                    shape: Some(Region::new()),
                });
                RgnHandle::new(index, 0)
            }
        };
        inner.live += 1;
        inner.stats.allocated += 1;
        trace!(rgn = %handle, "region allocated");
        Some(handle)
    }

    fn dispose_region(&self, rgn: RgnHandle) {
        let mut inner = self.inner.lock();
        if inner.get_mut(rgn, "dispose").is_none() {
            return;
        }
        let slot = &mut inner.slots[rgn.index() as usize];
        slot.shape = None;
        slot.generation = slot.generation.wrapping_add(1);
        inner.free.push(rgn.index());
        inner.live -= 1;
        inner.stats.disposed += 1;
        trace!(%rgn, "region disposed");
    }

    fn copy_region(&self, src: RgnHandle, dst: RgnHandle) {
        let mut inner = self.inner.lock();
        let shape = inner.shape(src, "copy");
        inner.store(dst, shape, "copy");
    }

    fn set_rect_region(&self, rgn: RgnHandle, rect: Rect) {
        if let Some(shape) = self.inner.lock().get_mut(rgn, "set_rect") {
            shape.set_rect(rect);
        }
    }

    fn set_empty_region(&self, rgn: RgnHandle) {
        if let Some(shape) = self.inner.lock().get_mut(rgn, "set_empty") {
            shape.set_empty();
        }
    }

    fn union_region(&self, a: RgnHandle, b: RgnHandle, dst: RgnHandle) {
        self.binary(a, b, dst, "union", Region::union);
    }

    fn diff_region(&self, a: RgnHandle, b: RgnHandle, dst: RgnHandle) {
        self.binary(a, b, dst, "diff", Region::difference);
    }

    fn sect_region(&self, a: RgnHandle, b: RgnHandle, dst: RgnHandle) {
        self.binary(a, b, dst, "sect", Region::intersection);
    }

    fn offset_region(&self, rgn: RgnHandle, dh: i16, dv: i16) {
        if let Some(shape) = self.inner.lock().get_mut(rgn, "offset") {
            shape.offset(dh, dv);
        }
    }

    fn is_empty_region(&self, rgn: RgnHandle) -> bool {
        self.inner
            .lock()
            .get(rgn, "is_empty")
            .map_or(true, Region::is_empty)
    }

    fn point_in_region(&self, pt: Point, rgn: RgnHandle) -> bool {
        self.inner
            .lock()
            .get(rgn, "point_in")
            .is_some_and(|shape| shape.contains(pt))
    }

    fn rect_in_region(&self, rect: &Rect, rgn: RgnHandle) -> bool {
        self.inner
            .lock()
            .get(rgn, "rect_in")
            .is_some_and(|shape| shape.intersects_rect(rect))
    }

    fn region_bounds(&self, rgn: RgnHandle) -> Rect {
        self.inner
            .lock()
            .get(rgn, "bounds")
            .map_or(Rect::EMPTY, Region::bounds)
    }
}
