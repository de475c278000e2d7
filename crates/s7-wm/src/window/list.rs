//! Arena-backed window list
//!
//! Windows live in slots of a `Vec` and are chained front to back through
//! their `next` links. The list owns every window; everything else refers to
//! windows by [`WindowId`]. Removing a window bumps its slot's generation,
//! so the old id becomes a tombstone.

use alloc::vec::Vec;
use core::cmp::Reverse;

use tracing::warn;

use super::{Window, WindowId};
use crate::error::{WmError, WmResult};

struct Slot {
    generation: u32,
    window: Option<Window>,
}

#[derive(Default)]
pub struct WindowList {
    slots: Vec<Slot>,
    free: Vec<u32>,
    head: Option<WindowId>,
    len: usize,
}

impl WindowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Frontmost window, visible or not.
    pub fn head(&self) -> Option<WindowId> {
        self.head
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.get(id).is_ok()
    }

    pub fn get(&self, id: WindowId) -> WmResult<&Window> {
        match self.slots.get(id.index() as usize) {
            None => Err(WmError::WindowNotFound(id)),
            Some(slot) => match &slot.window {
                Some(window) if slot.generation == id.generation() => Ok(window),
                _ if id.generation() < slot.generation || slot.window.is_none() => {
                    warn!(%id, "stale window id");
                    Err(WmError::StaleWindow(id))
                }
                _ => Err(WmError::WindowNotFound(id)),
            },
        }
    }

    pub fn get_mut(&mut self, id: WindowId) -> WmResult<&mut Window> {
        self.get(id)?;
        self.slots
            .get_mut(id.index() as usize)
            .and_then(|slot| slot.window.as_mut())
            .ok_or(WmError::WindowNotFound(id))
    }

    /// Store a new, unlinked window. `build` receives the id it will live
    /// under.
    pub fn insert_with(&mut self, build: impl FnOnce(WindowId) -> Window) -> WindowId {
        let id = match self.free.pop() {
            Some(index) => WindowId::new(index, self.slots[index as usize].generation),
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    window: None,
                });
                WindowId::new(self.slots.len() as u32 - 1, 0)
            }
        };
        let mut window = build(id);
        window.id = id;
        window.next = None;
        self.slots[id.index() as usize].window = Some(window);
        self.len += 1;
        id
    }

    /// Unlink and take the window out of the arena.
    pub fn remove(&mut self, id: WindowId) -> WmResult<Window> {
        self.get(id)?;
        self.unlink(id);
        let slot = &mut self.slots[id.index() as usize];
        let window = slot.window.take().ok_or(WmError::WindowNotFound(id))?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index());
        self.len -= 1;
        Ok(window)
    }

    // ========================================================================
    // Linking
    // ========================================================================

    /// The window directly in front of `id`.
    pub fn predecessor(&self, id: WindowId) -> Option<WindowId> {
        self.iter()
            .find(|w| w.next == Some(id))
            .map(|w| w.id)
    }

    pub fn is_linked(&self, id: WindowId) -> bool {
        self.head == Some(id) || self.predecessor(id).is_some()
    }

    /// Detach `id` from the chain. Returns false if it was not linked.
    pub fn unlink(&mut self, id: WindowId) -> bool {
        let Ok(next) = self.get(id).map(|w| w.next) else {
            return false;
        };
        if self.head == Some(id) {
            self.head = next;
        } else if let Some(prev) = self.predecessor(id) {
            if let Ok(prev) = self.get_mut(prev) {
                prev.next = next;
            }
        } else {
            return false;
        }
        if let Ok(window) = self.get_mut(id) {
            window.next = None;
        }
        true
    }

    /// Link an unlinked window at the front.
    pub fn link_front(&mut self, id: WindowId) -> WmResult<()> {
        self.unlink(id);
        let head = self.head;
        self.get_mut(id)?.next = head;
        self.head = Some(id);
        Ok(())
    }

    /// Link `id` directly behind `behind`.
    pub fn link_after(&mut self, id: WindowId, behind: WindowId) -> WmResult<()> {
        if id == behind {
            return Err(WmError::InvalidOperation {
                op: "link_after",
                reason: "window cannot follow itself",
            });
        }
        self.get(id)?;
        self.unlink(id);
        let after = self.get(behind)?.next;
        self.get_mut(id)?.next = after;
        self.get_mut(behind)?.next = Some(id);
        Ok(())
    }

    /// Link `id` at the back of the list.
    pub fn link_back(&mut self, id: WindowId) -> WmResult<()> {
        self.get(id)?;
        self.unlink(id);
        match self.iter().last().map(|w| w.id) {
            Some(tail) => self.link_after(id, tail),
            None => self.link_front(id),
        }
    }

    /// Reorder the chain so higher layers come first, keeping the relative
    /// order of windows inside each layer.
    pub fn restack(&mut self) {
        let mut order = self.ids();
        order.sort_by_key(|&id| {
            Reverse(self.get(id).map(|w| w.layer).unwrap_or_default())
        });
        self.head = order.first().copied();
        for (i, &id) in order.iter().enumerate() {
            if let Ok(window) = self.get_mut(id) {
                window.next = order.get(i + 1).copied();
            }
        }
    }

    /// Windows front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Windows behind `id`, front to back, not including `id`.
    pub fn iter_behind(&self, id: WindowId) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.get(id).ok().and_then(|w| w.next),
        }
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.iter().map(|w| w.id).collect()
    }
}

/// Front-to-back iterator over a [`WindowList`].
pub struct Iter<'a> {
    list: &'a WindowList,
    cursor: Option<WindowId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Window;

    fn next(&mut self) -> Option<&'a Window> {
        let window = self.list.get(self.cursor?).ok()?;
        self.cursor = window.next;
        Some(window)
    }
}
