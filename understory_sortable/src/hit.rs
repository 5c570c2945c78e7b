// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing: resolve a viewport point to a marked item.
//!
//! ## Overview
//!
//! The touch strategy needs "the topmost element under the pointer, or its
//! nearest ancestor carrying an [`ItemMarker`]". Hosts with a native picker
//! (a browser's `elementFromPoint` plus `closest`) implement [`HitTest`]
//! directly, or pass a closure. Hosts without one can describe their items as
//! an [`ItemScene`]: a small tree of world-space regions with z-order,
//! pickability flags and optional markers.
//!
//! ## Picking rules
//!
//! - Only regions containing the point are candidates; `x0`/`y0` edges are
//!   inclusive and `x1`/`y1` edges exclusive.
//! - A region is pickable only if it and all its ancestors are
//!   [`NodeFlags::VISIBLE`] and [`NodeFlags::PICKABLE`] (`pointer-events: none`
//!   applies to a whole subtree).
//! - The highest `z_index` wins; equal z resolves to the region inserted last,
//!   which is the one painted on top.
//!
//! This is not a layout engine: bounds are supplied already positioned.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_sortable::hit::{HitTest, ItemScene, Region};
//! use understory_sortable::types::ItemMarker;
//!
//! let mut scene = ItemScene::new();
//! let list = scene.insert(None, Region::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
//! for i in 0..2 {
//!     let y = i as f64 * 50.0;
//!     let row = scene.insert(
//!         Some(list),
//!         Region::new(Rect::new(0.0, y, 100.0, y + 50.0)).with_marker(ItemMarker(i)),
//!     );
//!     // A label inside the row resolves to the row's marker.
//!     scene.insert(Some(row), Region::new(Rect::new(10.0, y + 10.0, 90.0, y + 40.0)));
//! }
//! assert_eq!(scene.item_at(Point::new(50.0, 75.0)), Some(ItemMarker(1)));
//! assert_eq!(scene.item_at(Point::new(50.0, 150.0)), None);
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::props::{ItemProps, PointerEvents};
use crate::types::ItemMarker;

/// Resolve a viewport point to the marked item under it.
pub trait HitTest {
    /// Marker of the nearest marked ancestor of the topmost element at `point`.
    fn item_at(&self, point: Point) -> Option<ItemMarker>;
}

impl<F> HitTest for F
where
    F: Fn(Point) -> Option<ItemMarker>,
{
    fn item_at(&self, point: Point) -> Option<ItemMarker> {
        self(point)
    }
}

/// Identifier for a region in an [`ItemScene`].
///
/// Identifiers are invalidated by [`ItemScene::clear`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RegionId(u32);

impl RegionId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Region flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Region is visible.
        const VISIBLE  = 0b0000_0001;
        /// Region is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Geometry and picking data for one region.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    /// World-space (viewport) bounds.
    pub bounds: Rect,
    /// Stacking order; higher is on top.
    pub z_index: i32,
    /// Visibility and picking flags.
    pub flags: NodeFlags,
    /// Item marker, for regions that are sortable items.
    pub marker: Option<ItemMarker>,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            z_index: 0,
            flags: NodeFlags::default(),
            marker: None,
        }
    }
}

impl Region {
    /// A visible, pickable, unmarked region.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    /// Attach an item marker.
    #[must_use]
    pub fn with_marker(mut self, marker: ItemMarker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Set the stacking order.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

#[derive(Clone, Debug)]
struct Slot {
    region: Region,
    parent: Option<RegionId>,
}

/// Result of [`ItemScene::hit_test_point`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneHit {
    /// Topmost pickable region under the point.
    pub region: RegionId,
    /// Path from root to region (inclusive).
    pub path: Vec<RegionId>,
}

/// A flat-stored tree of regions used to hit-test sortable items.
#[derive(Clone, Debug, Default)]
pub struct ItemScene {
    slots: Vec<Slot>,
}

impl ItemScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the scene has no regions.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Remove every region, invalidating all [`RegionId`]s.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Insert a region under `parent` (or as a root if `None` or unknown).
    pub fn insert(&mut self, parent: Option<RegionId>, region: Region) -> RegionId {
        let parent = parent.filter(|p| p.idx() < self.slots.len());
        #[allow(
            clippy::cast_possible_truncation,
            reason = "RegionId uses 32-bit indices by design."
        )]
        let id = RegionId(self.slots.len() as u32);
        self.slots.push(Slot { region, parent });
        id
    }

    /// Region data for `id`.
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.slots.get(id.idx()).map(|s| &s.region)
    }

    /// Parent of `id`, if any.
    pub fn parent_of(&self, id: RegionId) -> Option<RegionId> {
        self.slots.get(id.idx()).and_then(|s| s.parent)
    }

    /// Update bounds.
    pub fn set_bounds(&mut self, id: RegionId, bounds: Rect) {
        if let Some(region) = self.region_mut(id) {
            region.bounds = bounds;
        }
    }

    /// Update z index.
    pub fn set_z_index(&mut self, id: RegionId, z_index: i32) {
        if let Some(region) = self.region_mut(id) {
            region.z_index = z_index;
        }
    }

    /// Update flags.
    pub fn set_flags(&mut self, id: RegionId, flags: NodeFlags) {
        if let Some(region) = self.region_mut(id) {
            region.flags = flags;
        }
    }

    /// Update marker.
    pub fn set_marker(&mut self, id: RegionId, marker: Option<ItemMarker>) {
        if let Some(region) = self.region_mut(id) {
            region.marker = marker;
        }
    }

    /// Apply an item's props for this frame: its marker and its
    /// `pointer-events` hint.
    pub fn sync_item(&mut self, id: RegionId, props: &ItemProps) {
        if let Some(region) = self.region_mut(id) {
            region.marker = Some(props.marker);
            region.flags.set(
                NodeFlags::PICKABLE,
                props.style.pointer_events == PointerEvents::Auto,
            );
        }
    }

    /// Topmost pickable region containing `pt`.
    pub fn hit_test_point(&self, pt: Point) -> Option<SceneHit> {
        let mut best: Option<(RegionId, i32)> = None;
        for (i, slot) in self.slots.iter().enumerate() {
            if !slot.region.bounds.contains(pt) {
                continue;
            }
            #[allow(
                clippy::cast_possible_truncation,
                reason = "RegionId uses 32-bit indices by design."
            )]
            let id = RegionId(i as u32);
            if !self.is_pickable(id) {
                continue;
            }
            let z = slot.region.z_index;
            match best {
                Some((_, z_best)) if z < z_best => {}
                _ => best = Some((id, z)),
            }
        }
        best.map(|(region, _)| SceneHit {
            region,
            path: self.path_to_root(region),
        })
    }

    /// Marker of `id` or of its nearest marked ancestor.
    pub fn marked_ancestor(&self, id: RegionId) -> Option<ItemMarker> {
        let mut cur = Some(id);
        while let Some(c) = cur {
            let slot = self.slots.get(c.idx())?;
            if let Some(marker) = slot.region.marker {
                return Some(marker);
            }
            cur = slot.parent;
        }
        None
    }

    // --- internals ---

    fn region_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.slots.get_mut(id.idx()).map(|s| &mut s.region)
    }

    fn is_pickable(&self, id: RegionId) -> bool {
        let required = NodeFlags::VISIBLE | NodeFlags::PICKABLE;
        let mut cur = Some(id);
        while let Some(c) = cur {
            let Some(slot) = self.slots.get(c.idx()) else {
                return false;
            };
            if !slot.region.flags.contains(required) {
                return false;
            }
            cur = slot.parent;
        }
        true
    }

    fn path_to_root(&self, id: RegionId) -> Vec<RegionId> {
        let mut out = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            out.push(c);
            cur = self.parent_of(c);
        }
        out.reverse();
        out
    }
}

impl HitTest for ItemScene {
    fn item_at(&self, point: Point) -> Option<ItemMarker> {
        let hit = self.hit_test_point(point)?;
        self.marked_ancestor(hit.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Root list with `n` stacked 40px rows, each with a nested label.
    fn rows(n: usize) -> (ItemScene, Vec<RegionId>) {
        let mut scene = ItemScene::new();
        let root = scene.insert(None, Region::new(Rect::new(0.0, 0.0, 200.0, 1000.0)));
        let mut ids = Vec::new();
        for i in 0..n {
            let y = i as f64 * 40.0;
            let row = scene.insert(
                Some(root),
                Region::new(Rect::new(0.0, y, 200.0, y + 40.0)).with_marker(ItemMarker(i)),
            );
            scene.insert(
                Some(row),
                Region::new(Rect::new(10.0, y + 5.0, 150.0, y + 35.0)),
            );
            ids.push(row);
        }
        (scene, ids)
    }

    #[test]
    fn nested_label_resolves_to_row_marker() {
        let (scene, ids) = rows(3);
        let hit = scene.hit_test_point(Point::new(20.0, 50.0)).unwrap();
        assert_eq!(hit.path.len(), 3);
        assert_eq!(hit.path[1], ids[1]);
        assert_eq!(scene.item_at(Point::new(20.0, 50.0)), Some(ItemMarker(1)));
    }

    #[test]
    fn gap_between_rows_hits_unmarked_root() {
        let mut scene = ItemScene::new();
        let root = scene.insert(None, Region::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        scene.insert(
            Some(root),
            Region::new(Rect::new(0.0, 0.0, 100.0, 40.0)).with_marker(ItemMarker(0)),
        );
        assert!(scene.hit_test_point(Point::new(50.0, 60.0)).is_some());
        assert_eq!(scene.item_at(Point::new(50.0, 60.0)), None);
    }

    #[test]
    fn unpickable_subtree_reveals_region_beneath() {
        let mut scene = ItemScene::new();
        let under = scene.insert(
            None,
            Region::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_marker(ItemMarker(1)),
        );
        let over = scene.insert(
            None,
            Region::new(Rect::new(0.0, 0.0, 100.0, 100.0))
                .with_marker(ItemMarker(0))
                .with_z_index(10),
        );
        let child = scene.insert(Some(over), Region::new(Rect::new(0.0, 0.0, 50.0, 50.0)));
        assert_eq!(scene.item_at(Point::new(10.0, 10.0)), Some(ItemMarker(0)));

        scene.set_flags(over, NodeFlags::VISIBLE);
        // The child inherits the parent's transparency.
        let hit = scene.hit_test_point(Point::new(10.0, 10.0)).unwrap();
        assert_ne!(hit.region, child);
        assert_eq!(hit.region, under);
        assert_eq!(scene.item_at(Point::new(10.0, 10.0)), Some(ItemMarker(1)));
    }

    #[test]
    fn higher_z_wins_and_equal_z_prefers_later() {
        let mut scene = ItemScene::new();
        let a = scene.insert(
            None,
            Region::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_z_index(5),
        );
        let b = scene.insert(None, Region::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(scene.hit_test_point(Point::new(1.0, 1.0)).unwrap().region, a);
        scene.set_z_index(b, 5);
        assert_eq!(scene.hit_test_point(Point::new(1.0, 1.0)).unwrap().region, b);
    }

    #[test]
    fn edges_are_half_open() {
        let (scene, _) = rows(2);
        assert_eq!(scene.item_at(Point::new(0.0, 40.0)), Some(ItemMarker(1)));
        assert_eq!(scene.item_at(Point::new(0.0, 39.9)), Some(ItemMarker(0)));
    }

    #[test]
    fn unknown_parent_inserts_root() {
        let mut scene = ItemScene::new();
        let orphan = scene.insert(Some(RegionId(42)), Region::default());
        assert_eq!(scene.parent_of(orphan), None);
        assert_eq!(scene.len(), 1);
        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.region(orphan), None);
    }

    #[test]
    fn closures_are_hit_testers() {
        let picker = |p: Point| (p.y < 10.0).then_some(ItemMarker(7));
        assert_eq!(picker.item_at(Point::new(0.0, 5.0)), Some(ItemMarker(7)));
        assert_eq!(picker.item_at(Point::new(0.0, 15.0)), None);
    }

    #[test]
    fn relayout_and_remarking_take_effect() {
        let (mut scene, ids) = rows(2);
        // Rows swapped places on screen, and their markers with them.
        scene.set_bounds(ids[0], Rect::new(0.0, 40.0, 200.0, 80.0));
        scene.set_bounds(ids[1], Rect::new(0.0, 0.0, 200.0, 40.0));
        scene.set_marker(ids[0], Some(ItemMarker(1)));
        scene.set_marker(ids[1], Some(ItemMarker(0)));
        // Point outside the labels so the row itself is the topmost hit.
        assert_eq!(scene.item_at(Point::new(180.0, 20.0)), Some(ItemMarker(0)));
        assert_eq!(scene.hit_test_point(Point::new(180.0, 20.0)).map(|h| h.region), Some(ids[1]));

        scene.set_marker(ids[1], None);
        assert_eq!(scene.item_at(Point::new(180.0, 20.0)), None);
    }
}
