//! Region shapes
//!
//! A `Region` is an arbitrary shape kept as a list of pairwise disjoint,
//! non-empty rectangles. Every operation preserves that invariant, so area
//! and containment can be answered by summing or scanning the list.

use alloc::vec::Vec;

use crate::geometry::{Point, Rect};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    pub const fn new() -> Self {
        Self { rects: Vec::new() }
    }

    pub fn from_rect(rect: Rect) -> Self {
        let mut rgn = Self::new();
        rgn.set_rect(rect);
        rgn
    }

    /// The disjoint rectangles making up this shape.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn set_empty(&mut self) {
        self.rects.clear();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rects.clear();
        if !rect.is_empty() {
            self.rects.push(rect);
        }
    }

    /// Bounding box, [`Rect::EMPTY`] for an empty region.
    pub fn bounds(&self) -> Rect {
        self.rects
            .iter()
            .fold(Rect::EMPTY, |acc, r| acc.union(r))
    }

    pub fn area(&self) -> i64 {
        self.rects.iter().map(Rect::area).sum()
    }

    pub fn contains(&self, pt: Point) -> bool {
        self.rects.iter().any(|r| r.contains(pt))
    }

    /// True if any part of `rect` lies inside the region.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        self.rects.iter().any(|r| r.intersects(rect))
    }

    pub fn offset(&mut self, dh: i16, dv: i16) {
        for r in &mut self.rects {
            *r = r.offset(dh, dv);
        }
        self.rects.retain(|r| !r.is_empty());
    }

    pub fn union(&self, other: &Region) -> Region {
        let mut rects = self.rects.clone();
        for add in &other.rects {
            let mut pieces = alloc::vec![*add];
            for have in &self.rects {
                pieces = pieces.iter().flat_map(|p| p.subtract(have)).collect();
                if pieces.is_empty() {
                    break;
                }
            }
            rects.extend(pieces);
        }
        Region { rects }
    }

    pub fn difference(&self, other: &Region) -> Region {
        let mut rects = self.rects.clone();
        for cut in &other.rects {
            rects = rects.iter().flat_map(|r| r.subtract(cut)).collect();
        }
        Region { rects }
    }

    pub fn intersection(&self, other: &Region) -> Region {
        let rects = self
            .rects
            .iter()
            .flat_map(move |a| other.rects.iter().filter_map(move |b| a.intersection(b)))
            .collect();
        Region { rects }
    }

    pub fn xor(&self, other: &Region) -> Region {
        self.difference(other).union(&other.difference(self))
    }

    /// Same set of points, regardless of how the rectangles are cut.
    pub fn same_shape(&self, other: &Region) -> bool {
        self.difference(other).is_empty() && other.difference(self).is_empty()
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Region::from_rect(rect)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rect() -> impl Strategy<Value = Rect> {
        (-50i16..50, -50i16..50, 0i16..40, 0i16..40)
            .prop_map(|(l, t, w, h)| Rect::new(l, t, l + w, t + h))
    }

    fn region() -> impl Strategy<Value = Region> {
        proptest::collection::vec(rect(), 0..5).prop_map(|rects| {
            rects
                .into_iter()
                .fold(Region::new(), |acc, r| acc.union(&Region::from_rect(r)))
        })
    }

    fn disjoint(rgn: &Region) -> bool {
        let rs = rgn.rects();
        rs.iter().all(|r| !r.is_empty())
            && rs
                .iter()
                .enumerate()
                .all(|(i, a)| rs[i + 1..].iter().all(|b| !a.intersects(b)))
    }

    proptest! {
        /// Union, difference and intersection keep the rectangles disjoint
        #[test]
        fn ops_preserve_disjointness(a in region(), b in region()) {
            prop_assert!(disjoint(&a.union(&b)));
            prop_assert!(disjoint(&a.difference(&b)));
            prop_assert!(disjoint(&a.intersection(&b)));
        }

        /// |A ∪ B| = |A| + |B| - |A ∩ B|
        #[test]
        fn union_area_identity(a in region(), b in region()) {
            let lhs = a.union(&b).area();
            let rhs = a.area() + b.area() - a.intersection(&b).area();
            prop_assert_eq!(lhs, rhs);
        }

        /// Points of A \ B are in A and never in B
        #[test]
        fn difference_excludes_subtrahend(a in region(), b in region(), h in -60i16..100, v in -60i16..100) {
            let pt = Point::new(h, v);
            let d = a.difference(&b);
            prop_assert_eq!(d.contains(pt), a.contains(pt) && !b.contains(pt));
        }

        /// Offsetting there and back restores the shape
        #[test]
        fn offset_round_trip(a in region(), dh in -20i16..20, dv in -20i16..20) {
            let mut moved = a.clone();
            moved.offset(dh, dv);
            prop_assert_eq!(moved.area(), a.area());
            moved.offset(-dh, -dv);
            prop_assert!(moved.same_shape(&a));
        }
    }
}
