//! Fixed-dimension points.

use std::fmt;
use std::ops::Index;

use geo_traits::CoordTrait;

use crate::r#type::IndexableNum;

/// An immutable point with `D` coordinates of type `N`.
///
/// Dimensionality is part of the type, so two points can only be compared when they share the
/// same `D`.
///
/// ```
/// use kd_nearest::Point;
///
/// let a = Point::new([1, 2]);
/// let b = Point::new([4, 6]);
/// assert_eq!(a.squared_distance(&b), 25.0);
/// assert_eq!(a.distance(&b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<N: IndexableNum, const D: usize> {
    coords: [N; D],
}

impl<N: IndexableNum, const D: usize> Point<N, D> {
    /// Create a new point from its coordinates.
    pub const fn new(coords: [N; D]) -> Self {
        Self { coords }
    }

    /// Access coordinate `i`.
    ///
    /// Panics if `i >= D`.
    #[inline]
    pub fn get(&self, i: usize) -> N {
        self.coords[i]
    }

    /// The underlying coordinates.
    pub fn coords(&self) -> &[N; D] {
        &self.coords
    }

    /// The number of dimensions of this point.
    pub const fn dims(&self) -> usize {
        D
    }

    /// Sum of squared per-axis differences to `other`.
    #[inline]
    pub fn squared_distance(&self, other: &Self) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| {
                let d = a.as_f64() - b.as_f64();
                d * d
            })
            .sum()
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        self.squared_distance(other).sqrt()
    }
}

impl<N: IndexableNum, const D: usize> From<[N; D]> for Point<N, D> {
    fn from(coords: [N; D]) -> Self {
        Self::new(coords)
    }
}

impl<N: IndexableNum, const D: usize> Index<usize> for Point<N, D> {
    type Output = N;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl<N: IndexableNum, const D: usize> fmt::Display for Point<N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

impl<N: IndexableNum> CoordTrait for Point<N, 2> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.coords[0]
    }

    fn y(&self) -> Self::T {
        self.coords[1]
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.coords[0],
            1 => self.coords[1],
            _ => panic!("Invalid index of coord"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Point;

    #[test]
    fn squared_distance_is_symmetric() {
        let a = Point::new([0, 4]);
        let b = Point::new([2, 4]);
        assert_eq!(a.squared_distance(&b), 4.0);
        assert_eq!(b.squared_distance(&a), 4.0);
        assert_eq!(a.distance(&b), 2.0);
    }

    #[test]
    fn zero_distance_to_self() {
        let a = Point::new([1.5f32, -2.0, 9.25]);
        assert_eq!(a.squared_distance(&a), 0.0);
    }

    #[test]
    fn unsigned_coords_do_not_underflow() {
        let a = Point::new([0u8, 0]);
        let b = Point::new([5u8, 5]);
        assert_eq!(a.squared_distance(&b), 50.0);
        assert_eq!(b.squared_distance(&a), 50.0);
    }

    #[test]
    fn display() {
        assert_eq!(Point::new([2, 4]).to_string(), "(2, 4)");
        assert_eq!(Point::new([1, 2, 3]).to_string(), "(1, 2, 3)");
    }

    #[test]
    fn indexing() {
        let p = Point::from([7, 3]);
        assert_eq!(p[0], 7);
        assert_eq!(p.get(1), 3);
        assert_eq!(p.dims(), 2);
    }
}
