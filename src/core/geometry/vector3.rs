use super::numeric_traits::*;
use std::ops;

#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Copy> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3::<T> { x, y, z }
    }
}

impl<T: Copy + Default> Vector3<T> {
    #[inline]
    pub fn zero() -> Self {
        Vector3::<T> {
            x: T::default(),
            y: T::default(),
            z: T::default(),
        }
    }
}

impl<
        T: Copy
            + FloatType
            + ops::Add<Output = T>
            + ops::Sub<Output = T>
            + ops::Mul<Output = T>
            + ops::Div<Output = T>,
    > Vector3<T>
{
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        return self.x * rhs.x + self.y * rhs.y + self.z * rhs.z;
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        return self.dot(self);
    }

    #[inline]
    pub fn length(&self) -> T {
        return FloatType::sqrt(self.length_squared());
    }

    #[inline]
    pub fn normalize(&self) -> Self {
        let l = self.length();
        Vector3::<T> {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }

    #[inline]
    pub fn cross(v1: &Self, v2: &Self) -> Self {
        Vector3::<T> {
            x: (v1.y * v2.z) - (v1.z * v2.y),
            y: (v1.z * v2.x) - (v1.x * v2.z),
            z: (v1.x * v2.y) - (v1.y * v2.x),
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        return FloatType::is_finite(self.x)
            && FloatType::is_finite(self.y)
            && FloatType::is_finite(self.z);
    }
}

impl<
        T: Copy
            + PartialOrd
            + Default
            + FloatType
            + NumberType
            + ops::Neg<Output = T>
            + ops::Add<Output = T>
            + ops::Sub<Output = T>
            + ops::Mul<Output = T>
            + ops::Div<Output = T>,
    > Vector3<T>
{
    /// Builds an orthonormal basis whose first axis is `d1`.
    pub fn coordinate_system(d1: &Self) -> (Self, Self, Self) {
        let v1 = d1.normalize();
        let v2 = if T::abs(v1.x) > T::abs(v1.y) {
            Self::new(-v1.z, T::default(), v1.x).normalize()
        } else {
            Self::new(T::default(), v1.z, -v1.y).normalize()
        };
        let v3 = Self::cross(&v1, &v2).normalize();
        return (v1, v2, v3);
    }

    /// Flips `self` into the hemisphere of `v`.
    #[inline]
    pub fn face_forward(&self, v: &Self) -> Self {
        return if self.dot(v) < T::default() {
            -*self
        } else {
            *self
        };
    }
}

impl<T: ops::Add<Output = T>> ops::Add<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn add(self, rhs: Vector3<T>) -> Vector3<T> {
        return Vector3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        };
    }
}

impl<T: ops::Sub<Output = T>> ops::Sub<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn sub(self, rhs: Vector3<T>) -> Vector3<T> {
        return Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        };
    }
}

impl<T: ops::Mul<Output = T> + Copy> ops::Mul<T> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn mul(self, rhs: T) -> Vector3<T> {
        return Vector3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        };
    }
}

impl<T: ops::Div<Output = T> + Copy> ops::Div<T> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn div(self, rhs: T) -> Vector3<T> {
        return Vector3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        };
    }
}

impl ops::Mul<Vector3<f32>> for f32 {
    type Output = Vector3<f32>;
    #[inline]
    fn mul(self, rhs: Vector3<f32>) -> Vector3<f32> {
        return rhs * self;
    }
}

impl ops::Mul<Vector3<f64>> for f64 {
    type Output = Vector3<f64>;
    #[inline]
    fn mul(self, rhs: Vector3<f64>) -> Vector3<f64> {
        return rhs * self;
    }
}

impl<T: ops::Neg<Output = T>> ops::Neg for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        return Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        };
    }
}

impl<T> ops::Index<usize> for Vector3<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Vector3f = Vector3<f32>;
    type Vector3d = Vector3<f64>;

    #[test]
    fn test_arith() {
        let v1 = Vector3f::new(1.0, 2.0, 3.0);
        let v2 = Vector3f::new(4.0, 5.0, 6.0);
        assert_eq!(v1 + v2, Vector3f::new(5.0, 7.0, 9.0));
        assert_eq!(v2 - v1, Vector3f::new(3.0, 3.0, 3.0));
        assert_eq!(2.0 * v2, Vector3f::new(8.0, 10.0, 12.0));
        assert_eq!(-v1, Vector3f::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_length() {
        let v1 = Vector3d::new(4.0, 0.0, 0.0);
        assert_eq!(v1.length(), 4.0);
        assert_eq!(v1.length_squared(), 16.0);
        assert_eq!(v1.normalize(), Vector3d::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_coordinate_system() {
        let n = Vector3f::new(0.3, -0.4, 0.8).normalize();
        let (v1, v2, v3) = Vector3f::coordinate_system(&n);
        assert!(v1.dot(&v2).abs() < 1e-6);
        assert!(v1.dot(&v3).abs() < 1e-6);
        assert!(v2.dot(&v3).abs() < 1e-6);
        assert!((v3.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_face_forward() {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let v = Vector3f::new(0.0, 0.6, -0.8);
        assert_eq!(n.face_forward(&v), Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(n.face_forward(&-v), n);
    }
}
