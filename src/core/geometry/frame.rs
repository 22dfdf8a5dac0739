use crate::core::base::*;

/// Orthonormal shading frame. The normal maps to the local +z axis.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Frame {
    pub tangent: Vector3f,
    pub bitangent: Vector3f,
    pub normal: Vector3f,
}

impl Frame {
    pub fn from_normal(n: &Vector3f) -> Self {
        let (normal, tangent, bitangent) = Vector3f::coordinate_system(n);
        Frame {
            tangent,
            bitangent,
            normal,
        }
    }

    #[inline]
    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        return Vector3f::new(
            self.tangent.dot(v),
            self.bitangent.dot(v),
            self.normal.dot(v),
        );
    }

    #[inline]
    pub fn to_world(&self, v: &Vector3f) -> Vector3f {
        return self.tangent * v.x + self.bitangent * v.y + self.normal * v.z;
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame {
            tangent: Vector3f::new(1.0, 0.0, 0.0),
            bitangent: Vector3f::new(0.0, 1.0, 0.0),
            normal: Vector3f::new(0.0, 0.0, 1.0),
        }
    }
}
