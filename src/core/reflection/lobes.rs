pub type BsdfLobes = u32;

pub const BSDF_NONE: BsdfLobes = 0;
pub const BSDF_REFLECTION: BsdfLobes = 1 << 0; //1
pub const BSDF_TRANSMISSION: BsdfLobes = 1 << 1; //2
pub const BSDF_DIFFUSE: BsdfLobes = 1 << 2; //4
pub const BSDF_GLOSSY: BsdfLobes = 1 << 3; //8
pub const BSDF_SPECULAR: BsdfLobes = 1 << 4; //16
pub const BSDF_ALL: BsdfLobes =
    BSDF_REFLECTION | BSDF_TRANSMISSION | BSDF_DIFFUSE | BSDF_GLOSSY | BSDF_SPECULAR;

pub const BSDF_SPECULAR_REFLECTION: BsdfLobes = BSDF_SPECULAR | BSDF_REFLECTION;
pub const BSDF_SPECULAR_TRANSMISSION: BsdfLobes = BSDF_SPECULAR | BSDF_TRANSMISSION;

// Request filters.
pub const BSDF_ALL_REFLECTION: BsdfLobes = BSDF_ALL & !BSDF_TRANSMISSION;
pub const BSDF_ALL_TRANSMISSION: BsdfLobes = BSDF_ALL & !BSDF_REFLECTION;

/// True when every bit of `lobe` is admitted by `requested`.
#[inline]
pub fn lobes_test(requested: BsdfLobes, lobe: BsdfLobes) -> bool {
    return (requested & lobe) == lobe;
}

#[inline]
pub fn lobes_is_pure_specular(lobes: BsdfLobes) -> bool {
    return lobes != BSDF_NONE && (lobes & (BSDF_DIFFUSE | BSDF_GLOSSY)) == 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters() {
        assert!(lobes_test(BSDF_ALL, BSDF_SPECULAR_REFLECTION));
        assert!(lobes_test(BSDF_ALL_REFLECTION, BSDF_SPECULAR_REFLECTION));
        assert!(!lobes_test(BSDF_ALL_REFLECTION, BSDF_SPECULAR_TRANSMISSION));
        assert!(lobes_test(BSDF_ALL_TRANSMISSION, BSDF_SPECULAR_TRANSMISSION));
        assert!(!lobes_test(BSDF_ALL_TRANSMISSION, BSDF_SPECULAR_REFLECTION));
        assert!(!lobes_test(BSDF_DIFFUSE | BSDF_REFLECTION, BSDF_SPECULAR_REFLECTION));
    }

    #[test]
    fn test_pure_specular() {
        assert!(lobes_is_pure_specular(BSDF_SPECULAR_REFLECTION));
        assert!(lobes_is_pure_specular(
            BSDF_SPECULAR_REFLECTION | BSDF_SPECULAR_TRANSMISSION
        ));
        assert!(!lobes_is_pure_specular(BSDF_GLOSSY | BSDF_REFLECTION));
        assert!(!lobes_is_pure_specular(BSDF_NONE));
    }
}
