//! Domain parameters for GOST R 34.10-2018 signatures

/// Size of a 512-bit field element or scalar in bytes
pub const GOST3410_512_SCALAR_SIZE: usize = 64;

/// Size of a raw 512-bit signature (r || s) in bytes
pub const GOST3410_512_SIGNATURE_SIZE: usize = 2 * GOST3410_512_SCALAR_SIZE;

/// Default upper bound on nonce draws per signature
pub const DEFAULT_MAX_SIGN_ATTEMPTS: u32 = 64;

/// Upper bound on rejection-sampling rounds when drawing one scalar
pub const MAX_SAMPLING_ATTEMPTS: u32 = 256;

/// Curve parameters in big-endian byte form
///
/// The curve is `y² = x³ + a·x + b` over GF(p) with a base point of prime
/// order `q`.
#[derive(Debug, Clone, Copy)]
pub struct GostCurveParams<const N: usize> {
    /// Canonical name of the parameter set
    pub name: &'static str,
    /// Field modulus p
    pub p: [u8; N],
    /// Curve coefficient a
    pub a: [u8; N],
    /// Curve coefficient b
    pub b: [u8; N],
    /// Order q of the base point
    pub q: [u8; N],
    /// Base point x coordinate
    pub g_x: [u8; N],
    /// Base point y coordinate
    pub g_y: [u8; N],
}

/// 512-bit test curve from GOST R 34.10-2012, Appendix A.2
pub const TC26_TEST_512: GostCurveParams<GOST3410_512_SCALAR_SIZE> = GostCurveParams {
    name: "GOST-R34.10-2012-512-test",
    p: [
        0x45, 0x31, 0xAC, 0xD1, 0xFE, 0x00, 0x23, 0xC7,
        0x55, 0x0D, 0x26, 0x7B, 0x6B, 0x2F, 0xEE, 0x80,
        0x92, 0x2B, 0x14, 0xB2, 0xFF, 0xB9, 0x0F, 0x04,
        0xD4, 0xEB, 0x7C, 0x09, 0xB5, 0xD2, 0xD1, 0x5D,
        0xF1, 0xD8, 0x52, 0x74, 0x1A, 0xF4, 0x70, 0x4A,
        0x04, 0x58, 0x04, 0x7E, 0x80, 0xE4, 0x54, 0x6D,
        0x35, 0xB8, 0x33, 0x6F, 0xAC, 0x22, 0x4D, 0xD8,
        0x16, 0x64, 0xBB, 0xF5, 0x28, 0xBE, 0x63, 0x73,
    ],
    a: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07,
    ],
    b: [
        0x1C, 0xFF, 0x08, 0x06, 0xA3, 0x11, 0x16, 0xDA,
        0x29, 0xD8, 0xCF, 0xA5, 0x4E, 0x57, 0xEB, 0x74,
        0x8B, 0xC5, 0xF3, 0x77, 0xE4, 0x94, 0x00, 0xFD,
        0xD7, 0x88, 0xB6, 0x49, 0xEC, 0xA1, 0xAC, 0x43,
        0x61, 0x83, 0x40, 0x13, 0xB2, 0xAD, 0x73, 0x22,
        0x48, 0x0A, 0x89, 0xCA, 0x58, 0xE0, 0xCF, 0x74,
        0xBC, 0x9E, 0x54, 0x0C, 0x2A, 0xDD, 0x68, 0x97,
        0xFA, 0xD0, 0xA3, 0x08, 0x4F, 0x30, 0x2A, 0xDC,
    ],
    q: [
        0x45, 0x31, 0xAC, 0xD1, 0xFE, 0x00, 0x23, 0xC7,
        0x55, 0x0D, 0x26, 0x7B, 0x6B, 0x2F, 0xEE, 0x80,
        0x92, 0x2B, 0x14, 0xB2, 0xFF, 0xB9, 0x0F, 0x04,
        0xD4, 0xEB, 0x7C, 0x09, 0xB5, 0xD2, 0xD1, 0x5D,
        0xA8, 0x2F, 0x2D, 0x7E, 0xCB, 0x1D, 0xBA, 0xC7,
        0x19, 0x90, 0x5C, 0x5E, 0xEC, 0xC4, 0x23, 0xF1,
        0xD8, 0x6E, 0x25, 0xED, 0xBE, 0x23, 0xC5, 0x95,
        0xD6, 0x44, 0xAA, 0xF1, 0x87, 0xE6, 0xE6, 0xDF,
    ],
    g_x: [
        0x24, 0xD1, 0x9C, 0xC6, 0x45, 0x72, 0xEE, 0x30,
        0xF3, 0x96, 0xBF, 0x6E, 0xBB, 0xFD, 0x7A, 0x6C,
        0x52, 0x13, 0xB3, 0xB3, 0xD7, 0x05, 0x7C, 0xC8,
        0x25, 0xF9, 0x10, 0x93, 0xA6, 0x8C, 0xD7, 0x62,
        0xFD, 0x60, 0x61, 0x12, 0x62, 0xCD, 0x83, 0x8D,
        0xC6, 0xB6, 0x0A, 0xA7, 0xEE, 0xE8, 0x04, 0xE2,
        0x8B, 0xC8, 0x49, 0x97, 0x7F, 0xAC, 0x33, 0xB4,
        0xB5, 0x30, 0xF1, 0xB1, 0x20, 0x24, 0x8A, 0x9A,
    ],
    g_y: [
        0x2B, 0xB3, 0x12, 0xA4, 0x3B, 0xD2, 0xCE, 0x6E,
        0x0D, 0x02, 0x06, 0x13, 0xC8, 0x57, 0xAC, 0xDD,
        0xCF, 0xBF, 0x06, 0x1E, 0x91, 0xE5, 0xF2, 0xC3,
        0xF3, 0x24, 0x47, 0xC2, 0x59, 0xF3, 0x9B, 0x2C,
        0x83, 0xAB, 0x15, 0x6D, 0x77, 0xF1, 0x49, 0x6B,
        0xF7, 0xEB, 0x33, 0x51, 0xE1, 0xEE, 0x4E, 0x43,
        0xDC, 0x1A, 0x18, 0xB9, 0x1B, 0x24, 0x64, 0x0B,
        0x6D, 0xBB, 0x92, 0xCB, 0x1A, 0xDD, 0x37, 0x1E,
    ],
};
