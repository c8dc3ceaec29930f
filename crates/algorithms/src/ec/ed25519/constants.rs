//! Shared constants for edwards25519 operations

/// Size of an encoded edwards25519 point in bytes
pub const ED25519_POINT_SIZE: usize = 32;

/// Size of an encoded scalar modulo L in bytes
pub const ED25519_SCALAR_SIZE: usize = 32;

/// Number of 64-bit limbs per field element or scalar
pub const ED25519_LIMBS: usize = 4;

/* p = 2^255 - 19 */
pub(super) const P: [u64; 4] = [
    0xffff_ffff_ffff_ffed,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x7fff_ffff_ffff_ffff,
];
pub(super) const P_R2: [u64; 4] = [0x5a4, 0, 0, 0];
pub(super) const P_INV: u64 = 0x86bc_a1af_286b_ca1b;

/* L = 2^252 + 27742317777372353535851937790883648493 */
pub(super) const L: [u64; 4] = [
    0x5812_631a_5cf5_d3ed,
    0x14de_f9de_a2f7_9cd6,
    0x0000_0000_0000_0000,
    0x1000_0000_0000_0000,
];
pub(super) const L_R2: [u64; 4] = [
    0xa406_11e3_449c_0f01,
    0xd00e_1ba7_6885_9347,
    0xceec_73d2_17f5_be65,
    0x0399_411b_7c30_9a3d,
];
pub(super) const L_INV: u64 = 0xd2b5_1da3_1254_7e1b;

/* d = -121665 / 121666 */
pub(super) const D: [u64; 4] = [
    0x75eb_4dca_1359_78a3,
    0x0070_0a4d_4141_d8ab,
    0x8cc7_4079_7779_e898,
    0x5203_6cee_2b6f_fe73,
];

pub(super) const BASE_X: [u64; 4] = [
    0xc956_2d60_8f25_d51a,
    0x692c_c760_9525_a7b2,
    0xc0a4_e231_fdd6_dc5c,
    0x2169_36d3_cd6e_53fe,
];

/* y = 4/5 */
pub(super) const BASE_Y: [u64; 4] = [
    0x6666_6666_6666_6658,
    0x6666_6666_6666_6666,
    0x6666_6666_6666_6666,
    0x6666_6666_6666_6666,
];

/* 2^((p-1)/4) */
pub(super) const SQRT_M1: [u64; 4] = [
    0xc4ee_1b27_4a0e_a0b0,
    0x2f43_1806_ad2f_e478,
    0x2b4d_0099_3dfb_d7a7,
    0x2b83_2480_4fc1_df0b,
];

/* (p-5)/8 */
pub(super) const SQRT_EXP: [u64; 4] = [
    0xffff_ffff_ffff_fffd,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x0fff_ffff_ffff_ffff,
];
