//! Shared constants for edwards448 operations

/// Size of an encoded edwards448 point in bytes (448 bits plus a sign byte)
pub const ED448_POINT_SIZE: usize = 57;

/// Size of an encoded scalar modulo L in bytes, as carried in signatures
pub const ED448_SCALAR_SIZE: usize = 57;

/// Number of 64-bit limbs per field element or scalar
pub const ED448_LIMBS: usize = 7;

/* p = 2^448 - 2^224 - 1 */
pub(super) const P: [u64; 7] = [
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_fffe_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
];
pub(super) const P_R2: [u64; 7] = [0x2, 0, 0, 0x0000_0003_0000_0000, 0, 0, 0];
pub(super) const P_INV: u64 = 0x1;

/* L = 2^446 - 13818066809895115352007386748515426880336692474882178609894547503885 */
pub(super) const L: [u64; 7] = [
    0x2378_c292_ab58_44f3,
    0x216c_c272_8dc5_8f55,
    0xc44e_db49_aed6_3690,
    0xffff_ffff_7cca_23e9,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x3fff_ffff_ffff_ffff,
];
pub(super) const L_R2: [u64; 7] = [
    0xe353_9257_049b_9b60,
    0x7af3_2c4b_c1b1_95d9,
    0x0d66_de23_88ea_1859,
    0xae17_cf72_5ee4_d838,
    0x1a9c_c14b_a3c4_7c44,
    0x2052_bcb7_e4d0_70af,
    0x3402_a939_f823_b729,
];
pub(super) const L_INV: u64 = 0x03bd_440f_ae91_8bc5;

/* d = -39081 */
pub(super) const D: [u64; 7] = [
    0xffff_ffff_ffff_6756,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_fffe_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
];

pub(super) const BASE_X: [u64; 7] = [
    0x2626_a82b_c70c_c05e,
    0x433b_80e1_8b00_938e,
    0x12ae_1af7_2ab6_6511,
    0xea6d_e324_a3d3_a464,
    0x9e14_6570_470f_1767,
    0x221d_15a6_22bf_36da,
    0x4f19_70c6_6bed_0ded,
];

pub(super) const BASE_Y: [u64; 7] = [
    0x9808_795b_f230_fa14,
    0xfdbd_132c_4ed7_c8ad,
    0x3ad3_ff1c_e67c_39c4,
    0x8778_9c1e_05a0_c2d7,
    0x4bea_7373_6ca3_9840,
    0x8876_2037_56c9_c762,
    0x693f_4671_6eb6_bc24,
];

/* (p-3)/4 */
pub(super) const SQRT_EXP: [u64; 7] = [
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_bfff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x3fff_ffff_ffff_ffff,
];
