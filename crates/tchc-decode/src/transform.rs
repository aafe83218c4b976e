//! Separable 8-point inverse transform.
//!
//! The 1-D kernel is a butterfly network: the odd half goes through a
//! rotation by the two cosine-derived constants plus a mixing term, both
//! halves go through one multiply by √2⁄2 in Q32 fixed point, and a final
//! sum/difference stage recombines them. Rows are transformed into a
//! scratch block whose rows are 9 samples apart; columns are then read back
//! with that stride.

use crate::entropy::BLOCK_LEN;

const SQRT2_COS_3PI_8: f64 = 0.541_196_100;
const SQRT2_COS_PI_8: f64 = 1.306_562_965;
const COS_3PI_8: f64 = 0.382_683_433;

/// √2⁄2 in Q32.
const HALF_SQRT2_Q32: i64 = 0xB504_F334;

/// Row stride of the intermediate block between the two passes.
pub const SCRATCH_STRIDE: usize = 9;

/// Size of the intermediate block.
pub const SCRATCH_LEN: usize = SCRATCH_STRIDE * 8;

fn mul_half_sqrt2(x: i32) -> i32 {
    ((i64::from(x) * HALF_SQRT2_Q32) >> 32) as i32
}

fn rotate(a: i32, b: i32, ka: f64, kb: f64) -> i32 {
    (f64::from(a) * ka + f64::from(b) * kb) as i32
}

/// Transform 8 values read `in_stride` apart into 8 values written `out_stride` apart.
pub fn inverse_transform_8(
    input: &[i32],
    in_stride: usize,
    output: &mut [i32],
    out_stride: usize,
) {
    let x = |i: usize| input[i * in_stride];

    // Odd half.
    let z13 = x(5).wrapping_add(x(3));
    let z2 = x(5).wrapping_sub(x(3));
    let z11 = x(1).wrapping_add(x(7));
    let z4 = x(1).wrapping_sub(x(7));

    let z3 = mul_half_sqrt2(z11.wrapping_sub(z13));
    let z5 = z2.wrapping_add(z4);
    let t10 = rotate(z2, z5, SQRT2_COS_3PI_8, COS_3PI_8);
    let t12 = rotate(z4, z5, SQRT2_COS_PI_8, -COS_3PI_8);

    let t4 = t10;
    let t5 = t10.wrapping_add(z3);
    let t6 = z3.wrapping_add(t12);
    let t7 = z11.wrapping_add(z13).wrapping_add(t12);

    // Even half.
    let e10 = x(0).wrapping_add(x(4));
    let e11 = x(0).wrapping_sub(x(4));
    let e12 = mul_half_sqrt2(x(2).wrapping_sub(x(6)));
    let e13 = x(2).wrapping_add(x(6)).wrapping_add(e12);

    let t0 = e10.wrapping_add(e13);
    let t3 = e10.wrapping_sub(e13);
    let t1 = e11.wrapping_add(e12);
    let t2 = e11.wrapping_sub(e12);

    let outputs = [
        t0.wrapping_add(t7),
        t1.wrapping_add(t6),
        t2.wrapping_add(t5),
        t3.wrapping_add(t4),
        t3.wrapping_sub(t4),
        t2.wrapping_sub(t5),
        t1.wrapping_sub(t6),
        t0.wrapping_sub(t7),
    ];
    for (i, value) in outputs.into_iter().enumerate() {
        output[i * out_stride] = value;
    }
}

/// Run the row pass then the column pass over one block of coefficients.
pub fn inverse_transform_block(
    coefficients: &[i32; BLOCK_LEN],
    scratch: &mut [i32; SCRATCH_LEN],
    samples: &mut [i32; BLOCK_LEN],
) {
    for row in 0..8 {
        inverse_transform_8(&coefficients[row * 8..], 1, &mut scratch[row * SCRATCH_STRIDE..], 1);
    }
    for column in 0..8 {
        inverse_transform_8(&scratch[column..], SCRATCH_STRIDE, &mut samples[column..], 8);
    }
}
