//! Strided memory access: gather, scatter, prefetch, transform, compress
//!
//! Lane `i` addresses the byte offset `index[i] * STRIDE` of a caller-owned
//! buffer of any `Pod` element type. The index array must have the same
//! width as the data array (enforced through the shared mask type). Masked
//! variants never compute or touch the address of a lane whose mask bit is
//! clear, so those lanes may hold arbitrary indices.
//!
//! ```rust
//! use lanewise_core::prelude::*;
//!
//! let memory = [10.0f32, 20.0, 30.0, 40.0];
//! let index = Array::<u32, 2>::new([3, 1]);
//! let values = Array::<f32, 2>::gather::<4>(&memory, &index).unwrap();
//! assert_eq!(values.into_array(), [40.0, 20.0]);
//! ```

use crate::base::ArrayBase;
use crate::error::{Error, Result};
use crate::mask::MaskOps;
use crate::numeric::{Integral, Scalar};
use crate::primitives::Primitives;
use bytemuck::Pod;
use num_traits::ToPrimitive;
use std::mem::size_of;

/// Byte offset of `lane`, checked against a buffer of `len` bytes
fn lane_offset<I: ArrayBase<Value: Integral>>(
    index: &I,
    lane: usize,
    stride: usize,
    width: usize,
    len: usize,
) -> Result<usize> {
    let offset = index
        .coeff(lane)
        .to_usize()
        .and_then(|i| i.checked_mul(stride))
        .ok_or(Error::InvalidIndex { lane })?;
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(offset),
        _ => Err(Error::invalid_address(lane, offset, len)),
    }
}

/// Check every selected lane before anything is written
fn validate_lanes<I: ArrayBase<Value: Integral>, M: MaskOps>(
    index: &I,
    mask: &M,
    stride: usize,
    width: usize,
    len: usize,
) -> Result<()> {
    for lane in (0..M::SIZE).filter(|&lane| mask.test(lane)) {
        if let Err(err) = lane_offset(index, lane, stride, width, len) {
            log::debug!("strided access rejected: {err}");
            return Err(err);
        }
    }
    Ok(())
}

#[inline(always)]
fn prefetch_address<const LEVEL: u8>(ptr: *const u8) {
    #[cfg(target_arch = "x86_64")]
    {
        use std::arch::x86_64::{_mm_prefetch, _MM_HINT_T0, _MM_HINT_T1, _MM_HINT_T2};
        // SAFETY: prefetching is a hint that never faults, and `ptr` points
        // into a live slice.
        unsafe {
            match LEVEL {
                0 | 1 => _mm_prefetch::<_MM_HINT_T0>(ptr.cast()),
                2 => _mm_prefetch::<_MM_HINT_T1>(ptr.cast()),
                _ => _mm_prefetch::<_MM_HINT_T2>(ptr.cast()),
            }
        }
    }
    #[cfg(not(target_arch = "x86_64"))]
    let _ = ptr;
}

/// Gather, scatter and friends, implemented lane by lane
pub trait MemoryAccess: Primitives {
    /// Read lane `i` from byte offset `index[i] * STRIDE`
    fn gather<const STRIDE: usize>(
        memory: &[impl Pod],
        index: &impl Primitives<Value: Integral, Mask = Self::Mask>,
    ) -> Result<Self> {
        Self::gather_masked::<STRIDE>(memory, index, Self::Mask::splat(true))
    }

    /// Masked-off lanes read nothing and come back as zero
    fn gather_masked<const STRIDE: usize>(
        memory: &[impl Pod],
        index: &impl Primitives<Value: Integral, Mask = Self::Mask>,
        mask: Self::Mask,
    ) -> Result<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(memory);
        let width = size_of::<Self::Value>();
        validate_lanes(index, &mask, STRIDE, width, bytes.len())?;

        let mut out = Self::splat(<Self::Value as Scalar>::ZERO);
        for lane in (0..Self::SIZE).filter(|&lane| mask.test(lane)) {
            let offset = lane_offset(index, lane, STRIDE, width, bytes.len())?;
            *out.coeff_mut(lane) = bytemuck::pod_read_unaligned(&bytes[offset..offset + width]);
        }
        Ok(out)
    }

    /// Write lane `i` to byte offset `index[i] * STRIDE`
    ///
    /// All addresses are validated first; on error nothing is written.
    fn scatter<const STRIDE: usize>(
        &self,
        memory: &mut [impl Pod],
        index: &impl Primitives<Value: Integral, Mask = Self::Mask>,
    ) -> Result<()> {
        self.scatter_masked::<STRIDE>(memory, index, Self::Mask::splat(true))
    }

    fn scatter_masked<const STRIDE: usize>(
        &self,
        memory: &mut [impl Pod],
        index: &impl Primitives<Value: Integral, Mask = Self::Mask>,
        mask: Self::Mask,
    ) -> Result<()> {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(memory);
        let width = size_of::<Self::Value>();
        validate_lanes(index, &mask, STRIDE, width, bytes.len())?;

        for lane in (0..Self::SIZE).filter(|&lane| mask.test(lane)) {
            let offset = lane_offset(index, lane, STRIDE, width, bytes.len())?;
            bytes[offset..offset + width].copy_from_slice(bytemuck::bytes_of(self.coeff(lane)));
        }
        Ok(())
    }

    /// Cache hint for the addresses a gather would touch
    ///
    /// `LEVEL` 1 targets the innermost cache, higher levels the outer ones.
    /// `WRITE` marks an intended write; platforms without a write hint
    /// issue a read hint. Out-of-range lanes are skipped, never faulted.
    fn prefetch<const STRIDE: usize, const WRITE: bool, const LEVEL: u8>(
        memory: &[impl Pod],
        index: &impl Primitives<Value: Integral, Mask = Self::Mask>,
    ) {
        Self::prefetch_masked::<STRIDE, WRITE, LEVEL>(memory, index, Self::Mask::splat(true));
    }

    fn prefetch_masked<const STRIDE: usize, const WRITE: bool, const LEVEL: u8>(
        memory: &[impl Pod],
        index: &impl Primitives<Value: Integral, Mask = Self::Mask>,
        mask: Self::Mask,
    ) {
        let bytes: &[u8] = bytemuck::cast_slice(memory);
        let width = size_of::<Self::Value>();
        for lane in (0..Self::SIZE).filter(|&lane| mask.test(lane)) {
            if let Ok(offset) = lane_offset(index, lane, STRIDE, width, bytes.len()) {
                prefetch_address::<LEVEL>(bytes[offset..].as_ptr());
            }
        }
    }

    /// Read-modify-write the addressed values in place
    ///
    /// Lanes are processed in order, so lanes sharing an index see each
    /// other's updates (updates accumulate).
    fn transform<const STRIDE: usize>(
        memory: &mut [impl Pod],
        index: &impl Primitives<Value: Integral, Mask = Self::Mask>,
        f: impl FnMut(&mut Self::Value),
    ) -> Result<()> {
        Self::transform_masked::<STRIDE>(memory, index, Self::Mask::splat(true), f)
    }

    fn transform_masked<const STRIDE: usize>(
        memory: &mut [impl Pod],
        index: &impl Primitives<Value: Integral, Mask = Self::Mask>,
        mask: Self::Mask,
        mut f: impl FnMut(&mut Self::Value),
    ) -> Result<()> {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(memory);
        let width = size_of::<Self::Value>();
        validate_lanes(index, &mask, STRIDE, width, bytes.len())?;

        log::trace!("sequential transform over {} lanes", mask.count());
        for lane in (0..Self::SIZE).filter(|&lane| mask.test(lane)) {
            let offset = lane_offset(index, lane, STRIDE, width, bytes.len())?;
            let slot = &mut bytes[offset..offset + width];
            let mut value: Self::Value = bytemuck::pod_read_unaligned(slot);
            f(&mut value);
            slot.copy_from_slice(bytemuck::bytes_of(&value));
        }
        Ok(())
    }

    /// Store the selected lanes contiguously and advance `out` past them
    ///
    /// Returns the number of lanes written.
    fn store_compress<'a>(&self, out: &mut &'a mut [Self::Value], mask: Self::Mask) -> Result<usize> {
        let count = mask.count();
        if out.len() < count {
            log::debug!("compressing store needs {count} slots, {} available", out.len());
            return Err(Error::InsufficientCapacity {
                needed: count,
                available: out.len(),
            });
        }

        let (head, tail) = std::mem::take(out).split_at_mut(count);
        for (slot, lane) in head.iter_mut().zip((0..Self::SIZE).filter(|&lane| mask.test(lane))) {
            *slot = *self.coeff(lane);
        }
        *out = tail;
        Ok(count)
    }
}
