//! Current-transform register with a bounded save/restore stack.
//!
//! Every modifier right-multiplies the current matrix, so the most recently
//! applied transform acts first on vertices:
//!
//! ```
//! use raster_core::transform::{TransformContext, Vec3};
//!
//! let mut ctx = TransformContext::new();
//! ctx.translate(10.0, 0.0, 0.0);
//! ctx.scale(2.0, 2.0, 2.0);
//! let p = ctx.current().transform_point(Vec3::X);
//! assert_eq!(p, Vec3::new(12.0, 0.0, 0.0));
//! ```

use super::matrix::Matrix4;
use crate::config::TransformConfig;
use crate::error::{Error, Result, StackOp};
use std::ops::{Deref, DerefMut};

/// Default number of matrices that can be saved at once.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Mutable transform state: the current matrix plus saved copies.
#[derive(Debug, Clone)]
pub struct TransformContext {
    current: Matrix4,
    stack: Vec<Matrix4>,
    max_depth: usize,
}

impl Default for TransformContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformContext {
    /// Identity transform, empty stack, default depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Identity transform with a custom depth limit.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            current: Matrix4::IDENTITY,
            stack: Vec::with_capacity(max_depth.min(DEFAULT_MAX_DEPTH)),
            max_depth,
        }
    }

    /// Build from the `transform` section of the configuration.
    #[must_use]
    pub fn from_config(config: &TransformConfig) -> Self {
        Self::with_max_depth(config.max_depth)
    }

    /// The current transform.
    #[must_use]
    pub fn current(&self) -> &Matrix4 {
        &self.current
    }

    /// Number of saved matrices.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Maximum number of saved matrices.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Reset the current transform to identity. The stack is untouched.
    pub fn load_identity(&mut self) {
        self.current = Matrix4::IDENTITY;
    }

    /// Replace the current transform.
    pub fn load(&mut self, m: Matrix4) {
        self.current = m;
    }

    /// `current = current * m`.
    pub fn multiply(&mut self, m: Matrix4) {
        self.current *= m;
    }

    /// Compose a translation.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.multiply(Matrix4::translation(x, y, z));
    }

    /// Compose a rotation of `angle_degrees` about `(x, y, z)`.
    pub fn rotate(&mut self, angle_degrees: f32, x: f32, y: f32, z: f32) {
        self.multiply(Matrix4::rotation(angle_degrees, x, y, z));
    }

    /// Compose a scale.
    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) {
        self.multiply(Matrix4::scale(sx, sy, sz));
    }

    /// Compose an xy shear, `y' = y + k * x`.
    pub fn shear_xy(&mut self, k: f32) {
        self.multiply(Matrix4::shear_xy(k));
    }

    /// Save a copy of the current transform.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStackState`] when `max_depth` matrices are
    /// already saved; the context is left unchanged.
    pub fn push(&mut self) -> Result<()> {
        if self.stack.len() >= self.max_depth {
            return Err(Error::InvalidStackState {
                operation: StackOp::Push,
                depth: self.stack.len(),
            });
        }
        self.stack.push(self.current);
        tracing::debug!(depth = self.stack.len(), "transform pushed");
        Ok(())
    }

    /// Restore the most recently saved transform.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStackState`] when nothing is saved; the
    /// current transform is left unchanged.
    pub fn pop(&mut self) -> Result<()> {
        let saved = self.stack.pop().ok_or(Error::InvalidStackState {
            operation: StackOp::Pop,
            depth: 0,
        })?;
        self.current = saved;
        tracing::debug!(depth = self.stack.len(), "transform popped");
        Ok(())
    }

    /// Push and return a guard that pops back to this level when dropped.
    ///
    /// The guard dereferences to the context, so transforms can be applied
    /// through it directly.
    ///
    /// # Errors
    ///
    /// Fails like [`push`](Self::push) when the stack is full.
    pub fn scoped(&mut self) -> Result<TransformGuard<'_>> {
        let restore_depth = self.stack.len();
        self.push()?;
        Ok(TransformGuard {
            ctx: self,
            restore_depth,
        })
    }

    /// Run `f` between a push and the matching pop.
    ///
    /// # Errors
    ///
    /// Fails like [`push`](Self::push) when the stack is full; `f` is not
    /// called in that case.
    pub fn with_pushed<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> Result<T> {
        let mut guard = self.scoped()?;
        Ok(f(&mut *guard))
    }

    fn restore_to(&mut self, depth: usize) {
        if self.stack.len() <= depth {
            tracing::warn!(
                expected = depth + 1,
                actual = self.stack.len(),
                "transform stack popped below its scope"
            );
            return;
        }
        self.stack.truncate(depth + 1);
        if let Some(saved) = self.stack.pop() {
            self.current = saved;
        }
    }
}

/// Scope guard returned by [`TransformContext::scoped`].
#[derive(Debug)]
pub struct TransformGuard<'a> {
    ctx: &'a mut TransformContext,
    restore_depth: usize,
}

impl Deref for TransformGuard<'_> {
    type Target = TransformContext;

    fn deref(&self) -> &TransformContext {
        self.ctx
    }
}

impl DerefMut for TransformGuard<'_> {
    fn deref_mut(&mut self) -> &mut TransformContext {
        self.ctx
    }
}

impl Drop for TransformGuard<'_> {
    fn drop(&mut self) {
        self.ctx.restore_to(self.restore_depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Vec3;

    #[test]
    fn test_new_is_identity() {
        let ctx = TransformContext::new();
        assert_eq!(*ctx.current(), Matrix4::IDENTITY);
        assert_eq!(ctx.depth(), 0);
        assert_eq!(ctx.max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_push_translate_pop_restores() {
        let mut ctx = TransformContext::new();
        ctx.push().unwrap();
        ctx.translate(1.0, 2.0, 3.0);
        assert_eq!(*ctx.current(), Matrix4::translation(1.0, 2.0, 3.0));
        ctx.pop().unwrap();
        assert_eq!(*ctx.current(), Matrix4::IDENTITY);
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_pop_empty_is_error() {
        let mut ctx = TransformContext::new();
        ctx.translate(5.0, 0.0, 0.0);
        let err = ctx.pop().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidStackState {
                operation: StackOp::Pop,
                depth: 0
            }
        ));
        // Current transform untouched
        assert_eq!(*ctx.current(), Matrix4::translation(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_push_overflow_is_error() {
        let mut ctx = TransformContext::with_max_depth(2);
        ctx.push().unwrap();
        ctx.push().unwrap();
        let err = ctx.push().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidStackState {
                operation: StackOp::Push,
                depth: 2
            }
        ));
        assert_eq!(ctx.depth(), 2);
    }

    #[test]
    fn test_from_config() {
        let ctx = TransformContext::from_config(&TransformConfig { max_depth: 4 });
        assert_eq!(ctx.max_depth(), 4);
    }

    #[test]
    fn test_modifiers_right_multiply() {
        let mut ctx = TransformContext::new();
        ctx.translate(10.0, 0.0, 0.0);
        ctx.rotate(90.0, 0.0, 0.0, 1.0);
        // Rotation applies first: X -> Y, then translated
        let p = ctx.current().transform_point(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(10.0, 1.0, 0.0), 1e-5), "{p:?}");
    }

    #[test]
    fn test_shear_about_pivot() {
        let mut ctx = TransformContext::new();
        ctx.translate(202.0, 430.0, 0.0);
        ctx.shear_xy(0.5);
        ctx.translate(-202.0, -430.0, 0.0);
        let pivot = ctx.current().transform_point(Vec3::new(202.0, 430.0, 0.0));
        assert!(pivot.abs_diff_eq(Vec3::new(202.0, 430.0, 0.0), 1e-3), "{pivot:?}");
        let tip = ctx.current().transform_point(Vec3::new(240.0, 420.0, 0.0));
        assert!(tip.abs_diff_eq(Vec3::new(240.0, 439.0, 0.0), 1e-3), "{tip:?}");
    }

    #[test]
    fn test_load_identity_keeps_stack() {
        let mut ctx = TransformContext::new();
        ctx.translate(1.0, 0.0, 0.0);
        ctx.push().unwrap();
        ctx.scale(3.0, 3.0, 3.0);
        ctx.load_identity();
        assert_eq!(ctx.depth(), 1);
        ctx.pop().unwrap();
        assert_eq!(*ctx.current(), Matrix4::translation(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_load_replaces() {
        let mut ctx = TransformContext::new();
        ctx.translate(1.0, 1.0, 1.0);
        ctx.load(Matrix4::scale(2.0, 2.0, 2.0));
        assert_eq!(*ctx.current(), Matrix4::scale(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_scoped_guard_restores_on_drop() {
        let mut ctx = TransformContext::new();
        ctx.translate(0.0, 1.0, 0.0);
        {
            let mut guard = ctx.scoped().unwrap();
            guard.scale(80.0, 1.0, 3.5);
            assert_eq!(guard.depth(), 1);
        }
        assert_eq!(ctx.depth(), 0);
        assert_eq!(*ctx.current(), Matrix4::translation(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_scoped_guard_unwinds_nested_pushes() {
        let mut ctx = TransformContext::new();
        {
            let mut guard = ctx.scoped().unwrap();
            guard.translate(1.0, 0.0, 0.0);
            guard.push().unwrap();
            guard.push().unwrap();
            guard.translate(0.0, 5.0, 0.0);
        }
        assert_eq!(ctx.depth(), 0);
        assert_eq!(*ctx.current(), Matrix4::IDENTITY);
    }

    #[test]
    fn test_scoped_guard_tolerates_extra_pop() {
        let mut ctx = TransformContext::new();
        ctx.translate(2.0, 0.0, 0.0);
        {
            let mut guard = ctx.scoped().unwrap();
            guard.translate(1.0, 0.0, 0.0);
            guard.pop().unwrap();
        }
        assert_eq!(ctx.depth(), 0);
        assert_eq!(*ctx.current(), Matrix4::translation(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_scoped_on_full_stack_fails() {
        let mut ctx = TransformContext::with_max_depth(0);
        assert!(ctx.scoped().is_err());
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_with_pushed() {
        let mut ctx = TransformContext::new();
        let inner = ctx
            .with_pushed(|c| {
                c.translate(4.0, 0.0, 0.0);
                *c.current()
            })
            .unwrap();
        assert_eq!(inner, Matrix4::translation(4.0, 0.0, 0.0));
        assert_eq!(*ctx.current(), Matrix4::IDENTITY);
    }
}
