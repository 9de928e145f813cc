// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Variable-arity parameters: the sound shape and the polluted one.
//!
//! Rust has no variadic functions. The two ways to take "zero or more T" are a
//! slice (`&[T]`) and a macro. Neither has an array-covariance hole: a
//! `&mut [Vec<String>]` can never be viewed as a mutable array of a supertype,
//! so the store that causes heap pollution cannot even be written.
//!
//! ```compile_fail
//! use std::any::Any;
//!
//! let mut lists: Vec<Vec<String>> = vec![vec!["a".to_string()]];
//! // No such coercion: slices are invariant in their element type.
//! let erased: &mut [Box<dyn Any>] = &mut lists[..];
//! erased[0] = Box::new(vec![42]);
//! ```
//!
//! To show the hazard anyway, `VarArgs<T>` stores its arguments type-erased,
//! the way a runtime with covariant arrays does behind the scenes.
//! `as_erased_mut` hands out the supertype view. A wrong-typed store through
//! it succeeds, and the mistake only surfaces when the slot is read back as `T`:
//!
//! ```
//! use pipekit::varargs::{poison_first, VarArgs};
//! use pipekit::PipelineError;
//!
//! let lists = VarArgs::new(vec![vec!["a".to_string()]]);
//! let polluted = poison_first(lists); // the store itself is fine
//! assert!(matches!(polluted.get(0), Err(PipelineError::TypeMismatch { index: 0, .. })));
//! ```
//!
//! The safe numeric form, `min_of(first, rest)`, needs no erasure at all. The
//! `min_of!` macro gives it call-site variadic syntax and rejects zero
//! arguments at compile time:
//!
//! ```compile_fail
//! let _ = pipekit::min_of!();
//! ```

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use crate::error::PipelineError;

/// One argument slot, with its concrete type erased.
pub type ErasedSlot = Box<dyn Any + Send>;

/// "Zero or more T", stored as an array of erased slots.
pub struct VarArgs<T> {
    slots: Vec<ErasedSlot>,
    _declared: PhantomData<fn() -> T>,
}

impl<T: Any + Send> VarArgs<T> {
    pub fn new(args: Vec<T>) -> Self {
        args.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Every slot viewed as the common supertype.
    ///
    /// Nothing checks what gets stored through this view. A store of the wrong
    /// type succeeds here and fails later, in `get` or `into_vec`.
    pub fn as_erased_mut(&mut self) -> &mut [ErasedSlot] {
        &mut self.slots
    }

    /// Read slot `index` back as the declared type.
    ///
    /// `Ok(None)` past the end, `Err(TypeMismatch)` if the slot was polluted.
    pub fn get(&self, index: usize) -> Result<Option<&T>, PipelineError> {
        match self.slots.get(index) {
            None => Ok(None),
            Some(slot) => slot
                .downcast_ref::<T>()
                .map(Some)
                .ok_or_else(|| mismatch::<T>(index)),
        }
    }

    /// Unwrap every slot as the declared type, failing on the first polluted one.
    pub fn into_vec(self) -> Result<Vec<T>, PipelineError> {
        self.slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.downcast::<T>()
                    .map(|value| *value)
                    .map_err(|_| mismatch::<T>(index))
            })
            .collect()
    }
}

impl<T: Any + Send> FromIterator<T> for VarArgs<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter
                .into_iter()
                .map(|arg| Box::new(arg) as ErasedSlot)
                .collect(),
            _declared: PhantomData,
        }
    }
}

impl<T> fmt::Debug for VarArgs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VarArgs")
            .field("declared", &type_name::<T>())
            .field("len", &self.slots.len())
            .finish()
    }
}

fn mismatch<T>(index: usize) -> PipelineError {
    log::debug!("slot {} is not a {}", index, type_name::<T>());
    PipelineError::TypeMismatch {
        index,
        expected: type_name::<T>(),
    }
}

// ============================================================================
// THE UNSAFE PATTERN
// ============================================================================

/// Replace the first list with a list of integers through the supertype view.
///
/// The return type still says `VarArgs<Vec<T>>`. Nothing fails until a caller
/// reads slot 0.
pub fn poison_first<T: Any + Send>(mut lists: VarArgs<Vec<T>>) -> VarArgs<Vec<T>> {
    if let Some(slot) = lists.as_erased_mut().first_mut() {
        *slot = Box::new(vec![1_i32, 2]);
    }
    lists
}

/// First string of the first list, after that list has been swapped for integers.
///
/// Always fails with `TypeMismatch` when at least one list is given. With
/// no lists it returns `Ok(None)`.
pub fn first_of_first(
    mut strings: VarArgs<Vec<String>>,
) -> Result<Option<String>, PipelineError> {
    if let Some(slot) = strings.as_erased_mut().first_mut() {
        *slot = Box::new(vec![42_i32]);
    }
    let first = strings.get(0)?;
    Ok(first.and_then(|list| list.first().cloned()))
}

// ============================================================================
// THE SAFE PATTERN
// ============================================================================

/// Minimum of `first` and every element of `rest`. With no `rest`, returns `first`.
pub fn min_of(first: i64, rest: &[i64]) -> i64 {
    rest.iter().copied().fold(first, i64::min)
}

/// Minimum of a slice that must not be empty.
///
/// This is the shape `min_of` exists to avoid: the "at least one" requirement
/// is checked at runtime instead of being part of the signature.
pub fn min_of_slice(args: &[i64]) -> Result<i64, PipelineError> {
    args.iter().copied().min().ok_or(PipelineError::EmptyInput {
        operation: "min_of_slice",
    })
}

/// `min_of!(first, rest...)`: call-site variadic sugar over [`min_of`].
#[macro_export]
macro_rules! min_of {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::varargs::min_of($first, &[$($rest),*])
    };
}
