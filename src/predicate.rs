//! Absence predicates shared by the null, empty and null-or-empty kinds.
//!
//! These are always applied to an operand that has already been evaluated and
//! bound; none of them re-evaluate anything.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{CStr, CString, OsStr, OsString};
use std::fmt;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// Canonical rendering of a null address.
pub const NULL_ADDRESS: &str = "0x0";

/// Marker reported by the null-or-empty kinds for a null value.
pub const NULL_MARKER: &str = "(null)";

/// Pointer-like values that may hold the absent sentinel.
pub trait Nullable {
    fn is_null(&self) -> bool;

    /// The address as `0x...`; [`NULL_ADDRESS`] when null.
    fn address(&self) -> String;
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }

    fn address(&self) -> String {
        format!("{:p}", *self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }

    fn address(&self) -> String {
        format!("{:p}", *self)
    }
}

impl<T: ?Sized> Nullable for NonNull<T> {
    fn is_null(&self) -> bool {
        false
    }

    fn address(&self) -> String {
        format!("{:p}", *self)
    }
}

/// `None` is the null sentinel for optional references, boxes and function
/// pointers.
impl<P: fmt::Pointer> Nullable for Option<P> {
    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn address(&self) -> String {
        match self {
            Some(p) => format!("{:p}", *p),
            None => NULL_ADDRESS.to_owned(),
        }
    }
}

/// Values that can report how many elements they hold.
pub trait Size {
    fn size(&self) -> usize;
}

macro_rules! impl_size_via_len {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Size for $ty {
                fn size(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_size_via_len! {
    [] str,
    [] String,
    [] OsStr,
    [] OsString,
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [K, V, S] HashMap<K, V, S>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
}

impl Size for CStr {
    fn size(&self) -> usize {
        self.to_bytes().len()
    }
}

impl Size for CString {
    fn size(&self) -> usize {
        self.as_bytes().len()
    }
}

impl<T: Size + ?Sized + ToOwned> Size for Cow<'_, T> {
    fn size(&self) -> usize {
        T::size(self)
    }
}

macro_rules! impl_size_through_deref {
    ($($wrapper:ty),* $(,)?) => {
        $(
            impl<T: Size + ?Sized> Size for $wrapper {
                fn size(&self) -> usize {
                    T::size(self)
                }
            }
        )*
    };
}

impl_size_through_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

/// "Is this value absent": null pointers, `None`, and anything with size zero.
pub trait NullOrEmpty {
    fn is_null_or_empty(&self) -> bool;

    /// Quoted content (`'...'`), or [`NULL_MARKER`] when null.
    fn describe(&self) -> String;
}

macro_rules! impl_null_or_empty_text {
    ($($ty:ty => |$s:ident| $text:expr),* $(,)?) => {
        $(
            impl NullOrEmpty for $ty {
                fn is_null_or_empty(&self) -> bool {
                    self.size() == 0
                }

                fn describe(&self) -> String {
                    let $s = self;
                    format!("'{}'", $text)
                }
            }
        )*
    };
}

impl_null_or_empty_text! {
    str => |s| s,
    String => |s| s,
    CStr => |s| s.to_string_lossy(),
    CString => |s| s.to_string_lossy(),
    OsStr => |s| s.to_string_lossy(),
    OsString => |s| s.to_string_lossy(),
}

macro_rules! impl_null_or_empty_collection {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> NullOrEmpty for $ty {
                fn is_null_or_empty(&self) -> bool {
                    self.size() == 0
                }

                fn describe(&self) -> String {
                    format!("'{:?}'", self)
                }
            }
        )*
    };
}

impl_null_or_empty_collection! {
    [T: fmt::Debug] [T],
    [T: fmt::Debug, const N: usize] [T; N],
    [T: fmt::Debug] Vec<T>,
    [T: fmt::Debug] VecDeque<T>,
    [T: fmt::Debug] LinkedList<T>,
    [K: fmt::Debug, V: fmt::Debug, S] HashMap<K, V, S>,
    [T: fmt::Debug, S] HashSet<T, S>,
    [K: fmt::Debug, V: fmt::Debug] BTreeMap<K, V>,
    [T: fmt::Debug] BTreeSet<T>,
}

impl<T: NullOrEmpty + ?Sized + ToOwned> NullOrEmpty for Cow<'_, T> {
    fn is_null_or_empty(&self) -> bool {
        T::is_null_or_empty(self)
    }

    fn describe(&self) -> String {
        T::describe(self)
    }
}

macro_rules! impl_null_or_empty_through_deref {
    ($($wrapper:ty),* $(,)?) => {
        $(
            impl<T: NullOrEmpty + ?Sized> NullOrEmpty for $wrapper {
                fn is_null_or_empty(&self) -> bool {
                    T::is_null_or_empty(self)
                }

                fn describe(&self) -> String {
                    T::describe(self)
                }
            }
        )*
    };
}

impl_null_or_empty_through_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

/// `None` is null; `Some(v)` defers to `v`.
impl<T: NullOrEmpty> NullOrEmpty for Option<T> {
    fn is_null_or_empty(&self) -> bool {
        self.as_ref().is_none_or(T::is_null_or_empty)
    }

    fn describe(&self) -> String {
        match self {
            Some(v) => v.describe(),
            None => NULL_MARKER.to_owned(),
        }
    }
}

/// Raw pointers carry no length, so only null counts as absent.
impl<T: ?Sized> NullOrEmpty for *const T {
    fn is_null_or_empty(&self) -> bool {
        Nullable::is_null(self)
    }

    fn describe(&self) -> String {
        if Nullable::is_null(self) {
            NULL_MARKER.to_owned()
        } else {
            self.address()
        }
    }
}

impl<T: ?Sized> NullOrEmpty for *mut T {
    fn is_null_or_empty(&self) -> bool {
        Nullable::is_null(self)
    }

    fn describe(&self) -> String {
        if Nullable::is_null(self) {
            NULL_MARKER.to_owned()
        } else {
            self.address()
        }
    }
}

/// `true` when `index` is non-negative and strictly below `size`.
///
/// Negative or otherwise unrepresentable indices fail the `usize` conversion
/// and are rejected.
#[inline]
pub fn is_valid_index<I>(index: I, size: usize) -> bool
where
    I: TryInto<usize>,
{
    index.try_into().is_ok_and(|i| i < size)
}
