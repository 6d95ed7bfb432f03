//! Turning an evaluated operand of any type into a display string.
//!
//! The choice of rendering is made at compile time through method resolution
//! on increasingly dereferenced [`Operand`] wrappers (autoref dispatch). The
//! first capability the operand's type has wins:
//!
//! | priority | capability                                  | rendering              |
//! |----------|---------------------------------------------|------------------------|
//! | 1        | [`EnumName`]                                | symbolic name          |
//! | 2        | `&T: Into<&'static str>` (`strum::IntoStaticStr`) | symbolic name    |
//! | 3        | [`RawAddress`] (raw pointers, `NonNull`)    | address, `0x0` if null |
//! | 4        | `Display`                                   | display form           |
//! | 5        | `Debug`                                     | debug form             |
//! | 6        | anything                                    | `<unprintable T>`      |
//!
//! Optional references and boxes are rendered by value (`Some(4)`), since
//! comparisons on them compare pointees. The null kinds report their address
//! through [`Nullable::address`] directly.
//!
//! Dispatch only works where the operand type is concrete, which is always the
//! case at a macro call site. Use [`render!`](crate::render) rather than these
//! traits directly.

use std::any::type_name;
use std::fmt::{Debug, Display};
use std::ptr::NonNull;

use crate::predicate::Nullable;

/// Symbolic names for enumeration values.
///
/// Implement this by hand, or derive `strum::IntoStaticStr` which the
/// formatter picks up on its own.
pub trait EnumName {
    fn enum_name(&self) -> &'static str;
}

/// Borrowed operand being rendered. Never copies or moves the value.
pub struct Operand<'a, T: ?Sized>(pub &'a T);

pub trait RenderEnumName {
    fn render_operand(&self) -> String;
}

impl<T: EnumName + ?Sized> RenderEnumName for &&&&&Operand<'_, T> {
    fn render_operand(&self) -> String {
        self.0.enum_name().to_owned()
    }
}

pub trait RenderStaticStr {
    fn render_operand(&self) -> String;
}

impl<T> RenderStaticStr for &&&&Operand<'_, T>
where
    T: ?Sized,
    for<'x> &'x T: Into<&'static str>,
{
    fn render_operand(&self) -> String {
        let name: &'static str = self.0.into();
        name.to_owned()
    }
}

/// Pointers whose value is their address.
pub trait RawAddress: Nullable {}

impl<T: ?Sized> RawAddress for *const T {}
impl<T: ?Sized> RawAddress for *mut T {}
impl<T: ?Sized> RawAddress for NonNull<T> {}

pub trait RenderPointer {
    fn render_operand(&self) -> String;
}

impl<T: RawAddress + ?Sized> RenderPointer for &&&Operand<'_, T> {
    fn render_operand(&self) -> String {
        self.0.address()
    }
}

pub trait RenderDisplay {
    fn render_operand(&self) -> String;
}

impl<T: Display + ?Sized> RenderDisplay for &&Operand<'_, T> {
    fn render_operand(&self) -> String {
        self.0.to_string()
    }
}

pub trait RenderDebug {
    fn render_operand(&self) -> String;
}

impl<T: Debug + ?Sized> RenderDebug for &Operand<'_, T> {
    fn render_operand(&self) -> String {
        format!("{:?}", self.0)
    }
}

pub trait RenderFallback {
    fn render_operand(&self) -> String;
}

impl<T: ?Sized> RenderFallback for Operand<'_, T> {
    fn render_operand(&self) -> String {
        format!("<unprintable {}>", type_name::<T>())
    }
}

/// Renders a place expression through the formatting adapter, by reference.
///
/// ```
/// #[derive(Debug)]
/// struct Opaque;
/// assert_eq!(assuming::render!(6.0_f64), "6");
/// assert_eq!(assuming::render!(Opaque), "Opaque");
/// ```
#[macro_export]
macro_rules! render {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::format::{
            RenderDebug as _, RenderDisplay as _, RenderEnumName as _, RenderFallback as _,
            RenderPointer as _, RenderStaticStr as _,
        };
        (&&&&&&$crate::format::Operand(&$value)).render_operand()
    }};
}
