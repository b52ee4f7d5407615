use std::any::type_name;
use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::message_buffer::MessageBuffer;

/// A value that can be written into a record's [`MessageBuffer`].
///
/// Implementations exist for integers (signed decimal), floats (fixed
/// notation, six fractional digits), text-like values (verbatim) and, through
/// [`Opaque`] and raw pointers, for values with no textual form of their own
/// (`[<type name> @ <address>]`). Types without an implementation are
/// rejected at compile time; wrap them in [`Opaque`] to log their identity.
///
/// None of the implementations allocate.
pub trait Loggable {
    /// Appends the textual form of `self` to `buffer`.
    fn append_to(&self, buffer: &mut MessageBuffer);
}

macro_rules! impl_loggable_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Loggable for $t {
                #[inline]
                fn append_to(&self, buffer: &mut MessageBuffer) {
                    let _ = write!(buffer, "{}", self);
                }
            }
        )*
    };
}

impl_loggable_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_loggable_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Loggable for $t {
                #[inline]
                fn append_to(&self, buffer: &mut MessageBuffer) {
                    let _ = write!(buffer, "{:.6}", self);
                }
            }
        )*
    };
}

impl_loggable_float!(f32, f64);

impl Loggable for str {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.append(self);
    }
}

impl Loggable for String {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.append(self);
    }
}

impl Loggable for Cow<'_, str> {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.append(self);
    }
}

impl Loggable for char {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.append(self.encode_utf8(&mut [0u8; 4]));
    }
}

impl Loggable for bool {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        buffer.append(if *self { "true" } else { "false" });
    }
}

/// Pre-formatted arguments, e.g. from `format_args!`, written without an
/// intermediate `String`.
impl Loggable for fmt::Arguments<'_> {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        let _ = buffer.write_fmt(*self);
    }
}

impl<T: Loggable + ?Sized> Loggable for &T {
    #[inline]
    fn append_to(&self, buffer: &mut MessageBuffer) {
        (**self).append_to(buffer);
    }
}

impl<T: ?Sized> Loggable for *const T {
    fn append_to(&self, buffer: &mut MessageBuffer) {
        let _ = write!(buffer, "[{} @ {:p}]", type_name::<Self>(), *self);
    }
}

impl<T: ?Sized> Loggable for *mut T {
    fn append_to(&self, buffer: &mut MessageBuffer) {
        let _ = write!(buffer, "[{} @ {:p}]", type_name::<Self>(), *self);
    }
}

/// Logs a value by type name and address instead of by content.
///
/// The type name comes from [`std::any::type_name`] and is best-effort: its
/// exact text is not stable across compiler versions.
///
/// # Examples
///
/// ```
/// use logger_lite::loggable::{Loggable, Opaque};
/// use logger_lite::message_buffer::MessageBuffer;
///
/// struct Connection { _fd: i32 }
///
/// let conn = Connection { _fd: 3 };
/// let mut buffer = MessageBuffer::new();
/// Opaque(&conn).append_to(&mut buffer);
///
/// assert!(buffer.as_str().starts_with('['));
/// assert!(buffer.as_str().contains("Connection @ 0x"));
/// ```
#[derive(Debug)]
pub struct Opaque<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> Loggable for Opaque<'_, T> {
    fn append_to(&self, buffer: &mut MessageBuffer) {
        let _ = write!(buffer, "[{} @ {:p}]", type_name::<T>(), self.0);
    }
}

/// Shorthand for [`Opaque`].
#[inline]
pub fn opaque<T: ?Sized>(value: &T) -> Opaque<'_, T> {
    Opaque(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: impl Loggable) -> String {
        let mut buffer = MessageBuffer::new();
        value.append_to(&mut buffer);
        buffer.as_str().to_owned()
    }

    #[test]
    fn test_integer_formatting() {
        assert_eq!(render(12345i32), "12345");
        assert_eq!(render(-42i32), "-42");
        assert_eq!(render(0u8), "0");
        assert_eq!(render(u64::MAX), "18446744073709551615");
        assert_eq!(render(i128::MIN), "-170141183460469231731687303715884105728");
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(render(3.5f64), "3.500000");
        assert_eq!(render(-0.25f32), "-0.250000");
        assert_eq!(render(3.14159f64), "3.141590");
        assert_eq!(render(1e-9f64), "0.000000");
    }

    #[test]
    fn test_text_formatting() {
        assert_eq!(render("Hello"), "Hello");
        assert_eq!(render(String::from("owned")), "owned");
        assert_eq!(render(Cow::Borrowed("cow")), "cow");
        assert_eq!(render('é'), "é");
        assert_eq!(render(true), "true");
        assert_eq!(render(false), "false");
    }

    #[test]
    fn test_format_args() {
        assert_eq!(render(format_args!("{}+{}={}", 1, 2, 3)), "1+2=3");
    }

    #[test]
    fn test_opaque_descriptor() {
        struct Socket {
            _port: u16,
        }
        let socket = Socket { _port: 80 };
        let text = render(opaque(&socket));

        assert!(text.starts_with('[') && text.ends_with(']'));
        let (name, address) = text[1..text.len() - 1].split_once(" @ ").unwrap();
        assert!(name.ends_with("Socket"));
        assert!(address.starts_with("0x"));
        assert_eq!(address, format!("{:p}", &socket));
    }

    #[test]
    fn test_raw_pointer_descriptor() {
        let value = 7u32;
        let ptr: *const u32 = &value;
        let text = render(ptr);

        assert!(text.starts_with("[*const u32 @ 0x"));
        assert!(text.ends_with(']'));
    }
}
