//! Flattening of nested argument groupings.

use std::path::{Path, PathBuf};

/// A value that expands into zero or more command arguments.
///
/// Collections, tuples and `Option` flatten recursively, so
/// `("commit", ["-m", "msg"], None::<&str>)` becomes `commit -m msg`.
pub trait IntoArgs {
    /// Append this value's arguments to `out`, in order.
    fn push_args(self, out: &mut Vec<String>);

    /// Collect into a flat argument list.
    fn into_args(self) -> Vec<String>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        self.push_args(&mut out);
        out
    }
}

impl IntoArgs for () {
    fn push_args(self, _out: &mut Vec<String>) {}
}

impl IntoArgs for &str {
    fn push_args(self, out: &mut Vec<String>) {
        out.push(self.to_string());
    }
}

impl IntoArgs for String {
    fn push_args(self, out: &mut Vec<String>) {
        out.push(self);
    }
}

impl IntoArgs for &String {
    fn push_args(self, out: &mut Vec<String>) {
        out.push(self.clone());
    }
}

impl IntoArgs for &Path {
    fn push_args(self, out: &mut Vec<String>) {
        out.push(self.to_string_lossy().into_owned());
    }
}

impl IntoArgs for PathBuf {
    fn push_args(self, out: &mut Vec<String>) {
        self.as_path().push_args(out);
    }
}

impl IntoArgs for &PathBuf {
    fn push_args(self, out: &mut Vec<String>) {
        self.as_path().push_args(out);
    }
}

macro_rules! impl_into_args_display {
    ($($t:ty),*) => {
        $(
            impl IntoArgs for $t {
                fn push_args(self, out: &mut Vec<String>) {
                    out.push(self.to_string());
                }
            }
        )*
    };
}

impl_into_args_display!(char, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: IntoArgs> IntoArgs for Option<T> {
    fn push_args(self, out: &mut Vec<String>) {
        if let Some(value) = self {
            value.push_args(out);
        }
    }
}

impl<T: IntoArgs> IntoArgs for Vec<T> {
    fn push_args(self, out: &mut Vec<String>) {
        for value in self {
            value.push_args(out);
        }
    }
}

impl<T: IntoArgs, const N: usize> IntoArgs for [T; N] {
    fn push_args(self, out: &mut Vec<String>) {
        for value in self {
            value.push_args(out);
        }
    }
}

impl<'a, T> IntoArgs for &'a [T]
where
    &'a T: IntoArgs,
{
    fn push_args(self, out: &mut Vec<String>) {
        for value in self {
            value.push_args(out);
        }
    }
}

impl<'a, T> IntoArgs for &'a Vec<T>
where
    &'a T: IntoArgs,
{
    fn push_args(self, out: &mut Vec<String>) {
        self.as_slice().push_args(out);
    }
}

impl IntoArgs for &&str {
    fn push_args(self, out: &mut Vec<String>) {
        (*self).push_args(out);
    }
}

macro_rules! impl_into_args_tuple {
    ($($name:ident),+) => {
        impl<$($name: IntoArgs),+> IntoArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn push_args(self, out: &mut Vec<String>) {
                let ($($name,)+) = self;
                $($name.push_args(out);)+
            }
        }
    };
}

impl_into_args_tuple!(A);
impl_into_args_tuple!(A, B);
impl_into_args_tuple!(A, B, C);
impl_into_args_tuple!(A, B, C, D);
impl_into_args_tuple!(A, B, C, D, E);
impl_into_args_tuple!(A, B, C, D, E, F);
