//! Ordered argument lists.

use std::ops::Index;
use std::slice;

use super::Value;

/// The full positional argument list of one log call.
///
/// Built from `()`, a single string or value, a tuple of up to eight
/// convertible values, a `Vec<Value>`, or the [`args!`](crate::args) macro.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(Vec<Value>);

impl Args {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append one argument.
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.0.push(value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn first(&self) -> Option<&Value> {
        self.0.first()
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl Index<usize> for Args {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Args {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Value> for Args {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl From<&Args> for Args {
    fn from(args: &Args) -> Self {
        args.clone()
    }
}

impl From<Value> for Args {
    fn from(value: Value) -> Self {
        Self(vec![value])
    }
}

impl From<&str> for Args {
    fn from(message: &str) -> Self {
        Self(vec![Value::from(message)])
    }
}

impl From<String> for Args {
    fn from(message: String) -> Self {
        Self(vec![Value::Str(message)])
    }
}

impl From<()> for Args {
    fn from(_: ()) -> Self {
        Self::new()
    }
}

macro_rules! impl_from_tuple {
    ($($name:ident),+) => {
        impl<$($name: Into<Value>),+> From<($($name,)+)> for Args {
            #[allow(non_snake_case)]
            fn from(($($name,)+): ($($name,)+)) -> Self {
                Self(vec![$($name.into()),+])
            }
        }
    };
}

impl_from_tuple!(A);
impl_from_tuple!(A, B);
impl_from_tuple!(A, B, C);
impl_from_tuple!(A, B, C, D);
impl_from_tuple!(A, B, C, D, E);
impl_from_tuple!(A, B, C, D, E, F);
impl_from_tuple!(A, B, C, D, E, F, G);
impl_from_tuple!(A, B, C, D, E, F, G, H);

/// Build an [`Args`](crate::record::Args) list from any number of values.
///
/// ```
/// use package_logging::args;
///
/// let args = args!["disk at %d%%", 87];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::record::Args::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::record::Args::from(::std::vec![$($crate::record::Value::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_preserves_order() {
        let args = Args::from(("watch %s", "out"));
        assert_eq!(args.len(), 2);
        assert_eq!(args[0], Value::from("watch %s"));
        assert_eq!(args[1], Value::from("out"));
    }

    #[test]
    fn test_macro_matches_builder() {
        let built = Args::new().with("disk at %d%%").with(87);
        assert_eq!(crate::args!["disk at %d%%", 87], built);
        assert!(crate::args![].is_empty());
    }

    #[test]
    fn test_single_message() {
        let args = Args::from("hello");
        assert_eq!(args.first().and_then(Value::as_str), Some("hello"));
        assert_eq!(Args::from(()), Args::new());
    }

    #[test]
    fn test_eight_element_tuple() {
        let args = Args::from((1, 2, 3, 4, 5, 6, 7, "eight"));
        assert_eq!(args.len(), 8);
        assert_eq!(args.get(7), Some(&Value::from("eight")));
        assert_eq!(args.get(8), None);
    }
}
