/// A value read from an input, along with the warnings raised while reading it.
///
/// Warnings never prevent a value from being produced; they are passed to a consumer when the value is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Warned<T> {
    value: T,
    warnings: Vec<String>,
}

impl<T> Warned<T> {
    pub(crate) fn ok(value: T) -> Self {
        Self {
            value,
            warnings: vec![],
        }
    }

    pub(crate) fn with_warning(value: T, warning: String) -> Self {
        Self {
            value,
            warnings: vec![warning],
        }
    }

    /// Takes the value, giving each warning to the consumer.
    pub(crate) fn take<F>(self, mut consumer: F) -> T
    where
        F: FnMut(&str),
    {
        self.warnings.iter().for_each(|w| consumer(w.as_str()));
        self.value
    }

    /// Pairs two values, keeping the warnings of both in order.
    pub(crate) fn zip<U>(mut self, other: Warned<U>) -> Warned<(T, U)> {
        self.warnings.extend(other.warnings);
        Warned {
            value: (self.value, other.value),
            warnings: self.warnings,
        }
    }
}
