use crate::errors::LedgerError;

/// Converts a one-based position into a vector index, reporting empty lists
/// separately from out-of-range positions.
pub fn resolve_index(one_based: usize, len: usize) -> Result<usize, LedgerError> {
    if len == 0 {
        return Err(LedgerError::EmptyList);
    }
    if one_based == 0 || one_based > len {
        return Err(LedgerError::IndexOutOfRange {
            index: one_based,
            len,
        });
    }
    Ok(one_based - 1)
}

/// Insertion-ordered entries addressed by one-based position. Removing an
/// entry shifts every later entry down by one.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryList<T> {
    entries: Vec<T>,
}

impl<T> EntryList<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `entry` and returns its one-based position.
    pub fn push(&mut self, entry: T) -> usize {
        self.entries.push(entry);
        self.entries.len()
    }

    pub fn get(&self, one_based: usize) -> Result<&T, LedgerError> {
        let index = resolve_index(one_based, self.entries.len())?;
        Ok(&self.entries[index])
    }

    pub fn remove(&mut self, one_based: usize) -> Result<T, LedgerError> {
        let index = resolve_index(one_based, self.entries.len())?;
        Ok(self.entries.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a EntryList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Something carrying a monetary amount.
pub trait Amounted {
    fn amount(&self) -> f64;
}

impl<T: Amounted> EntryList<T> {
    pub fn total(&self) -> f64 {
        self.entries.iter().map(Amounted::amount).sum()
    }
}
