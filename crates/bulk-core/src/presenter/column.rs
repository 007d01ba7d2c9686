use std::{fmt, sync::Arc};

/// One table column: a header and a function rendering the cell of an item.
pub struct Column<T> {
    header: String,
    cell: Arc<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> Column<T> {
    pub fn new<F>(header: impl Into<String>, cell: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            header: header.into(),
            cell: Arc::new(cell),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn render(&self, item: &T) -> String {
        (self.cell)(item)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}
