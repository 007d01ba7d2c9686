use std::{fmt, sync::Arc};

use bulk_model::{ItemKey, RunSnapshot, RunState};

use super::{Column, Pager, ResultPresenter, StatusCell};

const STATUS_HEADER: &str = "Status";
const EMPTY_TITLE: &str = "No items";

/// Items and columns of a dialog, cheap to clone into a rendering task.
///
/// Before a run the table shows `columns`; once the run starts it shows
/// `error_columns` followed by a status column, keeping the same rows and
/// pagination so each item stays on the same line.
pub struct TableModel<T> {
    items: Arc<[T]>,
    keys: Arc<[ItemKey]>,
    columns: Vec<Column<T>>,
    error_columns: Vec<Column<T>>,
}

impl<T> TableModel<T> {
    pub fn new(items: Arc<[T]>, keys: Arc<[ItemKey]>) -> Self {
        Self {
            items,
            keys,
            columns: Vec::new(),
            error_columns: Vec::new(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<Column<T>>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_error_columns(mut self, columns: Vec<Column<T>>) -> Self {
        self.error_columns = columns;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the current page for `snapshot`.
    pub fn view(
        &self,
        snapshot: &RunSnapshot,
        pager: &Pager,
        presenter: &ResultPresenter,
    ) -> TableView {
        let with_status = snapshot.state != RunState::Idle;
        let columns = if with_status {
            &self.error_columns
        } else {
            &self.columns
        };

        let mut headers: Vec<String> = columns.iter().map(|c| c.header().to_string()).collect();
        if with_status {
            headers.push(STATUS_HEADER.to_string());
        }

        let rows = pager
            .slice(&self.items)
            .iter()
            .zip(pager.slice(&self.keys))
            .map(|(item, key)| {
                let mut cells: Vec<String> = columns.iter().map(|c| c.render(item)).collect();
                let status = with_status.then(|| presenter.status_for(&snapshot.outcomes, key));
                if let Some(status) = &status {
                    cells.push(status.to_string());
                }
                TableRow {
                    key: key.clone(),
                    cells,
                    status,
                }
            })
            .collect();

        TableView {
            headers,
            rows,
            page: pager.page(),
            page_count: pager.page_count(),
            item_count: self.items.len(),
            empty_title: EMPTY_TITLE.to_string(),
        }
    }
}

impl<T> Clone for TableModel<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            keys: Arc::clone(&self.keys),
            columns: self.columns.clone(),
            error_columns: self.error_columns.clone(),
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub key: ItemKey,
    pub cells: Vec<String>,
    /// Present once the run started; also rendered as the last cell.
    pub status: Option<StatusCell>,
}

/// One rendered page of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    pub page: usize,
    pub page_count: usize,
    pub item_count: usize,
    pub empty_title: String,
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.item_count == 0 {
            return writeln!(f, "{}", self.empty_title);
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        let line = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            for (i, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
                if i > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{cell:<width$}")?;
            }
            writeln!(f)
        };

        line(f, &self.headers)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        line(f, &rule)?;
        for row in &self.rows {
            line(f, &row.cells)?;
        }
        writeln!(
            f,
            "page {}/{} ({} items)",
            self.page, self.page_count, self.item_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulk_model::{DialogLabels, Outcome};

    #[derive(Clone)]
    struct Host {
        id: i64,
        name: &'static str,
    }

    fn model() -> TableModel<Host> {
        let items: Vec<Host> = vec![
            Host { id: 1, name: "web-01" },
            Host { id: 2, name: "web-02" },
            Host { id: 3, name: "db-01" },
        ];
        let keys: Vec<ItemKey> = items.iter().map(|h| ItemKey::from(h.id)).collect();

        TableModel::new(items.into(), keys.into())
            .with_columns(vec![
                Column::new("Name", |h: &Host| h.name.to_string()),
                Column::new("Id", |h: &Host| h.id.to_string()),
            ])
            .with_error_columns(vec![Column::new("Name", |h: &Host| h.name.to_string())])
    }

    #[test]
    fn idle_table_uses_listing_columns() {
        let view = model().view(
            &RunSnapshot::idle(3),
            &Pager::new(3, 10),
            &ResultPresenter::default(),
        );

        assert_eq!(view.headers, vec!["Name", "Id"]);
        assert_eq!(view.rows[1].cells, vec!["web-02", "2"]);
        assert!(view.rows.iter().all(|r| r.status.is_none()));
    }

    #[test]
    fn result_table_adds_status_column() {
        let mut snap = RunSnapshot::idle(3);
        snap.state = RunState::Running;
        snap.outcomes.settle(ItemKey::from(1), Outcome::Succeeded);
        snap.outcomes.settle(ItemKey::from(3), Outcome::Failed("in use".into()));

        let presenter = ResultPresenter::new(DialogLabels::default());
        let view = model().view(&snap, &Pager::new(3, 10), &presenter);

        assert_eq!(view.headers, vec!["Name", "Status"]);
        assert_eq!(view.rows[0].cells, vec!["web-01", "✔ Success"]);
        assert_eq!(view.rows[1].cells, vec!["web-02", "… Pending"]);
        assert_eq!(view.rows[2].cells, vec!["db-01", "✖ in use"]);
    }

    #[test]
    fn rows_follow_pagination() {
        let mut pager = Pager::new(3, 2);
        pager.set_page(2);
        let view = model().view(&RunSnapshot::idle(3), &pager, &ResultPresenter::default());

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].key, ItemKey::from(3));
        assert_eq!(view.page_count, 2);
    }

    #[test]
    fn empty_table_prints_empty_state() {
        let empty: TableModel<Host> = TableModel::new(Vec::<Host>::new().into(), Vec::<ItemKey>::new().into());
        let view = empty.view(&RunSnapshot::idle(0), &Pager::new(0, 10), &ResultPresenter::default());
        assert_eq!(view.to_string(), "No items\n");
    }

    #[test]
    fn display_aligns_columns() {
        let view = model().view(&RunSnapshot::idle(3), &Pager::new(3, 10), &ResultPresenter::default());
        let text = view.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Name    Id");
        assert_eq!(lines[1], "------  --");
        assert_eq!(lines[2], "web-01  1 ");
        assert_eq!(lines[5], "page 1/1 (3 items)");
    }
}
