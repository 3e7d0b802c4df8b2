//! Query entry point used by the HTTP and CLI boundaries.

use camdb_core::{CameraColumn, CameraRecord};
use serde::Serialize;

use crate::error::StoreError;
use crate::source::{CameraList, CameraLoader};

/// Cameras grouped by [`CameraColumn`], each group in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CameraColumns {
    pub fizz: Vec<CameraRecord>,
    pub buzz: Vec<CameraRecord>,
    pub fizzbuzz: Vec<CameraRecord>,
    pub other: Vec<CameraRecord>,
}

impl CameraColumns {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a CameraRecord>) -> Self {
        let mut columns = Self::default();
        for record in records {
            let target = match record.column() {
                CameraColumn::Fizz => &mut columns.fizz,
                CameraColumn::Buzz => &mut columns.buzz,
                CameraColumn::FizzBuzz => &mut columns.fizzbuzz,
                CameraColumn::Other => &mut columns.other,
            };
            target.push(record.clone());
        }
        columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fizz.len() + self.buzz.len() + self.fizzbuzz.len() + self.other.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Case-insensitive substring match of `term` against `record.name`.
#[must_use]
pub fn name_matches(record: &CameraRecord, term: &str) -> bool {
    record.name.to_lowercase().contains(&term.to_lowercase())
}

/// Read-only camera queries over a single loader.
///
/// The service does not validate search terms: an empty term matches every
/// camera. Rejecting blank input is the boundary's job.
#[derive(Debug)]
pub struct CameraService<L> {
    loader: L,
}

impl<L: CameraLoader> CameraService<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// # Errors
    ///
    /// Propagates the loader's [`StoreError`].
    pub async fn get_all(&self) -> Result<CameraList, StoreError> {
        self.loader.load_all().await
    }

    /// Cameras whose name contains `term`, ignoring case, in source order.
    ///
    /// # Errors
    ///
    /// Propagates the loader's [`StoreError`].
    pub async fn search(&self, term: &str) -> Result<Vec<CameraRecord>, StoreError> {
        let all = self.get_all().await?;

        let matches: Vec<CameraRecord> = all
            .iter()
            .filter(|c| name_matches(c, term))
            .cloned()
            .collect();

        tracing::debug!(term, matches = matches.len(), "camera search");
        Ok(matches)
    }

    /// Cameras grouped into display columns, optionally narrowed by name.
    ///
    /// # Errors
    ///
    /// Propagates the loader's [`StoreError`].
    pub async fn columns(&self, term: Option<&str>) -> Result<CameraColumns, StoreError> {
        let all = self.get_all().await?;
        Ok(match term {
            Some(term) => CameraColumns::from_records(all.iter().filter(|c| name_matches(c, term))),
            None => CameraColumns::from_records(all.iter()),
        })
    }
}
