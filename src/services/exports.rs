// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use std::collections::VecDeque;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Number of finished batch exports kept for download
pub const MAX_EXPORTS: usize = 32;

/// Results CSV of one finished batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredExport {
    pub file_name: String,
    pub csv: Vec<u8>,
}

/// In-memory holder for batch exports so the results page can link to them.
/// Oldest runs are dropped once [`MAX_EXPORTS`] is reached.
#[derive(Debug, Default)]
pub struct ExportStore {
    entries: Mutex<VecDeque<(Uuid, StoredExport)>>,
}

impl ExportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, export: StoredExport) -> Uuid {
        let id = Uuid::now_v7();
        let mut entries = self.entries.lock().await;
        if entries.len() >= MAX_EXPORTS {
            entries.pop_front();
        }
        entries.push_back((id, export));
        id
    }

    pub async fn get(&self, id: &Uuid) -> Option<StoredExport> {
        self.entries
            .lock()
            .await
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, export)| export.clone())
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(name: &str) -> StoredExport {
        StoredExport {
            file_name: name.to_string(),
            csv: b"url\n".to_vec(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = ExportStore::new();
        let id = store.insert(export("a.csv")).await;

        assert_eq!(store.get(&id).await, Some(export("a.csv")));
        assert_eq!(store.get(&Uuid::now_v7()).await, None);
    }

    #[tokio::test]
    async fn test_oldest_export_is_evicted() {
        let store = ExportStore::new();
        let first = store.insert(export("first.csv")).await;
        for i in 0..MAX_EXPORTS {
            store.insert(export(&format!("{}.csv", i))).await;
        }

        assert_eq!(store.len().await, MAX_EXPORTS);
        assert!(store.get(&first).await.is_none());
    }
}
