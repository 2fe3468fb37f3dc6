use crate::{DomainError, PhotoRecord};

pub const DEFAULT_LIVE_CAP: usize = 3;
pub const DEFAULT_RELOAD_CAP: usize = 10;

#[derive(Debug, Clone)]
pub struct RecentPhotos {
    records: Vec<PhotoRecord>,
    live_cap: usize,
    reload_cap: usize,
}

impl Default for RecentPhotos {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentPhotos {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            live_cap: DEFAULT_LIVE_CAP,
            reload_cap: DEFAULT_RELOAD_CAP,
        }
    }

    pub fn with_caps(live_cap: usize, reload_cap: usize) -> Result<Self, DomainError> {
        if live_cap == 0 {
            return Err(DomainError::InvalidBufferCap("live_cap"));
        }
        if reload_cap == 0 {
            return Err(DomainError::InvalidBufferCap("reload_cap"));
        }
        Ok(Self {
            records: Vec::new(),
            live_cap,
            reload_cap,
        })
    }

    pub fn refresh_from(&mut self, all: Vec<PhotoRecord>) {
        let skip = all.len().saturating_sub(self.reload_cap);
        self.records = all.into_iter().skip(skip).collect();
    }

    pub fn append(&mut self, record: PhotoRecord) {
        self.records.push(record);
        while self.records.len() > self.live_cap {
            self.records.remove(0);
        }
    }

    pub fn records(&self) -> &[PhotoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
