/// Read-only view over an icon table generated by `qqweather-icons`.
///
/// The table maps lowercase icon names to SVG source and must be sorted by name.
#[derive(Debug, Clone, Copy)]
pub struct IconAssets {
    table: &'static [(&'static str, &'static str)],
}

impl IconAssets {
    pub const fn new(table: &'static [(&'static str, &'static str)]) -> Self {
        Self { table }
    }

    pub fn get(&self, icon_id: &str) -> Option<&'static str> {
        let key = icon_id.to_lowercase();
        self.table
            .binary_search_by(|(name, _)| (*name).cmp(key.as_str()))
            .ok()
            .map(|idx| self.table[idx].1)
    }

    pub fn contains(&self, icon_id: &str) -> bool {
        self.get(icon_id).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.table.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
