/// `--table` / `--exclude` selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl TableFilter {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self { include, exclude }
    }

    /// Select tables from `listed`, keeping listing order.
    ///
    /// Included names missing from the listing are appended in the order
    /// given so the provider reports them as unknown tables.
    pub fn apply(&self, listed: Vec<String>) -> Vec<String> {
        let mut selected: Vec<String> = if self.include.is_empty() {
            listed
        } else {
            let mut selected: Vec<String> = listed
                .into_iter()
                .filter(|t| self.include.contains(t))
                .collect();
            for name in &self.include {
                if !selected.contains(name) {
                    selected.push(name.clone());
                }
            }
            selected
        };
        selected.retain(|t| !self.exclude.contains(t));
        selected
    }
}
