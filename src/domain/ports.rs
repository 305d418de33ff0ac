use std::path::Path;

/// Where a generator finds its sources.
pub trait ConfigProvider {
    fn data_path(&self) -> &Path;
    fn template_path(&self) -> &Path;
    fn record_count(&self) -> usize;
}
