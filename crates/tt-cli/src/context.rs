use anyhow::Context;
use tt_catalog::CatalogClient;
use tt_config::TrackConfig;
use tt_store::plans::PlanBook;
use tt_store::{FileSlots, SlotKeys, TechnologyService};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TechnologyService<FileSlots>,
    pub config: TrackConfig,
}

impl AppContext {
    /// Open the slot directory and load the working collection.
    pub fn init(config: TrackConfig) -> anyhow::Result<Self> {
        let data_dir = config.storage.resolved_data_dir();
        let slots = FileSlots::open(&data_dir)
            .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
        let service = TechnologyService::open(slots, SlotKeys::from(&config.storage))
            .context("failed to load the working collection")?;

        Ok(Self { service, config })
    }

    /// Write the working collection back to its slot.
    pub fn persist(&self) -> anyhow::Result<()> {
        self.service
            .persist()
            .context("failed to save the working collection")
    }

    pub fn catalog(&self) -> anyhow::Result<CatalogClient> {
        CatalogClient::new(&self.config.catalog).context("failed to build catalog client")
    }

    pub fn load_plans(&self) -> anyhow::Result<PlanBook> {
        PlanBook::load(self.service.slots(), &self.service.keys().plans)
            .context("failed to load study plans")
    }

    pub fn save_plans(&self, book: &PlanBook) -> anyhow::Result<()> {
        book.save(self.service.slots(), &self.service.keys().plans)
            .context("failed to save study plans")
    }

    /// Context over a scratch directory with default settings.
    #[cfg(test)]
    pub fn for_dir(dir: &std::path::Path) -> Self {
        let mut config = TrackConfig::default();
        config.storage.data_dir = dir.display().to_string();
        Self::init(config).expect("context should initialize")
    }
}
