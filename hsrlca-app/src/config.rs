use anyhow::{bail, Context, Result};
use hsrlca_core::dataset::{self, BaseData};
use hsrlca_schemas::{
    electricity::ElectricitySources,
    file_formats::{ModelFile, ScenarioDefinition},
    records::ProducingCountry,
};
use std::path::{Path, PathBuf};

/// A parsed model file with its data directory resolved against the file's location.
pub struct ModelConfig {
    pub model: ModelFile,
    pub data_dir: PathBuf,
}

impl ModelConfig {
    pub fn load(path: &Path) -> Result<Self> {
        println!("Loading model configuration from '{}'...", path.display());

        let mut model = dataset::load_model_file(path)
            .with_context(|| format!("Failed to load model file {:?}", path))?;
        if model.scenarios.is_empty() {
            bail!("Model file {:?} defines no scenarios", path);
        }

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let data_dir = base.join(&model.data.data_dir);
        model.data.data_dir = data_dir.display().to_string();
        log::debug!("resolved data directory to {:?}", data_dir);

        Ok(Self { model, data_dir })
    }

    pub fn load_base_data(&self) -> Result<BaseData> {
        BaseData::load(&self.model.data)
            .with_context(|| format!("Failed to load base data from {:?}", self.data_dir))
    }

    pub fn load_producing_countries(&self, scenario: &ScenarioDefinition) -> Result<Vec<ProducingCountry>> {
        let path = self.data_dir.join(&scenario.up_countries);
        dataset::load_producing_countries(&path).with_context(|| {
            format!(
                "Failed to load producing countries for scenario '{}' from {:?}",
                scenario.name, path
            )
        })
    }

    pub fn electricity_sources(&self) -> ElectricitySources {
        self.model.electricity_sources.clone().unwrap_or_default()
    }

    /// The scenario's own rail allocation, else the model-wide one.
    pub fn rail_allocation(&self, scenario: &ScenarioDefinition) -> f64 {
        scenario.rail_allocation.unwrap_or(self.model.rail_allocation)
    }
}
