//! Document assembly pipeline
//!
//! `DocumentAssembler` runs a fixed sequence of independent mutation passes
//! over the loaded template: insert the client/preparer block, replace client
//! and date placeholders, handle optional services, populate the pricing
//! table, persist. Insertions use structural position and substitutions use
//! text matching, so pass order cannot invalidate later matches.

pub mod insert;
pub mod persist;
pub mod pricing;
pub mod services;
pub mod substitute;

pub use persist::GeneratedDocument;
pub use pricing::{compute_costs, CostBreakdown};

use chrono::Local;
use tracing::{info, warn};

use crate::config::AssemblerConfig;
use crate::document::io;
use crate::error::AssemblerError;
use crate::locate;
use crate::types::{ClientProfile, PreparerProfile, PricingPlan, ServiceSelection};
use pricing::TableUpdate;

/// Assembles MSA documents from the fixed template.
///
/// One `generate` call runs start-to-finish on its own exclusively-owned
/// document tree; concurrent calls share only the filesystem (read-only
/// template, common output directory).
pub struct DocumentAssembler {
    config: AssemblerConfig,
}

impl DocumentAssembler {
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Generate an MSA for the given client and return the saved file.
    ///
    /// Input is assumed validated by the caller: client fields non-empty
    /// after trimming, unit price non-negative. Errors only on template
    /// discovery/load failures and on write failures; pricing-table shape
    /// anomalies are logged and the document still ships.
    pub fn generate(
        &self,
        client: &ClientProfile,
        preparer: &PreparerProfile,
        services: &ServiceSelection,
        pricing: &PricingPlan,
    ) -> Result<GeneratedDocument, AssemblerError> {
        let now = Local::now();
        info!(
            "generating MSA for client '{}' ({} pricing)",
            client.name,
            pricing.model_name()
        );

        // 1. Locate and load the template.
        let template_path =
            locate::locate_template(&self.config.template_filename, &self.config.search_roots);
        let mut document = io::load_template(&template_path)?;

        // 2. Client/preparer sections on page 1.
        insert::insert_client_block(&mut document, client, preparer);

        // 3. Client identity placeholders.
        substitute::ReplacementSet::client_identity(client).apply(&mut document);

        // 4. Date placeholders.
        substitute::ReplacementSet::dates(now.date_naive()).apply(&mut document);

        // 5. Optional services, informational only.
        services::log_service_selection(services);

        // 6. Pricing table. Shape anomalies degrade to a warning so the rest
        //    of the document still ships.
        match pricing::populate_pricing_table(&mut document, pricing, services) {
            TableUpdate::Applied { cells_written } => {
                info!("pricing table updated, {cells_written} cells written");
            }
            TableUpdate::NoTable => warn!("no tables found in document, pricing not written"),
            TableUpdate::RowMissing => {
                warn!("pricing table has no data row, pricing not written");
            }
        }

        // 7. Persist under the output directory.
        persist::save_generated(&document, &self.config.output_dir, &client.name, now)
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new(AssemblerConfig::default())
    }
}
