//! Pricing computation and table population
//!
//! The first table in the document is treated as the pricing table. Cost
//! figures dispatch on the pricing model; optional services add a per-unit
//! rate. Table anomalies degrade to a status the pipeline logs, a document
//! without perfect pricing beats no document.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::document::TemplateDocument;
use crate::types::{PricingPlan, ServiceSelection};

/// Per-unit monthly add-on rates, in dollars.
const WORKSTATION_COMPLIANCE_RATE: f64 = 10.00;
const WORKSTATION_SECURITY_PLUS_RATE: f64 = 15.00;
const USER_COMPLIANCE_RATE: f64 = 5.00;
const USER_SECURITY_PLUS_RATE: f64 = 8.00;

/// Pricing data lives in this row of the table.
const PRICING_ROW: usize = 1;
/// Cell 0 holds the row label; data cells start here.
const FIRST_DATA_CELL: usize = 1;

/// Monthly cost figures derived from a pricing plan and service selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub base_monthly: f64,
    pub compliance: f64,
    pub security_plus: f64,
}

impl CostBreakdown {
    /// Base cost plus every selected add-on.
    pub fn total(&self) -> f64 {
        self.base_monthly + self.compliance + self.security_plus
    }
}

/// Compute the monthly cost breakdown for a plan and service selection.
pub fn compute_costs(plan: &PricingPlan, services: &ServiceSelection) -> CostBreakdown {
    let (compliance_rate, security_plus_rate) = match plan {
        PricingPlan::Workstation { .. } => {
            (WORKSTATION_COMPLIANCE_RATE, WORKSTATION_SECURITY_PLUS_RATE)
        }
        PricingPlan::User { .. } => (USER_COMPLIANCE_RATE, USER_SECURITY_PLUS_RATE),
    };
    let count = f64::from(plan.count());

    CostBreakdown {
        base_monthly: count * plan.unit_price(),
        compliance: if services.include_compliance {
            count * compliance_rate
        } else {
            0.0
        },
        security_plus: if services.include_security_plus {
            count * security_plus_rate
        } else {
            0.0
        },
    }
}

/// Outcome of the pricing-table pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TableUpdate {
    /// Data row found; `cells_written` of the three target cells existed.
    Applied { cells_written: usize },
    NoTable,
    RowMissing,
}

/// Write quantity, unit price, and base cost into the pricing row of the
/// first table. Each write is guarded on the cell existing; missing cells are
/// skipped. The total including add-ons is computed for the log line only,
/// the table shows the base cost.
pub(crate) fn populate_pricing_table(
    document: &mut TemplateDocument,
    plan: &PricingPlan,
    services: &ServiceSelection,
) -> TableUpdate {
    let breakdown = compute_costs(plan, services);

    let Some(table) = document.first_table_mut() else {
        return TableUpdate::NoTable;
    };
    let Some(row) = table.rows.get_mut(PRICING_ROW) else {
        return TableUpdate::RowMissing;
    };

    let values = [
        plan.count().to_string(),
        format_usd(plan.unit_price()),
        format_usd(breakdown.base_monthly),
    ];
    let mut cells_written = 0;
    for (offset, value) in values.into_iter().enumerate() {
        if let Some(cell) = row.cells.get_mut(FIRST_DATA_CELL + offset) {
            cell.set_text(value);
            cells_written += 1;
        }
    }

    info!(
        "updated {} pricing: {} x {} = {}/month",
        plan.model_name(),
        plan.count(),
        format_usd(plan.unit_price()),
        format_usd(breakdown.total()),
    );
    TableUpdate::Applied { cells_written }
}

/// Format a dollar amount as `$X.XX`.
pub(crate) fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, Paragraph, Table, TableCell, TableRow};
    use pretty_assertions::assert_eq;

    fn pricing_table(rows: usize, cells: usize) -> Table {
        Table {
            rows: (0..rows)
                .map(|r| TableRow {
                    cells: (0..cells)
                        .map(|c| TableCell::plain(format!("r{r}c{c}")))
                        .collect(),
                })
                .collect(),
        }
    }

    fn document_with_table(table: Table) -> TemplateDocument {
        TemplateDocument::new(vec![
            Block::Paragraph(Paragraph::plain("Monthly Pricing")),
            Block::Table(table),
        ])
    }

    #[test]
    fn test_workstation_costs_with_compliance() {
        let plan = PricingPlan::Workstation {
            count: 25,
            unit_price: 110.00,
        };
        let services = ServiceSelection {
            include_compliance: true,
            include_security_plus: false,
        };
        let breakdown = compute_costs(&plan, &services);
        assert_eq!(breakdown.base_monthly, 2750.00);
        assert_eq!(breakdown.compliance, 250.00);
        assert_eq!(breakdown.security_plus, 0.00);
        assert_eq!(breakdown.total(), 3000.00);
    }

    #[test]
    fn test_user_costs_with_security_plus() {
        let plan = PricingPlan::User {
            count: 40,
            unit_price: 15.00,
        };
        let services = ServiceSelection {
            include_compliance: false,
            include_security_plus: true,
        };
        let breakdown = compute_costs(&plan, &services);
        assert_eq!(breakdown.base_monthly, 600.00);
        assert_eq!(breakdown.compliance, 0.00);
        assert_eq!(breakdown.security_plus, 320.00);
        assert_eq!(breakdown.total(), 920.00);
    }

    #[test]
    fn test_zero_count_zero_costs() {
        let plan = PricingPlan::Workstation {
            count: 0,
            unit_price: 110.00,
        };
        let services = ServiceSelection {
            include_compliance: true,
            include_security_plus: true,
        };
        let breakdown = compute_costs(&plan, &services);
        assert_eq!(breakdown.total(), 0.00);
    }

    #[test]
    fn test_populate_writes_row_one_data_cells() {
        let mut document = document_with_table(pricing_table(2, 4));
        let plan = PricingPlan::Workstation {
            count: 25,
            unit_price: 110.00,
        };
        let services = ServiceSelection {
            include_compliance: true,
            include_security_plus: false,
        };

        let update = populate_pricing_table(&mut document, &plan, &services);
        assert_eq!(update, TableUpdate::Applied { cells_written: 3 });

        let table = document.tables().next().unwrap();
        // Label cell untouched, data cells rewritten. The base cost lands in
        // the table; add-ons only affect the logged total.
        assert_eq!(table.rows[1].cells[0].text(), "r1c0");
        assert_eq!(table.rows[1].cells[1].text(), "25");
        assert_eq!(table.rows[1].cells[2].text(), "$110.00");
        assert_eq!(table.rows[1].cells[3].text(), "$2750.00");
        // Header row untouched.
        assert_eq!(table.rows[0].cells[1].text(), "r0c1");
    }

    #[test]
    fn test_populate_user_plan() {
        let mut document = document_with_table(pricing_table(3, 4));
        let plan = PricingPlan::User {
            count: 40,
            unit_price: 15.00,
        };
        let update =
            populate_pricing_table(&mut document, &plan, &ServiceSelection::default());
        assert_eq!(update, TableUpdate::Applied { cells_written: 3 });

        let table = document.tables().next().unwrap();
        assert_eq!(table.rows[1].cells[1].text(), "40");
        assert_eq!(table.rows[1].cells[2].text(), "$15.00");
        assert_eq!(table.rows[1].cells[3].text(), "$600.00");
    }

    #[test]
    fn test_populate_skips_missing_cells() {
        // Only two cells: label + quantity. Unit price and cost have nowhere
        // to go and are skipped.
        let mut document = document_with_table(pricing_table(2, 2));
        let plan = PricingPlan::Workstation {
            count: 25,
            unit_price: 110.00,
        };
        let update =
            populate_pricing_table(&mut document, &plan, &ServiceSelection::default());
        assert_eq!(update, TableUpdate::Applied { cells_written: 1 });

        let table = document.tables().next().unwrap();
        assert_eq!(table.rows[1].cells[1].text(), "25");
    }

    #[test]
    fn test_populate_without_table() {
        let mut document =
            TemplateDocument::new(vec![Block::Paragraph(Paragraph::plain("No tables here"))]);
        let plan = PricingPlan::User {
            count: 10,
            unit_price: 20.00,
        };
        let update =
            populate_pricing_table(&mut document, &plan, &ServiceSelection::default());
        assert_eq!(update, TableUpdate::NoTable);
    }

    #[test]
    fn test_populate_header_only_table() {
        let mut document = document_with_table(pricing_table(1, 4));
        let plan = PricingPlan::User {
            count: 10,
            unit_price: 20.00,
        };
        let update =
            populate_pricing_table(&mut document, &plan, &ServiceSelection::default());
        assert_eq!(update, TableUpdate::RowMissing);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(110.0), "$110.00");
        assert_eq!(format_usd(2750.0), "$2750.00");
        assert_eq!(format_usd(0.5), "$0.50");
    }
}
