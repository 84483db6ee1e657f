//! Optional service selection handling
//!
//! The selection is logged to aid evaluation of the generated document; no
//! document content is added or removed here. The cost impact of the toggles
//! is applied by the pricing pass.

use tracing::info;

use crate::types::ServiceSelection;

pub(crate) fn log_service_selection(services: &ServiceSelection) {
    if services.include_compliance {
        info!("including compliance services");
    } else {
        info!("excluding compliance services");
    }
    if services.include_security_plus {
        info!("including security plus services");
    } else {
        info!("excluding security plus services");
    }
}
