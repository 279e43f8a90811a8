/// Inquiry delivery
///
/// The form never talks to a transport directly; it hands a validated
/// `Inquiry` to a `Delivery` and gets a `Receipt` or an error back.
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use super::contact::{Inquiry, Receipt};
use super::outbox::Outbox;
use crate::error::SiteError;

/// Where submitted inquiries go
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// Wait, then report success without sending anything
    Simulated { delay: Duration },
    /// Wait, then store the inquiry in the local outbox
    Outbox { db_path: PathBuf, delay: Duration },
}

impl Delivery {
    pub fn delay(&self) -> Duration {
        match self {
            Delivery::Simulated { delay } | Delivery::Outbox { delay, .. } => *delay,
        }
    }
}

/// Deliver one inquiry. Runs on the async runtime; database work is moved
/// to a blocking thread with its own connection.
pub async fn deliver(delivery: Delivery, inquiry: Inquiry) -> Result<Receipt, Arc<SiteError>> {
    tokio::time::sleep(delivery.delay()).await;

    let reference = match delivery {
        Delivery::Simulated { .. } => None,
        Delivery::Outbox { db_path, .. } => {
            // rusqlite::Connection is not Send, so open it on the blocking thread
            let stored = tokio::task::spawn_blocking(move || {
                Outbox::open(&db_path)?.record(&inquiry)
            })
            .await
            .map_err(SiteError::from)
            .and_then(|result| result);

            match stored {
                Ok(id) => Some(id),
                Err(err) => {
                    warn!("⚠️  Inquiry could not be stored: {}", err);
                    return Err(Arc::new(err));
                }
            }
        }
    };

    info!(reference = ?reference, "✅ Inquiry delivered");
    Ok(Receipt {
        reference,
        delivered_at: Utc::now(),
    })
}
