use std::{sync::Arc, time::Duration};

use tracing::{info, warn};

use bulk_core::{BulkActionDialog, Column, Rejection, RunContext};
use bulk_model::{BulkConfig, CompletionPolicy, DialogLabels, ItemKey, RunState};
use bulk_observe::{LoggerConfig, LoggerLevel, LoggerTimeZone, init_local_offset, init_logger};
use bulk_prometheus::{Encoder, PrometheusMetrics, TextEncoder};

#[derive(Debug, Clone)]
struct Resource {
    id: i64,
    name: String,
}

fn main() -> anyhow::Result<()> {
    // 0) local offset must be read while the process is still single-threaded
    init_local_offset();

    // 1) logger
    let cfg = LoggerConfig {
        level: LoggerLevel::new("info")?,
        tz: LoggerTimeZone::Local,
        ..Default::default()
    };
    init_logger(&cfg)?;
    info!("logger initialized");

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    rt.block_on(run())
}

async fn run() -> anyhow::Result<()> {
    // 2) metrics
    let metrics = PrometheusMetrics::new()?;
    let ctx = RunContext::new("delete-resource", Arc::new(metrics.clone()));

    // 3) dialog
    let resources: Vec<Resource> = (0..10)
        .map(|id| Resource {
            id,
            name: format!("resource-{id}"),
        })
        .collect();

    let labels = DialogLabels {
        title: "Delete resources".into(),
        prompt: Some("The following resources will be deleted.".into()),
        submit: "Delete".into(),
        submitting: "Deleting".into(),
        submitting_title: "Deleting resources".into(),
        confirm: Some("I understand this cannot be undone".into()),
        is_danger: true,
        ..Default::default()
    };
    let config = BulkConfig::default().with_completion(CompletionPolicy::ManualDismiss);

    let mut dialog = BulkActionDialog::new(resources, |r| ItemKey::Int(r.id), labels, config)?
        .with_columns(vec![
            Column::new("ID", |r: &Resource| r.id.to_string()),
            Column::new("Name", |r: &Resource| r.name.clone()),
        ])
        .with_error_columns(vec![Column::new("Name", |r: &Resource| r.name.clone())])
        .with_context(ctx)
        .on_close(|deleted| info!(count = deleted.len(), "deleted resources handed back"));

    println!("{}", dialog.table());

    // 4) confirm
    if let Some(confirm) = dialog.confirmation() {
        info!(%confirm, "ticking confirmation");
    }
    dialog.set_confirmed(true);

    // 5) progress observer
    let mut rx = dialog.subscribe();
    let observer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let snap = rx.borrow_and_update().clone();
            info!(
                settled = snap.settled,
                total = snap.total,
                has_error = snap.has_error,
                "progress"
            );
            if snap.state == RunState::Completed {
                break;
            }
        }
    });

    // 6) run a simulated delete; ids 2 and 7 are still referenced elsewhere
    let snap = dialog
        .submit(&|r: &Resource| {
            let id = r.id;
            async move {
                tokio::time::sleep(Duration::from_millis((id as u64 * 37 % 11) * 20)).await;
                if id == 2 || id == 7 {
                    return Err(Rejection::msg("conflict"));
                }
                Ok(())
            }
        })
        .await?;
    observer.await?;

    if snap.has_error {
        warn!(failed = snap.outcomes.failed_count(), "some resources were not deleted");
    }
    if let Some(progress) = dialog.progress() {
        println!("{progress}");
    }
    println!("{}", dialog.table());

    // 7) close
    let deleted = dialog.close();
    info!(
        ids = ?deleted.iter().map(|r| r.id).collect::<Vec<_>>(),
        "dialog closed"
    );

    // 8) metrics exposition
    let mut buf = Vec::new();
    TextEncoder::new().encode(&metrics.gather(), &mut buf)?;
    println!("{}", String::from_utf8_lossy(&buf));

    Ok(())
}
