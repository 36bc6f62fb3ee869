use anyhow::Context;
use mergesignal_types::{PullSnapshotV1, SCHEMA_PULL_V1};

/// Parse the pull request snapshot handed over by the host.
pub fn parse_pull_snapshot(text: &str) -> anyhow::Result<PullSnapshotV1> {
    let pull: PullSnapshotV1 =
        serde_json::from_str(text).context("parse pull request snapshot")?;

    if let Some(schema) = pull.schema.as_deref()
        && schema != SCHEMA_PULL_V1
    {
        anyhow::bail!("unsupported pull request schema: {schema} (expected {SCHEMA_PULL_V1})");
    }

    Ok(pull)
}
