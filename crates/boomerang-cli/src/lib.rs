use anyhow::Context;
use boomerang_core::ResourceList;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// Where a clip comes from and where it lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPlan {
    pub url: String,
    pub destination: PathBuf,
}

/// Look `public_id` up in a listing and pick a destination inside `out_dir`.
///
/// The file is named `{asset_id}.{format}`, the same name the gallery page uses.
pub fn plan_download(
    list: &ResourceList,
    public_id: &str,
    out_dir: &Path,
) -> anyhow::Result<DownloadPlan> {
    let resource = list
        .find(public_id)
        .with_context(|| format!("No uploaded clip with public id '{}'", public_id))?;
    let url = resource
        .secure_url
        .clone()
        .with_context(|| format!("Clip '{}' has no delivery URL", public_id))?;

    let file_name = resource.download_file_name();
    if !is_plain_file_name(&file_name) {
        anyhow::bail!(
            "Refusing to write clip '{}' as '{}': not a plain file name",
            public_id,
            file_name
        );
    }

    Ok(DownloadPlan {
        url,
        destination: out_dir.join(file_name),
    })
}

/// A single normal path component with no separators of either platform.
fn is_plain_file_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

pub fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

/// Initialize tracing for CLI binaries. Logs go to stderr so stdout stays JSON.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
