//! Resolve commands: `khub model|dataset|competition|notebook-output <HANDLE>`.

use anyhow::{Context, Result};
use khub_core::handle::{HandleError, ResourceHandle};
use khub_core::{Registry, Resolution, ResolveRequest};
use std::str::FromStr;

use crate::cli::ResolveArgs;

/// Parse the handle, dispatch through `registry` and print the result.
pub fn run_resolve<H>(
    registry: &Registry<ResolveRequest<H>>,
    args: &ResolveArgs,
    json: bool,
) -> Result<()>
where
    H: ResourceHandle + FromStr<Err = HandleError>,
{
    let request = build_request::<H>(args)?;
    let resolution = registry
        .dispatch(&request)
        .with_context(|| format!("resolve {} {}", request.handle.kind(), request.handle))?;
    println!("{}", render(&resolution, json)?);
    Ok(())
}

fn build_request<H>(args: &ResolveArgs) -> Result<ResolveRequest<H>>
where
    H: ResourceHandle + FromStr<Err = HandleError>,
{
    let handle: H = args.handle.parse()?;
    let mut request = ResolveRequest::new(handle).force_download(args.force_download);
    if let Some(path) = &args.path {
        request = request.with_path(path.clone());
    }
    Ok(request)
}

/// `SIZE  LOCATION` (size `-` when unknown), or a JSON object.
fn render(resolution: &Resolution, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(resolution)?);
    }
    let size_str = resolution
        .size
        .map(|s| format!("{s}"))
        .unwrap_or_else(|| "-".to_string());
    Ok(format!("{}  {}", size_str, resolution.location))
}
